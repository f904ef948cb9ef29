//! Property-based tests for line layout and the update contract.
//!
//! These check rules that must hold for any bounds, positions and terminal widths,
//! using a manual clock and an in-memory sink.

use std::time::Duration;

use pbar::{
    Error, FixedWidth, ManualClock, ProgressRenderer, ProgressState, RendererBuilder,
    build_output_line,
};
use proptest::prelude::*;
use web_time::Instant;

fn renderer(maximum: u64, width: usize) -> (ProgressRenderer<Vec<u8>, ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let bar = RendererBuilder::new(maximum)
        .with_width(FixedWidth(width))
        .with_clock(clock.clone())
        .with_sink(Vec::new())
        .build()
        .unwrap();
    (bar, clock)
}

/// Generates a maximum together with a valid position for it.
fn arb_bounds() -> impl Strategy<Value = (u64, u64)> {
    (1u64..10_000).prop_flat_map(|maximum| (Just(maximum), 0..=maximum))
}

proptest! {
    /// Percent Label
    /// The line always carries the rounded percentage of completed steps.
    #[test]
    fn prop_line_contains_percent((maximum, current) in arb_bounds(), width in 0usize..300) {
        let start = Instant::now();
        let state = ProgressState::new(maximum, current, start).unwrap();
        let line = build_output_line("", width, &state.snapshot(start));

        let expected = ((current as f64) * 100.0 / (maximum as f64)).round() as u64;
        prop_assert!(line.contains(&format!(" {expected}% in ")), "{line:?}");
        prop_assert!(line.starts_with('\r'));
        prop_assert!(!line.contains('\n'));
    }

    /// Width Budget
    /// The bar never pushes the line (minus the carriage return) past the terminal
    /// width; only text that is wider on its own can.
    #[test]
    fn prop_line_fits_width(
        (maximum, current) in arb_bounds(),
        width in 40usize..300,
        elapsed_ms in 0u64..100_000,
    ) {
        let start = Instant::now();
        let state = ProgressState::new(maximum, current, start).unwrap();
        let snapshot = state.snapshot(start + Duration::from_millis(elapsed_ms));
        let line = build_output_line("title ", width, &snapshot);

        let total = line.chars().count() - 1;
        let text = line.chars().filter(|c| *c != '#').count() - 1;
        prop_assert!(total <= width.max(text), "{total} > {width}: {line:?}");
    }

    /// Out Of Range Rejection
    /// Overshooting fails and leaves the position untouched.
    #[test]
    fn prop_out_of_range_keeps_state(
        (maximum, current) in arb_bounds(),
        overshoot in 1u64..1_000,
    ) {
        let (mut bar, _clock) = renderer(maximum, 80);
        bar.set_position(current).unwrap();

        let result = bar.set_position(maximum + overshoot);
        prop_assert!(
            matches!(result, Err(Error::OutOfRange { .. })),
            "expected OutOfRange, got {result:?}"
        );
        prop_assert_eq!(bar.current(), current);
    }

    /// Completion Always Renders
    /// However fast the loop, the final position is drawn and ends with a line feed.
    #[test]
    fn prop_completion_renders(maximum in 1u64..500, interval_ms in 0u64..5_000) {
        let clock = ManualClock::new();
        let mut bar = RendererBuilder::new(maximum)
            .with_width(FixedWidth(80))
            .with_clock(clock)
            .with_sink(Vec::new())
            .with_min_refresh_interval(Duration::from_millis(interval_ms))
            .build()
            .unwrap();

        for _ in 0..maximum {
            bar.tick().unwrap();
        }

        let out = String::from_utf8(bar.into_inner()).unwrap();
        prop_assert!(out.ends_with(" 100% in 0:00:00\n"), "{out:?}");
        prop_assert_eq!(out.matches('\n').count(), 1);
    }

    /// Throttle Bound
    /// With a frozen clock, every non-final update after the first is suppressed.
    #[test]
    fn prop_frozen_clock_renders_twice_at_most(maximum in 2u64..500) {
        let (mut bar, _clock) = renderer(maximum, 80);
        for _ in 0..maximum - 1 {
            bar.tick().unwrap();
        }
        let before = bar.get_ref().len();
        prop_assert_eq!(String::from_utf8_lossy(bar.get_ref()).matches('\r').count(), 1);

        bar.tick().unwrap();
        prop_assert!(bar.get_ref().len() > before);
    }
}

/// Warm-Up Boundary
/// The estimate shows strictly after three seconds and never before.
#[test]
fn test_estimate_threshold() {
    let (mut bar, clock) = renderer(10, 80);
    bar.tick().unwrap();

    clock.advance(Duration::from_secs(3));
    assert!(!bar.build_output_line().contains("remaining"));

    clock.advance(Duration::from_millis(1));
    let line = bar.build_output_line();
    assert!(line.ends_with(" - 0:00:27 remaining"), "{line:?}");
}
