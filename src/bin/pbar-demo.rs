//! Draws a few progress bars to show the different ways of driving a renderer.
//!
//! Run with `cargo run --features demo --bin pbar-demo`. Set `RUST_LOG=debug` to see
//! the renderer's log output on stderr.

use std::{thread::sleep, time::Duration};

use pbar::{ProgressIteratorExt, ProgressRenderer};

const STEPS: u64 = 40;

fn main() -> pbar::Result<()> {
    env_logger::init();

    // Zero-based loop index: the step just finished.
    let mut bar = ProgressRenderer::with_title(STEPS, "explicit update")?;
    for i in 0..STEPS {
        sleep(Duration::from_millis(100));
        bar.complete_step(i)?;
    }

    let mut bar = ProgressRenderer::with_title(STEPS, "implicit update by 1")?;
    for _ in 0..STEPS {
        sleep(Duration::from_millis(100));
        bar.tick()?;
    }

    for _ in (0..40u32).progress_bar("iterator") {
        sleep(Duration::from_millis(100));
    }

    // Slow enough for the remaining-time estimate to show up.
    let mut bar = ProgressRenderer::with_title(4, "slow updates")?;
    for _ in 0..4 {
        sleep(Duration::from_millis(3_800));
        bar.tick()?;
    }

    Ok(())
}
