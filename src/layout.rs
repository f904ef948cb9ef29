//! Layout of a single progress line.
//!
//! A line looks like
//!
//! ```text
//! \r{title}[#####     ] {percent}% in {elapsed}{ - {remaining} remaining}
//! ```
//!
//! The bar takes whatever width is left once the text fields are accounted for.
//! Unfilled cells are not drawn, so the closing bracket moves right as the bar
//! fills. Widths are measured in `char`s.

use crate::{format::format_duration, state::ProgressSnapshot};

/// Fill character for completed cells.
pub const FILL: char = '#';

/// Cells taken by the fixed decoration (brackets, spaces, `%`, `in`) plus margin.
pub const DECORATION_WIDTH: usize = 12;

/// Cells held back while no remaining-time suffix is shown.
///
/// This matches the usual width of ` - H:MM:SS remaining`, so the bar keeps its
/// scale when the estimate appears after the warm-up.
pub const ESTIMATE_RESERVE: usize = 20;

/// Builds the line for `snapshot`, laid out for a terminal `width` columns wide.
///
/// `title` is printed verbatim in front of the bar and should already carry its
/// trailing separator.
///
/// ```
/// use std::time::Duration;
/// use pbar::{ProgressState, build_output_line};
/// use web_time::Instant;
///
/// let start = Instant::now();
/// let mut state = ProgressState::new(10, 0, start).unwrap();
/// state.advance_to(1).unwrap();
///
/// let line = build_output_line("", 80, &state.snapshot(start));
/// assert_eq!(line, "\r[####] 10% in 0:00:00");
/// ```
#[must_use]
pub fn build_output_line(title: &str, width: usize, snapshot: &ProgressSnapshot) -> String {
    let percent = snapshot.percent();
    let elapsed = format_duration(snapshot.elapsed());

    let (suffix, reserve) = match snapshot.eta() {
        Some(eta) => (format!(" - {} remaining", format_duration(eta)), 0),
        None => (String::new(), ESTIMATE_RESERVE),
    };

    let overhead = DECORATION_WIDTH
        + reserve
        + title.chars().count()
        + elapsed.chars().count()
        + suffix.chars().count();
    let filled = filled_cells(percent, width.saturating_sub(overhead));

    let mut line = String::with_capacity(width.max(overhead) + 2);
    line.push('\r');
    line.push_str(title);
    line.push('[');
    line.extend(std::iter::repeat_n(FILL, filled));
    line.push(']');
    line.push_str(&format!(" {percent}% in {elapsed}"));
    line.push_str(&suffix);
    line
}

/// Cells to fill out of `capacity` at `percent` completion.
#[allow(clippy::cast_possible_truncation)]
const fn filled_cells(percent: u64, capacity: usize) -> usize {
    (percent as u128 * capacity as u128 / 100) as usize
}
