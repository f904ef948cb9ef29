//! Text formatting helpers for the progress line.

use std::time::Duration;

/// Formats a duration as `H:MM:SS`, rounded to the nearest second.
///
/// Hours are not wrapped into days, so 26 hours read `26:00:00`.
///
/// ```
/// use std::time::Duration;
/// use pbar::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(2_600)), "0:00:03");
/// assert_eq!(format_duration(Duration::from_secs(3_725)), "1:02:05");
/// ```
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let total = rounded_secs(duration);
    let hours = total / 3600;
    let minutes = (total / 60) % 60;
    let seconds = total % 60;
    format!("{hours}:{minutes:02}:{seconds:02}")
}

/// Whole seconds with halves rounded up.
const fn rounded_secs(duration: Duration) -> u64 {
    let secs = duration.as_secs();
    if duration.subsec_nanos() >= 500_000_000 {
        secs + 1
    } else {
        secs
    }
}

/// Integer completion percentage of `current` out of `maximum`, rounded half up.
///
/// Returns `0` for a zero `maximum`.
#[must_use]
pub const fn percent(current: u64, maximum: u64) -> u64 {
    if maximum == 0 {
        return 0;
    }
    let scaled = current as u128 * 200 + maximum as u128;
    #[allow(clippy::cast_possible_truncation)]
    let rounded = (scaled / (maximum as u128 * 2)) as u64;
    rounded
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{format_duration, percent};

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::ZERO), "0:00:00");
        assert_eq!(format_duration(Duration::from_millis(499)), "0:00:00");
        assert_eq!(format_duration(Duration::from_millis(500)), "0:00:01");
        assert_eq!(format_duration(Duration::from_secs(27)), "0:00:27");
        assert_eq!(format_duration(Duration::from_secs(59 * 60 + 59)), "0:59:59");
        assert_eq!(format_duration(Duration::from_secs(3600)), "1:00:00");
        assert_eq!(format_duration(Duration::from_secs(26 * 3600)), "26:00:00");
    }

    /// Rounding Edges
    /// Percentages round half up and hit 100 only near completion.
    #[test]
    fn test_percent() {
        assert_eq!(percent(0, 10), 0);
        assert_eq!(percent(1, 10), 10);
        assert_eq!(percent(1, 8), 13); // 12.5
        assert_eq!(percent(98, 99), 99);
        assert_eq!(percent(99, 99), 100);
        assert_eq!(percent(199, 200), 100); // 99.5
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(5, 0), 0);
        assert_eq!(percent(u64::MAX, u64::MAX), 100);
    }
}
