//! Progress state and point-in-time snapshots.
//!
//! [`ProgressState`] is the counting half of a renderer: how many steps out of how
//! many are done, and when the work started. It knows nothing about terminals or
//! output. Every change goes through [`ProgressState::advance_to`], which validates
//! the new position before committing it, so a rejected update leaves the state as
//! it was.
//!
//! # Snapshots
//!
//! Rendering works from a [`ProgressSnapshot`], an owned copy of the state at one
//! instant with derived metrics (percentage, remaining-time estimate) computed on
//! demand.

use std::time::Duration;

use web_time::Instant;

use crate::{
    error::{Error, Result},
    format,
};

/// Elapsed time that must pass before a remaining-time estimate is shown.
///
/// Estimates taken from the first few samples swing wildly, so they are held back
/// until the rate has had time to settle.
pub const ESTIMATE_WARM_UP: Duration = Duration::from_secs(3);

/// Step counter for a single task.
///
/// `current` counts completed steps: `0` means nothing has been done yet and
/// `current == maximum` means the task is complete.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProgressState {
    maximum: u64,
    current: u64,
    start: Instant,
}

impl ProgressState {
    /// Creates a new state with `start_state` steps already completed.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidMaximum`] if `maximum` is zero.
    /// * [`Error::OutOfRange`] if `start_state` exceeds `maximum`.
    pub const fn new(maximum: u64, start_state: u64, start: Instant) -> Result<Self> {
        if maximum == 0 {
            return Err(Error::InvalidMaximum);
        }
        if start_state > maximum {
            return Err(Error::OutOfRange {
                value: start_state,
                maximum,
            });
        }
        Ok(Self {
            maximum,
            current: start_state,
            start,
        })
    }

    /// Gets the number of completed steps.
    #[must_use]
    pub const fn current(&self) -> u64 {
        self.current
    }

    /// Gets the total number of steps.
    #[must_use]
    pub const fn maximum(&self) -> u64 {
        self.maximum
    }

    /// Gets the instant the task started.
    #[must_use]
    pub const fn start(&self) -> Instant {
        self.start
    }

    /// Checks whether every step is complete.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.current == self.maximum
    }

    /// The position one step past the current one.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if the task is already complete.
    pub const fn next_position(&self) -> Result<u64> {
        if self.current >= self.maximum {
            return Err(Error::OutOfRange {
                value: self.current.saturating_add(1),
                maximum: self.maximum,
            });
        }
        Ok(self.current + 1)
    }

    /// Moves to `value` completed steps.
    ///
    /// Staying at the same position is allowed; moving backwards is not.
    ///
    /// # Errors
    ///
    /// * [`Error::OutOfRange`] if `value` exceeds the maximum.
    /// * [`Error::Regression`] if `value` is below the current position.
    pub const fn advance_to(&mut self, value: u64) -> Result<()> {
        if value > self.maximum {
            return Err(Error::OutOfRange {
                value,
                maximum: self.maximum,
            });
        }
        if value < self.current {
            return Err(Error::Regression {
                value,
                current: self.current,
            });
        }
        self.current = value;
        Ok(())
    }

    /// Time since the task started, as seen at `now`.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.start)
    }

    /// Creates a snapshot of the state as seen at `now`.
    #[must_use]
    pub fn snapshot(&self, now: Instant) -> ProgressSnapshot {
        ProgressSnapshot {
            current: self.current,
            maximum: self.maximum,
            elapsed: self.elapsed(now),
            finished: self.is_finished(),
        }
    }
}

/// A plain-data copy of a [`ProgressState`] at a specific instant.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressSnapshot {
    current: u64,
    maximum: u64,
    elapsed: Duration,
    finished: bool,
}

impl ProgressSnapshot {
    /// Returns the number of completed steps.
    #[must_use]
    pub const fn current(&self) -> u64 {
        self.current
    }

    /// Returns the total number of steps.
    #[must_use]
    pub const fn maximum(&self) -> u64 {
        self.maximum
    }

    /// Returns the time elapsed since the task started.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns whether every step is complete.
    #[must_use]
    pub const fn finished(&self) -> bool {
        self.finished
    }

    /// Returns the completion percentage, rounded to the nearest integer.
    #[must_use]
    pub const fn percent(&self) -> u64 {
        format::percent(self.current, self.maximum)
    }

    /// Estimates the time remaining from the average rate since start.
    ///
    /// Returns `None` until [`ESTIMATE_WARM_UP`] has passed, if no step has been
    /// completed yet, or if the estimate does not fit in a [`Duration`]. A finished
    /// task estimates zero.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn eta(&self) -> Option<Duration> {
        if self.current == 0 || self.elapsed <= ESTIMATE_WARM_UP {
            return None;
        }

        let remaining = self.maximum.saturating_sub(self.current) as f64;
        let ratio = remaining / self.current as f64;

        Duration::try_from_secs_f64(self.elapsed.as_secs_f64() * ratio).ok()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use web_time::Instant;

    use super::ProgressState;
    use crate::Error;

    /// Basic Lifecycle
    /// Verifies the counting state machine: New -> Advance -> Finished.
    #[test]
    fn test_basic_lifecycle() {
        let mut state = ProgressState::new(4, 0, Instant::now()).unwrap();
        assert!(!state.is_finished());

        state.advance_to(state.next_position().unwrap()).unwrap();
        assert_eq!(state.current(), 1);

        state.advance_to(4).unwrap();
        assert!(state.is_finished());
        assert!(matches!(
            state.next_position(),
            Err(Error::OutOfRange { value: 5, maximum: 4 })
        ));
    }

    /// Validation Before Commit
    /// Rejected values leave the position untouched.
    #[test]
    fn test_rejected_updates_keep_state() {
        let mut state = ProgressState::new(10, 3, Instant::now()).unwrap();

        assert!(matches!(
            state.advance_to(11),
            Err(Error::OutOfRange { value: 11, maximum: 10 })
        ));
        assert!(matches!(
            state.advance_to(2),
            Err(Error::Regression { value: 2, current: 3 })
        ));
        assert_eq!(state.current(), 3);

        // Re-reporting the same position is fine.
        state.advance_to(3).unwrap();
    }

    #[test]
    fn test_construction_errors() {
        let now = Instant::now();
        assert!(matches!(
            ProgressState::new(0, 0, now),
            Err(Error::InvalidMaximum)
        ));
        assert!(matches!(
            ProgressState::new(5, 6, now),
            Err(Error::OutOfRange { value: 6, maximum: 5 })
        ));
        assert!(ProgressState::new(5, 5, now).unwrap().is_finished());
    }

    /// ETA Warm-Up & Math
    /// Estimates appear strictly after the warm-up and scale with remaining work.
    #[test]
    fn test_eta() {
        let start = Instant::now();
        let mut state = ProgressState::new(10, 0, start).unwrap();

        let late = start + Duration::from_secs(5);
        assert!(state.snapshot(late).eta().is_none(), "no steps done yet");

        state.advance_to(1).unwrap();
        assert!(state.snapshot(start + Duration::from_secs(3)).eta().is_none());

        let snap = state.snapshot(start + Duration::from_secs(4));
        assert_eq!(snap.eta(), Some(Duration::from_secs(36)));
        assert_eq!(snap.percent(), 10);

        state.advance_to(10).unwrap();
        assert_eq!(state.snapshot(late).eta(), Some(Duration::ZERO));
    }

    #[test]
    fn test_elapsed_saturates() {
        let start = Instant::now();
        let state = ProgressState::new(1, 0, start + Duration::from_secs(1)).unwrap();
        assert_eq!(state.elapsed(start), Duration::ZERO);
    }
}
