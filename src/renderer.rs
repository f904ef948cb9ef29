//! The throttled single-line renderer.
//!
//! A [`ProgressRenderer`] owns a [`ProgressState`] and redraws one terminal line in
//! place every time the state changes, at most once per refresh interval. The line
//! starts with a carriage return so each redraw overwrites the previous one. When
//! the last step completes the line is drawn one final time, regardless of the
//! interval, followed by a line feed. After that the renderer writes nothing more.
//!
//! # Positions
//!
//! Positions count completed steps. `0` is "nothing done" and `maximum` is "done".
//! Loops that know the zero-based index of the step they just finished can use
//! [`ProgressRenderer::complete_step`] instead of adding one themselves.
//!
//! ```no_run
//! # fn main() -> pbar::Result<()> {
//! let files = ["a.txt", "b.txt", "c.txt"];
//! let mut bar = pbar::ProgressRenderer::with_title(files.len() as u64, "hashing")?;
//! for (i, _file) in files.iter().enumerate() {
//!     // ... work ...
//!     bar.complete_step(i as u64)?;
//! }
//! # Ok(())
//! # }
//! ```

use std::{
    fmt,
    io::{Stdout, Write},
    time::Duration,
};

use compact_str::CompactString;
use web_time::Instant;

use crate::{
    builder::RendererBuilder,
    clock::{Clock, SystemClock},
    error::Result,
    layout::build_output_line,
    state::{ProgressSnapshot, ProgressState},
};

/// Draws a self-updating progress line for a single task.
///
/// `W` is the output sink (standard output unless configured through
/// [`RendererBuilder`]) and `C` the clock.
///
/// The renderer is a plain single-owner value: updates take `&mut self`, and
/// sharing one between threads needs external synchronization.
pub struct ProgressRenderer<W = Stdout, C = SystemClock> {
    state: ProgressState,
    title: CompactString,
    width: usize,
    min_refresh_interval: Duration,

    last_render: Option<Instant>,
    last_line: Option<String>,
    completed: bool,

    sink: W,
    clock: C,
}

impl ProgressRenderer {
    /// Creates a renderer drawing to standard output for `maximum` steps.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidMaximum`](crate::Error::InvalidMaximum) if `maximum` is zero.
    pub fn new(maximum: u64) -> Result<Self> {
        RendererBuilder::new(maximum).build()
    }

    /// Creates a renderer drawing to standard output with a title in front of the bar.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidMaximum`](crate::Error::InvalidMaximum) if `maximum` is zero.
    pub fn with_title(maximum: u64, title: impl Into<CompactString>) -> Result<Self> {
        RendererBuilder::new(maximum).with_title(title).build()
    }

    /// Starts a [`RendererBuilder`] for `maximum` steps.
    #[must_use]
    pub fn builder(maximum: u64) -> RendererBuilder {
        RendererBuilder::new(maximum)
    }
}

impl<W, C> ProgressRenderer<W, C> {
    pub(crate) const fn from_parts(
        state: ProgressState,
        title: CompactString,
        width: usize,
        min_refresh_interval: Duration,
        sink: W,
        clock: C,
    ) -> Self {
        Self {
            state,
            title,
            width,
            min_refresh_interval,
            last_render: None,
            last_line: None,
            completed: false,
            sink,
            clock,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Gets the number of completed steps.
    #[must_use]
    pub const fn current(&self) -> u64 {
        self.state.current()
    }

    /// Gets the total number of steps.
    #[must_use]
    pub const fn maximum(&self) -> u64 {
        self.state.maximum()
    }

    /// Checks whether every step is complete.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Gets the title as printed, including its trailing separator.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Gets the column count the line is laid out for.
    #[must_use]
    pub const fn terminal_width(&self) -> usize {
        self.width
    }

    /// Gets the minimum interval between two redraws.
    #[must_use]
    pub const fn min_refresh_interval(&self) -> Duration {
        self.min_refresh_interval
    }

    /// Returns the last line written to the sink, without the final line feed.
    #[must_use]
    pub fn last_line(&self) -> Option<&str> {
        self.last_line.as_deref()
    }

    /// Gets a reference to the output sink.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Consumes the renderer and returns the output sink.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write, C: Clock> ProgressRenderer<W, C> {
    /// Advances by one step, or jumps to `value` completed steps.
    ///
    /// `update(None)` is [`tick`](Self::tick) and `update(Some(n))` is
    /// [`set_position(n)`](Self::set_position).
    ///
    /// The line is redrawn if more than the refresh interval has passed since the
    /// previous redraw, or if this call completes the task. Completing the task also
    /// ends the line with a line feed.
    ///
    /// # Errors
    ///
    /// * [`Error::OutOfRange`](crate::Error::OutOfRange) if the new position exceeds
    ///   the maximum.
    /// * [`Error::Regression`](crate::Error::Regression) if the new position is below
    ///   the current one.
    /// * [`Error::Io`](crate::Error::Io) if writing to the sink fails.
    ///
    /// The position is unchanged after the first two.
    pub fn update(&mut self, value: Option<u64>) -> Result<()> {
        let target = match value {
            Some(value) => value,
            None => self.state.next_position()?,
        };
        self.state.advance_to(target)?;

        if self.completed {
            return Ok(());
        }

        let now = self.clock.now();
        let finished = self.state.is_finished();
        let due = self.last_render.is_none_or(|last| {
            now.saturating_duration_since(last) > self.min_refresh_interval
        });

        if due || finished {
            self.render(now, finished)
        } else {
            log::trace!("throttled redraw at {target}/{}", self.state.maximum());
            Ok(())
        }
    }

    /// Advances by one step. See [`update`](Self::update).
    ///
    /// # Errors
    ///
    /// Same as [`update`](Self::update).
    pub fn tick(&mut self) -> Result<()> {
        self.update(None)
    }

    /// Sets the number of completed steps. See [`update`](Self::update).
    ///
    /// # Errors
    ///
    /// Same as [`update`](Self::update).
    pub fn set_position(&mut self, completed: u64) -> Result<()> {
        self.update(Some(completed))
    }

    /// Marks the step with zero-based `index` as done, i.e. sets the position to
    /// `index + 1`.
    ///
    /// # Errors
    ///
    /// Same as [`update`](Self::update); `index == maximum` is out of range.
    pub fn complete_step(&mut self, index: u64) -> Result<()> {
        self.update(Some(index.saturating_add(1)))
    }

    /// Creates a snapshot of the state as seen by the renderer's clock.
    #[must_use]
    pub fn snapshot(&self) -> ProgressSnapshot {
        self.state.snapshot(self.clock.now())
    }

    /// Builds the line for the current state without writing it.
    #[must_use]
    pub fn build_output_line(&self) -> String {
        build_output_line(&self.title, self.width, &self.snapshot())
    }

    fn render(&mut self, now: Instant, finished: bool) -> Result<()> {
        let line = build_output_line(&self.title, self.width, &self.state.snapshot(now));
        log::trace!("redraw: {line:?}");

        self.sink.write_all(line.as_bytes())?;
        if finished {
            self.sink.write_all(b"\n")?;
        }
        self.sink.flush()?;

        self.last_render = Some(now);
        self.last_line = Some(line);
        if finished {
            self.completed = true;
            log::debug!(
                "{}completed {} steps in {:?}",
                self.title,
                self.state.maximum(),
                self.state.elapsed(now)
            );
        }
        Ok(())
    }
}

impl<W, C> fmt::Debug for ProgressRenderer<W, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressRenderer")
            .field("title", &self.title)
            .field("current", &self.state.current())
            .field("maximum", &self.state.maximum())
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}
