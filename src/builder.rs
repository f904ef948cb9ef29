//! Fluent interface for constructing [`ProgressRenderer`] instances.
//!
//! [`ProgressRenderer::new`] and [`ProgressRenderer::with_title`] cover the common
//! case of drawing to standard output. The [`RendererBuilder`] exposes everything
//! else:
//!
//! * **Resuming:** start from a number of steps that were already completed.
//! * **Throttling:** change the minimum interval between redraws.
//! * **Injected collaborators:** supply the output sink, the clock and the terminal
//!   width source. Tests use this to render into a `Vec<u8>` with a
//!   [`ManualClock`](crate::ManualClock) and a [`FixedWidth`](crate::FixedWidth).
//!
//! ```
//! use std::time::Duration;
//! use pbar::{FixedWidth, ManualClock, RendererBuilder};
//!
//! let mut bar = RendererBuilder::new(3)
//!     .with_title("copy")
//!     .with_width(FixedWidth(60))
//!     .with_clock(ManualClock::new())
//!     .with_sink(Vec::new())
//!     .with_min_refresh_interval(Duration::ZERO)
//!     .build()
//!     .unwrap();
//!
//! bar.tick().unwrap();
//! assert_eq!(bar.last_line(), Some("\rcopy [#####] 33% in 0:00:00"));
//! ```

use std::{
    io::{self, Stdout},
    time::Duration,
};

use compact_str::CompactString;

use crate::{
    clock::{Clock, SystemClock},
    error::Result,
    renderer::ProgressRenderer,
    state::ProgressState,
    terminal::{TermSize, TerminalWidthProvider, resolve_width},
};

/// Default minimum interval between two redraws.
pub const DEFAULT_MIN_REFRESH_INTERVAL: Duration = Duration::from_millis(100);

/// A builder for [`ProgressRenderer`] instances.
///
/// Defaults: no title, nothing completed yet, a 100 ms refresh interval, the width of
/// the controlling terminal, the system clock, and standard output.
pub struct RendererBuilder<W = Stdout, C = SystemClock> {
    maximum: u64,
    title: Option<CompactString>,
    start_state: u64,
    min_refresh_interval: Duration,
    width: Box<dyn TerminalWidthProvider>,
    clock: C,
    sink: W,
}

impl RendererBuilder {
    /// Starts building a renderer for a task of `maximum` steps.
    #[must_use]
    pub fn new(maximum: u64) -> Self {
        Self {
            maximum,
            title: None,
            start_state: 0,
            min_refresh_interval: DEFAULT_MIN_REFRESH_INTERVAL,
            width: Box::new(TermSize),
            clock: SystemClock,
            sink: io::stdout(),
        }
    }
}

impl<W, C> RendererBuilder<W, C> {
    /// Sets the label printed in front of the bar.
    ///
    /// An empty title is the same as no title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<CompactString>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the number of steps already completed when the renderer is built.
    #[must_use]
    pub const fn with_start_state(mut self, start_state: u64) -> Self {
        self.start_state = start_state;
        self
    }

    /// Sets the minimum time that must pass between two redraws.
    ///
    /// The final redraw, when the task completes, ignores this interval.
    #[must_use]
    pub const fn with_min_refresh_interval(mut self, interval: Duration) -> Self {
        self.min_refresh_interval = interval;
        self
    }

    /// Sets where the terminal width is read from.
    #[must_use]
    pub fn with_width(mut self, provider: impl TerminalWidthProvider + 'static) -> Self {
        self.width = Box::new(provider);
        self
    }

    /// Sets the clock used for elapsed time and throttling.
    #[must_use]
    pub fn with_clock<C2: Clock>(self, clock: C2) -> RendererBuilder<W, C2> {
        RendererBuilder {
            maximum: self.maximum,
            title: self.title,
            start_state: self.start_state,
            min_refresh_interval: self.min_refresh_interval,
            width: self.width,
            clock,
            sink: self.sink,
        }
    }

    /// Sets the writer that rendered lines go to.
    #[must_use]
    pub fn with_sink<W2: io::Write>(self, sink: W2) -> RendererBuilder<W2, C> {
        RendererBuilder {
            maximum: self.maximum,
            title: self.title,
            start_state: self.start_state,
            min_refresh_interval: self.min_refresh_interval,
            width: self.width,
            clock: self.clock,
            sink,
        }
    }
}

impl<W: io::Write, C: Clock> RendererBuilder<W, C> {
    /// Consumes the builder and returns the renderer.
    ///
    /// The start time is read from the clock and the terminal width is resolved
    /// here, once, for the lifetime of the renderer.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidMaximum`](crate::Error::InvalidMaximum) if `maximum` is zero.
    /// * [`Error::OutOfRange`](crate::Error::OutOfRange) if the start state exceeds
    ///   `maximum`.
    pub fn build(self) -> Result<ProgressRenderer<W, C>> {
        let state = ProgressState::new(self.maximum, self.start_state, self.clock.now())?;
        let width = resolve_width(self.width.as_ref());
        let title = normalize_title(self.title);

        Ok(ProgressRenderer::from_parts(
            state,
            title,
            width,
            self.min_refresh_interval,
            self.sink,
            self.clock,
        ))
    }
}

/// Adds the separator space after a non-empty title.
fn normalize_title(title: Option<CompactString>) -> CompactString {
    match title {
        Some(mut title) if !title.is_empty() => {
            title.push(' ');
            title
        }
        _ => CompactString::default(),
    }
}
