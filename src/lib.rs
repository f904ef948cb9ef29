//! # `pbar`
//!
//! A minimal, single-line terminal progress bar.
//!
//! `pbar` draws one line that redraws itself in place, showing how far a task with a
//! known number of steps has come, how long it has been running, and, once enough
//! time has passed to make a guess, how long it will take to finish:
//!
//! ```text
//! copying [##################                  ] 45% in 0:00:12 - 0:00:15 remaining
//! ```
//!
//! It is designed to be:
//!
//! * **Small**: One renderer per task, no background threads, no global state.
//! * **Quiet**: Redraws are throttled so tight loops do not flood the terminal.
//! * **Testable**: The output sink, the clock and the terminal width are injected,
//!   so rendering is deterministic under test.
//!
//! ## Modules
//!
//! * [`renderer`]: The [`ProgressRenderer`] update and redraw logic.
//! * [`builder`]: Fluent interface for configuring a [`ProgressRenderer`].
//! * [`layout`]: How a line is laid out to fit the terminal width.
//! * [`state`]: The step counter and its [`ProgressSnapshot`].
//! * [`clock`]: Time sources, including a [`ManualClock`] for tests.
//! * [`terminal`]: Terminal width detection.
//! * [`iter`]: Extension traits for drawing a bar over an iterator.
//!
//! ## Example
//!
//! ```no_run
//! # fn main() -> pbar::Result<()> {
//! let mut bar = pbar::ProgressRenderer::with_title(40, "working")?;
//! for _ in 0..40 {
//!     // ... one step of work ...
//!     bar.tick()?;
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod builder;
pub mod clock;
pub mod error;
pub mod format;
pub mod iter;
pub mod layout;
pub mod renderer;
pub mod state;
pub mod terminal;

pub use builder::{DEFAULT_MIN_REFRESH_INTERVAL, RendererBuilder};
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Error, Result};
pub use format::format_duration;
pub use iter::{ProgressIteratorExt, RenderedIter};
pub use layout::build_output_line;
pub use renderer::ProgressRenderer;
pub use state::{ProgressSnapshot, ProgressState};
pub use terminal::{DEFAULT_WIDTH, FixedWidth, TermSize, TerminalWidthProvider};
