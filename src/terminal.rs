//! Terminal width detection.
//!
//! The renderer asks a [`TerminalWidthProvider`] for the column count once, when it
//! is built. A provider that cannot tell (output is not a TTY, unsupported platform)
//! answers `None` and the renderer falls back to [`DEFAULT_WIDTH`].

/// Column count used when the terminal width cannot be determined.
pub const DEFAULT_WIDTH: usize = 80;

/// Reports the width of the terminal in columns.
pub trait TerminalWidthProvider {
    /// Returns the column count, or `None` if it cannot be determined.
    fn columns(&self) -> Option<usize>;
}

/// Queries the controlling terminal.
#[derive(Clone, Copy, Debug, Default)]
pub struct TermSize;

impl TerminalWidthProvider for TermSize {
    fn columns(&self) -> Option<usize> {
        term_size::dimensions().map(|(w, _)| w)
    }
}

/// Always reports the same width. Useful for tests and for output that is not a
/// terminal but still has a known line length.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FixedWidth(pub usize);

impl TerminalWidthProvider for FixedWidth {
    fn columns(&self) -> Option<usize> {
        Some(self.0)
    }
}

impl<F> TerminalWidthProvider for F
where
    F: Fn() -> Option<usize>,
{
    fn columns(&self) -> Option<usize> {
        self()
    }
}

/// Resolves the width to lay out against, falling back to [`DEFAULT_WIDTH`].
///
/// A reported width of zero counts as unknown.
pub fn resolve_width(provider: &dyn TerminalWidthProvider) -> usize {
    match provider.columns() {
        Some(columns) if columns > 0 => columns,
        reported => {
            log::debug!(
                "terminal width unavailable ({reported:?}), using {DEFAULT_WIDTH} columns"
            );
            DEFAULT_WIDTH
        }
    }
}
