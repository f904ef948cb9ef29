//! Iterator adapters that draw a progress line while a loop runs.
//!
//! This module provides the [`ProgressIteratorExt`] trait, which adds helper methods
//! to any [`ExactSizeIterator`]. The iterator's length becomes the renderer's
//! maximum, so a loop gets a bar with a single method call.
//!
//! # Counting
//!
//! A step counts as done once the loop body has finished with it, which is when the
//! *next* item is requested. The final tick, and with it the completion redraw and
//! line feed, happens when the loop asks for an item past the end.
//!
//! # Errors
//!
//! An iterator cannot report rendering failures to the loop. If the renderer
//! rejects an update or the sink fails, the failure is logged and the adapter stops
//! drawing; the items themselves keep flowing.
//!
//! # Example
//!
//! ```no_run
//! use pbar::ProgressIteratorExt;
//!
//! for _chunk in vec![1, 2, 3].into_iter().progress_bar("chunks") {
//!     // ...
//! }
//! ```

use std::io::{Stdout, Write};

use compact_str::CompactString;

use crate::{
    builder::RendererBuilder,
    clock::{Clock, SystemClock},
    renderer::ProgressRenderer,
};

/// An iterator adapter that ticks a [`ProgressRenderer`] as items are consumed.
pub struct RenderedIter<I, W = Stdout, C = SystemClock> {
    iter: I,
    renderer: Option<ProgressRenderer<W, C>>,
    pending: bool,
}

impl<I, W, C> RenderedIter<I, W, C> {
    /// Creates a new `RenderedIter`.
    ///
    /// Note: This is usually constructed via [`ProgressIteratorExt`] methods.
    pub const fn new(iter: I, renderer: ProgressRenderer<W, C>) -> Self {
        Self {
            iter,
            renderer: Some(renderer),
            pending: false,
        }
    }

    /// Wraps `iter` without drawing anything.
    const fn silent(iter: I) -> Self {
        Self {
            iter,
            renderer: None,
            pending: false,
        }
    }

    /// Returns the renderer, unless drawing was stopped or never started.
    #[must_use]
    pub const fn renderer(&self) -> Option<&ProgressRenderer<W, C>> {
        self.renderer.as_ref()
    }

    /// Consumes the adapter and returns the renderer, if any.
    #[must_use]
    pub fn into_renderer(self) -> Option<ProgressRenderer<W, C>> {
        self.renderer
    }
}

impl<I, W: Write, C: Clock> RenderedIter<I, W, C> {
    fn tick(&mut self) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        if let Err(err) = renderer.tick() {
            log::warn!("progress rendering stopped: {err}");
            self.renderer = None;
        }
    }
}

impl<I: Iterator, W: Write, C: Clock> Iterator for RenderedIter<I, W, C> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending {
            self.tick();
        }

        let item = self.iter.next();
        self.pending = item.is_some();
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Extension trait to draw a progress line for any [`ExactSizeIterator`].
pub trait ProgressIteratorExt: Sized {
    /// Wraps the iterator in a renderer drawing to standard output.
    ///
    /// An empty iterator draws nothing.
    fn progress_bar(self, title: impl Into<CompactString>) -> RenderedIter<Self>;

    /// Wraps the iterator using an existing renderer.
    ///
    /// The renderer's maximum should match the iterator's length; extra items are
    /// passed through once the renderer rejects further ticks.
    fn progress_with<W: Write, C: Clock>(
        self,
        renderer: ProgressRenderer<W, C>,
    ) -> RenderedIter<Self, W, C>;
}

impl<I: ExactSizeIterator> ProgressIteratorExt for I {
    fn progress_bar(self, title: impl Into<CompactString>) -> RenderedIter<Self> {
        let maximum = self.len() as u64;
        if maximum == 0 {
            return RenderedIter::silent(self);
        }

        match RendererBuilder::new(maximum).with_title(title).build() {
            Ok(renderer) => RenderedIter::new(self, renderer),
            Err(err) => {
                log::warn!("progress rendering disabled: {err}");
                RenderedIter::silent(self)
            }
        }
    }

    fn progress_with<W: Write, C: Clock>(
        self,
        renderer: ProgressRenderer<W, C>,
    ) -> RenderedIter<Self, W, C> {
        RenderedIter::new(self, renderer)
    }
}
