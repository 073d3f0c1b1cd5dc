//! Redraw notification for whatever draws the animated polygon.

use std::cell::Cell;

/// Something that can be told its contents changed.
pub trait RenderTarget {
    fn mark_dirty(&self);
}

/// Minimal render target: remembers that a redraw is pending and counts requests.
#[derive(Debug, Default)]
pub struct Layer {
    dirty: Cell<bool>,
    requests: Cell<u64>,
}

impl Layer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Clear the pending flag, returning whether a redraw was requested.
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    /// Total `mark_dirty` calls so far.
    pub fn requests(&self) -> u64 {
        self.requests.get()
    }
}

impl RenderTarget for Layer {
    fn mark_dirty(&self) {
        self.dirty.set(true);
        self.requests.set(self.requests.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_dirty_resets_flag_but_not_count() {
        let layer = Layer::new();
        assert!(!layer.take_dirty());
        layer.mark_dirty();
        layer.mark_dirty();
        assert!(layer.is_dirty());
        assert!(layer.take_dirty());
        assert!(!layer.is_dirty());
        assert_eq!(layer.requests(), 2);
    }
}
