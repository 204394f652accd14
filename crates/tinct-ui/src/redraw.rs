use std::cell::Cell;

/// Coalescing "please repaint me" flag.
///
/// Any number of [`request`](Self::request) calls within one turn leave a
/// single pending repaint; the widget's `paint` clears it with
/// [`take`](Self::take). Uses a `Cell` so `paint(&self)` can acknowledge it.
#[derive(Debug, Default)]
pub struct RedrawRequest {
    pending: Cell<bool>,
}

impl RedrawRequest {
    /// A request that starts pending, so a fresh widget gets its first paint.
    pub fn pending() -> Self {
        Self { pending: Cell::new(true) }
    }

    #[inline]
    pub fn request(&self) {
        self.pending.set(true);
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Returns whether a repaint was pending and clears it.
    #[inline]
    pub fn take(&self) -> bool {
        self.pending.replace(false)
    }
}
