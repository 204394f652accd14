use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { origin: Vec2::new(x, y), size: Vec2::new(w, h) }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    /// Half-open containment: `[min, max)`.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.y >= self.origin.y && p.x < max.x && p.y < max.y
    }

    /// Converts an absolute point into this rect's local coordinates.
    ///
    /// The result is not clamped; widgets decide how to treat points outside.
    #[inline]
    pub fn local(self, p: Vec2) -> Vec2 {
        p - self.origin
    }

    /// Splits off a band of height `h` from the top.
    ///
    /// Returns `(top, rest)`. `h` is clamped to the rect's height.
    pub fn split_top(self, h: f32) -> (Rect, Rect) {
        let h = h.clamp(0.0, self.size.y.max(0.0));
        let top = Rect::new(self.origin.x, self.origin.y, self.size.x, h);
        let rest = Rect::new(self.origin.x, self.origin.y + h, self.size.x, self.size.y - h);
        (top, rest)
    }

    /// Splits the rect into two halves side by side.
    pub fn split_half_x(self) -> (Rect, Rect) {
        let w = self.size.x * 0.5;
        (
            Rect::new(self.origin.x, self.origin.y, w, self.size.y),
            Rect::new(self.origin.x + w, self.origin.y, self.size.x - w, self.size.y),
        )
    }
}
