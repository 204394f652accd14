use super::Vec2;

// Absorbs the float error of `index * scale / scale` so a position produced
// by `to_display` maps back onto the same index.
const INDEX_EPSILON: f32 = 1e-3;

/// Per-axis ratio between a widget's on-screen size and its raster's native
/// resolution.
///
/// Recomputed from scratch whenever the widget's bounds change. The mapping
/// functions take the factor explicitly, so there is no hidden shared
/// multiplier to keep in sync.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScaleFactor {
    pub x: f32,
    pub y: f32,
}

impl ScaleFactor {
    /// Native size and display size coincide.
    pub const IDENTITY: Self = Self { x: 1.0, y: 1.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// `display / native` on each axis.
    ///
    /// An axis where either size is non-positive or non-finite falls back to
    /// `1.0`; a widget that has not been laid out yet behaves as if it were
    /// drawn at native resolution.
    pub fn between(native: Vec2, display: Vec2) -> Self {
        Self { x: axis_ratio(native.x, display.x), y: axis_ratio(native.y, display.y) }
    }

    /// Maps a display-space point to a raster index, clamped into
    /// `[0, native_w - 1] × [0, native_h - 1]`.
    ///
    /// Never produces an out-of-range index, even when the point lies outside
    /// the widget or the factor is stale.
    pub fn to_raster_index(self, p: Vec2, native: (usize, usize)) -> (usize, usize) {
        (index_on_axis(p.x, self.x, native.0), index_on_axis(p.y, self.y, native.1))
    }

    /// Maps a raster index back to the display-space position of its top-left corner.
    #[inline]
    pub fn to_display(self, index: (usize, usize)) -> Vec2 {
        Vec2::new(index.0 as f32 * self.x, index.1 as f32 * self.y)
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

fn axis_ratio(native: f32, display: f32) -> f32 {
    let usable = |v: f32| v.is_finite() && v > 0.0;
    if usable(native) && usable(display) { display / native } else { 1.0 }
}

fn index_on_axis(p: f32, scale: f32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let raw = (p / scale + INDEX_EPSILON).floor();
    // `!(raw > 0.0)` also catches NaN.
    if !(raw > 0.0) { 0 } else { (raw as usize).min(len - 1) }
}

/// Clamps a local point into `[0, w - 1] × [0, h - 1]`.
///
/// Non-finite coordinates collapse to `0`.
pub fn clamp_to_bounds(p: Vec2, size: Vec2) -> Vec2 {
    let max_x = (size.x - 1.0).max(0.0);
    let max_y = (size.y - 1.0).max(0.0);
    Vec2::new(clamp_axis(p.x, max_x), clamp_axis(p.y, max_y))
}

fn clamp_axis(v: f32, max: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.max(0.0).min(max) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn between_is_display_over_native() {
        let s = ScaleFactor::between(Vec2::new(256.0, 256.0), Vec2::new(512.0, 128.0));
        assert_eq!(s, ScaleFactor::new(2.0, 0.5));
    }

    #[test]
    fn between_falls_back_to_identity_on_degenerate_axes() {
        let s = ScaleFactor::between(Vec2::new(360.0, 1.0), Vec2::new(0.0, f32::NAN));
        assert_eq!(s, ScaleFactor::IDENTITY);
    }

    #[test]
    fn bottom_right_pixel_maps_to_last_index() {
        for display in [256.0, 300.0, 512.0, 1000.0] {
            let s = ScaleFactor::between(Vec2::splat(256.0), Vec2::splat(display));
            let p = Vec2::splat(display - 1.0);
            assert_eq!(s.to_raster_index(p, (256, 256)), (255, 255), "display {display}");
        }
    }

    #[test]
    fn stale_factor_never_escapes_the_raster() {
        // Laid out at 256 but the pointer reports coordinates of a larger view.
        let s = ScaleFactor::IDENTITY;
        assert_eq!(s.to_raster_index(Vec2::new(900.0, -40.0), (256, 256)), (255, 0));
        assert_eq!(s.to_raster_index(Vec2::new(f32::NAN, 3.0), (256, 256)), (0, 3));
    }

    #[test]
    fn clamp_to_bounds_keeps_last_pixel() {
        let size = Vec2::new(100.0, 50.0);
        assert_eq!(clamp_to_bounds(Vec2::new(-3.0, 80.0), size), Vec2::new(0.0, 49.0));
        assert_eq!(clamp_to_bounds(Vec2::new(99.5, 10.0), size), Vec2::new(99.0, 10.0));
        assert_eq!(clamp_to_bounds(Vec2::new(f32::NAN, 1.0), size), Vec2::new(0.0, 1.0));
    }

    proptest! {
        #[test]
        fn display_position_maps_back_to_its_index(
            index in 0usize..360,
            width in 1.0f32..4000.0,
        ) {
            let s = ScaleFactor::between(Vec2::new(360.0, 1.0), Vec2::new(width, 1.0));
            let p = s.to_display((index, 0));
            prop_assert_eq!(s.to_raster_index(p, (360, 1)).0, index);
        }

        #[test]
        fn index_is_always_in_range(
            x in -1.0e6f32..1.0e6,
            y in -1.0e6f32..1.0e6,
            sx in 0.01f32..100.0,
            sy in 0.01f32..100.0,
        ) {
            let (ix, iy) = ScaleFactor::new(sx, sy).to_raster_index(Vec2::new(x, y), (256, 256));
            prop_assert!(ix < 256 && iy < 256);
        }
    }
}
