use super::Color;

/// Hue / saturation / value view of a color.
///
/// `h` is in degrees, `[0, 360)`; `s` and `v` are in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    /// Standard RGB → HSV conversion. Alpha is ignored.
    ///
    /// Hue is undefined for achromatic colors (gray, white, black); it
    /// resolves to `0` there.
    pub fn from_color(color: Color) -> Self {
        let r = color.red() as f32 / 255.0;
        let g = color.green() as f32 / 255.0;
        let b = color.blue() as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h = if delta <= 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        let s = if max <= 0.0 { 0.0 } else { delta / max };
        Self { h: normalize_hue(h), s, v: max }
    }

    /// HSV → opaque RGB, channels rounded to the nearest byte.
    pub fn to_color(self) -> Color {
        let h = normalize_hue(self.h);
        let s = self.s.clamp(0.0, 1.0);
        let v = self.v.clamp(0.0, 1.0);

        let c = v * s;
        let sector = h / 60.0;
        let x = c * (1.0 - (sector % 2.0 - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match sector as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let byte = |f: f32| ((f + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Color::from_rgb(byte(r), byte(g), byte(b))
    }
}

/// Hue of `color` in `[0, 360)`; `0` for achromatic colors.
#[inline]
pub fn hue_of(color: Color) -> f32 {
    Hsv::from_color(color).h
}

fn normalize_hue(h: f32) -> f32 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn primaries_and_secondaries() {
        let cases = [
            (Color::from_rgb(255, 0, 0), 0.0),
            (Color::from_rgb(255, 255, 0), 60.0),
            (Color::from_rgb(0, 255, 0), 120.0),
            (Color::from_rgb(0, 255, 255), 180.0),
            (Color::from_rgb(0, 0, 255), 240.0),
            (Color::from_rgb(255, 0, 255), 300.0),
        ];
        for (color, hue) in cases {
            assert!(close(hue_of(color), hue), "{color}: {} != {hue}", hue_of(color));
        }
    }

    #[test]
    fn orange_is_around_thirty_two_degrees() {
        let hsv = Hsv::from_color(Color::from_rgb(255, 136, 0));
        assert!((hsv.h - 32.0).abs() < 0.1, "{}", hsv.h);
        assert!(close(hsv.s, 1.0));
        assert!(close(hsv.v, 1.0));
    }

    #[test]
    fn achromatic_hue_resolves_to_zero() {
        for c in [Color::WHITE, Color::BLACK, Color::from_rgb(90, 90, 90)] {
            let hsv = Hsv::from_color(c);
            assert_eq!(hsv.h, 0.0);
            assert_eq!(hsv.s, 0.0);
        }
    }

    #[test]
    fn hue_just_below_red_wraps_into_range() {
        let h = hue_of(Color::from_rgb(255, 0, 1));
        assert!(h > 359.0 && h < 360.0, "{h}");
    }

    #[test]
    fn alpha_does_not_affect_hue() {
        assert_eq!(hue_of(Color(0x00FF_8800)), hue_of(Color(0xFFFF_8800)));
    }

    proptest! {
        #[test]
        fn hue_always_in_range(argb in any::<u32>()) {
            let h = hue_of(Color(argb));
            prop_assert!((0.0..360.0).contains(&h));
        }

        #[test]
        fn hsv_round_trip_is_exact_on_bytes(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let c = Color::from_rgb(r, g, b);
            prop_assert_eq!(Hsv::from_color(c).to_color(), c);
        }
    }
}
