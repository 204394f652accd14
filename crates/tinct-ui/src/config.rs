use tinct_engine::coords::Vec2;

use crate::error::PickerError;

/// Sizes and styling shared by the picker widgets.
///
/// All lengths are in density-independent units; widgets multiply by
/// [`density`](Self::density) when they have to pick a size on their own
/// (i.e. when measured without a parent-imposed size).
///
/// # Example
/// ```rust,ignore
/// let config = PickerConfig::default().density(2.0).marker_radius(6.0);
/// config.validate()?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PickerConfig {
    /// Screen density multiplier (1.0 = one unit per logical pixel).
    pub density: f32,
    pub hue_bar_width: f32,
    pub hue_bar_height: f32,
    /// Width of the hue indicator line, in hue steps. Never below 1.
    pub indicator_width: f32,
    /// Side of the square area picker.
    pub area_size: f32,
    /// Radius of the selection marker ring.
    pub marker_radius: f32,
    /// Vertical gap between the dialog's rows.
    pub spacing: f32,
    /// Height of the preview swatch row.
    pub swatch_height: f32,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            density: 1.0,
            hue_bar_width: 256.0,
            hue_bar_height: 30.0,
            indicator_width: 3.0,
            area_size: 256.0,
            marker_radius: 4.0,
            spacing: 8.0,
            swatch_height: 32.0,
        }
    }
}

impl PickerConfig {
    pub fn density(mut self, v: f32) -> Self { self.density = v; self }
    pub fn hue_bar_width(mut self, v: f32) -> Self { self.hue_bar_width = v; self }
    pub fn hue_bar_height(mut self, v: f32) -> Self { self.hue_bar_height = v; self }
    pub fn indicator_width(mut self, v: f32) -> Self { self.indicator_width = clamp_indicator(v); self }
    pub fn area_size(mut self, v: f32) -> Self { self.area_size = v; self }
    pub fn marker_radius(mut self, v: f32) -> Self { self.marker_radius = v; self }
    pub fn spacing(mut self, v: f32) -> Self { self.spacing = v; self }
    pub fn swatch_height(mut self, v: f32) -> Self { self.swatch_height = v; self }

    /// Rejects non-finite values, a non-positive density and non-positive sizes.
    pub fn validate(&self) -> Result<(), PickerError> {
        let positive = [
            ("density", self.density),
            ("hue_bar_width", self.hue_bar_width),
            ("hue_bar_height", self.hue_bar_height),
            ("area_size", self.area_size),
        ];
        for (name, v) in positive {
            if !(v.is_finite() && v > 0.0) {
                return Err(PickerError::InvalidConfig(format!("{name} must be positive, got {v}")));
            }
        }
        let non_negative = [
            ("marker_radius", self.marker_radius),
            ("spacing", self.spacing),
            ("swatch_height", self.swatch_height),
        ];
        for (name, v) in non_negative {
            if !(v.is_finite() && v >= 0.0) {
                return Err(PickerError::InvalidConfig(format!("{name} must be >= 0, got {v}")));
            }
        }
        if !self.indicator_width.is_finite() {
            return Err(PickerError::InvalidConfig("indicator_width must be finite".into()));
        }
        Ok(())
    }

    /// Default hue bar size in logical pixels.
    pub fn hue_bar_size(&self) -> Vec2 {
        Vec2::new(self.hue_bar_width, self.hue_bar_height) * self.density
    }

    /// Default area picker size in logical pixels.
    pub fn area_picker_size(&self) -> Vec2 {
        Vec2::splat(self.area_size) * self.density
    }
}

pub(crate) fn clamp_indicator(width: f32) -> f32 {
    if width >= 1.0 { width } else { 1.0 }
}
