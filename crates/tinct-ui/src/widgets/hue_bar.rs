use std::sync::Arc;

use tinct_engine::coords::{Rect, ScaleFactor, Vec2, clamp_to_bounds};
use tinct_engine::paint::{Color, hue_of};
use tinct_engine::raster::Raster;

use crate::config::{PickerConfig, clamp_indicator};
use crate::constraints::Constraints;
use crate::error::PickerError;
use crate::event::{EventResult, PointerPhase, UiEvent};
use crate::observer::HueObserver;
use crate::painter::Painter;
use crate::redraw::RedrawRequest;
use crate::widget::Widget;

/// Entries in the hue spectrum, one per degree.
pub const HUE_COUNT: usize = 360;

const STEPS_PER_SEGMENT: usize = HUE_COUNT / 6;

// red → yellow → green → cyan → blue → magenta → red
const SPECTRUM_CORNERS: [Color; 7] = [
    Color::from_rgb(255, 0, 0),
    Color::from_rgb(255, 255, 0),
    Color::from_rgb(0, 255, 0),
    Color::from_rgb(0, 255, 255),
    Color::from_rgb(0, 0, 255),
    Color::from_rgb(255, 0, 255),
    Color::from_rgb(255, 0, 0),
];

/// Builds the `360 × 1` full-saturation, full-value hue sweep.
///
/// Six 60-entry segments, each a linear blend between neighbouring
/// primary/secondary colors; entry `i` has a hue within a quarter degree
/// below `i`. No per-pixel HSV conversion is involved.
pub fn build_spectrum() -> Raster {
    let mut raster = Raster::new(HUE_COUNT, 1, Color::BLACK);
    for (segment, pair) in SPECTRUM_CORNERS.windows(2).enumerate() {
        for step in 0..STEPS_PER_SEGMENT {
            let color = pair[0].lerp_rgb(pair[1], step as u32, STEPS_PER_SEGMENT as u32);
            raster.set(segment * STEPS_PER_SEGMENT + step, 0, color);
        }
    }
    raster
}

/// Horizontal strip spanning all 360 hues.
///
/// Pointer input selects a hue and reports the matching pure color to the
/// bound [`HueObserver`]. Programmatic [`set_hue`](Self::set_hue) /
/// [`set_color`](Self::set_color) only move the indicator; they never notify,
/// which is what lets the area picker push its base color back here without
/// a feedback loop.
///
/// The selected hue is stored in degrees, independent of layout; the
/// indicator position is derived from it and the current [`ScaleFactor`], so
/// a hue set before the first layout simply lands in the right place once
/// the real size is known.
pub struct HueBar {
    spectrum: Arc<Raster>,
    hue: f32,
    size: Option<Vec2>,
    scale: ScaleFactor,
    indicator_width: f32,
    default_size: Vec2,
    observer: Option<Box<dyn HueObserver>>,
    redraw: RedrawRequest,
}

impl HueBar {
    pub fn new(config: &PickerConfig) -> Self {
        Self {
            spectrum: Arc::new(build_spectrum()),
            hue: 0.0,
            size: None,
            scale: ScaleFactor::IDENTITY,
            indicator_width: clamp_indicator(config.indicator_width),
            default_size: config.hue_bar_size(),
            observer: None,
            redraw: RedrawRequest::pending(),
        }
    }

    /// The cached hue sweep.
    #[inline]
    pub fn spectrum(&self) -> &Raster {
        &self.spectrum
    }

    /// Selected hue in degrees, `[0, 360)`.
    #[inline]
    pub fn hue(&self) -> f32 {
        self.hue
    }

    #[inline]
    pub fn scale(&self) -> ScaleFactor {
        self.scale
    }

    /// Moves the indicator to `hue` without notifying the observer.
    ///
    /// Fails with [`PickerError::InvalidHue`] unless `hue` is in `[0, 360)`.
    pub fn set_hue(&mut self, hue: f32) -> Result<(), PickerError> {
        if !(0.0..HUE_COUNT as f32).contains(&hue) {
            log::warn!("rejected hue {hue}");
            return Err(PickerError::InvalidHue(hue));
        }
        self.apply_hue(hue);
        Ok(())
    }

    /// Moves the indicator to the hue of `color` without notifying.
    ///
    /// Achromatic colors have no hue and move the indicator to `0`.
    pub fn set_color(&mut self, color: Color) {
        // hue_of always lands in [0, 360).
        self.apply_hue(hue_of(color));
    }

    /// Pure color at the selected hue: the spectrum entry at `round(hue)`,
    /// wrapping 360 back onto 0.
    pub fn current_color(&self) -> Color {
        let index = self.hue.round() as usize % HUE_COUNT;
        self.spectrum.get_clamped(index, 0)
    }

    /// Spectrum color under a widget-local `x`, clamped to `[0, width - 1]`.
    pub fn color_at(&self, x: f32) -> Color {
        self.spectrum.get_clamped(self.index_at(x), 0)
    }

    /// Indicator position in widget-local pixels.
    #[inline]
    pub fn indicator_x(&self) -> f32 {
        self.hue * self.scale.x
    }

    /// Replaces the observer. A new observer is told the current color
    /// immediately, so whatever it drives starts in sync with the bar.
    pub fn set_observer(&mut self, observer: Option<Box<dyn HueObserver>>) {
        self.observer = observer;
        let color = self.current_color();
        if let Some(observer) = self.observer.as_mut() {
            observer.on_hue_changed(color);
        }
    }

    /// Width of the indicator line in hue steps; values below 1 become 1.
    pub fn set_indicator_width(&mut self, width: f32) {
        self.indicator_width = clamp_indicator(width);
        self.redraw.request();
    }

    /// Handles one pointer step at a widget-local position.
    ///
    /// Down and move select the hue under `local.x` (the strip is
    /// one-dimensional, `y` is ignored) and notify the observer. Every other
    /// phase is left alone.
    pub fn on_pointer(&mut self, phase: PointerPhase, local: Vec2) -> EventResult {
        if !matches!(phase, PointerPhase::Down | PointerPhase::Move) {
            return EventResult::Ignored;
        }
        let index = self.index_at(local.x);
        // Snap to the entry under the pointer so the reported color and the
        // stored hue always agree.
        self.hue = index as f32;
        let color = self.spectrum.get_clamped(index, 0);
        log::trace!("hue bar pointer {:?} x={} → index {index} {color}", phase, local.x);

        if let Some(observer) = self.observer.as_mut() {
            observer.on_hue_changed(color);
        }
        self.redraw.request();
        EventResult::Consumed
    }

    fn apply_hue(&mut self, hue: f32) {
        self.hue = hue;
        log::trace!("hue bar set to {hue}");
        self.redraw.request();
    }

    fn display_size(&self) -> Vec2 {
        self.size.unwrap_or(self.spectrum.size())
    }

    fn index_at(&self, x: f32) -> usize {
        let p = clamp_to_bounds(Vec2::new(x, 0.0), self.display_size());
        self.scale.to_raster_index(p, self.spectrum.dims()).0
    }
}

impl Default for HueBar {
    fn default() -> Self {
        Self::new(&PickerConfig::default())
    }
}

impl Widget for HueBar {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        constraints.constrain(self.default_size)
    }

    fn layout(&mut self, rect: Rect) {
        if self.size == Some(rect.size) {
            return;
        }
        self.size = Some(rect.size);
        self.scale = ScaleFactor::between(self.spectrum.size(), rect.size);
        log::debug!("hue bar laid out at {}×{} (scale {})", rect.size.x, rect.size.y, self.scale.x);
        self.redraw.request();
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        painter.image(rect, &self.spectrum);

        let x = rect.origin.x + self.indicator_x();
        let width = self.indicator_width * self.scale.x;
        painter.vline(x, rect.origin.y, rect.max().y, width, Color::BLACK);

        self.redraw.take();
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        match event.pointer_in(rect) {
            Some((phase, local)) => self.on_pointer(phase, local),
            None => EventResult::Ignored,
        }
    }

    fn needs_redraw(&self) -> bool {
        self.redraw.is_pending()
    }
}
