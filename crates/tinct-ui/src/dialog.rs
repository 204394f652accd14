use std::cell::RefCell;
use std::rc::Rc;

use tinct_engine::coords::{Rect, Vec2};
use tinct_engine::paint::Color;

use crate::config::PickerConfig;
use crate::constraints::Constraints;
use crate::error::PickerError;
use crate::event::{EventResult, UiEvent};
use crate::observer::ColorSelectionListener;
use crate::painter::Painter;
use crate::widget::Widget;
use crate::widgets::{ColorAreaPicker, HueBar, Swatch};

/// Screen regions of the dialog's children for one layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialogRegions {
    pub hue_bar: Rect,
    pub area: Rect,
    pub initial_swatch: Rect,
    pub selected_swatch: Rect,
}

/// One color picking session.
///
/// Owns a [`HueBar`] bound to a [`ColorAreaPicker`], plus two preview
/// swatches: the color the session started from and the color currently
/// selected. Children are stacked top to bottom:
///
/// ```text
/// ┌───────────────────────────┐
/// │ hue bar                   │
/// ├───────────────────────────┤  spacing
/// │                           │
/// │ area picker               │
/// │                           │
/// ├───────────────────────────┤  spacing
/// │ initial     │ selected    │
/// └───────────────────────────┘
/// ```
///
/// The session ends with [`confirm`](Self::confirm) or
/// [`cancel`](Self::cancel), which consume it. A session dropped without
/// either counts as cancelled, so the listener hears about every session
/// exactly once.
pub struct ColorPickerDialog {
    key: String,
    initial: Color,
    hue_bar: Rc<RefCell<HueBar>>,
    area: Rc<RefCell<ColorAreaPicker>>,
    initial_swatch: Swatch,
    selected_swatch: Rc<RefCell<Swatch>>,
    spacing: f32,
    regions: Option<DialogRegions>,
    listener: Option<Box<dyn ColorSelectionListener>>,
}

impl ColorPickerDialog {
    /// Opens a session for `initial`.
    ///
    /// `key` is handed back to `listener` untouched so one listener can tell
    /// several pickers apart.
    pub fn new(
        config: &PickerConfig,
        key: impl Into<String>,
        initial: Color,
        listener: Box<dyn ColorSelectionListener>,
    ) -> Result<Self, PickerError> {
        config.validate()?;
        let key = key.into();

        let swatch_size = Vec2::new(config.area_size * 0.5, config.swatch_height) * config.density;
        let selected_swatch = Rc::new(RefCell::new(Swatch::new(initial, swatch_size)));
        let hue_bar = Rc::new(RefCell::new(HueBar::new(config)));
        let area = Rc::new(RefCell::new(ColorAreaPicker::new(config)));

        let preview = Rc::clone(&selected_swatch);
        area.borrow_mut()
            .set_color_observer(Some(Box::new(move |c: Color| preview.borrow_mut().set_color(c))));
        ColorAreaPicker::bind_hue_bar(&area, Rc::clone(&hue_bar));
        area.borrow_mut().set_color(initial);

        log::debug!("picker session '{key}' opened at {initial}");
        Ok(Self {
            key,
            initial,
            hue_bar,
            area,
            initial_swatch: Swatch::new(initial, swatch_size),
            selected_swatch,
            spacing: config.spacing * config.density,
            regions: None,
            listener: Some(listener),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn initial_color(&self) -> Color {
        self.initial
    }

    /// The color the session would confirm right now.
    pub fn selected_color(&self) -> Color {
        self.area.borrow().current_color()
    }

    pub fn hue_bar(&self) -> &Rc<RefCell<HueBar>> {
        &self.hue_bar
    }

    pub fn area(&self) -> &Rc<RefCell<ColorAreaPicker>> {
        &self.area
    }

    /// Moves both widgets to `color`, as if the session had been opened with it.
    pub fn set_color(&mut self, color: Color) {
        self.area.borrow_mut().set_color(color);
    }

    /// Regions from the most recent layout.
    pub fn regions(&self) -> Option<DialogRegions> {
        self.regions
    }

    /// Ends the session, reporting the selected color.
    pub fn confirm(mut self) {
        let color = self.selected_color();
        if let Some(mut listener) = self.listener.take() {
            log::info!("picker session '{}' confirmed {color}", self.key);
            listener.on_color_selected(&self.key, color);
        }
    }

    /// Ends the session without a color.
    pub fn cancel(mut self) {
        self.finish_cancelled();
    }

    fn finish_cancelled(&mut self) {
        if let Some(mut listener) = self.listener.take() {
            log::info!("picker session '{}' cancelled", self.key);
            listener.on_selection_cancelled(&self.key);
        }
    }

    fn split(&self, rect: Rect) -> DialogRegions {
        let hue_h = self.hue_bar.borrow().measure(Constraints::unbounded()).y;
        let swatch_h = self.initial_swatch.measure(Constraints::unbounded()).y;

        let (hue_bar, rest) = rect.split_top(hue_h);
        let (_, rest) = rest.split_top(self.spacing);
        let area_h = (rest.size.y - self.spacing - swatch_h).max(0.0);
        let (area, rest) = rest.split_top(area_h);
        let (_, swatches) = rest.split_top(self.spacing);
        let (initial_swatch, selected_swatch) = swatches.split_half_x();

        DialogRegions { hue_bar, area, initial_swatch, selected_swatch }
    }
}

impl Widget for ColorPickerDialog {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        let hue = self.hue_bar.borrow().measure(Constraints::unbounded());
        let area = self.area.borrow().measure(Constraints::unbounded());
        let swatch = self.initial_swatch.measure(Constraints::unbounded());
        let natural = Vec2::new(
            hue.x.max(area.x).max(swatch.x * 2.0),
            hue.y + self.spacing + area.y + self.spacing + swatch.y,
        );
        constraints.constrain(natural)
    }

    fn layout(&mut self, rect: Rect) {
        let regions = self.split(rect);
        self.hue_bar.layout(regions.hue_bar);
        self.area.layout(regions.area);
        self.regions = Some(regions);
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let regions = self.split(rect);
        self.hue_bar.paint(painter, regions.hue_bar);
        self.area.paint(painter, regions.area);
        self.initial_swatch.paint(painter, regions.initial_swatch);
        self.selected_swatch.paint(painter, regions.selected_swatch);
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        let regions = self.split(rect);
        if self.hue_bar.on_event(event, regions.hue_bar).is_consumed() {
            return EventResult::Consumed;
        }
        self.area.on_event(event, regions.area)
    }

    fn needs_redraw(&self) -> bool {
        self.hue_bar.needs_redraw()
            || self.area.needs_redraw()
            || self.initial_swatch.needs_redraw()
            || self.selected_swatch.needs_redraw()
    }
}

impl Drop for ColorPickerDialog {
    fn drop(&mut self) {
        self.finish_cancelled();
    }
}
