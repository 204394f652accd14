use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use tinct_engine::coords::{Rect, ScaleFactor, Vec2, clamp_to_bounds};
use tinct_engine::paint::Color;
use tinct_engine::raster::Raster;

use crate::config::PickerConfig;
use crate::constraints::Constraints;
use crate::event::{EventResult, PointerPhase, UiEvent};
use crate::observer::{ColorObserver, HueObserver};
use crate::painter::Painter;
use crate::redraw::RedrawRequest;
use crate::widget::Widget;
use crate::widgets::hue_bar::HueBar;

/// Side of the square area raster.
pub const AREA_SIZE: usize = 256;

const LAST: u32 = AREA_SIZE as u32 - 1;

/// Renders the saturation/brightness field for `base` into `raster`.
///
/// Column `x` starts at a blend from white towards `base` by `x / 255`
/// (column 0 white, column 255 the base color) and fades linearly to black
/// down the rows (row 0 the column color, row 255 black).
pub fn render_area(raster: &mut Raster, base: Color) {
    debug_assert_eq!(raster.dims(), (AREA_SIZE, AREA_SIZE));
    for x in 0..AREA_SIZE {
        let top = Color::WHITE.lerp_rgb(base, x as u32, LAST);
        for y in 0..AREA_SIZE {
            raster.set(x, y, top.scale_rgb(LAST - y as u32, LAST));
        }
    }
}

/// Two-dimensional saturation/brightness picker for one base hue.
///
/// Keeps a `256 × 256` raster of the field for the current base color,
/// regenerated only when the base color changes. Pointer input records a
/// selection point in widget-local pixels; the selected color is always the
/// raster entry under that point, or the base color itself until the first
/// touch.
pub struct ColorAreaPicker {
    raster: Arc<Raster>,
    base: Color,
    current: Color,
    selection: Option<Vec2>,
    size: Option<Vec2>,
    scale: ScaleFactor,
    marker_radius: f32,
    default_size: Vec2,
    hue_bar: Option<Rc<RefCell<HueBar>>>,
    observer: Option<Box<dyn ColorObserver>>,
    redraw: RedrawRequest,
}

impl ColorAreaPicker {
    /// A picker showing the field for pure red, which matches a fresh
    /// [`HueBar`] at hue 0.
    pub fn new(config: &PickerConfig) -> Self {
        let base = Color::RED;
        let mut raster = Raster::new(AREA_SIZE, AREA_SIZE, Color::BLACK);
        render_area(&mut raster, base);
        Self {
            raster: Arc::new(raster),
            base,
            current: base,
            selection: None,
            size: None,
            scale: ScaleFactor::IDENTITY,
            marker_radius: config.marker_radius,
            default_size: config.area_picker_size(),
            hue_bar: None,
            observer: None,
            redraw: RedrawRequest::pending(),
        }
    }

    #[inline]
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    #[inline]
    pub fn base_color(&self) -> Color {
        self.base
    }

    /// The selected color: the raster entry under the selection point, or
    /// the base color before the first touch.
    #[inline]
    pub fn current_color(&self) -> Color {
        self.current
    }

    /// Last touched point in widget-local pixels, if any.
    #[inline]
    pub fn selection(&self) -> Option<Vec2> {
        self.selection
    }

    #[inline]
    pub fn scale(&self) -> ScaleFactor {
        self.scale
    }

    #[inline]
    pub fn hue_bar(&self) -> Option<&Rc<RefCell<HueBar>>> {
        self.hue_bar.as_ref()
    }

    /// Establishes a new base color.
    ///
    /// In order: moves the bound hue bar's indicator (without it notifying
    /// back), regenerates the field, re-resolves the selected color from the
    /// existing selection point, notifies the observer, requests a redraw.
    pub fn set_color(&mut self, base: Color) {
        if let Some(bar) = &self.hue_bar {
            bar.borrow_mut().set_color(base);
        }
        self.apply_base(base);
    }

    /// A hue picked on the bound bar. Same as [`set_color`](Self::set_color)
    /// minus the push back into the bar, which already shows this hue and is
    /// mid-notification.
    ///
    /// The bar therefore keeps the exact spectrum index it snapped to, rather
    /// than the up to 0.25° lower hue re-derived from that entry's color.
    pub fn on_hue_changed(&mut self, color: Color) {
        self.apply_base(color);
    }

    /// Makes `this` the observer of `hue_bar`, so dragging the bar
    /// regenerates this picker, and remembers the bar so base color changes
    /// move its indicator.
    ///
    /// The bar notifies immediately on attach: the picker adopts the bar's
    /// current hue straight away.
    pub fn bind_hue_bar(this: &Rc<RefCell<Self>>, hue_bar: Rc<RefCell<HueBar>>) {
        this.borrow_mut().hue_bar = Some(Rc::clone(&hue_bar));
        let link = HueLink(Rc::downgrade(this));
        hue_bar.borrow_mut().set_observer(Some(Box::new(link)));
    }

    /// Replaces the observer. A new observer is told the current color
    /// immediately, exactly once.
    pub fn set_color_observer(&mut self, observer: Option<Box<dyn ColorObserver>>) {
        self.observer = observer;
        self.notify();
    }

    /// Color under a widget-local point, clamped to the widget's bounds.
    pub fn color_at(&self, p: Vec2) -> Color {
        let p = clamp_to_bounds(p, self.display_size());
        let (x, y) = self.scale.to_raster_index(p, self.raster.dims());
        self.raster.get_clamped(x, y)
    }

    /// Handles one pointer step at a widget-local position.
    ///
    /// Down and move clamp the point into the widget, select it, notify the
    /// observer and redraw. Other phases are left alone; the hue bar is
    /// never touched from here.
    pub fn on_pointer(&mut self, phase: PointerPhase, local: Vec2) -> EventResult {
        if !matches!(phase, PointerPhase::Down | PointerPhase::Move) {
            return EventResult::Ignored;
        }
        let p = clamp_to_bounds(local.floor(), self.display_size());
        self.selection = Some(p);
        self.resolve_current();
        log::trace!("area pointer {:?} at ({}, {}) → {}", phase, p.x, p.y, self.current);

        self.notify();
        self.redraw.request();
        EventResult::Consumed
    }

    fn apply_base(&mut self, base: Color) {
        self.base = base;
        // Reuses the buffer unless a recorded frame still holds it.
        render_area(Arc::make_mut(&mut self.raster), base);
        log::debug!("area raster regenerated for {base}");

        self.resolve_current();
        self.notify();
        self.redraw.request();
    }

    fn resolve_current(&mut self) {
        self.current = match self.selection {
            Some(p) => self.color_at(p),
            None => self.base,
        };
    }

    fn notify(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_color_changed(self.current);
        }
    }

    fn display_size(&self) -> Vec2 {
        self.size.unwrap_or(self.raster.size())
    }
}

impl Default for ColorAreaPicker {
    fn default() -> Self {
        Self::new(&PickerConfig::default())
    }
}

/// Forwards hue bar notifications to a shared area picker.
///
/// Holds a weak reference: the bar must not keep the picker alive.
struct HueLink(Weak<RefCell<ColorAreaPicker>>);

impl HueObserver for HueLink {
    fn on_hue_changed(&mut self, color: Color) {
        match self.0.upgrade() {
            Some(area) => area.borrow_mut().on_hue_changed(color),
            None => log::trace!("hue change {color} dropped: area picker is gone"),
        }
    }
}

impl Widget for ColorAreaPicker {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        constraints.constrain(self.default_size)
    }

    fn layout(&mut self, rect: Rect) {
        if self.size == Some(rect.size) {
            return;
        }
        self.size = Some(rect.size);
        self.scale = ScaleFactor::between(self.raster.size(), rect.size);
        log::debug!("area picker laid out at {}×{}", rect.size.x, rect.size.y);

        // The selection keeps its screen position; only its color may move.
        let before = self.current;
        self.resolve_current();
        if self.current != before {
            self.notify();
        }
        self.redraw.request();
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        painter.image(rect, &self.raster);

        if let Some(p) = self.selection {
            let center = rect.origin + p;
            let radius = self.marker_radius * self.scale.x;
            let stroke = self.scale.x;
            painter.ring(center, radius, stroke + 1.0, Color::WHITE);
            painter.ring(center, radius, stroke, Color::BLACK);
        }

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

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tinct_engine::paint::hue_of;
    use tinct_engine::render::SoftwareRenderer;
    use tinct_engine::scene::DrawList;

    const ORANGE: Color = Color::from_rgb(255, 136, 0);

    fn area_at(size: f32) -> ColorAreaPicker {
        let mut area = ColorAreaPicker::default();
        area.layout(Rect::new(0.0, 0.0, size, size));
        area
    }

    fn watch(area: &mut ColorAreaPicker) -> Rc<RefCell<Vec<Color>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        area.set_color_observer(Some(Box::new(move |c: Color| sink.borrow_mut().push(c))));
        seen.borrow_mut().clear();
        seen
    }

    fn column(r: &Raster, x: usize) -> Vec<Color> {
        r.column(x).collect()
    }

    // ── raster ────────────────────────────────────────────────────────────

    #[test]
    fn white_base_gives_identical_white_to_black_columns() {
        let mut r = Raster::new(AREA_SIZE, AREA_SIZE, Color::TRANSPARENT);
        render_area(&mut r, Color::WHITE);
        let first = column(&r, 0);
        assert_eq!(first[0], Color::WHITE);
        assert_eq!(first[255], Color::BLACK);
        assert_eq!(column(&r, 255), first);
        assert_eq!(column(&r, 128), first);
    }

    #[test]
    fn red_base_corners() {
        let mut r = Raster::new(AREA_SIZE, AREA_SIZE, Color::TRANSPARENT);
        render_area(&mut r, Color::RED);
        assert_eq!(r.get(255, 0), Some(Color::RED));
        assert_eq!(r.get(0, 0), Some(Color::WHITE));
        assert_eq!(r.get(0, 255), Some(Color::BLACK));
        assert_eq!(r.get(255, 255), Some(Color::BLACK));
    }

    #[test]
    fn columns_darken_monotonically() {
        let mut r = Raster::new(AREA_SIZE, AREA_SIZE, Color::TRANSPARENT);
        render_area(&mut r, ORANGE);
        let col = column(&r, 200);
        assert!(col.windows(2).all(|w| w[0].red() >= w[1].red() && w[0].green() >= w[1].green()));
    }

    #[test]
    fn raster_is_always_256_square() {
        let mut area = ColorAreaPicker::default();
        area.set_color(ORANGE);
        assert_eq!(area.raster().dims(), (AREA_SIZE, AREA_SIZE));
    }

    // ── set_color ─────────────────────────────────────────────────────────

    #[test]
    fn without_selection_current_is_base() {
        let mut area = area_at(256.0);
        let seen = watch(&mut area);
        area.set_color(ORANGE);
        assert_eq!(area.current_color(), ORANGE);
        assert_eq!(*seen.borrow(), vec![ORANGE]);
    }

    #[test]
    fn set_color_keeps_selection_point_and_re_resolves() {
        let mut area = area_at(512.0);
        area.on_pointer(PointerPhase::Down, Vec2::new(511.0, 0.0));
        assert_eq!(area.current_color(), Color::RED);

        area.set_color(Color::from_rgb(0, 0, 255));
        assert_eq!(area.selection(), Some(Vec2::new(511.0, 0.0)));
        assert_eq!(area.current_color(), Color::from_rgb(0, 0, 255));
    }

    #[test]
    fn works_without_a_hue_bar() {
        let mut area = ColorAreaPicker::default();
        area.set_color(ORANGE);
        assert!(area.hue_bar().is_none());
        assert_eq!(area.base_color(), ORANGE);
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn bottom_right_corner_is_black() {
        let mut area = area_at(256.0);
        area.set_color(ORANGE);
        area.on_pointer(PointerPhase::Down, Vec2::new(255.0, 255.0));
        assert_eq!(area.current_color(), Color::BLACK);
        assert_eq!(area.current_color(), area.raster().get(255, 255).unwrap());
    }

    #[test]
    fn pointer_is_clamped_into_the_widget() {
        let mut area = area_at(256.0);
        area.on_pointer(PointerPhase::Move, Vec2::new(-20.0, 900.0));
        assert_eq!(area.selection(), Some(Vec2::new(0.0, 255.0)));
        area.on_pointer(PointerPhase::Move, Vec2::new(300.5, -1.0));
        assert_eq!(area.selection(), Some(Vec2::new(255.0, 0.0)));
    }

    #[test]
    fn pointer_notifies_resolved_color() {
        let mut area = area_at(256.0);
        let seen = watch(&mut area);
        area.on_pointer(PointerPhase::Down, Vec2::new(0.0, 0.0));
        area.on_pointer(PointerPhase::Move, Vec2::new(255.0, 0.0));
        assert_eq!(*seen.borrow(), vec![Color::WHITE, Color::RED]);
    }

    #[test]
    fn touching_a_displayed_cell_picks_its_entry() {
        for size in [256.0, 300.0, 384.0, 512.0] {
            let mut area = area_at(size);
            area.set_color(ORANGE);
            for index in [(0, 0), (1, 1), (17, 200), (128, 64), (255, 255)] {
                let p = area.scale().to_display(index).ceil();
                area.on_pointer(PointerPhase::Down, p);
                assert_eq!(
                    area.current_color(),
                    area.raster().get(index.0, index.1).unwrap(),
                    "{index:?} at {size}px"
                );
            }
        }
    }

    #[test]
    fn other_phases_are_no_ops() {
        let mut area = area_at(256.0);
        let seen = watch(&mut area);
        assert_eq!(area.on_pointer(PointerPhase::Up, Vec2::new(10.0, 10.0)), EventResult::Ignored);
        assert_eq!(area.selection(), None);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn selection_survives_resize_and_stays_in_raster() {
        let mut area = area_at(512.0);
        area.on_pointer(PointerPhase::Down, Vec2::new(511.0, 511.0));
        area.layout(Rect::new(0.0, 0.0, 256.0, 256.0));
        assert_eq!(area.selection(), Some(Vec2::new(511.0, 511.0)));
        assert_eq!(area.current_color(), Color::BLACK);
    }

    // ── observers and hue bar binding ─────────────────────────────────────

    #[test]
    fn attaching_observer_notifies_exactly_once() {
        let mut area = area_at(256.0);
        area.set_color(ORANGE);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        area.set_color_observer(Some(Box::new(move |c: Color| sink.borrow_mut().push(c))));
        assert_eq!(*seen.borrow(), vec![ORANGE]);
    }

    #[test]
    fn binding_adopts_the_bar_hue() {
        let bar = Rc::new(RefCell::new(HueBar::default()));
        bar.borrow_mut().set_hue(120.0).unwrap();
        let area = Rc::new(RefCell::new(ColorAreaPicker::default()));

        ColorAreaPicker::bind_hue_bar(&area, Rc::clone(&bar));
        assert_eq!(area.borrow().base_color(), Color::from_rgb(0, 255, 0));
    }

    #[test]
    fn set_color_moves_bar_without_feedback() {
        let bar = Rc::new(RefCell::new(HueBar::default()));
        let area = Rc::new(RefCell::new(ColorAreaPicker::default()));
        ColorAreaPicker::bind_hue_bar(&area, Rc::clone(&bar));

        let emitted = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&emitted);
        area.borrow_mut().set_color_observer(Some(Box::new(move |c: Color| sink.borrow_mut().push(c))));
        emitted.borrow_mut().clear();

        area.borrow_mut().set_color(ORANGE);

        let hue = bar.borrow().hue();
        assert!((hue - hue_of(ORANGE)).abs() < 1e-3, "bar hue {hue}");
        // One emission from set_color; a hue bar echo would add a second,
        // carrying the bar's pure hue instead of orange.
        assert_eq!(*emitted.borrow(), vec![ORANGE]);
    }

    #[test]
    fn dragging_the_bar_regenerates_the_area() {
        let bar = Rc::new(RefCell::new(HueBar::default()));
        let area = Rc::new(RefCell::new(ColorAreaPicker::default()));
        ColorAreaPicker::bind_hue_bar(&area, Rc::clone(&bar));

        bar.borrow_mut().on_pointer(PointerPhase::Down, Vec2::new(240.0, 3.0));
        let area = area.borrow();
        assert_eq!(area.base_color(), Color::from_rgb(0, 0, 255));
        assert_eq!(area.raster().get(255, 0), Some(Color::from_rgb(0, 0, 255)));
    }

    #[test]
    fn bar_keeps_its_snapped_hue_after_a_drag() {
        let bar = Rc::new(RefCell::new(HueBar::default()));
        let area = Rc::new(RefCell::new(ColorAreaPicker::default()));
        ColorAreaPicker::bind_hue_bar(&area, Rc::clone(&bar));

        bar.borrow_mut().on_pointer(PointerPhase::Move, Vec2::new(17.0, 0.0));
        let entry = bar.borrow().spectrum().get(17, 0).unwrap();
        assert_eq!(bar.borrow().hue(), 17.0);
        assert!(hue_of(entry) < 17.0);
        assert_eq!(area.borrow().base_color(), entry);
    }

    #[test]
    fn dropped_area_silences_the_bar() {
        let bar = Rc::new(RefCell::new(HueBar::default()));
        {
            let area = Rc::new(RefCell::new(ColorAreaPicker::default()));
            ColorAreaPicker::bind_hue_bar(&area, Rc::clone(&bar));
        }
        assert!(bar.borrow_mut().on_pointer(PointerPhase::Down, Vec2::new(10.0, 0.0)).is_consumed());
    }

    // ── paint ─────────────────────────────────────────────────────────────

    #[test]
    fn marker_only_after_first_touch() {
        let rect = Rect::new(0.0, 0.0, 256.0, 256.0);
        let mut area = area_at(256.0);
        let mut list = DrawList::new();
        area.paint(&mut Painter::new(&mut list), rect);
        assert_eq!(list.len(), 1);

        area.on_pointer(PointerPhase::Down, Vec2::new(100.0, 100.0));
        let mut list = DrawList::new();
        area.paint(&mut Painter::new(&mut list), rect);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn painted_field_matches_picked_colors() {
        let rect = Rect::new(0.0, 0.0, 300.0, 300.0);
        let mut area = ColorAreaPicker::default();
        area.layout(rect);
        area.set_color(ORANGE);

        let mut list = DrawList::new();
        area.paint(&mut Painter::new(&mut list), rect);
        let mut fb = Raster::new(300, 300, Color::TRANSPARENT);
        SoftwareRenderer::default().render(&mut list, &mut fb);

        for (x, y) in [(0usize, 0usize), (299, 0), (150, 150), (17, 280), (299, 299)] {
            let p = Vec2::new(x as f32, y as f32);
            assert_eq!(fb.get(x, y).unwrap(), area.color_at(p), "({x}, {y})");
        }
    }

    #[test]
    fn redraw_requests_coalesce_until_paint() {
        let rect = Rect::new(0.0, 0.0, 256.0, 256.0);
        let mut area = area_at(256.0);
        area.set_color(ORANGE);
        area.set_color(Color::RED);
        area.on_pointer(PointerPhase::Down, Vec2::new(3.0, 3.0));
        assert!(area.needs_redraw());
        area.paint(&mut Painter::new(&mut DrawList::new()), rect);
        assert!(!area.needs_redraw());
    }

    proptest! {
        #[test]
        fn touch_never_escapes_the_raster(
            x in -1.0e4f32..1.0e4,
            y in -1.0e4f32..1.0e4,
            laid in 16.0f32..1024.0,
            reported in 16.0f32..1024.0,
        ) {
            let mut area = area_at(laid);
            // A pointer reported against a momentarily different size.
            let scaled = Vec2::new(x, y) * (reported / laid);
            area.on_pointer(PointerPhase::Move, scaled);
            let p = area.selection().unwrap();
            prop_assert!(p.x >= 0.0 && p.x <= laid - 1.0);
            prop_assert!(p.y >= 0.0 && p.y <= laid - 1.0);
            prop_assert_eq!(area.current_color(), area.color_at(p));
        }
    }
}
