use std::cell::RefCell;
use std::rc::Rc;

use tinct_engine::coords::{Rect, Vec2};

use crate::constraints::Constraints;
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;

/// The trait every picker component implements.
///
/// A frame runs `layout → on_event → paint` against the same rect.
pub trait Widget: 'static {
    /// Size this widget wants within `constraints`. Must be deterministic.
    fn measure(&self, constraints: Constraints) -> Vec2;

    /// Told the rect assigned for this frame.
    ///
    /// Called every frame; widgets that derive state from their size (scale
    /// factors, cached scaled geometry) must only recompute it when the size
    /// actually changed.
    fn layout(&mut self, _rect: Rect) {}

    /// Draw into `painter` within `rect`.
    fn paint(&self, painter: &mut Painter, rect: Rect);

    /// Route an input event. Return [`EventResult::Consumed`] to stop propagation.
    fn on_event(&mut self, _event: &UiEvent, _rect: Rect) -> EventResult {
        EventResult::Ignored
    }

    /// `true` while a state change is waiting to be painted.
    fn needs_redraw(&self) -> bool {
        false
    }
}

/// Shared widgets: the picker dialog hands the same `HueBar` to the area
/// picker (for indicator sync) and to the tree (for layout and input).
impl<W: Widget> Widget for Rc<RefCell<W>> {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        self.borrow().measure(constraints)
    }

    fn layout(&mut self, rect: Rect) {
        self.borrow_mut().layout(rect)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.borrow().paint(painter, rect)
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        self.borrow_mut().on_event(event, rect)
    }

    fn needs_redraw(&self) -> bool {
        self.borrow().needs_redraw()
    }
}
