use tinct_engine::coords::{Rect, Vec2};

/// Input events routed through the widget tree, in absolute logical pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Primary button went down at `pos`.
    PointerDown { pos: Vec2 },
    /// Pointer moved while the primary button is held.
    /// `start` is where the button went down; the drag belongs to the widget
    /// whose rect contains `start`, wherever `pos` is now.
    Drag { pos: Vec2, start: Vec2 },
    /// Primary button released; `start` as for [`UiEvent::Drag`].
    PointerUp { pos: Vec2, start: Vec2 },
    /// Pointer moved with no button held.
    Hover { pos: Vec2 },
}

/// A pointer gesture step as seen by one widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

impl UiEvent {
    /// The phase and widget-local position of this event for a widget
    /// occupying `rect`, or `None` if the event is not addressed to it.
    ///
    /// The local position is not clamped; a drag may leave the widget.
    pub fn pointer_in(&self, rect: Rect) -> Option<(PointerPhase, Vec2)> {
        match *self {
            UiEvent::PointerDown { pos } if rect.contains(pos) => {
                Some((PointerPhase::Down, rect.local(pos)))
            }
            UiEvent::Drag { pos, start } if rect.contains(start) => {
                Some((PointerPhase::Move, rect.local(pos)))
            }
            UiEvent::PointerUp { pos, start } if rect.contains(start) => {
                Some((PointerPhase::Up, rect.local(pos)))
            }
            _ => None,
        }
    }
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled; stop routing.
    Consumed,
    /// Event was not handled; keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: Rect = Rect::new(10.0, 20.0, 100.0, 30.0);

    #[test]
    fn down_inside_is_local() {
        let ev = UiEvent::PointerDown { pos: Vec2::new(15.0, 25.0) };
        assert_eq!(ev.pointer_in(RECT), Some((PointerPhase::Down, Vec2::new(5.0, 5.0))));
    }

    #[test]
    fn down_outside_is_not_addressed() {
        let ev = UiEvent::PointerDown { pos: Vec2::new(5.0, 25.0) };
        assert_eq!(ev.pointer_in(RECT), None);
    }

    #[test]
    fn drag_follows_its_start_even_outside() {
        let ev = UiEvent::Drag { pos: Vec2::new(300.0, 0.0), start: Vec2::new(50.0, 30.0) };
        assert_eq!(ev.pointer_in(RECT), Some((PointerPhase::Move, Vec2::new(290.0, -20.0))));

        let foreign = UiEvent::Drag { pos: Vec2::new(50.0, 30.0), start: Vec2::new(0.0, 0.0) };
        assert_eq!(foreign.pointer_in(RECT), None);
    }

    #[test]
    fn hover_is_never_a_pointer_step() {
        assert_eq!(UiEvent::Hover { pos: Vec2::new(50.0, 30.0) }.pointer_in(RECT), None);
    }
}
