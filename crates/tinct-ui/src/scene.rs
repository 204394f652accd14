use tinct_engine::coords::{Rect, Vec2};
use tinct_engine::scene::DrawList;

use crate::constraints::Constraints;
use crate::event::UiEvent;
use crate::painter::Painter;
use crate::widget::Widget;

/// Snapshot of pointer state for one UI frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UiInput {
    /// Cursor position in logical pixels.
    pub mouse_pos: Vec2,
    /// `true` while the primary button is held.
    pub mouse_pressed: bool,
}

impl UiInput {
    pub fn pressed_at(pos: Vec2) -> Self {
        Self { mouse_pos: pos, mouse_pressed: true }
    }

    pub fn released_at(pos: Vec2) -> Self {
        Self { mouse_pos: pos, mouse_pressed: false }
    }
}

/// Drives one widget tree frame by frame.
///
/// Owns the `DrawList` each frame is recorded into and the little bit of
/// gesture state needed to turn level-triggered [`UiInput`] snapshots into
/// `PointerDown` / `Drag` / `PointerUp` events.
#[derive(Debug, Default)]
pub struct UiScene {
    pub draw_list: DrawList,
    press_start: Option<Vec2>,
    last_pos: Option<Vec2>,
}

impl UiScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// The size `root` wants when nothing constrains it.
    pub fn natural_size<W: Widget + ?Sized>(root: &W) -> Vec2 {
        root.measure(Constraints::unbounded())
    }

    /// Lays out `root` over the viewport, routes this frame's input, then
    /// repaints. The root is borrowed so its state survives across frames.
    pub fn frame_ref<W: Widget + ?Sized>(
        &mut self,
        root: &mut W,
        viewport: Vec2,
        input: &UiInput,
    ) -> &mut DrawList {
        let rect = Rect::from_origin_size(Vec2::zero(), viewport);

        // ── layout ────────────────────────────────────────────────────────
        root.layout(rect);

        // ── events ────────────────────────────────────────────────────────
        for event in self.events_for(input) {
            root.on_event(&event, rect);
        }

        // ── paint ─────────────────────────────────────────────────────────
        self.draw_list.clear();
        {
            let mut painter = Painter::new(&mut self.draw_list);
            root.paint(&mut painter, rect);
        }
        &mut self.draw_list
    }

    /// Repaints only when the root reports a pending change.
    ///
    /// Returns `None` when the previous frame is still current.
    pub fn frame_if_dirty<W: Widget + ?Sized>(
        &mut self,
        root: &mut W,
        viewport: Vec2,
        input: &UiInput,
    ) -> Option<&mut DrawList> {
        let moved = self.last_pos != Some(input.mouse_pos);
        let gesture = input.mouse_pressed != self.press_start.is_some();
        if !(moved || gesture || root.needs_redraw()) {
            return None;
        }
        Some(self.frame_ref(root, viewport, input))
    }

    fn events_for(&mut self, input: &UiInput) -> Vec<UiEvent> {
        let pos = input.mouse_pos;
        let moved = self.last_pos != Some(pos);
        self.last_pos = Some(pos);

        let mut events = Vec::with_capacity(2);
        match (self.press_start, input.mouse_pressed) {
            (None, true) => {
                self.press_start = Some(pos);
                events.push(UiEvent::PointerDown { pos });
            }
            (Some(start), true) if moved => events.push(UiEvent::Drag { pos, start }),
            (Some(start), false) => {
                self.press_start = None;
                events.push(UiEvent::PointerUp { pos, start });
            }
            (None, false) if moved => events.push(UiEvent::Hover { pos }),
            _ => {}
        }
        events
    }
}
