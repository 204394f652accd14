use tinct_engine::coords::{Rect, Vec2};
use tinct_engine::paint::Color;

use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::redraw::RedrawRequest;
use crate::widget::Widget;

/// A solid color preview.
pub struct Swatch {
    color: Color,
    size: Vec2,
    redraw: RedrawRequest,
}

impl Swatch {
    pub fn new(color: Color, size: Vec2) -> Self {
        Self { color, size, redraw: RedrawRequest::pending() }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        if self.color != color {
            self.color = color;
            self.redraw.request();
        }
    }
}

impl Widget for Swatch {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        constraints.constrain(self.size)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        painter.fill_rect(rect, self.color);
        self.redraw.take();
    }

    fn needs_redraw(&self) -> bool {
        self.redraw.is_pending()
    }
}
