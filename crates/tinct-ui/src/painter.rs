use std::sync::Arc;

use tinct_engine::coords::{Rect, Vec2};
use tinct_engine::paint::Color;
use tinct_engine::raster::Raster;
use tinct_engine::scene::{DrawList, ZIndex};

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` and hands out increasing z-indices, so
/// later calls always paint on top of earlier ones.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list, z: 0 }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let z = self.next_z();
        self.draw_list.push_fill_rect(z, rect, color);
    }

    /// Blits a cached raster stretched over `rect` (nearest neighbour).
    pub fn image(&mut self, rect: Rect, raster: &Arc<Raster>) {
        let z = self.next_z();
        self.draw_list.push_image(z, rect, Arc::clone(raster));
    }

    /// Vertical stroke centred on `x` spanning `top..bottom`.
    pub fn vline(&mut self, x: f32, top: f32, bottom: f32, width: f32, color: Color) {
        let z = self.next_z();
        self.draw_list.push_line(z, Vec2::new(x, top), Vec2::new(x, bottom), width, color);
    }

    /// Circle outline with stroke `width` centred on `radius`.
    pub fn ring(&mut self, center: Vec2, radius: f32, width: f32, color: Color) {
        let z = self.next_z();
        self.draw_list.push_ring(z, center, radius, width, color);
    }

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_engine::scene::DrawCmd;

    #[test]
    fn each_call_paints_on_top_of_the_last() {
        let mut list = DrawList::new();
        {
            let mut p = Painter::new(&mut list);
            p.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::RED);
            p.ring(Vec2::zero(), 2.0, 1.0, Color::WHITE);
        }
        let zs: Vec<i32> = list.items().iter().map(|i| i.key.z.0).collect();
        assert_eq!(zs, vec![0, 1]);
        assert!(matches!(list.items()[1].cmd, DrawCmd::Ring(_)));
    }

    #[test]
    fn image_shares_the_raster() {
        let raster = Arc::new(Raster::new(2, 2, Color::WHITE));
        let mut list = DrawList::new();
        Painter::new(&mut list).image(Rect::new(0.0, 0.0, 4.0, 4.0), &raster);
        assert_eq!(Arc::strong_count(&raster), 2);
    }
}
