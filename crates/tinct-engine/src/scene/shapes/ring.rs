use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Stroked circle outline centred on `radius`.
#[derive(Debug, Clone, PartialEq)]
pub struct RingCmd {
    pub center: Vec2,
    pub radius: f32,
    pub width: f32,
    pub color: Color,
}

impl DrawList {
    #[inline]
    pub fn push_ring(&mut self, z: ZIndex, center: Vec2, radius: f32, width: f32, color: Color) {
        self.push(z, DrawCmd::Ring(RingCmd { center, radius, width, color }));
    }
}
