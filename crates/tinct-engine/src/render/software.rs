use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::raster::Raster;
use crate::scene::shapes::{FillRectCmd, ImageCmd, LineCmd, RingCmd};
use crate::scene::{DrawCmd, DrawList};

/// Paints a draw list into a [`Raster`] framebuffer.
///
/// One framebuffer pixel is one logical pixel. Coverage is decided by pixel
/// centres; there is no anti-aliasing and no blending, colors are written
/// opaque.
#[derive(Debug, Clone)]
pub struct SoftwareRenderer {
    pub clear_color: Color,
}

impl SoftwareRenderer {
    pub fn new(clear_color: Color) -> Self {
        Self { clear_color }
    }

    pub fn render(&self, list: &mut DrawList, target: &mut Raster) {
        target.fill(self.clear_color.opaque());
        let mut drawn = 0usize;
        for item in list.iter_in_paint_order() {
            match &item.cmd {
                DrawCmd::FillRect(cmd) => fill_rect(cmd, target),
                DrawCmd::Line(cmd) => line(cmd, target),
                DrawCmd::Ring(cmd) => ring(cmd, target),
                DrawCmd::Image(cmd) => image(cmd, target),
            }
            drawn += 1;
        }
        log::trace!("software render: {drawn} commands into {}×{}", target.width(), target.height());
    }
}

impl Default for SoftwareRenderer {
    fn default() -> Self {
        Self::new(Color::BLACK)
    }
}

/// Pixel index range whose centres fall in `[lo, hi)`, clipped to `len`.
fn covered(lo: f32, hi: f32, len: usize) -> core::ops::Range<usize> {
    let start = (lo - 0.5).ceil().max(0.0);
    let end = (hi - 0.5).ceil().max(0.0).min(len as f32);
    if start >= end {
        return 0..0;
    }
    start as usize..end as usize
}

fn fill_rect(cmd: &FillRectCmd, target: &mut Raster) {
    let max = cmd.rect.max();
    let color = cmd.color.opaque();
    for y in covered(cmd.rect.origin.y, max.y, target.height()) {
        for x in covered(cmd.rect.origin.x, max.x, target.width()) {
            target.set(x, y, color);
        }
    }
}

fn image(cmd: &ImageCmd, target: &mut Raster) {
    let max = cmd.rect.max();
    for y in covered(cmd.rect.origin.y, max.y, target.height()) {
        for x in covered(cmd.rect.origin.x, max.x, target.width()) {
            // Sample at the pixel's integer local position, the same point a
            // pointer event on that pixel reports.
            let local = cmd.rect.local(Vec2::new(x as f32, y as f32)).max(Vec2::zero());
            let color = cmd.raster.sample_scaled(local, cmd.rect.size);
            target.set(x, y, color.opaque());
        }
    }
}

fn line(cmd: &LineCmd, target: &mut Raster) {
    let half = (cmd.width * 0.5).max(0.5);
    let bounds = Rect::new(
        cmd.from.x.min(cmd.to.x) - half,
        cmd.from.y.min(cmd.to.y) - half,
        (cmd.to.x - cmd.from.x).abs() + 2.0 * half,
        (cmd.to.y - cmd.from.y).abs() + 2.0 * half,
    );
    let seg = cmd.to - cmd.from;
    let len_sq = seg.x * seg.x + seg.y * seg.y;
    let color = cmd.color.opaque();
    let max = bounds.max();

    for y in covered(bounds.origin.y, max.y, target.height()) {
        for x in covered(bounds.origin.x, max.x, target.width()) {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let rel = p - cmd.from;
            let t = if len_sq > 0.0 { (rel.x * seg.x + rel.y * seg.y) / len_sq } else { 0.0 };
            // Butt caps: nothing past either endpoint.
            if !(0.0..=1.0).contains(&t) {
                continue;
            }
            let d = rel - seg * t;
            if d.x * d.x + d.y * d.y <= half * half {
                target.set(x, y, color);
            }
        }
    }
}

fn ring(cmd: &RingCmd, target: &mut Raster) {
    let half = (cmd.width * 0.5).max(0.5);
    let outer = cmd.radius + half;
    let max = cmd.center + Vec2::splat(outer);
    let min = cmd.center - Vec2::splat(outer);
    let color = cmd.color.opaque();

    for y in covered(min.y, max.y, target.height()) {
        for x in covered(min.x, max.x, target.width()) {
            let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - cmd.center;
            let dist = (d.x * d.x + d.y * d.y).sqrt();
            if (dist - cmd.radius).abs() <= half {
                target.set(x, y, color);
            }
        }
    }
}
