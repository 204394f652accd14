use tinct_engine::coords::Vec2;

/// Size range a parent offers a child during measure.
///
/// A child may return any size; the parent enforces its own policy with
/// [`Constraints::constrain`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Child can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    /// No upper bound; the child picks its natural size.
    #[inline]
    pub fn unbounded() -> Self {
        Self::loose(Vec2::splat(f32::INFINITY))
    }

    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constrain_clamps_both_axes() {
        let c = Constraints { min: Vec2::new(10.0, 10.0), max: Vec2::new(100.0, 50.0) };
        assert_eq!(c.constrain(Vec2::new(5.0, 80.0)), Vec2::new(10.0, 50.0));
    }

    #[test]
    fn unbounded_keeps_natural_size() {
        assert_eq!(Constraints::unbounded().constrain(Vec2::new(360.0, 30.0)), Vec2::new(360.0, 30.0));
    }
}
