use ilattice::glam::Vec3;

/// An axis-aligned bounding box given by its inclusive minimum and maximum corners.
///
/// The box of a single quad is flat along the quad's normal axis, so a zero-size extent on one axis is normal here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisAlignedBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl AxisAlignedBox {
    #[inline]
    pub fn from_min_and_max(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// The smallest box containing `first` and every point in `rest`.
    pub fn enclosing(first: Vec3, rest: impl IntoIterator<Item = Vec3>) -> Self {
        rest.into_iter()
            .fold(Self::from_min_and_max(first, first), |bounds, p| {
                bounds.including(p)
            })
    }

    /// Grows the box to contain `p`.
    #[inline]
    pub fn including(&self, p: Vec3) -> Self {
        Self {
            min: self.min.min(p),
            max: self.max.max(p),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Inclusive on every face.
    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    #[inline]
    pub fn abs_diff_eq(&self, other: &Self, max_abs_diff: f32) -> bool {
        self.min.abs_diff_eq(other.min, max_abs_diff) && self.max.abs_diff_eq(other.max, max_abs_diff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enclosing_is_tight() {
        let points = [
            Vec3::new(1.0, -2.0, 0.5),
            Vec3::new(-3.0, 4.0, 0.5),
            Vec3::new(0.0, 0.0, 0.5),
        ];
        let bounds = AxisAlignedBox::enclosing(points[0], points[1..].iter().copied());
        assert_eq!(bounds.min, Vec3::new(-3.0, -2.0, 0.5));
        assert_eq!(bounds.max, Vec3::new(1.0, 4.0, 0.5));
        assert_eq!(bounds.max - bounds.min, Vec3::new(4.0, 6.0, 0.0));
        for p in points {
            assert!(bounds.contains(p));
        }
        assert!(!bounds.contains(Vec3::new(0.0, 0.0, 0.6)));
    }

    #[test]
    fn translation_moves_both_corners() {
        let bounds = AxisAlignedBox::from_min_and_max(Vec3::ZERO, Vec3::ONE);
        let moved = bounds.translated(Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(moved.min, Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(moved.max, Vec3::new(1.0, 1.0, 3.0));
        assert_eq!(moved.center(), bounds.center() + Vec3::new(0.0, 0.0, 2.0));
        assert!(moved.abs_diff_eq(&bounds.translated(Vec3::new(0.0, 0.0, 2.000_001)), 1e-5));
    }
}
