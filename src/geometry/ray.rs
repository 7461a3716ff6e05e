use crate::{Axis, AxisAlignedBox};

use ilattice::glam::Vec3;

/// A half-line starting at `origin`. The direction is normalized on construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// A zero `direction` yields a ray that hits nothing but a box containing its origin.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    #[inline]
    pub fn point_at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }

    /// Distance along the ray to the first point of `bounds`, or `None` if the ray misses.
    ///
    /// Returns `Some(0.0)` when the origin is inside the box. Each face plane the origin lies outside of is tested on its
    /// own, which keeps flat (zero-thickness) boxes hittable.
    pub fn hit_distance(&self, bounds: &AxisAlignedBox) -> Option<f32> {
        if bounds.contains(self.origin) {
            return Some(0.0);
        }

        let origin = self.origin.to_array();
        let direction = self.direction.to_array();
        let min = bounds.min.to_array();
        let max = bounds.max.to_array();

        let mut nearest: Option<f32> = None;
        for axis in Axis::ALL {
            let i = axis.index();
            let plane = if origin[i] < min[i] && direction[i] > 0.0 {
                min[i]
            } else if origin[i] > max[i] && direction[i] < 0.0 {
                max[i]
            } else {
                continue;
            };

            let t = (plane - origin[i]) / direction[i];
            if nearest.map_or(false, |d| t >= d) {
                continue;
            }

            let p = self.point_at(t).to_array();
            let inside_plane = Axis::ALL
                .into_iter()
                .map(|a| a.index())
                .filter(|&j| j != i)
                .all(|j| p[j] >= min[j] && p[j] <= max[j]);
            if inside_plane {
                nearest = Some(t);
            }
        }

        nearest
    }
}
