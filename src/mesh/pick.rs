use crate::{Face, FaceId, Ray};

use ilattice::glam::Vec3;

/// Limits on how far along a ray a face can be picked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceConfig {
    /// Hits at or below this distance are ignored, so the face the camera sits on or behind is never picked.
    pub min_distance: f32,
    /// Hits at or beyond this distance are ignored.
    pub max_distance: f32,
}

impl TraceConfig {
    pub const DEFAULT_MIN_DISTANCE: f32 = 0.1;
    pub const DEFAULT_MAX_DISTANCE: f32 = 250.0;

    /// The default epsilon with a custom range.
    #[inline]
    pub fn with_max_distance(max_distance: f32) -> Self {
        Self {
            max_distance,
            ..Self::default()
        }
    }

    #[inline]
    pub(crate) fn accepts(&self, hit_distance: f32) -> bool {
        hit_distance > self.min_distance && hit_distance < self.max_distance
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            min_distance: Self::DEFAULT_MIN_DISTANCE,
            max_distance: Self::DEFAULT_MAX_DISTANCE,
        }
    }
}

/// The face picked by [`FaceMesh::trace_line`](crate::FaceMesh::trace_line).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceHit {
    pub face: FaceId,
    /// Where the ray enters the face's bounding box. This is an approximation of the point on the quad.
    pub position: Vec3,
    /// Distance along the ray to `position`.
    pub distance: f32,
    /// The [`PickHeuristic`] score that won.
    pub score: f32,
}

/// A strategy for ranking the faces whose bounding boxes a ray enters. The lowest score wins; on a tie the face that comes
/// first in the mesh wins.
pub trait PickHeuristic {
    /// `hit_distance` is the distance along `ray` to the face's bounding box.
    fn score(&self, face: &Face, ray: &Ray, hit_distance: f32) -> f32;
}

/// Ranks faces by the mean distance from the ray origin to their vertices.
///
/// Bounding-box hit distances are identical for faces that share an edge, the vertex mean usually tells them apart. It is
/// not a true nearest-point distance, so a visually farther face can win when two faces overlap on screen.
#[derive(Clone, Copy, Debug, Default)]
pub struct MeanVertexDistance;

impl PickHeuristic for MeanVertexDistance {
    #[inline]
    fn score(&self, face: &Face, ray: &Ray, _hit_distance: f32) -> f32 {
        face.distance_to(ray.origin)
    }
}

/// Ranks faces by where the ray enters their bounding box.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoxHitDistance;

impl PickHeuristic for BoxHitDistance {
    #[inline]
    fn score(&self, _face: &Face, _ray: &Ray, hit_distance: f32) -> f32 {
        hit_distance
    }
}

impl<F> PickHeuristic for F
where
    F: Fn(&Face, &Ray, f32) -> f32,
{
    #[inline]
    fn score(&self, face: &Face, ray: &Ray, hit_distance: f32) -> f32 {
        self(face, ray, hit_distance)
    }
}
