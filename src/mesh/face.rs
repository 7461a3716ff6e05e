use crate::{AxisAlignedBox, Direction, Vertex};

use ilattice::glam::Vec3;
use std::fmt;

/// Identifies a face for the whole lifetime of its [`FaceMesh`](crate::FaceMesh). Ids start at 1, only ever grow, and
/// survive [`FaceMesh::move_face`](crate::FaceMesh::move_face).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FaceId(pub u32);

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A planar quad owned by a [`FaceMesh`](crate::FaceMesh).
///
/// The normal and bounding box are derived when the face is created and are never stale: the only way to change the
/// vertices is to replace the face.
#[derive(Clone, Debug, PartialEq)]
pub struct Face {
    id: FaceId,
    vertices: [Vertex; 4],
    normal: Vec3,
    bounding_box: AxisAlignedBox,
}

impl Face {
    pub(crate) fn new(id: FaceId, vertices: [Vertex; 4]) -> Self {
        let normal = face_normal(&vertices);
        Self::with_normal(id, vertices, normal)
    }

    /// Keeps a known normal instead of deriving it from `vertices`.
    pub(crate) fn with_normal(id: FaceId, vertices: [Vertex; 4], normal: Vec3) -> Self {
        Self {
            id,
            bounding_box: calculate_min_max(&vertices),
            vertices,
            normal,
        }
    }

    #[inline]
    pub fn id(&self) -> FaceId {
        self.id
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex; 4] {
        &self.vertices
    }

    #[inline]
    pub fn positions(&self) -> [Vec3; 4] {
        self.vertices.map(|v| v.position)
    }

    /// Unit length, or zero for a degenerate quad.
    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    #[inline]
    pub fn bounding_box(&self) -> &AxisAlignedBox {
        &self.bounding_box
    }

    /// The canonical direction of the normal, or [`Direction::None`].
    #[inline]
    pub fn direction(&self) -> Direction {
        Direction::from_normal(self.normal)
    }

    /// Mean Euclidean distance from `origin` to the four vertices.
    pub fn distance_to(&self, origin: Vec3) -> f32 {
        let sum: f32 = self.vertices.iter().map(|v| origin.distance(v.position)).sum();
        sum / self.vertices.len() as f32
    }
}

/// The unit normal of the plane through the first three vertices, `(P0 - P1) x (P1 - P2)`. The fourth vertex is assumed to
/// be coplanar.
///
/// Collinear or coincident vertices give the zero vector rather than an error.
pub fn face_normal(vertices: &[Vertex; 4]) -> Vec3 {
    let [p0, p1, p2, _] = vertices.map(|v| v.position);
    (p0 - p1).cross(p1 - p2).normalize_or_zero()
}

/// Componentwise minimum and maximum over all four positions.
pub fn calculate_min_max(vertices: &[Vertex; 4]) -> AxisAlignedBox {
    let [first, rest @ ..] = vertices.map(|v| v.position);
    AxisAlignedBox::enclosing(first, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad(points: [[f32; 3]; 4]) -> [Vertex; 4] {
        points.map(|p| Vertex::at(Vec3::from(p)))
    }

    #[test]
    fn normal_follows_winding() {
        let ccw = quad([[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]]);
        assert_eq!(face_normal(&ccw), Vec3::Z);

        let cw = quad([[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0], [1.0, 0.0, 0.0]]);
        assert_eq!(face_normal(&cw), -Vec3::Z);
    }

    #[test]
    fn normal_is_unit_for_large_quads() {
        let big = quad([[0.0, 0.0, 0.0], [10.0, 0.0, 0.0], [10.0, 0.0, 7.0], [0.0, 0.0, 7.0]]);
        let n = face_normal(&big);
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert_eq!(Direction::from_normal(n), Direction::Down);
    }

    #[test]
    fn degenerate_quad_has_zero_normal() {
        let collinear = quad([[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [3.0, 0.0, 0.0]]);
        assert_eq!(face_normal(&collinear), Vec3::ZERO);

        let face = Face::new(FaceId(1), collinear);
        assert_eq!(face.direction(), Direction::None);
    }

    #[test]
    fn bounding_box_is_tight() {
        let vertices = quad([[1.0, 2.0, 3.0], [1.0, -2.0, 3.0], [1.0, -2.0, -5.0], [1.0, 2.0, -5.0]]);
        let bounds = calculate_min_max(&vertices);
        assert_eq!(bounds.min, Vec3::new(1.0, -2.0, -5.0));
        assert_eq!(bounds.max, Vec3::new(1.0, 2.0, 3.0));
        for v in vertices {
            assert!(bounds.contains(v.position));
        }
    }

    #[test]
    fn distance_is_mean_over_vertices() {
        let face = Face::new(
            FaceId(1),
            quad([[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [2.0, 2.0, 0.0], [0.0, 2.0, 0.0]]),
        );
        // Distances 0, 2, 2*sqrt(2), 2.
        let expected = (4.0 + 2.0 * 2.0_f32.sqrt()) / 4.0;
        assert!((face.distance_to(Vec3::ZERO) - expected).abs() < 1e-6);
    }

    #[test]
    fn id_display() {
        assert_eq!(FaceId(42).to_string(), "42");
        assert!(FaceId(1) < FaceId(2));
    }
}
