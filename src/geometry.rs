//! Box geometry and coordinate systems.
//!
//! Everything in this module is a plain value type. Nothing here knows about
//! faces being selected or meshes being edited.
//!
//! # Quads and Faces
//!
//! A box is composed of six **faces**, and every face of an editable mesh is a
//! single **quad**: four **vertices**, each with a position, a **normal** and a
//! **UV** texture coordinate. The four vertices are wound along the quad's
//! perimeter, so `[0, 1]`, `[1, 2]`, `[2, 3]` and `[3, 0]` are its edges.
//!
//! ```text
//!            3 ------ 2
//!            |        |
//!            |   N    |       N = (P0 - P1) x (P1 - P2)
//!            |   x    |
//!            |        |
//!            0 ------ 1
//! ```
//!
//! # Directions
//!
//! A face whose normal lines up with a coordinate axis has one of six
//! canonical [`Direction`]s. The mapping follows a left-handed coordinate
//! system with Y up:
//!
//! ```text
//!       +Y
//!       | +Z
//! -X____|/____+X
//!      /|
//!    -Z |
//!       -Y
//! ```
//!
//! # `{N, U, V}` Space
//!
//! "`{N, U, V}` space" is the **face-local coordinate space** (**N**ormal, **U**,
//! **V**). An [`OrientedBlockFace`] maps it to `{X, Y, Z}` with an
//! [`AxisPermutation`] and the sign of the normal. This lets us build the
//! corners, winding and UVs of any side of a unit cell with one routine, see
//! [`OrientedBlockFace::quad_vertices`].
//!
//! Six [`OrientedBlockFace`] definitions combine to form a
//! [`QuadCoordinateConfig`], the template table shared by the initial cube and
//! by extrusion.

mod aabb;
mod axis;
mod direction;
mod face;
mod ray;
mod vertex;

pub use aabb::*;
pub use axis::*;
pub use direction::*;
pub use face::*;
pub use ray::*;
pub use vertex::*;

use ilattice::glam::Vec3;

/// One [`OrientedBlockFace`] per canonical [`Direction`], plus the texture orientation, for a given coordinate system.
///
/// See the [`geometry` module documentation][crate::geometry] for more
/// information on `{N, U, V}` space.
#[derive(Clone, Debug, PartialEq)]
pub struct QuadCoordinateConfig {
    /// Indexed in [`Direction::CANONICAL`] order.
    pub faces: [OrientedBlockFace; 6],

    /// For a given coordinate system, one of the two axes that isn't UP must be
    /// flipped in the U texel coordinate direction to avoid incorrect texture
    /// mirroring. In a left-handed coordinate system with +Y up, that is
    /// [`Axis::Z`]: on the -Z face (the one looking at a camera on the -Z side)
    /// +U runs toward +X, while on the +Z face, seen from behind, it must run
    /// toward -X.
    pub u_flip_face: Axis,
}

impl QuadCoordinateConfig {
    /// The template for `direction`, or `None` for [`Direction::None`].
    #[inline]
    pub fn face(&self, direction: Direction) -> Option<&OrientedBlockFace> {
        direction.canonical_index().map(|i| &self.faces[i])
    }

    /// The vertices of the unit quad on the `direction` side of the unit cell centered at `cell_center`.
    #[inline]
    pub fn quad_vertices(&self, direction: Direction, cell_center: Vec3) -> Option<[Vertex; 4]> {
        self.face(direction)
            .map(|face| face.quad_vertices(cell_center, self.u_flip_face))
    }
}

impl Default for QuadCoordinateConfig {
    fn default() -> Self {
        LEFT_HANDED_Y_UP_CONFIG
    }
}

/// Coordinate configuration for a left-handed coordinate system with Y up.
///
/// ```text
///       +Y
///       | +Z
/// -X____|/____+X
///      /|
///    -Z |
///       -Y
/// ```
pub const LEFT_HANDED_Y_UP_CONFIG: QuadCoordinateConfig = QuadCoordinateConfig {
    // Y is always in the V direction when it's not the normal. When Y is the
    // normal we use Yzx permutations.
    faces: [
        OrientedBlockFace::new(1, AxisPermutation::Zxy),
        OrientedBlockFace::new(-1, AxisPermutation::Zxy),
        OrientedBlockFace::new(-1, AxisPermutation::Xzy),
        OrientedBlockFace::new(1, AxisPermutation::Xzy),
        OrientedBlockFace::new(1, AxisPermutation::Yzx),
        OrientedBlockFace::new(-1, AxisPermutation::Yzx),
    ],
    u_flip_face: Axis::Z,
};
