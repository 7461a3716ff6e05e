use crate::{Axis, AxisPermutation, Vertex};

use ilattice::glam::{Vec2, Vec3};

/// Metadata that's used to aid in the geometric calculations for one of the 6 possible cube faces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientedBlockFace {
    /// Determines the orientation of the plane.
    pub(crate) n_sign: i32,

    /// Determines the {N, U, V} <--> {X, Y, Z} relation.
    pub(crate) permutation: AxisPermutation,

    /// First in the `permutation` of +X, +Y, and +Z.
    pub(crate) n: Vec3,
    /// Second in the `permutation` of +X, +Y, and +Z.
    pub(crate) u: Vec3,
    /// Third in the `permutation` of +X, +Y, and +Z.
    pub(crate) v: Vec3,
}

impl OrientedBlockFace {
    pub const fn new(n_sign: i32, permutation: AxisPermutation) -> Self {
        let [n_axis, u_axis, v_axis] = permutation.axes();

        Self {
            n_sign,
            permutation,
            n: n_axis.get_unit_vector(),
            u: u_axis.get_unit_vector(),
            v: v_axis.get_unit_vector(),
        }
    }

    #[inline]
    pub fn signed_normal(&self) -> Vec3 {
        self.n * self.n_sign as f32
    }

    /// Returns the 4 corners of the unit quad on the `N` side of the unit cell centered at `cell_center`, in this order:
    ///
    /// ```text
    ///         2 ----> 3
    ///           ^
    ///     ^       \
    ///     |         \
    ///  +V |   0 ----> 1
    ///     |
    ///      -------->
    ///        +U
    ///
    /// (+N pointing out of the screen)
    /// ```
    #[inline]
    pub fn quad_corners(&self, cell_center: Vec3) -> [Vec3; 4] {
        let face_center = cell_center + self.signed_normal() * 0.5;
        let minu_minv = face_center - (self.u + self.v) * 0.5;
        let maxu_minv = minu_minv + self.u;
        let minu_maxv = minu_minv + self.v;
        let maxu_maxv = minu_minv + self.u + self.v;

        [minu_minv, maxu_minv, minu_maxv, maxu_maxv]
    }

    /// Indices into [`OrientedBlockFace::quad_corners`] that walk the quad's perimeter so that the normal computed from
    /// the first three corners points along [`OrientedBlockFace::signed_normal`].
    ///
    /// The walk depends on both the sign of the surface normal and the permutation of the UVs.
    #[inline]
    pub fn perimeter_order(&self) -> [usize; 4] {
        if self.n_sign * self.permutation.sign() > 0 {
            [0, 1, 3, 2]
        } else {
            [0, 2, 3, 1]
        }
    }

    /// The four vertices of the unit quad for the cell centered at `cell_center`, wound along the quad's perimeter.
    ///
    /// `u_flip_face` should correspond to the field on
    /// [`QuadCoordinateConfig`](crate::QuadCoordinateConfig).
    pub fn quad_vertices(&self, cell_center: Vec3, u_flip_face: Axis) -> [Vertex; 4] {
        let corners = self.quad_corners(cell_center);
        let tex_coords = self.tex_coords(u_flip_face);
        let normal = self.signed_normal();

        self.perimeter_order()
            .map(|i| Vertex::new(corners[i], normal, tex_coords[i]))
    }

    /// Returns the UV coordinates of the 4 corners of the quad. Returns
    /// vertices in the same order as [`OrientedBlockFace::quad_corners`].
    ///
    /// Each face shows one whole tile of a wrapping texture, with the top of
    /// the image toward +V.
    #[inline]
    pub fn tex_coords(&self, u_flip_face: Axis) -> [Vec2; 4] {
        let face_normal_axis = self.permutation.axes()[0];
        let flip_u = if self.n_sign < 0 {
            u_flip_face != face_normal_axis
        } else {
            u_flip_face == face_normal_axis
        };

        let (u0, u1) = if flip_u { (1.0, 0.0) } else { (0.0, 1.0) };

        [
            Vec2::new(u0, 0.0),
            Vec2::new(u1, 0.0),
            Vec2::new(u0, 1.0),
            Vec2::new(u1, 1.0),
        ]
    }
}
