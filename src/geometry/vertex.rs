use ilattice::glam::{Vec2, Vec3};

/// A single corner of a quad face. Vertices are plain values and are never shared between faces.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub tex_coord: Vec2,
}

impl Vertex {
    #[inline]
    pub const fn new(position: Vec3, normal: Vec3, tex_coord: Vec2) -> Self {
        Self {
            position,
            normal,
            tex_coord,
        }
    }

    /// A vertex with no normal or texture coordinate.
    #[inline]
    pub const fn at(position: Vec3) -> Self {
        Self::new(position, Vec3::ZERO, Vec2::ZERO)
    }

    /// The same vertex moved by `offset`. Normal and texture coordinate are unchanged.
    #[inline]
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            position: self.position + offset,
            ..*self
        }
    }
}
