use crate::Axis;

use ilattice::glam::Vec3;

/// One of the six canonical axis-aligned face orientations, or [`Direction::None`] for a normal that does not line up with
/// any axis.
///
/// The mapping follows a left-handed, Y-up coordinate system:
///
/// ```text
///       +Y (Up)
///       | +Z (Forward)
/// -X____|/____+X (Right)
///      /|
///    -Z |
///       -Y
/// ```
///
/// `None` is a regular value: it survives [`Direction::inverse`] and maps to the zero vector, so callers have to check for it
/// instead of relying on a panic.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum Direction {
    Forward = 0,
    Back = 1,
    Left = 2,
    Right = 3,
    Up = 4,
    Down = 5,
    None = 6,
}

impl Direction {
    /// The six canonical directions, in the order the initial cube adds its faces.
    pub const CANONICAL: [Direction; 6] = [
        Direction::Forward,
        Direction::Back,
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Maximum per-component difference for a normal to count as aligned with an axis.
    pub const NORMAL_TOLERANCE: f32 = 1e-4;

    /// Classifies `normal` using [`Direction::NORMAL_TOLERANCE`].
    #[inline]
    pub fn from_normal(normal: Vec3) -> Self {
        Self::from_normal_with_tolerance(normal, Self::NORMAL_TOLERANCE)
    }

    pub fn from_normal_with_tolerance(normal: Vec3, tolerance: f32) -> Self {
        Self::CANONICAL
            .into_iter()
            .find(|direction| direction.to_vector().abs_diff_eq(normal, tolerance))
            .unwrap_or(Direction::None)
    }

    /// Forward and back, left and right, up and down swap. `None` stays `None`.
    #[inline]
    pub const fn inverse(self) -> Self {
        match self {
            Direction::Forward => Direction::Back,
            Direction::Back => Direction::Forward,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::None => Direction::None,
        }
    }

    /// The unit vector for this direction, or zero for `None`.
    #[inline]
    pub fn to_vector(self) -> Vec3 {
        match self {
            Direction::Forward => Vec3::Z,
            Direction::Back => -Vec3::Z,
            Direction::Left => -Vec3::X,
            Direction::Right => Vec3::X,
            Direction::Up => Vec3::Y,
            Direction::Down => -Vec3::Y,
            Direction::None => Vec3::ZERO,
        }
    }

    /// The sign and axis of the normal, if this is a canonical direction.
    #[inline]
    pub const fn signed_axis(self) -> Option<(i32, Axis)> {
        match self {
            Direction::Forward => Some((1, Axis::Z)),
            Direction::Back => Some((-1, Axis::Z)),
            Direction::Left => Some((-1, Axis::X)),
            Direction::Right => Some((1, Axis::X)),
            Direction::Up => Some((1, Axis::Y)),
            Direction::Down => Some((-1, Axis::Y)),
            Direction::None => None,
        }
    }

    #[inline]
    pub const fn is_canonical(self) -> bool {
        !matches!(self, Direction::None)
    }

    /// Position in [`Direction::CANONICAL`].
    #[inline]
    pub(crate) const fn canonical_index(self) -> Option<usize> {
        match self {
            Direction::None => None,
            d => Some(d as usize),
        }
    }
}
