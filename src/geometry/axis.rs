use ilattice::glam::Vec3;

/// Either the X, Y, or Z axis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// The index for a point's component on this axis.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    #[inline]
    pub const fn get_unit_vector(&self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

/// One of the six possible `{N, U, V}` --> `{X, Y, Z}` mappings.
///
/// This can be combined with a `-1` or `+1` sign for the **N**ormal axis to
/// make an [`OrientedBlockFace`][crate::OrientedBlockFace].
///
/// See the [`geometry` module documentation][crate::geometry] for more
/// information on `{N, U, V}` space.
///
/// # Even and Odd
///
/// Even permutations:
/// - [AxisPermutation::Xyz]
/// - [AxisPermutation::Zxy]
/// - [AxisPermutation::Yzx]
///
/// Odd permutations:
/// - [AxisPermutation::Zyx]
/// - [AxisPermutation::Xzy]
/// - [AxisPermutation::Yxz]
///
/// For an even permutation `U x V = +N`, for an odd one `U x V = -N`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AxisPermutation {
    // Even permutations
    Xyz,
    Zxy,
    Yzx,
    // Odd permutations
    Zyx,
    Xzy,
    Yxz,
}

impl AxisPermutation {
    #[inline]
    pub const fn sign(&self) -> i32 {
        match self {
            AxisPermutation::Xyz => 1,
            AxisPermutation::Zxy => 1,
            AxisPermutation::Yzx => 1,
            AxisPermutation::Zyx => -1,
            AxisPermutation::Xzy => -1,
            AxisPermutation::Yxz => -1,
        }
    }

    /// Returns the [`Axes`] in the order specified by the permutation.
    ///
    /// # Example
    ///
    /// ```
    /// # use box_mesh::*;
    /// let xyz = AxisPermutation::Xyz;
    /// assert_eq!(xyz.axes(), [Axis::X, Axis::Y, Axis::Z]);
    /// ```
    ///
    /// [`Axes`]: Axis
    #[inline]
    pub const fn axes(&self) -> [Axis; 3] {
        match self {
            AxisPermutation::Xyz => [Axis::X, Axis::Y, Axis::Z],
            AxisPermutation::Zxy => [Axis::Z, Axis::X, Axis::Y],
            AxisPermutation::Yzx => [Axis::Y, Axis::Z, Axis::X],
            AxisPermutation::Zyx => [Axis::Z, Axis::Y, Axis::X],
            AxisPermutation::Xzy => [Axis::X, Axis::Z, Axis::Y],
            AxisPermutation::Yxz => [Axis::Y, Axis::X, Axis::Z],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutation_sign_matches_cross_product() {
        let all = [
            AxisPermutation::Xyz,
            AxisPermutation::Zxy,
            AxisPermutation::Yzx,
            AxisPermutation::Zyx,
            AxisPermutation::Xzy,
            AxisPermutation::Yxz,
        ];
        for permutation in all {
            let [n, u, v] = permutation.axes().map(|a| a.get_unit_vector());
            assert_eq!(u.cross(v), n * permutation.sign() as f32, "{permutation:?}");
        }
    }
}
