//! 5x5 homogeneous matrices for 4D transformations
//!
//! Points are carried as (x, y, z, w, 1) so that a single matrix product can
//! express any linear 4D transform. The rotations built here never touch the
//! fifth row or column, so the homogeneous unit passes through unchanged.

use crate::Vec4;

/// 5x5 matrix type (column-major: `m[col][row]`)
pub type Mat5 = [[f32; 5]; 5];

/// Identity matrix
pub const IDENTITY: Mat5 = [
    [1.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 1.0],
];

/// Create a rotation matrix in the plane spanned by two of the four spatial axes.
///
/// A positive `angle` carries axis `p1` toward axis `p2`: rotating the unit
/// vector along `p1` by a quarter turn yields the unit vector along `p2`.
///
/// # Arguments
/// * `angle` - Rotation angle in radians
/// * `p1`, `p2` - Indices of the axes forming the rotation plane (0=X, 1=Y, 2=Z, 3=W)
///
/// # Example
/// ```
/// use prism4d_math::mat5::plane_rotation;
/// // Quarter turn in the XW plane
/// let m = plane_rotation(std::f32::consts::FRAC_PI_2, 0, 3);
/// ```
pub fn plane_rotation(angle: f32, p1: usize, p2: usize) -> Mat5 {
    debug_assert!(p1 < 4 && p2 < 4 && p1 != p2, "invalid rotation plane ({p1}, {p2})");

    let (sn, cs) = angle.sin_cos();
    let mut m = IDENTITY;

    m[p1][p1] = cs;
    m[p2][p2] = cs;
    m[p1][p2] = sn;
    m[p2][p1] = -sn;

    m
}

/// Multiply two matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat5, b: Mat5) -> Mat5 {
    let mut result = [[0.0f32; 5]; 5];

    for i in 0..5 {
        for j in 0..5 {
            for k in 0..5 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Multiply a homogeneous 5-vector: result = M * h
#[allow(clippy::needless_range_loop)]
pub fn transform_homogeneous(m: Mat5, h: [f32; 5]) -> [f32; 5] {
    let mut out = [0.0f32; 5];
    for row in 0..5 {
        for col in 0..5 {
            out[row] += m[col][row] * h[col];
        }
    }
    out
}

/// Transform a point: M * (x, y, z, w, 1), keeping the first four components
pub fn transform(m: Mat5, v: Vec4) -> Vec4 {
    Vec4::from_homogeneous(transform_homogeneous(m, v.to_homogeneous()))
}

/// Get a column from a matrix
pub fn get_column(m: Mat5, col: usize) -> [f32; 5] {
    m[col]
}

/// Transpose a matrix
///
/// For the rotations in this module the transpose is the inverse.
#[allow(clippy::needless_range_loop)]
pub fn transpose(m: Mat5) -> Mat5 {
    let mut t = [[0.0f32; 5]; 5];
    for i in 0..5 {
        for j in 0..5 {
            t[i][j] = m[j][i];
        }
    }
    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec4, b: Vec4) -> bool {
        a.max_abs_diff(b) < EPSILON
    }

    fn mat_approx_eq(a: Mat5, b: Mat5) -> bool {
        a.iter().flatten().zip(b.iter().flatten()).all(|(x, y)| approx_eq(*x, *y))
    }

    #[test]
    fn test_identity() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(transform(IDENTITY, v), v);
    }

    #[test]
    fn test_plane_rotation_xw_quarter_turn() {
        let m = plane_rotation(FRAC_PI_2, 0, 3);

        let result = transform(m, Vec4::X);
        assert!(vec_approx_eq(result, Vec4::W), "X should become W, got {:?}", result);

        let result = transform(m, Vec4::W);
        assert!(vec_approx_eq(result, -Vec4::X), "W should become -X, got {:?}", result);

        // Y and Z are fixed
        assert!(vec_approx_eq(transform(m, Vec4::Y), Vec4::Y));
        assert!(vec_approx_eq(transform(m, Vec4::Z), Vec4::Z));
    }

    #[test]
    fn test_plane_rotation_yz() {
        let m = plane_rotation(FRAC_PI_2, 1, 2);

        let result = transform(m, Vec4::Y);
        assert!(vec_approx_eq(result, Vec4::Z), "Y should become Z, got {:?}", result);

        let result = transform(m, Vec4::Z);
        assert!(vec_approx_eq(result, -Vec4::Y), "Z should become -Y, got {:?}", result);
    }

    #[test]
    fn test_homogeneous_unit_untouched() {
        let m = plane_rotation(1.3, 2, 3);
        let out = transform_homogeneous(m, [1.0, -2.0, 3.0, -4.0, 1.0]);
        assert_eq!(out[4], 1.0);
        assert_eq!(get_column(m, 4), [0.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_mul_identity() {
        let a = plane_rotation(0.5, 0, 1);
        assert!(mat_approx_eq(mul(IDENTITY, a), a));
        assert!(mat_approx_eq(mul(a, IDENTITY), a));
    }

    #[test]
    fn test_mul_composition() {
        // Two 45° rotations should equal one 90° rotation
        let r45 = plane_rotation(FRAC_PI_4, 1, 3);
        let r90 = plane_rotation(FRAC_PI_2, 1, 3);

        let composed = mul(r45, r45);
        assert!(mat_approx_eq(composed, r90));
    }

    #[test]
    fn test_mul_applies_right_operand_first() {
        let xy = plane_rotation(FRAC_PI_2, 0, 1);
        let yw = plane_rotation(FRAC_PI_2, 1, 3);

        // X -(xy)-> Y -(yw)-> W
        let result = transform(mul(yw, xy), Vec4::X);
        assert!(vec_approx_eq(result, Vec4::W), "got {:?}", result);
    }

    #[test]
    fn test_transpose_is_inverse() {
        let m = plane_rotation(0.9, 2, 3);
        assert!(mat_approx_eq(mul(transpose(m), m), IDENTITY));
        assert!(mat_approx_eq(transpose(transpose(m)), m));
    }
}
