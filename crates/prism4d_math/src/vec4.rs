//! 4D Vector type

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

/// One of the four coordinate axes of 4D space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
    /// The extrusion axis (ana/kata)
    W,
}

impl Axis {
    /// All four axes in component order
    pub const ALL: [Axis; 4] = [Axis::X, Axis::Y, Axis::Z, Axis::W];

    /// Row/column index of this axis in a homogeneous matrix
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
            Axis::W => 3,
        }
    }
}

/// 4D Vector with x, y, z, w components
///
/// Extruded meshes start with w = 0 on the near cap and w = distance on the
/// far cap; rotations in the XW, YW and ZW planes mix w back into x, y, z.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0, z: 0.0, w: 0.0 };
    pub const Z: Self = Self { x: 0.0, y: 0.0, z: 1.0, w: 0.0 };
    pub const W: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    /// Create a new Vec4
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Lift a 3D point into 4D at the given w
    #[inline]
    pub const fn from_xyz(p: [f32; 3], w: f32) -> Self {
        Self::new(p[0], p[1], p[2], w)
    }

    /// Copy of this vector with w replaced
    #[inline]
    pub const fn with_w(self, w: f32) -> Self {
        Self::new(self.x, self.y, self.z, w)
    }

    /// Read the component along `axis`
    #[inline]
    pub fn get(self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
            Axis::W => self.w,
        }
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Length squared (faster than length)
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Extract the xyz components as an array (for 3D rendering)
    #[inline]
    pub fn xyz(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Homogeneous form (x, y, z, w, 1)
    #[inline]
    pub fn to_homogeneous(self) -> [f32; 5] {
        [self.x, self.y, self.z, self.w, 1.0]
    }

    /// Drop the homogeneous unit of a 5-vector
    #[inline]
    pub fn from_homogeneous(h: [f32; 5]) -> Self {
        Self::new(h[0], h[1], h[2], h[3])
    }

    /// Largest absolute component difference, for tolerance checks
    #[inline]
    pub fn max_abs_diff(self, other: Self) -> f32 {
        let d = self - other;
        d.x.abs().max(d.y.abs()).max(d.z.abs()).max(d.w.abs())
    }
}

impl std::ops::Add for Vec4 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z, self.w + other.w)
    }
}

impl std::ops::Sub for Vec4 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z, self.w - other.w)
    }
}

impl std::ops::Mul<f32> for Vec4 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar, self.w * scalar)
    }
}

impl std::ops::Neg for Vec4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_xyz_lifts_to_w() {
        let v = Vec4::from_xyz([1.0, 2.0, 3.0], 0.0);
        assert_eq!(v, Vec4::new(1.0, 2.0, 3.0, 0.0));

        let far = v.with_w(5.0);
        assert_eq!(far.xyz(), [1.0, 2.0, 3.0]);
        assert_eq!(far.w, 5.0);
    }

    #[test]
    fn test_get_by_axis() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let components: Vec<f32> = Axis::ALL.iter().map(|&a| v.get(a)).collect();
        assert_eq!(components, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_axis_index_matches_component_order() {
        for (i, axis) in Axis::ALL.iter().enumerate() {
            assert_eq!(axis.index(), i);
        }
    }

    #[test]
    fn test_homogeneous_round_trip_keeps_unit() {
        let v = Vec4::new(-1.0, 0.5, 2.0, 7.0);
        let h = v.to_homogeneous();
        assert_eq!(h[4], 1.0);
        assert_eq!(Vec4::from_homogeneous(h), v);
    }

    #[test]
    fn test_length() {
        assert_eq!(Vec4::W.length(), 1.0);

        let v = Vec4::new(1.0, 1.0, 1.0, 1.0);
        assert!((v.length() - 2.0).abs() < 0.0001);
    }

    #[test]
    fn test_max_abs_diff() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(1.5, 2.0, 1.0, 4.25);
        assert_eq!(a.max_abs_diff(b), 2.0);
        assert_eq!(a.max_abs_diff(a), 0.0);
    }

    #[test]
    fn test_operators() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a + b, Vec4::new(6.0, 8.0, 10.0, 12.0));
        assert_eq!(b - a, Vec4::new(4.0, 4.0, 4.0, 4.0));
        assert_eq!(a * 2.0, Vec4::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(-a, Vec4::new(-1.0, -2.0, -3.0, -4.0));
    }

    #[test]
    fn test_pod_layout() {
        let verts = [Vec4::X, Vec4::W];
        let bytes: &[u8] = bytemuck::cast_slice(&verts);
        assert_eq!(bytes.len(), 2 * 16);
    }
}
