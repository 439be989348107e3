//! Rotation planes of 4D space
//!
//! In 4D, rotations happen in planes rather than around axes.
//! There are 6 coordinate planes: XY, XZ, YZ, XW, YW, ZW. A rotation in one
//! of them moves the two named axes and leaves the other two fixed.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::mat5::{self, Mat5};
use crate::Axis;

/// The 6 rotation planes in 4D space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationPlane {
    /// XY plane - standard yaw (rotation around Z axis in 3D)
    XY,
    /// XZ plane - standard pitch (rotation around Y axis in 3D)
    XZ,
    /// YZ plane - standard roll (rotation around X axis in 3D)
    YZ,
    /// XW plane - ana-kata rotation affecting X
    XW,
    /// YW plane - ana-kata rotation affecting Y
    YW,
    /// ZW plane - ana-kata rotation affecting Z
    ZW,
}

impl RotationPlane {
    /// All six planes, 3D planes first
    pub const ALL: [RotationPlane; 6] = [
        RotationPlane::XY,
        RotationPlane::XZ,
        RotationPlane::YZ,
        RotationPlane::XW,
        RotationPlane::YW,
        RotationPlane::ZW,
    ];

    /// The two axes spanning this plane, in name order
    ///
    /// A positive angle carries the first axis toward the second.
    pub const fn axes(self) -> (Axis, Axis) {
        match self {
            RotationPlane::XY => (Axis::X, Axis::Y),
            RotationPlane::XZ => (Axis::X, Axis::Z),
            RotationPlane::YZ => (Axis::Y, Axis::Z),
            RotationPlane::XW => (Axis::X, Axis::W),
            RotationPlane::YW => (Axis::Y, Axis::W),
            RotationPlane::ZW => (Axis::Z, Axis::W),
        }
    }

    /// The two axes left untouched by a rotation in this plane
    pub const fn fixed_axes(self) -> (Axis, Axis) {
        match self {
            RotationPlane::XY => (Axis::Z, Axis::W),
            RotationPlane::XZ => (Axis::Y, Axis::W),
            RotationPlane::YZ => (Axis::X, Axis::W),
            RotationPlane::XW => (Axis::Y, Axis::Z),
            RotationPlane::YW => (Axis::X, Axis::Z),
            RotationPlane::ZW => (Axis::X, Axis::Y),
        }
    }

    /// Whether this plane involves the W axis
    pub const fn involves_w(self) -> bool {
        matches!(self, RotationPlane::XW | RotationPlane::YW | RotationPlane::ZW)
    }

    /// Homogeneous rotation matrix for `theta` radians in this plane
    pub fn matrix(self, theta: f32) -> Mat5 {
        let (a, b) = self.axes();
        mat5::plane_rotation(theta, a.index(), b.index())
    }

    /// Two-letter tag, e.g. `"XW"`
    pub const fn as_str(self) -> &'static str {
        match self {
            RotationPlane::XY => "XY",
            RotationPlane::XZ => "XZ",
            RotationPlane::YZ => "YZ",
            RotationPlane::XW => "XW",
            RotationPlane::YW => "YW",
            RotationPlane::ZW => "ZW",
        }
    }
}

impl fmt::Display for RotationPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rotation-plane tag that is not one of the six planes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rotation plane '{0}' (expected one of XY, XZ, YZ, XW, YW, ZW)")]
pub struct UnknownPlane(pub String);

impl FromStr for RotationPlane {
    type Err = UnknownPlane;

    /// Parse a plane tag, ignoring ASCII case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RotationPlane::ALL
            .into_iter()
            .find(|plane| plane.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPlane(s.to_string()))
    }
}
