//! Geometry error types

use prism4d_math::UnknownPlane;

/// Error type for extrusion and rotation
///
/// Both operations validate their input up front, so an error always means
/// nothing was produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// Input mesh is empty or references vertices it does not have
    #[error("invalid mesh: {reason}")]
    InvalidMesh {
        reason: String,
    },
    /// Rotation plane tag is not one of XY, XZ, YZ, XW, YW, ZW
    #[error("invalid rotation plane '{tag}'")]
    InvalidPlane {
        tag: String,
    },
    /// Reserved: every extrusion distance is currently accepted
    #[error("invalid extrusion distance {distance}")]
    InvalidDistance {
        distance: f32,
    },
}

impl GeometryError {
    pub(crate) fn invalid_mesh(reason: impl Into<String>) -> Self {
        GeometryError::InvalidMesh { reason: reason.into() }
    }
}

impl From<UnknownPlane> for GeometryError {
    fn from(err: UnknownPlane) -> Self {
        GeometryError::InvalidPlane { tag: err.0 }
    }
}
