//! Plane rotations of 4D meshes
//!
//! Each vertex is carried as (x, y, z, w, 1) through a 5x5 rotation matrix
//! for one coordinate plane. Only coordinates change; vertex order and
//! topology are untouched. Rotations keep no state between calls, so
//! compound motion is just several calls in a row.

use prism4d_math::mat5::{self, Mat5};
use prism4d_math::RotationPlane;

use crate::mesh::{DirtyFlags, Mesh4D};
use crate::GeometryError;

/// Rotate a copy of `mesh` by `theta` radians in `plane`
///
/// A positive angle carries the plane's first axis toward its second, so a
/// quarter turn in XW takes (1, 0, 0, 0) to (0, 0, 0, 1).
pub fn rotate(plane: RotationPlane, mesh: &Mesh4D, theta: f32) -> Mesh4D {
    let mut out = mesh.clone();
    out.rotate_in_place(plane, theta);
    out
}

/// Like [`rotate`], but takes the plane as a tag such as `"XW"`
pub fn rotate_tagged(tag: &str, mesh: &Mesh4D, theta: f32) -> Result<Mesh4D, GeometryError> {
    let plane: RotationPlane = tag.parse()?;
    Ok(rotate(plane, mesh, theta))
}

impl Mesh4D {
    /// Rotate this mesh by `theta` radians in `plane`
    pub fn rotate_in_place(&mut self, plane: RotationPlane, theta: f32) {
        log::trace!("Rotating {} vertices by {} in {}", self.vertices.len(), theta, plane);
        self.apply_matrix(plane.matrix(theta));
    }

    /// Transform every vertex by a homogeneous matrix and mark positions stale
    pub fn apply_matrix(&mut self, m: Mat5) {
        for v in &mut self.vertices {
            *v = mat5::transform(m, *v);
        }
        self.dirty |= DirtyFlags::POSITIONS;
    }
}
