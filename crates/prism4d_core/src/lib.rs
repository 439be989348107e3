//! Core geometry for prism4d
//!
//! This crate turns ordinary triangle meshes into 4D solids and moves them
//! around in 4D space:
//!
//! - [`Mesh3D`] - Input triangle mesh (vertices + faces)
//! - [`Mesh4D`] - Extruded mesh with 4D vertices and faces or line segments
//! - [`extrude`] / [`extrude_with`] - Lift a [`Mesh3D`] into a 4D prism
//! - [`rotate`] / [`rotate_tagged`] - Rotate a [`Mesh4D`] in one coordinate plane
//! - [`ShapeTemplate`] - Serializable recipes for common solids
//! - [`GeometryError`] - Errors reported by the operations above

mod error;
mod mesh;
mod extrude;
mod rotate;
mod shapes;

pub use error::GeometryError;
pub use mesh::{DirtyFlags, Edge, Face, Mesh3D, Mesh4D, Segment, Topology};
pub use extrude::{extrude, extrude_with, ExtrudeMode, ExtrudeOptions};
pub use rotate::{rotate, rotate_tagged};
pub use shapes::{ShapeTemplate, MAX_ICOSPHERE_DETAIL};

// Re-export commonly used types from prism4d_math for convenience
pub use prism4d_math::{Axis, RotationPlane, Vec4};
