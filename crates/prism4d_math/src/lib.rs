//! 4D Mathematics Library
//!
//! This crate provides the small amount of linear algebra prism4d needs to
//! move extruded meshes around in 4D space.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`Axis`] - One of the four coordinate axes
//! - [`RotationPlane`] - One of the six coordinate planes of 4D space
//! - [`Mat5`] - 5x5 homogeneous matrix acting on (x, y, z, w, 1)

mod vec4;
mod plane;
pub mod mat5;

pub use vec4::{Axis, Vec4};
pub use plane::{RotationPlane, UnknownPlane};
pub use mat5::Mat5;
