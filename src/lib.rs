//! prism4d - 4D prism viewer core
//!
//! Builds a 3D solid, extrudes it along W and spins the result through
//! 4D space. Projection and drawing are left to whoever consumes the mesh.

pub mod config;
pub mod animation;
