//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`P4D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use prism4d_core::{ExtrudeMode, ExtrudeOptions, RotationPlane, ShapeTemplate};

use crate::animation::Spin;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Shape and extrusion configuration
    #[serde(default)]
    pub shape: ShapeConfig,
    /// Spin animation configuration
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`P4D_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // P4D_SHAPE__WIREFRAME=true -> shape.wireframe = true
        figment = figment.merge(Env::prefixed("P4D_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Wireframe crease angle in degrees; only feature edges are drawn
pub const DEFAULT_CREASE_ANGLE: f32 = 1.0;

/// Which solid to build and how to extrude it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    /// Extrusion distance; defaults to the shape's characteristic size
    pub distance: Option<f32>,
    /// Emit line segments instead of triangles
    pub wireframe: bool,
    /// Wireframe only: hide edges between faces meeting within this many degrees
    pub crease_angle: Option<f32>,
    /// Solid to extrude
    pub template: ShapeTemplate,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            distance: None,
            wireframe: false,
            crease_angle: Some(DEFAULT_CREASE_ANGLE),
            template: ShapeTemplate::default(),
        }
    }
}

impl ShapeConfig {
    /// Extrusion options for the configured shape
    pub fn extrude_options(&self) -> ExtrudeOptions {
        ExtrudeOptions {
            distance: self.distance.unwrap_or_else(|| self.template.default_distance()),
            mode: if self.wireframe { ExtrudeMode::Wireframe } else { ExtrudeMode::Solid },
            crease_angle: self.crease_angle,
        }
    }
}

/// Spin animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Planes rotated every step, in order
    pub planes: Vec<RotationPlane>,
    /// Spin speed (each unit is 1/200 rad per step)
    pub speed: f32,
    /// Number of steps to run
    pub steps: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            planes: vec![RotationPlane::XW, RotationPlane::YW],
            speed: 3.0,
            steps: 200,
        }
    }
}

impl AnimationConfig {
    pub fn to_spin(&self) -> Spin {
        Spin::new(self.planes.clone(), self.speed)
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace), overridden by `RUST_LOG`
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
#[error("Configuration error: {0}")]
pub struct ConfigError(#[source] Box<figment::Error>);

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError(Box::new(e))
    }
}
