//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use prism4d::config::AppConfig;
use prism4d_core::{extrude_with, RotationPlane, ShapeTemplate};
use serial_test::serial;

#[test]
#[serial]
fn test_default_file_loads() {
    std::env::remove_var("P4D_SHAPE__WIREFRAME");
    std::env::remove_var("P4D_ANIMATION__SPEED");

    let config = AppConfig::load().unwrap();
    assert_eq!(config.shape.template, ShapeTemplate::Cube { size: 10.0 });
    assert_eq!(config.animation.planes, vec![RotationPlane::XW, RotationPlane::YW]);
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("P4D_SHAPE__WIREFRAME", "true");
    std::env::set_var("P4D_ANIMATION__SPEED", "7.5");

    let config = AppConfig::load().unwrap();
    assert!(config.shape.wireframe);
    assert_eq!(config.animation.speed, 7.5);

    std::env::remove_var("P4D_SHAPE__WIREFRAME");
    std::env::remove_var("P4D_ANIMATION__SPEED");
}

#[test]
#[serial]
fn test_missing_directory_falls_back_to_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.animation.steps, 200);
    assert!(!config.shape.wireframe);
}

#[test]
#[serial]
fn test_loaded_config_drives_pipeline() {
    let config = AppConfig::load().unwrap();
    let solid = config.shape.template.create_mesh().unwrap();
    let mut mesh = extrude_with(&solid, &config.shape.extrude_options()).unwrap();

    let before: Vec<f32> = mesh.vertices().iter().map(|v| v.length()).collect();
    config.animation.to_spin().run(&mut mesh, config.animation.steps);

    for (b, v) in before.iter().zip(mesh.vertices()) {
        assert!((b - v.length()).abs() < 0.01, "norm drifted from {} to {}", b, v.length());
    }
}

#[test]
#[serial]
fn test_default_wireframe_cube_shows_feature_edges_only() {
    std::env::remove_var("P4D_SHAPE__WIREFRAME");

    let mut config = AppConfig::load().unwrap();
    assert_eq!(config.shape.crease_angle, Some(1.0));
    config.shape.wireframe = true;

    let cube = config.shape.template.create_mesh().unwrap();
    let mesh = extrude_with(&cube, &config.shape.extrude_options()).unwrap();

    // 12 cube edges on each cap plus 8 struts; no face diagonals
    assert_eq!(mesh.segments().map(|s| s.len()), Some(12 + 12 + 8));
}
