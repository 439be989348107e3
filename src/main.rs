//! prism4d - 4D prism driver
//!
//! Builds the configured solid, extrudes it into 4D and runs the spin
//! animation headlessly, logging what a renderer would receive each step.
//!
//! Usage: `prism4d [cube|tetra|octa|sphere|cylinder|ring]`

use std::process::ExitCode;

use prism4d::config::AppConfig;
use prism4d_core::{extrude_with, GeometryError, Mesh4D, ShapeTemplate};

fn main() -> ExitCode {
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // RUST_LOG wins over the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.debug.log_level))
        .init();
    log::info!("Starting prism4d");

    if let Some(e) = load_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    match run(config, std::env::args().nth(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(mut config: AppConfig, shape_arg: Option<String>) -> Result<(), GeometryError> {
    if let Some(name) = shape_arg {
        match ShapeTemplate::preset(&name) {
            Some(template) => config.shape.template = template,
            None => log::warn!("Unknown shape '{}', using {:?}", name, config.shape.template),
        }
    }

    let solid = config.shape.template.create_mesh()?;
    let options = config.shape.extrude_options();
    let mut mesh = extrude_with(&solid, &options)?;

    log::info!(
        "Extruded {:?}: {} vertices, {} {}",
        config.shape.template,
        mesh.vertex_count(),
        mesh.topology().len(),
        if mesh.is_wireframe() { "segments" } else { "faces" },
    );

    let spin = config.animation.to_spin();
    log::info!(
        "Spinning in {:?} at {} rad/step for {} steps",
        spin.planes(),
        spin.angle_per_step(),
        config.animation.steps,
    );

    let mut uploads = 0u32;
    for step in 0..config.animation.steps {
        spin.step(&mut mesh);
        if !mesh.take_dirty().is_empty() {
            uploads += 1;
            log::trace!("Step {}: {} bytes of vertex data", step, mesh.vertex_bytes().len());
        }
    }

    let (w_min, w_max) = w_range(&mesh);
    log::info!("Finished after {} uploads; w spans [{:.3}, {:.3}]", uploads, w_min, w_max);
    println!(
        "{} vertices, {} {}, w in [{:.3}, {:.3}]",
        mesh.vertex_count(),
        mesh.topology().len(),
        if mesh.is_wireframe() { "segments" } else { "faces" },
        w_min,
        w_max,
    );

    Ok(())
}

fn w_range(mesh: &Mesh4D) -> (f32, f32) {
    mesh.vertices()
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| (lo.min(v.w), hi.max(v.w)))
}
