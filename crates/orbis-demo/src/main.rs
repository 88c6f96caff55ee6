//! Generates a cube-sphere planet and reports mesh statistics.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p orbis-demo -- --resolution 64 --radius 10`.

mod stats;

use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use orbis_config::{CliArgs, Config};
use orbis_planet::PlanetAssembler;
use orbis_terrain::PlanetShape;
use tracing::{info, warn};

use crate::stats::MeshStats;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    let config_dir = match args.config.clone() {
        Some(dir) => dir,
        None => dirs::config_dir()
            .ok_or("failed to resolve config directory")?
            .join("orbis"),
    };

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    orbis_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    if config.shape.layers.is_empty() {
        warn!("No noise layers configured; generating a plain sphere");
    }
    let shape = Arc::new(PlanetShape::from_config(&config.shape));

    let mut planet = PlanetAssembler::new(config.planet.resolution)?.with_shape(shape);
    planet.set_face_mask(config.planet.face_mask.into());
    planet.set_parallel(config.planet.parallel);

    let started = Instant::now();
    planet.generate()?;
    let elapsed = started.elapsed();

    for (face, mesh) in planet.face_meshes() {
        info!(
            ?face,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "face ready"
        );
    }

    let mesh = planet.combined_mesh();
    mesh.validate()?;

    let stats = MeshStats::from_mesh(&mesh);
    info!(
        "Planet mesh: {} vertices, {} triangles, radius {:.4}..{:.4}, {} KiB GPU data, built in {:.2?}",
        stats.vertices,
        stats.triangles,
        stats.min_radius,
        stats.max_radius,
        stats.gpu_bytes / 1024,
        elapsed
    );

    Ok(())
}
