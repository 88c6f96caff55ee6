//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, FaceMaskConfig};

/// Orbis command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "orbis", about = "Cube-sphere planet mesh generator")]
pub struct CliArgs {
    /// Grid points per face edge.
    #[arg(long)]
    pub resolution: Option<u32>,

    /// Planet radius.
    #[arg(long)]
    pub radius: Option<f32>,

    /// Noise seed.
    #[arg(long)]
    pub seed: Option<u32>,

    /// Generate only one face (or all).
    #[arg(long, value_enum)]
    pub face: Option<FaceMaskConfig>,

    /// Build faces one after another instead of in parallel.
    #[arg(long)]
    pub sequential: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(r) = args.resolution {
            self.planet.resolution = r;
        }
        if let Some(radius) = args.radius {
            self.shape.radius = radius;
        }
        if let Some(seed) = args.seed {
            self.shape.seed = seed;
        }
        if let Some(face) = args.face {
            self.planet.face_mask = face;
        }
        if args.sequential {
            self.planet.parallel = false;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
