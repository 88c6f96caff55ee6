//! Configuration system for Orbis planet generation.
//!
//! Settings persist to disk as a `config.ron` file, can be overridden from the
//! command line via clap, and tolerate missing or unknown fields so older and
//! newer files both load.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    Config, DebugConfig, FaceMaskConfig, NoiseFilterKind, NoiseLayerConfig, PlanetConfig,
    ShapeConfig,
};
pub use error::ConfigError;
