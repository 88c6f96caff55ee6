//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Tessellation settings.
    pub planet: PlanetConfig,
    /// Elevation settings.
    pub shape: ShapeConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Tessellation settings shared by all six faces.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanetConfig {
    /// Grid points per face edge (at least 2).
    pub resolution: u32,
    /// Build the six faces on separate threads.
    pub parallel: bool,
    /// Which faces to generate.
    pub face_mask: FaceMaskConfig,
}

/// Face selection for generation and output.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
pub enum FaceMaskConfig {
    /// All six faces.
    #[default]
    All,
    /// Only the +X face.
    PosX,
    /// Only the −X face.
    NegX,
    /// Only the +Y face.
    PosY,
    /// Only the −Y face.
    NegY,
    /// Only the +Z face.
    PosZ,
    /// Only the −Z face.
    NegZ,
}

/// Planet shape: base radius plus layered noise elevation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShapeConfig {
    /// Radius of the undisplaced sphere.
    pub radius: f32,
    /// Seed mixed into every noise layer.
    pub seed: u32,
    /// Noise layers, evaluated in order. The first layer may act as a mask for the rest.
    pub layers: Vec<NoiseLayerConfig>,
}

/// Noise filter family.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum NoiseFilterKind {
    /// Smooth rolling fBm.
    #[default]
    Simple,
    /// Ridged fBm with sharp crests.
    Rigid,
}

/// One noise layer contributing to elevation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NoiseLayerConfig {
    /// Disabled layers contribute nothing.
    pub enabled: bool,
    /// Scale this layer by the first layer's value.
    pub use_first_layer_as_mask: bool,
    /// Filter family.
    pub filter: NoiseFilterKind,
    /// Output multiplier.
    pub strength: f32,
    /// Number of octaves.
    pub layer_count: u32,
    /// Frequency of the first octave.
    pub base_roughness: f32,
    /// Frequency multiplier between octaves.
    pub roughness: f32,
    /// Amplitude multiplier between octaves.
    pub persistence: f32,
    /// Offset applied to the sample point before evaluation.
    pub center: [f32; 3],
    /// Values below this floor are flattened to zero (sea level).
    pub min_value: f32,
    /// How strongly each ridged octave sharpens the next (rigid filter only).
    pub weight_multiplier: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for PlanetConfig {
    fn default() -> Self {
        Self {
            resolution: 10,
            parallel: true,
            face_mask: FaceMaskConfig::All,
        }
    }
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            seed: 0,
            layers: Vec::new(),
        }
    }
}

impl Default for NoiseLayerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            use_first_layer_as_mask: false,
            filter: NoiseFilterKind::Simple,
            strength: 1.0,
            layer_count: 1,
            base_roughness: 1.0,
            roughness: 2.0,
            persistence: 0.5,
            center: [0.0; 3],
            min_value: 0.0,
            weight_multiplier: 0.8,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
