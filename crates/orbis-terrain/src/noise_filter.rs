//! Multi-octave noise filters over 3D simplex noise.
//!
//! Both filters sample the unit sphere directly in 3D, so there are no UV seams
//! between cube faces. Each octave multiplies frequency by `roughness` and
//! amplitude by `persistence`; the summed value is floored at `min_value` and
//! scaled by `strength`.

use glam::Vec3;
use noise::{NoiseFn, Simplex};
use orbis_config::{NoiseFilterKind, NoiseLayerConfig};

/// Parameters for one noise filter.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseSettings {
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
    /// Offset applied to the sample point; moves features around the sphere.
    pub center: Vec3,
    /// Floor subtracted from the summed value; anything below becomes zero.
    pub min_value: f32,
    /// Ridge sharpening between octaves (rigid only).
    pub weight_multiplier: f32,
}

impl Default for NoiseSettings {
    fn default() -> Self {
        Self::from(&NoiseLayerConfig::default())
    }
}

impl From<&NoiseLayerConfig> for NoiseSettings {
    fn from(cfg: &NoiseLayerConfig) -> Self {
        Self {
            filter: cfg.filter,
            strength: cfg.strength,
            layer_count: cfg.layer_count,
            base_roughness: cfg.base_roughness,
            roughness: cfg.roughness,
            persistence: cfg.persistence,
            center: Vec3::from_array(cfg.center),
            min_value: cfg.min_value,
            weight_multiplier: cfg.weight_multiplier,
        }
    }
}

/// Scalar elevation contribution for a point on the unit sphere.
pub trait NoiseFilter: Send + Sync {
    /// Evaluate the filter. Result is never negative.
    fn evaluate(&self, point: Vec3) -> f32;
}

/// Build the filter selected by `settings.filter`.
pub fn create_filter(settings: NoiseSettings, seed: u32) -> Box<dyn NoiseFilter> {
    match settings.filter {
        NoiseFilterKind::Simple => Box::new(SimpleNoiseFilter::new(settings, seed)),
        NoiseFilterKind::Rigid => Box::new(RigidNoiseFilter::new(settings, seed)),
    }
}

fn sample(noise: &Simplex, p: Vec3) -> f32 {
    noise.get([p.x as f64, p.y as f64, p.z as f64]) as f32
}

fn finish(total: f32, settings: &NoiseSettings) -> f32 {
    (total - settings.min_value).max(0.0) * settings.strength
}

/// Smooth fBm: each octave contributes `(noise + 1) / 2`.
pub struct SimpleNoiseFilter {
    noise: Simplex,
    settings: NoiseSettings,
}

impl SimpleNoiseFilter {
    /// Create a filter with the given settings and seed.
    pub fn new(settings: NoiseSettings, seed: u32) -> Self {
        Self {
            noise: Simplex::new(seed),
            settings,
        }
    }

    /// The settings this filter was built with.
    pub fn settings(&self) -> &NoiseSettings {
        &self.settings
    }
}

impl NoiseFilter for SimpleNoiseFilter {
    fn evaluate(&self, point: Vec3) -> f32 {
        let s = &self.settings;
        let mut total = 0.0;
        let mut frequency = s.base_roughness;
        let mut amplitude = 1.0;

        for _ in 0..s.layer_count {
            let v = sample(&self.noise, point * frequency + s.center);
            total += (v + 1.0) * 0.5 * amplitude;
            frequency *= s.roughness;
            amplitude *= s.persistence;
        }

        finish(total, s)
    }
}

/// Ridged fBm: each octave contributes `(1 - |noise|)²`, weighted by the
/// previous octave so ridges sharpen where earlier octaves were high.
pub struct RigidNoiseFilter {
    noise: Simplex,
    settings: NoiseSettings,
}

impl RigidNoiseFilter {
    /// Create a filter with the given settings and seed.
    pub fn new(settings: NoiseSettings, seed: u32) -> Self {
        Self {
            noise: Simplex::new(seed),
            settings,
        }
    }

    /// The settings this filter was built with.
    pub fn settings(&self) -> &NoiseSettings {
        &self.settings
    }
}

impl NoiseFilter for RigidNoiseFilter {
    fn evaluate(&self, point: Vec3) -> f32 {
        let s = &self.settings;
        let mut total = 0.0;
        let mut frequency = s.base_roughness;
        let mut amplitude = 1.0;
        let mut weight = 1.0;

        for _ in 0..s.layer_count {
            let mut v = 1.0 - sample(&self.noise, point * frequency + s.center).abs();
            v *= v;
            v *= weight;
            weight = (v * s.weight_multiplier).clamp(0.0, 1.0);

            total += v * amplitude;
            frequency *= s.roughness;
            amplitude *= s.persistence;
        }

        finish(total, s)
    }
}
