//! Planet shapes built on the [`ShapeGenerator`] seam.

use glam::Vec3;
use orbis_config::ShapeConfig;
use orbis_mesh::ShapeGenerator;

use crate::noise_filter::{NoiseFilter, NoiseSettings, create_filter};

/// Scales the unit sphere to a fixed radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereShape {
    /// Sphere radius.
    pub radius: f32,
}

impl SphereShape {
    /// Create a sphere of the given radius.
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}

impl ShapeGenerator for SphereShape {
    fn point_on_planet(&self, unit_sphere_point: Vec3) -> Vec3 {
        unit_sphere_point * self.radius
    }
}

/// One elevation layer of a [`PlanetShape`].
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseLayer {
    /// Disabled layers contribute nothing (a disabled first layer still masks).
    pub enabled: bool,
    /// Multiply this layer by the first layer's value, so detail only
    /// appears where the first layer has raised land.
    pub use_first_layer_as_mask: bool,
    /// Filter parameters.
    pub settings: NoiseSettings,
}

/// Full description of a planet's shape.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeSettings {
    /// Radius of the undisplaced sphere.
    pub radius: f32,
    /// Base seed; layer `i` uses `seed + i`.
    pub seed: u32,
    /// Elevation layers in evaluation order.
    pub layers: Vec<NoiseLayer>,
}

impl ShapeSettings {
    /// Build shape settings from the persisted configuration.
    pub fn from_config(cfg: &ShapeConfig) -> Self {
        Self {
            radius: cfg.radius,
            seed: cfg.seed,
            layers: cfg
                .layers
                .iter()
                .map(|layer| NoiseLayer {
                    enabled: layer.enabled,
                    use_first_layer_as_mask: layer.use_first_layer_as_mask,
                    settings: NoiseSettings::from(layer),
                })
                .collect(),
        }
    }
}

/// Layered-noise planet: `p * radius * (1 + elevation(p))`.
///
/// Elevation is the first layer's value (when enabled) plus every further
/// enabled layer, each optionally masked by the first layer.
pub struct PlanetShape {
    radius: f32,
    layers: Vec<(NoiseLayer, Box<dyn NoiseFilter>)>,
}

impl PlanetShape {
    /// Create a shape, instantiating one noise filter per layer.
    pub fn new(settings: ShapeSettings) -> Self {
        let layers = settings
            .layers
            .into_iter()
            .enumerate()
            .map(|(i, layer)| {
                let filter = create_filter(layer.settings.clone(), settings.seed.wrapping_add(i as u32));
                (layer, filter)
            })
            .collect();
        Self {
            radius: settings.radius,
            layers,
        }
    }

    /// Create a shape straight from configuration.
    pub fn from_config(cfg: &ShapeConfig) -> Self {
        Self::new(ShapeSettings::from_config(cfg))
    }

    /// Radius of the undisplaced sphere.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Number of configured layers, enabled or not.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Unitless elevation above the base sphere at a unit-sphere point.
    pub fn elevation(&self, unit_sphere_point: Vec3) -> f32 {
        let Some(((first, first_filter), rest)) = self.layers.split_first() else {
            return 0.0;
        };

        let first_value = first_filter.evaluate(unit_sphere_point);
        let mut elevation = if first.enabled { first_value } else { 0.0 };

        for (layer, filter) in rest {
            if !layer.enabled {
                continue;
            }
            let mask = if layer.use_first_layer_as_mask {
                first_value
            } else {
                1.0
            };
            elevation += filter.evaluate(unit_sphere_point) * mask;
        }
        elevation
    }
}

impl ShapeGenerator for PlanetShape {
    fn point_on_planet(&self, unit_sphere_point: Vec3) -> Vec3 {
        unit_sphere_point * self.radius * (1.0 + self.elevation(unit_sphere_point))
    }
}
