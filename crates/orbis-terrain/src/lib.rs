//! Elevation strategies for cube-sphere planets: plain spheres and layered
//! fractal noise.

mod noise_filter;
mod shape;

pub use noise_filter::{NoiseFilter, NoiseSettings, RigidNoiseFilter, SimpleNoiseFilter, create_filter};
pub use orbis_config::NoiseFilterKind;
pub use orbis_mesh::UnitSphere;
pub use shape::{NoiseLayer, PlanetShape, ShapeSettings, SphereShape};
