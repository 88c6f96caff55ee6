//! The elevation seam between tessellation and terrain.
//!
//! [`FaceMeshBuilder`](crate::FaceMeshBuilder) only knows how to lay out a grid
//! on the unit sphere. Where each grid point finally ends up is decided by a
//! [`ShapeGenerator`], so noise, layered, or erosion-based shapes can be swapped
//! in without touching the tessellation.

use glam::Vec3;

/// Maps a point on the unit sphere to its final position on the planet surface.
///
/// Implementations must be pure: the same input yields the same output for
/// the lifetime of a planet configuration. They may be called concurrently
/// from several face builders.
pub trait ShapeGenerator: Send + Sync {
    /// Displace `unit_sphere_point` (guaranteed unit length) to a surface position.
    fn point_on_planet(&self, unit_sphere_point: Vec3) -> Vec3;
}

impl<F> ShapeGenerator for F
where
    F: Fn(Vec3) -> Vec3 + Send + Sync,
{
    fn point_on_planet(&self, unit_sphere_point: Vec3) -> Vec3 {
        self(unit_sphere_point)
    }
}

/// Leaves every point on the unit sphere.
///
/// Builders never fall back to this on their own; it must be injected like
/// any other shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnitSphere;

impl ShapeGenerator for UnitSphere {
    fn point_on_planet(&self, unit_sphere_point: Vec3) -> Vec3 {
        unit_sphere_point
    }
}
