//! Triangle winding checks for cubesphere meshes.
//!
//! Triangles are counter-clockwise when viewed from outside the planet, so the
//! right-handed cross product of their edges points away from the centre.

use glam::Vec3;

/// Unnormalized geometric normal of a triangle: `(v1 - v0) × (v2 - v0)`.
///
/// Its length is twice the triangle's area.
#[inline]
#[must_use]
pub fn triangle_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    (v1 - v0).cross(v2 - v0)
}

/// Check if a triangle's geometric normal points into the hemisphere of `outward`.
pub fn triangle_winds_outward(v0: Vec3, v1: Vec3, v2: Vec3, outward: Vec3) -> bool {
    triangle_normal(v0, v1, v2).dot(outward) > 0.0
}

/// Whether a triangle has (numerically) zero area.
pub fn is_degenerate(v0: Vec3, v1: Vec3, v2: Vec3) -> bool {
    triangle_normal(v0, v1, v2).length_squared() <= f32::EPSILON * f32::EPSILON
}
