//! Tangent bases for cube faces.
//!
//! A [`FaceBasis`] is the right-handed frame `(tangent_a, tangent_b, normal)` that
//! parameterises a cube face. Tangents are derived from the normal by a fixed
//! component permutation rather than looked up per face, so the same rule
//! produces a valid frame for all six axis directions.

use glam::{Vec2, Vec3};
use thiserror::Error;

use crate::CubeFace;

/// Rejection reasons for a face normal that cannot seed a [`FaceBasis`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FaceNormalError {
    /// The vector is not unit length.
    #[error("face normal {0} is not unit length")]
    NotUnit(Vec3),
    /// The vector is unit length but does not point along a coordinate axis.
    #[error("face normal {0} is not aligned with a coordinate axis")]
    NotAxisAligned(Vec3),
}

/// Orthonormal frame spanning one cube face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceBasis {
    /// Outward unit normal of the face.
    pub normal: Vec3,
    /// First in-plane axis, direction of increasing grid `x`.
    pub tangent_a: Vec3,
    /// Second in-plane axis, direction of increasing grid `y`.
    pub tangent_b: Vec3,
}

impl FaceBasis {
    /// Per-component slack allowed when matching a normal to an axis direction.
    pub const AXIS_TOLERANCE: f32 = 1e-6;

    /// Derive the basis for one of the six canonical faces.
    #[must_use]
    pub fn for_face(face: CubeFace) -> Self {
        Self::derive(face.normal())
    }

    /// Derive a basis from a caller-supplied outward normal.
    ///
    /// The normal must be unit length and lie on a coordinate axis; it is
    /// snapped to the exact axis direction before the tangents are derived.
    pub fn from_normal(normal: Vec3) -> Result<Self, FaceNormalError> {
        CubeFace::try_from_normal(normal).map(Self::for_face)
    }

    fn derive(normal: Vec3) -> Self {
        let tangent_a = Vec3::new(normal.y, normal.z, normal.x).normalize();
        let tangent_b = normal.cross(tangent_a);
        Self {
            normal,
            tangent_a,
            tangent_b,
        }
    }

    /// Point on the surface of the `[-1, 1]` cube for a grid percentage in `[0, 1]²`.
    ///
    /// `(0.5, 0.5)` maps to the face normal itself.
    #[inline]
    #[must_use]
    pub fn cube_point(&self, percent: Vec2) -> Vec3 {
        crate::cube_point(self, percent)
    }

    /// Unit-sphere point for a grid percentage in `[0, 1]²`.
    #[inline]
    #[must_use]
    pub fn sphere_point(&self, percent: Vec2) -> Vec3 {
        crate::project_to_sphere(self.cube_point(percent))
    }
}
