//! The six faces of a cubesphere.

use glam::Vec3;

use crate::{FaceBasis, FaceNormalError};

/// The six faces of the cube that forms the cubesphere.
///
/// Each variant corresponds to a face whose outward normal points
/// along the named axis direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CubeFace {
    /// +X face
    PosX = 0,
    /// −X face
    NegX = 1,
    /// +Y face
    PosY = 2,
    /// −Y face
    NegY = 3,
    /// +Z face
    PosZ = 4,
    /// −Z face
    NegZ = 5,
}

impl CubeFace {
    /// All six faces in canonical order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosX,
        CubeFace::NegX,
        CubeFace::PosY,
        CubeFace::NegY,
        CubeFace::PosZ,
        CubeFace::NegZ,
    ];

    /// The opposite face (e.g., `PosX` → `NegX`).
    #[must_use]
    pub fn opposite(self) -> CubeFace {
        match self {
            CubeFace::PosX => CubeFace::NegX,
            CubeFace::NegX => CubeFace::PosX,
            CubeFace::PosY => CubeFace::NegY,
            CubeFace::NegY => CubeFace::PosY,
            CubeFace::PosZ => CubeFace::NegZ,
            CubeFace::NegZ => CubeFace::PosZ,
        }
    }

    /// Outward-pointing unit normal for this face.
    #[must_use]
    pub fn normal(self) -> Vec3 {
        match self {
            CubeFace::PosX => Vec3::X,
            CubeFace::NegX => Vec3::NEG_X,
            CubeFace::PosY => Vec3::Y,
            CubeFace::NegY => Vec3::NEG_Y,
            CubeFace::PosZ => Vec3::Z,
            CubeFace::NegZ => Vec3::NEG_Z,
        }
    }

    /// Find the face whose outward normal matches `normal`.
    ///
    /// Returns `None` unless `normal` is within [`FaceBasis::AXIS_TOLERANCE`]
    /// of one of the six unit axis directions.
    #[must_use]
    pub fn from_normal(normal: Vec3) -> Option<CubeFace> {
        CubeFace::ALL
            .into_iter()
            .find(|face| (face.normal() - normal).abs().max_element() <= FaceBasis::AXIS_TOLERANCE)
    }

    /// Like [`CubeFace::from_normal`], but reports why the vector was rejected.
    pub fn try_from_normal(normal: Vec3) -> Result<CubeFace, FaceNormalError> {
        if !normal.is_finite() || (normal.length() - 1.0).abs() > FaceBasis::AXIS_TOLERANCE {
            return Err(FaceNormalError::NotUnit(normal));
        }
        CubeFace::from_normal(normal).ok_or(FaceNormalError::NotAxisAligned(normal))
    }

    /// Tangent basis spanning this face, derived from its normal.
    #[must_use]
    pub fn basis(self) -> FaceBasis {
        FaceBasis::for_face(self)
    }
}
