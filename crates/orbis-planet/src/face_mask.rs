//! Selection of which cube faces take part in a build.

use orbis_config::FaceMaskConfig;
use orbis_cubesphere::CubeFace;

/// Which faces a [`PlanetAssembler`](crate::PlanetAssembler) generates and exposes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FaceMask {
    /// Every face.
    #[default]
    All,
    /// A single face, e.g. for inspecting one face in isolation.
    Only(CubeFace),
}

impl FaceMask {
    /// Whether `face` is selected.
    #[must_use]
    pub fn contains(self, face: CubeFace) -> bool {
        match self {
            FaceMask::All => true,
            FaceMask::Only(only) => only == face,
        }
    }

    /// Number of selected faces.
    #[must_use]
    pub fn count(self) -> usize {
        match self {
            FaceMask::All => CubeFace::ALL.len(),
            FaceMask::Only(_) => 1,
        }
    }
}

impl From<FaceMaskConfig> for FaceMask {
    fn from(cfg: FaceMaskConfig) -> Self {
        match cfg {
            FaceMaskConfig::All => FaceMask::All,
            FaceMaskConfig::PosX => FaceMask::Only(CubeFace::PosX),
            FaceMaskConfig::NegX => FaceMask::Only(CubeFace::NegX),
            FaceMaskConfig::PosY => FaceMask::Only(CubeFace::PosY),
            FaceMaskConfig::NegY => FaceMask::Only(CubeFace::NegY),
            FaceMaskConfig::PosZ => FaceMask::Only(CubeFace::PosZ),
            FaceMaskConfig::NegZ => FaceMask::Only(CubeFace::NegZ),
        }
    }
}
