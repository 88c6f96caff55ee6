//! Errors raised while configuring or validating planet meshes.

use orbis_cubesphere::FaceNormalError;
use thiserror::Error;

/// Configuration errors for face builders and the planet assembler.
///
/// Both variants are programmer errors: they are reported before any buffer
/// is touched and are never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// A parameter is out of range (resolution, face normal, buffer layout).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// A required collaborator was never supplied.
    #[error("missing dependency: {0}")]
    MissingDependency(&'static str),
}

impl From<FaceNormalError> for MeshError {
    fn from(err: FaceNormalError) -> Self {
        MeshError::InvalidConfiguration(err.to_string())
    }
}
