//! Cube-sphere geometry: the six cube faces, their tangent bases, cube-to-sphere
//! projection, and triangle winding checks.

mod cube_face;
mod face_basis;
mod projection;
mod winding;

pub use cube_face::CubeFace;
pub use face_basis::{FaceBasis, FaceNormalError};
pub use projection::{cube_point, grid_percent, project_to_sphere};
pub use winding::{is_degenerate, triangle_normal, triangle_winds_outward};
