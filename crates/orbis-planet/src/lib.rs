//! Planet assembly: six cube-face builders sharing one resolution and one
//! shape, rebuilt together and exposed per face or as a single mesh.

mod face_mask;
mod six_face;

pub use face_mask::FaceMask;
pub use six_face::PlanetAssembler;
