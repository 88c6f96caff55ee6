//! Per-face grid tessellation of the cube sphere.
//!
//! A [`FaceMeshBuilder`] owns one cube face. Each build lays a
//! `resolution × resolution` grid over the face, projects every grid point onto
//! the unit sphere, hands it to the injected [`ShapeGenerator`], and stitches the
//! grid into two triangles per cell:
//!
//! ```text
//!  i ------- i+1
//!  | \        |
//!  |   \   B  |      A = (i, i+r+1, i+r)
//!  | A   \    |      B = (i, i+1, i+r+1)
//!  |       \  |
//! i+r ---- i+r+1
//! ```
//!
//! Both triangles share the `i ↔ i+r+1` diagonal. Because every face basis is
//! right-handed (`tangent_a × tangent_b = normal`), this one winding faces
//! outward on all six faces.

use std::fmt;
use std::sync::Arc;

use glam::Vec3;
use orbis_cubesphere::{CubeFace, FaceBasis, grid_percent};
use tracing::debug;

use crate::error::MeshError;
use crate::mesh_data::MeshData;
use crate::normals::compute_vertex_normals;
use crate::shape::ShapeGenerator;

/// Flat row-major index of grid point `(x, y)`.
#[inline]
#[must_use]
pub fn grid_index(x: u32, y: u32, resolution: u32) -> usize {
    y as usize * resolution as usize + x as usize
}

/// Number of vertices in a face grid of the given resolution.
#[inline]
#[must_use]
pub fn vertex_count(resolution: u32) -> usize {
    let r = resolution as usize;
    r * r
}

/// Number of index-buffer entries in a face grid of the given resolution.
#[inline]
#[must_use]
pub fn index_count(resolution: u32) -> usize {
    let cells = resolution.saturating_sub(1) as usize;
    6 * cells * cells
}

/// Builds the mesh for one cube face.
pub struct FaceMeshBuilder {
    resolution: u32,
    face: CubeFace,
    basis: FaceBasis,
    shape: Arc<dyn ShapeGenerator>,
    mesh: MeshData,
}

impl FaceMeshBuilder {
    /// Smallest usable grid: one cell, two triangles.
    pub const MIN_RESOLUTION: u32 = 2;
    /// Largest grid whose vertex indices still fit in `u32`.
    pub const MAX_RESOLUTION: u32 = u16::MAX as u32;

    /// Create a builder for the face whose outward normal is `face_normal`.
    ///
    /// Fails with [`MeshError::InvalidConfiguration`] if `resolution` is outside
    /// `[MIN_RESOLUTION, MAX_RESOLUTION]` or `face_normal` is not a unit vector
    /// along one of the coordinate axes. The mesh starts empty until
    /// [`construct_mesh`](Self::construct_mesh) is called.
    pub fn new(
        resolution: u32,
        face_normal: Vec3,
        shape: Arc<dyn ShapeGenerator>,
    ) -> Result<Self, MeshError> {
        validate_resolution(resolution)?;
        let face = CubeFace::try_from_normal(face_normal)?;
        Ok(Self {
            resolution,
            face,
            basis: FaceBasis::for_face(face),
            shape,
            mesh: MeshData::new(),
        })
    }

    /// Create a builder for one of the six canonical faces.
    pub fn for_face(
        resolution: u32,
        face: CubeFace,
        shape: Arc<dyn ShapeGenerator>,
    ) -> Result<Self, MeshError> {
        Self::new(resolution, face.normal(), shape)
    }

    /// Regenerate vertices, triangles and normals from scratch.
    ///
    /// The previous buffers are replaced wholesale once the new ones are
    /// complete. Calling this again with the same shape yields bit-identical
    /// output.
    pub fn construct_mesh(&mut self) {
        let r = self.resolution;
        let mut positions = Vec::with_capacity(vertex_count(r));
        let mut indices = Vec::with_capacity(index_count(r));

        for y in 0..r {
            for x in 0..r {
                let i = grid_index(x, y, r) as u32;
                let sphere_point = self.basis.sphere_point(grid_percent(x, y, r));
                positions.push(self.shape.point_on_planet(sphere_point));

                if x != r - 1 && y != r - 1 {
                    indices.extend_from_slice(&[i, i + r + 1, i + r]);
                    indices.extend_from_slice(&[i, i + 1, i + r + 1]);
                }
            }
        }

        let normals = compute_vertex_normals(&positions, &indices);
        self.mesh = MeshData {
            positions,
            indices,
            normals,
        };

        debug!(
            face = ?self.face,
            resolution = r,
            vertices = self.mesh.vertex_count(),
            triangles = self.mesh.triangle_count(),
            "constructed face mesh"
        );
    }

    /// Grid points per face edge.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// The cube face this builder covers.
    pub fn face(&self) -> CubeFace {
        self.face
    }

    /// Outward unit normal of the face.
    pub fn face_normal(&self) -> Vec3 {
        self.basis.normal
    }

    /// In-plane axis along which grid `x` increases.
    pub fn tangent_a(&self) -> Vec3 {
        self.basis.tangent_a
    }

    /// In-plane axis along which grid `y` increases.
    pub fn tangent_b(&self) -> Vec3 {
        self.basis.tangent_b
    }

    /// Vertex positions from the last build (empty before the first).
    pub fn vertices(&self) -> &[Vec3] {
        &self.mesh.positions
    }

    /// Index buffer from the last build.
    pub fn triangles(&self) -> &[u32] {
        &self.mesh.indices
    }

    /// Derived vertex normals from the last build.
    pub fn normals(&self) -> &[Vec3] {
        &self.mesh.normals
    }

    /// All buffers from the last build.
    pub fn mesh(&self) -> &MeshData {
        &self.mesh
    }

    /// Move the built buffers out, leaving the builder empty until the next build.
    pub fn take_mesh(&mut self) -> MeshData {
        std::mem::take(&mut self.mesh)
    }
}

impl fmt::Debug for FaceMeshBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FaceMeshBuilder")
            .field("resolution", &self.resolution)
            .field("face", &self.face)
            .field("vertices", &self.mesh.vertex_count())
            .field("triangles", &self.mesh.triangle_count())
            .finish_non_exhaustive()
    }
}

/// Reject resolutions that cannot produce a grid or overflow `u32` indices.
pub fn validate_resolution(resolution: u32) -> Result<(), MeshError> {
    if resolution < FaceMeshBuilder::MIN_RESOLUTION {
        return Err(MeshError::InvalidConfiguration(format!(
            "resolution must be at least {}, got {resolution}",
            FaceMeshBuilder::MIN_RESOLUTION
        )));
    }
    if resolution > FaceMeshBuilder::MAX_RESOLUTION {
        return Err(MeshError::InvalidConfiguration(format!(
            "resolution must be at most {}, got {resolution}",
            FaceMeshBuilder::MAX_RESOLUTION
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::UnitSphere;
    use orbis_cubesphere::{is_degenerate, triangle_normal};

    fn unit() -> Arc<dyn ShapeGenerator> {
        Arc::new(UnitSphere)
    }

    fn built(resolution: u32, face: CubeFace) -> FaceMeshBuilder {
        let mut builder = FaceMeshBuilder::for_face(resolution, face, unit()).unwrap();
        builder.construct_mesh();
        builder
    }

    #[test]
    fn test_resolution_one_is_rejected() {
        let err = FaceMeshBuilder::new(1, Vec3::Z, unit()).unwrap_err();
        assert!(matches!(err, MeshError::InvalidConfiguration(_)));
        assert!(FaceMeshBuilder::new(0, Vec3::Z, unit()).is_err());
    }

    #[test]
    fn test_oversized_resolution_is_rejected() {
        let err = FaceMeshBuilder::new(FaceMeshBuilder::MAX_RESOLUTION + 1, Vec3::Z, unit());
        assert!(matches!(err, Err(MeshError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_off_axis_normal_is_rejected() {
        let diagonal = Vec3::new(1.0, 0.0, 1.0).normalize();
        assert!(matches!(
            FaceMeshBuilder::new(4, diagonal, unit()),
            Err(MeshError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            FaceMeshBuilder::new(4, Vec3::new(0.0, 0.0, 3.0), unit()),
            Err(MeshError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_mesh_is_empty_before_first_build() {
        let builder = FaceMeshBuilder::for_face(4, CubeFace::PosX, unit()).unwrap();
        assert!(builder.vertices().is_empty());
        assert!(builder.triangles().is_empty());
        assert!(builder.normals().is_empty());
    }

    #[test]
    fn test_tangents_follow_face_normal() {
        for face in CubeFace::ALL {
            let b = FaceMeshBuilder::for_face(3, face, unit()).unwrap();
            let n = b.face_normal();
            assert_eq!(n, face.normal());
            assert!(b.tangent_a().dot(n).abs() < 1e-6);
            assert!(b.tangent_b().dot(n).abs() < 1e-6);
            assert!(b.tangent_a().dot(b.tangent_b()).abs() < 1e-6);
            assert!((b.tangent_a().cross(b.tangent_b()) - n).length() < 1e-6);
        }
    }

    #[test]
    fn test_counts_for_every_face_and_resolution() {
        for face in CubeFace::ALL {
            for r in 2..=9 {
                let b = built(r, face);
                let cells = (r - 1) as usize;
                assert_eq!(b.vertices().len(), (r * r) as usize);
                assert_eq!(b.triangles().len(), 6 * cells * cells);
                assert_eq!(b.normals().len(), (r * r) as usize);
                assert_eq!(b.vertices().len(), vertex_count(r));
                assert_eq!(b.triangles().len(), index_count(r));
            }
        }
    }

    #[test]
    fn test_indices_in_range_and_distinct() {
        for face in CubeFace::ALL {
            let b = built(6, face);
            let n = b.vertices().len() as u32;
            for tri in b.triangles().chunks_exact(3) {
                assert!(tri.iter().all(|&i| i < n), "{face:?}: {tri:?} out of range");
                assert!(
                    tri[0] != tri[1] && tri[1] != tri[2] && tri[0] != tri[2],
                    "{face:?}: degenerate index triple {tri:?}"
                );
            }
            assert!(b.mesh().validate().is_ok());
        }
    }

    #[test]
    fn test_no_zero_area_triangles() {
        for face in CubeFace::ALL {
            let b = built(2, face);
            let v = b.vertices();
            for tri in b.mesh().triangles() {
                let [a, c, d] = tri.map(|i| v[i as usize]);
                assert!(!is_degenerate(a, c, d), "{face:?}: zero-area triangle {tri:?}");
            }
        }
    }

    #[test]
    fn test_identity_shape_vertices_on_unit_sphere() {
        for face in CubeFace::ALL {
            let b = built(8, face);
            for v in b.vertices() {
                assert!(
                    (v.length() - 1.0).abs() < 1e-6,
                    "{face:?}: vertex {v:?} has length {}",
                    v.length()
                );
            }
        }
    }

    #[test]
    fn test_winding_faces_outward_on_every_face() {
        for face in CubeFace::ALL {
            let b = built(7, face);
            let v = b.vertices();
            for tri in b.mesh().triangles() {
                let [p0, p1, p2] = tri.map(|i| v[i as usize]);
                let n = triangle_normal(p0, p1, p2);
                assert!(
                    n.dot(b.face_normal()) > 0.0,
                    "{face:?}: triangle {tri:?} faces inward"
                );
            }
        }
    }

    #[test]
    fn test_grid_corners_map_to_cube_corners() {
        for face in CubeFace::ALL {
            let r = 5;
            let b = built(r, face);
            let basis = face.basis();
            let corners = [(0, 0), (r - 1, 0), (0, r - 1), (r - 1, r - 1)];
            let expected = [
                -basis.tangent_a - basis.tangent_b,
                basis.tangent_a - basis.tangent_b,
                -basis.tangent_a + basis.tangent_b,
                basis.tangent_a + basis.tangent_b,
            ];
            for ((x, y), offset) in corners.into_iter().zip(expected) {
                let cube_corner = (basis.normal + offset).normalize();
                let v = b.vertices()[grid_index(x, y, r)];
                assert!(
                    (v - cube_corner).length() < 1e-6,
                    "{face:?}: corner ({x}, {y}) = {v:?}, expected {cube_corner:?}"
                );
            }
        }
    }

    #[test]
    fn test_rebuild_is_bit_identical() {
        let mut b = FaceMeshBuilder::for_face(11, CubeFace::NegY, unit()).unwrap();
        b.construct_mesh();
        let first = b.mesh().clone();
        b.construct_mesh();
        assert_eq!(first.indices, b.triangles());
        let same_bits = first
            .positions
            .iter()
            .zip(b.vertices())
            .all(|(a, c)| a.to_array().map(f32::to_bits) == c.to_array().map(f32::to_bits));
        assert!(same_bits);
        assert_eq!(first.normals, b.normals());
    }

    #[test]
    fn test_resolution_two_pos_z_example() {
        let b = built(2, CubeFace::PosZ);
        assert_eq!(b.vertices().len(), 4);
        assert_eq!(b.triangles(), &[0, 3, 2, 0, 1, 3]);
    }

    #[test]
    fn test_shape_output_becomes_vertex_position() {
        let radius = 6.5;
        let shape: Arc<dyn ShapeGenerator> = Arc::new(move |p: Vec3| p * radius);
        let mut b = FaceMeshBuilder::for_face(4, CubeFace::NegZ, shape).unwrap();
        b.construct_mesh();
        for v in b.vertices() {
            assert!((v.length() - radius).abs() < 1e-4);
        }
    }

    #[test]
    fn test_shape_sees_unit_length_input() {
        let shape: Arc<dyn ShapeGenerator> = Arc::new(|p: Vec3| {
            assert!((p.length() - 1.0).abs() < 1e-6, "shape got non-unit input {p:?}");
            p
        });
        let mut b = FaceMeshBuilder::for_face(9, CubeFace::PosY, shape).unwrap();
        b.construct_mesh();
    }

    #[test]
    fn test_identity_normals_match_sphere_direction() {
        let b = built(16, CubeFace::PosX);
        for (n, p) in b.normals().iter().zip(b.vertices()) {
            assert!((n.length() - 1.0).abs() < 1e-5);
            assert!(n.dot(*p) > 0.99, "normal {n:?} far from radial {p:?}");
        }
    }

    #[test]
    fn test_take_mesh_leaves_builder_empty() {
        let mut b = built(3, CubeFace::PosX);
        let mesh = b.take_mesh();
        assert_eq!(mesh.vertex_count(), 9);
        assert!(b.vertices().is_empty());
        b.construct_mesh();
        assert_eq!(b.vertices().len(), 9);
    }
}
