//! Six-face planet assembly.
//!
//! Owns one [`FaceMeshBuilder`] per [`CubeFace`] and rebuilds them together.
//! Faces are independent: each builder owns its buffers and only reads the
//! shared, immutable shape, so the six builds can run on six threads without
//! locking. Edge vertices of neighbouring faces coincide but are not welded.

use std::sync::Arc;

use glam::Vec3;
use orbis_cubesphere::CubeFace;
use orbis_mesh::{FaceMeshBuilder, MeshData, MeshError, ShapeGenerator, validate_resolution};
use tracing::{debug, info};

use crate::face_mask::FaceMask;

/// Builds and holds the six face meshes of one planet.
pub struct PlanetAssembler {
    resolution: u32,
    shape: Option<Arc<dyn ShapeGenerator>>,
    /// Empty until the first [`generate`](Self::generate) after a resolution or shape change.
    faces: Vec<FaceMeshBuilder>,
    face_mask: FaceMask,
    parallel: bool,
}

impl PlanetAssembler {
    /// Create an assembler with no shape yet.
    ///
    /// Fails with [`MeshError::InvalidConfiguration`] for resolutions below 2.
    pub fn new(resolution: u32) -> Result<Self, MeshError> {
        validate_resolution(resolution)?;
        Ok(Self {
            resolution,
            shape: None,
            faces: Vec::new(),
            face_mask: FaceMask::All,
            parallel: false,
        })
    }

    /// Builder-style [`set_shape`](Self::set_shape).
    #[must_use]
    pub fn with_shape(mut self, shape: Arc<dyn ShapeGenerator>) -> Self {
        self.set_shape(shape);
        self
    }

    /// Outward normals of the six faces in canonical order: +X, −X, +Y, −Y, +Z, −Z.
    pub fn canonical_normals() -> [Vec3; 6] {
        CubeFace::ALL.map(CubeFace::normal)
    }

    /// Inject the elevation strategy. Face builders are recreated on the next build.
    pub fn set_shape(&mut self, shape: Arc<dyn ShapeGenerator>) {
        self.shape = Some(shape);
        self.faces.clear();
    }

    /// Change the grid resolution. Face builders are recreated on the next build.
    pub fn set_resolution(&mut self, resolution: u32) -> Result<(), MeshError> {
        validate_resolution(resolution)?;
        if resolution != self.resolution {
            self.resolution = resolution;
            self.faces.clear();
        }
        Ok(())
    }

    /// Restrict generation and output to a subset of faces.
    pub fn set_face_mask(&mut self, mask: FaceMask) {
        self.face_mask = mask;
    }

    /// Build faces on one thread each instead of one after another.
    pub fn set_parallel(&mut self, parallel: bool) {
        self.parallel = parallel;
    }

    /// Current grid resolution.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Current face mask.
    pub fn face_mask(&self) -> FaceMask {
        self.face_mask
    }

    /// Whether builds run in parallel.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Whether a shape has been injected.
    pub fn has_shape(&self) -> bool {
        self.shape.is_some()
    }

    /// Regenerate every face selected by the mask.
    ///
    /// Fails with [`MeshError::MissingDependency`] if no shape was injected;
    /// in that case nothing is built or modified. Faces outside the mask are
    /// emptied so no stale geometry survives.
    pub fn generate(&mut self) -> Result<(), MeshError> {
        self.ensure_faces()?;

        let mask = self.face_mask;
        for builder in self.faces.iter_mut().filter(|b| !mask.contains(b.face())) {
            builder.take_mesh();
        }

        if self.parallel {
            build_parallel(&mut self.faces, mask);
        } else {
            for builder in self.faces.iter_mut().filter(|b| mask.contains(b.face())) {
                builder.construct_mesh();
            }
        }

        info!(
            "Planet generated: {} faces, {} vertices, {} triangles (resolution {}, parallel {})",
            mask.count(),
            self.total_vertex_count(),
            self.total_index_count() / 3,
            self.resolution,
            self.parallel
        );
        Ok(())
    }

    fn ensure_faces(&mut self) -> Result<(), MeshError> {
        let shape = self
            .shape
            .as_ref()
            .ok_or(MeshError::MissingDependency("shape generator"))?;

        if self.faces.is_empty() {
            self.faces = Self::canonical_normals()
                .into_iter()
                .map(|normal| FaceMeshBuilder::new(self.resolution, normal, Arc::clone(shape)))
                .collect::<Result<_, _>>()?;
            debug!(resolution = self.resolution, "created face builders");
        }
        Ok(())
    }

    /// All face builders in canonical order (empty before the first build).
    pub fn faces(&self) -> &[FaceMeshBuilder] {
        &self.faces
    }

    /// The builder for one face, if builders exist.
    pub fn face(&self, face: CubeFace) -> Option<&FaceMeshBuilder> {
        self.faces.iter().find(|b| b.face() == face)
    }

    /// Meshes of the faces selected by the mask.
    pub fn face_meshes(&self) -> impl Iterator<Item = (CubeFace, &MeshData)> {
        let mask = self.face_mask;
        self.faces
            .iter()
            .filter(move |b| mask.contains(b.face()))
            .map(|b| (b.face(), b.mesh()))
    }

    /// Merge the selected faces into one mesh, offsetting indices per face.
    ///
    /// Vertices along face edges appear once per face.
    pub fn combined_mesh(&self) -> MeshData {
        let mut combined = MeshData {
            positions: Vec::with_capacity(self.total_vertex_count()),
            indices: Vec::with_capacity(self.total_index_count()),
            normals: Vec::with_capacity(self.total_vertex_count()),
        };
        for (_, mesh) in self.face_meshes() {
            combined.append(mesh);
        }
        combined
    }

    /// Vertex count across the selected faces.
    pub fn total_vertex_count(&self) -> usize {
        self.face_meshes().map(|(_, m)| m.vertex_count()).sum()
    }

    /// Index-buffer length across the selected faces.
    pub fn total_index_count(&self) -> usize {
        self.face_meshes().map(|(_, m)| m.indices.len()).sum()
    }
}

/// Build the selected faces on one scoped thread each.
fn build_parallel(faces: &mut [FaceMeshBuilder], mask: FaceMask) {
    let (done_tx, done_rx) = crossbeam_channel::unbounded();

    std::thread::scope(|scope| {
        for builder in faces.iter_mut().filter(|b| mask.contains(b.face())) {
            let done_tx = done_tx.clone();
            scope.spawn(move || {
                builder.construct_mesh();
                let _ = done_tx.send((builder.face(), builder.mesh().vertex_count()));
            });
        }
    });
    drop(done_tx);

    for (face, vertices) in done_rx.try_iter() {
        debug!(?face, vertices, "face build finished");
    }
}

#[cfg(test)]
mod tests {
    use orbis_mesh::UnitSphere;
    use orbis_terrain::{NoiseLayer, NoiseSettings, PlanetShape, ShapeSettings, SphereShape};

    use super::*;

    fn unit_planet(resolution: u32) -> PlanetAssembler {
        PlanetAssembler::new(resolution)
            .unwrap()
            .with_shape(Arc::new(UnitSphere))
    }

    #[test]
    fn test_resolution_below_two_rejected() {
        assert!(matches!(
            PlanetAssembler::new(1),
            Err(MeshError::InvalidConfiguration(_))
        ));
        let mut planet = unit_planet(4);
        assert!(planet.set_resolution(0).is_err());
        assert_eq!(planet.resolution(), 4);
    }

    #[test]
    fn test_generate_without_shape_is_missing_dependency() {
        let mut planet = PlanetAssembler::new(4).unwrap();
        assert_eq!(
            planet.generate(),
            Err(MeshError::MissingDependency("shape generator"))
        );
        assert!(planet.faces().is_empty());
        assert!(!planet.has_shape());
    }

    #[test]
    fn test_canonical_normals_order() {
        assert_eq!(
            PlanetAssembler::canonical_normals(),
            [Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y, Vec3::Z, Vec3::NEG_Z]
        );
    }

    #[test]
    fn test_all_six_faces_created() {
        let mut planet = unit_planet(3);
        planet.generate().unwrap();
        assert_eq!(planet.faces().len(), 6);
        for (builder, face) in planet.faces().iter().zip(CubeFace::ALL) {
            assert_eq!(builder.face(), face);
            assert_eq!(builder.face_normal(), face.normal());
        }
    }

    #[test]
    fn test_resolution_three_totals() {
        let mut planet = unit_planet(3);
        planet.generate().unwrap();
        assert_eq!(planet.total_vertex_count(), 54);
        assert_eq!(planet.total_index_count(), 144);

        let combined = planet.combined_mesh();
        assert_eq!(combined.vertex_count(), 54);
        assert_eq!(combined.indices.len(), 144);
        assert!(combined.validate().is_ok());
    }

    #[test]
    fn test_combined_mesh_offsets_each_face() {
        let mut planet = unit_planet(2);
        planet.generate().unwrap();
        let combined = planet.combined_mesh();
        for (f, chunk) in combined.indices.chunks(6).enumerate() {
            let base = 4 * f as u32;
            let expected: Vec<u32> = [0, 3, 2, 0, 1, 3].iter().map(|i| i + base).collect();
            assert_eq!(chunk, expected.as_slice());
        }
    }

    #[test]
    fn test_each_face_stays_on_its_side() {
        let mut planet = unit_planet(6);
        planet.generate().unwrap();
        for builder in planet.faces() {
            for v in builder.vertices() {
                assert!(v.dot(builder.face_normal()) > 0.5);
            }
        }
    }

    #[test]
    fn test_face_edges_coincide_without_welding() {
        let mut planet = unit_planet(5);
        planet.generate().unwrap();
        let pos_x = planet.face(CubeFace::PosX).unwrap();
        let others: Vec<Vec3> = planet
            .faces()
            .iter()
            .filter(|b| b.face() != CubeFace::PosX)
            .flat_map(|b| b.vertices().iter().copied())
            .collect();

        let r = pos_x.resolution();
        for y in 0..r {
            for x in [0, r - 1] {
                let v = pos_x.vertices()[orbis_mesh::grid_index(x, y, r)];
                assert!(
                    others.iter().any(|o| (*o - v).length() < 1e-5),
                    "edge vertex {v:?} of +X has no twin on a neighbouring face"
                );
            }
        }
        assert_eq!(planet.combined_mesh().vertex_count(), 6 * 25);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let shape: Arc<dyn ShapeGenerator> = Arc::new(PlanetShape::new(ShapeSettings {
            radius: 2.0,
            seed: 7,
            layers: vec![NoiseLayer {
                enabled: true,
                use_first_layer_as_mask: false,
                settings: NoiseSettings {
                    strength: 0.2,
                    layer_count: 3,
                    ..Default::default()
                },
            }],
        }));

        let mut sequential = PlanetAssembler::new(12).unwrap().with_shape(Arc::clone(&shape));
        sequential.generate().unwrap();

        let mut parallel = PlanetAssembler::new(12).unwrap().with_shape(shape);
        parallel.set_parallel(true);
        parallel.generate().unwrap();

        assert!(parallel.is_parallel());
        assert_eq!(sequential.combined_mesh(), parallel.combined_mesh());
    }

    #[test]
    fn test_generate_is_idempotent() {
        let mut planet = unit_planet(7);
        planet.generate().unwrap();
        let first = planet.combined_mesh();
        planet.generate().unwrap();
        assert_eq!(first, planet.combined_mesh());
    }

    #[test]
    fn test_set_resolution_rebuilds_with_new_counts() {
        let mut planet = unit_planet(3);
        planet.generate().unwrap();
        planet.set_resolution(5).unwrap();
        assert!(planet.faces().is_empty());
        planet.generate().unwrap();
        assert_eq!(planet.total_vertex_count(), 6 * 25);
        assert_eq!(planet.total_index_count(), 6 * 6 * 16);
    }

    #[test]
    fn test_set_shape_replaces_geometry() {
        let mut planet = unit_planet(4);
        planet.generate().unwrap();
        planet.set_shape(Arc::new(SphereShape::new(3.0)));
        planet.generate().unwrap();
        for (_, mesh) in planet.face_meshes() {
            for v in &mesh.positions {
                assert!((v.length() - 3.0).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_face_mask_limits_output() {
        let mut planet = unit_planet(4);
        planet.generate().unwrap();
        planet.set_face_mask(FaceMask::Only(CubeFace::NegY));
        planet.generate().unwrap();

        let faces: Vec<CubeFace> = planet.face_meshes().map(|(f, _)| f).collect();
        assert_eq!(faces, vec![CubeFace::NegY]);
        assert_eq!(planet.total_vertex_count(), 16);
        assert!(planet.face(CubeFace::PosX).unwrap().vertices().is_empty());

        planet.set_face_mask(FaceMask::All);
        planet.generate().unwrap();
        assert_eq!(planet.total_vertex_count(), 6 * 16);
    }

    #[test]
    fn test_combined_normals_point_outward() {
        let mut planet = unit_planet(8);
        planet.set_parallel(true);
        planet.generate().unwrap();
        let mesh = planet.combined_mesh();
        for (n, p) in mesh.normals.iter().zip(&mesh.positions) {
            assert!(n.dot(*p) > 0.9, "normal {n:?} not outward at {p:?}");
        }
    }
}
