//! Summary statistics for a generated planet mesh.

use orbis_mesh::{MeshData, PlanetVertex};

/// Size and radius range of a mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshStats {
    /// Number of vertices.
    pub vertices: usize,
    /// Number of triangles.
    pub triangles: usize,
    /// Closest vertex to the planet centre.
    pub min_radius: f32,
    /// Farthest vertex from the planet centre.
    pub max_radius: f32,
    /// Bytes needed for the interleaved vertex buffer plus the index buffer.
    pub gpu_bytes: usize,
}

impl MeshStats {
    /// Measure `mesh`. An empty mesh reports zero radii.
    pub fn from_mesh(mesh: &MeshData) -> Self {
        let (min_radius, max_radius) = mesh
            .positions
            .iter()
            .map(|p| p.length())
            .fold(None, |acc: Option<(f32, f32)>, r| match acc {
                None => Some((r, r)),
                Some((lo, hi)) => Some((lo.min(r), hi.max(r))),
            })
            .unwrap_or((0.0, 0.0));

        Self {
            vertices: mesh.vertex_count(),
            triangles: mesh.triangle_count(),
            min_radius,
            max_radius,
            gpu_bytes: mesh.vertex_count() * size_of::<PlanetVertex>() + mesh.index_bytes().len(),
        }
    }
}
