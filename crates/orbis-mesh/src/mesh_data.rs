//! Plain vertex/index/normal buffers handed to the rendering layer.
//!
//! Builders produce value types only. Uploading them to a GPU or engine
//! resource is the job of whatever adapter sits on the other side; the
//! interleaved [`PlanetVertex`] form and the byte views exist for that.

use glam::Vec3;

use crate::error::MeshError;

/// Triangle mesh output of a face build (or several merged face builds).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    /// Vertex positions.
    pub positions: Vec<Vec3>,
    /// Index buffer (triangles, 3 indices per triangle, counter-clockwise from outside).
    pub indices: Vec<u32>,
    /// Per-vertex normals, parallel to `positions`.
    pub normals: Vec<Vec3>,
}

impl MeshData {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns `true` if the mesh has no vertices.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate the index buffer one triangle at a time.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Append another mesh, offsetting its indices past the current vertices.
    ///
    /// Vertices are copied as-is; coincident positions are not merged.
    pub fn append(&mut self, other: &MeshData) {
        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.indices.extend(other.indices.iter().map(|&i| i + base));
    }

    /// Check the structural invariants the renderer relies on.
    ///
    /// The index count must be a multiple of three, every index must address
    /// an existing vertex, no triangle may repeat an index, and there must be
    /// exactly one normal per vertex.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.indices.len() % 3 != 0 {
            return Err(MeshError::InvalidConfiguration(format!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            )));
        }
        if self.normals.len() != self.positions.len() {
            return Err(MeshError::InvalidConfiguration(format!(
                "{} normals for {} vertices",
                self.normals.len(),
                self.positions.len()
            )));
        }
        let vertex_count = self.positions.len();
        for (t, [a, b, c]) in self.triangles().enumerate() {
            if let Some(&bad) = [a, b, c].iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::InvalidConfiguration(format!(
                    "triangle {t} references vertex {bad} (vertex count {vertex_count})"
                )));
            }
            if a == b || b == c || a == c {
                return Err(MeshError::InvalidConfiguration(format!(
                    "triangle {t} repeats a vertex: [{a}, {b}, {c}]"
                )));
            }
        }
        Ok(())
    }

    /// Interleave positions and normals into GPU-ready vertices.
    pub fn interleaved(&self) -> Vec<PlanetVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .map(|(p, n)| PlanetVertex {
                position: p.to_array(),
                normal: n.to_array(),
            })
            .collect()
    }

    /// Returns the index buffer as a byte slice for GPU upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Interleaved position + normal vertex, 24 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlanetVertex {
    /// Surface position.
    pub position: [f32; 3],
    /// Smooth vertex normal.
    pub normal: [f32; 3],
}

static_assertions::assert_eq_size!(PlanetVertex, [u8; 24]);

impl PlanetVertex {
    /// View a vertex slice as bytes for GPU upload.
    pub fn as_bytes(vertices: &[PlanetVertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}
