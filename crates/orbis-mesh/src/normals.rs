//! Smooth per-vertex normals derived from triangle data.

use glam::Vec3;

/// Recompute per-vertex normals from scratch.
///
/// Each vertex receives the sum of the unnormalized normals of every triangle
/// that touches it, so larger triangles weigh more. The sum is then
/// normalized; vertices with no (or only degenerate) triangles get
/// [`Vec3::ZERO`].
///
/// `indices.len()` must be a multiple of three and every index must be in
/// range for `positions`.
pub fn compute_vertex_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let normal = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] += normal;
        normals[b] += normal;
        normals[c] += normal;
    }

    for n in &mut normals {
        *n = n.normalize_or_zero();
    }
    normals
}
