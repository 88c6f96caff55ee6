//! Grid-to-cube and cube-to-sphere mapping.
//!
//! Points are placed on the `[-1, 1]` cube face spanned by a [`FaceBasis`] and
//! then normalized onto the unit sphere. Cells near the face corners come out
//! smaller than those near the centre; that distortion is accepted.

use glam::{Vec2, Vec3};

use crate::FaceBasis;

/// Normalized grid position of `(x, y)` on a `resolution`-wide grid.
///
/// Corners map exactly to `(0, 0)`, `(1, 0)`, `(0, 1)` and `(1, 1)`.
/// `resolution` must be at least 2.
#[inline]
#[must_use]
pub fn grid_percent(x: u32, y: u32, resolution: u32) -> Vec2 {
    debug_assert!(resolution >= 2, "resolution must be >= 2, got {resolution}");
    Vec2::new(x as f32, y as f32) / (resolution - 1) as f32
}

/// Convert a grid percentage in `[0, 1]²` to a point on the face of the `[-1, 1]` cube.
#[inline]
#[must_use]
pub fn cube_point(basis: &FaceBasis, percent: Vec2) -> Vec3 {
    // Remap [0, 1] to [-1, 1]
    let s = 2.0 * percent.x - 1.0;
    let t = 2.0 * percent.y - 1.0;

    basis.normal + s * basis.tangent_a + t * basis.tangent_b
}

/// Project a cube-surface point onto the unit sphere.
#[inline]
#[must_use]
pub fn project_to_sphere(cube_point: Vec3) -> Vec3 {
    cube_point.normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CubeFace;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_grid_corners_are_exact() {
        for r in [2, 3, 7, 64] {
            assert_eq!(grid_percent(0, 0, r), Vec2::new(0.0, 0.0));
            assert_eq!(grid_percent(r - 1, 0, r), Vec2::new(1.0, 0.0));
            assert_eq!(grid_percent(0, r - 1, r), Vec2::new(0.0, 1.0));
            assert_eq!(grid_percent(r - 1, r - 1, r), Vec2::new(1.0, 1.0));
        }
    }

    #[test]
    fn test_corner_percentages_land_on_cube_corners() {
        for face in CubeFace::ALL {
            let basis = face.basis();
            for percent in [Vec2::ZERO, Vec2::X, Vec2::Y, Vec2::ONE] {
                let p = cube_point(&basis, percent);
                assert!(
                    (p.abs() - Vec3::ONE).length() < EPSILON,
                    "{face:?} corner {percent:?} not on cube corner: {p:?}"
                );
            }
        }
    }

    #[test]
    fn test_cube_point_lies_on_face_plane() {
        for face in CubeFace::ALL {
            let basis = face.basis();
            for i in 0..=10 {
                for j in 0..=10 {
                    let percent = Vec2::new(i as f32 / 10.0, j as f32 / 10.0);
                    let p = cube_point(&basis, percent);
                    assert!((p.dot(basis.normal) - 1.0).abs() < EPSILON);
                }
            }
        }
    }

    #[test]
    fn test_all_outputs_on_unit_sphere() {
        for face in CubeFace::ALL {
            let basis = face.basis();
            for i in 0..=10 {
                for j in 0..=10 {
                    let percent = Vec2::new(i as f32 / 10.0, j as f32 / 10.0);
                    let s = project_to_sphere(cube_point(&basis, percent));
                    assert!(
                        (s.length() - 1.0).abs() < EPSILON,
                        "Point not on unit sphere for {face:?} at {percent:?}: length = {}",
                        s.length()
                    );
                }
            }
        }
    }

    #[test]
    fn test_projection_preserves_direction() {
        let basis = CubeFace::NegY.basis();
        let c = cube_point(&basis, Vec2::new(0.2, 0.9));
        let s = project_to_sphere(c);
        assert!(c.normalize().dot(s) > 1.0 - EPSILON);
    }
}
