//! View frustum with point-containment tests.
//!
//! The wrap pass probes a single point per card against the frustum, so
//! only point containment is provided. Planes are extracted from the
//! view-projection matrix with the Gribb/Hartmann method.

use glam::{Mat4, Vec3, Vec4};

/// A clipping plane stored as `(normal, distance)` with the plane equation
/// `n · p + d = 0`. The normal points into the positive half-space.
#[derive(Debug, Clone, Copy)]
struct Plane {
    normal: Vec3,
    distance: f32,
}

impl Plane {
    /// Normalize the raw row combination `(a, b, c, d)` into a plane.
    fn from_row(row: Vec4) -> Self {
        let len = row.truncate().length();
        if len > 0.0 {
            Self {
                normal: row.truncate() / len,
                distance: row.w / len,
            }
        } else {
            Self {
                normal: Vec3::ZERO,
                distance: 0.0,
            }
        }
    }

    /// Signed distance from point to plane (positive = inside half-space).
    #[inline]
    fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }
}

/// View frustum consisting of 6 inward-facing planes.
#[derive(Debug, Clone)]
pub struct Frustum {
    /// Left, right, bottom, top, near, far.
    planes: [Plane; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Assumes the right-handed, [0,1]-depth convention of wgpu/Vulkan
    /// (near plane is row 2 alone rather than `row3 + row2`).
    #[must_use]
    pub fn from_view_projection(vp: Mat4) -> Self {
        let row0 = vp.row(0);
        let row1 = vp.row(1);
        let row2 = vp.row(2);
        let row3 = vp.row(3);

        Self {
            planes: [
                Plane::from_row(row3 + row0),
                Plane::from_row(row3 - row0),
                Plane::from_row(row3 + row1),
                Plane::from_row(row3 - row1),
                Plane::from_row(row2),
                Plane::from_row(row3 - row2),
            ],
        }
    }

    /// Test if a point is inside the frustum.
    #[inline]
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.signed_distance(point) >= 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// View-projection for the carousel's fixed camera.
    fn carousel_vp(aspect: f32) -> Mat4 {
        let proj =
            Mat4::perspective_rh(50.0_f32.to_radians(), aspect, 0.1, 100.0);
        let view =
            Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.3), Vec3::ZERO, Vec3::Y);
        proj * view
    }

    #[test]
    fn contains_origin() {
        let frustum = Frustum::from_view_projection(carousel_vp(1.6));
        assert!(frustum.contains_point(Vec3::ZERO));
    }

    #[test]
    fn excludes_point_behind_camera() {
        let frustum = Frustum::from_view_projection(carousel_vp(1.6));
        assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, 10.0)));
    }

    #[test]
    fn excludes_points_far_above_and_below() {
        let frustum = Frustum::from_view_projection(carousel_vp(1.6));
        assert!(!frustum.contains_point(Vec3::new(0.0, 9.0, 0.0)));
        assert!(!frustum.contains_point(Vec3::new(0.0, -9.0, 0.0)));
    }

    #[test]
    fn vertical_extent_grows_with_distance() {
        let frustum = Frustum::from_view_projection(carousel_vp(1.6));
        // Half-height at depth d from the eye is d * tan(fovy / 2); a point
        // at y = 2 is outside at the near side of the helix but inside at
        // the far side.
        assert!(!frustum.contains_point(Vec3::new(0.0, 2.0, 2.5)));
        assert!(frustum.contains_point(Vec3::new(0.0, 2.0, -2.5)));
    }
}
