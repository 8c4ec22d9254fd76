//! Cover-fit UV scaling.
//!
//! Computes the UV scale that makes a texture fully cover a surface of a
//! different aspect ratio without distortion, cropping the excess — the
//! same behavior as CSS `background-size: cover`.

use glam::Vec2;

/// UV scale factors that cover-fit an image of `image_aspect` onto a surface
/// viewed at `surface_aspect` (both width / height).
///
/// The returned components are each in (0, 1]: the axis where the image
/// overflows is scaled down so the sampled window stays inside the texture.
#[must_use]
pub fn covered_scale(image_aspect: f32, surface_aspect: f32) -> Vec2 {
    if surface_aspect < image_aspect {
        // Image is wider than the surface: crop left/right.
        Vec2::new(surface_aspect / image_aspect, 1.0)
    } else {
        // Image is taller than the surface: crop top/bottom.
        Vec2::new(1.0, image_aspect / surface_aspect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_aspect_is_identity() {
        assert_eq!(covered_scale(1.0, 1.0), Vec2::ONE);
        assert_eq!(covered_scale(1.6, 1.6), Vec2::ONE);
    }

    #[test]
    fn wide_image_on_square_surface_crops_horizontally() {
        let scale = covered_scale(2.0, 1.0);
        assert_eq!(scale, Vec2::new(0.5, 1.0));
    }

    #[test]
    fn tall_image_on_wide_surface_crops_vertically() {
        let scale = covered_scale(0.5, 2.0);
        assert_eq!(scale, Vec2::new(1.0, 0.25));
    }

    #[test]
    fn scale_never_exceeds_one() {
        for &img in &[0.3_f32, 0.75, 1.0, 1.33, 1.78, 3.0] {
            for &surf in &[0.5_f32, 1.0, 1.6, 2.4] {
                let s = covered_scale(img, surf);
                assert!(s.x <= 1.0 && s.y <= 1.0, "img={img} surf={surf}");
                assert!(s.x > 0.0 && s.y > 0.0);
            }
        }
    }
}
