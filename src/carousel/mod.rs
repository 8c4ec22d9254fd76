//! Helix formation, frustum wrap-around, and motion state — the carousel
//! core.
//!
//! Cards are laid out along a helix (1/10 turn and one vertical step per
//! card with the defaults) and tilted slightly about the horizontal axis
//! pointing from each card toward the helix centerline. The formation as a
//! whole carries a single smoothed transform driven by scroll input.
//!
//! The wrap pass keeps the illusion of an infinite scroll: each frame, every
//! card probes the near edge of itself closest to the view center against
//! the camera frustum, and a card whose probe has left the frustum is
//! teleported one full formation span toward the other end. Probing the edge
//! rather than the card center avoids wrapping while part of the card is
//! still visible.

pub mod motion;

use std::f32::consts::TAU;

use glam::{Mat4, Quat, Vec2, Vec3};
pub use motion::{Motion, MotionTarget};

use crate::camera::Frustum;
use crate::options::{FormationOptions, MotionOptions};
use crate::util::covered_scale;

/// A single textured card of the formation.
///
/// Geometry is shared across all cards; the per-card state here feeds each
/// card's exclusively-owned uniform buffer. Cards are created once and
/// recycled by repositioning, never reallocated.
#[derive(Debug, Clone)]
pub struct Card {
    /// Position in formation-local space.
    pub position: Vec3,
    /// Orientation: yaw matching the helix angle, then the inward tilt.
    pub rotation: Quat,
    /// Index into the loaded texture set.
    pub texture_index: usize,
    /// Cover-fit UV scale for this card's texture at the current aspect.
    pub uv_scale: Vec2,
}

/// An ordered collection of cards on a helix with one shared smoothed
/// transform.
pub struct Formation {
    cards: Vec<Card>,
    motion: Motion,
    layout: FormationOptions,
}

impl Formation {
    /// Build the formation: one card per index, texture assignment cycling
    /// through `texture_aspects`, vertically centered at construction time.
    #[must_use]
    pub fn new(
        layout: &FormationOptions,
        motion_opts: &MotionOptions,
        texture_aspects: &[f32],
        viewport_aspect: f32,
    ) -> Self {
        let step = layout.ring_step();
        let offset = step * layout.ring_count() as f32 / 2.0;

        let mut cards = Vec::with_capacity(layout.card_count);
        for i in 0..layout.card_count {
            let turn = i as f32 / layout.cards_per_ring as f32;
            let angle = TAU * turn;

            let position = Vec3::new(
                layout.radius * angle.sin(),
                step * turn - offset,
                layout.radius * angle.cos(),
            );

            // Horizontal axis from the card toward the helix centerline;
            // the tilt leans the card in around it.
            let toward_axis =
                (Vec3::new(0.0, position.y, 0.0) - position).normalize();
            let rotation = Quat::from_axis_angle(toward_axis, layout.tilt)
                * Quat::from_rotation_y(angle);

            let texture_index = if texture_aspects.is_empty() {
                0
            } else {
                i % texture_aspects.len()
            };
            let uv_scale = texture_aspects
                .get(texture_index)
                .map_or(Vec2::ONE, |&a| covered_scale(a, viewport_aspect));

            cards.push(Card {
                position,
                rotation,
                texture_index,
                uv_scale,
            });
        }

        Self {
            cards,
            motion: Motion::new(motion_opts),
            layout: layout.clone(),
        }
    }

    /// The cards in formation order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Transform of the formation as a whole (vertical offset then yaw).
    #[must_use]
    pub fn group_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, self.motion.position_y, 0.0))
            * Mat4::from_rotation_y(self.motion.rotation_y)
    }

    /// World model matrix for one card (group transform times card-local).
    #[must_use]
    pub fn card_model(&self, card: &Card) -> Mat4 {
        self.group_matrix()
            * Mat4::from_rotation_translation(card.rotation, card.position)
    }

    /// Accumulate a scroll delta into the motion target.
    pub fn apply_scroll(&mut self, delta: f32) {
        self.motion.apply_scroll(delta);
    }

    /// Wrap pass: teleport cards whose edge probe has left the frustum.
    ///
    /// Runs against the frustum derived from the camera's current
    /// (pre-smoothing) matrices. For each card the probe sits on the card's
    /// vertical centerline (`x = 0`, world z preserved), shifted toward the
    /// formation's y = 0 plane by half the card height plus a margin. Cards
    /// exactly at y = 0 are never wrapped.
    pub fn wrap_offscreen(&mut self, frustum: &Frustum) {
        let group = self.group_matrix();
        let reach =
            self.layout.card_height / 2.0 + self.layout.edge_margin;
        let span = self.layout.wrap_distance();

        for card in &mut self.cards {
            let center = group.transform_point3(card.position);
            let mut probe = Vec3::new(0.0, center.y, center.z);

            if center.y > 0.0 {
                probe.y -= reach;
                if !frustum.contains_point(probe) {
                    card.position.y -= span;
                }
            } else if center.y < 0.0 {
                probe.y += reach;
                if !frustum.contains_point(probe) {
                    card.position.y += span;
                }
            }
        }
    }

    /// Advance one tick of the smoothing step.
    pub fn advance(&mut self) {
        self.motion.advance();
    }

    /// Residual rotation broadcast to every card's shader as the speed
    /// uniform.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.motion.speed()
    }

    /// The smoothed motion state.
    #[must_use]
    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    /// Recompute every card's UV scale against a new viewport aspect ratio,
    /// in place. Geometry and positions are unaffected.
    pub fn rescale_uvs(
        &mut self,
        texture_aspects: &[f32],
        viewport_aspect: f32,
    ) {
        for card in &mut self.cards {
            if let Some(&aspect) = texture_aspects.get(card.texture_index) {
                card.uv_scale = covered_scale(aspect, viewport_aspect);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Mat4;

    use super::*;

    const ASPECTS: [f32; 8] = [1.5, 0.8, 1.5, 1.5, 0.8, 1.5, 1.5, 0.8];

    fn default_formation() -> Formation {
        Formation::new(
            &FormationOptions::default(),
            &MotionOptions::default(),
            &ASPECTS,
            1.6,
        )
    }

    fn carousel_frustum() -> Frustum {
        let proj =
            Mat4::perspective_rh(50.0_f32.to_radians(), 1.6, 0.1, 100.0);
        let view =
            Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.3), Vec3::ZERO, Vec3::Y);
        Frustum::from_view_projection(proj * view)
    }

    #[test]
    fn cards_lie_on_the_helix_circle() {
        let formation = default_formation();
        for card in formation.cards() {
            let horizontal =
                (card.position.x.powi(2) + card.position.z.powi(2)).sqrt();
            assert!((horizontal - 2.5).abs() < 1e-5);
        }
    }

    #[test]
    fn height_climbs_steadily_and_is_centered() {
        let formation = default_formation();
        let cards = formation.cards();
        assert_eq!(cards.len(), 40);

        // First card sits half the total span below the origin.
        assert!((cards[0].position.y - (-3.0)).abs() < 1e-6);

        for pair in cards.windows(2) {
            assert!(pair[1].position.y >= pair[0].position.y);
        }
        // One full ring climbs exactly one ring step.
        assert!(
            (cards[10].position.y - cards[0].position.y - 1.5).abs() < 1e-5
        );
    }

    #[test]
    fn texture_assignment_is_periodic() {
        let formation = default_formation();
        let cards = formation.cards();
        for i in 0..cards.len() {
            assert_eq!(cards[i].texture_index, i % 8);
            if i + 8 < cards.len() {
                assert_eq!(
                    cards[i].texture_index,
                    cards[i + 8].texture_index
                );
            }
        }
    }

    #[test]
    fn tilt_keeps_card_normals_radial() {
        // The tilt axis points from the card toward the centerline, which is
        // parallel to the yawed plane normal, so the normal must stay
        // radial for every card.
        let formation = default_formation();
        for (i, card) in formation.cards().iter().enumerate() {
            let turn = i as f32 / 10.0;
            let angle = TAU * turn;
            let normal = card.rotation * Vec3::Z;
            let radial = Vec3::new(angle.sin(), 0.0, angle.cos());
            assert!(
                normal.dot(radial) > 0.999,
                "card {i}: normal {normal} not aligned with {radial}"
            );
        }
    }

    #[test]
    fn wrap_pulls_high_cards_down_and_low_cards_up() {
        let mut formation = default_formation();
        let frustum = carousel_frustum();

        // Card 39 peaks at y = 2.85 near the camera; its downward probe is
        // well above the frustum there. Card 0 sits at y = -3.0, below it.
        let high_before = formation.cards[39].position.y;
        let low_before = formation.cards[0].position.y;

        formation.wrap_offscreen(&frustum);

        assert_eq!(formation.cards[39].position.y, high_before - 6.0);
        assert_eq!(formation.cards[0].position.y, low_before + 6.0);
    }

    #[test]
    fn wrap_leaves_visible_cards_alone() {
        let mut formation = default_formation();
        let frustum = carousel_frustum();

        // Card 21 sits at y = 0.15 with its probe near the view center.
        let before = formation.cards[21].position;
        formation.wrap_offscreen(&frustum);
        assert_eq!(formation.cards[21].position, before);
    }

    #[test]
    fn wrap_never_touches_cards_at_the_origin_plane() {
        let mut formation = default_formation();
        // Card 20 lands exactly on y = 0; park it far outside the frustum
        // horizontally to prove the tie policy, not visibility, spares it.
        assert_eq!(formation.cards[20].position.y, 0.0);
        formation.cards[20].position.z = 50.0;

        formation.wrap_offscreen(&carousel_frustum());
        assert_eq!(formation.cards[20].position.y, 0.0);
    }

    #[test]
    fn wrap_accounts_for_group_transform() {
        let mut formation = default_formation();
        // Scroll far enough that the whole formation has sunk below view;
        // after easing to the target, previously-centered cards read as
        // "below origin" in world space and wrap upward.
        formation.apply_scroll(40000.0);
        for _ in 0..600 {
            formation.advance();
        }
        assert!(formation.motion().position_y < -3.0);

        let card_21_before = formation.cards[21].position.y;
        formation.wrap_offscreen(&carousel_frustum());
        assert_eq!(formation.cards[21].position.y, card_21_before + 6.0);
    }

    #[test]
    fn scroll_then_advance_matches_reference_numbers() {
        let mut formation = default_formation();
        formation.apply_scroll(100.0);

        let target = formation.motion().target();
        assert!((target.position_y - (-0.04)).abs() < 1e-6);
        assert!((target.rotation_y - (-0.168)).abs() < 1e-6);

        formation.advance();
        assert!(
            (formation.motion().position_y - (-0.04 * 0.07)).abs() < 1e-7
        );
        assert!(
            (formation.motion().rotation_y - (-0.168 * 0.07)).abs() < 1e-7
        );
        assert_eq!(
            formation.speed(),
            target.rotation_y - formation.motion().rotation_y
        );
    }

    #[test]
    fn rescale_updates_uv_only() {
        let mut formation = default_formation();
        let positions: Vec<Vec3> =
            formation.cards().iter().map(|c| c.position).collect();

        formation.rescale_uvs(&ASPECTS, 0.9);

        for (card, before) in formation.cards().iter().zip(&positions) {
            assert_eq!(card.position, *before);
            assert_eq!(
                card.uv_scale,
                covered_scale(ASPECTS[card.texture_index], 0.9)
            );
        }
    }

    #[test]
    fn empty_texture_set_falls_back_to_identity_uv() {
        let formation = Formation::new(
            &FormationOptions::default(),
            &MotionOptions::default(),
            &[],
            1.6,
        );
        for card in formation.cards() {
            assert_eq!(card.texture_index, 0);
            assert_eq!(card.uv_scale, Vec2::ONE);
        }
    }
}
