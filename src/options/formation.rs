use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Helix layout parameters for the card formation.
pub struct FormationOptions {
    /// Total number of cards in the formation.
    pub card_count: usize,
    /// Cards per full turn of the helix.
    pub cards_per_ring: usize,
    /// Vertical gap between rings, in world units.
    pub gap: f32,
    /// Helix radius, in world units.
    pub radius: f32,
    /// Card plane width, in world units.
    pub card_width: f32,
    /// Card plane height, in world units.
    pub card_height: f32,
    /// Plane subdivision count along each axis.
    pub segments: u32,
    /// Inward tilt applied to each card, in radians (negative leans in).
    pub tilt: f32,
    /// Extra margin added to the half-height when probing the frustum.
    pub edge_margin: f32,
}

impl FormationOptions {
    /// Vertical distance between consecutive rings.
    #[must_use]
    pub fn ring_step(&self) -> f32 {
        self.card_height + self.gap
    }

    /// Number of complete rings in the formation (integer division, matching
    /// the layout's vertical-centering convention).
    #[must_use]
    pub fn ring_count(&self) -> usize {
        self.card_count / self.cards_per_ring
    }

    /// Distance a card jumps when it wraps to the other end of the visible
    /// window. Derived from the ring count so the two cannot drift apart.
    #[must_use]
    pub fn wrap_distance(&self) -> f32 {
        self.ring_step() * self.ring_count() as f32
    }
}

impl Default for FormationOptions {
    fn default() -> Self {
        Self {
            card_count: 40,
            cards_per_ring: 10,
            gap: 0.5,
            radius: 2.5,
            card_width: 1.3,
            card_height: 1.0,
            segments: 30,
            tilt: -PI / 33.5,
            edge_margin: 0.15,
        }
    }
}
