use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Scroll-to-motion mapping and smoothing parameters.
pub struct MotionOptions {
    /// Vertical translation per unit of scroll delta (before `input_scale`).
    pub position_coefficient: f32,
    /// Rotation (radians) per unit of scroll delta (before `input_scale`).
    pub rotation_coefficient: f32,
    /// Global multiplier applied to every scroll delta.
    pub input_scale: f32,
    /// Exponential smoothing factor per tick, in (0, 1].
    pub smoothing: f32,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            position_coefficient: 0.002,
            rotation_coefficient: 0.0084,
            input_scale: 0.2,
            smoothing: 0.07,
        }
    }
}
