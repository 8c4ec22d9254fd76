use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Scroll normalization parameters.
pub struct InputOptions {
    /// Pixels per wheel "line" for line-delta scroll events.
    pub line_height: f32,
    /// Multiplier applied to press-drag vertical movement.
    pub drag_multiplier: f32,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            line_height: 40.0,
            drag_multiplier: 2.0,
        }
    }
}
