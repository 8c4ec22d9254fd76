//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (helix layout, scroll mapping, input
//! normalization, scene/camera placement) are consolidated here. Options
//! serialize to/from TOML so alternative carousel presets can be stored on
//! disk and loaded at startup.

mod formation;
mod input;
mod motion;
mod scene;

use std::path::Path;

pub use formation::FormationOptions;
pub use input::InputOptions;
pub use motion::MotionOptions;
pub use scene::SceneOptions;
use serde::{Deserialize, Serialize};

use crate::error::WhorlError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[motion]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Helix layout parameters.
    pub formation: FormationOptions,
    /// Scroll-to-motion mapping and smoothing.
    pub motion: MotionOptions,
    /// Scroll normalization parameters.
    pub input: InputOptions,
    /// Background and camera placement.
    pub scene: SceneOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`WhorlError::Io`] if the file cannot be read and
    /// [`WhorlError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, WhorlError> {
        let content = std::fs::read_to_string(path).map_err(WhorlError::Io)?;
        toml::from_str(&content)
            .map_err(|e| WhorlError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`WhorlError::OptionsParse`] on serialization failure and
    /// [`WhorlError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), WhorlError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WhorlError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(WhorlError::Io)?;
        }
        std::fs::write(path, content).map_err(WhorlError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[formation]
radius = 4.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.formation.radius, 4.0);
        // Everything else should be default
        assert_eq!(opts.formation.card_count, 40);
        assert_eq!(opts.motion.smoothing, 0.07);
        assert_eq!(opts.scene.camera_z, 5.3);
    }

    #[test]
    fn wrap_distance_tracks_ring_count() {
        let mut formation = FormationOptions::default();
        // Defaults: (1.0 + 0.5) * (40 / 10) = 6.0
        assert_eq!(formation.wrap_distance(), 6.0);

        // Changing the ring size keeps wrap distance in sync automatically.
        formation.cards_per_ring = 20;
        assert_eq!(formation.wrap_distance(), 3.0);
    }

    #[test]
    fn default_scroll_coefficients() {
        let motion = MotionOptions::default();
        assert!((motion.position_coefficient * motion.input_scale - 4.0e-4).abs() < 1e-9);
        assert!((motion.rotation_coefficient * motion.input_scale - 1.68e-3).abs() < 1e-9);
    }
}
