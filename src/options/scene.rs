use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Background and camera placement parameters.
pub struct SceneOptions {
    /// Background clear color (linear RGB).
    pub background: [f32; 3],
    /// Camera distance from the helix axis along +Z.
    pub camera_z: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            background: [0.0, 0.0, 0.0],
            camera_z: 5.3,
            fovy: 50.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}
