//! Fixed perspective camera and frustum extraction.

mod core;
pub mod frustum;

pub use self::core::{Camera, CameraUniform};
pub use frustum::Frustum;
