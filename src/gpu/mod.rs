//! Low-level GPU plumbing: context ownership and texture upload.

pub mod render_context;
pub mod texture;

pub use render_context::{RenderContext, RenderContextError};
pub use texture::ImageTexture;
