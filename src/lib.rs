// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// GPU / graphics allowances — casts are intentional and safe
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
// Float comparison: graphics math frequently compares against 0.0, 1.0, etc.
#![allow(clippy::float_cmp)]

//! Scroll-driven 3D card carousel rendered with wgpu.
//!
//! Whorl arranges textured card planes on a helix around the vertical axis
//! and maps scroll input to vertical translation and rotation of the whole
//! formation. Cards whose near edge leaves the camera frustum are teleported
//! to the opposite end of the visible window, so the helix scrolls forever.
//!
//! # Key entry points
//!
//! - [`Viewer`] - standalone winit window running the carousel
//! - [`engine::CarouselEngine`] - the rendering engine
//! - [`carousel::Formation`] - helix layout, wrap-around, and motion state
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! The binary opens a winit window and drives a redraw loop. Each frame the
//! engine runs the wrap pass against the camera frustum, eases the formation
//! transform toward its scroll target, broadcasts the residual rotation as a
//! per-card "speed" uniform, and draws all cards in a single render pass.

pub mod assets;
pub mod camera;
pub mod carousel;
pub mod engine;
mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
pub mod util;
pub mod viewer;

pub use error::WhorlError;
pub use input::{InputEvent, PointerButton};
pub use options::Options;
pub use viewer::{Viewer, ViewerBuilder};
