//! Card geometry and the render pass that draws the formation.

pub mod card;
pub mod plane;

pub use card::CardRenderer;
pub use plane::{PlaneMesh, Vertex};
