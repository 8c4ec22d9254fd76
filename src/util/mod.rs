//! Small shared utilities.

pub mod cover_fit;
pub mod frame_timing;

pub use cover_fit::covered_scale;
pub use frame_timing::FrameTiming;
