//! Platform-agnostic input events and scroll normalization.

pub mod scroll;

pub use scroll::ScrollAdapter;

/// Platform-agnostic input events.
///
/// These are fed into a [`ScrollAdapter`], which collapses wheel and
/// press-drag gestures into a single signed scroll delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Pointer button pressed or released.
    PointerButton {
        /// Which button changed.
        button: PointerButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Wheel scroll measured in lines (positive = away from the user).
    ScrollLines {
        /// Vertical line delta.
        y: f32,
    },
    /// Wheel/trackpad scroll measured in pixels.
    ScrollPixels {
        /// Vertical pixel delta.
        y: f32,
    },
}

/// Platform-agnostic pointer button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary (left) button.
    Primary,
    /// Secondary (right) button.
    Secondary,
    /// Middle button (wheel click).
    Middle,
}

impl From<winit::event::MouseButton> for PointerButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Secondary,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Primary,
        }
    }
}
