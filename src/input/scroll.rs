//! Scroll gesture normalization.
//!
//! Wheel events arrive as line or pixel deltas depending on the platform and
//! device, and press-drag is the pointer equivalent of a touch swipe. The
//! adapter collapses all of them into one signed pixel-scale scalar per
//! event, which is the only thing the carousel's motion mapping consumes.

use crate::input::{InputEvent, PointerButton};
use crate::options::InputOptions;

/// Normalizes wheel and press-drag gestures into scroll deltas.
pub struct ScrollAdapter {
    opts: InputOptions,
    dragging: bool,
    last_cursor_y: Option<f32>,
}

impl ScrollAdapter {
    /// Create an adapter with the given normalization parameters.
    #[must_use]
    pub fn new(opts: &InputOptions) -> Self {
        Self {
            opts: opts.clone(),
            dragging: false,
            last_cursor_y: None,
        }
    }

    /// Feed one input event. Returns the normalized scroll delta it produced,
    /// if any.
    pub fn handle(&mut self, event: InputEvent) -> Option<f32> {
        match event {
            InputEvent::ScrollLines { y } => Some(y * self.opts.line_height),
            InputEvent::ScrollPixels { y } => Some(y),
            InputEvent::PointerButton {
                button: PointerButton::Primary,
                pressed,
            } => {
                self.dragging = pressed;
                // Drop the drag anchor so the next move starts fresh.
                self.last_cursor_y = None;
                None
            }
            InputEvent::CursorMoved { y, .. } => {
                if !self.dragging {
                    return None;
                }
                let delta = self
                    .last_cursor_y
                    .map(|last| (y - last) * self.opts.drag_multiplier);
                self.last_cursor_y = Some(y);
                delta
            }
            InputEvent::PointerButton { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter() -> ScrollAdapter {
        ScrollAdapter::new(&InputOptions::default())
    }

    #[test]
    fn line_deltas_scale_by_line_height() {
        let mut scroll = adapter();
        assert_eq!(
            scroll.handle(InputEvent::ScrollLines { y: -3.0 }),
            Some(-120.0)
        );
    }

    #[test]
    fn pixel_deltas_pass_through() {
        let mut scroll = adapter();
        assert_eq!(
            scroll.handle(InputEvent::ScrollPixels { y: 17.5 }),
            Some(17.5)
        );
    }

    #[test]
    fn drag_produces_deltas_only_while_pressed() {
        let mut scroll = adapter();

        // Movement without a press is ignored.
        assert_eq!(
            scroll.handle(InputEvent::CursorMoved { x: 0.0, y: 50.0 }),
            None
        );

        let press = InputEvent::PointerButton {
            button: PointerButton::Primary,
            pressed: true,
        };
        assert_eq!(scroll.handle(press), None);

        // First move after the press only anchors the gesture.
        assert_eq!(
            scroll.handle(InputEvent::CursorMoved { x: 0.0, y: 100.0 }),
            None
        );
        assert_eq!(
            scroll.handle(InputEvent::CursorMoved { x: 0.0, y: 110.0 }),
            Some(20.0)
        );

        let release = InputEvent::PointerButton {
            button: PointerButton::Primary,
            pressed: false,
        };
        assert_eq!(scroll.handle(release), None);
        assert_eq!(
            scroll.handle(InputEvent::CursorMoved { x: 0.0, y: 300.0 }),
            None
        );
    }

    #[test]
    fn secondary_button_does_not_start_a_drag() {
        let mut scroll = adapter();
        let press = InputEvent::PointerButton {
            button: PointerButton::Secondary,
            pressed: true,
        };
        assert_eq!(scroll.handle(press), None);
        assert_eq!(
            scroll.handle(InputEvent::CursorMoved { x: 0.0, y: 40.0 }),
            None
        );
    }
}
