//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns all transient pointer state and is the only
//! thing that sits between raw host events and the engine's
//! [`execute`](crate::engine::ViewerEngine::execute) method.

use super::event::{InputEvent, PointerButton};
use super::pointer::{Gesture, PointerState};
use crate::engine::ViewerCommand;

/// Converts raw host events into [`ViewerCommand`]s.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = input_processor.handle_event(event) {
///     engine.execute(cmd, now);
/// }
/// ```
pub struct InputProcessor {
    /// Pointer tracking and drag-vs-click state machine.
    state: PointerState,
}

impl InputProcessor {
    /// Create a new processor with no active gesture.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: PointerState::new(),
        }
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<ViewerCommand> {
        match event {
            InputEvent::PointerMoved { x, y } => {
                match self.state.moved(x, y) {
                    Gesture::Drag { delta_x } => {
                        Some(ViewerCommand::DragRotate { delta_x })
                    }
                    _ => None,
                }
            }
            InputEvent::PointerButton { button, pressed } => {
                self.handle_button(button, pressed)
            }
            InputEvent::PointerLeft => {
                self.state.left();
                None
            }
            InputEvent::Wheel { delta } => Some(ViewerCommand::Zoom { delta }),
        }
    }

    /// Button press/release — only the primary button drives gestures.
    fn handle_button(
        &mut self,
        button: PointerButton,
        pressed: bool,
    ) -> Option<ViewerCommand> {
        if button != PointerButton::Primary {
            return None;
        }

        if pressed {
            self.state.press();
            return None;
        }

        match self.state.release() {
            Gesture::Click { x, y } => Some(ViewerCommand::Click { x, y }),
            _ => None,
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press() -> InputEvent {
        InputEvent::PointerButton {
            button: PointerButton::Primary,
            pressed: true,
        }
    }

    fn release() -> InputEvent {
        InputEvent::PointerButton {
            button: PointerButton::Primary,
            pressed: false,
        }
    }

    #[test]
    fn wheel_maps_directly_to_zoom() {
        let mut proc = InputProcessor::new();
        assert_eq!(
            proc.handle_event(InputEvent::Wheel { delta: 120.0 }),
            Some(ViewerCommand::Zoom { delta: 120.0 })
        );
    }

    #[test]
    fn drag_produces_rotate_commands() {
        let mut proc = InputProcessor::new();
        assert!(proc.handle_event(press()).is_none());
        assert_eq!(
            proc.handle_event(InputEvent::PointerMoved { x: -8.0, y: 0.0 }),
            Some(ViewerCommand::DragRotate { delta_x: -8.0 })
        );
        // Release after a drag is not a click
        assert!(proc.handle_event(release()).is_none());
    }

    #[test]
    fn clean_click_produces_click_command() {
        let mut proc = InputProcessor::new();
        let _ =
            proc.handle_event(InputEvent::PointerMoved { x: 40.0, y: 60.0 });
        assert!(proc.handle_event(press()).is_none());
        assert_eq!(
            proc.handle_event(release()),
            Some(ViewerCommand::Click { x: 40.0, y: 60.0 })
        );
    }

    #[test]
    fn secondary_button_is_ignored() {
        let mut proc = InputProcessor::new();
        let event = InputEvent::PointerButton {
            button: PointerButton::Secondary,
            pressed: true,
        };
        assert!(proc.handle_event(event).is_none());
    }
}
