/// Result of feeding one pointer event through the gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Nothing actionable happened.
    None,
    /// Pointer moved horizontally while pressed.
    Drag {
        /// Horizontal movement since the last event, in pixels.
        delta_x: f32,
    },
    /// Press-and-release without movement.
    Click {
        /// Horizontal release position in viewport pixels.
        x: f32,
        /// Vertical release position in viewport pixels.
        y: f32,
    },
}

/// Tracks pointer position, press state, and drag-vs-click discrimination.
///
/// A release that follows any drag movement is *not* a click — the drag
/// already had its effect on the camera.
#[derive(Debug, Clone, Copy)]
pub struct PointerState {
    /// Current pointer position in viewport pixels.
    pub pos: (f32, f32),
    pressed: bool,
    dragging: bool,
    last_x: f32,
}

impl PointerState {
    /// Create a pointer state with no active press.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pos: (0.0, 0.0),
            pressed: false,
            dragging: false,
            last_x: 0.0,
        }
    }

    /// Whether the primary button is currently held.
    #[must_use]
    pub fn pressed(&self) -> bool {
        self.pressed
    }

    /// Record a primary-button press at the current position.
    pub fn press(&mut self) {
        self.pressed = true;
        self.dragging = false;
        self.last_x = self.pos.0;
    }

    /// Record a primary-button release. Returns a click gesture when no
    /// drag happened while pressed.
    pub fn release(&mut self) -> Gesture {
        let was_pressed = self.pressed;
        let was_dragging = self.dragging;
        self.pressed = false;
        self.dragging = false;

        if was_pressed && !was_dragging {
            Gesture::Click {
                x: self.pos.0,
                y: self.pos.1,
            }
        } else {
            Gesture::None
        }
    }

    /// Update position; while pressed, any horizontal movement is a drag.
    pub fn moved(&mut self, x: f32, y: f32) -> Gesture {
        self.pos = (x, y);

        if !self.pressed {
            return Gesture::None;
        }

        let delta_x = x - self.last_x;
        self.last_x = x;
        if delta_x == 0.0 {
            return Gesture::None;
        }

        self.dragging = true;
        Gesture::Drag { delta_x }
    }

    /// The pointer left the viewport; ends any press without a click.
    pub fn left(&mut self) {
        self.pressed = false;
        self.dragging = false;
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new()
    }
}
