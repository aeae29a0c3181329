use crate::view::ViewMode;

/// Platform-agnostic viewer commands.
///
/// Pointer input is translated into these by the input processor; panel
/// buttons emit them directly. Everything the viewer can do goes through
/// [`ViewerEngine::execute`](crate::engine::ViewerEngine::execute).
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerCommand {
    /// Rotate the orbit manually; only the sign of `delta_x` matters.
    DragRotate {
        /// Horizontal pointer movement since the last event, in pixels.
        delta_x: f32,
    },
    /// Change the orbit radius.
    Zoom {
        /// Wheel delta, positive away from the user.
        delta: f32,
    },
    /// Resolve a click at viewport coordinates.
    Click {
        /// Pointer x in viewport pixels.
        x: f32,
        /// Pointer y in viewport pixels.
        y: f32,
    },
    /// Select an apartment by id (list row or grid cell activation).
    Select {
        /// Apartment id.
        id: String,
    },
    /// Show the 3D scene or the 2D floor grid.
    SwitchView {
        /// Target view.
        mode: ViewMode,
    },
    /// Step the 2D grid one floor up.
    NextFloor,
    /// Step the 2D grid one floor down.
    PreviousFloor,
    /// Search field input.
    Search {
        /// Raw query text.
        query: String,
    },
    /// Host viewport changed size; applied after the debounce window.
    Resize {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
    /// An uncaught host fault to log and surface in the error banner.
    Fault {
        /// Human-readable fault description.
        message: String,
    },
}
