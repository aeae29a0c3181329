//! Browser shell: the wasm-bindgen entry point, the JS scene bridge, and
//! the DOM-backed panel surface.
//!
//! All browser work happens on the main thread inside the
//! `requestAnimationFrame` loop; DOM event closures only push into a
//! shared command queue that the loop drains once per frame.

mod bridge;
mod panel;
mod shell;

pub use bridge::SceneBridge;
pub use panel::DomPanel;
pub use shell::{start_viewer, ViewerHandle};

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::engine::ViewerCommand;
use crate::input::InputEvent;

/// Work queued by a DOM event closure, drained once per frame.
pub(crate) enum Pending {
    /// A raw pointer/wheel event from the 3D container.
    Input(InputEvent),
    /// A command emitted directly by a panel control.
    Command(ViewerCommand),
}

/// Queue shared between event closures and the frame loop.
pub(crate) type PendingQueue = Rc<RefCell<VecDeque<Pending>>>;
