//! Platform-agnostic input events and gesture interpretation.
//!
//! Hosts forward raw pointer/wheel events as [`InputEvent`] values; the
//! [`InputProcessor`] owns all transient pointer state (position, press
//! tracking, drag-vs-click discrimination) and turns events into
//! [`ViewerCommand`](crate::engine::ViewerCommand)s for the engine.

mod event;
mod pointer;
mod processor;

pub use event::{InputEvent, PointerButton};
pub use pointer::{Gesture, PointerState};
pub use processor::InputProcessor;
