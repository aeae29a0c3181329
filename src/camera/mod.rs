//! Orbit camera and its rotation state machine.

mod controller;

pub use controller::{OrbitCamera, RotationState};
