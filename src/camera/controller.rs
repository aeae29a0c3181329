//! The orbital camera: a single angle accumulator on a circle around the
//! scene origin, with a three-state rotation machine.
//!
//! State transitions:
//!
//! - `Auto` (initial): steady turntable at the configured speed.
//! - pointer drag → `Manual` at a constant speed whose *sign* comes from
//!   the drag direction; the magnitude of the drag delta is ignored.
//! - background click → `Halted` (speed zero).
//! - from `Manual` or `Halted`, once the idle delay elapses with no
//!   further interaction the machine reverts to `Auto`.
//!
//! Drag release on its own changes nothing — the last manual speed keeps
//! applying until a new drag, a background click, or the idle timer.

use glam::Vec3;
use web_time::{Duration, Instant};

use crate::options::CameraOptions;

/// Rotation state of the orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RotationState {
    /// Steady turntable motion at the configured auto speed.
    Auto,
    /// User-driven constant speed; sign set by the last drag direction.
    Manual {
        /// Signed angular speed in radians per frame.
        speed: f32,
    },
    /// Stopped by a background click; waiting for the idle timer.
    Halted,
}

/// Orbit camera with clamped zoom and idle-resuming auto-rotation.
///
/// The eye sits on a circle of radius `distance` around the scene origin
/// at a fixed elevation ratio, always looking at a focus point above the
/// origin. [`tick`](Self::tick) advances the orbit once per rendered
/// frame.
pub struct OrbitCamera {
    angle: f32,
    distance: f32,
    focus: Vec3,
    rotation: RotationState,
    last_interaction: Instant,
    opts: CameraOptions,
}

impl OrbitCamera {
    /// Create a camera in the `Auto` state at the configured start radius.
    #[must_use]
    pub fn new(opts: CameraOptions, now: Instant) -> Self {
        Self {
            angle: 0.0,
            distance: opts.initial_distance,
            focus: Vec3::new(0.0, opts.focus_height, 0.0),
            rotation: RotationState::Auto,
            last_interaction: now,
            opts,
        }
    }

    /// Current rotation state.
    #[must_use]
    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    /// Signed angular speed currently applied each frame.
    #[must_use]
    pub fn angular_speed(&self) -> f32 {
        match self.rotation {
            RotationState::Auto => self.opts.auto_rotate_speed,
            RotationState::Manual { speed } => speed,
            RotationState::Halted => 0.0,
        }
    }

    /// Current orbit radius.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Apply a horizontal drag. Only the *sign* of the delta matters: the
    /// speed is the fixed manual constant in the drag direction.
    pub fn drag(&mut self, delta_x: f32, now: Instant) {
        if delta_x == 0.0 {
            return;
        }
        let speed = self.opts.drag_rotate_speed.copysign(delta_x);
        self.rotation = RotationState::Manual { speed };
        self.last_interaction = now;
    }

    /// A background click stops the orbit until the idle timer resumes it.
    pub fn halt(&mut self, now: Instant) {
        self.rotation = RotationState::Halted;
        self.last_interaction = now;
    }

    /// Adjust the orbit radius linearly by the wheel delta, clamped to the
    /// configured range. No rotation-state transition.
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance + delta * self.opts.zoom_speed)
            .clamp(self.opts.min_distance, self.opts.max_distance);
    }

    /// Advance the orbit by one frame: run the idle check, then add the
    /// current angular speed to the angle accumulator.
    pub fn tick(&mut self, now: Instant) {
        if self.rotation != RotationState::Auto {
            let idle = Duration::from_millis(self.opts.idle_resume_ms);
            if now.duration_since(self.last_interaction) > idle {
                self.rotation = RotationState::Auto;
            }
        }
        self.angle += self.angular_speed();
    }

    /// Eye position for the current frame.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        Vec3::new(
            self.angle.cos() * self.distance,
            self.distance * self.opts.elevation_ratio,
            self.angle.sin() * self.distance,
        )
    }

    /// Fixed look-at point above the scene origin.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.focus
    }
}
