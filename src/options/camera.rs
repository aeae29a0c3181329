use serde::{Deserialize, Serialize};

/// Camera motion and interaction constants.
///
/// Rotation speeds are in radians per rendered frame — the orbit advances
/// by the current speed once per [`tick`](crate::camera::OrbitCamera::tick).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraOptions {
    /// Turntable speed while auto-rotating.
    pub auto_rotate_speed: f32,
    /// Constant speed applied while the user drags; the drag direction
    /// supplies the sign.
    pub drag_rotate_speed: f32,
    /// Linear distance change per unit of wheel delta.
    pub zoom_speed: f32,
    /// Orbit radius at startup.
    pub initial_distance: f32,
    /// Closest allowed orbit radius.
    pub min_distance: f32,
    /// Farthest allowed orbit radius.
    pub max_distance: f32,
    /// Eye height as a fraction of the orbit radius.
    pub elevation_ratio: f32,
    /// Height of the fixed look-at point above the scene origin.
    pub focus_height: f32,
    /// Idle time after the last interaction before auto-rotation resumes,
    /// in milliseconds.
    pub idle_resume_ms: u64,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            auto_rotate_speed: 0.00125,
            drag_rotate_speed: 0.01,
            zoom_speed: 0.01,
            initial_distance: 22.5,
            min_distance: 5.0,
            max_distance: 50.0,
            elevation_ratio: 0.6,
            focus_height: 5.0,
            idle_resume_ms: 3000,
        }
    }
}
