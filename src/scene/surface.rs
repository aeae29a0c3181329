//! The trait seam to the host's 3D rendering engine.
//!
//! The core never constructs geometry or casts rays itself; everything
//! visual goes through a [`RenderSurface`]. The built-in [`NullSurface`]
//! is the degraded path for platforms without 3D support — every call is
//! accepted, every pick misses, and the model load reports failure.

use glam::Vec3;

use crate::picking::{MarkerId, PickTarget};

/// Progress of the single fire-and-forget building-model load.
///
/// A failed load is terminal — there is no retry path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No load has been started.
    #[default]
    Idle,
    /// The load request is in flight.
    Loading,
    /// The model is in the scene.
    Loaded,
    /// The load failed; the scene stays empty apart from the markers.
    Failed,
}

/// Host rendering engine surface.
///
/// Implementations own the scene graph, materials, ray casting, and asset
/// loading; the core only issues these calls and polls
/// [`model_load_state`](Self::model_load_state) from its frame tick.
pub trait RenderSurface {
    /// Add one apartment marker volume at a world position.
    fn add_marker(
        &mut self,
        id: MarkerId,
        position: Vec3,
        color: [f32; 3],
        opacity: f32,
    );

    /// Set a marker's emissive color (highlight on/off).
    fn set_marker_emissive(&mut self, id: MarkerId, emissive: [f32; 3]);

    /// Set a marker's uniform scale.
    fn set_marker_scale(&mut self, id: MarkerId, scale: f32);

    /// Cast a ray from the pointer position through the camera and return
    /// the first marker hit.
    fn pick(&self, x: f32, y: f32) -> PickTarget;

    /// Position the camera.
    fn set_camera(&mut self, eye: Vec3, target: Vec3);

    /// Resize the render viewport.
    fn set_viewport(&mut self, width: u32, height: u32);

    /// Start loading the building model by asset path. Fire-and-forget;
    /// progress is observed via [`model_load_state`](Self::model_load_state).
    fn begin_model_load(&mut self, path: &str);

    /// Current state of the model load.
    fn model_load_state(&self) -> LoadState;

    /// Present the current frame.
    fn present(&mut self);
}

/// A surface that renders nothing.
///
/// Used when the platform reports no 3D capability: the viewer keeps all
/// of its selection and camera behavior, picks always miss, and the
/// model load fails immediately (logged once by the scene controller).
#[derive(Debug, Default)]
pub struct NullSurface {
    load_state: LoadState,
}

impl NullSurface {
    /// Create an empty null surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSurface for NullSurface {
    fn add_marker(
        &mut self,
        _id: MarkerId,
        _position: Vec3,
        _color: [f32; 3],
        _opacity: f32,
    ) {
    }

    fn set_marker_emissive(&mut self, _id: MarkerId, _emissive: [f32; 3]) {}

    fn set_marker_scale(&mut self, _id: MarkerId, _scale: f32) {}

    fn pick(&self, _x: f32, _y: f32) -> PickTarget {
        PickTarget::None
    }

    fn set_camera(&mut self, _eye: Vec3, _target: Vec3) {}

    fn set_viewport(&mut self, _width: u32, _height: u32) {}

    fn begin_model_load(&mut self, _path: &str) {
        self.load_state = LoadState::Failed;
    }

    fn model_load_state(&self) -> LoadState {
        self.load_state
    }

    fn present(&mut self) {}
}
