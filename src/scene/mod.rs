//! The scene controller: apartment markers over the building model, the
//! orbit camera, and click-to-select resolution.
//!
//! One marker per catalog record, placed at the record's position plus a
//! fixed vertical offset. At most one marker is highlighted at a time;
//! selecting a new id first restores the previous marker's base state, so
//! highlight state can never leak.

mod surface;

use glam::Vec3;
pub use surface::{LoadState, NullSurface, RenderSurface};
use web_time::Instant;

use crate::camera::OrbitCamera;
use crate::catalog::Catalog;
use crate::options::Options;
use crate::picking::{MarkerId, PickMap, PickTarget};

/// Vertical offset lifting markers above their floor slab.
const MARKER_Y_OFFSET: f32 = 1.25;

/// Outcome of resolving a pointer click against the scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click hit the marker for this apartment.
    Apartment(String),
    /// The click hit nothing; the orbit has been halted.
    Background,
}

/// Owns the 3D side of the viewer: markers, camera, selection highlight,
/// and the render-loop lifecycle.
pub struct SceneController {
    surface: Box<dyn RenderSurface>,
    camera: OrbitCamera,
    pick_map: PickMap,
    selected: Option<MarkerId>,
    highlight_emissive: [f32; 3],
    highlight_scale: f32,
    last_load_state: LoadState,
    running: bool,
}

impl SceneController {
    /// Build the scene over the given surface: one marker per catalog
    /// record, then kick off the single model-load request.
    ///
    /// The render loop starts running; the host drives it by calling
    /// [`tick`](Self::tick) once per frame.
    pub fn new(
        mut surface: Box<dyn RenderSurface>,
        catalog: &Catalog,
        options: &Options,
        model_path: &str,
        now: Instant,
    ) -> Self {
        let mut pick_map = PickMap::new();
        for (index, apt) in catalog.all().iter().enumerate() {
            let marker = index as MarkerId;
            let position =
                apt.position + Vec3::new(0.0, MARKER_Y_OFFSET, 0.0);
            surface.add_marker(
                marker,
                position,
                options.colors.marker_color(apt.status),
                options.colors.marker_opacity,
            );
            pick_map.insert(marker, &apt.id);
        }

        surface.begin_model_load(model_path);
        log::debug!(
            "scene ready: {} markers, loading {model_path}",
            pick_map.len()
        );

        Self {
            surface,
            camera: OrbitCamera::new(options.camera.clone(), now),
            pick_map,
            selected: None,
            highlight_emissive: options.colors.highlight_emissive,
            highlight_scale: options.colors.highlight_scale,
            last_load_state: LoadState::Idle,
            running: true,
        }
    }

    /// Read-only access to the orbit camera.
    #[must_use]
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// Marker currently highlighted, if any.
    #[must_use]
    pub fn selected_marker(&self) -> Option<MarkerId> {
        self.selected
    }

    /// Whether the render loop is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Resume the render loop. Idempotent.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop the render loop; subsequent ticks are no-ops. Idempotent.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Forward a horizontal drag to the camera.
    pub fn drag(&mut self, delta_x: f32, now: Instant) {
        self.camera.drag(delta_x, now);
    }

    /// Forward a wheel delta to the camera.
    pub fn zoom(&mut self, delta: f32) {
        self.camera.zoom(delta);
    }

    /// Resize the render viewport.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.set_viewport(width, height);
    }

    /// Resolve a pointer click. A marker hit yields the apartment id; a
    /// miss halts the orbit (the background-click transition) and is not
    /// a selection event.
    pub fn click(&mut self, x: f32, y: f32, now: Instant) -> ClickOutcome {
        match self.surface.pick(x, y) {
            PickTarget::Marker(marker) => {
                if let Some(id) = self.pick_map.apartment_for(marker) {
                    return ClickOutcome::Apartment(id.to_owned());
                }
                log::warn!("pick hit unregistered marker {marker}");
                self.camera.halt(now);
                ClickOutcome::Background
            }
            PickTarget::None => {
                self.camera.halt(now);
                ClickOutcome::Background
            }
        }
    }

    /// Reflect a selection in the scene.
    ///
    /// The previously highlighted marker (if any) is restored to its base
    /// state first, then the new marker gets the highlight emissive and
    /// uniform scale-up. An id with no matching marker clears the
    /// highlight without error.
    pub fn select(&mut self, id: &str) {
        if let Some(previous) = self.selected.take() {
            self.surface.set_marker_emissive(previous, [0.0; 3]);
            self.surface.set_marker_scale(previous, 1.0);
        }

        if let Some(marker) = self.pick_map.marker_for(id) {
            self.surface
                .set_marker_emissive(marker, self.highlight_emissive);
            self.surface.set_marker_scale(marker, self.highlight_scale);
            self.selected = Some(marker);
        }
    }

    /// One render frame: poll the model load, advance the orbit, push the
    /// camera to the surface, and present. No-op while stopped.
    pub fn tick(&mut self, now: Instant) {
        if !self.running {
            return;
        }

        self.poll_model_load();
        self.camera.tick(now);
        self.surface
            .set_camera(self.camera.eye(), self.camera.target());
        self.surface.present();
    }

    /// Log model-load transitions once. A failure is terminal: the scene
    /// continues with the ground plane and markers only.
    fn poll_model_load(&mut self) {
        let state = self.surface.model_load_state();
        if state == self.last_load_state {
            return;
        }
        match state {
            LoadState::Loaded => log::info!("building model loaded"),
            LoadState::Failed => {
                log::error!(
                    "building model failed to load; continuing with empty scene"
                );
            }
            LoadState::Idle | LoadState::Loading => {}
        }
        self.last_load_state = state;
    }
}
