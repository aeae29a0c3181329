//! The JS rendering bridge.
//!
//! The host page constructs its three.js scene object and hands it to
//! [`start_viewer`](crate::web::start_viewer); this module declares that
//! object's shape and adapts it to [`RenderSurface`]. Pick results come
//! back as a marker index with `-1` for a miss, and load progress as a
//! small integer polled every frame.

use glam::Vec3;
use wasm_bindgen::prelude::*;

use crate::picking::{MarkerId, PickTarget};
use crate::scene::{LoadState, RenderSurface};

#[wasm_bindgen]
extern "C" {
    /// The host page's scene object. Expected methods (camelCase):
    /// `addMarker`, `setMarkerEmissive`, `setMarkerScale`, `pick`,
    /// `setCamera`, `setViewport`, `beginModelLoad`, `modelLoadState`,
    /// `present`.
    pub type SceneBridge;

    #[wasm_bindgen(method, js_name = addMarker)]
    fn js_add_marker(
        this: &SceneBridge,
        id: u32,
        x: f32,
        y: f32,
        z: f32,
        r: f32,
        g: f32,
        b: f32,
        opacity: f32,
    );

    #[wasm_bindgen(method, js_name = setMarkerEmissive)]
    fn js_set_marker_emissive(
        this: &SceneBridge,
        id: u32,
        r: f32,
        g: f32,
        b: f32,
    );

    #[wasm_bindgen(method, js_name = setMarkerScale)]
    fn js_set_marker_scale(this: &SceneBridge, id: u32, scale: f32);

    #[wasm_bindgen(method, js_name = pick)]
    fn js_pick(this: &SceneBridge, x: f32, y: f32) -> i32;

    #[wasm_bindgen(method, js_name = setCamera)]
    fn js_set_camera(
        this: &SceneBridge,
        eye_x: f32,
        eye_y: f32,
        eye_z: f32,
        target_x: f32,
        target_y: f32,
        target_z: f32,
    );

    #[wasm_bindgen(method, js_name = setViewport)]
    fn js_set_viewport(this: &SceneBridge, width: u32, height: u32);

    #[wasm_bindgen(method, js_name = beginModelLoad)]
    fn js_begin_model_load(this: &SceneBridge, path: &str);

    #[wasm_bindgen(method, js_name = modelLoadState)]
    fn js_model_load_state(this: &SceneBridge) -> u8;

    #[wasm_bindgen(method, js_name = present)]
    fn js_present(this: &SceneBridge);
}

impl RenderSurface for SceneBridge {
    fn add_marker(
        &mut self,
        id: MarkerId,
        position: Vec3,
        color: [f32; 3],
        opacity: f32,
    ) {
        self.js_add_marker(
            id, position.x, position.y, position.z, color[0], color[1],
            color[2], opacity,
        );
    }

    fn set_marker_emissive(&mut self, id: MarkerId, emissive: [f32; 3]) {
        self.js_set_marker_emissive(id, emissive[0], emissive[1], emissive[2]);
    }

    fn set_marker_scale(&mut self, id: MarkerId, scale: f32) {
        self.js_set_marker_scale(id, scale);
    }

    fn pick(&self, x: f32, y: f32) -> PickTarget {
        let hit = self.js_pick(x, y);
        u32::try_from(hit).map_or(PickTarget::None, PickTarget::Marker)
    }

    fn set_camera(&mut self, eye: Vec3, target: Vec3) {
        self.js_set_camera(eye.x, eye.y, eye.z, target.x, target.y, target.z);
    }

    fn set_viewport(&mut self, width: u32, height: u32) {
        self.js_set_viewport(width, height);
    }

    fn begin_model_load(&mut self, path: &str) {
        self.js_begin_model_load(path);
    }

    fn model_load_state(&self) -> LoadState {
        match self.js_model_load_state() {
            0 => LoadState::Idle,
            1 => LoadState::Loading,
            2 => LoadState::Loaded,
            _ => LoadState::Failed,
        }
    }

    fn present(&mut self) {
        self.js_present();
    }
}
