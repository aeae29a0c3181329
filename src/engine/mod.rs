//! The viewer engine: owns the catalog, both controllers, and the
//! per-frame tick.
//!
//! Hosts feed it raw [`InputEvent`](crate::input::InputEvent)s and panel
//! [`ViewerCommand`]s, then call [`tick`](ViewerEngine::tick) once per
//! animation frame. Everything runs on one thread; there is no interior
//! locking anywhere.

mod banner;
mod command;

pub use banner::Banner;
pub use command::ViewerCommand;

use web_time::{Duration, Instant};

use crate::catalog::Catalog;
use crate::input::{InputEvent, InputProcessor};
use crate::options::Options;
use crate::scene::{ClickOutcome, RenderSurface, SceneController};
use crate::util::Debouncer;
use crate::view::{PanelSurface, ViewController};

/// Top-level state of the apartment viewer.
pub struct ViewerEngine {
    catalog: Catalog,
    scene: SceneController,
    view: ViewController,
    input: InputProcessor,
    resize_debounce: Debouncer,
    pending_resize: Option<(u32, u32)>,
    banner: Banner,
}

impl ViewerEngine {
    /// Assemble the viewer over the two platform surfaces and perform
    /// the initial panel render.
    pub fn new(
        render: Box<dyn RenderSurface>,
        panel: Box<dyn PanelSurface>,
        catalog: Catalog,
        options: &Options,
        model_path: &str,
        now: Instant,
    ) -> Self {
        let scene =
            SceneController::new(render, &catalog, options, model_path, now);
        let mut view = ViewController::new(panel);
        view.render_initial(&catalog);

        Self {
            catalog,
            scene,
            view,
            input: InputProcessor::new(),
            resize_debounce: Debouncer::new(Duration::from_millis(
                options.shell.resize_debounce_ms,
            )),
            pending_resize: None,
            banner: Banner::new(Duration::from_millis(
                options.shell.banner_ttl_ms,
            )),
        }
    }

    /// The loaded catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The 3D side of the viewer.
    #[must_use]
    pub fn scene(&self) -> &SceneController {
        &self.scene
    }

    /// The panel side of the viewer.
    #[must_use]
    pub fn view(&self) -> &ViewController {
        &self.view
    }

    /// Message the shell should currently display, if any.
    #[must_use]
    pub fn banner_message(&self) -> Option<&str> {
        self.banner.message()
    }

    /// Put an error in front of the user; it auto-dismisses after the
    /// configured banner lifetime.
    pub fn report_error(&mut self, message: &str, now: Instant) {
        log::error!("{message}");
        self.banner.show(message, now);
    }

    /// Resume the render loop.
    pub fn start(&mut self) {
        self.scene.start();
    }

    /// Stop the render loop.
    pub fn stop(&mut self) {
        self.scene.stop();
    }

    /// Translate a raw host event and execute the resulting command.
    pub fn handle_input(&mut self, event: InputEvent, now: Instant) {
        if let Some(cmd) = self.input.handle_event(event) {
            self.execute(cmd, now);
        }
    }

    /// Execute one viewer command.
    pub fn execute(&mut self, cmd: ViewerCommand, now: Instant) {
        match cmd {
            ViewerCommand::DragRotate { delta_x } => {
                self.scene.drag(delta_x, now);
            }
            ViewerCommand::Zoom { delta } => self.scene.zoom(delta),
            ViewerCommand::Click { x, y } => {
                if let ClickOutcome::Apartment(id) = self.scene.click(x, y, now)
                {
                    self.select(&id);
                }
            }
            ViewerCommand::Select { id } => self.select(&id),
            ViewerCommand::SwitchView { mode } => {
                self.view.switch_view(mode, &self.catalog);
            }
            ViewerCommand::NextFloor => self.view.next_floor(&self.catalog),
            ViewerCommand::PreviousFloor => {
                self.view.previous_floor(&self.catalog);
            }
            ViewerCommand::Search { query } => self.view.search(&query),
            ViewerCommand::Resize { width, height } => {
                self.pending_resize = Some((width, height));
                self.resize_debounce.schedule(now);
            }
            ViewerCommand::Fault { message } => {
                self.report_error(&message, now);
            }
        }
    }

    /// One frame: apply a matured resize, expire the banner, advance the
    /// scene.
    pub fn tick(&mut self, now: Instant) {
        if self.resize_debounce.fire(now) {
            if let Some((width, height)) = self.pending_resize.take() {
                log::debug!("viewport resized to {width}x{height}");
                self.scene.resize(width, height);
            }
        }
        self.banner.tick(now);
        self.scene.tick(now);
    }

    /// Apply a selection to both sides of the viewer.
    fn select(&mut self, id: &str) {
        if self.catalog.get(id).is_some() {
            log::info!("apartment {id} selected");
        } else {
            log::debug!("selection target {id} not in catalog, clearing");
        }
        self.scene.select(id);
        self.view.select(id, &self.catalog);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec3;

    use super::*;
    use crate::input::PointerButton;
    use crate::picking::{MarkerId, PickTarget};
    use crate::scene::LoadState;
    use crate::view::{GridCell, ListEntry, ViewMode};

    /// Surface whose picks always hit a fixed marker and which records
    /// the last viewport size.
    #[derive(Clone, Default)]
    struct FixedPickSurface {
        hit: Option<MarkerId>,
        viewport: Rc<RefCell<Option<(u32, u32)>>>,
    }

    impl RenderSurface for FixedPickSurface {
        fn add_marker(
            &mut self,
            _id: MarkerId,
            _position: Vec3,
            _color: [f32; 3],
            _opacity: f32,
        ) {
        }

        fn set_marker_emissive(&mut self, _id: MarkerId, _e: [f32; 3]) {}

        fn set_marker_scale(&mut self, _id: MarkerId, _scale: f32) {}

        fn pick(&self, _x: f32, _y: f32) -> PickTarget {
            self.hit.map_or(PickTarget::None, PickTarget::Marker)
        }

        fn set_camera(&mut self, _eye: Vec3, _target: Vec3) {}

        fn set_viewport(&mut self, width: u32, height: u32) {
            *self.viewport.borrow_mut() = Some((width, height));
        }

        fn begin_model_load(&mut self, _path: &str) {}

        fn model_load_state(&self) -> LoadState {
            LoadState::Idle
        }

        fn present(&mut self) {}
    }

    /// Panel that only remembers which ids are styled selected.
    #[derive(Clone, Default)]
    struct SelectionPanel {
        selected: Rc<RefCell<Vec<String>>>,
    }

    impl PanelSurface for SelectionPanel {
        fn show_scene_view(&mut self, _mode: ViewMode) {}

        fn set_title(&mut self, _title: &str) {}

        fn set_floor_controls_visible(&mut self, _visible: bool) {}

        fn set_floor_label(&mut self, _label: &str) {}

        fn set_apartment_count(&mut self, _label: &str) {}

        fn render_list(&mut self, _entries: &[ListEntry]) {}

        fn render_grid(&mut self, _cells: &[GridCell]) {}

        fn restyle_list_entry(&mut self, id: &str, selected: bool) {
            let mut styled = self.selected.borrow_mut();
            styled.retain(|s| s != id);
            if selected {
                styled.push(id.to_owned());
            }
        }

        fn restyle_grid_cell(&mut self, _id: &str, _selected: bool) {}
    }

    fn engine(
        surface: FixedPickSurface,
        now: Instant,
    ) -> (ViewerEngine, SelectionPanel) {
        let panel = SelectionPanel::default();
        let handle = panel.clone();
        let engine = ViewerEngine::new(
            Box::new(surface),
            Box::new(panel),
            Catalog::builtin().unwrap(),
            &Options::default(),
            "models/building.glb",
            now,
        );
        (engine, handle)
    }

    #[test]
    fn click_selects_in_both_controllers() {
        let now = Instant::now();
        let (mut eng, panel) = engine(
            FixedPickSurface {
                hit: Some(3),
                ..FixedPickSurface::default()
            },
            now,
        );

        eng.handle_input(
            InputEvent::PointerButton {
                button: PointerButton::Primary,
                pressed: true,
            },
            now,
        );
        eng.handle_input(
            InputEvent::PointerButton {
                button: PointerButton::Primary,
                pressed: false,
            },
            now,
        );

        let expected = eng.catalog().all()[3].id.clone();
        assert_eq!(eng.view().selected(), Some(expected.as_str()));
        assert_eq!(eng.scene().selected_marker(), Some(3));
        assert_eq!(*panel.selected.borrow(), vec![expected]);
    }

    #[test]
    fn background_click_selects_nothing() {
        let now = Instant::now();
        let (mut eng, panel) = engine(FixedPickSurface::default(), now);

        eng.execute(ViewerCommand::Click { x: 1.0, y: 1.0 }, now);
        assert!(eng.view().selected().is_none());
        assert!(panel.selected.borrow().is_empty());
        assert_eq!(eng.scene().camera().angular_speed(), 0.0);
    }

    #[test]
    fn resize_applies_only_after_debounce_window() {
        let start = Instant::now();
        let surface = FixedPickSurface::default();
        let viewport = surface.viewport.clone();
        let (mut eng, _) = engine(surface, start);

        eng.execute(
            ViewerCommand::Resize {
                width: 800,
                height: 600,
            },
            start,
        );
        eng.execute(
            ViewerCommand::Resize {
                width: 1024,
                height: 768,
            },
            start + Duration::from_millis(100),
        );

        eng.tick(start + Duration::from_millis(300));
        assert!(viewport.borrow().is_none(), "window restarted by 2nd event");

        eng.tick(start + Duration::from_millis(350));
        assert_eq!(*viewport.borrow(), Some((1024, 768)));
    }

    #[test]
    fn reported_errors_expire_from_the_banner() {
        let start = Instant::now();
        let (mut eng, _) = engine(FixedPickSurface::default(), start);

        eng.report_error("model missing", start);
        assert_eq!(eng.banner_message(), Some("model missing"));

        eng.tick(start + Duration::from_millis(5001));
        assert!(eng.banner_message().is_none());
    }

    #[test]
    fn fault_command_surfaces_in_the_banner() {
        let start = Instant::now();
        let (mut eng, _) = engine(FixedPickSurface::default(), start);

        eng.execute(
            ViewerCommand::Fault {
                message: "script error in host page".to_owned(),
            },
            start,
        );
        assert_eq!(eng.banner_message(), Some("script error in host page"));

        // The viewer stays responsive while the banner is up
        eng.execute(
            ViewerCommand::Select {
                id: "B4-A004".to_owned(),
            },
            start,
        );
        assert!(eng.scene().selected_marker().is_some());

        // Transient: gone after the banner lifetime
        eng.tick(start + Duration::from_millis(5001));
        assert!(eng.banner_message().is_none());
    }

    #[test]
    fn select_command_reaches_the_scene() {
        let now = Instant::now();
        let (mut eng, _) = engine(FixedPickSurface::default(), now);

        eng.execute(
            ViewerCommand::Select {
                id: "B4-A004".to_owned(),
            },
            now,
        );
        assert!(eng.scene().selected_marker().is_some());

        eng.execute(
            ViewerCommand::Select {
                id: "X-999".to_owned(),
            },
            now,
        );
        assert!(eng.scene().selected_marker().is_none());
        assert!(eng.view().selected().is_none());
    }
}
