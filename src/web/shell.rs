//! The browser entry point and frame loop.
//!
//! `startViewer(bridge, modelPath)` wires the DOM, builds the engine,
//! and starts a `requestAnimationFrame` loop that drains the command
//! queue, ticks the engine, and mirrors the error banner. A missing
//! scene bridge is the platform-unsupported path: the banner stays up
//! and the viewer never starts.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_time::Instant;

use super::{DomPanel, Pending, PendingQueue, SceneBridge};
use crate::catalog::Catalog;
use crate::engine::{ViewerCommand, ViewerEngine};
use crate::error::ViewerError;
use crate::input::{InputEvent, PointerButton};
use crate::options::Options;

/// Model asset requested when the host doesn't pass a path.
const DEFAULT_MODEL_PATH: &str = "models/building.glb";

/// Running viewer returned by [`start_viewer`]; keeps the frame loop
/// alive and tears it down on [`dispose`](ViewerHandle::dispose).
#[wasm_bindgen]
pub struct ViewerHandle {
    engine: Rc<RefCell<ViewerEngine>>,
    frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    raf_id: Rc<Cell<i32>>,
}

#[wasm_bindgen]
impl ViewerHandle {
    /// Stop the scene controller, cancel the pending animation frame,
    /// and drop the frame closure so nothing reschedules. Idempotent.
    pub fn dispose(&self) {
        self.engine.borrow_mut().stop();
        if let Some(win) = web_sys::window() {
            if win.cancel_animation_frame(self.raf_id.get()).is_err() {
                log::warn!("cancelAnimationFrame failed");
            }
        }
        drop(self.frame.borrow_mut().take());
        log::info!("viewer disposed");
    }
}

/// Start the apartment viewer against the host page.
///
/// `bridge` is the page's three.js scene adapter; passing `null` (no 3D
/// support) shows a sticky error banner and returns no handle.
/// `model_path` overrides the default building-model asset path. The
/// returned handle tears the viewer down on `dispose()`.
#[wasm_bindgen(js_name = startViewer)]
pub fn start_viewer(
    bridge: Option<SceneBridge>,
    model_path: Option<String>,
) -> Result<Option<ViewerHandle>, JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let banner = ErrorBanner::mount().map_err(into_js)?;

    let Some(bridge) = bridge else {
        log::error!("no scene bridge provided; aborting startup");
        banner.show_sticky("3D view is not available in this browser");
        return Ok(None);
    };

    let catalog = Catalog::builtin().map_err(into_js)?;
    let queue: PendingQueue = Rc::new(RefCell::new(VecDeque::new()));
    let panel = DomPanel::new(queue.clone()).map_err(into_js)?;

    let model_path =
        model_path.unwrap_or_else(|| DEFAULT_MODEL_PATH.to_owned());
    let engine = Rc::new(RefCell::new(ViewerEngine::new(
        Box::new(bridge),
        Box::new(panel),
        catalog,
        &Options::default(),
        &model_path,
        Instant::now(),
    )));

    wire_scene_input(&queue).map_err(into_js)?;
    wire_resize(&queue).map_err(into_js)?;
    wire_fault_listeners(&queue).map_err(into_js)?;
    let handle = run_frame_loop(engine, queue, banner).map_err(into_js)?;
    log::info!("viewer started");
    Ok(Some(handle))
}

fn into_js(err: ViewerError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn window() -> Result<web_sys::Window, ViewerError> {
    web_sys::window()
        .ok_or_else(|| ViewerError::Platform("no window".to_owned()))
}

fn button_from_mouse(evt: &web_sys::MouseEvent) -> PointerButton {
    match evt.button() {
        1 => PointerButton::Auxiliary,
        2 => PointerButton::Secondary,
        _ => PointerButton::Primary,
    }
}

/// Attach pointer and wheel listeners to the 3D container. Coordinates
/// are container-relative so picks line up with the render viewport.
fn wire_scene_input(queue: &PendingQueue) -> Result<(), ViewerError> {
    let document = window()?
        .document()
        .ok_or_else(|| ViewerError::Platform("no document".to_owned()))?;
    let container = document
        .get_element_by_id("threeContainer")
        .ok_or_else(|| {
            ViewerError::Shell("missing element #threeContainer".to_owned())
        })?;

    let listen = |event: &str, closure: &Closure<dyn FnMut(web_sys::Event)>| {
        container
            .add_event_listener_with_callback(
                event,
                closure.as_ref().unchecked_ref(),
            )
            .map_err(|_| {
                ViewerError::Shell(format!("failed to wire {event}"))
            })
    };

    let target = container.clone();
    let q = queue.clone();
    let on_move = Closure::<dyn FnMut(web_sys::Event)>::new(
        move |evt: web_sys::Event| {
            let Ok(evt) = evt.dyn_into::<web_sys::MouseEvent>() else {
                return;
            };
            let rect = target.get_bounding_client_rect();
            q.borrow_mut().push_back(Pending::Input(
                InputEvent::PointerMoved {
                    x: f64::from(evt.client_x()) as f32 - rect.left() as f32,
                    y: f64::from(evt.client_y()) as f32 - rect.top() as f32,
                },
            ));
        },
    );
    listen("mousemove", &on_move)?;
    on_move.forget();

    let q = queue.clone();
    let on_down = Closure::<dyn FnMut(web_sys::Event)>::new(
        move |evt: web_sys::Event| {
            let Ok(evt) = evt.dyn_into::<web_sys::MouseEvent>() else {
                return;
            };
            q.borrow_mut().push_back(Pending::Input(
                InputEvent::PointerButton {
                    button: button_from_mouse(&evt),
                    pressed: true,
                },
            ));
        },
    );
    listen("mousedown", &on_down)?;
    on_down.forget();

    let q = queue.clone();
    let on_up = Closure::<dyn FnMut(web_sys::Event)>::new(
        move |evt: web_sys::Event| {
            let Ok(evt) = evt.dyn_into::<web_sys::MouseEvent>() else {
                return;
            };
            q.borrow_mut().push_back(Pending::Input(
                InputEvent::PointerButton {
                    button: button_from_mouse(&evt),
                    pressed: false,
                },
            ));
        },
    );
    listen("mouseup", &on_up)?;
    on_up.forget();

    let q = queue.clone();
    let on_leave = Closure::<dyn FnMut(web_sys::Event)>::new(
        move |_evt: web_sys::Event| {
            q.borrow_mut().push_back(Pending::Input(InputEvent::PointerLeft));
        },
    );
    listen("mouseleave", &on_leave)?;
    on_leave.forget();

    let q = queue.clone();
    let on_wheel = Closure::<dyn FnMut(web_sys::Event)>::new(
        move |evt: web_sys::Event| {
            let Ok(evt) = evt.dyn_into::<web_sys::WheelEvent>() else {
                return;
            };
            evt.prevent_default();
            q.borrow_mut().push_back(Pending::Input(InputEvent::Wheel {
                delta: evt.delta_y() as f32,
            }));
        },
    );
    listen("wheel", &on_wheel)?;
    on_wheel.forget();

    Ok(())
}

/// Forward window resizes as commands; the engine debounces them.
fn wire_resize(queue: &PendingQueue) -> Result<(), ViewerError> {
    let win = window()?;
    let document = win
        .document()
        .ok_or_else(|| ViewerError::Platform("no document".to_owned()))?;
    let container = document
        .get_element_by_id("threeContainer")
        .ok_or_else(|| {
            ViewerError::Shell("missing element #threeContainer".to_owned())
        })?;

    let q = queue.clone();
    let on_resize = Closure::<dyn FnMut()>::new(move || {
        let width = u32::try_from(container.client_width()).unwrap_or(0);
        let height = u32::try_from(container.client_height()).unwrap_or(0);
        q.borrow_mut()
            .push_back(Pending::Command(ViewerCommand::Resize {
                width,
                height,
            }));
    });
    win.add_event_listener_with_callback(
        "resize",
        on_resize.as_ref().unchecked_ref(),
    )
    .map_err(|_| ViewerError::Shell("failed to wire resize".to_owned()))?;
    on_resize.forget();
    Ok(())
}

/// Surface uncaught page faults via the engine's transient banner.
fn wire_fault_listeners(queue: &PendingQueue) -> Result<(), ViewerError> {
    let win = window()?;

    let q = queue.clone();
    let on_error = Closure::<dyn FnMut(web_sys::Event)>::new(
        move |evt: web_sys::Event| {
            let message = evt.dyn_into::<web_sys::ErrorEvent>().map_or_else(
                |_| "uncaught error".to_owned(),
                |evt| evt.message(),
            );
            q.borrow_mut()
                .push_back(Pending::Command(ViewerCommand::Fault { message }));
        },
    );
    win.add_event_listener_with_callback(
        "error",
        on_error.as_ref().unchecked_ref(),
    )
    .map_err(|_| ViewerError::Shell("failed to wire error".to_owned()))?;
    on_error.forget();

    let q = queue.clone();
    let on_rejection = Closure::<dyn FnMut(web_sys::Event)>::new(
        move |evt: web_sys::Event| {
            let message = evt
                .dyn_into::<web_sys::PromiseRejectionEvent>()
                .ok()
                .and_then(|evt| evt.reason().as_string())
                .unwrap_or_else(|| "unhandled promise rejection".to_owned());
            q.borrow_mut()
                .push_back(Pending::Command(ViewerCommand::Fault { message }));
        },
    );
    win.add_event_listener_with_callback(
        "unhandledrejection",
        on_rejection.as_ref().unchecked_ref(),
    )
    .map_err(|_| {
        ViewerError::Shell("failed to wire unhandledrejection".to_owned())
    })?;
    on_rejection.forget();

    Ok(())
}

/// Start the self-rescheduling `requestAnimationFrame` loop and return
/// the teardown handle.
fn run_frame_loop(
    engine: Rc<RefCell<ViewerEngine>>,
    queue: PendingQueue,
    banner: ErrorBanner,
) -> Result<ViewerHandle, ViewerError> {
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
        Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(0));
    let reschedule = frame.clone();
    let pending_id = raf_id.clone();
    let eng_handle = engine.clone();

    *frame.borrow_mut() = Some(Closure::new(move || {
        let now = Instant::now();
        let batch: Vec<Pending> = queue.borrow_mut().drain(..).collect();
        let mut eng = engine.borrow_mut();
        for pending in batch {
            match pending {
                Pending::Input(event) => eng.handle_input(event, now),
                Pending::Command(cmd) => eng.execute(cmd, now),
            }
        }
        eng.tick(now);
        banner.sync(eng.banner_message());
        if let Some(cb) = reschedule.borrow().as_ref() {
            request_frame(cb, &pending_id);
        }
    }));

    if let Some(cb) = frame.borrow().as_ref() {
        request_frame(cb, &raf_id);
    }
    Ok(ViewerHandle {
        engine: eng_handle,
        frame,
        raf_id,
    })
}

fn request_frame(callback: &Closure<dyn FnMut()>, raf_id: &Cell<i32>) {
    let Some(win) = web_sys::window() else {
        return;
    };
    match win.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(id) => raf_id.set(id),
        Err(_) => {
            log::error!("requestAnimationFrame failed; frame loop stopped");
        }
    }
}

/// The fixed error banner element, created at startup and hidden until a
/// message arrives.
struct ErrorBanner {
    element: web_sys::HtmlElement,
}

impl ErrorBanner {
    /// Create the banner div and append it to the body.
    fn mount() -> Result<Self, ViewerError> {
        let document = window()?
            .document()
            .ok_or_else(|| ViewerError::Platform("no document".to_owned()))?;
        let body = document
            .body()
            .ok_or_else(|| ViewerError::Platform("no body".to_owned()))?;

        let element: web_sys::HtmlElement = document
            .create_element("div")
            .map_err(|_| {
                ViewerError::Shell("failed to create banner".to_owned())
            })?
            .dyn_into()
            .map_err(|_| {
                ViewerError::Shell("banner is not an HTML element".to_owned())
            })?;
        element.set_id("errorBanner");
        element.set_class_name("error-banner");
        if element.style().set_property("display", "none").is_err() {
            log::warn!("failed to hide error banner");
        }
        body.append_child(&element).map_err(|_| {
            ViewerError::Shell("failed to mount banner".to_owned())
        })?;
        Ok(Self { element })
    }

    /// Show a message that never auto-dismisses (fatal startup errors).
    fn show_sticky(&self, message: &str) {
        self.element.set_text_content(Some(message));
        if self.element.style().set_property("display", "block").is_err() {
            log::warn!("failed to show error banner");
        }
    }

    /// Mirror the engine's banner state into the DOM.
    fn sync(&self, message: Option<&str>) {
        match message {
            Some(text) => self.show_sticky(text),
            None => {
                self.element.set_text_content(None);
                if self
                    .element
                    .style()
                    .set_property("display", "none")
                    .is_err()
                {
                    log::warn!("failed to hide error banner");
                }
            }
        }
    }
}
