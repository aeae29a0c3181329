//! DOM implementation of [`PanelSurface`].
//!
//! Binds once to the page's fixed element ids (`threeContainer`,
//! `floorView`, `apartmentList`, ...) at startup and fails fast if one
//! is missing. Control clicks never mutate the viewer directly; they
//! push commands into the shared queue for the next frame.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use super::{Pending, PendingQueue};
use crate::engine::ViewerCommand;
use crate::error::ViewerError;
use crate::view::{GridCell, ListEntry, PanelSurface, ViewMode};

/// Panel surface backed by the host page's DOM.
pub struct DomPanel {
    document: Document,
    three_container: HtmlElement,
    floor_view: HtmlElement,
    floor_controls: HtmlElement,
    view_3d_button: Element,
    view_2d_button: Element,
    list: Element,
    grid: Element,
    view_title: Element,
    floor_text: Element,
    apartment_count: Element,
    queue: PendingQueue,
}

impl DomPanel {
    /// Bind to the page and wire the panel controls.
    ///
    /// Fails with [`ViewerError::Platform`] if the window, document, or
    /// any expected element id is absent.
    pub fn new(queue: PendingQueue) -> Result<Self, ViewerError> {
        let document = web_sys::window()
            .ok_or_else(|| ViewerError::Platform("no window".to_owned()))?
            .document()
            .ok_or_else(|| ViewerError::Platform("no document".to_owned()))?;

        let panel = Self {
            three_container: require_html(&document, "threeContainer")?,
            floor_view: require_html(&document, "floorView")?,
            floor_controls: require_html(&document, "floorControls")?,
            view_3d_button: require(&document, "view3D")?,
            view_2d_button: require(&document, "view2D")?,
            list: require(&document, "apartmentList")?,
            grid: require(&document, "floorGrid")?,
            view_title: require(&document, "viewTitle")?,
            floor_text: require(&document, "floorText")?,
            apartment_count: require(&document, "apartmentCount")?,
            document,
            queue,
        };
        panel.wire_controls()?;
        Ok(panel)
    }

    /// Attach click/input listeners to the fixed panel controls.
    fn wire_controls(&self) -> Result<(), ViewerError> {
        self.on_click("view3D", ViewerCommand::SwitchView {
            mode: ViewMode::ThreeD,
        })?;
        self.on_click("view2D", ViewerCommand::SwitchView {
            mode: ViewMode::TwoD,
        })?;
        self.on_click("prevFloor", ViewerCommand::PreviousFloor)?;
        self.on_click("nextFloor", ViewerCommand::NextFloor)?;

        let search: HtmlInputElement = require(&self.document, "searchInput")?
            .dyn_into()
            .map_err(|_| {
                ViewerError::Shell(
                    "searchInput is not an input element".to_owned(),
                )
            })?;
        let queue = self.queue.clone();
        let field = search.clone();
        let on_input = Closure::<dyn FnMut()>::new(move || {
            queue
                .borrow_mut()
                .push_back(Pending::Command(ViewerCommand::Search {
                    query: field.value(),
                }));
        });
        search
            .add_event_listener_with_callback(
                "input",
                on_input.as_ref().unchecked_ref(),
            )
            .map_err(|_| {
                ViewerError::Shell("failed to wire searchInput".to_owned())
            })?;
        on_input.forget();
        Ok(())
    }

    fn on_click(
        &self,
        id: &str,
        cmd: ViewerCommand,
    ) -> Result<(), ViewerError> {
        let element = require(&self.document, id)?;
        let queue = self.queue.clone();
        let on_click = Closure::<dyn FnMut()>::new(move || {
            queue.borrow_mut().push_back(Pending::Command(cmd.clone()));
        });
        element
            .add_event_listener_with_callback(
                "click",
                on_click.as_ref().unchecked_ref(),
            )
            .map_err(|_| {
                ViewerError::Shell(format!("failed to wire #{id}"))
            })?;
        on_click.forget();
        Ok(())
    }

    /// Push a `Select` command when an entry or cell is clicked.
    fn wire_select(&self, element: &Element, id: &str) {
        let queue = self.queue.clone();
        let id = id.to_owned();
        let on_click = Closure::<dyn FnMut()>::new(move || {
            queue
                .borrow_mut()
                .push_back(Pending::Command(ViewerCommand::Select {
                    id: id.clone(),
                }));
        });
        if element
            .add_event_listener_with_callback(
                "click",
                on_click.as_ref().unchecked_ref(),
            )
            .is_err()
        {
            log::warn!("failed to wire selection listener");
        }
        on_click.forget();
    }

    fn set_display(element: &HtmlElement, value: &str) {
        if element.style().set_property("display", value).is_err() {
            log::warn!("failed to set display on panel element");
        }
    }

    fn set_toggle_active(button: &Element, active: bool) {
        let class = if active {
            "view-button active"
        } else {
            "view-button"
        };
        button.set_class_name(class);
    }
}

fn require(document: &Document, id: &str) -> Result<Element, ViewerError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ViewerError::Shell(format!("missing element #{id}")))
}

fn require_html(
    document: &Document,
    id: &str,
) -> Result<HtmlElement, ViewerError> {
    require(document, id)?.dyn_into().map_err(|_| {
        ViewerError::Shell(format!("#{id} is not an HTML element"))
    })
}

fn list_item_class(status_class: &str, selected: bool) -> String {
    let state = if selected { " selected" } else { "" };
    format!("apartment-item status-{status_class}{state}")
}

fn grid_cell_class(status_class: &str, selected: bool) -> String {
    let state = if selected { " selected" } else { "" };
    format!("floor-cell status-{status_class}{state}")
}

impl PanelSurface for DomPanel {
    fn show_scene_view(&mut self, mode: ViewMode) {
        match mode {
            ViewMode::ThreeD => {
                Self::set_display(&self.three_container, "block");
                Self::set_display(&self.floor_view, "none");
            }
            ViewMode::TwoD => {
                Self::set_display(&self.three_container, "none");
                Self::set_display(&self.floor_view, "flex");
            }
        }
        Self::set_toggle_active(
            &self.view_3d_button,
            mode == ViewMode::ThreeD,
        );
        Self::set_toggle_active(&self.view_2d_button, mode == ViewMode::TwoD);
    }

    fn set_title(&mut self, title: &str) {
        self.view_title.set_text_content(Some(title));
    }

    fn set_floor_controls_visible(&mut self, visible: bool) {
        let display = if visible { "flex" } else { "none" };
        Self::set_display(&self.floor_controls, display);
    }

    fn set_floor_label(&mut self, label: &str) {
        self.floor_text.set_text_content(Some(label));
    }

    fn set_apartment_count(&mut self, label: &str) {
        self.apartment_count.set_text_content(Some(label));
    }

    fn render_list(&mut self, entries: &[ListEntry]) {
        self.list.set_inner_html("");
        for entry in entries {
            let Ok(item) = self.document.create_element("div") else {
                continue;
            };
            item.set_id(&format!("apt-{}", entry.id));
            item.set_class_name(&list_item_class(
                entry.status_class,
                entry.selected,
            ));
            if item
                .set_attribute("data-status", entry.status_class)
                .is_err()
            {
                log::warn!("failed to tag list entry {}", entry.id);
            }
            item.set_inner_html(&format!(
                "<div class=\"apartment-id\">{}</div>\
                 <div class=\"apartment-price\">{}</div>\
                 <div class=\"apartment-meta\">\
                 <span>{}</span><span>{}</span><span>{}</span></div>\
                 <div class=\"apartment-status\">{}</div>",
                entry.id,
                entry.price_label,
                entry.area_label,
                entry.rooms_label,
                entry.floor_label,
                entry.status_label,
            ));
            self.wire_select(&item, &entry.id);
            let _ = self.list.append_child(&item);
        }
    }

    fn render_grid(&mut self, cells: &[GridCell]) {
        self.grid.set_inner_html("");
        for cell in cells {
            let Ok(item) = self.document.create_element("div") else {
                continue;
            };
            item.set_id(&format!("cell-{}", cell.id));
            item.set_class_name(&grid_cell_class(
                cell.status_class,
                cell.selected,
            ));
            if item
                .set_attribute("data-status", cell.status_class)
                .is_err()
            {
                log::warn!("failed to tag grid cell {}", cell.id);
            }
            item.set_text_content(Some(&cell.label));
            self.wire_select(&item, &cell.id);
            let _ = self.grid.append_child(&item);
        }
    }

    fn restyle_list_entry(&mut self, id: &str, selected: bool) {
        let Some(item) =
            self.document.get_element_by_id(&format!("apt-{id}"))
        else {
            return;
        };
        let status = item.get_attribute("data-status").unwrap_or_default();
        item.set_class_name(&list_item_class(&status, selected));
    }

    fn restyle_grid_cell(&mut self, id: &str, selected: bool) {
        let Some(item) =
            self.document.get_element_by_id(&format!("cell-{id}"))
        else {
            return;
        };
        let status = item.get_attribute("data-status").unwrap_or_default();
        item.set_class_name(&grid_cell_class(&status, selected));
    }
}
