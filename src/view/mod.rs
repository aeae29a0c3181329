//! The view controller: the side list, header, and 2D floor grid.
//!
//! Mirrors the catalog and the current selection into the panel surface.
//! Full re-renders happen only on mode or floor changes; a selection
//! change patches the two affected entries in place and never rebuilds
//! the list or grid.

mod grid;
mod list;
mod panel;

pub use grid::GridCell;
pub use list::ListEntry;
pub use panel::PanelSurface;

use crate::catalog::{Apartment, Catalog};

/// Which scene view the panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// The 3D building scene.
    ThreeD,
    /// The 2D floor grid.
    TwoD,
}

/// Title shown over the 3D scene.
const TITLE_3D: &str = "3D Building View";

/// Drives the panel surface from catalog and selection state.
pub struct ViewController {
    panel: Box<dyn PanelSurface>,
    mode: ViewMode,
    current_floor: u32,
    selected: Option<String>,
}

impl ViewController {
    /// Controller starting in 3D mode on the ground floor, nothing
    /// selected. Call [`render_initial`](Self::render_initial) next.
    pub fn new(panel: Box<dyn PanelSurface>) -> Self {
        Self {
            panel,
            mode: ViewMode::ThreeD,
            current_floor: 0,
            selected: None,
        }
    }

    /// Current view mode.
    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Floor shown by the 2D grid.
    #[must_use]
    pub fn current_floor(&self) -> u32 {
        self.current_floor
    }

    /// Currently selected apartment id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// First full render: 3D view, header, and the complete list.
    pub fn render_initial(&mut self, catalog: &Catalog) {
        self.panel.show_scene_view(ViewMode::ThreeD);
        self.panel.set_title(TITLE_3D);
        self.panel.set_floor_controls_visible(false);
        self.render_list(catalog);
    }

    /// Switch between the 3D scene and the 2D floor grid. The list is
    /// re-rendered under the new mode's filter (all units in 3D, current
    /// floor only in 2D); selection is preserved across the switch.
    pub fn switch_view(&mut self, mode: ViewMode, catalog: &Catalog) {
        self.mode = mode;
        self.panel.show_scene_view(mode);
        match mode {
            ViewMode::ThreeD => {
                self.panel.set_title(TITLE_3D);
                self.panel.set_floor_controls_visible(false);
            }
            ViewMode::TwoD => {
                self.panel.set_floor_controls_visible(true);
                self.render_floor(catalog);
            }
        }
        self.render_list(catalog);
    }

    /// Step the 2D grid one floor up. No-op on the top floor or with an
    /// empty catalog.
    pub fn next_floor(&mut self, catalog: &Catalog) {
        let Some(max) = catalog.max_floor() else {
            return;
        };
        if self.current_floor >= max {
            return;
        }
        self.current_floor += 1;
        self.render_floor(catalog);
        self.render_list(catalog);
    }

    /// Step the 2D grid one floor down. No-op on the ground floor.
    pub fn previous_floor(&mut self, catalog: &Catalog) {
        if self.current_floor == 0 {
            return;
        }
        self.current_floor -= 1;
        self.render_floor(catalog);
        self.render_list(catalog);
    }

    /// Move the selection styling to `id`, patching only the affected
    /// entries. An id the catalog doesn't know clears the selection
    /// silently. The grid is only patched while the 2D view is showing.
    pub fn select(&mut self, id: &str, catalog: &Catalog) {
        if let Some(previous) = self.selected.take() {
            self.restyle(&previous, false);
        }
        if catalog.get(id).is_some() {
            self.restyle(id, true);
            self.selected = Some(id.to_owned());
        }
    }

    /// Search is accepted but intentionally does nothing yet.
    pub fn search(&mut self, query: &str) {
        log::debug!("search not implemented, ignoring query {query:?}");
    }

    fn restyle(&mut self, id: &str, selected: bool) {
        self.panel.restyle_list_entry(id, selected);
        if self.mode == ViewMode::TwoD {
            self.panel.restyle_grid_cell(id, selected);
        }
    }

    /// Units visible under the current mode's filter.
    fn visible_units<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Apartment> {
        match self.mode {
            ViewMode::ThreeD => catalog.all().iter().collect(),
            ViewMode::TwoD => catalog.by_floor(self.current_floor),
        }
    }

    fn render_list(&mut self, catalog: &Catalog) {
        let entries: Vec<ListEntry> = self
            .visible_units(catalog)
            .into_iter()
            .map(|apt| {
                ListEntry::from_apartment(
                    apt,
                    self.selected.as_deref() == Some(apt.id.as_str()),
                )
            })
            .collect();
        self.panel
            .set_apartment_count(&format!("{} apartments", entries.len()));
        self.panel.render_list(&entries);
    }

    fn render_floor(&mut self, catalog: &Catalog) {
        let label = format!("Floor {}", self.current_floor);
        self.panel.set_title(&label);
        self.panel.set_floor_label(&label);
        let cells: Vec<GridCell> = catalog
            .by_floor(self.current_floor)
            .into_iter()
            .map(|apt| {
                GridCell::from_apartment(
                    apt,
                    self.selected.as_deref() == Some(apt.id.as_str()),
                )
            })
            .collect();
        self.panel.render_grid(&cells);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// Every panel mutation, in call order.
    #[derive(Debug, Clone, PartialEq)]
    enum PanelCall {
        ShowScene(ViewMode),
        Title(String),
        FloorControls(bool),
        FloorLabel(String),
        Count(String),
        List(Vec<String>),
        Grid(Vec<String>),
        RestyleList(String, bool),
        RestyleGrid(String, bool),
    }

    #[derive(Clone, Default)]
    struct RecordingPanel(Rc<RefCell<Vec<PanelCall>>>);

    impl RecordingPanel {
        fn calls(&self) -> Vec<PanelCall> {
            self.0.borrow().clone()
        }

        fn clear(&self) {
            self.0.borrow_mut().clear();
        }
    }

    impl PanelSurface for RecordingPanel {
        fn show_scene_view(&mut self, mode: ViewMode) {
            self.0.borrow_mut().push(PanelCall::ShowScene(mode));
        }

        fn set_title(&mut self, title: &str) {
            self.0.borrow_mut().push(PanelCall::Title(title.to_owned()));
        }

        fn set_floor_controls_visible(&mut self, visible: bool) {
            self.0.borrow_mut().push(PanelCall::FloorControls(visible));
        }

        fn set_floor_label(&mut self, label: &str) {
            self.0
                .borrow_mut()
                .push(PanelCall::FloorLabel(label.to_owned()));
        }

        fn set_apartment_count(&mut self, label: &str) {
            self.0.borrow_mut().push(PanelCall::Count(label.to_owned()));
        }

        fn render_list(&mut self, entries: &[ListEntry]) {
            self.0.borrow_mut().push(PanelCall::List(
                entries.iter().map(|e| e.id.clone()).collect(),
            ));
        }

        fn render_grid(&mut self, cells: &[GridCell]) {
            self.0.borrow_mut().push(PanelCall::Grid(
                cells.iter().map(|c| c.id.clone()).collect(),
            ));
        }

        fn restyle_list_entry(&mut self, id: &str, selected: bool) {
            self.0
                .borrow_mut()
                .push(PanelCall::RestyleList(id.to_owned(), selected));
        }

        fn restyle_grid_cell(&mut self, id: &str, selected: bool) {
            self.0
                .borrow_mut()
                .push(PanelCall::RestyleGrid(id.to_owned(), selected));
        }
    }

    fn controller() -> (ViewController, RecordingPanel, Catalog) {
        let panel = RecordingPanel::default();
        let handle = panel.clone();
        let catalog = Catalog::builtin().unwrap();
        let mut view = ViewController::new(Box::new(panel));
        view.render_initial(&catalog);
        handle.clear();
        (view, handle, catalog)
    }

    #[test]
    fn initial_render_shows_3d_with_full_list() {
        let panel = RecordingPanel::default();
        let handle = panel.clone();
        let catalog = Catalog::builtin().unwrap();
        let mut view = ViewController::new(Box::new(panel));
        view.render_initial(&catalog);

        let calls = handle.calls();
        assert!(calls.contains(&PanelCall::ShowScene(ViewMode::ThreeD)));
        assert!(calls.contains(&PanelCall::Title(TITLE_3D.to_owned())));
        assert!(calls.contains(&PanelCall::FloorControls(false)));
        assert!(calls.contains(&PanelCall::Count("9 apartments".to_owned())));
        assert!(matches!(
            calls.last(),
            Some(PanelCall::List(ids)) if ids.len() == 9
        ));
    }

    #[test]
    fn selection_patches_without_rerendering() {
        let (mut view, panel, catalog) = controller();

        view.select("B4-A005", &catalog);
        view.select("B4-A004", &catalog);

        let calls = panel.calls();
        assert_eq!(
            calls,
            vec![
                PanelCall::RestyleList("B4-A005".to_owned(), true),
                PanelCall::RestyleList("B4-A005".to_owned(), false),
                PanelCall::RestyleList("B4-A004".to_owned(), true),
            ]
        );
        assert_eq!(view.selected(), Some("B4-A004"));
    }

    #[test]
    fn unknown_id_clears_selection_silently() {
        let (mut view, panel, catalog) = controller();

        view.select("B4-A005", &catalog);
        panel.clear();
        view.select("X-999", &catalog);

        assert_eq!(
            panel.calls(),
            vec![PanelCall::RestyleList("B4-A005".to_owned(), false)]
        );
        assert!(view.selected().is_none());
    }

    #[test]
    fn switching_to_2d_shows_current_floor_grid() {
        let (mut view, panel, catalog) = controller();

        view.switch_view(ViewMode::TwoD, &catalog);

        let calls = panel.calls();
        assert!(calls.contains(&PanelCall::ShowScene(ViewMode::TwoD)));
        assert!(calls.contains(&PanelCall::FloorControls(true)));
        assert!(calls.contains(&PanelCall::Title("Floor 0".to_owned())));
        // Only ground-floor apartments in the grid
        let grid = calls.iter().find_map(|c| match c {
            PanelCall::Grid(ids) => Some(ids.clone()),
            _ => None,
        });
        let grid = grid.expect("grid rendered");
        assert!(!grid.is_empty());
        assert!(grid
            .iter()
            .all(|id| catalog.get(id).unwrap().floor == 0));
    }

    #[test]
    fn list_follows_the_mode_filter() {
        let (mut view, panel, catalog) = controller();

        view.switch_view(ViewMode::TwoD, &catalog);
        let floor0: Vec<PanelCall> = panel
            .calls()
            .into_iter()
            .filter(|c| matches!(c, PanelCall::List(_)))
            .collect();
        assert_eq!(
            floor0,
            vec![PanelCall::List(vec![
                "B4-A004".to_owned(),
                "B4-A003".to_owned(),
                "B4-A005".to_owned(),
            ])]
        );
        assert!(panel
            .calls()
            .contains(&PanelCall::Count("3 apartments".to_owned())));

        panel.clear();
        view.next_floor(&catalog);
        assert!(panel.calls().iter().any(
            |c| matches!(c, PanelCall::List(ids) if ids.len() == 3
                && ids.iter().all(|id| catalog.get(id).unwrap().floor == 1))
        ));

        panel.clear();
        view.switch_view(ViewMode::ThreeD, &catalog);
        assert!(panel
            .calls()
            .iter()
            .any(|c| matches!(c, PanelCall::List(ids) if ids.len() == 9)));
    }

    #[test]
    fn selection_survives_view_switch() {
        let (mut view, _, catalog) = controller();

        view.select("B4-A004", &catalog);
        view.switch_view(ViewMode::TwoD, &catalog);
        assert_eq!(view.selected(), Some("B4-A004"));
        view.switch_view(ViewMode::ThreeD, &catalog);
        assert_eq!(view.selected(), Some("B4-A004"));
    }

    #[test]
    fn grid_is_patched_only_in_2d() {
        let (mut view, panel, catalog) = controller();

        view.select("B4-A004", &catalog);
        assert!(!panel
            .calls()
            .iter()
            .any(|c| matches!(c, PanelCall::RestyleGrid(..))));

        view.switch_view(ViewMode::TwoD, &catalog);
        panel.clear();
        view.select("B4-A005", &catalog);
        assert!(panel
            .calls()
            .iter()
            .any(|c| matches!(c, PanelCall::RestyleGrid(id, true) if id == "B4-A005")));
    }

    #[test]
    fn floor_navigation_clamps_at_both_ends() {
        let (mut view, panel, catalog) = controller();
        view.switch_view(ViewMode::TwoD, &catalog);
        panel.clear();

        view.previous_floor(&catalog);
        assert_eq!(view.current_floor(), 0);
        assert!(panel.calls().is_empty(), "bound hit must be a no-op");

        view.next_floor(&catalog);
        view.next_floor(&catalog);
        assert_eq!(view.current_floor(), 2);
        view.next_floor(&catalog);
        assert_eq!(view.current_floor(), 2);
    }

    #[test]
    fn floor_step_rerenders_grid_and_labels() {
        let (mut view, panel, catalog) = controller();
        view.switch_view(ViewMode::TwoD, &catalog);
        panel.clear();

        view.next_floor(&catalog);
        let calls = panel.calls();
        assert!(calls.contains(&PanelCall::Title("Floor 1".to_owned())));
        assert!(calls.contains(&PanelCall::FloorLabel("Floor 1".to_owned())));
        assert!(calls.iter().any(|c| matches!(c, PanelCall::Grid(_))));
    }

    #[test]
    fn empty_catalog_makes_floor_nav_a_no_op() {
        let panel = RecordingPanel::default();
        let catalog = Catalog::from_json("[]").unwrap();
        let mut view = ViewController::new(Box::new(panel));
        view.render_initial(&catalog);
        view.next_floor(&catalog);
        assert_eq!(view.current_floor(), 0);
    }

    #[test]
    fn search_changes_nothing() {
        let (mut view, panel, _) = controller();
        view.search("A004");
        assert!(panel.calls().is_empty());
    }
}
