use crate::view::grid::GridCell;
use crate::view::list::ListEntry;
use crate::view::ViewMode;

/// The trait seam to the host's panel UI (side list, header, floor grid).
///
/// The view controller computes complete view models and patch
/// instructions; implementations only have to mirror them into whatever
/// widget tree the platform provides. `restyle_*` calls update one
/// entry's selection styling in place without rebuilding the collection.
pub trait PanelSurface {
    /// Show either the 3D container or the 2D floor view.
    fn show_scene_view(&mut self, mode: ViewMode);

    /// Set the header title text.
    fn set_title(&mut self, title: &str);

    /// Show or hide the floor navigation controls.
    fn set_floor_controls_visible(&mut self, visible: bool);

    /// Set the floor indicator text between the navigation buttons.
    fn set_floor_label(&mut self, label: &str);

    /// Set the apartment-count line under the header.
    fn set_apartment_count(&mut self, label: &str);

    /// Replace the side list with these entries.
    fn render_list(&mut self, entries: &[ListEntry]);

    /// Replace the floor grid with these cells.
    fn render_grid(&mut self, cells: &[GridCell]);

    /// Toggle one list entry's selected styling in place.
    fn restyle_list_entry(&mut self, id: &str, selected: bool);

    /// Toggle one grid cell's selected styling in place.
    fn restyle_grid_cell(&mut self, id: &str, selected: bool);
}
