use crate::catalog::Apartment;
use crate::view::list::status_class;

/// One cell of the 2D floor grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    /// Apartment id, doubles as the DOM element key.
    pub id: String,
    /// Short unit label: the id with its building prefix stripped.
    pub label: String,
    /// Availability CSS class fragment.
    pub status_class: &'static str,
    /// Whether this cell carries the selected styling.
    pub selected: bool,
}

impl GridCell {
    /// Build a cell from a catalog record.
    #[must_use]
    pub fn from_apartment(apt: &Apartment, selected: bool) -> Self {
        let label = apt
            .id
            .split_once('-')
            .map_or(apt.id.as_str(), |(_, unit)| unit)
            .to_owned();
        Self {
            id: apt.id.clone(),
            label,
            status_class: status_class(apt.status),
            selected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn label_drops_building_prefix() {
        let catalog = Catalog::builtin().unwrap();
        let cell =
            GridCell::from_apartment(catalog.get("B4-A005").unwrap(), false);
        assert_eq!(cell.label, "A005");
        assert!(!cell.selected);
    }
}
