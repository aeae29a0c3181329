use crate::catalog::{Apartment, Status};
use crate::util::{format_area, format_price};

/// CSS class fragment for a status, used by list entries and grid cells.
pub(crate) fn status_class(status: Status) -> &'static str {
    match status {
        Status::Available => "available",
        Status::Sold => "sold",
        Status::Reserved => "reserved",
        Status::Unknown => "unknown",
    }
}

/// One fully formatted row of the apartment side list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    /// Apartment id, doubles as the DOM element key.
    pub id: String,
    /// Price with thousands grouping and currency suffix.
    pub price_label: String,
    /// Floor area with unit suffix.
    pub area_label: String,
    /// Room count line.
    pub rooms_label: String,
    /// Floor line.
    pub floor_label: String,
    /// Availability text.
    pub status_label: String,
    /// Availability CSS class fragment.
    pub status_class: &'static str,
    /// Whether this entry carries the selected styling.
    pub selected: bool,
}

impl ListEntry {
    /// Build a row from a catalog record.
    #[must_use]
    pub fn from_apartment(apt: &Apartment, selected: bool) -> Self {
        Self {
            id: apt.id.clone(),
            price_label: format_price(apt.price),
            area_label: format_area(apt.area),
            rooms_label: format!("{} rooms", apt.rooms),
            floor_label: format!("Floor {}", apt.floor),
            status_label: apt.status.label().to_owned(),
            status_class: status_class(apt.status),
            selected,
        }
    }
}
