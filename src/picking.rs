//! Pick targets and the marker ↔ apartment id map.
//!
//! The render surface resolves a pointer position to a [`MarkerId`] via
//! its ray query; the [`PickMap`] translates that back to an apartment id
//! (and the other way around for external selection updates).

use rustc_hash::FxHashMap;

/// Opaque handle for one apartment marker in the render surface.
pub type MarkerId = u32;

/// What a pick ray hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickTarget {
    /// The ray missed every marker (background).
    #[default]
    None,
    /// The ray hit the marker with this id.
    Marker(MarkerId),
}

/// Bidirectional map between marker handles and apartment ids.
#[derive(Debug, Default)]
pub struct PickMap {
    by_marker: FxHashMap<MarkerId, String>,
    by_apartment: FxHashMap<String, MarkerId>,
}

impl PickMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a marker for an apartment id.
    pub fn insert(&mut self, marker: MarkerId, apartment_id: &str) {
        let _ = self.by_marker.insert(marker, apartment_id.to_owned());
        let _ = self.by_apartment.insert(apartment_id.to_owned(), marker);
    }

    /// Apartment id for a marker, if registered.
    #[must_use]
    pub fn apartment_for(&self, marker: MarkerId) -> Option<&str> {
        self.by_marker.get(&marker).map(String::as_str)
    }

    /// Marker for an apartment id, if registered.
    #[must_use]
    pub fn marker_for(&self, apartment_id: &str) -> Option<MarkerId> {
        self.by_apartment.get(apartment_id).copied()
    }

    /// Number of registered markers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_marker.len()
    }

    /// Whether no markers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_marker.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_both_directions() {
        let mut map = PickMap::new();
        map.insert(0, "B4-A004");
        map.insert(1, "B4-A003");

        assert_eq!(map.apartment_for(0), Some("B4-A004"));
        assert_eq!(map.marker_for("B4-A003"), Some(1));
        assert_eq!(map.apartment_for(9), None);
        assert_eq!(map.marker_for("X-999"), None);
        assert_eq!(map.len(), 2);
    }
}
