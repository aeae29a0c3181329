//! The immutable apartment catalog: flat insertion-ordered storage with
//! id/floor/status lookup helpers.
//!
//! The catalog is loaded once at startup and never mutated — status
//! changes have no write path here. All lookups are O(n) over the unit
//! list, which is small enough that no index is kept.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::ViewerError;

/// Embedded default catalog (the building's unit list).
const BUILTIN_CATALOG: &str = include_str!("../assets/apartments.json");

/// Sale status of an apartment unit.
///
/// Serialized values outside the known set deserialize to
/// [`Status::Unknown`] rather than failing the whole catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Offered for sale.
    Available,
    /// Sale completed.
    Sold,
    /// Under reservation.
    Reserved,
    /// Unrecognized status value.
    #[serde(other)]
    Unknown,
}

impl Status {
    /// Human-readable display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Sold => "Sold",
            Self::Reserved => "Reserved",
            Self::Unknown => "Unknown",
        }
    }
}

/// One apartment unit record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Apartment {
    /// Unique unit identifier, e.g. `B4-A004`.
    pub id: String,
    /// Floor number the unit sits on (ground floor = 0).
    pub floor: u32,
    /// Asking price in whole currency units.
    pub price: u64,
    /// Usable area in square meters.
    pub area: f64,
    /// Room count.
    pub rooms: u32,
    /// Sale status.
    pub status: Status,
    /// World-space position of the unit's visual marker.
    pub position: Vec3,
}

/// The immutable apartment catalog.
///
/// Records are kept in insertion order; [`Catalog::by_floor`] makes no
/// sorting promise beyond that.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    apartments: Vec<Apartment>,
}

impl Catalog {
    /// Parse a catalog from a JSON array of apartment records.
    ///
    /// Fails if the JSON is malformed or two records share an id.
    pub fn from_json(json: &str) -> Result<Self, ViewerError> {
        let apartments: Vec<Apartment> = serde_json::from_str(json)
            .map_err(|e| ViewerError::CatalogParse(e.to_string()))?;

        for (i, apt) in apartments.iter().enumerate() {
            if apartments[..i].iter().any(|other| other.id == apt.id) {
                return Err(ViewerError::CatalogParse(format!(
                    "duplicate apartment id: {}",
                    apt.id
                )));
            }
        }

        Ok(Self { apartments })
    }

    /// The catalog embedded at compile time.
    pub fn builtin() -> Result<Self, ViewerError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// All records in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Apartment] {
        &self.apartments
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.apartments.len()
    }

    /// Whether the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.apartments.is_empty()
    }

    /// Look up a record by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Apartment> {
        self.apartments.iter().find(|apt| apt.id == id)
    }

    /// All records on the given floor, in insertion order.
    #[must_use]
    pub fn by_floor(&self, floor: u32) -> Vec<&Apartment> {
        self.apartments
            .iter()
            .filter(|apt| apt.floor == floor)
            .collect()
    }

    /// Highest floor present in the catalog, or `None` when empty.
    #[must_use]
    pub fn max_floor(&self) -> Option<u32> {
        self.apartments.iter().map(|apt| apt.floor).max()
    }

    /// All records with [`Status::Available`].
    #[must_use]
    pub fn available(&self) -> Vec<&Apartment> {
        self.apartments
            .iter()
            .filter(|apt| apt.status == Status::Available)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn builtin_catalog_loads() {
        let catalog = builtin();
        assert_eq!(catalog.len(), 9);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn get_by_id() {
        let catalog = builtin();
        let apt = catalog.get("B4-A005").unwrap();
        assert_eq!(apt.floor, 0);
        assert_eq!(apt.price, 483_717);
        assert_eq!(apt.status, Status::Sold);
        assert!(catalog.get("X-999").is_none());
    }

    #[test]
    fn by_floor_returns_only_that_floor() {
        let catalog = builtin();
        for floor in 0..=2 {
            let units = catalog.by_floor(floor);
            assert!(units.iter().all(|apt| apt.floor == floor));
            assert_eq!(units.len(), 3);
        }
        assert!(catalog.by_floor(7).is_empty());
    }

    #[test]
    fn floors_partition_the_catalog() {
        let catalog = builtin();
        let max = catalog.max_floor().unwrap();
        let mut seen: Vec<&str> = Vec::new();
        for floor in 0..=max {
            for apt in catalog.by_floor(floor) {
                assert!(
                    !seen.contains(&apt.id.as_str()),
                    "duplicate across floors: {}",
                    apt.id
                );
                seen.push(&apt.id);
            }
        }
        assert_eq!(seen.len(), catalog.len());
    }

    #[test]
    fn max_floor_matches_fixture() {
        assert_eq!(builtin().max_floor(), Some(2));
    }

    #[test]
    fn max_floor_empty_catalog() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert_eq!(catalog.max_floor(), None);
    }

    #[test]
    fn available_filters_by_status() {
        let catalog = builtin();
        let available = catalog.available();
        assert_eq!(available.len(), 7);
        assert!(available
            .iter()
            .all(|apt| apt.status == Status::Available));
    }

    #[test]
    fn unknown_status_maps_to_default() {
        let json = r#"[{
            "id": "B9-X001", "floor": 0, "price": 100000, "area": 30.0,
            "rooms": 1, "status": "pending",
            "position": [0.0, 0.0, 0.0]
        }]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.get("B9-X001").unwrap().status, Status::Unknown);
        assert_eq!(Status::Unknown.label(), "Unknown");
    }

    #[test]
    fn duplicate_id_rejected() {
        let json = r#"[
            {"id": "A", "floor": 0, "price": 1, "area": 1.0, "rooms": 1,
             "status": "available", "position": [0.0, 0.0, 0.0]},
            {"id": "A", "floor": 1, "price": 2, "area": 2.0, "rooms": 2,
             "status": "sold", "position": [1.0, 1.0, 1.0]}
        ]"#;
        assert!(Catalog::from_json(json).is_err());
    }
}
