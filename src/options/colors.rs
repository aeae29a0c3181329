use serde::{Deserialize, Serialize};

use crate::catalog::Status;

/// Marker status colors and highlight parameters.
///
/// Colors are linear RGB triples in `[0, 1]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// Marker color for available units.
    pub available: [f32; 3],
    /// Marker color for sold units.
    pub sold: [f32; 3],
    /// Marker color for reserved units.
    pub reserved: [f32; 3],
    /// Marker color for units with an unrecognized status.
    pub unknown: [f32; 3],
    /// Emissive color applied to the selected marker.
    pub highlight_emissive: [f32; 3],
    /// Uniform scale applied to the selected marker.
    pub highlight_scale: f32,
    /// Marker opacity over the building model.
    pub marker_opacity: f32,
}

impl ColorOptions {
    /// Marker color for the given status.
    #[must_use]
    pub fn marker_color(&self, status: Status) -> [f32; 3] {
        match status {
            Status::Available => self.available,
            Status::Sold => self.sold,
            Status::Reserved => self.reserved,
            Status::Unknown => self.unknown,
        }
    }
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            available: [0.298, 0.686, 0.314],
            sold: [0.957, 0.263, 0.212],
            reserved: [1.0, 0.596, 0.0],
            unknown: [0.62, 0.62, 0.62],
            highlight_emissive: [0.4, 0.4, 0.4],
            highlight_scale: 1.1,
            marker_opacity: 0.8,
        }
    }
}
