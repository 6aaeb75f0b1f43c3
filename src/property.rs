use serde::{Deserialize, Serialize};

/// Property on which an ADU is planned.
///
/// Missing fields default to values that pass every zoning rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyRecord {
    /// Lot size in sq ft.
    #[serde(alias = "size")]
    pub lot_size_sqft: f64,
    /// Terrain slope in degrees.
    #[serde(alias = "slope")]
    pub slope_degrees: f64,
    /// Declared zoning compliance (also used as the flood-zone flag).
    #[serde(alias = "zoning_compliance")]
    pub zoning_compliant: bool,
    /// Share of the lot shaded by trees, in percent.
    #[serde(alias = "tree_cover")]
    pub tree_cover_percent: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl PropertyRecord {
    pub fn new(lot_size_sqft: f64, slope_degrees: f64, zoning_compliant: bool) -> Self {
        Self {
            lot_size_sqft,
            slope_degrees,
            zoning_compliant,
            ..Self::default()
        }
    }

    pub fn with_tree_cover(mut self, tree_cover_percent: f64) -> Self {
        self.tree_cover_percent = tree_cover_percent;
        self
    }

    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }
}

impl Default for PropertyRecord {
    fn default() -> Self {
        Self {
            lot_size_sqft: 5000.0,
            slope_degrees: 5.0,
            zoning_compliant: true,
            tree_cover_percent: 20.0,
            latitude: 34.0,
            longitude: -84.0,
        }
    }
}
