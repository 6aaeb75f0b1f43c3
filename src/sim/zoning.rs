use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::ZoningRestrictions;
use crate::property::PropertyRecord;

/// First zoning rule a property fails.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum ZoningViolation {
    #[error("lot size {lot_size_sqft} sq ft is below the {minimum_sqft} sq ft minimum")]
    LotTooSmall {
        lot_size_sqft: f64,
        minimum_sqft: f64,
    },
    #[error("slope {slope_degrees}° exceeds the {max_degrees}° limit")]
    SlopeTooSteep {
        slope_degrees: f64,
        max_degrees: f64,
    },
    #[error("property is located in a restricted flood zone")]
    FloodZone,
}

/// Sunlight exposure band of a lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SunlightExposure {
    High,
    Medium,
    Low,
}

/// Checks whether an ADU may be placed on a property.
#[derive(Debug, Clone, Default)]
pub struct ZoningEvaluator {
    restrictions: ZoningRestrictions,
}

impl ZoningEvaluator {
    pub fn new(restrictions: ZoningRestrictions) -> Self {
        Self { restrictions }
    }

    pub fn restrictions(&self) -> &ZoningRestrictions {
        &self.restrictions
    }

    /// Returns the first violated rule, checking lot size, slope and
    /// flood zone in that order.
    pub fn check(&self, property: &PropertyRecord) -> Result<(), ZoningViolation> {
        let r = &self.restrictions;
        let violation = if property.lot_size_sqft < r.minimum_lot_size_sqft {
            ZoningViolation::LotTooSmall {
                lot_size_sqft: property.lot_size_sqft,
                minimum_sqft: r.minimum_lot_size_sqft,
            }
        } else if property.slope_degrees > r.max_slope_degrees {
            ZoningViolation::SlopeTooSteep {
                slope_degrees: property.slope_degrees,
                max_degrees: r.max_slope_degrees,
            }
        } else if r.flood_zone_restriction && !property.zoning_compliant {
            ZoningViolation::FloodZone
        } else {
            return Ok(());
        };

        tracing::warn!(%violation, "zoning restriction");
        Err(violation)
    }

    pub fn is_permitted(&self, property: &PropertyRecord) -> bool {
        self.check(property).is_ok()
    }

    /// Categorical sunlight estimate from tree cover.
    ///
    /// Location is not used yet; this is a stand-in for real geospatial data.
    pub fn sunlight_exposure(&self, property: &PropertyRecord) -> SunlightExposure {
        let cover = property.tree_cover_percent;
        if cover > self.restrictions.low_sunlight_tree_cover {
            SunlightExposure::Low
        } else if cover >= self.restrictions.medium_sunlight_tree_cover {
            SunlightExposure::Medium
        } else {
            SunlightExposure::High
        }
    }
}
