use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::design::{Hvac, Insulation, Material};

/// Lookup table of coefficients with a fallback for unlisted keys.
///
/// Lookups never fail: any key missing from `values` (including the
/// `Unknown` design variants) resolves to `fallback`. Entries are kept in
/// key order, so serialized tables are stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoefficientTable<K: Ord> {
    values: BTreeMap<K, f64>,
    fallback: f64,
}

impl<K: Ord> CoefficientTable<K> {
    pub fn new(entries: impl IntoIterator<Item = (K, f64)>, fallback: f64) -> Self {
        Self {
            values: entries.into_iter().collect(),
            fallback,
        }
    }

    /// Coefficient for `key`, or the fallback.
    pub fn get(&self, key: &K) -> f64 {
        self.values.get(key).copied().unwrap_or(self.fallback)
    }

    pub fn fallback(&self) -> f64 {
        self.fallback
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Livable share of floor area per material (walls, storage, etc.).
pub fn space_efficiency_table() -> CoefficientTable<Material> {
    CoefficientTable::new(
        [
            (Material::WoodFrame, 0.85),
            (Material::SteelFrame, 0.80),
            (Material::Concrete, 0.75),
        ],
        0.85,
    )
}

/// Material energy-efficiency ratings (higher is better).
pub fn material_efficiency_table() -> CoefficientTable<Material> {
    CoefficientTable::new(
        [
            (Material::WoodFrame, 0.75),
            (Material::SteelFrame, 0.80),
            (Material::Concrete, 0.85),
        ],
        0.75,
    )
}

/// HVAC efficiency ratings (higher is better).
pub fn hvac_efficiency_table() -> CoefficientTable<Hvac> {
    CoefficientTable::new([(Hvac::Standard, 0.70), (Hvac::HighEfficiency, 0.90)], 0.70)
}

/// Insulation multipliers (lower means less energy use).
pub fn insulation_multiplier_table() -> CoefficientTable<Insulation> {
    CoefficientTable::new(
        [
            (Insulation::Standard, 1.0),
            (Insulation::HighEfficiency, 0.85),
            (Insulation::PassiveHouse, 0.70),
        ],
        1.0,
    )
}

/// Construction cost multipliers per material.
pub fn material_cost_table() -> CoefficientTable<Material> {
    CoefficientTable::new(
        [
            (Material::WoodFrame, 1.0),
            (Material::SteelFrame, 1.2),
            (Material::Concrete, 1.5),
        ],
        1.0,
    )
}

/// HVAC system cost multipliers.
pub fn hvac_cost_table() -> CoefficientTable<Hvac> {
    CoefficientTable::new([(Hvac::Standard, 1.0), (Hvac::HighEfficiency, 1.1)], 1.0)
}

/// Configuration for livable-area derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    pub space_efficiency: CoefficientTable<Material>,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            space_efficiency: space_efficiency_table(),
        }
    }
}

/// Configuration for energy scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyConfig {
    /// Base energy consumption in kWh per sq ft per day.
    pub base_energy_per_sqft: f64,
    pub material_efficiency: CoefficientTable<Material>,
    pub hvac_efficiency: CoefficientTable<Hvac>,
    pub insulation_multiplier: CoefficientTable<Insulation>,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            base_energy_per_sqft: 0.05,
            material_efficiency: material_efficiency_table(),
            hvac_efficiency: hvac_efficiency_table(),
            insulation_multiplier: insulation_multiplier_table(),
        }
    }
}

/// Configuration for the reported construction cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostConfig {
    /// Base construction cost in USD per sq ft.
    pub base_cost_per_sqft: f64,
    /// Labor cost in USD per sq ft.
    pub labor_cost_per_sqft: f64,
    pub material_multiplier: CoefficientTable<Material>,
    pub hvac_multiplier: CoefficientTable<Hvac>,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            base_cost_per_sqft: 100.0,
            labor_cost_per_sqft: 50.0,
            material_multiplier: material_cost_table(),
            hvac_multiplier: hvac_cost_table(),
        }
    }
}

/// Configuration for design ranking.
///
/// Ranking has its own cost and efficiency models. They do not share
/// coefficients with [`CostConfig`] or [`EnergyConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Flat construction cost in USD before multipliers.
    pub base_cost: f64,
    /// Area-dependent cost in USD per sq ft.
    pub labor_cost_per_sqft: f64,
    /// Cost at which the cost score drops to 0.5.
    pub cost_baseline: f64,
    pub efficiency_weight: f64,
    pub cost_weight: f64,
    pub material_multiplier: CoefficientTable<Material>,
    pub hvac_multiplier: CoefficientTable<Hvac>,
    pub material_efficiency: CoefficientTable<Material>,
    pub hvac_efficiency: CoefficientTable<Hvac>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            base_cost: 50_000.0,
            labor_cost_per_sqft: 50.0,
            cost_baseline: 100_000.0,
            efficiency_weight: 0.6,
            cost_weight: 0.4,
            material_multiplier: material_cost_table(),
            hvac_multiplier: hvac_cost_table(),
            material_efficiency: material_efficiency_table(),
            hvac_efficiency: hvac_efficiency_table(),
        }
    }
}

/// Zoning rules applied to a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoningRestrictions {
    /// Minimum lot size in sq ft.
    pub minimum_lot_size_sqft: f64,
    /// Maximum terrain slope in degrees.
    pub max_slope_degrees: f64,
    /// Reject properties whose compliance flag is false (flood zones).
    pub flood_zone_restriction: bool,
    /// Tree cover (%) above which sunlight exposure is low.
    pub low_sunlight_tree_cover: f64,
    /// Tree cover (%) from which sunlight exposure is medium.
    pub medium_sunlight_tree_cover: f64,
}

impl Default for ZoningRestrictions {
    fn default() -> Self {
        Self {
            minimum_lot_size_sqft: 4000.0,
            max_slope_degrees: 15.0,
            flood_zone_restriction: true,
            low_sunlight_tree_cover: 50.0,
            medium_sunlight_tree_cover: 20.0,
        }
    }
}

/// Configuration of every simulation component.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub geometry: GeometryConfig,
    pub energy: EnergyConfig,
    pub cost: CostConfig,
    pub selector: SelectorConfig,
    pub zoning: ZoningRestrictions,
}
