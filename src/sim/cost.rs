use super::config::CostConfig;
use crate::design::DesignSpec;
use crate::mathutils::round2;

/// Reported construction cost of a design.
#[derive(Debug, Clone, Default)]
pub struct CostEstimator {
    config: CostConfig,
}

impl CostEstimator {
    pub fn new(config: CostConfig) -> Self {
        Self { config }
    }

    /// Total construction cost in USD, rounded to 2 decimals.
    ///
    /// ```text
    /// base  = area * base_cost_per_sqft * material_mult
    /// labor = area * labor_cost_per_sqft
    /// hvac  = base * hvac_mult
    /// total = base + labor + hvac
    /// ```
    ///
    /// The HVAC term scales the material-adjusted base, so the two
    /// multipliers compound.
    pub fn total_cost(&self, design: &DesignSpec) -> f64 {
        let c = &self.config;
        let area = design.floor_area_sqft;
        let base = area * c.base_cost_per_sqft * c.material_multiplier.get(&design.material);
        let labor = area * c.labor_cost_per_sqft;
        let hvac = base * c.hvac_multiplier.get(&design.hvac);
        round2(base + labor + hvac)
    }
}
