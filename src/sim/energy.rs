use super::config::EnergyConfig;
use crate::design::DesignSpec;
use crate::mathutils::round2;

/// Energy performance of a design.
///
/// The efficiency score combines material, HVAC and insulation. Daily
/// usage depends on floor area and insulation only.
#[derive(Debug, Clone, Default)]
pub struct EnergyScorer {
    config: EnergyConfig,
}

impl EnergyScorer {
    pub fn new(config: EnergyConfig) -> Self {
        Self { config }
    }

    /// Efficiency score in [0, 1], rounded to 2 decimals.
    ///
    /// ```text
    /// score = (material_eff + hvac_eff) / 2 * insulation_multiplier
    /// ```
    pub fn efficiency_score(&self, design: &DesignSpec) -> f64 {
        let c = &self.config;
        let material = c.material_efficiency.get(&design.material);
        let hvac = c.hvac_efficiency.get(&design.hvac);
        let insulation = c.insulation_multiplier.get(&design.insulation);
        round2((material + hvac) / 2.0 * insulation)
    }

    /// Estimated daily energy usage in kWh, rounded to 2 decimals.
    pub fn daily_energy_usage(&self, design: &DesignSpec) -> f64 {
        let insulation = self.config.insulation_multiplier.get(&design.insulation);
        round2(self.config.base_energy_per_sqft * design.floor_area_sqft * insulation)
    }
}
