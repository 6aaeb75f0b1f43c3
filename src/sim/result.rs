use serde::{Deserialize, Serialize};

use crate::design::DesignSpec;
use crate::mathutils::{round_to, safe_ratio};

/// Reported figures for one design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDesign {
    pub design: DesignSpec,
    /// Energy efficiency score in [0, 1].
    pub efficiency_score: f64,
    /// Daily energy usage in kWh.
    pub daily_energy_kwh: f64,
    /// Total construction cost in USD.
    pub total_cost_usd: f64,
}

impl ScoredDesign {
    /// Daily energy usage per sq ft (kWh), rounded to 4 decimals.
    pub fn energy_per_sqft(&self) -> f64 {
        let ratio = safe_ratio(self.daily_energy_kwh, self.design.floor_area_sqft);
        round_to(ratio, 4)
    }

    /// Construction cost per sq ft (USD), rounded to 2 decimals.
    pub fn cost_per_sqft(&self) -> f64 {
        let ratio = safe_ratio(self.total_cost_usd, self.design.floor_area_sqft);
        round_to(ratio, 2)
    }
}

/// Outcome of a simulation run.
///
/// `best_design` comes from the ranking model and may disagree with the
/// per-design figures in `all_designs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// `None` only when no designs were given.
    pub best_design: Option<DesignSpec>,
    /// One entry per input design, in input order.
    pub all_designs: Vec<ScoredDesign>,
    pub zoning_approved: bool,
}

impl SimulationResult {
    /// Scored entry of the selected design, if any.
    pub fn best_scored(&self) -> Option<&ScoredDesign> {
        let best = self.best_design.as_ref()?;
        self.all_designs.iter().find(|s| &s.design == best)
    }
}
