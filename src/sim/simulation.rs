use super::config::SimulationConfig;
use super::cost::CostEstimator;
use super::energy::EnergyScorer;
use super::geometry::DesignGeometry;
use super::result::{ScoredDesign, SimulationResult};
use super::selector::DesignSelector;
use super::zoning::ZoningEvaluator;
use crate::design::{DesignDetails, DesignSpec};
use crate::error::{Result, SimulationError};
use crate::property::PropertyRecord;

/// Runs ADU feasibility simulations.
///
/// Steps, in order:
/// 1. reject properties without declared zoning compliance
/// 2. apply zoning rules (lot size, slope, flood zone)
/// 3. check design floor areas
/// 4. score every design (efficiency, daily energy, cost)
/// 5. pick the best design with the ranking model
#[derive(Debug, Clone, Default)]
pub struct SimulationEngine {
    zoning: ZoningEvaluator,
    geometry: DesignGeometry,
    energy: EnergyScorer,
    cost: CostEstimator,
    selector: DesignSelector,
}

impl SimulationEngine {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            zoning: ZoningEvaluator::new(config.zoning),
            geometry: DesignGeometry::new(config.geometry),
            energy: EnergyScorer::new(config.energy),
            cost: CostEstimator::new(config.cost),
            selector: DesignSelector::new(config.selector),
        }
    }

    pub fn zoning(&self) -> &ZoningEvaluator {
        &self.zoning
    }

    pub fn selector(&self) -> &DesignSelector {
        &self.selector
    }

    pub fn run_simulation(
        &self,
        property: &PropertyRecord,
        designs: &[DesignSpec],
    ) -> Result<SimulationResult> {
        tracing::info!(designs = designs.len(), "starting ADU simulation");

        if !property.zoning_compliant {
            tracing::warn!("property does not comply with zoning laws, simulation terminated");
            return Err(SimulationError::ZoningCompliance);
        }

        self.zoning.check(property).map_err(|violation| {
            tracing::warn!("ADU placement is not permitted due to zoning restrictions");
            SimulationError::ZoningConstraint(violation)
        })?;

        validate_designs(designs)?;

        let all_designs: Vec<ScoredDesign> = designs.iter().map(|d| self.score_design(d)).collect();

        let best_design = self.selector.find_optimal(designs).cloned();
        if let Some(best) = &best_design {
            tracing::info!(design = %best, "best design selected");
        }

        Ok(SimulationResult {
            best_design,
            all_designs,
            zoning_approved: true,
        })
    }

    /// Reported figures for a single design.
    pub fn score_design(&self, design: &DesignSpec) -> ScoredDesign {
        let scored = ScoredDesign {
            design: design.clone(),
            efficiency_score: self.energy.efficiency_score(design),
            daily_energy_kwh: self.energy.daily_energy_usage(design),
            total_cost_usd: self.cost.total_cost(design),
        };
        tracing::debug!(
            design = %design,
            efficiency = scored.efficiency_score,
            energy_kwh = scored.daily_energy_kwh,
            cost_usd = scored.total_cost_usd,
            "design scored"
        );
        scored
    }

    pub fn design_details(&self, design: &DesignSpec) -> DesignDetails {
        self.geometry.details(design)
    }
}

fn validate_designs(designs: &[DesignSpec]) -> Result<()> {
    for (index, design) in designs.iter().enumerate() {
        let area = design.floor_area_sqft;
        if !area.is_finite() || area < 0.0 {
            tracing::warn!(index, floor_area = area, "invalid design");
            return Err(SimulationError::InvalidDesign {
                index,
                floor_area_sqft: area,
            });
        }
    }
    Ok(())
}

/// Runs a simulation with the default configuration.
pub fn run_simulation(
    property: &PropertyRecord,
    designs: &[DesignSpec],
) -> Result<SimulationResult> {
    SimulationEngine::default().run_simulation(property, designs)
}
