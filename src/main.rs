use adu_sim::{DesignSpec, Hvac, Insulation, Material, PropertyRecord, SimulationEngine};
use anyhow::{Context, Result};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let property = PropertyRecord::new(5000.0, 5.0, true);
    let designs = vec![
        DesignSpec::default(),
        DesignSpec::default()
            .with_floor_area(700.)
            .with_material(Material::SteelFrame)
            .with_hvac(Hvac::HighEfficiency)
            .with_insulation(Insulation::HighEfficiency),
        DesignSpec::default()
            .with_floor_area(800.)
            .with_material(Material::Concrete)
            .with_hvac(Hvac::HighEfficiency)
            .with_insulation(Insulation::PassiveHouse),
        DesignSpec::default()
            .with_floor_area(750.)
            .with_hvac(Hvac::HighEfficiency)
            .with_insulation(Insulation::HighEfficiency),
        DesignSpec::default()
            .with_floor_area(1000.)
            .with_material(Material::Concrete)
            .with_hvac(Hvac::HighEfficiency)
            .with_insulation(Insulation::HighEfficiency),
    ];

    let engine = SimulationEngine::default();
    tracing::info!(
        sunlight = ?engine.zoning().sunlight_exposure(&property),
        "site assessed"
    );

    let result = engine
        .run_simulation(&property, &designs)
        .context("ADU simulation failed")?;

    for (i, scored) in result.all_designs.iter().enumerate() {
        let details = engine.design_details(&scored.design);
        tracing::info!(
            design = i + 1,
            summary = %scored.design,
            livable_sqft = details.livable_area_sqft,
            efficiency = scored.efficiency_score,
            energy_kwh = scored.daily_energy_kwh,
            cost_usd = scored.total_cost_usd,
            energy_per_sqft = scored.energy_per_sqft(),
            cost_per_sqft = scored.cost_per_sqft(),
            "design result"
        );
    }

    for (rank, (i, score)) in engine.selector().rank(&designs).into_iter().enumerate() {
        tracing::debug!(rank = rank + 1, design = i + 1, score, "ranking");
    }

    if let Some(best) = &result.best_design {
        println!("Best design: {best}");
    }
    Ok(())
}
