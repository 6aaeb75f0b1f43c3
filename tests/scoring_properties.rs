//! Property-based tests for the scoring components.

use adu_sim::sim::cost::CostEstimator;
use adu_sim::sim::energy::EnergyScorer;
use adu_sim::sim::selector::DesignSelector;
use adu_sim::{DesignSpec, Hvac, Insulation, Material, PropertyRecord, run_simulation};
use proptest::prelude::*;

fn material() -> impl Strategy<Value = Material> {
    prop_oneof![
        Just(Material::WoodFrame),
        Just(Material::SteelFrame),
        Just(Material::Concrete),
        Just(Material::Unknown),
    ]
}

fn hvac() -> impl Strategy<Value = Hvac> {
    prop_oneof![Just(Hvac::Standard), Just(Hvac::HighEfficiency), Just(Hvac::Unknown)]
}

fn insulation() -> impl Strategy<Value = Insulation> {
    prop_oneof![
        Just(Insulation::Standard),
        Just(Insulation::HighEfficiency),
        Just(Insulation::PassiveHouse),
        Just(Insulation::Unknown),
    ]
}

prop_compose! {
    fn design()(
        area in 0.0..5000.0f64,
        m in material(),
        h in hvac(),
        i in insulation(),
    ) -> DesignSpec {
        DesignSpec::new(area, m, h, i)
    }
}

proptest! {
    #[test]
    fn test_efficiency_score_in_unit_range(d in design()) {
        let s = EnergyScorer::default().efficiency_score(&d);
        prop_assert!((0.0..=1.0).contains(&s));
    }

    #[test]
    fn test_daily_energy_non_negative_and_independent_of_material_hvac(
        d in design(),
        m in material(),
        h in hvac(),
    ) {
        let e = EnergyScorer::default();
        let usage = e.daily_energy_usage(&d);
        prop_assert!(usage >= 0.0);
        prop_assert_eq!(e.daily_energy_usage(&d.clone().with_material(m).with_hvac(h)), usage);
    }

    #[test]
    fn test_total_cost_monotonic_in_floor_area(
        d in design(),
        extra in 0.0..2000.0f64,
    ) {
        let c = CostEstimator::default();
        let smaller = c.total_cost(&d);
        let larger = c.total_cost(&d.clone().with_floor_area(d.floor_area_sqft + extra));
        prop_assert!(smaller >= 0.0);
        prop_assert!(larger >= smaller);
    }

    #[test]
    fn test_singleton_is_always_optimal(d in design()) {
        let designs = vec![d];
        let best = DesignSelector::default().find_optimal(&designs);
        prop_assert_eq!(best, Some(&designs[0]));
    }

    #[test]
    fn test_optimal_has_maximal_score(designs in prop::collection::vec(design(), 1..12)) {
        let s = DesignSelector::default();
        let best = s.find_optimal(&designs).unwrap();
        let best_score = s.score(best);
        prop_assert!(designs.iter().all(|d| s.score(d) <= best_score));
        // First maximal element
        let first = designs.iter().position(|d| s.score(d) == best_score).unwrap();
        prop_assert!(std::ptr::eq(best, &designs[first]));
    }

    #[test]
    fn test_all_designs_match_input(designs in prop::collection::vec(design(), 0..12)) {
        let result = run_simulation(&PropertyRecord::default(), &designs).unwrap();
        prop_assert_eq!(result.all_designs.len(), designs.len());
        for (scored, input) in result.all_designs.iter().zip(&designs) {
            prop_assert_eq!(&scored.design, input);
        }
        prop_assert_eq!(result.best_design.is_none(), designs.is_empty());
    }
}
