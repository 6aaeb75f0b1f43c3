use std::cmp::Ordering;

use super::config::SelectorConfig;
use crate::design::DesignSpec;

/// Ranks candidate designs by a weighted cost/efficiency score.
///
/// Ranking has its own simplified cost and efficiency estimates. They are
/// not the figures reported by [`super::cost::CostEstimator`] or
/// [`super::energy::EnergyScorer`], so the selected design is not
/// necessarily the best one by the reported numbers.
#[derive(Debug, Clone, Default)]
pub struct DesignSelector {
    config: SelectorConfig,
}

impl DesignSelector {
    pub fn new(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Ranking cost estimate in USD (flat base plus an area term).
    pub fn estimate_cost(&self, design: &DesignSpec) -> f64 {
        let c = &self.config;
        c.base_cost
            * c.material_multiplier.get(&design.material)
            * c.hvac_multiplier.get(&design.hvac)
            + design.floor_area_sqft * c.labor_cost_per_sqft
    }

    /// Ranking efficiency estimate in [0, 1], without insulation.
    pub fn estimate_efficiency(&self, design: &DesignSpec) -> f64 {
        let c = &self.config;
        (c.hvac_efficiency.get(&design.hvac) + c.material_efficiency.get(&design.material)) / 2.0
    }

    /// Weighted score; higher is better.
    pub fn score(&self, design: &DesignSpec) -> f64 {
        let c = &self.config;
        let cost_score = 1.0 / (1.0 + self.estimate_cost(design) / c.cost_baseline);
        c.efficiency_weight * self.estimate_efficiency(design) + c.cost_weight * cost_score
    }

    /// Returns the first design with the highest score, or `None` for an
    /// empty slice.
    pub fn find_optimal<'a>(&self, designs: &'a [DesignSpec]) -> Option<&'a DesignSpec> {
        let mut best: Option<(&DesignSpec, f64)> = None;
        for design in designs {
            let score = self.score(design);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                // NaN never beats an existing candidate
                Some((_, _)) if score.is_nan() => {}
                _ => best = Some((design, score)),
            }
        }
        best.map(|(design, _)| design)
    }

    /// Input indices with their scores, best first. Ties keep input order.
    pub fn rank(&self, designs: &[DesignSpec]) -> Vec<(usize, f64)> {
        let mut ranked: Vec<(usize, f64)> = designs
            .iter()
            .enumerate()
            .map(|(i, d)| (i, self.score(d)))
            .collect();
        // Stable sort, NaN scores sink to the end
        ranked.sort_by(|a, b| match (a.1.is_nan(), b.1.is_nan()) {
            (false, false) => b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal),
            (a_nan, b_nan) => a_nan.cmp(&b_nan),
        });
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::{Hvac, Insulation, Material};
    use crate::mathutils::almost_equal;

    fn reference_designs() -> Vec<DesignSpec> {
        vec![
            DesignSpec::default(),
            DesignSpec::new(
                700.0,
                Material::SteelFrame,
                Hvac::HighEfficiency,
                Insulation::HighEfficiency,
            ),
            DesignSpec::new(
                800.0,
                Material::Concrete,
                Hvac::HighEfficiency,
                Insulation::PassiveHouse,
            ),
            DesignSpec::new(
                750.0,
                Material::WoodFrame,
                Hvac::HighEfficiency,
                Insulation::HighEfficiency,
            ),
            DesignSpec::new(
                1000.0,
                Material::Concrete,
                Hvac::HighEfficiency,
                Insulation::HighEfficiency,
            ),
        ]
    }

    #[test]
    fn test_estimate_cost() {
        let s = DesignSelector::default();
        let basic = s.estimate_cost(&DesignSpec::default());
        assert!(almost_equal(basic, 80_000.0, 1e-9));
        let d = DesignSpec::default()
            .with_floor_area(800.0)
            .with_material(Material::Concrete)
            .with_hvac(Hvac::HighEfficiency);
        // 50000 * 1.5 * 1.1 + 800 * 50
        assert!(almost_equal(s.estimate_cost(&d), 122_500.0, 1e-6));
    }

    #[test]
    fn test_estimate_efficiency_ignores_insulation() {
        let s = DesignSelector::default();
        let d = DesignSpec::default();
        assert!(almost_equal(s.estimate_efficiency(&d), 0.725, 1e-12));
        let passive = d.with_insulation(Insulation::PassiveHouse);
        assert!(almost_equal(s.estimate_efficiency(&passive), 0.725, 1e-12));
    }

    #[test]
    fn test_score() {
        let s = DesignSelector::default();
        // 0.6 * 0.725 + 0.4 / 1.8
        let expected = 0.6 * 0.725 + 0.4 / 1.8;
        let score = s.score(&DesignSpec::default());
        assert!(almost_equal(score, expected, 1e-12));
    }

    #[test]
    fn test_find_optimal_empty() {
        let s = DesignSelector::default();
        assert!(s.find_optimal(&[]).is_none());
    }

    #[test]
    fn test_find_optimal_singleton() {
        let s = DesignSelector::default();
        let designs = vec![DesignSpec::new(
            5000.0,
            Material::Concrete,
            Hvac::Standard,
            Insulation::Standard,
        )];
        assert_eq!(s.find_optimal(&designs), Some(&designs[0]));
    }

    #[test]
    fn test_find_optimal_reference_designs() {
        let s = DesignSelector::default();
        let designs = reference_designs();
        // Steel frame with high-efficiency HVAC scores highest (~0.709)
        assert_eq!(s.find_optimal(&designs), Some(&designs[1]));
    }

    #[test]
    fn test_find_optimal_first_maximum_wins() {
        let s = DesignSelector::default();
        let a = DesignSpec::default().with_insulation(Insulation::Standard);
        let b = DesignSpec::default().with_insulation(Insulation::PassiveHouse);
        let designs = vec![a.clone(), b];
        let best = s.find_optimal(&designs).unwrap();
        assert!(std::ptr::eq(best, &designs[0]));
        assert_eq!(best, &a);
    }

    #[test]
    fn test_find_optimal_skips_nan() {
        let s = DesignSelector::default();
        let designs = vec![
            DesignSpec::default(),
            DesignSpec::default().with_floor_area(f64::NAN),
        ];
        assert!(std::ptr::eq(s.find_optimal(&designs).unwrap(), &designs[0]));
    }

    #[test]
    fn test_rank_agrees_with_find_optimal() {
        let s = DesignSelector::default();
        let designs = reference_designs();
        let ranked = s.rank(&designs);
        assert_eq!(ranked.len(), designs.len());
        assert_eq!(ranked[0].0, 1);
        assert_eq!(ranked[4].0, 0);
        assert!(ranked.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let s = DesignSelector::default();
        let designs = vec![DesignSpec::default(); 3];
        let order: Vec<usize> = s.rank(&designs).iter().map(|(i, _)| *i).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }
}
