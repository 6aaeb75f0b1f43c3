use super::config::GeometryConfig;
use crate::design::{DesignDetails, DesignSpec};
use crate::mathutils::round2;

/// Derives usable space from a design.
#[derive(Debug, Clone, Default)]
pub struct DesignGeometry {
    config: GeometryConfig,
}

impl DesignGeometry {
    pub fn new(config: GeometryConfig) -> Self {
        Self { config }
    }

    /// Livable area in sq ft after structural overhead, rounded to 2 decimals.
    pub fn livable_area(&self, design: &DesignSpec) -> f64 {
        let factor = self.config.space_efficiency.get(&design.material);
        round2(design.floor_area_sqft * factor)
    }

    pub fn details(&self, design: &DesignSpec) -> DesignDetails {
        DesignDetails {
            design: design.clone(),
            livable_area_sqft: self.livable_area(design),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::Material;

    #[test]
    fn test_livable_area_per_material() {
        let g = DesignGeometry::default();
        let d = DesignSpec::default();
        assert_eq!(g.livable_area(&d), 510.0);
        let steel = d.clone().with_material(Material::SteelFrame);
        assert_eq!(g.livable_area(&steel), 480.0);
        let concrete = d.with_floor_area(900.0).with_material(Material::Concrete);
        assert_eq!(g.livable_area(&concrete), 675.0);
    }

    #[test]
    fn test_unknown_material_uses_wood_frame_factor() {
        let g = DesignGeometry::default();
        let d = DesignSpec::default()
            .with_floor_area(750.0)
            .with_material(Material::Unknown);
        assert_eq!(g.livable_area(&d), 637.5);
    }

    #[test]
    fn test_details() {
        let g = DesignGeometry::default();
        let d = DesignSpec::default().with_floor_area(123.45);
        let details = g.details(&d);
        assert_eq!(details.design, d);
        // 123.45 * 0.85 = 104.9325
        assert_eq!(details.livable_area_sqft, 104.93);
    }
}
