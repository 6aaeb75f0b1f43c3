//! ADU design inputs.
//!
//! Design enums are permissive: any unrecognized name maps to an `Unknown`
//! variant, which every coefficient table resolves to its fallback value.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Structural system of the ADU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Material {
    #[default]
    WoodFrame,
    SteelFrame,
    Concrete,
    /// Any material name not listed above.
    Unknown,
}

/// Heating, ventilation and air conditioning package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Hvac {
    #[default]
    Standard,
    HighEfficiency,
    Unknown,
}

/// Envelope insulation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Insulation {
    #[default]
    Standard,
    HighEfficiency,
    PassiveHouse,
    Unknown,
}

impl Material {
    pub const ALL: [Material; 3] = [
        Material::WoodFrame,
        Material::SteelFrame,
        Material::Concrete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Material::WoodFrame => "wood_frame",
            Material::SteelFrame => "steel_frame",
            Material::Concrete => "concrete",
            Material::Unknown => "unknown",
        }
    }
}

impl Hvac {
    pub const ALL: [Hvac; 2] = [Hvac::Standard, Hvac::HighEfficiency];

    pub fn as_str(&self) -> &'static str {
        match self {
            Hvac::Standard => "standard",
            Hvac::HighEfficiency => "high_efficiency",
            Hvac::Unknown => "unknown",
        }
    }
}

impl Insulation {
    pub const ALL: [Insulation; 3] = [
        Insulation::Standard,
        Insulation::HighEfficiency,
        Insulation::PassiveHouse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Insulation::Standard => "standard",
            Insulation::HighEfficiency => "high_efficiency",
            Insulation::PassiveHouse => "passive_house",
            Insulation::Unknown => "unknown",
        }
    }
}

impl From<&str> for Material {
    fn from(value: &str) -> Self {
        match value {
            "wood_frame" => Material::WoodFrame,
            "steel_frame" => Material::SteelFrame,
            "concrete" => Material::Concrete,
            _ => Material::Unknown,
        }
    }
}

impl From<&str> for Hvac {
    fn from(value: &str) -> Self {
        match value {
            "standard" => Hvac::Standard,
            "high_efficiency" => Hvac::HighEfficiency,
            _ => Hvac::Unknown,
        }
    }
}

impl From<&str> for Insulation {
    fn from(value: &str) -> Self {
        match value {
            "standard" => Insulation::Standard,
            "high_efficiency" => Insulation::HighEfficiency,
            "passive_house" => Insulation::PassiveHouse,
            _ => Insulation::Unknown,
        }
    }
}

// String conversions back the serde representation.
macro_rules! string_conversions {
    ($($t:ty),*) => {
        $(
            impl From<String> for $t {
                fn from(value: String) -> Self {
                    Self::from(value.as_str())
                }
            }

            impl From<$t> for String {
                fn from(value: $t) -> Self {
                    value.as_str().to_string()
                }
            }

            impl fmt::Display for $t {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

string_conversions!(Material, Hvac, Insulation);

/// One candidate ADU design.
///
/// Missing fields take the defaults of a basic 600 sq ft wood-frame unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSpec {
    /// Gross floor area in sq ft.
    #[serde(alias = "floor_area")]
    pub floor_area_sqft: f64,
    #[serde(alias = "materials")]
    pub material: Material,
    pub hvac: Hvac,
    pub insulation: Insulation,
}

impl DesignSpec {
    pub fn new(
        floor_area_sqft: f64,
        material: Material,
        hvac: Hvac,
        insulation: Insulation,
    ) -> Self {
        Self {
            floor_area_sqft,
            material,
            hvac,
            insulation,
        }
    }

    pub fn with_floor_area(mut self, floor_area_sqft: f64) -> Self {
        self.floor_area_sqft = floor_area_sqft;
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn with_hvac(mut self, hvac: Hvac) -> Self {
        self.hvac = hvac;
        self
    }

    pub fn with_insulation(mut self, insulation: Insulation) -> Self {
        self.insulation = insulation;
        self
    }
}

impl Default for DesignSpec {
    fn default() -> Self {
        Self::new(
            600.0,
            Material::default(),
            Hvac::default(),
            Insulation::default(),
        )
    }
}

impl fmt::Display for DesignSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} sq ft {} / {} HVAC / {} insulation",
            self.floor_area_sqft, self.material, self.hvac, self.insulation
        )
    }
}

/// Design summary including derived livable area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignDetails {
    pub design: DesignSpec,
    /// Livable area in sq ft, after structural overhead.
    pub livable_area_sqft: f64,
}
