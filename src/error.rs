//! Error types for simulation runs.
use thiserror::Error;

use crate::sim::zoning::ZoningViolation;

/// Errors that terminate a simulation run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The property's declared zoning compliance flag is false.
    #[error("Property does not meet zoning requirements.")]
    ZoningCompliance,

    /// Lot size, slope or flood-zone rules reject the property.
    #[error("Zoning constraints prevent ADU placement.")]
    ZoningConstraint(#[source] ZoningViolation),

    /// A design has a negative or non-finite floor area.
    #[error("Design {index} has invalid floor area {floor_area_sqft}")]
    InvalidDesign { index: usize, floor_area_sqft: f64 },
}

pub type Result<T> = std::result::Result<T, SimulationError>;
