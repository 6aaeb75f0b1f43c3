pub mod design;
pub mod error;
pub mod mathutils;
pub mod property;
pub mod sim;

// Prelude
pub use design::{DesignDetails, DesignSpec, Hvac, Insulation, Material};
pub use error::SimulationError;
pub use property::PropertyRecord;
pub use sim::config::SimulationConfig;
pub use sim::result::{ScoredDesign, SimulationResult};
pub use sim::simulation::{SimulationEngine, run_simulation};
pub use sim::zoning::{SunlightExposure, ZoningViolation};
