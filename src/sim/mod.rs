//! Scoring and selection pipeline.
//!
//! Each component is a plain struct holding its coefficient tables. The
//! [`simulation::SimulationEngine`] wires them together.

pub mod config;
pub mod cost;
pub mod energy;
pub mod geometry;
pub mod result;
pub mod selector;
pub mod simulation;
pub mod zoning;
