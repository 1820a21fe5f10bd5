//! Fiscal Stress - deterministic stress testing of government fiscal policies
//!
//! This library provides:
//! - A five-year debt-to-GDP projection under a policy's spending and revenue shocks
//! - A heuristic fiscal strain score, risk category and early warnings
//! - Parameter defaults and loaders for extracted policy data
//! - Block runs across many policies
//! - Report packaging, recommendations and CSV export

pub mod error;
pub mod policy;
pub mod report;
pub mod scenario;
pub mod simulation;

// Re-export commonly used types
pub use error::{InvalidInputError, Result, StressError};
pub use policy::{ExtractedParameters, MacroBaseline, PolicyParameters, SimulationRequest};
pub use report::{Recommendation, StressReport};
pub use scenario::ScenarioRunner;
pub use simulation::{
    simulate, FiscalAssumptions, ProjectionEngine, RiskCategory, SimulationInput,
    SimulationResult, YearProjection,
};
