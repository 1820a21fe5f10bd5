//! Fiscal projection engine: debt-to-GDP rollforward, strain scoring and early warnings

mod input;
mod state;
mod engine;
mod result;
mod scoring;
pub mod numeric;

pub use input::SimulationInput;
pub use state::FiscalState;
pub use engine::{
    simulate, FiscalAssumptions, ProjectionEngine,
    DEFAULT_ANCHOR_YEAR, DEFAULT_GDP_GROWTH_RATE, DEFAULT_INTEREST_RATE,
    DEFAULT_REVENUE_SHARE_OF_GDP, PROJECTION_YEARS,
};
pub use result::{
    Breakdown, ComparisonMetric, ComparisonRow, EarlyWarning, ExpenseMetric,
    SimulationResult, WarningKind, YearProjection,
};
pub use scoring::{
    early_warnings, reserve_depletion_year, strain_score, RiskCategory,
    HIGH_RISK_THRESHOLD, LIQUIDITY_WARNING_SCORE, LOW_RISK_THRESHOLD,
    REVENUE_WARNING_PCT,
};
