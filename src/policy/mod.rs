//! Policy parameters, macro baselines and their loaders

mod data;
pub mod loader;

pub use data::{
    build_input, default_sectors, ExtractedParameters, MacroBaseline, PolicyParameters,
    SimulationRequest, DEFAULT_DURATION_MONTHS, DEFAULT_REVENUE_IMPACT,
    DEFAULT_SPENDING_COMMITMENT,
};
pub use loader::{
    load_extracted, load_policy_block, load_policy_block_from_reader, parse_extracted,
    PolicyRecord,
};
