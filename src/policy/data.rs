//! Policy parameters as delivered by the extraction step, and the
//! macro baselines a simulation request carries

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::InvalidInputError;
use crate::simulation::SimulationInput;

/// Spending commitment used when extraction supplied none (USD billions)
pub const DEFAULT_SPENDING_COMMITMENT: f64 = 4.2;

/// Revenue impact used when extraction supplied none (percentage points)
pub const DEFAULT_REVENUE_IMPACT: f64 = -1.5;

/// Duration used when extraction supplied none (months)
pub const DEFAULT_DURATION_MONTHS: u32 = 60;

/// Sector list used when extraction supplied none
pub fn default_sectors() -> Vec<String> {
    vec!["Social Welfare".to_string()]
}

fn default_baseline_debt() -> f64 {
    24_500.0
}

fn default_baseline_gdp() -> f64 {
    18_200.0
}

fn default_current_deficit() -> f64 {
    5.4
}

/// Accept a month count written either as an integer or as an integral float (`60.0`)
fn deserialize_months<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Months {
        Whole(u32),
        Decimal(f64),
    }

    match Option::<Months>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Months::Whole(months)) => Ok(Some(months)),
        Some(Months::Decimal(months))
            if months.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&months) =>
        {
            Ok(Some(months as u32))
        }
        Some(Months::Decimal(months)) => Err(D::Error::custom(format!(
            "duration_months must be a whole number of months, got {}",
            months
        ))),
    }
}

/// Parameters extracted from a policy document
///
/// Every field may be missing; defaults are substituted by `resolve`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedParameters {
    /// USD billions per year
    #[serde(default)]
    pub spending_commitment: Option<f64>,

    /// Percentage points of GDP, negative for contraction
    #[serde(default)]
    pub revenue_impact: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_months")]
    pub duration_months: Option<u32>,

    #[serde(default)]
    pub primary_sectors: Option<Vec<String>>,
}

impl ExtractedParameters {
    /// What the extraction step reports when the document could not be read
    pub fn fallback() -> Self {
        Self {
            spending_commitment: Some(DEFAULT_SPENDING_COMMITMENT),
            revenue_impact: Some(DEFAULT_REVENUE_IMPACT),
            duration_months: Some(DEFAULT_DURATION_MONTHS),
            primary_sectors: Some(vec!["Social Welfare".to_string(), "Treasury".to_string()]),
        }
    }

    /// Substitute call-site defaults for missing fields
    pub fn resolve(&self) -> PolicyParameters {
        PolicyParameters {
            spending_commitment: self.spending_commitment.unwrap_or(DEFAULT_SPENDING_COMMITMENT),
            revenue_impact_pct: self.revenue_impact.unwrap_or(DEFAULT_REVENUE_IMPACT),
            duration_months: self.duration_months.unwrap_or(DEFAULT_DURATION_MONTHS),
            sectors: self.primary_sectors.clone().unwrap_or_else(default_sectors),
        }
    }
}

/// Fully specified policy parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyParameters {
    pub spending_commitment: f64,
    pub revenue_impact_pct: f64,
    pub duration_months: u32,
    pub sectors: Vec<String>,
}

impl Default for PolicyParameters {
    fn default() -> Self {
        ExtractedParameters::default().resolve()
    }
}

/// Macro-economic starting point (USD billions, deficit in percent of GDP)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroBaseline {
    pub baseline_debt: f64,
    pub baseline_gdp: f64,
    pub current_deficit_pct: f64,
}

impl Default for MacroBaseline {
    fn default() -> Self {
        Self {
            baseline_debt: default_baseline_debt(),
            baseline_gdp: default_baseline_gdp(),
            current_deficit_pct: default_current_deficit(),
        }
    }
}

/// Run-simulation request for a stored policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub policy_id: String,

    #[serde(default = "default_baseline_debt")]
    pub baseline_debt: f64,

    #[serde(default = "default_baseline_gdp")]
    pub baseline_gdp: f64,

    /// Percent of GDP
    #[serde(default = "default_current_deficit")]
    pub current_deficit: f64,
}

impl SimulationRequest {
    /// Request for a policy against the default baseline
    pub fn new(policy_id: impl Into<String>) -> Self {
        Self::with_baseline(policy_id, MacroBaseline::default())
    }

    pub fn with_baseline(policy_id: impl Into<String>, baseline: MacroBaseline) -> Self {
        Self {
            policy_id: policy_id.into(),
            baseline_debt: baseline.baseline_debt,
            baseline_gdp: baseline.baseline_gdp,
            current_deficit: baseline.current_deficit_pct,
        }
    }

    pub fn baseline(&self) -> MacroBaseline {
        MacroBaseline {
            baseline_debt: self.baseline_debt,
            baseline_gdp: self.baseline_gdp,
            current_deficit_pct: self.current_deficit,
        }
    }
}

/// Combine a baseline and resolved parameters into a validated input
pub fn build_input(
    baseline: &MacroBaseline,
    params: &PolicyParameters,
) -> Result<SimulationInput, InvalidInputError> {
    SimulationInput::new(
        baseline.baseline_debt,
        baseline.baseline_gdp,
        baseline.current_deficit_pct,
        params.spending_commitment,
        params.revenue_impact_pct,
        params.duration_months,
        params.sectors.clone(),
    )
}
