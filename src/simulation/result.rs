//! Output structures for a stress-test run

use serde::{Deserialize, Serialize};

use super::scoring::RiskCategory;

/// Projected debt-to-GDP ratio for one calendar year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearProjection {
    pub year: i32,
    /// Percent, one decimal
    pub ratio: f64,
}

/// Row label in the year-1 baseline-vs-stress panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonMetric {
    #[serde(rename = "REVENUE")]
    Revenue,
    #[serde(rename = "EXPENSE")]
    Expense,
    #[serde(rename = "DEFICIT")]
    Deficit,
    #[serde(rename = "DEBT LOAD")]
    DebtLoad,
}

impl ComparisonMetric {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonMetric::Revenue => "REVENUE",
            ComparisonMetric::Expense => "EXPENSE",
            ComparisonMetric::Deficit => "DEFICIT",
            ComparisonMetric::DebtLoad => "DEBT LOAD",
        }
    }
}

/// One row of the baseline-vs-stress panel (USD billions, year 1)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub name: ComparisonMetric,
    pub baseline: f64,
    pub stress: f64,
}

/// Early-warning category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    Liquidity,
    Revenue,
}

/// Rule-based warning raised from the score and the revenue shock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarlyWarning {
    #[serde(rename = "type")]
    pub kind: WarningKind,
    pub title: String,
    pub description: String,
}

/// Illustrative expense-category row (pre-formatted strings)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseMetric {
    pub category: String,
    pub baseline: String,
    pub stress: String,
    pub delta: String,
}

/// Echo of the normalized policy parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    /// USD billions per active year, one decimal
    pub spending_commitment: f64,
    /// Percentage points of GDP, one decimal
    pub revenue_impact: f64,
    /// Months
    pub duration: u32,
    pub sectors: Vec<String>,
    pub metrics: Vec<ExpenseMetric>,
}

/// Complete stress-test result
///
/// Fully determined by the input. Monetary values are rounded to one decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Heuristic strain index in `0..=100`
    pub fiscal_strain_score: u8,

    pub risk_category: RiskCategory,

    /// Year-1 stressed deficit
    pub projected_deficit_absolute: f64,

    /// Percent change of the end-of-horizon deficit vs the starting deficit
    pub projected_deficit_increase: f64,

    /// Projection year in which reserves are expected to run out
    pub reserve_depletion_year: u32,

    /// One entry per horizon year, chronological
    pub debt_to_gdp_projection: Vec<YearProjection>,

    pub baseline_vs_stress: Vec<ComparisonRow>,

    /// Year-1 stressed deficit minus baseline deficit
    pub delta: f64,

    pub early_warnings: Vec<EarlyWarning>,

    pub breakdown: Breakdown,
}

impl SimulationResult {
    /// Look up a row of the baseline-vs-stress panel
    pub fn comparison(&self, metric: ComparisonMetric) -> Option<&ComparisonRow> {
        self.baseline_vs_stress.iter().find(|row| row.name == metric)
    }

    /// Debt-to-GDP ratio in the final projected year
    pub fn final_ratio(&self) -> Option<f64> {
        self.debt_to_gdp_projection.last().map(|p| p.ratio)
    }

    pub fn has_warning(&self, kind: WarningKind) -> bool {
        self.early_warnings.iter().any(|w| w.kind == kind)
    }
}
