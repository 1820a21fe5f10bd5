//! Simulation input record

use serde::{Deserialize, Serialize};

use crate::error::InvalidInputError;

/// Macro baselines plus policy parameters for one stress test
///
/// Monetary amounts are USD billions; percentages are percent of GDP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationInput {
    /// Outstanding government debt at the start of the horizon
    pub baseline_debt: f64,

    /// Nominal GDP at the start of the horizon
    pub baseline_gdp: f64,

    /// Current deficit as percent of GDP (negative = surplus)
    pub current_deficit_pct: f64,

    /// Added spending per active year
    pub spending_commitment: f64,

    /// Revenue change in percentage points of GDP (negative = revenue loss)
    pub revenue_impact_pct: f64,

    /// Months the policy remains active
    pub duration_months: u32,

    /// Affected sectors, passed through for reporting only
    pub sectors: Vec<String>,
}

impl SimulationInput {
    /// Build a validated input
    pub fn new(
        baseline_debt: f64,
        baseline_gdp: f64,
        current_deficit_pct: f64,
        spending_commitment: f64,
        revenue_impact_pct: f64,
        duration_months: u32,
        sectors: Vec<String>,
    ) -> Result<Self, InvalidInputError> {
        let input = Self {
            baseline_debt,
            baseline_gdp,
            current_deficit_pct,
            spending_commitment,
            revenue_impact_pct,
            duration_months,
            sectors,
        };
        input.validate()?;
        Ok(input)
    }

    /// Check the domain constraints on every numeric field
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        let numeric = [
            ("baseline_debt", self.baseline_debt),
            ("baseline_gdp", self.baseline_gdp),
            ("current_deficit_pct", self.current_deficit_pct),
            ("spending_commitment", self.spending_commitment),
            ("revenue_impact_pct", self.revenue_impact_pct),
        ];
        for (field, value) in numeric {
            if !value.is_finite() {
                return Err(InvalidInputError::NonFinite { field, value });
            }
        }

        if self.baseline_gdp <= 0.0 {
            return Err(InvalidInputError::NonPositiveGdp(self.baseline_gdp));
        }
        if self.baseline_debt <= 0.0 {
            return Err(InvalidInputError::NonPositiveDebt(self.baseline_debt));
        }
        if self.duration_months == 0 {
            return Err(InvalidInputError::ZeroDuration);
        }
        if self.spending_commitment < 0.0 {
            return Err(InvalidInputError::NegativeSpending(self.spending_commitment));
        }

        Ok(())
    }

    /// Starting deficit in USD billions, seeded from baseline GDP
    pub fn start_deficit(&self) -> f64 {
        self.baseline_gdp * (self.current_deficit_pct / 100.0)
    }

    /// Absolute revenue shock in USD billions, computed once from baseline GDP
    pub fn revenue_impact_abs(&self) -> f64 {
        (self.revenue_impact_pct / 100.0) * self.baseline_gdp
    }

    /// Number of horizon years the policy is active, in `1..=horizon`
    pub fn years_active(&self, horizon: u32) -> u32 {
        self.duration_months.div_ceil(12).clamp(1, horizon)
    }
}
