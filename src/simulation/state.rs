//! Running fiscal state carried through the projection horizon

use super::engine::FiscalAssumptions;
use super::input::SimulationInput;

/// State of the public finances at the start of a projection year
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiscalState {
    /// Nominal GDP
    pub gdp: f64,

    /// Outstanding debt
    pub debt: f64,

    /// Running deficit, including any policy effects applied so far
    pub deficit: f64,
}

impl FiscalState {
    /// Initialize state from the input baselines
    ///
    /// The seeded deficit is not grown with GDP; it is only carried forward.
    pub fn from_input(input: &SimulationInput) -> Self {
        Self {
            gdp: input.baseline_gdp,
            debt: input.baseline_debt,
            deficit: input.start_deficit(),
        }
    }

    /// Roll one year forward and return the debt-to-GDP ratio in percent (unrounded)
    ///
    /// Interest accrues on the opening debt balance, before growth.
    pub fn advance_year(
        &mut self,
        assumptions: &FiscalAssumptions,
        added_spending: f64,
        added_revenue_hit: f64,
    ) -> f64 {
        let next_gdp = self.gdp * (1.0 + assumptions.gdp_growth_rate);

        let stressed_deficit = self.deficit + added_spending - added_revenue_hit;
        let interest_payment = self.debt * assumptions.interest_rate;

        let next_debt = self.debt + stressed_deficit + interest_payment;

        self.gdp = next_gdp;
        self.debt = next_debt;
        self.deficit = stressed_deficit;

        (next_debt / next_gdp) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_advance_year_without_policy() {
        let mut state = FiscalState { gdp: 1000.0, debt: 1000.0, deficit: 30.0 };
        let ratio = state.advance_year(&FiscalAssumptions::default(), 0.0, 0.0);

        assert_relative_eq!(state.gdp, 1020.0, epsilon = 1e-9);
        // 1000 + 30 deficit + 40 interest
        assert_relative_eq!(state.debt, 1070.0, epsilon = 1e-9);
        assert_relative_eq!(state.deficit, 30.0);
        assert_relative_eq!(ratio, 1070.0 / 1020.0 * 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_revenue_loss_widens_deficit() {
        let mut state = FiscalState { gdp: 1000.0, debt: 1000.0, deficit: 40.0 };
        state.advance_year(&FiscalAssumptions::default(), 1.0, -20.0);

        assert_relative_eq!(state.deficit, 61.0, epsilon = 1e-9);
        assert_relative_eq!(state.debt, 1101.0, epsilon = 1e-9);
    }
}
