//! Core projection engine for five-year debt-to-GDP stress tests

use log::debug;

use super::input::SimulationInput;
use super::numeric::{format_billions, round1};
use super::result::{
    Breakdown, ComparisonMetric, ComparisonRow, ExpenseMetric, SimulationResult, YearProjection,
};
use super::scoring::{early_warnings, reserve_depletion_year, strain_score, RiskCategory};
use super::state::FiscalState;

/// Number of projected years
pub const PROJECTION_YEARS: u32 = 5;

/// Calendar year of the first projected year
pub const DEFAULT_ANCHOR_YEAR: i32 = 2024;

/// Annual nominal GDP growth (2%)
pub const DEFAULT_GDP_GROWTH_RATE: f64 = 0.02;

/// Annual cost of debt (4%)
pub const DEFAULT_INTEREST_RATE: f64 = 0.04;

/// Baseline tax take as a share of GDP (20%)
pub const DEFAULT_REVENUE_SHARE_OF_GDP: f64 = 0.20;

/// Economic constants the projection runs under
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiscalAssumptions {
    /// Annual GDP growth rate (decimal)
    pub gdp_growth_rate: f64,

    /// Annual interest rate on the opening debt balance (decimal)
    pub interest_rate: f64,

    /// Year-1 baseline revenue as a share of GDP (decimal)
    pub revenue_share_of_gdp: f64,

    /// Calendar label of projection year index 0
    pub anchor_year: i32,
}

impl Default for FiscalAssumptions {
    fn default() -> Self {
        Self {
            gdp_growth_rate: DEFAULT_GDP_GROWTH_RATE,
            interest_rate: DEFAULT_INTEREST_RATE,
            revenue_share_of_gdp: DEFAULT_REVENUE_SHARE_OF_GDP,
            anchor_year: DEFAULT_ANCHOR_YEAR,
        }
    }
}

/// Run a stress test under the default assumptions
pub fn simulate(input: &SimulationInput) -> SimulationResult {
    ProjectionEngine::default().simulate(input)
}

/// Main projection engine
///
/// Stateless between calls: every run works on its own `FiscalState`.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    assumptions: FiscalAssumptions,
}

impl ProjectionEngine {
    /// Create a new projection engine with given assumptions
    pub fn new(assumptions: FiscalAssumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &FiscalAssumptions {
        &self.assumptions
    }

    /// Run the full stress test for one policy
    ///
    /// Total and deterministic. Inputs are not validated here; see
    /// `SimulationInput::new` for the validating path.
    pub fn simulate(&self, input: &SimulationInput) -> SimulationResult {
        let revenue_impact_abs = input.revenue_impact_abs();
        let start_deficit = input.start_deficit();

        let (debt_to_gdp_projection, end_deficit) = self.project_ratios(input, revenue_impact_abs);

        let deficit_increase = if start_deficit != 0.0 {
            (end_deficit - start_deficit) / start_deficit * 100.0
        } else {
            0.0
        };

        let score = strain_score(input.spending_commitment, revenue_impact_abs);
        let risk_category = RiskCategory::from_score(score);

        let panel = self.year_one_panel(input, revenue_impact_abs, start_deficit);

        debug!(
            "stress test: score={} category={} year1 deficit={:.1} drift={:.1}%",
            score, risk_category, panel.stress_deficit, deficit_increase
        );

        SimulationResult {
            fiscal_strain_score: score,
            risk_category,
            projected_deficit_absolute: round1(panel.stress_deficit),
            projected_deficit_increase: round1(deficit_increase),
            reserve_depletion_year: reserve_depletion_year(score),
            debt_to_gdp_projection,
            baseline_vs_stress: panel.rows(),
            delta: round1(panel.stress_deficit - panel.baseline_deficit),
            early_warnings: early_warnings(score, input.revenue_impact_pct),
            breakdown: Breakdown {
                spending_commitment: round1(input.spending_commitment),
                revenue_impact: round1(input.revenue_impact_pct),
                duration: input.duration_months,
                sectors: input.sectors.clone(),
                metrics: expense_metrics(&panel),
            },
        }
    }

    /// Roll the debt stock forward over the horizon.
    /// Returns the yearly ratios and the end-of-horizon deficit.
    fn project_ratios(
        &self,
        input: &SimulationInput,
        revenue_impact_abs: f64,
    ) -> (Vec<YearProjection>, f64) {
        let years_active = input.years_active(PROJECTION_YEARS);
        let mut state = FiscalState::from_input(input);
        let mut projections = Vec::with_capacity(PROJECTION_YEARS as usize);

        for year in 0..PROJECTION_YEARS {
            let (added_spending, added_revenue_hit) = if year < years_active {
                (input.spending_commitment, revenue_impact_abs)
            } else {
                (0.0, 0.0)
            };

            let ratio = state.advance_year(&self.assumptions, added_spending, added_revenue_hit);
            let calendar_year = self.assumptions.anchor_year + year as i32;

            debug!(
                "year {}: gdp={:.2} debt={:.2} deficit={:.2} ratio={:.3}",
                calendar_year, state.gdp, state.debt, state.deficit, ratio
            );

            projections.push(YearProjection {
                year: calendar_year,
                ratio: round1(ratio),
            });
        }

        (projections, state.deficit)
    }

    /// Year-1 revenue/expense panel, baseline vs stressed
    fn year_one_panel(
        &self,
        input: &SimulationInput,
        revenue_impact_abs: f64,
        start_deficit: f64,
    ) -> YearOnePanel {
        let baseline_revenue = input.baseline_gdp * self.assumptions.revenue_share_of_gdp;
        let stress_revenue = baseline_revenue + revenue_impact_abs;

        let baseline_expense = baseline_revenue + start_deficit;
        let stress_expense = baseline_expense + input.spending_commitment;

        let baseline_deficit = baseline_expense - baseline_revenue;
        let stress_deficit = stress_expense - stress_revenue;

        YearOnePanel {
            baseline_revenue,
            stress_revenue,
            baseline_expense,
            stress_expense,
            baseline_deficit,
            stress_deficit,
            baseline_debt: input.baseline_debt + baseline_deficit,
            stress_debt: input.baseline_debt + stress_deficit,
        }
    }
}

/// Unrounded year-1 figures
struct YearOnePanel {
    baseline_revenue: f64,
    stress_revenue: f64,
    baseline_expense: f64,
    stress_expense: f64,
    baseline_deficit: f64,
    stress_deficit: f64,
    baseline_debt: f64,
    stress_debt: f64,
}

impl YearOnePanel {
    fn rows(&self) -> Vec<ComparisonRow> {
        let row = |name, baseline: f64, stress: f64| ComparisonRow {
            name,
            baseline: round1(baseline),
            stress: round1(stress),
        };

        vec![
            row(ComparisonMetric::Revenue, self.baseline_revenue, self.stress_revenue),
            row(ComparisonMetric::Expense, self.baseline_expense, self.stress_expense),
            row(ComparisonMetric::Deficit, self.baseline_deficit, self.stress_deficit),
            row(ComparisonMetric::DebtLoad, self.baseline_debt, self.stress_debt),
        ]
    }
}

/// Expense-category rows; only operating expenses track the input
fn expense_metrics(panel: &YearOnePanel) -> Vec<ExpenseMetric> {
    let metric = |category: &str, baseline: String, stress: String, delta: &str| ExpenseMetric {
        category: category.to_string(),
        baseline,
        stress,
        delta: delta.to_string(),
    };

    vec![
        metric(
            "Operating Expenses",
            format_billions(round1(panel.baseline_expense)),
            format_billions(round1(panel.stress_expense)),
            "+13.7%",
        ),
        metric("Capital Expenditures", "$5.8B".to_string(), "$6.2B".to_string(), "+6.9%"),
        metric("Interest Payments", "$0.9B".to_string(), "$1.4B".to_string(), "+55.5%"),
    ]
}
