//! Scenario runner: turns policy parameters into engine runs
//!
//! Holds the macro baseline and the engine once, then runs any number of
//! policies against them. Block runs fan out across threads; each policy is
//! an independent pure call.

use log::{info, warn};
use rayon::prelude::*;

use crate::error::Result;
use crate::policy::{build_input, ExtractedParameters, MacroBaseline, PolicyRecord, SimulationRequest};
use crate::simulation::{ProjectionEngine, SimulationResult};

/// Outcome of one policy within a block run
#[derive(Debug)]
pub struct BlockOutcome {
    pub policy_id: String,
    pub result: Result<SimulationResult>,
}

/// Pre-configured runner for single and block stress tests
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let result = runner.run(&ExtractedParameters::fallback())?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    baseline: MacroBaseline,
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create runner with the default baseline and assumptions
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner against a specific macro baseline
    pub fn with_baseline(baseline: MacroBaseline) -> Self {
        Self {
            baseline,
            engine: ProjectionEngine::default(),
        }
    }

    /// Create runner with a pre-built engine
    pub fn with_engine(baseline: MacroBaseline, engine: ProjectionEngine) -> Self {
        Self { baseline, engine }
    }

    pub fn baseline(&self) -> &MacroBaseline {
        &self.baseline
    }

    /// Run one policy against the runner's baseline
    pub fn run(&self, extracted: &ExtractedParameters) -> Result<SimulationResult> {
        self.run_against(&self.baseline, extracted)
    }

    /// Run one policy against the baseline carried by a request
    pub fn run_request(
        &self,
        request: &SimulationRequest,
        extracted: &ExtractedParameters,
    ) -> Result<SimulationResult> {
        self.run_against(&request.baseline(), extracted)
    }

    /// Run every policy of a block in parallel; output order matches input order
    pub fn run_block(&self, records: &[PolicyRecord]) -> Vec<BlockOutcome> {
        info!("Running {} policies against baseline {:?}", records.len(), self.baseline);

        records
            .par_iter()
            .map(|record| {
                let result = self.run(&record.parameters);
                if let Err(e) = &result {
                    warn!("Policy {} skipped: {}", record.policy_id, e);
                }
                BlockOutcome {
                    policy_id: record.policy_id.clone(),
                    result,
                }
            })
            .collect()
    }

    fn run_against(
        &self,
        baseline: &MacroBaseline,
        extracted: &ExtractedParameters,
    ) -> Result<SimulationResult> {
        let input = build_input(baseline, &extracted.resolve())?;
        Ok(self.engine.simulate(&input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StressError;
    use crate::simulation::{FiscalAssumptions, RiskCategory};

    fn record(policy_id: &str, spending: Option<f64>, months: Option<u32>) -> PolicyRecord {
        PolicyRecord {
            policy_id: policy_id.to_string(),
            parameters: ExtractedParameters {
                spending_commitment: spending,
                revenue_impact: Some(0.0),
                duration_months: months,
                primary_sectors: None,
            },
        }
    }

    #[test]
    fn test_run_with_defaults_matches_sample() {
        let result = ScenarioRunner::new().run(&ExtractedParameters::default()).unwrap();
        assert_eq!(result.fiscal_strain_score, 100);
        assert_eq!(result.debt_to_gdp_projection[0].ratio, 144.0);
        assert_eq!(result.breakdown.sectors, vec!["Social Welfare"]);
    }

    #[test]
    fn test_run_request_uses_request_baseline() {
        let runner = ScenarioRunner::new();
        let request = SimulationRequest::with_baseline(
            "p1",
            MacroBaseline { baseline_debt: 1000.0, baseline_gdp: 1000.0, current_deficit_pct: 3.0 },
        );
        let extracted = ExtractedParameters {
            spending_commitment: Some(0.0),
            revenue_impact: Some(0.0),
            duration_months: Some(1),
            primary_sectors: Some(vec![]),
        };

        let result = runner.run_request(&request, &extracted).unwrap();
        assert_eq!(result.debt_to_gdp_projection[4].ratio, 124.9);
        assert_eq!(result.risk_category, RiskCategory::Moderate);
    }

    #[test]
    fn test_with_engine_uses_its_assumptions() {
        let engine = ProjectionEngine::new(FiscalAssumptions {
            anchor_year: 2026,
            ..Default::default()
        });
        let runner = ScenarioRunner::with_engine(MacroBaseline::default(), engine);

        assert_eq!(runner.baseline(), &MacroBaseline::default());
        let result = runner.run(&ExtractedParameters::default()).unwrap();
        assert_eq!(result.debt_to_gdp_projection[0].year, 2026);
        assert_eq!(result.debt_to_gdp_projection[0].ratio, 144.0);
    }

    #[test]
    fn test_run_block_preserves_order_and_isolates_errors() {
        let runner = ScenarioRunner::new();
        let records = vec![
            record("a", Some(1.0), Some(12)),
            record("b", Some(-5.0), Some(12)),
            record("c", Some(8.0), Some(0)),
            record("d", Some(6.0), None),
        ];

        let outcomes = runner.run_block(&records);
        let ids: Vec<&str> = outcomes.iter().map(|o| o.policy_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);

        assert_eq!(outcomes[0].result.as_ref().unwrap().fiscal_strain_score, 45);
        assert!(matches!(outcomes[1].result, Err(StressError::InvalidInput(_))));
        assert!(matches!(outcomes[2].result, Err(StressError::InvalidInput(_))));
        assert_eq!(outcomes[3].result.as_ref().unwrap().fiscal_strain_score, 70);
    }
}
