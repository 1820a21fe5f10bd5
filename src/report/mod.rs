//! Reporting layer: report envelope, console summary, recommendations and CSV export
//!
//! Everything here reads a `SimulationResult` as-is; nothing recomputes it.

mod recommendations;
pub mod export;

pub use export::{write_block_csv, write_comparison_csv, write_projection_csv};
pub use recommendations::{recommend, Impact, Recommendation};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::simulation::SimulationResult;

/// Stress-test result packaged for a policy, with its recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StressReport {
    pub policy_id: String,

    pub generated_at: DateTime<Utc>,

    /// Serialized inline so the result fields sit at the top level
    #[serde(flatten)]
    pub result: SimulationResult,

    pub recommendations: Vec<Recommendation>,
}

impl StressReport {
    /// Package a result, timestamped now
    pub fn new(policy_id: impl Into<String>, result: SimulationResult) -> Self {
        Self::at(policy_id, result, Utc::now())
    }

    /// Package a result with an explicit timestamp
    pub fn at(policy_id: impl Into<String>, result: SimulationResult, generated_at: DateTime<Utc>) -> Self {
        let recommendations = recommend(&result);
        Self {
            policy_id: policy_id.into(),
            generated_at,
            result,
            recommendations,
        }
    }
}

/// Render a fixed-width console summary of a result
pub fn summary_table(result: &SimulationResult) -> String {
    let mut lines = vec![
        format!("Fiscal Strain Score: {}/100 ({})", result.fiscal_strain_score, result.risk_category),
        format!("Year-1 Deficit:      ${:.1}B (delta ${:.1}B)", result.projected_deficit_absolute, result.delta),
        format!("Deficit Drift:       {:.1}%", result.projected_deficit_increase),
        format!("Reserve Depletion:   Year {}", result.reserve_depletion_year),
        String::new(),
        format!("{:>6} {:>12}", "Year", "Debt/GDP %"),
        "-".repeat(19),
    ];

    for point in &result.debt_to_gdp_projection {
        lines.push(format!("{:>6} {:>12.1}", point.year, point.ratio));
    }

    lines.push(String::new());
    lines.push(format!("{:<10} {:>14} {:>14}", "Metric", "Baseline", "Stress"));
    lines.push("-".repeat(40));
    for row in &result.baseline_vs_stress {
        lines.push(format!("{:<10} {:>14.1} {:>14.1}", row.name.as_str(), row.baseline, row.stress));
    }

    if !result.early_warnings.is_empty() {
        lines.push(String::new());
        lines.push("Early Warnings:".to_string());
        for warning in &result.early_warnings {
            lines.push(format!("  [{:?}] {}: {}", warning.kind, warning.title, warning.description));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::ExtractedParameters;
    use crate::scenario::ScenarioRunner;
    use chrono::TimeZone;

    fn sample() -> SimulationResult {
        ScenarioRunner::new().run(&ExtractedParameters::fallback()).unwrap()
    }

    #[test]
    fn test_report_flattens_result() {
        let when = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let report = StressReport::at("ubi-pilot", sample(), when);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["policy_id"], "ubi-pilot");
        assert_eq!(value["fiscal_strain_score"], 100);
        assert_eq!(value["generated_at"], "2025-03-01T12:00:00Z");
        assert_eq!(value["recommendations"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_report_round_trips_result() {
        let report = StressReport::new("ubi-pilot", sample());
        let json = serde_json::to_string(&report).unwrap();
        let parsed: StressReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.result, report.result);
    }

    #[test]
    fn test_summary_table() {
        let table = summary_table(&sample());
        assert!(table.contains("Fiscal Strain Score: 100/100 (High Risk)"));
        assert!(table.contains("  2028        196.7"));
        assert!(table.contains("DEBT LOAD"));
        assert!(table.contains("[Revenue] Revenue Forecast Miss"));
        assert!(table.ends_with("sector-specific slowdowns.\n"));
    }

    #[test]
    fn test_summary_table_without_warnings() {
        let result = ScenarioRunner::new()
            .run(&ExtractedParameters {
                spending_commitment: Some(1.0),
                revenue_impact: Some(0.5),
                ..Default::default()
            })
            .unwrap();
        let table = summary_table(&result);
        assert!(table.starts_with("Fiscal Strain Score: 45/100 (Moderate Risk)\n"));
        assert!(!table.contains("Early Warnings"));
        assert_eq!(table.lines().count(), 19);
    }
}
