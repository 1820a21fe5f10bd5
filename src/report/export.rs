//! CSV export of stress-test output

use csv::Writer;
use std::io::Write;

use crate::error::Result;
use crate::scenario::BlockOutcome;
use crate::simulation::SimulationResult;

/// Write the debt-to-GDP path as `Year,DebtToGdpPct`
pub fn write_projection_csv<W: Write>(writer: W, result: &SimulationResult) -> Result<()> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(["Year", "DebtToGdpPct"])?;

    for point in &result.debt_to_gdp_projection {
        csv.write_record([point.year.to_string(), format!("{:.1}", point.ratio)])?;
    }

    csv.flush()?;
    Ok(())
}

/// Write the year-1 panel as `Metric,Baseline,Stress,Delta`
pub fn write_comparison_csv<W: Write>(writer: W, result: &SimulationResult) -> Result<()> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(["Metric", "Baseline", "Stress", "Delta"])?;

    for row in &result.baseline_vs_stress {
        csv.write_record([
            row.name.as_str().to_string(),
            format!("{:.1}", row.baseline),
            format!("{:.1}", row.stress),
            format!("{:.1}", row.stress - row.baseline),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Write one summary line per policy of a block run
///
/// Failed policies keep their row with the error in the last column.
pub fn write_block_csv<W: Write>(writer: W, outcomes: &[BlockOutcome]) -> Result<()> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record([
        "PolicyId",
        "StrainScore",
        "RiskCategory",
        "Year1Deficit",
        "DeficitIncreasePct",
        "FinalDebtToGdpPct",
        "ReserveDepletionYear",
        "Warnings",
        "Error",
    ])?;

    for outcome in outcomes {
        match &outcome.result {
            Ok(result) => {
                let warnings: Vec<String> = result
                    .early_warnings
                    .iter()
                    .map(|w| format!("{:?}", w.kind))
                    .collect();
                csv.write_record([
                    outcome.policy_id.clone(),
                    result.fiscal_strain_score.to_string(),
                    result.risk_category.to_string(),
                    format!("{:.1}", result.projected_deficit_absolute),
                    format!("{:.1}", result.projected_deficit_increase),
                    result.final_ratio().map(|r| format!("{:.1}", r)).unwrap_or_default(),
                    result.reserve_depletion_year.to_string(),
                    warnings.join(";"),
                    String::new(),
                ])?;
            }
            Err(e) => {
                let mut row = vec![outcome.policy_id.clone()];
                row.extend(std::iter::repeat(String::new()).take(7));
                row.push(e.to_string());
                csv.write_record(&row)?;
            }
        }
    }

    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InvalidInputError, StressError};
    use crate::policy::ExtractedParameters;
    use crate::scenario::ScenarioRunner;

    fn sample() -> SimulationResult {
        ScenarioRunner::new().run(&ExtractedParameters::fallback()).unwrap()
    }

    #[test]
    fn test_projection_csv() {
        let mut buf = Vec::new();
        write_projection_csv(&mut buf, &sample()).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Year,DebtToGdpPct");
        assert_eq!(lines[1], "2024,144.0");
        assert_eq!(lines[5], "2028,196.7");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_comparison_csv() {
        let mut buf = Vec::new();
        write_comparison_csv(&mut buf, &sample()).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("REVENUE,3640.0,3367.0,-273.0"));
        assert!(text.contains("DEBT LOAD,25482.8,25760.0,277.2"));
    }

    #[test]
    fn test_block_csv_includes_failures() {
        let outcomes = vec![
            BlockOutcome { policy_id: "ubi".to_string(), result: Ok(sample()) },
            BlockOutcome {
                policy_id: "broken".to_string(),
                result: Err(StressError::InvalidInput(InvalidInputError::ZeroDuration)),
            },
        ];

        let mut buf = Vec::new();
        write_block_csv(&mut buf, &outcomes).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "ubi,100,High Risk,1260.0,141.0,196.7,3,Liquidity;Revenue,");
        assert_eq!(
            lines[2],
            "broken,,,,,,,,Invalid input: duration_months must be at least 1"
        );
    }
}
