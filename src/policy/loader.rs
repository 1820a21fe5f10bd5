//! Load extracted parameters from JSON and policy blocks from CSV

use csv::{Reader, Trim};
use std::fs;
use std::path::Path;

use super::ExtractedParameters;
use crate::error::{Result, StressError};

/// Separator between sector labels inside a CSV cell
const SECTOR_SEPARATOR: char = ';';

/// One policy of a block: its identifier and whatever was extracted for it
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyRecord {
    pub policy_id: String,
    pub parameters: ExtractedParameters,
}

/// Raw CSV row; empty cells mean "not extracted"
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    policy_id: String,
    #[serde(default)]
    spending_commitment: Option<f64>,
    #[serde(default)]
    revenue_impact: Option<f64>,
    #[serde(default)]
    duration_months: Option<u32>,
    #[serde(default)]
    primary_sectors: Option<String>,
}

impl CsvRow {
    fn into_record(self, index: usize) -> Result<PolicyRecord> {
        if self.policy_id.is_empty() {
            return Err(StressError::invalid_record(index + 1, "missing policy_id"));
        }

        let primary_sectors = self.primary_sectors.map(|cell| {
            cell.split(SECTOR_SEPARATOR)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        });

        Ok(PolicyRecord {
            policy_id: self.policy_id,
            parameters: ExtractedParameters {
                spending_commitment: self.spending_commitment,
                revenue_impact: self.revenue_impact,
                duration_months: self.duration_months,
                primary_sectors,
            },
        })
    }
}

/// Parse the JSON object produced by the extraction step
pub fn parse_extracted(text: &str) -> Result<ExtractedParameters> {
    Ok(serde_json::from_str(text)?)
}

/// Load extracted parameters from a JSON file
pub fn load_extracted<P: AsRef<Path>>(path: P) -> Result<ExtractedParameters> {
    let text = fs::read_to_string(path)?;
    parse_extracted(&text)
}

/// Load a policy block from a CSV file
pub fn load_policy_block<P: AsRef<Path>>(path: P) -> Result<Vec<PolicyRecord>> {
    let file = fs::File::open(path)?;
    load_policy_block_from_reader(file)
}

/// Load a policy block from any reader (e.g., string buffer, network stream)
pub fn load_policy_block_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<PolicyRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    read_records(&mut csv_reader)
}

fn read_records<R: std::io::Read>(reader: &mut Reader<R>) -> Result<Vec<PolicyRecord>> {
    let mut records = Vec::new();

    for (index, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        records.push(row.into_record(index)?);
    }

    Ok(records)
}
