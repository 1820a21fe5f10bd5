//! Fiscal Stress CLI
//!
//! Command-line interface for running policy stress tests

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use fiscal_stress::policy::{load_extracted, load_policy_block, ExtractedParameters, MacroBaseline};
use fiscal_stress::report::{summary_table, write_block_csv, write_projection_csv};
use fiscal_stress::{ScenarioRunner, StressReport};

#[derive(Parser, Debug)]
#[command(name = "fiscal_stress", version, about = "Stress-test a fiscal policy against a debt-to-GDP baseline")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a single policy
    Simulate(SimulateArgs),
    /// Run every policy in a CSV block
    Block(BlockArgs),
}

#[derive(Args, Debug)]
struct BaselineArgs {
    /// Outstanding debt, USD billions
    #[arg(long, default_value_t = 24_500.0)]
    baseline_debt: f64,

    /// Nominal GDP, USD billions
    #[arg(long, default_value_t = 18_200.0)]
    baseline_gdp: f64,

    /// Current deficit, percent of GDP
    #[arg(long, default_value_t = 5.4, allow_negative_numbers = true)]
    current_deficit: f64,
}

impl BaselineArgs {
    fn to_baseline(&self) -> MacroBaseline {
        MacroBaseline {
            baseline_debt: self.baseline_debt,
            baseline_gdp: self.baseline_gdp,
            current_deficit_pct: self.current_deficit,
        }
    }
}

#[derive(Args, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    baseline: BaselineArgs,

    /// Identifier to stamp on the report
    #[arg(long, default_value = "local-policy")]
    policy_id: String,

    /// JSON file with extracted policy parameters
    #[arg(long)]
    extracted: Option<PathBuf>,

    /// Spending commitment, USD billions per year (overrides extracted)
    #[arg(long)]
    spending: Option<f64>,

    /// Revenue impact, percentage points of GDP (overrides extracted)
    #[arg(long, allow_negative_numbers = true)]
    revenue_impact: Option<f64>,

    /// Policy duration in months (overrides extracted)
    #[arg(long)]
    duration_months: Option<u32>,

    /// Affected sector; repeat for several (overrides extracted)
    #[arg(long = "sector")]
    sectors: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Also write the debt-to-GDP path to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct BlockArgs {
    #[command(flatten)]
    baseline: BaselineArgs,

    /// CSV file with one policy per row
    #[arg(long)]
    input: PathBuf,

    /// Summary CSV to write
    #[arg(long, default_value = "block_stress_output.csv")]
    output: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Simulate(args) => run_simulate(args),
        Command::Block(args) => run_block(args),
    }
}

fn run_simulate(args: SimulateArgs) -> Result<()> {
    let mut extracted = match &args.extracted {
        Some(path) => load_extracted(path)
            .with_context(|| format!("Failed to load extracted parameters from {}", path.display()))?,
        None => ExtractedParameters::default(),
    };

    if args.spending.is_some() {
        extracted.spending_commitment = args.spending;
    }
    if args.revenue_impact.is_some() {
        extracted.revenue_impact = args.revenue_impact;
    }
    if args.duration_months.is_some() {
        extracted.duration_months = args.duration_months;
    }
    if !args.sectors.is_empty() {
        extracted.primary_sectors = Some(args.sectors.clone());
    }

    let runner = ScenarioRunner::with_baseline(args.baseline.to_baseline());
    let result = runner.run(&extracted).context("Simulation input rejected")?;

    if let Some(path) = &args.csv {
        let file = File::create(path)
            .with_context(|| format!("Unable to create {}", path.display()))?;
        write_projection_csv(file, &result)?;
        info!("Projection written to {}", path.display());
    }

    match args.format {
        OutputFormat::Table => {
            println!("Policy: {}", args.policy_id);
            println!();
            print!("{}", summary_table(&result));
        }
        OutputFormat::Json => {
            let report = StressReport::new(args.policy_id, result);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn run_block(args: BlockArgs) -> Result<()> {
    let start = Instant::now();

    let records = load_policy_block(&args.input)
        .with_context(|| format!("Failed to load policy block from {}", args.input.display()))?;
    println!("Loaded {} policies in {:?}", records.len(), start.elapsed());

    let runner = ScenarioRunner::with_baseline(args.baseline.to_baseline());
    let outcomes = runner.run_block(&records);

    let file = File::create(&args.output)
        .with_context(|| format!("Unable to create {}", args.output.display()))?;
    write_block_csv(file, &outcomes)?;

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    println!("Output written to {}", args.output.display());
    println!("  Succeeded: {}", outcomes.len() - failed);
    println!("  Rejected:  {}", failed);
    println!("Total time: {:?}", start.elapsed());

    Ok(())
}
