//! Command-line interface
//!
//! The view layer: gathers and revalidates parameters, calls the core,
//! and renders its output. Flags override config values; config overrides
//! built-in defaults.

mod table;

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::{Config, Validate};
use crate::core::cost::{UsageProfile, parse_keywords};
use crate::services::catalog::CatalogService;
use crate::utils::error::Result;

/// LLM API pricing calculator
#[derive(Debug, Parser)]
#[command(
    name = "pricecalc",
    version,
    about = "Estimate and compare LLM API usage costs across a model catalog"
)]
pub struct Cli {
    /// Path to a YAML configuration file
    #[arg(long, env = "PRICECALC_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Calculator subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute per-model cost estimates for a usage profile (default)
    Estimate(EstimateArgs),
    /// Show catalog model counts and price ranges
    Stats(StatsArgs),
}

/// Arguments for the estimate subcommand
#[derive(Debug, Default, Args)]
pub struct EstimateArgs {
    /// Path to the JSON model catalog
    #[arg(long, env = "PRICECALC_CATALOG")]
    pub catalog: Option<String>,

    /// Input (prompt) tokens per query
    #[arg(long)]
    pub input_tokens: Option<u32>,

    /// Output (completion) tokens per query
    #[arg(long)]
    pub output_tokens: Option<u32>,

    /// Queries per month
    #[arg(long)]
    pub monthly_transactions: Option<u32>,

    /// Monthly budget in the catalog currency
    #[arg(long)]
    pub budget: Option<f64>,

    /// Comma-separated inclusion keywords
    #[arg(long)]
    pub include: Option<String>,

    /// Comma-separated exclusion keywords
    #[arg(long)]
    pub exclude: Option<String>,

    /// Emit results as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the stats subcommand
#[derive(Debug, Default, Args)]
pub struct StatsArgs {
    /// Path to the JSON model catalog
    #[arg(long, env = "PRICECALC_CATALOG")]
    pub catalog: Option<String>,
}

/// Parse arguments and run the selected subcommand.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref()).await?;

    match cli
        .command
        .unwrap_or_else(|| Command::Estimate(EstimateArgs::default()))
    {
        Command::Estimate(args) => estimate(&config, args).await,
        Command::Stats(args) => stats(&config, args).await,
    }
}

async fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path).await,
        None => Ok(Config::default()),
    }
}

async fn estimate(config: &Config, args: EstimateArgs) -> Result<()> {
    let defaults = &config.calculator;

    let usage = UsageProfile::new(
        args.input_tokens.unwrap_or(defaults.usage.input_tokens),
        args.output_tokens.unwrap_or(defaults.usage.output_tokens),
        args.monthly_transactions
            .unwrap_or(defaults.usage.monthly_transactions),
        args.budget.unwrap_or(defaults.usage.budget),
    );
    usage.validate()?;

    let includes = parse_keywords(args.include.as_deref().unwrap_or(&defaults.filters.include));
    let excludes = parse_keywords(args.exclude.as_deref().unwrap_or(&defaults.filters.exclude));

    let service = CatalogService::new(
        args.catalog
            .unwrap_or_else(|| defaults.catalog_path.clone()),
    );
    service.initialize().await?;

    let evaluation = service.evaluate(&usage, &includes, &excludes);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&evaluation.results)?);
        return Ok(());
    }

    table::render_estimate(&evaluation, &usage, &includes, &excludes);
    Ok(())
}

async fn stats(config: &Config, args: StatsArgs) -> Result<()> {
    let service = CatalogService::new(
        args.catalog
            .unwrap_or_else(|| config.calculator.catalog_path.clone()),
    );
    service.initialize().await?;

    table::render_statistics(&service.statistics());
    Ok(())
}
