//! Command implementations for the device catalog CLI
//!
//! File reading, JSON output and report rendering live here; the parser
//! itself only ever sees in-memory text.

use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use std::fs;
use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

use crate::app::services::catalog_parser::{CatalogParser, ParseOutcome};
use crate::app::services::export::write_devices_json;
use crate::app::services::summary::CatalogSummary;
use crate::cli::args::{Args, Commands, OutputFormat, ParseArgs, StatsArgs};

/// Machine-readable report emitted by `stats --format json`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport<'a> {
    pub total_rows: usize,
    pub successful_count: usize,
    pub discarded_count: usize,
    pub success_rate: f64,
    pub top_discard_reasons: Vec<(&'a str, usize)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<CatalogSummary>,
}

impl<'a> StatsReport<'a> {
    /// Build a report from a parse outcome
    pub fn new(outcome: &'a ParseOutcome, top: usize, include_summary: bool) -> Self {
        Self {
            total_rows: outcome.total_rows,
            successful_count: outcome.successful_count(),
            discarded_count: outcome.discarded_count,
            success_rate: outcome.success_rate(),
            top_discard_reasons: outcome.top_discard_reasons(top),
            summary: include_summary.then(|| CatalogSummary::from_devices(&outcome.devices)),
        }
    }
}

/// Main command runner
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    match args.command {
        Commands::Parse(parse_args) => run_parse(&parse_args),
        Commands::Stats(stats_args) => run_stats(&stats_args),
    }
}

/// Set up structured logging on stderr
///
/// Fails when a global subscriber is already installed.
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("device_catalog_parser={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Parse a catalog file and write the accepted devices as JSON
pub fn run_parse(args: &ParseArgs) -> Result<()> {
    args.policy.validate()?;
    let config = args.policy.to_config()?;
    let text = read_catalog(&args.input)?;

    let start_time = Instant::now();
    let parser = CatalogParser::new(config);
    let mut devices = parser
        .parse(&text)
        .with_context(|| format!("Failed to parse catalog {}", args.input.display()))?;

    if args.sanitize_ram {
        devices = devices
            .into_iter()
            .map(|device| device.with_sanitized_ram())
            .collect();
    }

    match &args.output {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            write_devices_json(BufWriter::new(file), &devices, args.pretty)
                .with_context(|| format!("Failed to write output file {}", path.display()))?;
            info!(
                "Wrote {} devices to {} in {}ms",
                devices.len(),
                path.display(),
                start_time.elapsed().as_millis()
            );
        }
        None => {
            write_devices_json(std::io::stdout().lock(), &devices, args.pretty)
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

/// Parse a catalog file and print row statistics
pub fn run_stats(args: &StatsArgs) -> Result<()> {
    args.policy.validate()?;
    let config = args.policy.to_config()?;
    let text = read_catalog(&args.input)?;

    let outcome = CatalogParser::new(config)
        .parse_with_stats(&text)
        .with_context(|| format!("Failed to parse catalog {}", args.input.display()))?;

    let report = StatsReport::new(&outcome, args.top, args.summary);

    match args.output_format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            println!("{}", json);
        }
        OutputFormat::Human => print_human_report(&args.input, &report),
    }

    Ok(())
}

/// Read the whole catalog file into memory
fn read_catalog(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file {}", path.display()))
}

fn print_human_report(input: &Path, report: &StatsReport<'_>) {
    println!(
        "{} {}",
        "Device Catalog Statistics".bright_green().bold(),
        input.display().to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Total rows:".bright_cyan(),
        report.total_rows.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Devices parsed:".bright_cyan(),
        report.successful_count.to_string().bright_white().bold()
    );
    if report.discarded_count > 0 {
        println!(
            "  {} {}",
            "Rows discarded:".bright_red(),
            report.discarded_count.to_string().bright_red().bold()
        );
    }
    println!(
        "  {} {:.2}%",
        "Success rate:".bright_cyan(),
        report.success_rate
    );

    if !report.top_discard_reasons.is_empty() {
        println!("\n{}", "Top discard reasons".bright_yellow().bold());
        for (reason, count) in &report.top_discard_reasons {
            println!("  {:>6}  {}", count.to_string().bright_white(), reason);
        }
    }

    if let Some(summary) = &report.summary {
        println!("\n{}", "Catalog Summary".bright_green().bold());
        for (form_factor, count) in &summary.form_factor_distribution {
            println!(
                "  {:<24} {:>6} ({:.1}%)",
                form_factor.label().bright_cyan(),
                count,
                summary.form_factor_share(*form_factor)
            );
        }
        println!(
            "  {} {}",
            "Manufacturers:".bright_cyan(),
            summary.unique_manufacturers
        );
        println!("  {} {}", "Processors:".bright_cyan(), summary.unique_processors);
        println!("  {} {}", "GPUs:".bright_cyan(), summary.unique_gpus);
        println!("  {} {}", "ABIs:".bright_cyan(), summary.unique_abis);
        if let Some((min, max)) = summary.sdk_version_range {
            println!("  {} {}-{}", "SDK versions:".bright_cyan(), min, max);
        }
        if let Some((min, max)) = summary.screen_density_range {
            println!("  {} {}-{} dpi", "Screen densities:".bright_cyan(), min, max);
        }
    }
}
