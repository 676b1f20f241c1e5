//! Command-line argument definitions for the device catalog tool
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::models::FormFactor;
use crate::config::ParserConfig;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the device catalog tool
///
/// Converts a Google Play Device Catalog CSV export into validated JSON
/// device records and reports on rows that could not be used.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "device-catalog",
    version,
    about = "Parse the Google Play Device Catalog CSV export into validated device records",
    long_about = "Reads a device catalog CSV export, validates every row, and either writes the \
                  accepted devices as JSON or reports parsing statistics with the most common \
                  reasons rows were discarded."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a catalog and write the valid devices as JSON
    Parse(ParseArgs),
    /// Parse a catalog and report row statistics
    Stats(StatsArgs),
}

/// Validation policy flags shared by every subcommand
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PolicyArgs {
    /// Path to a JSON parser configuration
    ///
    /// Flags given on the command line override values from the file.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to parser configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Substitute defaults for blank fields instead of discarding rows
    #[arg(
        long = "use-defaults",
        help = "Substitute default values for blank fields instead of discarding rows"
    )]
    pub use_defaults: bool,

    #[arg(
        long = "default-string",
        value_name = "TEXT",
        help = "Replacement for blank fields (with --use-defaults)"
    )]
    pub default_string: Option<String>,

    #[arg(
        long = "default-int",
        value_name = "N",
        allow_hyphen_values = true,
        help = "Replacement for non-numeric integer tokens (with --use-defaults)"
    )]
    pub default_int: Option<i32>,

    /// Fallback for unrecognized form factors, e.g. "Phone" or "Unknown"
    #[arg(
        long = "default-form-factor",
        value_name = "LABEL",
        help = "Form factor used when the catalog label is not recognized"
    )]
    pub default_form_factor: Option<FormFactor>,
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// Catalog CSV export to read
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    #[command(flatten)]
    pub policy: PolicyArgs,

    /// Reduce RAM ranges to their maximum value ("3705-3735MB" becomes "3735MB")
    #[arg(long = "sanitize-ram", help = "Reduce RAM ranges to their maximum value")]
    pub sanitize_ram: bool,

    /// Output file for the JSON records
    ///
    /// If not specified, writes to stdout
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file for JSON records"
    )]
    pub output: Option<PathBuf>,

    #[arg(long = "pretty", help = "Pretty-print the JSON output")]
    pub pretty: bool,
}

/// Arguments for the stats command
#[derive(Debug, Clone, Parser)]
pub struct StatsArgs {
    /// Catalog CSV export to read
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    #[command(flatten)]
    pub policy: PolicyArgs,

    /// Output format for the report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the report"
    )]
    pub output_format: OutputFormat,

    /// Include catalog-wide aggregates over the accepted devices
    #[arg(long = "summary", help = "Include a summary of the accepted devices")]
    pub summary: bool,

    /// Number of discard reasons to list
    #[arg(
        long = "top",
        value_name = "COUNT",
        default_value_t = crate::constants::DEFAULT_TOP_REASONS,
        help = "Number of discard reasons to show"
    )]
    pub top: usize,
}

/// Output format options for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl PolicyArgs {
    /// Build the parser configuration from the optional file and flags
    pub fn to_config(&self) -> Result<ParserConfig> {
        let mut config = match &self.config_file {
            Some(path) => ParserConfig::from_json_file(path)?,
            None => ParserConfig::default(),
        };

        if self.use_defaults {
            config = config.with_defaults_for_missing_fields(true);
        }
        if let Some(value) = &self.default_string {
            config = config.with_default_string_value(value.clone());
        }
        if let Some(value) = self.default_int {
            config = config.with_default_int_value(value);
        }
        if let Some(form_factor) = self.default_form_factor {
            config = config.with_default_form_factor(form_factor);
        }

        Ok(config)
    }

    /// Check the flags for consistency
    pub fn validate(&self) -> Result<()> {
        let substitutes_given = self.default_string.is_some() || self.default_int.is_some();
        if substitutes_given && !self.use_defaults && self.config_file.is_none() {
            return Err(Error::configuration(
                "--default-string and --default-int only apply with --use-defaults",
            ));
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }
}
