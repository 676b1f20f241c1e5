//! Core catalog parser implementation
//!
//! This module provides the main parsing orchestration: quote validation,
//! header resolution, and coordination of the per-row pipeline.

use tracing::{debug, info, warn};

use super::column_mapping::ColumnMapping;
use super::record_parser::parse_device_record;
use super::stats::ParseOutcome;
use crate::app::models::DeviceRecord;
use crate::config::ParserConfig;
use crate::constants::FIELD_DELIMITER;
use crate::{Error, Result};

/// Parser for Google Play Device Catalog CSV exports
///
/// Holds an immutable [`ParserConfig`]; a single parser can be shared
/// between threads and reused for any number of inputs.
#[derive(Debug, Clone, Default)]
pub struct CatalogParser {
    config: ParserConfig,
}

impl CatalogParser {
    /// Create a new parser with the given validation policy
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Validation policy used by this parser
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse catalog text and return the valid devices in input order
    pub fn parse(&self, text: &str) -> Result<Vec<DeviceRecord>> {
        parse_device_catalog(text, &self.config)
    }

    /// Parse catalog text and return devices together with row statistics
    pub fn parse_with_stats(&self, text: &str) -> Result<ParseOutcome> {
        parse_device_catalog_with_stats(text, &self.config)
    }
}

/// Parse catalog text and return the valid devices in input order
///
/// Identical to the `devices` of [`parse_device_catalog_with_stats`].
pub fn parse_device_catalog(text: &str, config: &ParserConfig) -> Result<Vec<DeviceRecord>> {
    Ok(parse_device_catalog_with_stats(text, config)?.devices)
}

/// Parse catalog text and return devices together with row statistics
///
/// The first line is the header. Rows with problems are discarded and
/// counted; the call only fails when the text cannot be split into rows.
pub fn parse_device_catalog_with_stats(text: &str, config: &ParserConfig) -> Result<ParseOutcome> {
    ensure_balanced_quotes(text)?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(FIELD_DELIMITER)
        .from_reader(text.as_bytes());

    let headers = csv_reader
        .headers()
        .map_err(|e| Error::csv_parsing("Failed to read catalog header", Some(e)))?;

    let column_mapping = ColumnMapping::analyze(headers);
    let missing_columns = column_mapping.missing_columns();
    if !headers.is_empty() && column_mapping.recognized_columns().is_empty() {
        warn!("Header row contains none of the expected catalog columns; rows cannot be matched");
    } else if !missing_columns.is_empty() {
        debug!("Header row is missing columns: {}", missing_columns.join(", "));
    }
    debug!(
        "Column mapping: {} total, {} extra",
        column_mapping.name_to_index.len(),
        column_mapping.extra_column_count()
    );

    info!(
        "Parsing device catalog (defaults for missing fields: {}, default form factor: {:?})",
        config.use_defaults_for_missing_fields, config.default_form_factor
    );

    let mut outcome = ParseOutcome::new();

    for result in csv_reader.records() {
        let row_number = outcome.total_rows + 1;
        let record = result.map_err(|e| {
            Error::csv_parsing(format!("Failed to read catalog row {}", row_number), Some(e))
        })?;

        match parse_device_record(&record, &column_mapping, config) {
            Ok(device) => outcome.record_device(device),
            Err(reason) => {
                debug!("Discarded row {}: {}", row_number, reason);
                outcome.record_discard(&reason);
            }
        }
    }

    info!("{}", outcome.summary());

    Ok(outcome)
}

/// Reject text whose quoting never closes
///
/// A quote only opens a quoted field at the start of a field; inside one, a
/// doubled quote is a literal. Record terminators are `\n`, `\r\n` and a
/// bare `\r`. Reports the line where the open quote began.
fn ensure_balanced_quotes(text: &str) -> Result<()> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut in_quotes = false;
    let mut at_field_start = true;
    let mut line: u64 = 1;
    let mut open_line: u64 = 1;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\n' || (c == '\r' && chars.peek() != Some(&'\n')) {
            line += 1;
        }

        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            continue;
        }

        match c {
            '"' if at_field_start => {
                in_quotes = true;
                open_line = line;
                at_field_start = false;
            }
            ',' | '\n' | '\r' => at_field_start = true,
            _ => at_field_start = false,
        }
    }

    if in_quotes {
        return Err(Error::malformed_input(open_line, "unterminated quoted field"));
    }

    Ok(())
}

#[cfg(test)]
mod quote_tests {
    use super::*;

    #[test]
    fn test_balanced_quotes_pass() {
        assert!(ensure_balanced_quotes("a,\"b,c\",d\n\"e\"\"f\",g").is_ok());
        assert!(ensure_balanced_quotes("").is_ok());
    }

    #[test]
    fn test_quote_inside_unquoted_field_is_literal() {
        assert!(ensure_balanced_quotes("Brand,Model\ngoogle,Tab 10\" edition").is_ok());
    }

    #[test]
    fn test_multiline_quoted_field_passes() {
        assert!(ensure_balanced_quotes("a,\"line one\nline two\",c\n").is_ok());
    }

    #[test]
    fn test_unterminated_quote_reports_opening_line() {
        let err = ensure_balanced_quotes("a,b\nc,d\ne,\"never closed\nf,g").unwrap_err();
        match err {
            Error::MalformedInput { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unterminated_quote_after_carriage_return() {
        let err = ensure_balanced_quotes("a,b\rc,d\r\"never closed\rf,g").unwrap_err();
        match err {
            Error::MalformedInput { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_crlf_line_endings_count_once() {
        let err = ensure_balanced_quotes("a,b\r\nc,d\r\n\"never closed").unwrap_err();
        assert!(matches!(err, Error::MalformedInput { line: 3, .. }));
        assert!(ensure_balanced_quotes("a,b\r\n\"c\",d\r\n").is_ok());
    }

    #[test]
    fn test_escaped_quote_at_end_stays_open() {
        assert!(ensure_balanced_quotes("a,\"abc\"\"").is_err());
    }
}
