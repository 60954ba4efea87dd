//! Dataset ingest.
//!
//! Turns user input into an ordered list of `Sample`s that is safe to fit:
//! - inline comma-separated lists (`parse_dataset`)
//! - CSV files with `x` and `y` columns (`load_csv_dataset`)
//!
//! Design goals:
//! - **Strict parsing**: any bad token fails the request with its position
//! - **Deterministic behavior**: sample order is the input order
//! - **Separation of concerns**: no fitting logic here

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use csv::StringRecord;
use tracing::debug;

use crate::domain::{DataSource, Sample};
use crate::error::{AppError, FitError};

/// Parse two comma-separated numeric lists into paired samples.
///
/// Whitespace around tokens is ignored. Checks run in this order:
/// empty input, token parsing, length agreement.
pub fn parse_dataset(x_text: &str, y_text: &str) -> Result<Vec<Sample>, FitError> {
    if x_text.trim().is_empty() {
        return Err(FitError::EmptyInput("x"));
    }
    if y_text.trim().is_empty() {
        return Err(FitError::EmptyInput("y"));
    }

    let xs = parse_values(x_text, "x")?;
    let ys = parse_values(y_text, "y")?;

    if xs.len() != ys.len() {
        return Err(FitError::LengthMismatch {
            x_len: xs.len(),
            y_len: ys.len(),
        });
    }

    Ok(xs.into_iter().zip(ys).map(|(x, y)| Sample::new(x, y)).collect())
}

/// Parse a comma-separated list of finite reals.
pub fn parse_values(text: &str, field: &'static str) -> Result<Vec<f64>, FitError> {
    text.split(',')
        .enumerate()
        .map(|(idx, token)| parse_number(token, field, idx + 1))
        .collect()
}

fn parse_number(token: &str, field: &'static str, position: usize) -> Result<f64, FitError> {
    let token = token.trim();
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(FitError::Parse {
            field,
            position,
            token: token.to_string(),
        }),
    }
}

/// Load samples from a CSV file with a header row naming `x` and `y` columns.
///
/// Other columns are ignored. Parse failures report the 1-based file line.
pub fn load_csv_dataset(path: &Path) -> Result<Vec<Sample>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open CSV '{}': {e}", path.display())))?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);

    let x_idx = column_index(&header_map, "x")?;
    let y_idx = column_index(&header_map, "y")?;

    let mut samples = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // records() starts after the header on line 2.
        let line = idx + 2;
        let record =
            result.map_err(|e| AppError::new(2, format!("CSV parse error on line {line}: {e}")))?;

        let x = parse_field(&record, x_idx, "x", line)?;
        let y = parse_field(&record, y_idx, "y", line)?;
        samples.push(Sample::new(x, y));
    }

    if samples.is_empty() {
        return Err(FitError::EmptyInput("CSV data").into());
    }

    debug!(path = %path.display(), n = samples.len(), "loaded CSV dataset");
    Ok(samples)
}

fn parse_field(
    record: &StringRecord,
    idx: usize,
    field: &'static str,
    line: usize,
) -> Result<f64, AppError> {
    let token = record.get(idx).unwrap_or("");
    parse_number(token, field, line).map_err(|e| {
        AppError::new(
            e.exit_code(),
            format!("CSV line {line}: '{token}' is not a valid {field} value"),
        )
    })
}

/// Resolve the configured data source into samples.
pub fn load_samples(source: &DataSource) -> Result<Vec<Sample>, AppError> {
    match source {
        DataSource::Inline { x, y } => Ok(parse_dataset(x, y)?),
        DataSource::Csv(path) => load_csv_dataset(path),
    }
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    let mut map = HashMap::new();
    for (idx, name) in headers.iter().enumerate() {
        // First occurrence wins.
        map.entry(normalize_header_name(name)).or_insert(idx);
    }
    map
}

fn normalize_header_name(name: &str) -> String {
    // Excel and other tools sometimes emit UTF-8 CSVs with a BOM prefix on the
    // first header. If we don't strip it, the `x` column goes missing.
    name.trim().trim_start_matches('\u{feff}').to_ascii_lowercase()
}

fn column_index(header_map: &HashMap<String, usize>, name: &str) -> Result<usize, AppError> {
    header_map.get(name).copied().ok_or_else(|| {
        AppError::new(
            2,
            format!("CSV is missing required column '{name}' (expected headers 'x' and 'y')."),
        )
    })
}
