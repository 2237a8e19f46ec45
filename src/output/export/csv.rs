//! CSV export of simulation series
//!
//! Writes the four per-iteration series to a CSV file that opens in Excel,
//! pandas or any spreadsheet tool.
//!
//! # Quick Example
//!
//! ```rust,ignore
//! use mch_rs::output::export::export_simulation_csv;
//!
//! let result = run(&SimulationConfig::default())?;
//! export_simulation_csv(&result, "h2.csv", None)?;
//! ```
//!
//! **Output** (`h2.csv`):
//! ```csv
//! Iteration,Total MCH Used (kg),Cumulative H2 Yield (kg),Remaining MCH (kg),Efficiency (kg H2/kg MCH)
//! 1,1000.000000,43.620311,400.000000,0.043620
//! 2,2000.000000,130.860932,600.000000,0.087241
//! ...
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! let metadata = CsvMetadata::from_config("Linear yield", &config);
//! let csv = CsvConfig::default().with_metadata(metadata);
//! export_simulation_csv(&result, "h2.csv", Some(&csv))?;
//! ```
//!
//! ```csv
//! # MCH Dehydrogenation Simulation Data
//! # Generated: 2026-10-19T09:30:00+00:00
//! # Model: Linear yield
//! # Target H2 Yield: 5000 kg
//! # MCH Increment: 1000 kg
//! ...
//! #
//! Iteration,Total MCH Used (kg),...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};

use thiserror::Error;

use crate::output::export::Exporter;
use crate::solver::{SimulationConfig, SimulationResult};

/// Column headers, in output order
pub const CSV_HEADERS: [&str; 5] = [
    "Iteration",
    "Total MCH Used (kg)",
    "Cumulative H2 Yield (kg)",
    "Remaining MCH (kg)",
    "Efficiency (kg H2/kg MCH)",
];

// =============================================================================
// Errors
// =============================================================================

/// Errors raised by the CSV exporter
#[derive(Debug, Error)]
pub enum CsvError {
    /// The result holds no iteration
    #[error("Empty data: the result contains no iteration")]
    EmptyResult,

    /// A series does not have as many points as the MCH usage series
    #[error("Data length mismatch: {series} has {found} points versus {expected} iterations")]
    LengthMismatch {
        series: &'static str,
        expected: usize,
        found: usize,
    },

    /// NaN or Inf in a series
    #[error("Invalid data: NaN or Inf detected in {series} at row {row}")]
    NonFinite {
        series: &'static str,
        row: usize,
    },

    /// File creation or write failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use mch_rs::output::export::CsvConfig;
///
/// let config = CsvConfig::european().precision(3);
/// assert_eq!(config.delimiter, ';');
/// assert_eq!(config.decimal_separator, ',');
/// ```
#[derive(Clone, Debug)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
        }
    }
}

impl CsvConfig {
    /// Create config with European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// Only non-None fields are written.
#[derive(Clone, Debug, Default)]
pub struct CsvMetadata {
    /// Model name (e.g., "Linear yield")
    pub model_name: Option<String>,

    /// Target cumulative H₂ yield (kg)
    pub target_yield: Option<f64>,

    /// MCH fed per iteration (kg)
    pub mch_increment: Option<f64>,

    /// Temperature (°C)
    pub temperature: Option<f64>,

    /// Pressure (barg)
    pub pressure: Option<f64>,

    /// Selectivity
    pub selectivity: Option<f64>,

    /// Conversion rate
    pub conversion_rate: Option<f64>,

    /// Recycling rate
    pub recycling_rate: Option<f64>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Create metadata from a run configuration
    ///
    /// Temperature and pressure are only filled in for models that use them.
    pub fn from_config(model: &str, config: &SimulationConfig) -> Self {
        let reactor = config.model.uses_reactor_conditions();
        Self {
            model_name: Some(model.to_string()),
            target_yield: Some(config.target_yield),
            mch_increment: Some(config.mch_increment),
            temperature: reactor.then_some(config.temperature),
            pressure: reactor.then_some(config.pressure),
            selectivity: Some(config.selectivity),
            conversion_rate: Some(config.conversion_rate),
            recycling_rate: Some(config.recycling_rate),
            custom: Vec::new(),
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn write_metadata_header<W: Write>(out: &mut W, metadata: &CsvMetadata) -> std::io::Result<()> {
    writeln!(out, "# MCH Dehydrogenation Simulation Data")?;
    writeln!(out, "# Generated: {}", chrono::Utc::now().to_rfc3339())?;

    if let Some(model) = &metadata.model_name {
        writeln!(out, "# Model: {}", model)?;
    }
    if let Some(target) = metadata.target_yield {
        writeln!(out, "# Target H2 Yield: {} kg", target)?;
    }
    if let Some(increment) = metadata.mch_increment {
        writeln!(out, "# MCH Increment: {} kg", increment)?;
    }
    if let Some(t) = metadata.temperature {
        writeln!(out, "# Temperature: {} °C", t)?;
    }
    if let Some(p) = metadata.pressure {
        writeln!(out, "# Pressure: {} barg", p)?;
    }
    if let Some(s) = metadata.selectivity {
        writeln!(out, "# Selectivity: {}", s)?;
    }
    if let Some(x) = metadata.conversion_rate {
        writeln!(out, "# Conversion Rate: {}", x)?;
    }
    if let Some(r) = metadata.recycling_rate {
        writeln!(out, "# Recycling Rate: {}", r)?;
    }
    for (key, value) in &metadata.custom {
        writeln!(out, "# {}: {}", key, value)?;
    }

    writeln!(out, "#")
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

fn validate_result(result: &SimulationResult) -> Result<(), CsvError> {
    if result.is_empty() {
        return Err(CsvError::EmptyResult);
    }

    let expected = result.mch_usage.len();
    let series: [(&'static str, &[f64]); 4] = [
        ("mch_usage", &result.mch_usage),
        ("h2_yields", &result.h2_yields),
        ("remaining_mch", &result.remaining_mch),
        ("efficiency", &result.efficiency),
    ];

    for (name, values) in series {
        if values.len() != expected {
            return Err(CsvError::LengthMismatch { series: name, expected, found: values.len() });
        }
        if let Some(row) = values.iter().position(|v| !v.is_finite()) {
            return Err(CsvError::NonFinite { series: name, row });
        }
    }
    Ok(())
}

// =============================================================================
// Exporter
// =============================================================================

/// CSV implementation of [`Exporter`]
#[derive(Clone, Debug, Default)]
pub struct CsvExporter {
    config: CsvConfig,
}

impl CsvExporter {
    /// Create an exporter with a custom configuration
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }

    /// Current configuration
    pub fn config(&self) -> &CsvConfig {
        &self.config
    }

    /// Write `result` to any writer
    pub fn write_to<W: Write>(&self, result: &SimulationResult, out: &mut W) -> Result<(), CsvError> {
        validate_result(result)?;

        let config = &self.config;

        if config.include_metadata {
            if let Some(metadata) = &config.metadata {
                write_metadata_header(out, metadata)?;
            }
        }

        let delimiter = config.delimiter.to_string();
        writeln!(out, "{}", CSV_HEADERS.join(&delimiter))?;

        let matrix = result.to_matrix().ok_or(CsvError::EmptyResult)?;
        for (i, row) in matrix.row_iter().enumerate() {
            write!(out, "{}", i + 1)?;
            for value in row.iter() {
                write!(out, "{}{}", config.delimiter, format_number(*value, config))?;
            }
            writeln!(out)?;
        }

        Ok(())
    }
}

impl Exporter for CsvExporter {
    type Error = CsvError;

    fn export(&self, result: &SimulationResult, path: &str) -> Result<(), CsvError> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_to(result, &mut out)?;
        out.flush()?;
        Ok(())
    }
}

/// Export a simulation result to CSV
///
/// # Arguments
///
/// * `result` - Simulation result
/// * `output_path` - Output file path
/// * `configuration` - Optional CSV configuration (uses default if None)
///
/// # Errors
///
/// - Empty result
/// - Series of different lengths
/// - NaN or Inf values
/// - File creation errors
pub fn export_simulation_csv(
    result: &SimulationResult,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), CsvError> {
    let exporter = CsvExporter::new(configuration.cloned().unwrap_or_default());
    exporter.export(result, output_path)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ModelVariant;
    use crate::solver::run;
    use std::fs;
    use tempfile::NamedTempFile;

    fn default_result() -> SimulationResult {
        run(&SimulationConfig::default()).unwrap()
    }

    fn data_lines(content: &str) -> Vec<&str> {
        content.lines().filter(|l| !l.starts_with('#')).collect()
    }

    #[test]
    fn test_export_basic() {
        let result = default_result();
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        export_simulation_csv(&result, path, None).unwrap();

        let content = fs::read_to_string(path).unwrap();
        let lines = data_lines(&content);

        assert_eq!(lines[0], CSV_HEADERS.join(","));
        assert_eq!(lines.len(), result.iterations() + 1);
        assert!(lines[1].starts_with("1,1000.000000,43.62"));
    }

    #[test]
    fn test_export_european() {
        let result = default_result();
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        let config = CsvConfig::european().precision(2);
        export_simulation_csv(&result, path, Some(&config)).unwrap();

        let content = fs::read_to_string(path).unwrap();
        let lines = data_lines(&content);
        assert!(lines[0].contains(';'));
        assert!(lines[1].starts_with("1;1000,00;43,62"), "{}", lines[1]);
    }

    #[test]
    fn test_export_with_metadata() {
        let config = SimulationConfig::default().with_model(ModelVariant::Arrhenius);
        let result = run(&config).unwrap();

        let mut metadata = CsvMetadata::from_config("Arrhenius-corrected yield", &config);
        metadata.add_custom("Operator".to_string(), "test".to_string());
        let csv = CsvConfig::default().with_metadata(metadata);

        let mut buffer = Vec::new();
        CsvExporter::new(csv).write_to(&result, &mut buffer).unwrap();
        let content = String::from_utf8(buffer).unwrap();

        assert!(content.starts_with("# MCH Dehydrogenation Simulation Data"));
        assert!(content.contains("# Generated: "));
        assert!(content.contains("# Model: Arrhenius-corrected yield"));
        assert!(content.contains("# Temperature: 300 °C"));
        assert!(content.contains("# Pressure: 1 barg"));
        assert!(content.contains("# Operator: test"));
    }

    #[test]
    fn test_linear_metadata_omits_reactor_conditions() {
        let metadata = CsvMetadata::from_config("Linear yield", &SimulationConfig::default());
        assert!(metadata.temperature.is_none());
        assert!(metadata.pressure.is_none());
        assert_eq!(metadata.target_yield, Some(5000.0));
    }

    #[test]
    fn test_export_empty_result_fails() {
        let result = SimulationResult::new(10.0);
        let mut buffer = Vec::new();
        let err = CsvExporter::default().write_to(&result, &mut buffer).unwrap_err();
        assert!(matches!(err, CsvError::EmptyResult));
    }

    #[test]
    fn test_export_mismatched_series_fails() {
        let mut result = default_result();
        result.efficiency.pop();

        let mut buffer = Vec::new();
        let err = CsvExporter::default().write_to(&result, &mut buffer).unwrap_err();
        assert!(matches!(err, CsvError::LengthMismatch { series: "efficiency", .. }));
    }

    #[test]
    fn test_export_nan_fails() {
        let mut result = default_result();
        result.remaining_mch[2] = f64::NAN;

        let mut buffer = Vec::new();
        let err = CsvExporter::default().write_to(&result, &mut buffer).unwrap_err();
        assert!(matches!(err, CsvError::NonFinite { series: "remaining_mch", row: 2 }));
    }

    #[test]
    fn test_export_bad_path_fails() {
        let result = default_result();
        let err = export_simulation_csv(&result, "/nonexistent/dir/out.csv", None).unwrap_err();
        assert!(matches!(err, CsvError::Io(_)));
    }
}
