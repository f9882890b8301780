use crate::config::sources::{ArgsSource, ReaderSource};
use crate::core::engine::OutputFormat;
use crate::core::{Result, SampleSource};
use crate::utils::parse::FIELD_ORDER;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "soil-classifier")]
#[command(about = "Classify a soil sample from pH, moisture and nitrogen readings")]
pub struct CliConfig {
    /// pH, moisture and nitrogen; used only when exactly three are given,
    /// otherwise the readings are read from --input or stdin
    #[arg(value_name = "READINGS", allow_negative_numbers = true)]
    pub readings: Vec<String>,

    /// Read the readings from a file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit log records as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    pub fn source(&self) -> Result<Box<dyn SampleSource>> {
        if self.readings.len() == FIELD_ORDER.len() {
            return Ok(Box::new(ArgsSource::new(self.readings.clone())));
        }
        if !self.readings.is_empty() {
            tracing::debug!(
                "Ignoring {} positional argument(s): {:?}",
                self.readings.len(),
                self.readings
            );
        }
        match &self.input {
            Some(path) => Ok(Box::new(ReaderSource::from_file(path)?)),
            None => Ok(Box::new(ReaderSource::stdin())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["soil-classifier"]);
        assert!(config.readings.is_empty());
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.source().unwrap().describe(), "stdin");
    }

    #[test]
    fn test_positional_readings_allow_negatives() {
        let config = CliConfig::parse_from(["soil-classifier", "-1.5", "20", "30"]);
        assert_eq!(config.readings, vec!["-1.5", "20", "30"]);

        let mut source = config.source().unwrap();
        assert_eq!(source.describe(), "command-line arguments");
        assert_eq!(source.read_sample().unwrap().ph, -1.5);
    }

    #[test]
    fn test_other_argument_counts_fall_back_to_stdin() {
        let config = CliConfig::parse_from(["soil-classifier", "6.0", "45"]);
        assert_eq!(config.source().unwrap().describe(), "stdin");

        let config = CliConfig::parse_from(["soil-classifier", "6.0", "45", "60", "7"]);
        assert_eq!(config.source().unwrap().describe(), "stdin");
    }

    #[test]
    fn test_json_format_and_input_flag() {
        let config =
            CliConfig::parse_from(["soil-classifier", "--format", "json", "-i", "readings.txt"]);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.input, Some(PathBuf::from("readings.txt")));
    }

    #[test]
    fn test_partial_readings_fall_back_to_input_file() {
        let config = CliConfig::parse_from(["soil-classifier", "-i", "/nonexistent/r.txt", "6"]);
        match config.source() {
            Err(e) => assert_eq!(e.exit_code(), 3),
            Ok(source) => panic!("expected missing file, got {}", source.describe()),
        }
    }
}
