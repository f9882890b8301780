use crate::core::classifier;
use crate::core::SampleSource;
use crate::domain::model::SoilReport;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub struct ClassifierEngine<S: SampleSource> {
    source: S,
    format: OutputFormat,
}

impl<S: SampleSource> ClassifierEngine<S> {
    pub fn new(source: S, format: OutputFormat) -> Self {
        Self { source, format }
    }

    /// Reads one sample, classifies it and writes the report in a single write.
    /// On any error `out` is left untouched.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<SoilReport> {
        tracing::debug!("Reading sample from {}", self.source.describe());
        let sample = self.source.read_sample()?;
        tracing::debug!(
            "Sample: ph={} moisture={} nitrogen={}",
            sample.ph,
            sample.moisture,
            sample.nitrogen
        );

        let report = classifier::classify(sample);
        tracing::debug!(
            "Classified as {} / {} / {}",
            report.soil_type,
            report.moisture_level,
            report.fertility
        );

        let rendered = match self.format {
            OutputFormat::Text => report.render_text(),
            OutputFormat::Json => report.render_json()?,
        };

        out.write_all(rendered.as_bytes())?;
        out.flush()?;

        Ok(report)
    }
}
