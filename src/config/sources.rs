use crate::core::{Result, SampleSource, SoilSample};
use crate::utils::error::SoilError;
use crate::utils::parse::{parse_reading, parse_sample, FIELD_ORDER};
use std::fs::File;
use std::io::{BufRead, BufReader, StdinLock};
use std::path::Path;

/// Reads whitespace-separated readings from a buffered stream.
///
/// Input is consumed line by line and reading stops after the line that
/// completes the third value. A caller that keeps the pipe open must still
/// terminate that line with a newline.
#[derive(Debug)]
pub struct ReaderSource<R: BufRead> {
    reader: R,
    name: String,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R, name: impl Into<String>) -> Self {
        Self {
            reader,
            name: name.into(),
        }
    }
}

impl ReaderSource<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(std::io::stdin().lock(), "stdin")
    }
}

impl ReaderSource<BufReader<File>> {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file), path.display().to_string()))
    }
}

impl<R: BufRead> SampleSource for ReaderSource<R> {
    fn read_sample(&mut self) -> Result<SoilSample> {
        let mut values = Vec::with_capacity(FIELD_ORDER.len());
        let mut ignored = 0usize;
        let mut line = Vec::new();

        while values.len() < FIELD_ORDER.len() {
            line.clear();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }

            // Only the first three tokens must be UTF-8; later tokens are not decoded.
            for token in line
                .split(u8::is_ascii_whitespace)
                .filter(|token| !token.is_empty())
            {
                if values.len() == FIELD_ORDER.len() {
                    ignored += 1;
                    continue;
                }
                let field_name = FIELD_ORDER[values.len()];
                let token = std::str::from_utf8(token)
                    .map_err(|_| SoilError::malformed(field_name, "input is not valid UTF-8"))?;
                values.push(parse_reading(field_name, token)?);
            }
        }

        if values.len() < FIELD_ORDER.len() {
            return Err(SoilError::malformed(
                FIELD_ORDER[values.len()],
                "missing value",
            ));
        }
        if ignored > 0 {
            tracing::debug!("Ignoring {} trailing token(s) from {}", ignored, self.name);
        }

        Ok(SoilSample::new(values[0], values[1], values[2]))
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}

/// Readings given directly as command-line arguments.
#[derive(Debug, Clone)]
pub struct ArgsSource {
    args: Vec<String>,
}

impl ArgsSource {
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }
}

impl SampleSource for ArgsSource {
    fn read_sample(&mut self) -> Result<SoilSample> {
        parse_sample(&self.args)
    }

    fn describe(&self) -> String {
        "command-line arguments".to_string()
    }
}
