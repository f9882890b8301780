pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{ArgsSource, ReaderSource};
pub use core::classifier::classify;
pub use core::engine::{ClassifierEngine, OutputFormat};
pub use domain::model::{Fertility, MoistureLevel, SoilReport, SoilSample, SoilType};
pub use domain::ports::SampleSource;
pub use utils::error::{Result, SoilError};
