pub mod classifier;
pub mod engine;

pub use crate::domain::model::{SoilReport, SoilSample};
pub use crate::domain::ports::SampleSource;
pub use crate::utils::error::Result;
