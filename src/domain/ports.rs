use crate::domain::model::SoilSample;
use crate::utils::error::Result;

/// Anything that can yield one sample of readings.
pub trait SampleSource {
    fn read_sample(&mut self) -> Result<SoilSample>;
    fn describe(&self) -> String;
}

impl SampleSource for Box<dyn SampleSource> {
    fn read_sample(&mut self) -> Result<SoilSample> {
        (**self).read_sample()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
