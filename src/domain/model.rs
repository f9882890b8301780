use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilSample {
    pub ph: f64,
    pub moisture: f64,
    pub nitrogen: f64,
}

impl SoilSample {
    pub fn new(ph: f64, moisture: f64, nitrogen: f64) -> Self {
        Self {
            ph,
            moisture,
            nitrogen,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoilType {
    #[serde(rename = "Acidic Soil")]
    Acidic,
    #[serde(rename = "Neutral Soil")]
    Neutral,
    #[serde(rename = "Alkaline Soil")]
    Alkaline,
}

impl SoilType {
    pub fn label(&self) -> &'static str {
        match self {
            SoilType::Acidic => "Acidic Soil",
            SoilType::Neutral => "Neutral Soil",
            SoilType::Alkaline => "Alkaline Soil",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoistureLevel {
    Dry,
    Moist,
}

impl MoistureLevel {
    pub fn label(&self) -> &'static str {
        match self {
            MoistureLevel::Dry => "Dry",
            MoistureLevel::Moist => "Moist",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fertility {
    #[serde(rename = "Low Fertility")]
    Low,
    #[serde(rename = "High Fertility")]
    High,
}

impl Fertility {
    pub fn label(&self) -> &'static str {
        match self {
            Fertility::Low => "Low Fertility",
            Fertility::High => "High Fertility",
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for MoistureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Fertility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The three labels computed for one sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilReport {
    pub sample: SoilSample,
    pub soil_type: SoilType,
    pub moisture_level: MoistureLevel,
    pub fertility: Fertility,
}

impl SoilReport {
    pub fn render_text(&self) -> String {
        format!(
            "Soil Type: {}\nMoisture Level: {}\nFertility: {}\n",
            self.soil_type, self.moisture_level, self.fertility
        )
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string(self)?;
        json.push('\n');
        Ok(json)
    }
}
