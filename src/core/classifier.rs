//! Threshold rules. Each reading is classified on its own; no rule looks at
//! another reading.

use crate::domain::model::{Fertility, MoistureLevel, SoilReport, SoilSample, SoilType};

pub const ACIDIC_BELOW: f64 = 5.5;
pub const ALKALINE_ABOVE: f64 = 7.5;
pub const MOIST_FROM: f64 = 30.0;
pub const HIGH_FERTILITY_FROM: f64 = 50.0;

/// Both bounds of the neutral band are inclusive.
pub fn classify_ph(ph: f64) -> SoilType {
    if ph < ACIDIC_BELOW {
        SoilType::Acidic
    } else if ph <= ALKALINE_ABOVE {
        SoilType::Neutral
    } else {
        SoilType::Alkaline
    }
}

pub fn classify_moisture(moisture: f64) -> MoistureLevel {
    if moisture < MOIST_FROM {
        MoistureLevel::Dry
    } else {
        MoistureLevel::Moist
    }
}

pub fn classify_nitrogen(nitrogen: f64) -> Fertility {
    if nitrogen < HIGH_FERTILITY_FROM {
        Fertility::Low
    } else {
        Fertility::High
    }
}

pub fn classify(sample: SoilSample) -> SoilReport {
    SoilReport {
        sample,
        soil_type: classify_ph(sample.ph),
        moisture_level: classify_moisture(sample.moisture),
        fertility: classify_nitrogen(sample.nitrogen),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ph_bands() {
        assert_eq!(classify_ph(0.0), SoilType::Acidic);
        assert_eq!(classify_ph(5.499), SoilType::Acidic);
        assert_eq!(classify_ph(5.5), SoilType::Neutral);
        assert_eq!(classify_ph(7.0), SoilType::Neutral);
        assert_eq!(classify_ph(7.5), SoilType::Neutral);
        assert_eq!(classify_ph(7.501), SoilType::Alkaline);
        assert_eq!(classify_ph(14.0), SoilType::Alkaline);
    }

    #[test]
    fn test_moisture_boundary() {
        assert_eq!(classify_moisture(29.999), MoistureLevel::Dry);
        assert_eq!(classify_moisture(30.0), MoistureLevel::Moist);
        assert_eq!(classify_moisture(100.0), MoistureLevel::Moist);
    }

    #[test]
    fn test_nitrogen_boundary() {
        assert_eq!(classify_nitrogen(49.999), Fertility::Low);
        assert_eq!(classify_nitrogen(50.0), Fertility::High);
    }

    #[test]
    fn test_out_of_range_values_are_still_classified() {
        let report = classify(SoilSample::new(-3.0, 250.0, -10.0));
        assert_eq!(report.soil_type, SoilType::Acidic);
        assert_eq!(report.moisture_level, MoistureLevel::Moist);
        assert_eq!(report.fertility, Fertility::Low);

        assert_eq!(classify_ph(20.0), SoilType::Alkaline);
    }

    #[test]
    fn test_rules_are_independent() {
        let base = classify(SoilSample::new(6.0, 45.0, 60.0));

        for ph in [1.0, 5.5, 7.5, 9.0] {
            let changed = classify(SoilSample::new(ph, 45.0, 60.0));
            assert_eq!(changed.moisture_level, base.moisture_level);
            assert_eq!(changed.fertility, base.fertility);
        }

        for moisture in [0.0, 29.9, 30.0, 80.0] {
            let changed = classify(SoilSample::new(6.0, moisture, 60.0));
            assert_eq!(changed.soil_type, base.soil_type);
            assert_eq!(changed.fertility, base.fertility);
        }

        for nitrogen in [0.0, 49.9, 50.0, 500.0] {
            let changed = classify(SoilSample::new(6.0, 45.0, nitrogen));
            assert_eq!(changed.soil_type, base.soil_type);
            assert_eq!(changed.moisture_level, base.moisture_level);
        }
    }
}
