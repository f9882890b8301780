use crate::domain::model::SoilSample;
use crate::utils::error::{Result, SoilError};

/// Reading names in the order they are consumed.
pub const FIELD_ORDER: [&str; 3] = ["pH", "moisture", "nitrogen"];

pub fn parse_reading(field_name: &str, token: &str) -> Result<f64> {
    let value: f64 = token.trim().parse().map_err(|_| {
        SoilError::malformed(field_name, format!("'{}' is not a decimal number", token))
    })?;

    if !value.is_finite() {
        return Err(SoilError::malformed(
            field_name,
            format!("'{}' is not a finite number", token),
        ));
    }

    Ok(value)
}

/// Builds a sample from the first three tokens. Extra tokens are ignored.
pub fn parse_sample<S: AsRef<str>>(tokens: &[S]) -> Result<SoilSample> {
    let mut values = [0.0_f64; 3];

    for (i, field_name) in FIELD_ORDER.iter().enumerate() {
        let token = tokens
            .get(i)
            .ok_or_else(|| SoilError::malformed(field_name, "missing value"))?;
        values[i] = parse_reading(field_name, token.as_ref())?;
    }

    if tokens.len() > FIELD_ORDER.len() {
        tracing::debug!(
            "Ignoring {} trailing token(s)",
            tokens.len() - FIELD_ORDER.len()
        );
    }

    Ok(SoilSample::new(values[0], values[1], values[2]))
}
