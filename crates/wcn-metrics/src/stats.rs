//! Summary operators reducing a metric array to one scalar per structure.
use crate::error::{ExtractError, Result};
use strum::EnumIter;

/// The fixed operator set applied to every metric.
///
/// An explicit registry: adding an operator means adding a variant, a
/// suffix, and an arm in [`Operator::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Operator {
    ArithmeticMean,
    GeometricMean,
    HarmonicMean,
}

impl Operator {
    /// Suffix used when forming `{metric}_{operator}` column names.
    pub fn column_suffix(&self) -> &'static str {
        match self {
            Operator::ArithmeticMean => "arithmetic_mean",
            Operator::GeometricMean => "geometric_mean",
            Operator::HarmonicMean => "harmonic_mean",
        }
    }

    pub fn apply(&self, values: &[f64]) -> Result<f64> {
        match self {
            Operator::ArithmeticMean => arithmetic_mean(values),
            Operator::GeometricMean => geometric_mean(values),
            Operator::HarmonicMean => harmonic_mean(values),
        }
    }
}

pub fn arithmetic_mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(ExtractError::Domain(
            "arithmetic mean of an empty array".to_string(),
        ));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Geometric mean over the absolute values of the input.
///
/// Signs are dropped before averaging; a zero element makes the mean
/// undefined and is a domain error.
pub fn geometric_mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(ExtractError::Domain(
            "geometric mean of an empty array".to_string(),
        ));
    }
    let mut log_sum = 0.0;
    for &v in values {
        let v = v.abs();
        if v == 0.0 {
            return Err(ExtractError::Domain(
                "geometric mean is undefined when any element is zero".to_string(),
            ));
        }
        log_sum += v.ln();
    }
    Ok((log_sum / values.len() as f64).exp())
}

/// Harmonic mean over the absolute values of the input.
pub fn harmonic_mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(ExtractError::Domain(
            "harmonic mean of an empty array".to_string(),
        ));
    }
    let mut reciprocal_sum = 0.0;
    for &v in values {
        let v = v.abs();
        if v == 0.0 {
            return Err(ExtractError::Domain(
                "harmonic mean is undefined when any element is zero".to_string(),
            ));
        }
        reciprocal_sum += 1.0 / v;
    }
    Ok(values.len() as f64 / reciprocal_sum)
}
