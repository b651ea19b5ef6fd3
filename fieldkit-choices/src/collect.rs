//! Set and aggregation helpers over ordered string collections.

use crate::error::{ChoicesError, Result};

/// Elements of `required` that are absent from `have`, in `required` order.
pub fn missing(have: &[String], required: &[String]) -> Vec<String> {
    required
        .iter()
        .filter(|r| !have.contains(r))
        .cloned()
        .collect()
}

/// Numeric mean of the entries, rounded to `decimals` places.
///
/// Every entry must parse as a number; the first that doesn't fails the
/// whole aggregation.
pub fn average(values: &[String], decimals: usize) -> Result<f64> {
    if values.is_empty() {
        return Err(ChoicesError::Empty);
    }
    let mut sum = 0.0;
    for value in values {
        let n: f64 = value
            .trim()
            .parse()
            .map_err(|_| ChoicesError::NonNumeric {
                text: value.clone(),
            })?;
        sum += n;
    }
    let mean = sum / values.len() as f64;
    let factor = 10f64.powi(decimals as i32);
    Ok((mean * factor).round() / factor)
}
