use crate::error::{Error, Result};
use crate::loss::{check_non_empty, check_pair_lengths};

/// Max-margin loss for binary classification with ±1 labels.
pub struct HingeLoss;

impl HingeLoss {
    /// Scalar hinge loss: mean(max(0, 1 − t·p))
    ///
    /// `predictions` are raw scores (not probabilities); `targets` must be
    /// exactly −1 or 1.
    pub fn loss(predictions: &[f64], targets: &[i32]) -> Result<f64> {
        check_pair_lengths(predictions.len(), targets.len())?;
        check_non_empty(predictions.len())?;

        let n = predictions.len() as f64;
        let mut sum = 0.0;
        for (p, &t) in predictions.iter().zip(targets.iter()) {
            if t != -1 && t != 1 {
                return Err(Error::InvalidArgument(format!(
                    "hinge targets must be -1 or 1 (got {t})"
                )));
            }
            sum += (1.0 - f64::from(t) * p).max(0.0);
        }
        Ok(sum / n)
    }
}
