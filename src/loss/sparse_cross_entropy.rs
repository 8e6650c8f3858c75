use crate::error::{Error, Result};
use crate::loss::{check_non_empty, check_pair_lengths};

/// Categorical cross-entropy with integer class-index targets instead of
/// one-hot vectors.
pub struct SparseCrossEntropyLoss;

impl SparseCrossEntropyLoss {
    /// Scalar sparse CCE: −mean(ln(predictions[i][targets[i]]))
    ///
    /// `targets[i]` is the true class index for sample i and must be within
    /// `[0, predictions[i].len())`.
    ///
    /// Known limitation: a predicted probability of exactly 0 on the true
    /// class is NOT clamped and yields −ln(0) = +inf.
    pub fn loss(predictions: &[Vec<f64>], targets: &[usize]) -> Result<f64> {
        check_pair_lengths(predictions.len(), targets.len())?;
        check_non_empty(predictions.len())?;

        let n = predictions.len() as f64;
        let mut sum = 0.0;
        for (i, (p, &class)) in predictions.iter().zip(targets.iter()).enumerate() {
            if class >= p.len() {
                return Err(Error::OutOfRange(format!(
                    "sample {i}: class index {class} is out of range for {} classes",
                    p.len()
                )));
            }
            sum -= p[class].ln();
        }
        Ok(sum / n)
    }
}
