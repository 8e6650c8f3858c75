use crate::error::{Error, Result};
use crate::loss::{check_non_empty, check_pair_lengths};

/// Categorical cross-entropy over one-hot targets.
pub struct CrossEntropyLoss;

impl CrossEntropyLoss {
    /// Scalar CCE: −mean over samples of Σ_j [t_j = 1]·ln(p_j)
    ///
    /// `predictions[i]` is a per-class probability distribution for sample i;
    /// `targets[i]` is the matching one-hot vector. Outer lengths and each
    /// sample's inner lengths must agree.
    ///
    /// Known limitation: a predicted probability of exactly 0 on the hot
    /// class is NOT clamped and yields −ln(0) = +inf. Pre-clip predictions
    /// if that can occur.
    pub fn loss(predictions: &[Vec<f64>], targets: &[Vec<f64>]) -> Result<f64> {
        check_pair_lengths(predictions.len(), targets.len())?;
        check_non_empty(predictions.len())?;

        let n = predictions.len() as f64;
        let mut sum = 0.0;
        for (i, (p, t)) in predictions.iter().zip(targets.iter()).enumerate() {
            if p.len() != t.len() {
                return Err(Error::InvalidArgument(format!(
                    "sample {i}: prediction and target must have the same number \
                     of classes (got {} and {})",
                    p.len(),
                    t.len()
                )));
            }
            for (p_j, t_j) in p.iter().zip(t.iter()) {
                if *t_j == 1.0 {
                    sum -= p_j.ln();
                }
            }
        }
        Ok(sum / n)
    }
}
