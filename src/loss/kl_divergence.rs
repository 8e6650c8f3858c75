use crate::error::{Error, Result};
use crate::loss::{check_non_empty, check_pair_lengths, check_probability};

/// Kullback–Leibler divergence KL(targets ‖ predictions).
pub struct KlDivergenceLoss;

impl KlDivergenceLoss {
    /// Mean over samples of Σ_j t_j·ln(t_j / p_j).
    ///
    /// `targets[i]` is the true distribution and `predictions[i]` the
    /// predicted one; all values must lie in [0, 1]. Terms where t_j = 0
    /// contribute nothing (lim t→0 of t·ln t = 0) and are skipped.
    ///
    /// Known limitation: p_j = 0 with t_j > 0 is NOT clamped and yields +inf.
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
                check_probability(*p_j, "predictions")?;
                check_probability(*t_j, "targets")?;
                if *t_j == 0.0 {
                    continue;
                }
                sum += t_j * (t_j / p_j).ln();
            }
        }
        Ok(sum / n)
    }
}
