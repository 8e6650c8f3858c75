use crate::error::Result;
use crate::loss::{check_non_empty, check_pair_lengths};

pub struct HuberLoss;

/// Default error threshold between the quadratic and linear regimes.
const DELTA: f64 = 1.0;

impl HuberLoss {
    /// Scalar Huber loss with the default δ = 1.0.
    pub fn loss(predictions: &[f64], targets: &[f64]) -> Result<f64> {
        Self::loss_with_delta(predictions, targets, DELTA)
    }

    /// Scalar Huber: mean(h(predicted − target))
    /// where h(e) = 0.5·e²            if |e| ≤ δ
    ///              δ·(|e| − 0.5·δ)   otherwise
    ///
    /// Quadratic near zero, linear past δ; the two pieces meet at |e| = δ.
    pub fn loss_with_delta(predictions: &[f64], targets: &[f64], delta: f64) -> Result<f64> {
        check_pair_lengths(predictions.len(), targets.len())?;
        check_non_empty(predictions.len())?;

        let n = predictions.len() as f64;
        let sum: f64 = predictions.iter().zip(targets.iter())
            .map(|(p, t)| {
                let e = p - t;
                if e.abs() <= delta {
                    0.5 * e * e
                } else {
                    delta * (e.abs() - 0.5 * delta)
                }
            })
            .sum();
        Ok(sum / n)
    }
}
