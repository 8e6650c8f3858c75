use crate::error::Result;
use crate::loss::{check_non_empty, check_pair_lengths, check_probability};

pub struct BceLoss;

impl BceLoss {
    /// Scalar BCE: −mean(t·ln(p) + (1−t)·ln(1−p))
    ///
    /// Both predictions and targets must lie in [0, 1].
    ///
    /// Known limitation: predictions of exactly 0 or 1 are NOT clamped, so a
    /// confident wrong prediction yields ln(0) = −inf (and 0·ln(0) = NaN).
    /// Callers that cannot rule those values out must pre-clip predictions
    /// away from the endpoints.
    pub fn loss(predictions: &[f64], targets: &[f64]) -> Result<f64> {
        check_pair_lengths(predictions.len(), targets.len())?;
        check_non_empty(predictions.len())?;

        let n = predictions.len() as f64;
        let mut sum = 0.0;
        for (p, t) in predictions.iter().zip(targets.iter()) {
            check_probability(*p, "predictions")?;
            check_probability(*t, "targets")?;
            sum += t * p.ln() + (1.0 - t) * (1.0 - p).ln();
        }
        Ok(-sum / n)
    }
}
