use crate::error::Result;
use crate::loss::{check_non_empty, check_pair_lengths};

pub struct MaeLoss;

impl MaeLoss {
    /// Scalar MAE: mean(|predicted − target|)
    pub fn loss(predictions: &[f64], targets: &[f64]) -> Result<f64> {
        check_pair_lengths(predictions.len(), targets.len())?;
        check_non_empty(predictions.len())?;

        let n = predictions.len() as f64;
        let sum: f64 = predictions.iter().zip(targets.iter())
            .map(|(p, t)| (p - t).abs())
            .sum();
        Ok(sum / n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn averages_absolute_errors() {
        // errors: -1, 2 → (1 + 2) / 2
        let loss = MaeLoss::loss(&[1.0, 3.0], &[2.0, 1.0]).unwrap();
        assert!((loss - 1.5).abs() < 1e-12);
    }

    #[test]
    fn zero_when_predictions_match_targets() {
        assert_eq!(MaeLoss::loss(&[-2.0, 0.5], &[-2.0, 0.5]).unwrap(), 0.0);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        assert!(matches!(
            MaeLoss::loss(&[1.0], &[1.0, 2.0]),
            Err(Error::InvalidArgument(_))
        ));
    }
}
