use crate::error::Result;
use crate::loss::{check_non_empty, check_pair_lengths};

pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted − target)²)
    pub fn loss(predictions: &[f64], targets: &[f64]) -> Result<f64> {
        check_pair_lengths(predictions.len(), targets.len())?;
        check_non_empty(predictions.len())?;

        let n = predictions.len() as f64;
        let sum: f64 = predictions.iter().zip(targets.iter())
            .map(|(p, t)| (p - t).powi(2))
            .sum();
        Ok(sum / n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn zero_when_predictions_match_targets() {
        assert_eq!(MseLoss::loss(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap(), 0.0);
    }

    #[test]
    fn unit_error_everywhere_gives_one() {
        assert_eq!(MseLoss::loss(&[0.0, 0.0], &[1.0, 1.0]).unwrap(), 1.0);
    }

    #[test]
    fn averages_squared_errors() {
        // errors: -1, 2 → (1 + 4) / 2
        let loss = MseLoss::loss(&[1.0, 3.0], &[2.0, 1.0]).unwrap();
        assert!((loss - 2.5).abs() < 1e-12);
    }

    #[test]
    fn rejects_mismatched_lengths_and_empty_input() {
        assert!(matches!(
            MseLoss::loss(&[1.0, 2.0], &[1.0]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(MseLoss::loss(&[], &[]), Err(Error::InvalidArgument(_))));
    }
}
