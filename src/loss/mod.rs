pub mod mse;
pub mod mae;
pub mod bce;
pub mod cross_entropy;
pub mod sparse_cross_entropy;
pub mod kl_divergence;
pub mod hinge;
pub mod huber;
pub mod loss_type;

pub use mse::MseLoss;
pub use mae::MaeLoss;
pub use bce::BceLoss;
pub use cross_entropy::CrossEntropyLoss;
pub use sparse_cross_entropy::SparseCrossEntropyLoss;
pub use kl_divergence::KlDivergenceLoss;
pub use hinge::HingeLoss;
pub use huber::HuberLoss;
pub use loss_type::LossType;

use crate::error::{Error, Result};

/// Every loss pairs predictions with targets element-wise.
pub(crate) fn check_pair_lengths(predictions: usize, targets: usize) -> Result<()> {
    if predictions != targets {
        return Err(Error::InvalidArgument(format!(
            "predictions and targets must have the same length (got {predictions} and {targets})"
        )));
    }
    Ok(())
}

/// A mean over zero samples is undefined; reject rather than return NaN.
pub(crate) fn check_non_empty(len: usize) -> Result<()> {
    if len == 0 {
        return Err(Error::InvalidArgument(
            "predictions and targets must not be empty".into(),
        ));
    }
    Ok(())
}

pub(crate) fn check_probability(value: f64, what: &str) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(Error::OutOfRange(format!(
            "{what} must be in [0, 1] (got {value})"
        )));
    }
    Ok(())
}
