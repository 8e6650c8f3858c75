pub mod math;
pub mod error;
pub mod activation;
pub mod loss;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use error::{Error, Result};
pub use activation::activation::ActivationFunction;
pub use activation::softmax::{softmax, softmax_jacobian};
pub use loss::{
    BceLoss, CrossEntropyLoss, HingeLoss, HuberLoss, KlDivergenceLoss, LossType, MaeLoss,
    MseLoss, SparseCrossEntropyLoss,
};
