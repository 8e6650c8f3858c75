pub mod activation;
pub mod softmax;

pub use activation::ActivationFunction;
pub use softmax::{softmax, softmax_jacobian};
