use std::fmt;

/// Validation failures raised by loss functions and the softmax Jacobian.
///
/// Every failure aborts the computation at the point of detection; there is
/// no partial result or recovery path. Callers validate or catch at the
/// boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Mismatched sequence lengths, empty required input, or labels outside
    /// the accepted set (e.g. hinge targets that are not -1 or 1).
    InvalidArgument(String),
    /// Probability values outside [0, 1], or a class index outside
    /// [0, number of classes).
    OutOfRange(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Error::OutOfRange(msg) => write!(f, "out of range: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
