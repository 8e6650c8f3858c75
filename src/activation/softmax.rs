use crate::error::{Error, Result};
use crate::math::matrix::Matrix;

/// Numerically stable softmax: p_i = e^(z_i − max z) / Σ_j e^(z_j − max z).
///
/// Subtracting the max logit keeps the exponentials in (0, 1] so large
/// logits cannot overflow. Requires at least one logit.
pub fn softmax(logits: &[f64]) -> Result<Vec<f64>> {
    if logits.is_empty() {
        return Err(Error::InvalidArgument(
            "softmax requires at least one logit".into(),
        ));
    }

    let max_logit = logits.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|z| (z - max_logit).exp()).collect();
    let sum: f64 = exps.iter().sum();
    Ok(exps.into_iter().map(|e| e / sum).collect())
}

/// Full n×n Jacobian of softmax with respect to its logits:
///
///   J[i][i] = p_i · (1 − p_i)
///   J[i][j] = −p_i · p_j        (i ≠ j)
///
/// Each row sums to zero, since softmax outputs are constrained to sum to 1.
pub fn softmax_jacobian(logits: &[f64]) -> Result<Matrix> {
    let p = softmax(logits)?;
    let n = p.len();

    let mut jacobian = Matrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            jacobian.data[i][j] = if i == j {
                p[i] * (1.0 - p[i])
            } else {
                -p[i] * p[j]
            };
        }
    }
    Ok(jacobian)
}
