use serde::{Serialize, Deserialize};
use std::f64::consts::PI;

/// Negative-half slope for LeakyReLU, and the PReLU starting slope.
const LEAKY_ALPHA: f64 = 0.01;
/// Default saturation scale for ELU.
const ELU_ALPHA: f64 = 1.0;

/// Scalar activation functions used element-wise in a network layer.
///
/// Every variant is a pure map `f(x) → y`; all real inputs are valid and
/// there are no side effects. Softmax is vector-valued and lives in
/// [`crate::activation::softmax`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    Identity,
    BinaryStep,
    Relu,
    /// max(0.01·x, x) — the fixed-slope convention.
    LeakyRelu,
    /// max(α·x, x) with a caller-chosen (in a network, learned) α.
    PRelu { alpha: f64 },
    Sigmoid,
    Tanh,
    Elu { alpha: f64 },
    Softplus,
    Softsign,
    Swish,
    Mish,
    Gelu,
    Gaussian,
    Sinusoid,
}

impl ActivationFunction {
    /// PReLU with the conventional starting slope α = 0.01.
    pub fn prelu() -> ActivationFunction {
        ActivationFunction::PRelu { alpha: LEAKY_ALPHA }
    }

    /// ELU with α = 1.0.
    pub fn elu() -> ActivationFunction {
        ActivationFunction::Elu { alpha: ELU_ALPHA }
    }

    /// Element-wise activation.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Identity => x,
            ActivationFunction::BinaryStep => if x >= 0.0 { 1.0 } else { 0.0 },
            ActivationFunction::Relu => x.max(0.0),
            ActivationFunction::LeakyRelu => (LEAKY_ALPHA * x).max(x),
            ActivationFunction::PRelu { alpha } => (alpha * x).max(x),
            ActivationFunction::Sigmoid => sigmoid(x),
            ActivationFunction::Tanh => x.tanh(),
            ActivationFunction::Elu { alpha } => {
                if x > 0.0 { x } else { alpha * (x.exp() - 1.0) }
            }
            ActivationFunction::Softplus => (1.0 + x.exp()).ln(),
            ActivationFunction::Softsign => x / (1.0 + x.abs()),
            ActivationFunction::Swish => x * sigmoid(x),
            ActivationFunction::Mish => x * (1.0 + x.exp()).ln().tanh(),
            ActivationFunction::Gelu => {
                let c = (2.0 / PI).sqrt();
                0.5 * x * (1.0 + (c * (x + 0.044715 * x.powi(3))).tanh())
            }
            ActivationFunction::Gaussian => (-x * x).exp(),
            ActivationFunction::Sinusoid => x.sin(),
        }
    }

    /// Analytic derivative of the activation, evaluated at `x`.
    ///
    /// Two deliberate approximations, kept as the formulas are published:
    /// - `BinaryStep` is not differentiable; this returns 0 at x = 0 and 1
    ///   everywhere else (including x < 0).
    /// - `Gelu` reuses the tanh-approximation's inner term loosely rather
    ///   than differentiating the exact GELU.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Identity => 1.0,
            ActivationFunction::BinaryStep => if x == 0.0 { 0.0 } else { 1.0 },
            ActivationFunction::Relu => if x > 0.0 { 1.0 } else { 0.0 },
            ActivationFunction::LeakyRelu => if x > 0.0 { 1.0 } else { LEAKY_ALPHA },
            ActivationFunction::PRelu { alpha } => if x > 0.0 { 1.0 } else { *alpha },
            ActivationFunction::Sigmoid => {
                let s = sigmoid(x);
                s * (1.0 - s)
            }
            ActivationFunction::Tanh => {
                let t = x.tanh();
                1.0 - t * t
            }
            ActivationFunction::Elu { alpha } => {
                if x > 0.0 { 1.0 } else { alpha * x.exp() }
            }
            ActivationFunction::Softplus => sigmoid(x),
            ActivationFunction::Softsign => {
                let denom = 1.0 + x.abs();
                1.0 / (denom * denom)
            }
            ActivationFunction::Swish => {
                let s = sigmoid(x);
                s + x * s * (1.0 - s)
            }
            ActivationFunction::Mish => {
                let exp_x = x.exp();
                let t = (1.0 + exp_x).ln().tanh();
                t + x * (exp_x / (1.0 + exp_x)) * (1.0 - t * t)
            }
            ActivationFunction::Gelu => {
                let c = (2.0 / PI).sqrt();
                let t = (c * (x + 0.044715 * x.powi(3))).tanh();
                // 0.134145 = 3 · 0.044715
                0.5 * (1.0 + t) + 0.5 * x * c * (1.0 + 0.134145 * x.powi(2)) * (1.0 - t * t)
            }
            ActivationFunction::Gaussian => -2.0 * x * (-x * x).exp(),
            ActivationFunction::Sinusoid => x.cos(),
        }
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [f64; 5] = [-5.0, -1.0, 0.0, 1.0, 5.0];

    #[test]
    fn fixed_values() {
        assert_eq!(ActivationFunction::Sigmoid.function(0.0), 0.5);
        assert_eq!(ActivationFunction::Relu.function(-5.0), 0.0);
        assert_eq!(ActivationFunction::Relu.function(5.0), 5.0);
        assert_eq!(ActivationFunction::Tanh.function(0.0), 0.0);
        assert_eq!(ActivationFunction::Identity.function(3.25), 3.25);
        assert_eq!(ActivationFunction::BinaryStep.function(0.0), 1.0);
        assert_eq!(ActivationFunction::BinaryStep.function(-0.1), 0.0);
    }

    #[test]
    fn output_ranges() {
        for &x in &SAMPLES {
            let s = ActivationFunction::Sigmoid.function(x);
            assert!(s > 0.0 && s < 1.0);
            let t = ActivationFunction::Tanh.function(x);
            assert!(t > -1.0 && t < 1.0);
            assert!(ActivationFunction::Relu.function(x) >= 0.0);
            let g = ActivationFunction::Gaussian.function(x);
            assert!(g > 0.0 && g <= 1.0);
            let ss = ActivationFunction::Softsign.function(x);
            assert!(ss > -1.0 && ss < 1.0);
            assert!(ActivationFunction::Softplus.function(x) > 0.0);
        }
    }

    #[test]
    fn leaky_variants_scale_negative_inputs() {
        assert_eq!(ActivationFunction::LeakyRelu.function(-2.0), -0.02);
        assert_eq!(ActivationFunction::PRelu { alpha: 0.2 }.function(-2.0), -0.4);
        assert_eq!(ActivationFunction::prelu().function(3.0), 3.0);
    }

    #[test]
    fn elu_saturates_toward_minus_alpha() {
        let elu = ActivationFunction::elu();
        assert_eq!(elu.function(2.0), 2.0);
        let y = elu.function(-10.0);
        assert!(y > -1.0 && y < -0.99);
    }

    /// Central-difference check: f'(x) ≈ (f(x+h) − f(x−h)) / 2h.
    ///
    /// BinaryStep is excluded (its stated derivative approximates a
    /// non-differentiable step), and the piecewise-linear functions skip the
    /// kink at x = 0, where the analytic one-sided choice cannot match a
    /// symmetric difference.
    #[test]
    fn derivative_matches_finite_difference() {
        let h = 1e-5;
        let cases = [
            (ActivationFunction::Identity, false),
            (ActivationFunction::Relu, true),
            (ActivationFunction::LeakyRelu, true),
            (ActivationFunction::PRelu { alpha: 0.1 }, true),
            (ActivationFunction::Sigmoid, false),
            (ActivationFunction::Tanh, false),
            (ActivationFunction::elu(), false),
            (ActivationFunction::Softplus, false),
            (ActivationFunction::Softsign, false),
            (ActivationFunction::Swish, false),
            (ActivationFunction::Mish, false),
            (ActivationFunction::Gaussian, false),
            (ActivationFunction::Sinusoid, false),
        ];

        for (f, skip_zero) in cases {
            for &x in &SAMPLES {
                if skip_zero && x == 0.0 {
                    continue;
                }
                let numeric = (f.function(x + h) - f.function(x - h)) / (2.0 * h);
                let analytic = f.derivative(x);
                assert!(
                    (analytic - numeric).abs() < 1e-3,
                    "{f:?} at x={x}: analytic {analytic} vs numeric {numeric}"
                );
            }
        }
    }

    #[test]
    fn gelu_derivative_tracks_published_approximation() {
        // The approximation stays close to the true slope away from the tails.
        let h = 1e-5;
        let gelu = ActivationFunction::Gelu;
        for &x in &[-1.0, 0.0, 1.0] {
            let numeric = (gelu.function(x + h) - gelu.function(x - h)) / (2.0 * h);
            assert!((gelu.derivative(x) - numeric).abs() < 1e-3);
        }
    }

    #[test]
    fn serde_uses_snake_case_names() {
        assert_eq!(
            serde_json::to_string(&ActivationFunction::Gelu).unwrap(),
            r#""gelu""#
        );
        let json = serde_json::to_string(&ActivationFunction::prelu()).unwrap();
        assert_eq!(json, r#"{"p_relu":{"alpha":0.01}}"#);
        let back: ActivationFunction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ActivationFunction::prelu());
    }
}
