// Demo binary: evaluates a few activations and a softmax Jacobian.
// All of the actual math lives in the library (src/lib.rs and its modules).
use neurofn::{softmax_jacobian, ActivationFunction};

fn main() -> neurofn::Result<()> {
    let x = 3.892;
    let y = -2.0;

    println!("relu({x}) = {}", ActivationFunction::Relu.function(x));
    println!("sigmoid({}) = {}", -x, ActivationFunction::Sigmoid.function(-x));
    println!("tanh({x}) = {}", ActivationFunction::Tanh.function(x));
    println!("leaky_relu({y}) = {}", ActivationFunction::LeakyRelu.function(y));
    println!("elu({x}) = {}", ActivationFunction::elu().function(x));

    let logits = [1.0, 2.0, 3.0];
    let jacobian = softmax_jacobian(&logits)?;
    println!("softmax jacobian of {logits:?}:");
    for i in 0..jacobian.rows {
        println!("  {:?}", jacobian.row(i));
    }
    Ok(())
}
