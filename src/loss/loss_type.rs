use serde::{Serialize, Deserialize};

/// Serializable name of a loss function, for configs and experiment logs.
///
/// - `Mse` / `Mae` / `Huber` — regression losses over paired float sequences.
/// - `BinaryCrossEntropy` — probabilities vs 0/1 targets; pair with Sigmoid.
/// - `CategoricalCrossEntropy` — per-class distributions vs one-hot targets;
///   pair with Softmax.
/// - `SparseCategoricalCrossEntropy` — same, with class-index targets.
/// - `KlDivergence` — distance between two distributions.
/// - `Hinge` — max-margin scores vs ±1 labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossType {
    Mse,
    Mae,
    BinaryCrossEntropy,
    CategoricalCrossEntropy,
    SparseCategoricalCrossEntropy,
    KlDivergence,
    Hinge,
    Huber,
}
