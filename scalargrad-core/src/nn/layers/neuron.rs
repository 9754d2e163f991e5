use crate::nn::init;
use crate::ops::activation::tanh_op;
use crate::ops::arithmetic::{add_op, mul_op};
use crate::scalar::Scalar;
use rand::Rng;

/// A single unit computing `w · x + b`, optionally squashed through tanh.
///
/// Weights are drawn uniformly from [-1, 1); the bias starts at zero.
#[derive(Debug)]
pub struct Neuron {
    weights: Vec<Scalar>,
    bias: Scalar,
    nonlinear: bool,
}

impl Neuron {
    pub fn new<R: Rng>(in_features: usize, nonlinear: bool, rng: &mut R) -> Self {
        Neuron {
            weights: init::uniform(in_features, -1.0, 1.0, rng),
            bias: Scalar::new(0.0),
            nonlinear,
        }
    }

    /// Builds the affine expression over the given inputs.
    /// The caller guarantees `inputs.len() == in_features` (the layer checks
    /// the tensor shape before fanning out to its neurons).
    pub fn forward(&self, inputs: &[Scalar]) -> Scalar {
        assert_eq!(
            inputs.len(),
            self.weights.len(),
            "Neuron expects {} inputs, got {}",
            self.weights.len(),
            inputs.len()
        );
        let mut activation = self.bias.clone();
        for (weight, input) in self.weights.iter().zip(inputs) {
            activation = add_op(&activation, &mul_op(weight, input));
        }
        if self.nonlinear {
            tanh_op(&activation)
        } else {
            activation
        }
    }

    pub fn parameters(&self) -> Vec<Scalar> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    pub fn in_features(&self) -> usize {
        self.weights.len()
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
