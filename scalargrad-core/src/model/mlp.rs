use crate::error::ScalarGradError;
use crate::nn::layers::linear::Linear;
use crate::nn::module::Module;
use crate::scalar::Scalar;
use crate::tensor::Tensor;
use rand::Rng;

/// A multi-layer perceptron: a stack of [`Linear`] layers where every
/// hidden layer applies tanh and the output layer stays affine.
#[derive(Debug)]
pub struct Mlp {
    layers: Vec<Linear>,
}

impl Mlp {
    /// Builds an MLP from the input width and the widths of the following
    /// layers. `Mlp::new(3, &[4, 4, 1], rng)` is a 3→4→4→1 network with two
    /// nonlinear hidden layers.
    pub fn new<R: Rng>(in_features: usize, layer_sizes: &[usize], rng: &mut R) -> Self {
        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut previous = in_features;
        for (i, &size) in layer_sizes.iter().enumerate() {
            let nonlinear = i + 1 < layer_sizes.len();
            layers.push(Linear::new(previous, size, nonlinear, rng));
            previous = size;
        }
        Mlp { layers }
    }

    pub fn layers(&self) -> &[Linear] {
        &self.layers
    }
}

impl Module for Mlp {
    fn forward(&self, input: &Tensor) -> Result<Tensor, ScalarGradError> {
        let mut current = input.clone();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<Scalar> {
        let mut params = Vec::new();
        for layer in &self.layers {
            params.extend(layer.parameters());
        }
        params
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
