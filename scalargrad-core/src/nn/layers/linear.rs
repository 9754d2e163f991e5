use crate::error::ScalarGradError;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::scalar::Scalar;
use crate::tensor::Tensor;
use rand::Rng;

/// A fully-connected layer: `out_features` neurons over a 1-D input of
/// `in_features` values.
#[derive(Debug)]
pub struct Linear {
    neurons: Vec<Neuron>,
    in_features: usize,
    out_features: usize,
}

impl Linear {
    /// Creates a new Linear layer.
    ///
    /// # Arguments
    ///
    /// * `in_features` - Size of each input sample.
    /// * `out_features` - Size of each output sample.
    /// * `nonlinear` - If `true`, every neuron applies tanh to its affine
    ///   output; the final layer of a network typically stays affine.
    /// * `rng` - Generator used for weight initialization.
    pub fn new<R: Rng>(
        in_features: usize,
        out_features: usize,
        nonlinear: bool,
        rng: &mut R,
    ) -> Self {
        let neurons = (0..out_features)
            .map(|_| Neuron::new(in_features, nonlinear, rng))
            .collect();
        Linear {
            neurons,
            in_features,
            out_features,
        }
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.out_features
    }
}

impl Module for Linear {
    fn forward(&self, input: &Tensor) -> Result<Tensor, ScalarGradError> {
        if input.shape() != [self.in_features] {
            return Err(ScalarGradError::ShapeMismatch {
                expected: vec![self.in_features],
                actual: input.shape().to_vec(),
                operation: "linear forward".to_string(),
            });
        }
        let outputs = self
            .neurons
            .iter()
            .map(|neuron| neuron.forward(input.storage()))
            .collect();
        Ok(Tensor::from_scalars(outputs))
    }

    fn parameters(&self) -> Vec<Scalar> {
        let mut params = Vec::new();
        for neuron in &self.neurons {
            params.extend(neuron.parameters());
        }
        params
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "linear_test.rs"]
mod tests;
