use crate::error::ScalarGradError;
use crate::scalar::Scalar;
use crate::tensor::Tensor;

/// The base trait for all neural network modules (layers, containers, etc.).
///
/// The engine is single-threaded by design (nodes are `Rc`-shared), so
/// unlike frameworks built around thread-safe tensors there are no
/// `Send`/`Sync` bounds here.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Errors
    /// Returns `ScalarGradError` if the input shape does not match what the
    /// module expects.
    fn forward(&self, input: &Tensor) -> Result<Tensor, ScalarGradError>;

    /// Returns all learnable parameters of the module, including those of
    /// sub-modules, as shared scalar handles.
    fn parameters(&self) -> Vec<Scalar>;

    /// Zeroes the gradient of every parameter. Called between training
    /// steps; the backward pass itself never resets gradients.
    fn zero_grad(&self) {
        for parameter in self.parameters() {
            parameter.zero_grad();
        }
    }
}
