// scalargrad-core/src/tensor/autograd_methods.rs

use crate::error::ScalarGradError;
use crate::tensor::Tensor;

impl Tensor {
    /// Runs the backward pass rooted at this tensor's single element.
    ///
    /// Only scalar tensors (total element count 1) can seed a backward
    /// pass; on a multi-element tensor this is a recoverable error and the
    /// graph is untouched.
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        if self.storage.len() != 1 {
            return Err(ScalarGradError::BackwardNonScalar {
                numel: self.storage.len(),
            });
        }
        self.storage[0].backward();
        Ok(())
    }

    /// Zeroes the gradient accumulator of every cell. The backward pass
    /// never resets gradients itself; calling this between training steps
    /// is the caller's side of the contract.
    pub fn zero_grad(&self) {
        for scalar in &self.storage {
            scalar.zero_grad();
        }
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
