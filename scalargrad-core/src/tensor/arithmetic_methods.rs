// scalargrad-core/src/tensor/arithmetic_methods.rs

use crate::error::ScalarGradError;
use crate::ops::activation::tanh_op;
use crate::ops::arithmetic::{add_op, mul_op};
use crate::scalar::Scalar;
use crate::tensor::Tensor;

impl Tensor {
    /// Element-wise addition. Shapes must match exactly — there is no
    /// broadcasting — and a mismatch mutates neither input.
    pub fn add(&self, other: &Tensor) -> Result<Tensor, ScalarGradError> {
        self.zip_elementwise(other, "add", add_op)
    }

    /// Element-wise multiplication under the same exact-shape contract.
    pub fn mul(&self, other: &Tensor) -> Result<Tensor, ScalarGradError> {
        self.zip_elementwise(other, "mul", mul_op)
    }

    /// Element-wise tanh; shape unchanged, gradients preserved.
    pub fn tanh(&self) -> Tensor {
        let storage = self.storage.iter().map(tanh_op).collect();
        Tensor::from_parts(storage, self.shape.clone())
    }

    /// Pairs up storage cells of two same-shaped tensors under a scalar op,
    /// producing a brand-new tensor of brand-new output nodes.
    fn zip_elementwise(
        &self,
        other: &Tensor,
        operation: &str,
        op: fn(&Scalar, &Scalar) -> Scalar,
    ) -> Result<Tensor, ScalarGradError> {
        if self.shape != other.shape {
            return Err(ScalarGradError::ShapeMismatch {
                expected: self.shape.clone(),
                actual: other.shape.clone(),
                operation: operation.to_string(),
            });
        }
        let storage = self
            .storage
            .iter()
            .zip(other.storage.iter())
            .map(|(a, b)| op(a, b))
            .collect();
        Ok(Tensor::from_parts(storage, self.shape.clone()))
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "arithmetic_methods_test.rs"]
mod tests;
