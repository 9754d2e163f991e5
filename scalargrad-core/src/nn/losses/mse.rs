// scalargrad-core/src/nn/losses/mse.rs

use crate::error::ScalarGradError;
use crate::ops::arithmetic::{add_op, mul_op, pow_op, sub_op};
use crate::scalar::Scalar;
use crate::tensor::Tensor;

/// Specifies the reduction applied to the per-element squared errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reduction {
    Mean,
    Sum,
}

/// Mean Squared Error loss between prediction and target tensors.
///
/// The loss is an ordinary graph expression — squared differences folded
/// together with scalar adds — so a backward pass through the result drives
/// gradients into every prediction node.
#[derive(Debug, Clone)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    /// Computes the loss as a `[1]` tensor ready for `backward()`.
    ///
    /// # Errors
    /// Returns `ScalarGradError::ShapeMismatch` if the prediction and
    /// target shapes differ.
    pub fn calculate(&self, input: &Tensor, target: &Tensor) -> Result<Tensor, ScalarGradError> {
        if input.shape() != target.shape() {
            return Err(ScalarGradError::ShapeMismatch {
                expected: input.shape().to_vec(),
                actual: target.shape().to_vec(),
                operation: "mse loss".to_string(),
            });
        }

        let mut total: Option<Scalar> = None;
        for (prediction, truth) in input.storage().iter().zip(target.storage().iter()) {
            let squared = pow_op(&sub_op(prediction, truth), 2.0);
            total = Some(match total {
                None => squared,
                Some(acc) => add_op(&acc, &squared),
            });
        }
        let mut loss = total.unwrap_or_else(|| Scalar::new(0.0));

        if self.reduction == Reduction::Mean && input.numel() > 0 {
            loss = mul_op(&loss, &Scalar::new(1.0 / input.numel() as f64));
        }
        Ok(Tensor::from_scalar(loss))
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
