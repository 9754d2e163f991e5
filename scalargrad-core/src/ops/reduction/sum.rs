// scalargrad-core/src/ops/reduction/sum.rs

use crate::ops::arithmetic::add_op;
use crate::scalar::Scalar;
use crate::tensor::Tensor;

// --- Forward Operation ---

/// Reduces all elements of a tensor to a single `[1]` output cell.
///
/// The reduction is a left fold of scalar add nodes, so it participates in
/// the gradient graph: after a backward pass through the result, every
/// input cell receives gradient 1 (times the upstream gradient), the usual
/// broadcast derivative of a sum.
pub fn sum_op(tensor: &Tensor) -> Tensor {
    let mut cells = tensor.storage().iter();
    let total = match cells.next() {
        None => Scalar::new(0.0),
        Some(first) => cells.fold(first.clone(), |acc, cell| add_op(&acc, cell)),
    };
    Tensor::from_scalar(total)
}

// --- Tests ---
#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
