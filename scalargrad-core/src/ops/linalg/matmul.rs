// scalargrad-core/src/ops/linalg/matmul.rs

use crate::error::ScalarGradError;
use crate::ops::arithmetic::{add_op, mul_op};
use crate::scalar::Scalar;
use crate::tensor::Tensor;

// --- Forward Operation ---

/// Standard dense 2-D matrix product with declared shape
/// `[a.rows, b.cols]`.
///
/// Valid only for 2-D operands with `a.shape[1] == b.shape[0]`;
/// incompatible shapes are returned as `ScalarGradError::IncompatibleShapes`
/// without touching either input. Each output cell is the mul/add
/// expression `Σ_k a[i,k] * b[k,j]` over scalar nodes, so the product is
/// fully differentiable like the element-wise operations.
pub fn matmul_op(a: &Tensor, b: &Tensor) -> Result<Tensor, ScalarGradError> {
    let a_shape = a.shape();
    let b_shape = b.shape();

    if a_shape.len() != 2 || b_shape.len() != 2 {
        return Err(ScalarGradError::IncompatibleShapes {
            shape1: a_shape.to_vec(),
            shape2: b_shape.to_vec(),
            operation: "matmul (both operands must be 2-D)".to_string(),
        });
    }
    if a_shape[1] != b_shape[0] {
        return Err(ScalarGradError::IncompatibleShapes {
            shape1: a_shape.to_vec(),
            shape2: b_shape.to_vec(),
            operation: "matmul (inner dimensions must agree)".to_string(),
        });
    }

    let (m, k, n) = (a_shape[0], a_shape[1], b_shape[1]);
    let mut storage = Vec::with_capacity(m * n);
    for i in 0..m {
        for j in 0..n {
            let cell = if k == 0 {
                Scalar::new(0.0)
            } else {
                let mut acc = mul_op(&a.get(&[i, 0]), &b.get(&[0, j]));
                for p in 1..k {
                    acc = add_op(&acc, &mul_op(&a.get(&[i, p]), &b.get(&[p, j])));
                }
                acc
            };
            storage.push(cell);
        }
    }
    Ok(Tensor::from_parts(storage, vec![m, n]))
}

// --- Tests ---
#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;
