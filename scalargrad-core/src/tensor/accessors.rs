// scalargrad-core/src/tensor/accessors.rs

use crate::scalar::Scalar;
use crate::tensor::utils::linear_index;
use crate::tensor::Tensor;

impl Tensor {
    /// The shape (dimensions) of the tensor.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Total number of elements.
    pub fn numel(&self) -> usize {
        self.storage.len()
    }

    /// The flat, row-major storage of scalar nodes.
    pub fn storage(&self) -> &[Scalar] {
        &self.storage
    }

    /// Returns the node at the given multi-dimensional indices (a shared
    /// handle, not a copy of the value).
    ///
    /// Panics on out-of-range indices or a rank mismatch.
    pub fn get(&self, indices: &[usize]) -> Scalar {
        self.storage[linear_index(indices, &self.shape)].clone()
    }

    /// Replaces the node at the given multi-dimensional indices.
    ///
    /// Panics on out-of-range indices or a rank mismatch.
    pub fn set(&mut self, indices: &[usize], value: Scalar) {
        let index = linear_index(indices, &self.shape);
        self.storage[index] = value;
    }

    /// Forward values of all cells in storage order.
    pub fn values(&self) -> Vec<f64> {
        self.storage.iter().map(|s| s.data()).collect()
    }

    /// Accumulated gradients of all cells in storage order.
    pub fn grads(&self) -> Vec<f64> {
        self.storage.iter().map(|s| s.grad()).collect()
    }
}

// --- Tests ---
