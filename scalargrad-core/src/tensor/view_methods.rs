// scalargrad-core/src/tensor/view_methods.rs

use crate::error::ScalarGradError;
use crate::tensor::utils::numel_of;
use crate::tensor::Tensor;

impl Tensor {
    /// Reinterprets the tensor under a new shape without touching storage.
    ///
    /// Succeeds iff the new shape addresses exactly as many elements as the
    /// current one; otherwise the tensor is left unchanged and
    /// `ScalarGradError::ViewShapeMismatch` is returned.
    pub fn view(&mut self, new_shape: &[usize]) -> Result<(), ScalarGradError> {
        if numel_of(new_shape) != self.storage.len() {
            return Err(ScalarGradError::ViewShapeMismatch {
                current: self.storage.len(),
                requested: new_shape.to_vec(),
            });
        }
        self.shape = new_shape.to_vec();
        Ok(())
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "view_methods_test.rs"]
mod tests;
