// scalargrad-core/src/tensor/create.rs

use crate::error::ScalarGradError;
use crate::scalar::Scalar;
use crate::tensor::utils::numel_of;
use crate::tensor::Tensor;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

impl Tensor {
    /// Creates a tensor from raw values and a shape; every cell becomes a
    /// fresh leaf node.
    ///
    /// # Errors
    /// Returns `ScalarGradError::TensorCreationError` if the number of
    /// values does not match the product of the shape dimensions.
    pub fn new(values: Vec<f64>, shape: Vec<usize>) -> Result<Tensor, ScalarGradError> {
        let numel = numel_of(&shape);
        if values.len() != numel {
            return Err(ScalarGradError::TensorCreationError {
                data_len: values.len(),
                shape,
            });
        }
        let storage = values.into_iter().map(Scalar::new).collect();
        Ok(Tensor { storage, shape })
    }

    /// Creates a 1-D tensor from existing scalar nodes, shape `[len]`.
    /// The nodes are shared, not copied — this is the bridge from
    /// graph-valued expressions back into tensor form.
    pub fn from_scalars(values: Vec<Scalar>) -> Tensor {
        let shape = vec![values.len()];
        Tensor {
            storage: values,
            shape,
        }
    }

    /// Wraps a single scalar node as a `[1]` tensor.
    pub fn from_scalar(value: Scalar) -> Tensor {
        Tensor {
            storage: vec![value],
            shape: vec![1],
        }
    }

    /// Creates a tensor where every cell holds `fill`.
    ///
    /// Each cell gets its own fresh leaf node: cells never alias one
    /// another, so per-cell gradients stay independent.
    pub fn full(fill: f64, shape: &[usize]) -> Tensor {
        let storage = (0..numel_of(shape)).map(|_| Scalar::new(fill)).collect();
        Tensor {
            storage,
            shape: shape.to_vec(),
        }
    }

    /// Creates a tensor of uniform samples in `[0, 1)` from the given
    /// generator. Randomness is always threaded explicitly so runs are
    /// reproducible from a seed.
    pub fn rand<R: Rng>(shape: &[usize], rng: &mut R) -> Tensor {
        let storage = (0..numel_of(shape))
            .map(|_| Scalar::new(rng.gen::<f64>()))
            .collect();
        Tensor {
            storage,
            shape: shape.to_vec(),
        }
    }

    /// Creates a tensor of standard-normal samples from the given generator.
    pub fn randn<R: Rng>(shape: &[usize], rng: &mut R) -> Tensor {
        let storage = (0..numel_of(shape))
            .map(|_| Scalar::new(StandardNormal.sample(rng)))
            .collect();
        Tensor {
            storage,
            shape: shape.to_vec(),
        }
    }

    /// Internal constructor for operation results; the caller guarantees
    /// the storage length matches the shape.
    pub(crate) fn from_parts(storage: Vec<Scalar>, shape: Vec<usize>) -> Tensor {
        debug_assert_eq!(storage.len(), numel_of(&shape));
        Tensor { storage, shape }
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
