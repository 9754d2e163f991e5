// Core modules of the crate.
pub mod autograd;
pub mod ops;
pub mod scalar;
pub mod tensor;

// Consumer-facing modules built on top of the graph engine.
pub mod model;
pub mod nn;
pub mod optim;
pub mod utils;

pub mod error;

// Re-export the main types so they are reachable as `scalargrad_core::Scalar`.
pub use error::ScalarGradError;
pub use scalar::Scalar;
pub use tensor::Tensor;
