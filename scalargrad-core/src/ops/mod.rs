//! # Graph Operations Module (`ops`)
//!
//! Central hub for the operations that build the computation graph,
//! grouped by category:
//!
//! - [`arithmetic`]: scalar add/sub/mul/div/neg/pow, plus the operator
//!   overloads (including mixed `f64` forms).
//! - [`activation`]: tanh.
//! - [`linalg`]: the 2-D matrix product over tensors.
//! - [`reduction`]: the all-elements tensor sum.
//!
//! Each operation has a core `xxx_op` function that performs the forward
//! computation and records the gradient rule on the result node. Tensor
//! methods delegate to these functions.

pub mod activation;
pub mod arithmetic;
pub mod linalg;
pub mod reduction;
