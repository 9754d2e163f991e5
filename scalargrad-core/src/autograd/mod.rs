// The autograd machinery: the per-operator gradient rules, the graph
// traversal used by `Scalar::backward`, and a finite-difference checker.

pub mod grad_check;
pub mod grad_fn;
pub mod graph;

pub use grad_check::{check_grad, GradCheckError};
pub use grad_fn::GradFn;
