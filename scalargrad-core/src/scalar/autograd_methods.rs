// scalargrad-core/src/scalar/autograd_methods.rs
use crate::autograd::graph::build_topo;
use crate::scalar::Scalar;
use std::collections::HashSet;

impl Scalar {
    /// Runs the backward pass rooted at this node, computing
    /// d(self)/d(node) for every node reachable through the operand graph.
    ///
    /// The pass linearizes the graph once with a depth-first post-order
    /// (O(V+E)), seeds `self.grad = 1.0`, then replays each node's gradient
    /// rule in reverse-topological order: a node's rule runs only after its
    /// own gradient has received every consumer contribution.
    ///
    /// Gradients are never reset here. Zeroing between passes is the
    /// caller's responsibility (see [`Scalar::zero_grad`]); calling
    /// `backward` twice on overlapping graphs without zeroing adds the
    /// contributions together.
    pub fn backward(&self) {
        let mut visited = HashSet::new();
        let mut sorted_nodes = Vec::new();
        build_topo(self, &mut visited, &mut sorted_nodes);

        log::debug!("backward: replaying {} nodes", sorted_nodes.len());

        // d(self)/d(self) = 1. Assigned, not accumulated: the seed defines
        // this pass regardless of stale state on the root.
        self.0.borrow_mut().grad = 1.0;

        for node in sorted_nodes.iter().rev() {
            let (out_data, out_grad, grad_fn) = {
                let data = node.borrow_data();
                (data.data, data.grad, data.grad_fn.clone())
            };
            if let Some(grad_fn) = grad_fn {
                grad_fn.apply(out_data, out_grad);
            }
        }
    }

    /// Resets the accumulated gradient to zero.
    pub fn zero_grad(&self) {
        self.0.borrow_mut().grad = 0.0;
    }

    /// Adds a contribution to the gradient accumulator.
    pub(crate) fn accumulate_grad(&self, delta: f64) {
        self.borrow_data_mut().grad += delta;
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
