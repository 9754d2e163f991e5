use crate::scalar::{Scalar, ScalarData};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// Recursively builds a depth-first post-order of the operand graph.
/// Used by `backward()`: reversing the returned list yields a valid
/// reverse-topological order, so every node is processed only after all of
/// its consumers.
///
/// Visited tracking is by `Rc` pointer identity, never by value — two nodes
/// with equal data are distinct graph vertices.
pub(crate) fn build_topo(
    node: &Scalar,
    visited: &mut HashSet<*const RefCell<ScalarData>>,
    sorted_list: &mut Vec<Scalar>,
) {
    let node_ptr = Rc::as_ptr(&node.0);
    if visited.insert(node_ptr) {
        // Clone the rule out of the borrow before recursing; the recursion
        // borrows operand cells of its own.
        let grad_fn = node.0.borrow().grad_fn.clone();
        if let Some(grad_fn) = grad_fn {
            for input in grad_fn.inputs() {
                build_topo(&input, visited, sorted_list);
            }
        }
        // Append only after all operands have been appended (post-order).
        sorted_list.push(node.clone());
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::arithmetic::{add_op, mul_op};

    fn topo(root: &Scalar) -> Vec<Scalar> {
        let mut visited = HashSet::new();
        let mut sorted = Vec::new();
        build_topo(root, &mut visited, &mut sorted);
        sorted
    }

    fn position(order: &[Scalar], node: &Scalar) -> usize {
        order
            .iter()
            .position(|n| n == node)
            .expect("node missing from topological order")
    }

    #[test]
    fn test_operands_precede_results() {
        // Diamond: x feeds two branches that rejoin in z.
        let x = Scalar::new(1.5);
        let y1 = mul_op(&x, &Scalar::new(2.0));
        let y2 = mul_op(&x, &Scalar::new(3.0));
        let z = add_op(&y1, &y2);

        let order = topo(&z);
        assert_eq!(order.len(), 6); // x, two constants, y1, y2, z

        // Post-order invariant: every operand appears before its result, so
        // the reversed list replays consumers before producers.
        for node in &order {
            if let Some(grad_fn) = node.0.borrow().grad_fn.as_ref() {
                for input in grad_fn.inputs() {
                    assert!(
                        position(&order, &input) < position(&order, node),
                        "operand ordered after its result"
                    );
                }
            }
        }
        assert_eq!(position(&order, &z), order.len() - 1);
    }

    #[test]
    fn test_shared_node_visited_once() {
        let x = Scalar::new(2.0);
        let y = add_op(&x, &x); // same vertex on both edges
        let order = topo(&y);
        assert_eq!(order.len(), 2);
        assert_eq!(order[0], x);
        assert_eq!(order[1], y);
    }

    #[test]
    fn test_equal_values_are_distinct_vertices() {
        // Two leaves with identical data must both appear: identity, not
        // structure, decides visitation.
        let a = Scalar::new(7.0);
        let b = Scalar::new(7.0);
        let c = add_op(&a, &b);
        let order = topo(&c);
        assert_eq!(order.len(), 3);
    }
}
