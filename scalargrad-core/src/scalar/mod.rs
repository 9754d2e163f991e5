// scalargrad-core/src/scalar/mod.rs
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::autograd::GradFn;

pub mod autograd_methods;

// --- Internal Data Structure ---

/// Holds the actual value and autograd metadata for a scalar node.
/// Uses `Rc<RefCell<...>>` for shared ownership and interior mutability:
/// the same node may be an operand of many downstream nodes.
pub(crate) struct ScalarData {
    /// The forward-computed value.
    pub(crate) data: f64,
    /// Gradient accumulator; meaningful only after a backward pass rooted
    /// at some output that reaches this node.
    pub(crate) grad: f64,
    /// The gradient rule recording how the node was produced.
    /// Leaf nodes (inputs and parameters) have `grad_fn = None`.
    pub(crate) grad_fn: Option<GradFn>,
    /// Optional human-readable tag for debugging; not load-bearing.
    pub(crate) label: Option<String>,
}

// --- Public Scalar Wrapper ---

/// The public, user-facing differentiable scalar.
///
/// Wraps the internal `ScalarData` in an `Rc<RefCell<>>` so that the
/// computation graph can share nodes freely while gradients stay mutable
/// in place during the backward pass.
pub struct Scalar(pub(crate) Rc<RefCell<ScalarData>>);

impl Scalar {
    /// Creates a new leaf node (an input or a parameter) with gradient 0.
    pub fn new(data: f64) -> Self {
        Scalar(Rc::new(RefCell::new(ScalarData {
            data,
            grad: 0.0,
            grad_fn: None,
            label: None,
        })))
    }

    /// Creates a leaf node carrying a debug label.
    pub fn with_label(data: f64, label: &str) -> Self {
        let scalar = Self::new(data);
        scalar.0.borrow_mut().label = Some(label.to_string());
        scalar
    }

    /// Creates a node produced by an operation. Every operator builds a
    /// strictly new node over pre-existing operands, which is what keeps
    /// the graph acyclic.
    pub(crate) fn from_op(data: f64, grad_fn: GradFn) -> Self {
        Scalar(Rc::new(RefCell::new(ScalarData {
            data,
            grad: 0.0,
            grad_fn: Some(grad_fn),
            label: None,
        })))
    }

    // --- Accessors ---

    /// Returns the forward value.
    pub fn data(&self) -> f64 {
        self.0.borrow().data
    }

    /// Overwrites the forward value. Intended for parameter updates between
    /// training steps; the recorded graph structure is untouched.
    pub fn set_data(&self, data: f64) {
        self.0.borrow_mut().data = data;
    }

    /// Returns the accumulated gradient.
    pub fn grad(&self) -> f64 {
        self.0.borrow().grad
    }

    /// True for nodes with no recorded producing operation.
    pub fn is_leaf(&self) -> bool {
        self.0.borrow().grad_fn.is_none()
    }

    /// Name of the producing operation, if any.
    pub fn op(&self) -> Option<&'static str> {
        self.0.borrow().grad_fn.as_ref().map(|f| f.name())
    }

    /// Returns the debug label, if one was set.
    pub fn label(&self) -> Option<String> {
        self.0.borrow().label.clone()
    }

    /// Sets the debug label.
    pub fn set_label(&self, label: &str) {
        self.0.borrow_mut().label = Some(label.to_string());
    }

    /// Temporary immutable access to the internal `ScalarData`.
    pub(crate) fn borrow_data(&self) -> Ref<ScalarData> {
        self.0.borrow()
    }

    /// Temporary mutable access to the internal `ScalarData`.
    pub(crate) fn borrow_data_mut(&self) -> RefMut<ScalarData> {
        self.0.borrow_mut()
    }
}

// --- Trait Implementations for the Scalar Wrapper ---

impl Clone for Scalar {
    /// Clones the handle (bumps the `Rc` count); the node itself is shared.
    fn clone(&self) -> Self {
        Scalar(Rc::clone(&self.0))
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0.borrow();
        f.debug_struct("Scalar")
            .field("data", &data.data)
            .field("grad", &data.grad)
            .field("op", &data.grad_fn.as_ref().map(|g| g.name()))
            .field("label", &data.label)
            .finish()
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0.borrow();
        write!(f, "Scalar(data={:.4}, grad={:.4})", data.data, data.grad)
    }
}

/// PartialEq for Scalar is pointer equality, consistent with Hash.
/// Two handles are equal only if they refer to the exact same graph vertex;
/// two nodes with coincidentally equal values stay distinct.
impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Scalar {}

impl Hash for Scalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.0).hash(state);
    }
}

// --- Tests ---
