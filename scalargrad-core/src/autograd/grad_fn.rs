use crate::scalar::Scalar;

/// Gradient rule attached to every non-leaf node.
///
/// Each operation that creates a node stores the variant describing how to
/// propagate the node's gradient to its operands during the backward pass.
/// The operator set is closed, so a tagged enum carrying just the operand
/// handles (plus the pow exponent) replaces per-node closures and keeps the
/// whole rule set in one exhaustively testable place. Leaf nodes carry no
/// rule at all (`grad_fn: None`).
#[derive(Debug, Clone)]
pub enum GradFn {
    /// out = a + b
    Add(Scalar, Scalar),
    /// out = a * b
    Mul(Scalar, Scalar),
    /// out = base ^ exponent, exponent a plain constant
    Pow(Scalar, f64),
    /// out = tanh(input)
    Tanh(Scalar),
}

impl GradFn {
    /// Propagates `out_grad` to the operands according to the chain rule.
    ///
    /// `out_data` is the forward value of the node this rule belongs to
    /// (needed by Tanh, whose derivative is expressed through its output).
    /// Contributions are always accumulated with `+=`, never assigned:
    /// a node fanning out to several consumers must sum their contributions.
    pub(crate) fn apply(&self, out_data: f64, out_grad: f64) {
        match self {
            GradFn::Add(a, b) => {
                a.accumulate_grad(out_grad);
                b.accumulate_grad(out_grad);
            }
            GradFn::Mul(a, b) => {
                // Read both forward values before mutating either gradient:
                // a and b may be the same node (e.g. x * x).
                let a_data = a.data();
                let b_data = b.data();
                a.accumulate_grad(b_data * out_grad);
                b.accumulate_grad(a_data * out_grad);
            }
            GradFn::Pow(base, exponent) => {
                let x = base.data();
                base.accumulate_grad(exponent * x.powf(exponent - 1.0) * out_grad);
            }
            GradFn::Tanh(input) => {
                input.accumulate_grad((1.0 - out_data * out_data) * out_grad);
            }
        }
    }

    /// Operand handles of the producing operation, in forward-pass order.
    /// Used by the topological sort to walk edges from result to operands.
    pub(crate) fn inputs(&self) -> Vec<Scalar> {
        match self {
            GradFn::Add(a, b) | GradFn::Mul(a, b) => vec![a.clone(), b.clone()],
            GradFn::Pow(a, _) | GradFn::Tanh(a) => vec![a.clone()],
        }
    }

    /// Short operator name for debug output.
    pub(crate) fn name(&self) -> &'static str {
        match self {
            GradFn::Add(..) => "add",
            GradFn::Mul(..) => "mul",
            GradFn::Pow(..) => "pow",
            GradFn::Tanh(..) => "tanh",
        }
    }
}

// --- Tests ---
// One rule per variant, checked in isolation with a hand-seeded output grad.
