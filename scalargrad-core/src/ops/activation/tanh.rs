// scalargrad-core/src/ops/activation/tanh.rs

use crate::autograd::GradFn;
use crate::scalar::Scalar;

// --- Forward Operation ---

/// Hyperbolic tangent, computed as (e^{2x} - 1) / (e^{2x} + 1).
/// The gradient rule uses the output value: d(tanh x)/dx = 1 - tanh(x)^2.
pub fn tanh_op(a: &Scalar) -> Scalar {
    let e2x = (2.0 * a.data()).exp();
    let t = (e2x - 1.0) / (e2x + 1.0);
    Scalar::from_op(t, GradFn::Tanh(a.clone()))
}

impl Scalar {
    /// Convenience method form of [`tanh_op`].
    pub fn tanh(&self) -> Scalar {
        tanh_op(self)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
