// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::GradFn;
use crate::scalar::Scalar;

// --- Forward Operation ---

/// Raises a scalar to a constant power, recording the power rule on the
/// result node: d(a^n)/da = n * a^(n-1). The exponent is a plain constant,
/// not a graph node.
pub fn pow_op(base: &Scalar, exponent: f64) -> Scalar {
    Scalar::from_op(
        base.data().powf(exponent),
        GradFn::Pow(base.clone(), exponent),
    )
}

impl Scalar {
    /// Convenience method form of [`pow_op`].
    pub fn powf(&self, exponent: f64) -> Scalar {
        pow_op(self, exponent)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
