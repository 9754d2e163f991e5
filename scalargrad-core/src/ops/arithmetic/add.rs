// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::GradFn;
use crate::scalar::Scalar;
use std::ops::Add;

// --- Forward Operation ---

/// Adds two scalars, recording the sum rule on the result node.
/// The gradient flows unchanged to both operands and is accumulated, so a
/// node feeding several consumers collects every contribution.
pub fn add_op(a: &Scalar, b: &Scalar) -> Scalar {
    Scalar::from_op(a.data() + b.data(), GradFn::Add(a.clone(), b.clone()))
}

// --- Operator Overloads ---

impl Add for &Scalar {
    type Output = Scalar;

    fn add(self, rhs: &Scalar) -> Scalar {
        add_op(self, rhs)
    }
}

impl Add for Scalar {
    type Output = Scalar;

    fn add(self, rhs: Scalar) -> Scalar {
        add_op(&self, &rhs)
    }
}

// Mixed literal forms box the f64 as a fresh leaf; no new semantics.

impl Add<f64> for &Scalar {
    type Output = Scalar;

    fn add(self, rhs: f64) -> Scalar {
        add_op(self, &Scalar::new(rhs))
    }
}

impl Add<f64> for Scalar {
    type Output = Scalar;

    fn add(self, rhs: f64) -> Scalar {
        add_op(&self, &Scalar::new(rhs))
    }
}

impl Add<&Scalar> for f64 {
    type Output = Scalar;

    fn add(self, rhs: &Scalar) -> Scalar {
        add_op(&Scalar::new(self), rhs)
    }
}

impl Add<Scalar> for f64 {
    type Output = Scalar;

    fn add(self, rhs: Scalar) -> Scalar {
        add_op(&Scalar::new(self), &rhs)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
