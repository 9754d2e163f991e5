// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::GradFn;
use crate::scalar::Scalar;
use std::ops::Mul;

// --- Forward Operation ---

/// Multiplies two scalars, recording the product rule on the result node:
/// each operand receives the other operand's forward value times the
/// upstream gradient.
pub fn mul_op(a: &Scalar, b: &Scalar) -> Scalar {
    Scalar::from_op(a.data() * b.data(), GradFn::Mul(a.clone(), b.clone()))
}

// --- Operator Overloads ---

impl Mul for &Scalar {
    type Output = Scalar;

    fn mul(self, rhs: &Scalar) -> Scalar {
        mul_op(self, rhs)
    }
}

impl Mul for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Scalar) -> Scalar {
        mul_op(&self, &rhs)
    }
}

impl Mul<f64> for &Scalar {
    type Output = Scalar;

    fn mul(self, rhs: f64) -> Scalar {
        mul_op(self, &Scalar::new(rhs))
    }
}

impl Mul<f64> for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: f64) -> Scalar {
        mul_op(&self, &Scalar::new(rhs))
    }
}

impl Mul<&Scalar> for f64 {
    type Output = Scalar;

    fn mul(self, rhs: &Scalar) -> Scalar {
        mul_op(&Scalar::new(self), rhs)
    }
}

impl Mul<Scalar> for f64 {
    type Output = Scalar;

    fn mul(self, rhs: Scalar) -> Scalar {
        mul_op(&Scalar::new(self), &rhs)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
