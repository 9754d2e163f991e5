// scalargrad-core/src/ops/arithmetic/sub.rs

use crate::ops::arithmetic::{add_op, neg_op};
use crate::scalar::Scalar;
use std::ops::Sub;

// --- Forward Operation ---

/// Subtraction, derived as a + (-b). Gradients fall out of the add and mul
/// rules of the building blocks.
pub fn sub_op(a: &Scalar, b: &Scalar) -> Scalar {
    add_op(a, &neg_op(b))
}

// --- Operator Overloads ---

impl Sub for &Scalar {
    type Output = Scalar;

    fn sub(self, rhs: &Scalar) -> Scalar {
        sub_op(self, rhs)
    }
}

impl Sub for Scalar {
    type Output = Scalar;

    fn sub(self, rhs: Scalar) -> Scalar {
        sub_op(&self, &rhs)
    }
}

impl Sub<f64> for &Scalar {
    type Output = Scalar;

    fn sub(self, rhs: f64) -> Scalar {
        sub_op(self, &Scalar::new(rhs))
    }
}

impl Sub<f64> for Scalar {
    type Output = Scalar;

    fn sub(self, rhs: f64) -> Scalar {
        sub_op(&self, &Scalar::new(rhs))
    }
}

impl Sub<&Scalar> for f64 {
    type Output = Scalar;

    fn sub(self, rhs: &Scalar) -> Scalar {
        sub_op(&Scalar::new(self), rhs)
    }
}

impl Sub<Scalar> for f64 {
    type Output = Scalar;

    fn sub(self, rhs: Scalar) -> Scalar {
        sub_op(&Scalar::new(self), &rhs)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
