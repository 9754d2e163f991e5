// scalargrad-core/src/ops/arithmetic/div.rs

use crate::ops::arithmetic::{mul_op, pow_op};
use crate::scalar::Scalar;
use std::ops::Div;

// --- Forward Operation ---

/// Division, derived as a * b^-1.
///
/// Division by a zero-valued operand is a recoverable condition, not an
/// error: a warning is logged and a detached NaN leaf is returned, letting
/// the NaN propagate through downstream forward values.
pub fn div_op(a: &Scalar, b: &Scalar) -> Scalar {
    if b.data() == 0.0 {
        log::warn!(
            "division by zero-valued scalar (numerator {}); returning NaN",
            a.data()
        );
        return Scalar::new(f64::NAN);
    }
    mul_op(a, &pow_op(b, -1.0))
}

// --- Operator Overloads ---

impl Div for &Scalar {
    type Output = Scalar;

    fn div(self, rhs: &Scalar) -> Scalar {
        div_op(self, rhs)
    }
}

impl Div for Scalar {
    type Output = Scalar;

    fn div(self, rhs: Scalar) -> Scalar {
        div_op(&self, &rhs)
    }
}

impl Div<f64> for &Scalar {
    type Output = Scalar;

    fn div(self, rhs: f64) -> Scalar {
        div_op(self, &Scalar::new(rhs))
    }
}

impl Div<f64> for Scalar {
    type Output = Scalar;

    fn div(self, rhs: f64) -> Scalar {
        div_op(&self, &Scalar::new(rhs))
    }
}

impl Div<&Scalar> for f64 {
    type Output = Scalar;

    fn div(self, rhs: &Scalar) -> Scalar {
        div_op(&Scalar::new(self), rhs)
    }
}

impl Div<Scalar> for f64 {
    type Output = Scalar;

    fn div(self, rhs: Scalar) -> Scalar {
        div_op(&Scalar::new(self), &rhs)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
