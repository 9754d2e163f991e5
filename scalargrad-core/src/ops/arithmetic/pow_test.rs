use super::*;
use approx::assert_relative_eq;

#[test]
fn test_pow_forward() {
    let a = Scalar::new(2.0);
    let c = pow_op(&a, 3.0);
    assert_eq!(c.data(), 8.0);
    assert_eq!(c.op(), Some("pow"));
}

#[test]
fn test_pow_backward() {
    let a = Scalar::new(2.0);
    let c = pow_op(&a, 3.0);

    c.backward();

    assert_eq!(a.grad(), 12.0); // 3 * 2^2
}

#[test]
fn test_pow_method_form() {
    let a = Scalar::new(4.0);
    let c = a.powf(0.5);
    assert_relative_eq!(c.data(), 2.0, epsilon = 1e-12);

    c.backward();
    // 1/(2*sqrt(4)) = 0.25
    assert_relative_eq!(a.grad(), 0.25, epsilon = 1e-12);
}

#[test]
fn test_pow_reciprocal() {
    // a^-1 is the building block of division.
    let a = Scalar::new(4.0);
    let c = pow_op(&a, -1.0);
    assert_relative_eq!(c.data(), 0.25, epsilon = 1e-12);

    c.backward();
    assert_relative_eq!(a.grad(), -1.0 / 16.0, epsilon = 1e-12);
}
