use super::*;
use crate::ops::arithmetic::mul_op;
use approx::assert_relative_eq;

#[test]
fn test_sgd_step_moves_against_gradient() {
    let a = Scalar::new(2.0);
    let b = Scalar::new(3.0);
    let loss = mul_op(&a, &b); // d/da = 3, d/db = 2
    loss.backward();

    let mut optimizer = Sgd::new(vec![a.clone(), b.clone()], 0.1);
    optimizer.step().unwrap();

    assert_relative_eq!(a.data(), 2.0 - 0.1 * 3.0, epsilon = 1e-12);
    assert_relative_eq!(b.data(), 3.0 - 0.1 * 2.0, epsilon = 1e-12);
}

#[test]
fn test_sgd_zero_grad() {
    let a = Scalar::new(2.0);
    let loss = mul_op(&a, &a);
    loss.backward();
    assert_ne!(a.grad(), 0.0);

    let mut optimizer = Sgd::new(vec![a.clone()], 0.1);
    optimizer.zero_grad();
    assert_eq!(a.grad(), 0.0);
}

#[test]
fn test_sgd_converges_on_quadratic() {
    // Minimize (x - 4)^2 from x = 0.
    let x = Scalar::new(0.0);
    let mut optimizer = Sgd::new(vec![x.clone()], 0.1);

    for _ in 0..100 {
        optimizer.zero_grad();
        let loss = (&x - 4.0).powf(2.0);
        loss.backward();
        optimizer.step().unwrap();
    }

    assert_relative_eq!(x.data(), 4.0, epsilon = 1e-6);
}

#[test]
fn test_sgd_lr_accessors() {
    let mut optimizer = Sgd::new(vec![], 0.1);
    assert_eq!(optimizer.lr(), 0.1);
    optimizer.set_lr(0.01);
    assert_eq!(optimizer.lr(), 0.01);
}
