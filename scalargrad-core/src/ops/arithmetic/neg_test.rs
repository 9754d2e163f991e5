use super::*;

#[test]
fn test_neg_forward() {
    let a = Scalar::new(2.5);
    assert_eq!(neg_op(&a).data(), -2.5);
    assert_eq!((-&a).data(), -2.5);
    assert_eq!((-a).data(), -2.5);
}

#[test]
fn test_neg_backward() {
    let a = Scalar::new(2.5);
    let c = -&a;
    c.backward();
    assert_eq!(a.grad(), -1.0);
}
