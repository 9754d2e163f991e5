use super::*;

#[test]
fn test_sum_forward() {
    let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
    let s = sum_op(&t);
    assert_eq!(s.shape(), &[1]);
    assert_eq!(s.values(), vec![10.0]);
}

#[test]
fn test_sum_is_differentiable() {
    // d(sum)/d(cell) = 1 for every cell.
    let t = Tensor::new(vec![1.0, 2.0, 3.0], vec![3]).unwrap();
    let s = t.sum();

    s.backward().unwrap();

    assert_eq!(t.grads(), vec![1.0, 1.0, 1.0]);
}

#[test]
fn test_sum_single_element_shares_node() {
    let t = Tensor::new(vec![5.0], vec![1]).unwrap();
    let s = sum_op(&t);
    // A one-cell fold has nothing to add; the input node passes through.
    assert_eq!(s.get(&[0]), t.get(&[0]));
}

#[test]
fn test_sum_of_empty_is_zero_leaf() {
    let t = Tensor::from_scalars(vec![]);
    let s = sum_op(&t);
    assert_eq!(s.values(), vec![0.0]);
    assert!(s.get(&[0]).is_leaf());
}

#[test]
fn test_sum_weighted_gradient() {
    // loss = 2 * sum(t): every cell's grad is 2.
    let t = Tensor::new(vec![1.0, 4.0], vec![2]).unwrap();
    let s = t.sum();
    let loss = &s.get(&[0]) * 2.0;

    loss.backward();

    assert_eq!(t.grads(), vec![2.0, 2.0]);
}
