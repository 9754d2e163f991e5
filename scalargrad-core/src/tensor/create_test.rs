use crate::error::ScalarGradError;
use crate::scalar::Scalar;
use crate::tensor::Tensor;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_new_checks_length() {
    let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]).unwrap();
    assert_eq!(t.shape(), &[2, 3]);
    assert_eq!(t.numel(), 6);

    let err = Tensor::new(vec![1.0, 2.0], vec![2, 3]).unwrap_err();
    assert_eq!(
        err,
        ScalarGradError::TensorCreationError {
            data_len: 2,
            shape: vec![2, 3],
        }
    );
}

#[test]
fn test_from_scalars_shares_nodes() {
    let x = Scalar::new(1.5);
    let t = Tensor::from_scalars(vec![x.clone(), Scalar::new(2.0)]);
    assert_eq!(t.shape(), &[2]);

    // Same vertex, so mutating through the original handle is visible.
    x.set_data(9.0);
    assert_eq!(t.get(&[0]).data(), 9.0);
}

#[test]
fn test_from_scalar_is_scalar_tensor() {
    let t = Tensor::from_scalar(Scalar::new(7.0));
    assert_eq!(t.shape(), &[1]);
    assert_eq!(t.numel(), 1);
}

#[test]
fn test_full_cells_are_independent() {
    // Every cell is a fresh leaf: driving a gradient through one cell must
    // leave the others untouched.
    let t = Tensor::full(0.5, &[2, 2]);
    let c = t.get(&[0, 0]);
    let out = &c * 3.0;
    out.backward();

    assert_eq!(t.get(&[0, 0]).grad(), 3.0);
    assert_eq!(t.get(&[0, 1]).grad(), 0.0);
    assert_eq!(t.get(&[1, 0]).grad(), 0.0);
    assert_eq!(t.get(&[1, 1]).grad(), 0.0);
}

#[test]
fn test_rand_is_reproducible_from_seed() {
    let mut rng_a = StdRng::seed_from_u64(7);
    let mut rng_b = StdRng::seed_from_u64(7);
    let a = Tensor::rand(&[3, 2], &mut rng_a);
    let b = Tensor::rand(&[3, 2], &mut rng_b);

    assert_eq!(a.values(), b.values());
    for v in a.values() {
        assert!((0.0..1.0).contains(&v));
    }
}

#[test]
fn test_randn_shape() {
    let mut rng = StdRng::seed_from_u64(7);
    let t = Tensor::randn(&[4], &mut rng);
    assert_eq!(t.shape(), &[4]);
    assert!(t.values().iter().all(|v| v.is_finite()));
}
