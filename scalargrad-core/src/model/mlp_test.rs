use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_mlp_shapes_and_parameter_count() {
    let mut rng = StdRng::seed_from_u64(0);
    let mlp = Mlp::new(3, &[4, 4, 1], &mut rng);

    assert_eq!(mlp.layers().len(), 3);
    // (3+1)*4 + (4+1)*4 + (4+1)*1 = 16 + 20 + 5
    assert_eq!(mlp.parameters().len(), 41);

    let input = Tensor::new(vec![2.0, 3.0, -1.0], vec![3]).unwrap();
    let output = mlp.forward(&input).unwrap();
    assert_eq!(output.shape(), &[1]);
}

#[test]
fn test_mlp_rejects_wrong_input_width() {
    let mut rng = StdRng::seed_from_u64(0);
    let mlp = Mlp::new(3, &[2, 1], &mut rng);
    let input = Tensor::new(vec![1.0, 2.0], vec![2]).unwrap();
    assert!(mlp.forward(&input).is_err());
}

#[test]
fn test_mlp_backward_reaches_every_parameter() {
    let mut rng = StdRng::seed_from_u64(9);
    let mlp = Mlp::new(2, &[3, 1], &mut rng);
    let input = Tensor::new(vec![0.5, -0.25], vec![2]).unwrap();

    let output = mlp.forward(&input).unwrap();
    output.backward().unwrap();

    // With tanh hidden units and nonzero input, every weight and bias gets
    // a contribution (up to pathological cancellation, excluded by seed).
    let nonzero = mlp
        .parameters()
        .iter()
        .filter(|p| p.grad() != 0.0)
        .count();
    assert_eq!(nonzero, mlp.parameters().len());
}

#[test]
fn test_mlp_zero_grad() {
    let mut rng = StdRng::seed_from_u64(9);
    let mlp = Mlp::new(2, &[3, 1], &mut rng);
    let input = Tensor::new(vec![0.5, -0.25], vec![2]).unwrap();

    mlp.forward(&input).unwrap().backward().unwrap();
    mlp.zero_grad();
    assert!(mlp.parameters().iter().all(|p| p.grad() == 0.0));
}
