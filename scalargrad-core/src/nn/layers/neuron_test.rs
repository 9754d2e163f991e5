use super::*;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_neuron_parameter_count() {
    let mut rng = StdRng::seed_from_u64(0);
    let neuron = Neuron::new(3, true, &mut rng);
    assert_eq!(neuron.in_features(), 3);
    assert_eq!(neuron.parameters().len(), 4); // 3 weights + bias
}

#[test]
fn test_linear_neuron_is_affine() {
    let mut rng = StdRng::seed_from_u64(1);
    let neuron = Neuron::new(2, false, &mut rng);
    let params = neuron.parameters();
    params[0].set_data(2.0); // w0
    params[1].set_data(-1.0); // w1
    params[2].set_data(0.5); // bias

    let inputs = [Scalar::new(3.0), Scalar::new(4.0)];
    let out = neuron.forward(&inputs);
    assert_relative_eq!(out.data(), 2.0 * 3.0 - 4.0 + 0.5, epsilon = 1e-12);
}

#[test]
fn test_nonlinear_neuron_squashes() {
    let mut rng = StdRng::seed_from_u64(1);
    let neuron = Neuron::new(1, true, &mut rng);
    let params = neuron.parameters();
    params[0].set_data(100.0); // saturate the activation

    let out = neuron.forward(&[Scalar::new(1.0)]);
    assert!(out.data() <= 1.0 && out.data() > 0.999);
}

#[test]
fn test_neuron_gradients_reach_parameters() {
    let mut rng = StdRng::seed_from_u64(2);
    let neuron = Neuron::new(2, false, &mut rng);
    let inputs = [Scalar::new(3.0), Scalar::new(-2.0)];

    neuron.forward(&inputs).backward();

    let params = neuron.parameters();
    assert_eq!(params[0].grad(), 3.0); // d/dw0 = x0
    assert_eq!(params[1].grad(), -2.0); // d/dw1 = x1
    assert_eq!(params[2].grad(), 1.0); // d/db = 1
}

#[test]
#[should_panic(expected = "Neuron expects 2 inputs")]
fn test_neuron_input_arity_is_programmer_error() {
    let mut rng = StdRng::seed_from_u64(3);
    let neuron = Neuron::new(2, false, &mut rng);
    neuron.forward(&[Scalar::new(1.0)]);
}
