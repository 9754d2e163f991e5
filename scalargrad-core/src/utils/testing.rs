use crate::scalar::Scalar;
use crate::tensor::Tensor;

/// Checks that a scalar's forward value is within tolerance of `expected`.
/// Panics with context on mismatch.
pub fn check_scalar_near(actual: &Scalar, expected: f64, tolerance: f64) {
    let diff = (actual.data() - expected).abs();
    if diff > tolerance {
        panic!(
            "Scalar value mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual.data(),
            expected,
            diff,
            tolerance
        );
    }
}

/// Checks a tensor's shape and forward values within tolerance.
/// Panics with the offending index on mismatch.
pub fn check_tensor_near(
    actual: &Tensor,
    expected_shape: &[usize],
    expected_values: &[f64],
    tolerance: f64,
) {
    assert_eq!(actual.shape(), expected_shape, "Shape mismatch");

    let actual_values = actual.values();
    assert_eq!(
        actual_values.len(),
        expected_values.len(),
        "Value length mismatch"
    );

    for (i, (a, e)) in actual_values.iter().zip(expected_values.iter()).enumerate() {
        let diff = (*a - *e).abs();
        if diff > tolerance {
            panic!(
                "Value mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}
