use crate::scalar::Scalar;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical:?} != numerical grad {numerical:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNotFinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNotFinite { input_index: usize, value: f64 },
}

/// Compares autograd gradients of `f` at `inputs` against central finite
/// differences: (f(x+h) - f(x-h)) / 2h, one perturbed input at a time.
///
/// `f` must build its expression from the `Scalar` leaves it is given so the
/// backward pass can reach them. The function is re-evaluated on fresh leaves
/// for every perturbation, so `f` should be deterministic.
pub fn check_grad<F>(
    f: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Scalar]) -> Scalar,
{
    let leaves: Vec<Scalar> = inputs.iter().map(|&v| Scalar::new(v)).collect();
    let output = f(&leaves);
    output.backward();

    for (input_index, leaf) in leaves.iter().enumerate() {
        let analytical = leaf.grad();
        if !analytical.is_finite() {
            return Err(GradCheckError::AnalyticalGradNotFinite {
                input_index,
                value: analytical,
            });
        }

        let mut perturbed = inputs.to_vec();
        perturbed[input_index] = inputs[input_index] + epsilon;
        let loss_plus = evaluate(&f, &perturbed);
        perturbed[input_index] = inputs[input_index] - epsilon;
        let loss_minus = evaluate(&f, &perturbed);

        if !loss_plus.is_finite() || !loss_minus.is_finite() {
            return Err(GradCheckError::NumericalGradNotFinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !relative_eq!(
            analytical,
            numerical,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical,
                numerical,
                difference: (analytical - numerical).abs(),
            });
        }
    }

    Ok(())
}

/// Forward-only evaluation of `f` on fresh leaves.
fn evaluate<F>(f: &F, at: &[f64]) -> f64
where
    F: Fn(&[Scalar]) -> Scalar,
{
    let leaves: Vec<Scalar> = at.iter().map(|&v| Scalar::new(v)).collect();
    f(&leaves).data()
}

// --- Tests ---
