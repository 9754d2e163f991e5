use crate::scalar::Scalar;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Creates `n` leaf parameters sampled uniformly from `[low, high)`.
///
/// The generator is threaded explicitly — there is no ambient randomness in
/// the library — so parameter initialization is reproducible from a seed.
pub fn uniform<R: Rng>(n: usize, low: f64, high: f64, rng: &mut R) -> Vec<Scalar> {
    let dist = Uniform::new(low, high);
    (0..n).map(|_| Scalar::new(dist.sample(rng))).collect()
}

/// Creates `n` zero-valued leaf parameters.
pub fn zeros(n: usize) -> Vec<Scalar> {
    (0..n).map(|_| Scalar::new(0.0)).collect()
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file
