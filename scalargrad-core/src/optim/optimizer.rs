use crate::error::ScalarGradError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their
/// accumulated gradients.
pub trait Optimizer {
    /// Performs a single optimization step over the managed parameters.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the step was successful, or a `ScalarGradError` otherwise.
    fn step(&mut self) -> Result<(), ScalarGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Typically called once per training iteration, before the backward
    /// pass, so gradients from the previous step do not accumulate into the
    /// new one.
    fn zero_grad(&mut self);
}
