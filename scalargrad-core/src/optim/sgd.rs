use crate::error::ScalarGradError;
use crate::optim::optimizer::Optimizer;
use crate::scalar::Scalar;

/// Plain stochastic gradient descent with a fixed learning rate:
/// `p.data -= lr * p.grad` for every managed parameter.
#[derive(Debug)]
pub struct Sgd {
    params: Vec<Scalar>,
    lr: f64,
}

impl Sgd {
    /// Creates a new `Sgd` over the given parameter handles.
    /// The handles are shared with the model, so updates are visible to the
    /// next forward pass without any copying.
    pub fn new(params: Vec<Scalar>, lr: f64) -> Self {
        Sgd { params, lr }
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn set_lr(&mut self, lr: f64) {
        self.lr = lr;
    }
}

impl Optimizer for Sgd {
    fn step(&mut self) -> Result<(), ScalarGradError> {
        for param in &self.params {
            param.set_data(param.data() - self.lr * param.grad());
        }
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
