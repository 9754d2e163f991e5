//! # Training a small MLP with the scalar-graph engine
//!
//! Demonstrates the full loop on a four-sample toy dataset:
//!
//! 1. Building a `Mlp` (3→4→4→1, tanh hidden layers) with seeded init.
//! 2. Running the forward pass sample by sample and collecting the
//!    predictions into a tensor.
//! 3. Computing the mean-squared loss as a graph expression.
//! 4. `zero_grad` / `backward` / `step` once per iteration.
//!
//! Run with:
//! `cargo run --example basic_mlp`

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::model::Mlp;
use scalargrad_core::nn::{MSELoss, Module, Reduction};
use scalargrad_core::optim::{Optimizer, Sgd};
use scalargrad_core::{ScalarGradError, Tensor};

fn main() -> Result<(), ScalarGradError> {
    let mut rng = StdRng::seed_from_u64(42);
    let mlp = Mlp::new(3, &[4, 4, 1], &mut rng);
    println!("model: 3 -> 4 -> 4 -> 1 ({} parameters)", mlp.parameters().len());

    let xs: [[f64; 3]; 4] = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let loss_fn = MSELoss::new(Reduction::Mean);
    let mut optimizer = Sgd::new(mlp.parameters(), 0.1);
    let targets = Tensor::new(ys.to_vec(), vec![ys.len()])?;

    for step in 0..400 {
        let mut predictions = Vec::with_capacity(xs.len());
        for x in &xs {
            let input = Tensor::new(x.to_vec(), vec![3])?;
            let output = mlp.forward(&input)?;
            predictions.push(output.get(&[0]));
        }
        let predicted = Tensor::from_scalars(predictions);
        let loss = loss_fn.calculate(&predicted, &targets)?;

        optimizer.zero_grad();
        loss.backward()?;
        optimizer.step()?;

        if step % 20 == 0 {
            println!("step {:3}: loss = {:.6}", step, loss.values()[0]);
        }
    }

    println!("\npredictions after training:");
    for (x, y) in xs.iter().zip(ys.iter()) {
        let input = Tensor::new(x.to_vec(), vec![3])?;
        let output = mlp.forward(&input)?;
        println!("  target {:>4} -> predicted {:+.4}", y, output.values()[0]);
    }

    Ok(())
}
