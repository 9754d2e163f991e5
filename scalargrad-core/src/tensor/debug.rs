// scalargrad-core/src/tensor/debug.rs

use crate::scalar::Scalar;
use crate::tensor::utils::numel_of;
use crate::tensor::Tensor;
use std::fmt;

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tensor(shape={:?}, numel={}, leaves={})",
            self.shape,
            self.storage.len(),
            self.storage.iter().filter(|s| s.is_leaf()).count()
        )
    }
}

/// Human-readable nested-bracket rendering of shape and values.
/// Diagnostic output only, not a stable serialization format.
impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_slice(f, &self.storage, &self.shape)
    }
}

fn fmt_slice(f: &mut fmt::Formatter<'_>, cells: &[Scalar], shape: &[usize]) -> fmt::Result {
    match shape.split_first() {
        None => {
            // Rank-0 never occurs in practice; render the bare cell if it does.
            match cells.first() {
                Some(cell) => write!(f, "{}", cell.data()),
                None => write!(f, "[]"),
            }
        }
        Some((_, rest)) if rest.is_empty() => {
            write!(f, "[")?;
            for (i, cell) in cells.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", cell.data())?;
            }
            write!(f, "]")
        }
        Some((dim, rest)) => {
            let chunk = numel_of(rest);
            write!(f, "[")?;
            for i in 0..*dim {
                if i > 0 {
                    write!(f, ", ")?;
                }
                fmt_slice(f, &cells[i * chunk..(i + 1) * chunk], rest)?;
            }
            write!(f, "]")
        }
    }
}

// --- Tests ---
