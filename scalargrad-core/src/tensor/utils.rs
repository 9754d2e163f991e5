// scalargrad-core/src/tensor/utils.rs

/// Total number of elements implied by a shape.
pub(crate) fn numel_of(shape: &[usize]) -> usize {
    shape.iter().product()
}

/// Row-major linearization of multi-dimensional indices:
/// `index(pos) = Σ pos[i] * Π_{j>i} shape[j]`.
///
/// Panics when the number of indices does not match the rank or when any
/// index is out of bounds — out-of-range access is a programmer error, not
/// a recoverable condition.
pub(crate) fn linear_index(indices: &[usize], shape: &[usize]) -> usize {
    assert_eq!(
        indices.len(),
        shape.len(),
        "Number of indices ({}) does not match tensor rank ({}) for shape {:?}",
        indices.len(),
        shape.len(),
        shape
    );

    let mut index = 0;
    let mut stride = 1;
    for i in (0..shape.len()).rev() {
        assert!(
            indices[i] < shape[i],
            "Index {} is out of bounds for dimension {} with size {} (shape: {:?})",
            indices[i],
            i,
            shape[i],
            shape
        );
        index += indices[i] * stride;
        stride *= shape[i];
    }
    index
}

// --- Tests ---
