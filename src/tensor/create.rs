// src/tensor/create.rs

use crate::buffer::Buffer;
use crate::error::TensorQuantError;
use crate::tensor::Tensor;
use crate::types::DType;

/// Creates a new zero-filled tensor with the given shape and element type.
///
/// This is the construct operation: it allocates a buffer of `rows * cols`
/// elements whose width is implied by `dtype`, and the returned tensor's
/// invariants hold immediately.
///
/// # Errors
/// Returns `TensorQuantError::AllocationFailure` if the buffer cannot be
/// allocated (or `rows * cols` overflows).
pub fn zeros(rows: usize, cols: usize, dtype: DType) -> Result<Tensor, TensorQuantError> {
    let buffer = Buffer::zeros(dtype, rows, cols)?;
    Ok(Tensor { buffer, rows, cols })
}
