use crate::types::DType;
use thiserror::Error;

/// Custom error type for the tensorquant crate.
///
/// Double-free and use-after-release have no variants here: a `Tensor`
/// exclusively owns its buffer and `Drop` releases it exactly once.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum TensorQuantError {
    #[error("Allocation failure: could not reserve a {rows}x{cols} buffer of {dtype:?} elements")]
    AllocationFailure {
        rows: usize,
        cols: usize,
        dtype: DType,
    },

    #[error("Tensor creation error: data length {data_len} does not match shape {rows}x{cols}")]
    TensorCreationError {
        data_len: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Index out of bounds: index {index} for tensor with {numel} elements")]
    IndexOutOfBounds { index: usize, numel: usize },

    #[error("Data type mismatch for operation '{operation}': expected {expected:?}, got {actual:?}")]
    DataTypeMismatch {
        expected: DType,
        actual: DType,
        operation: String,
    },

    #[error("Degenerate scale {scale} for operation '{operation}'")]
    DegenerateScale { scale: f32, operation: String },
}
