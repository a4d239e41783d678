// src/tensor/mod.rs

use half::f16;

use crate::buffer::Buffer;
use crate::error::TensorQuantError;

mod accessors;
mod display;
pub mod create; // Make the create module public

// Re-export creation functions so callers can use `tensor::zeros` directly.
pub use create::zeros;

/// A 2D buffer of homogeneously-typed numeric elements with an explicit
/// row/column shape.
///
/// A `Tensor` exclusively owns its buffer: there is no sharing or aliasing
/// between tensors, the buffer variant always matches the tensor's `DType`
/// tag, and `buffer.len() == rows * cols` holds for the whole lifetime.
/// Dropping the tensor releases the buffer, so there is no explicit destroy
/// operation and no double-free to guard against. `Tensor` is deliberately
/// not `Clone`: each instance maps 1:1 to one buffer allocation.
pub struct Tensor {
    pub(crate) buffer: Buffer,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

impl Tensor {
    /// Creates a new F32 tensor from raw data and shape.
    ///
    /// This is the primary constructor for creating tensors from raw data.
    /// Data is moved into the new tensor, in flattened row-major order.
    ///
    /// # Errors
    /// Returns `TensorQuantError::TensorCreationError` if the data length
    /// does not match `rows * cols`.
    pub fn new(data: Vec<f32>, rows: usize, cols: usize) -> Result<Self, TensorQuantError> {
        Self::check_len(data.len(), rows, cols)?;
        Ok(Tensor {
            buffer: Buffer::F32(data),
            rows,
            cols,
        })
    }

    /// Creates a new F16 tensor from raw data and shape.
    pub fn new_f16(data: Vec<f16>, rows: usize, cols: usize) -> Result<Self, TensorQuantError> {
        Self::check_len(data.len(), rows, cols)?;
        Ok(Tensor {
            buffer: Buffer::F16(data),
            rows,
            cols,
        })
    }

    /// Creates a new I8 tensor from raw data and shape.
    pub fn new_i8(data: Vec<i8>, rows: usize, cols: usize) -> Result<Self, TensorQuantError> {
        Self::check_len(data.len(), rows, cols)?;
        Ok(Tensor {
            buffer: Buffer::I8(data),
            rows,
            cols,
        })
    }

    /// Provides immutable access to the underlying buffer.
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    fn check_len(data_len: usize, rows: usize, cols: usize) -> Result<(), TensorQuantError> {
        let numel = rows.checked_mul(cols);
        if numel != Some(data_len) {
            return Err(TensorQuantError::TensorCreationError {
                data_len,
                rows,
                cols,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DType;

    #[test]
    fn test_tensor_creation() {
        let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        assert_eq!(t.rows(), 2);
        assert_eq!(t.cols(), 2);
        assert_eq!(t.numel(), 4);
        assert_eq!(t.dtype(), DType::F32);
        assert_eq!(t.buffer().len(), 4);
    }

    #[test]
    fn test_tensor_creation_length_mismatch() {
        let result = Tensor::new(vec![1.0, 2.0, 3.0], 2, 2);
        assert_eq!(
            result.err(),
            Some(TensorQuantError::TensorCreationError {
                data_len: 3,
                rows: 2,
                cols: 2,
            })
        );
    }

    #[test]
    fn test_empty_tensor() {
        let t = Tensor::new(vec![], 0, 5).unwrap();
        assert_eq!(t.numel(), 0);
        assert!(t.is_empty());
    }

    #[test]
    fn test_i8_tensor_creation() {
        let t = Tensor::new_i8(vec![-128, 0, 127], 1, 3).unwrap();
        assert_eq!(t.dtype(), DType::I8);
        assert_eq!(t.get_i8_data().unwrap(), &[-128, 0, 127]);
    }
}
