use half::f16;

use crate::error::TensorQuantError;
use crate::types::DType;

/// Typed storage for a tensor's elements.
///
/// Exactly one variant is ever populated for a given tensor, and the variant
/// always matches the tensor's `DType` tag. The vectors are plain owned
/// `Vec`s: a buffer belongs to exactly one `Tensor`, and dropping the tensor
/// releases it.
#[derive(Debug, Clone, PartialEq)]
pub enum Buffer {
    /// Buffer holding f32 data.
    F32(Vec<f32>),
    /// Buffer holding f16 data.
    F16(Vec<f16>),
    /// Buffer holding i8 (quantized) data.
    I8(Vec<i8>),
}

impl Buffer {
    /// Returns the `DType` tag matching this buffer's variant.
    pub fn dtype(&self) -> DType {
        match self {
            Buffer::F32(_) => DType::F32,
            Buffer::F16(_) => DType::F16,
            Buffer::I8(_) => DType::I8,
        }
    }

    /// Returns the number of elements in the buffer.
    pub fn len(&self) -> usize {
        match self {
            Buffer::F32(data) => data.len(),
            Buffer::F16(data) => data.len(),
            Buffer::I8(data) => data.len(),
        }
    }

    /// Returns true if the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Allocates a zero-filled buffer of `rows * cols` elements of `dtype`.
    ///
    /// Allocation goes through `try_reserve_exact` so that an allocator
    /// refusal (or a `rows * cols` overflow) surfaces as
    /// `AllocationFailure` instead of aborting the process.
    pub(crate) fn zeros(dtype: DType, rows: usize, cols: usize) -> Result<Self, TensorQuantError> {
        let alloc_failure = || TensorQuantError::AllocationFailure { rows, cols, dtype };
        let numel = rows.checked_mul(cols).ok_or_else(alloc_failure)?;

        fn zero_filled<T: Copy>(numel: usize, zero: T) -> Result<Vec<T>, ()> {
            let mut data = Vec::new();
            data.try_reserve_exact(numel).map_err(|_| ())?;
            data.resize(numel, zero);
            Ok(data)
        }

        let buffer = match dtype {
            DType::F32 => Buffer::F32(zero_filled(numel, 0.0f32).map_err(|_| alloc_failure())?),
            DType::F16 => Buffer::F16(zero_filled(numel, f16::ZERO).map_err(|_| alloc_failure())?),
            DType::I8 => Buffer::I8(zero_filled(numel, 0i8).map_err(|_| alloc_failure())?),
        };
        Ok(buffer)
    }

    /// Attempts to view the buffer as an f32 slice.
    ///
    /// Returns a `DataTypeMismatch` error if the buffer holds another variant.
    pub fn try_get_f32(&self, operation: &str) -> Result<&[f32], TensorQuantError> {
        match self {
            Buffer::F32(data) => Ok(data.as_slice()),
            other => Err(TensorQuantError::DataTypeMismatch {
                expected: DType::F32,
                actual: other.dtype(),
                operation: operation.to_string(),
            }),
        }
    }

    /// Attempts to view the buffer as an f16 slice.
    pub fn try_get_f16(&self, operation: &str) -> Result<&[f16], TensorQuantError> {
        match self {
            Buffer::F16(data) => Ok(data.as_slice()),
            other => Err(TensorQuantError::DataTypeMismatch {
                expected: DType::F16,
                actual: other.dtype(),
                operation: operation.to_string(),
            }),
        }
    }

    /// Attempts to view the buffer as an i8 slice.
    pub fn try_get_i8(&self, operation: &str) -> Result<&[i8], TensorQuantError> {
        match self {
            Buffer::I8(data) => Ok(data.as_slice()),
            other => Err(TensorQuantError::DataTypeMismatch {
                expected: DType::I8,
                actual: other.dtype(),
                operation: operation.to_string(),
            }),
        }
    }

    pub(crate) fn try_get_f32_mut(
        &mut self,
        operation: &str,
    ) -> Result<&mut [f32], TensorQuantError> {
        let actual = self.dtype();
        match self {
            Buffer::F32(data) => Ok(data.as_mut_slice()),
            _ => Err(TensorQuantError::DataTypeMismatch {
                expected: DType::F32,
                actual,
                operation: operation.to_string(),
            }),
        }
    }

    pub(crate) fn try_get_f16_mut(
        &mut self,
        operation: &str,
    ) -> Result<&mut [f16], TensorQuantError> {
        let actual = self.dtype();
        match self {
            Buffer::F16(data) => Ok(data.as_mut_slice()),
            _ => Err(TensorQuantError::DataTypeMismatch {
                expected: DType::F16,
                actual,
                operation: operation.to_string(),
            }),
        }
    }

    pub(crate) fn try_get_i8_mut(
        &mut self,
        operation: &str,
    ) -> Result<&mut [i8], TensorQuantError> {
        let actual = self.dtype();
        match self {
            Buffer::I8(data) => Ok(data.as_mut_slice()),
            _ => Err(TensorQuantError::DataTypeMismatch {
                expected: DType::I8,
                actual,
                operation: operation.to_string(),
            }),
        }
    }
}
