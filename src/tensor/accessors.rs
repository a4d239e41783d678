// src/tensor/accessors.rs

use half::f16;

use crate::error::TensorQuantError;
use crate::tensor::Tensor;
use crate::types::DType;

impl Tensor {
    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the data type (`DType`) of the tensor elements.
    pub fn dtype(&self) -> DType {
        self.buffer.dtype()
    }

    /// Returns the total number of elements in the tensor.
    pub fn numel(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns true if the tensor holds no elements.
    pub fn is_empty(&self) -> bool {
        self.numel() == 0
    }

    fn check_bounds(&self, index: usize) -> Result<(), TensorQuantError> {
        if index >= self.numel() {
            return Err(TensorQuantError::IndexOutOfBounds {
                index,
                numel: self.numel(),
            });
        }
        Ok(())
    }

    /// Reads the f32 element at the given flat (row-major) index.
    ///
    /// # Errors
    /// `IndexOutOfBounds` if `index >= rows * cols`; `DataTypeMismatch` if
    /// the tensor is not F32.
    pub fn get_f32(&self, index: usize) -> Result<f32, TensorQuantError> {
        self.check_bounds(index)?;
        let data = self.buffer.try_get_f32("get_f32")?;
        Ok(data[index])
    }

    /// Writes the f32 element at the given flat (row-major) index.
    pub fn set_f32(&mut self, index: usize, value: f32) -> Result<(), TensorQuantError> {
        self.check_bounds(index)?;
        let data = self.buffer.try_get_f32_mut("set_f32")?;
        data[index] = value;
        Ok(())
    }

    /// Reads the f16 element at the given flat (row-major) index.
    pub fn get_f16(&self, index: usize) -> Result<f16, TensorQuantError> {
        self.check_bounds(index)?;
        let data = self.buffer.try_get_f16("get_f16")?;
        Ok(data[index])
    }

    /// Writes the f16 element at the given flat (row-major) index.
    pub fn set_f16(&mut self, index: usize, value: f16) -> Result<(), TensorQuantError> {
        self.check_bounds(index)?;
        let data = self.buffer.try_get_f16_mut("set_f16")?;
        data[index] = value;
        Ok(())
    }

    /// Reads the i8 element at the given flat (row-major) index.
    pub fn get_i8(&self, index: usize) -> Result<i8, TensorQuantError> {
        self.check_bounds(index)?;
        let data = self.buffer.try_get_i8("get_i8")?;
        Ok(data[index])
    }

    /// Writes the i8 element at the given flat (row-major) index.
    pub fn set_i8(&mut self, index: usize, value: i8) -> Result<(), TensorQuantError> {
        self.check_bounds(index)?;
        let data = self.buffer.try_get_i8_mut("set_i8")?;
        data[index] = value;
        Ok(())
    }

    /// Views the whole buffer as an f32 slice.
    ///
    /// Returns an error if the tensor is not F32.
    pub fn get_f32_data(&self) -> Result<&[f32], TensorQuantError> {
        self.buffer.try_get_f32("get_f32_data")
    }

    /// Views the whole buffer as an f16 slice.
    pub fn get_f16_data(&self) -> Result<&[f16], TensorQuantError> {
        self.buffer.try_get_f16("get_f16_data")
    }

    /// Views the whole buffer as an i8 slice.
    pub fn get_i8_data(&self) -> Result<&[i8], TensorQuantError> {
        self.buffer.try_get_i8("get_i8_data")
    }
}
