//! A tagged, type-polymorphic 2D tensor container and a symmetric
//! float32 -> int8 quantization transform.
//!
//! The [`Tensor`] owns exactly one typed buffer whose variant always matches
//! its [`DType`] tag; [`quantize_op`] produces a new I8 tensor plus the
//! global symmetric scale, and [`dequantize_op`] maps it back.

pub mod buffer;
pub mod error;
pub mod ops;
pub mod tensor;
pub mod types;
pub mod utils;

// Re-export the main types so callers can use `tensorquant::Tensor` directly.
pub use error::TensorQuantError;
pub use ops::quantize::{dequantize_op, quantize_op, Quantized};
pub use tensor::{zeros, Tensor};
pub use types::DType;
