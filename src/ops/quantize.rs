use log::debug;
use num_traits::Float;

use crate::error::TensorQuantError;
use crate::tensor::create::zeros;
use crate::tensor::Tensor;
use crate::types::DType;

/// Largest magnitude representable by the symmetric i8 scheme.
///
/// The scale maps `[-max_abs, max_abs]` onto `[-127, 127]`; -128 is left
/// unused so the range stays symmetric.
pub const Q_MAX: f32 = 127.0;

/// The outcome of quantizing an F32 tensor: the produced I8 tensor plus the
/// scale factor needed to map the integer values back to float magnitudes.
#[derive(Debug)]
pub struct Quantized {
    /// The new I8 tensor, owned by the caller.
    pub tensor: Tensor,
    /// `max(|source|) / 127.0`; multiply quantized values by this to
    /// dequantize.
    pub scale: f32,
}

/// Quantizes an F32 tensor to I8 using a single global symmetric scale.
///
/// Scans the source once for `max_abs = max(|x_i|)`, derives
/// `scale = max_abs / 127.0`, then emits `round(x_i / scale)` clamped to
/// `[-127, 127]`. The source tensor is not mutated.
///
/// An empty or all-zero source has `max_abs == 0`; dividing by the zero
/// scale is never attempted — the output is an all-zero I8 tensor with
/// `scale == 0.0`.
///
/// # Errors
/// Returns `TensorQuantError::DataTypeMismatch` if the source is not F32.
pub fn quantize_op(tensor: &Tensor) -> Result<Quantized, TensorQuantError> {
    if tensor.dtype() != DType::F32 {
        return Err(TensorQuantError::DataTypeMismatch {
            expected: DType::F32,
            actual: tensor.dtype(),
            operation: "quantize_op".to_string(),
        });
    }
    let source = tensor.buffer().try_get_f32("quantize_op")?;

    let max_abs = max_abs(source);
    let scale = max_abs / Q_MAX;
    if scale == 0.0 {
        debug!("quantize_op: degenerate input (max_abs == 0), emitting zero output");
        let output = zeros(tensor.rows(), tensor.cols(), DType::I8)?;
        return Ok(Quantized {
            tensor: output,
            scale: 0.0,
        });
    }

    let data: Vec<i8> = source.iter().map(|&x| quantize_value(x, scale)).collect();
    debug!(
        "quantize_op: {} elements, max_abs = {}, scale = {}",
        source.len(),
        max_abs,
        scale
    );
    let output = Tensor::new_i8(data, tensor.rows(), tensor.cols())?;
    Ok(Quantized {
        tensor: output,
        scale,
    })
}

/// Maps an I8 tensor back to F32 via `x_i = q_i * scale`.
///
/// The counterpart of [`quantize_op`]; the caller supplies the scale that
/// operation produced. A zero scale is valid and yields an all-zero tensor.
///
/// # Errors
/// Returns `DataTypeMismatch` if the input is not I8, or `DegenerateScale`
/// if `scale` is not finite.
pub fn dequantize_op(tensor: &Tensor, scale: f32) -> Result<Tensor, TensorQuantError> {
    let quantized = tensor.buffer().try_get_i8("dequantize_op")?;
    if !scale.is_finite() {
        return Err(TensorQuantError::DegenerateScale {
            scale,
            operation: "dequantize_op".to_string(),
        });
    }
    let data: Vec<f32> = quantized.iter().map(|&q| q as f32 * scale).collect();
    Tensor::new(data, tensor.rows(), tensor.cols())
}

// Rounding is half-away-from-zero (f32::round); the clamp protects the
// boundary case where floating rounding could overshoot max_abs to 128.
fn quantize_value(x: f32, scale: f32) -> i8 {
    (x / scale).round().clamp(-Q_MAX, Q_MAX) as i8
}

fn max_abs<T: Float>(values: &[T]) -> T {
    values
        .iter()
        .fold(T::zero(), |acc, &x| acc.max(x.abs()))
}
