//! Demonstrates quantizing a small matrix of model weights from f32 to i8
//! and mapping the values back through the scale factor.

use tensorquant::{dequantize_op, quantize_op, zeros, DType, Tensor, TensorQuantError};

fn main() -> Result<(), TensorQuantError> {
    // Original 32-bit float weights, populated element by element.
    let mut weights = zeros(2, 2, DType::F32)?;
    weights.set_f32(0, 12.5)?;
    weights.set_f32(1, -5.3)?;
    weights.set_f32(2, 0.8)?;
    weights.set_f32(3, 25.1)?;

    println!("--- Original model weights ---");
    println!("{}", weights);

    let quantized = quantize_op(&weights)?;
    println!("--- Quantized weights (scale factor: {}) ---", quantized.scale);
    println!("{}", quantized.tensor);

    let restored: Tensor = dequantize_op(&quantized.tensor, quantized.scale)?;
    println!("--- Dequantized weights ---");
    println!("{}", restored);

    Ok(())
}
