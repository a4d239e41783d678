use super::*;
use approx::assert_relative_eq;

#[test]
fn test_max_abs_scan() {
    assert_eq!(max_abs(&[12.5f32, -5.3, 0.8, 25.1]), 25.1);
    assert_eq!(max_abs(&[-30.0f32, 2.0]), 30.0);
    assert_eq!(max_abs::<f32>(&[]), 0.0);
}

#[test]
fn test_quantize_value_clamps_overshoot() {
    // Values past the symmetric range must saturate at +/-127, never wrap.
    assert_eq!(quantize_value(130.0, 1.0), 127);
    assert_eq!(quantize_value(-200.0, 1.0), -127);
    assert_eq!(quantize_value(126.5, 1.0), 127);
    assert_eq!(quantize_value(-0.4, 1.0), 0);
}

#[test]
fn test_quantize_scale_derivation() -> Result<(), TensorQuantError> {
    let t = Tensor::new(vec![12.5, -5.3, 0.8, 25.1], 2, 2)?;
    let quantized = quantize_op(&t)?;
    assert_relative_eq!(quantized.scale, 25.1 / 127.0, epsilon = 1e-6);
    assert_eq!(quantized.tensor.dtype(), DType::I8);
    assert_eq!(quantized.tensor.rows(), 2);
    assert_eq!(quantized.tensor.cols(), 2);
    Ok(())
}

#[test]
fn test_quantize_does_not_mutate_source() -> Result<(), TensorQuantError> {
    let t = Tensor::new(vec![1.0, -2.0, 3.0], 1, 3)?;
    let _ = quantize_op(&t)?;
    assert_eq!(t.get_f32_data()?, &[1.0, -2.0, 3.0]);
    Ok(())
}

#[test]
fn test_quantize_empty_tensor() -> Result<(), TensorQuantError> {
    let t = Tensor::new(vec![], 0, 3)?;
    let quantized = quantize_op(&t)?;
    assert_eq!(quantized.scale, 0.0);
    assert!(quantized.tensor.is_empty());
    Ok(())
}

#[test]
fn test_dequantize_rejects_non_finite_scale() -> Result<(), TensorQuantError> {
    let t = Tensor::new_i8(vec![1, 2], 1, 2)?;
    let result = dequantize_op(&t, f32::NAN);
    match result {
        Err(TensorQuantError::DegenerateScale { operation, .. }) => {
            assert_eq!(operation, "dequantize_op");
        }
        other => panic!("Expected DegenerateScale, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_dequantize_rejects_f32_input() -> Result<(), TensorQuantError> {
    let t = Tensor::new(vec![1.0], 1, 1)?;
    let result = dequantize_op(&t, 0.5);
    match result {
        Err(TensorQuantError::DataTypeMismatch {
            expected, actual, ..
        }) => {
            assert_eq!(expected, DType::I8);
            assert_eq!(actual, DType::F32);
        }
        other => panic!("Expected DataTypeMismatch, got {:?}", other),
    }
    Ok(())
}
