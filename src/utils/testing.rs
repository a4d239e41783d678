use crate::tensor::Tensor;

/// Checks that an F32 tensor has the expected shape and data within
/// tolerance. Panics on any mismatch.
pub fn check_tensor_near(actual: &Tensor, rows: usize, cols: usize, expected: &[f32], tolerance: f32) {
    assert_eq!(actual.rows(), rows, "Row count mismatch");
    assert_eq!(actual.cols(), cols, "Column count mismatch");

    let actual_data = actual
        .get_f32_data()
        .expect("Failed to get F32 data in check_tensor_near");
    assert_eq!(actual_data.len(), expected.len(), "Data length mismatch");

    for (i, (a, e)) in actual_data.iter().zip(expected.iter()).enumerate() {
        let diff = (*a - *e).abs();
        if diff > tolerance {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}

/// Checks that an I8 tensor has the expected shape and that each element is
/// within `tolerance` of the expected value (rounding-mode slack).
pub fn check_i8_tensor_near(actual: &Tensor, rows: usize, cols: usize, expected: &[i8], tolerance: i8) {
    assert_eq!(actual.rows(), rows, "Row count mismatch");
    assert_eq!(actual.cols(), cols, "Column count mismatch");

    let actual_data = actual
        .get_i8_data()
        .expect("Failed to get I8 data in check_i8_tensor_near");
    assert_eq!(actual_data.len(), expected.len(), "Data length mismatch");

    for (i, (a, e)) in actual_data.iter().zip(expected.iter()).enumerate() {
        let diff = (*a as i16 - *e as i16).abs();
        if diff > tolerance as i16 {
            panic!(
                "Data mismatch at index {}: actual={}, expected={}, diff={}, tolerance={}",
                i, a, e, diff, tolerance
            );
        }
    }
}
