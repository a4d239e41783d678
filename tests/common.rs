use tensorquant::Tensor;

// Helper to create a basic F32 tensor for testing.
// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub(crate) fn create_test_tensor(data: Vec<f32>, rows: usize, cols: usize) -> Tensor {
    Tensor::new(data, rows, cols).expect("Test tensor creation failed")
}
