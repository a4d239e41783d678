/// Defines the possible data types for Tensor elements.
///
/// The tag decides which `Buffer` variant a tensor carries and how wide
/// each element is in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// 32-bit floating-point type.
    F32,
    /// 16-bit floating-point type (stored as `half::f16`).
    F16,
    /// 8-bit signed integer type (quantized values).
    I8,
}

impl DType {
    /// Returns the width of one element of this type, in bytes.
    pub fn size_of(&self) -> usize {
        match self {
            DType::F32 => std::mem::size_of::<f32>(),
            DType::F16 => std::mem::size_of::<half::f16>(),
            DType::I8 => std::mem::size_of::<i8>(),
        }
    }
}

impl std::fmt::Display for DType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DType::F32 => write!(f, "Float32"),
            DType::F16 => write!(f, "Float16"),
            DType::I8 => write!(f, "Int8"),
        }
    }
}
