// src/tensor/display.rs

use std::fmt;

use crate::buffer::Buffer;
use crate::tensor::Tensor;

// Terse one-line Debug: shape and tag only, no data dump.
impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tensor(rows={}, cols={}, dtype={:?})",
            self.rows,
            self.cols,
            self.dtype()
        )
    }
}

/// Human-readable grid rendering: a dtype header line followed by the
/// `rows x cols` grid, with a row break after every `cols` elements.
impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} tensor ({}x{}):", self.dtype(), self.rows, self.cols)?;
        match &self.buffer {
            Buffer::F32(data) => write_grid(f, data, self.cols),
            Buffer::F16(data) => write_grid(f, data, self.cols),
            Buffer::I8(data) => write_grid(f, data, self.cols),
        }
    }
}

fn write_grid<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    data: &[T],
    cols: usize,
) -> fmt::Result {
    for row in data.chunks(cols.max(1)) {
        for (i, value) in row.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        writeln!(f)?;
    }
    Ok(())
}
