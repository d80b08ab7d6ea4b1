use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinalgError {
    /// Requested size is negative or exceeds the container's maximum bound.
    #[error("Invalid size {0}: must be within 0..={1}")]
    InvalidSize(isize, usize),
    /// Indexed access outside the container's current dimension.
    #[error("Index {0} out of range for length {1}")]
    IndexOutOfRange(isize, usize),
    /// Fail due to operations on structures of unexpected differing sizes.
    #[error("Unexpected different sizes: {0} and {1}")]
    SizeMismatch(usize, usize),
    /// Row lengths do not form an upper triangle.
    #[error("Row {row} has length {len}, expected {expected}")]
    NotTriangular {
        row: usize,
        len: usize,
        expected: usize,
    },
}
