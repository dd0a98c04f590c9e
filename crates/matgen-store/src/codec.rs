use matgen_core::{Format, Result};
use matgen_math::Matrix;
use std::path::Path;

/// A paired encoder/decoder between a Matrix and one file representation.
pub trait MatrixCodec: Send + Sync {
    fn format(&self) -> Format;

    /// Create or truncate `path` and write `matrix` to it.
    /// Data is flushed to the device before returning.
    fn write(&self, path: &Path, matrix: &Matrix) -> Result<()>;

    /// Decode `path` into `out`.
    /// All-or-nothing: on any error `out` is left exactly as it was.
    fn read(&self, path: &Path, out: &mut Matrix) -> Result<()>;
}

/// Hand a fully built temporary over to the caller.
pub(crate) fn commit(mut tmp: Matrix, out: &mut Matrix) {
    out.swap(&mut tmp);
}
