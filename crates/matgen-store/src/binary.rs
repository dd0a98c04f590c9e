use crate::codec::{commit, MatrixCodec};
use log::debug;
use matgen_core::{BinaryHeader, Format, FormatError, Result, CELL_SIZE};
use matgen_math::Matrix;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// `BinaryHeader` followed by row-major little-endian i32 cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryCodec;

impl MatrixCodec for BinaryCodec {
    fn format(&self) -> Format {
        Format::Binary
    }

    fn write(&self, path: &Path, matrix: &Matrix) -> Result<()> {
        write_bin(path, matrix)
    }

    fn read(&self, path: &Path, out: &mut Matrix) -> Result<()> {
        read_bin(path, out)
    }
}

pub fn write_bin(path: &Path, matrix: &Matrix) -> Result<()> {
    // Reject before touching the file.
    let header = BinaryHeader::for_shape(matrix.rows(), matrix.cols())?;

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    let mut w = BufWriter::new(file);

    w.write_all(&header.to_bytes())?;
    for r in 0..matrix.rows() {
        for v in matrix.row(r)? {
            w.write_all(&v.to_le_bytes())?;
        }
    }

    let file = w.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;

    debug!(
        "wrote {}x{} binary matrix to {}",
        header.rows,
        header.cols,
        path.display()
    );
    Ok(())
}

pub fn read_bin(path: &Path, out: &mut Matrix) -> Result<()> {
    let bytes = fs::read(path)?;

    let header = BinaryHeader::from_bytes(&bytes)?;
    let expected = header.file_len()?;
    if bytes.len() < expected {
        return Err(FormatError::TruncatedPayload { expected, found: bytes.len() }.into());
    }
    if bytes.len() > expected {
        return Err(FormatError::TrailingBytes { expected, found: bytes.len() }.into());
    }

    let rows = header.rows as usize;
    let cols = header.cols as usize;
    let mut tmp = Matrix::new(rows, cols)?;

    let cells = bytes[BinaryHeader::SIZE..].chunks_exact(CELL_SIZE);
    for (i, chunk) in cells.enumerate() {
        let mut raw = [0u8; CELL_SIZE];
        raw.copy_from_slice(chunk);
        tmp.set(i / cols, i % cols, i32::from_le_bytes(raw))?;
    }

    debug!("read {}x{} binary matrix from {}", rows, cols, path.display());
    commit(tmp, out);
    Ok(())
}
