use crate::codec::{commit, MatrixCodec};
use log::debug;
use matgen_core::{Format, FormatError, Result};
use matgen_math::Matrix;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// One row per line, values separated by a single space.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCodec;

impl MatrixCodec for TextCodec {
    fn format(&self) -> Format {
        Format::Text
    }

    fn write(&self, path: &Path, matrix: &Matrix) -> Result<()> {
        write_text(path, matrix)
    }

    fn read(&self, path: &Path, out: &mut Matrix) -> Result<()> {
        read_text(path, out)
    }
}

pub fn write_text(path: &Path, matrix: &Matrix) -> Result<()> {
    // Blank lines are not rows; reject before touching the file.
    if matrix.is_empty() {
        return Err(FormatError::NoCells {
            rows: matrix.rows(),
            cols: matrix.cols(),
        }
        .into());
    }

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    let mut w = BufWriter::new(file);

    for r in 0..matrix.rows() {
        let mut first = true;
        for v in matrix.row(r)? {
            if !first {
                w.write_all(b" ")?;
            }
            write!(w, "{}", v)?;
            first = false;
        }
        w.write_all(b"\n")?;
    }

    let file = w.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;

    debug!(
        "wrote {}x{} text matrix to {}",
        matrix.rows(),
        matrix.cols(),
        path.display()
    );
    Ok(())
}

/// Dimensions come from the content: one row per non-blank line, column
/// count fixed by the first row.
pub fn read_text(path: &Path, out: &mut Matrix) -> Result<()> {
    let reader = BufReader::new(File::open(path)?);

    let mut cells: Vec<i32> = Vec::new();
    let mut rows = 0usize;
    let mut cols = 0usize;

    for (idx, raw) in reader.split(b'\n').enumerate() {
        let raw = raw?;
        let lineno = idx + 1;
        let line = std::str::from_utf8(&raw)
            .map_err(|_| FormatError::NotUtf8 { line: lineno })?;
        if line.trim().is_empty() {
            continue;
        }

        let before = cells.len();
        for token in line.split_whitespace() {
            let v = token.parse::<i32>().map_err(|_| FormatError::BadToken {
                line: lineno,
                token: token.to_string(),
            })?;
            cells.push(v);
        }
        let found = cells.len() - before;

        if rows == 0 {
            cols = found;
        } else if found != cols {
            return Err(FormatError::RaggedRow { line: lineno, expected: cols, found }.into());
        }
        rows += 1;
    }

    if rows == 0 {
        return Err(FormatError::Empty.into());
    }

    let mut tmp = Matrix::new(rows, cols)?;
    for (i, v) in cells.into_iter().enumerate() {
        tmp.set(i / cols, i % cols, v)?;
    }

    debug!("read {}x{} text matrix from {}", rows, cols, path.display());
    commit(tmp, out);
    Ok(())
}
