#![no_std]
#![forbid(unsafe_code)]

use matgen_core::Result;
use matgen_math::Matrix;
use rand_core::RngCore;

/// Write `f(row, col)` into every cell, row by row.
pub fn fill_with<F>(matrix: &mut Matrix, mut f: F) -> Result<()>
where
    F: FnMut(usize, usize) -> i32,
{
    for r in 0..matrix.rows() {
        for c in 0..matrix.cols() {
            *matrix.at_mut(r, c)? = f(r, c);
        }
    }
    Ok(())
}

/// Non-negative value in `[0, i32::MAX]`.
#[inline]
pub fn random_cell<R: RngCore>(rng: &mut R) -> i32 {
    (rng.next_u32() >> 1) as i32
}

/// A fresh `rows x cols` matrix of random non-negative cells.
/// Reproducible only when `rng` is seeded by the caller.
pub fn random_matrix<R: RngCore>(rows: usize, cols: usize, rng: &mut R) -> Result<Matrix> {
    let mut m = Matrix::new(rows, cols)?;
    fill_with(&mut m, |_, _| random_cell(rng))?;
    Ok(m)
}

/// Like `random_matrix`, but commits into `out` only on success.
pub fn random_into<R: RngCore>(
    rows: usize,
    cols: usize,
    rng: &mut R,
    out: &mut Matrix,
) -> Result<()> {
    let mut tmp = random_matrix(rows, cols, rng)?;
    out.swap(&mut tmp);
    Ok(())
}
