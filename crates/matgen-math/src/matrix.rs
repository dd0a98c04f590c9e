use matgen_core::{MatgenError, Result};

use alloc::vec::Vec;

/// Dense row-major matrix of i32 cells.
/// INVARIANT: `data.len() == rows * cols`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i32>,
}

impl Matrix {
    /// The 0x0 matrix.
    pub const fn empty() -> Self {
        Self { rows: 0, cols: 0, data: Vec::new() }
    }

    /// Zero-filled `rows x cols` matrix. Either dimension may be zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let cells = rows
            .checked_mul(cols)
            .filter(|n| {
                n.checked_mul(core::mem::size_of::<i32>())
                    .map_or(false, |bytes| bytes <= isize::MAX as usize)
            })
            .ok_or(MatgenError::Allocation { rows, cols })?;

        let mut data = Vec::new();
        data.try_reserve_exact(cells)
            .map_err(|_| MatgenError::Allocation { rows, cols })?;
        data.resize(cells, 0);

        Ok(Self { rows, cols, data })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(MatgenError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    pub fn at(&self, row: usize, col: usize) -> Result<&i32> {
        let i = self.offset(row, col)?;
        Ok(&self.data[i])
    }

    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut i32> {
        let i = self.offset(row, col)?;
        Ok(&mut self.data[i])
    }

    pub fn get(&self, row: usize, col: usize) -> Result<i32> {
        self.at(row, col).copied()
    }

    pub fn set(&mut self, row: usize, col: usize, value: i32) -> Result<()> {
        *self.at_mut(row, col)? = value;
        Ok(())
    }

    /// Cells of one row. Empty slice when `cols == 0`.
    pub fn row(&self, row: usize) -> Result<&[i32]> {
        if row >= self.rows {
            return Err(MatgenError::OutOfBounds {
                row,
                col: 0,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let start = row * self.cols;
        Ok(&self.data[start..start + self.cols])
    }

    /// Row-major view of all cells.
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// O(1) exchange of dimensions and storage. Used to commit a fully
    /// built temporary into a caller's matrix.
    pub fn swap(&mut self, other: &mut Matrix) {
        core::mem::swap(self, other);
    }
}
