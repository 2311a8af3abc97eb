use std::fmt;
use std::ops::Index;

use crate::error::LinalgError;
use crate::math::vector::{write_row, Vector};

/// Dense `rows x cols` grid of `f64`, stored row-major.
///
/// Both dimensions are positive and fixed at construction. Arithmetic
/// returns a new matrix; only [`Matrix::set`] mutates in place.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Square size above which [`Matrix::determinant`] logs a warning.
    pub const DETERMINANT_WARN_SIZE: usize = 8;

    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert!(rows > 0 && cols > 0 && data.len() == rows * cols);
        Self { data, rows, cols }
    }

    /// Validates a shape and returns its element count.
    fn check_dims(rows: usize, cols: usize) -> Result<usize, LinalgError> {
        if rows == 0 || cols == 0 {
            return Err(LinalgError::Construction(format!(
                "matrix dimensions must be positive, got {}x{}",
                rows, cols
            )));
        }
        rows.checked_mul(cols).ok_or_else(|| {
            LinalgError::Construction(format!(
                "matrix shape {}x{} overflows the element count",
                rows, cols
            ))
        })
    }

    /// Build from a flat row-major buffer.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self, LinalgError> {
        let (rows, cols) = shape;
        let len = Self::check_dims(rows, cols)?;
        if data.len() != len {
            return Err(LinalgError::Construction(format!(
                "invalid shape ({}, {}) for buffer of length {}",
                rows,
                cols,
                data.len()
            )));
        }
        Ok(Self { data, rows, cols })
    }

    /// Build from a grid of rows. Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, LinalgError> {
        let nrows = rows.len();
        let ncols = rows.first().map(Vec::len).unwrap_or(0);
        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != ncols) {
            return Err(LinalgError::Construction(format!(
                "row {} has {} elements, expected {}",
                idx,
                row.len(),
                ncols
            )));
        }
        Self::from_shape_vec((nrows, ncols), rows.into_iter().flatten().collect())
    }

    /// Single-row matrix wrapping `data`.
    pub fn row_vector(data: Vec<f64>) -> Result<Self, LinalgError> {
        let cols = data.len();
        Self::from_shape_vec((1, cols), data)
    }

    /// Stack vectors as rows. All vectors must share one dimension.
    pub fn from_vectors(rows: &[Vector]) -> Result<Self, LinalgError> {
        let first = rows.first().ok_or_else(|| {
            LinalgError::Construction("cannot stack an empty list of vectors".to_string())
        })?;
        let cols = first.dim();
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (idx, row) in rows.iter().enumerate() {
            if row.dim() != cols {
                return Err(LinalgError::Construction(format!(
                    "vector {} has dimension {}, expected {}",
                    idx,
                    row.dim(),
                    cols
                )));
            }
            data.extend_from_slice(row.as_slice());
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Self, LinalgError> {
        let len = Self::check_dims(rows, cols)?;
        Ok(Self {
            data: vec![0.0; len],
            rows,
            cols,
        })
    }

    pub fn identity(n: usize) -> Result<Self, LinalgError> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            let offset = m.offset(i, i);
            m.data[offset] = 1.0;
        }
        Ok(m)
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_row(&self, row: usize) -> Result<(), LinalgError> {
        if row >= self.rows {
            return Err(LinalgError::OutOfBounds {
                index: row,
                len: self.rows,
            });
        }
        Ok(())
    }

    fn check_col(&self, col: usize) -> Result<(), LinalgError> {
        if col >= self.cols {
            return Err(LinalgError::OutOfBounds {
                index: col,
                len: self.cols,
            });
        }
        Ok(())
    }

    pub fn row_slice(&self, row: usize) -> Result<&[f64], LinalgError> {
        self.check_row(row)?;
        let start = self.offset(row, 0);
        Ok(&self.data[start..start + self.cols])
    }

    pub fn row(&self, row: usize) -> Result<Vector, LinalgError> {
        Ok(Vector::from_vec_unchecked(self.row_slice(row)?.to_vec()))
    }

    pub fn column(&self, col: usize) -> Result<Vector, LinalgError> {
        self.check_col(col)?;
        let values = (0..self.rows)
            .map(|row| self.data[self.offset(row, col)])
            .collect();
        Ok(Vector::from_vec_unchecked(values))
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64, LinalgError> {
        self.check_row(row)?;
        self.check_col(col)?;
        Ok(self.data[self.offset(row, col)])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), LinalgError> {
        self.check_row(row)?;
        self.check_col(col)?;
        let offset = self.offset(row, col);
        self.data[offset] = value;
        Ok(())
    }

    pub fn mapv<F>(&self, mut f: F) -> Matrix
    where
        F: FnMut(f64) -> f64,
    {
        Matrix {
            data: self.data.iter().map(|&v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn shape_str(&self) -> String {
        format!("{}x{}", self.rows, self.cols)
    }

    fn zip_with<F>(&self, other: &Matrix, op: &'static str, f: F) -> Result<Matrix, LinalgError>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.shape() != other.shape() {
            return Err(LinalgError::mismatch(
                op,
                self.shape_str(),
                other.shape_str(),
            ));
        }
        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Elementwise sum.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, LinalgError> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Elementwise difference `self - other`.
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix, LinalgError> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    /// Hadamard (elementwise) product.
    pub fn hadamard(&self, other: &Matrix) -> Result<Matrix, LinalgError> {
        self.zip_with(other, "hadamard", |a, b| a * b)
    }

    /// Matrix product `self * rhs`; requires `self.ncols() == rhs.nrows()`.
    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix, LinalgError> {
        if self.cols != rhs.rows {
            return Err(LinalgError::mismatch(
                "multiply",
                format!("right operand with {} rows", self.cols),
                format!("{} * {}", self.shape_str(), rhs.shape_str()),
            ));
        }
        let mut data = Vec::with_capacity(self.rows * rhs.cols);
        for row in 0..self.rows {
            let lhs_row = &self.data[self.offset(row, 0)..self.offset(row, 0) + self.cols];
            for col in 0..rhs.cols {
                let value: f64 = lhs_row
                    .iter()
                    .enumerate()
                    .map(|(k, a)| a * rhs.data[rhs.offset(k, col)])
                    .sum();
                data.push(value);
            }
        }
        Ok(Matrix::from_parts(self.rows, rhs.cols, data))
    }

    pub fn transpose(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self.data[self.offset(row, col)]);
            }
        }
        Matrix::from_parts(self.cols, self.rows, data)
    }

    /// Submatrix with `row` and `col` removed.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix, LinalgError> {
        self.check_row(row)?;
        self.check_col(col)?;
        if self.rows < 2 || self.cols < 2 {
            return Err(LinalgError::InvalidOperation(format!(
                "minor of a {} matrix is empty",
                self.shape_str()
            )));
        }
        Ok(self.minor_unchecked(row, col))
    }

    fn minor_unchecked(&self, row: usize, col: usize) -> Matrix {
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for r in (0..self.rows).filter(|&r| r != row) {
            for c in (0..self.cols).filter(|&c| c != col) {
                data.push(self.data[self.offset(r, c)]);
            }
        }
        Matrix::from_parts(self.rows - 1, self.cols - 1, data)
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// 2x2 matrices use the closed form `ad - bc`. The expansion is O(n!),
    /// so this is only practical for small matrices; nothing cuts it off for
    /// large inputs.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NotSquare`] if the matrix is not square.
    pub fn determinant(&self) -> Result<f64, LinalgError> {
        if !self.is_square() {
            return Err(LinalgError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.rows > Self::DETERMINANT_WARN_SIZE {
            log::warn!(
                "Determinant of a {}x{} matrix by cofactor expansion; cost grows factorially",
                self.rows,
                self.cols
            );
        } else {
            log::debug!("Determinant of a {}x{} matrix", self.rows, self.cols);
        }
        Ok(self.cofactor_expansion())
    }

    fn cofactor_expansion(&self) -> f64 {
        match self.rows {
            1 => self.data[0],
            2 => self.data[0] * self.data[3] - self.data[1] * self.data[2],
            n => (0..n)
                .map(|j| {
                    let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
                    sign * self.data[j] * self.minor_unchecked(0, j).cofactor_expansion()
                })
                .sum(),
        }
    }

    /// Apply this matrix to `v` as a column vector.
    pub fn transform_vector(&self, v: &Vector) -> Result<Vector, LinalgError> {
        if v.dim() != self.cols {
            return Err(LinalgError::mismatch(
                "transform vector",
                format!("vector of dimension {}", self.cols),
                v.dim(),
            ));
        }
        self.multiply(&v.to_column_matrix())?.column(0)
    }

    /// True when both matrices have the same shape and every pair of
    /// elements differs by at most `tolerance`.
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    /// Panics on an out-of-range index; use [`Matrix::get`] for a checked read.
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index ({}, {}) out of bounds for {}x{}",
            index.0,
            index.1,
            self.rows,
            self.cols
        );
        &self.data[self.offset(index.0, index.1)]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols) {
            write_row(f, row)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
