use std::fmt;
use std::ops::Index;
use std::slice::Iter;

use crate::error::LinalgError;
use crate::math::matrix::Matrix;

/// Fixed-length sequence of `f64` with geometric operations.
///
/// The dimension is set at construction and never changes; element values
/// change only through [`Vector::set`] and [`Vector::scale_in_place`].
#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    /// Build a vector from its elements. Fails on an empty list.
    pub fn from_vec(data: Vec<f64>) -> Result<Self, LinalgError> {
        if data.is_empty() {
            return Err(LinalgError::Construction(
                "vector must have at least one element".to_string(),
            ));
        }
        Ok(Self { data })
    }

    /// Zero-filled vector of dimension `dim`.
    pub fn zeros(dim: usize) -> Result<Self, LinalgError> {
        Self::from_vec(vec![0.0; dim])
    }

    pub(crate) fn from_vec_unchecked(data: Vec<f64>) -> Self {
        debug_assert!(!data.is_empty(), "vector must have at least one element");
        Self { data }
    }

    pub fn dim(&self) -> usize {
        self.data.len()
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    pub fn get(&self, index: usize) -> Result<f64, LinalgError> {
        self.data
            .get(index)
            .copied()
            .ok_or(LinalgError::OutOfBounds {
                index,
                len: self.dim(),
            })
    }

    pub fn set(&mut self, index: usize, value: f64) -> Result<(), LinalgError> {
        let len = self.dim();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(LinalgError::OutOfBounds { index, len }),
        }
    }

    pub fn mapv<F>(&self, mut f: F) -> Vector
    where
        F: FnMut(f64) -> f64,
    {
        Vector {
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Euclidean norm.
    pub fn magnitude(&self) -> f64 {
        dot_scalar_f64(&self.data, &self.data).sqrt()
    }

    /// New vector with every element multiplied by `factor`.
    pub fn scale(&self, factor: f64) -> Vector {
        self.mapv(|v| v * factor)
    }

    /// Multiply every element by `factor`, mutating this vector.
    pub fn scale_in_place(&mut self, factor: f64) {
        for v in self.data.iter_mut() {
            *v *= factor;
        }
    }

    /// Vector of magnitude 1 pointing the same way.
    pub fn unit_vector(&self) -> Result<Vector, LinalgError> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(LinalgError::InvalidOperation(
                "cannot normalize a zero-length vector".to_string(),
            ));
        }
        Ok(self.mapv(|v| v / magnitude))
    }

    pub fn dot(&self, other: &Vector) -> Result<f64, LinalgError> {
        if self.dim() != other.dim() {
            return Err(LinalgError::mismatch("dot", self.dim(), other.dim()));
        }
        Ok(dot_scalar_f64(&self.data, &other.data))
    }

    /// Cross product; only defined for 3-dimensional vectors.
    pub fn cross_product(&self, other: &Vector) -> Result<Vector, LinalgError> {
        if self.dim() != 3 || other.dim() != 3 {
            return Err(LinalgError::mismatch(
                "cross product",
                "3 and 3",
                format!("{} and {}", self.dim(), other.dim()),
            ));
        }
        let (a, b) = (&self.data, &other.data);
        Ok(Vector {
            data: vec![
                a[1] * b[2] - a[2] * b[1],
                a[2] * b[0] - a[0] * b[2],
                a[0] * b[1] - a[1] * b[0],
            ],
        })
    }

    /// Angle between two vectors in radians.
    ///
    /// The result is NaN when either vector has zero magnitude; callers that
    /// may see zero vectors need to check for that themselves.
    pub fn angle_between(&self, other: &Vector) -> Result<f64, LinalgError> {
        if self.dim() != other.dim() {
            return Err(LinalgError::mismatch(
                "angle between",
                self.dim(),
                other.dim(),
            ));
        }
        let cos =
            dot_scalar_f64(&self.data, &other.data) / (self.magnitude() * other.magnitude());
        // Rounding can push parallel vectors just past +-1.
        Ok(cos.clamp(-1.0, 1.0).acos())
    }

    /// `dim x 1` matrix holding the same elements.
    pub fn to_column_matrix(&self) -> Matrix {
        Matrix::from_parts(self.dim(), 1, self.data.clone())
    }

    /// `1 x dim` matrix holding the same elements.
    pub fn to_row_matrix(&self) -> Matrix {
        Matrix::from_parts(1, self.dim(), self.data.clone())
    }

    /// True when both vectors have the same dimension and every pair of
    /// elements differs by at most `tolerance`.
    pub fn approx_eq(&self, other: &Vector, tolerance: f64) -> bool {
        self.dim() == other.dim()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

fn dot_scalar_f64(lhs: &[f64], rhs: &[f64]) -> f64 {
    lhs.iter().zip(rhs.iter()).map(|(a, b)| a * b).sum()
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = LinalgError;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        Vector::from_vec(value)
    }
}

impl From<Vector> for Vec<f64> {
    fn from(value: Vector) -> Self {
        value.data
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    /// Panics on an out-of-range index; use [`Vector::get`] for a checked read.
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_row(f, &self.data)
    }
}

/// Writes `[a b c]`, honoring a precision given to the formatter.
pub(crate) fn write_row(f: &mut fmt::Formatter<'_>, values: &[f64]) -> fmt::Result {
    write!(f, "[")?;
    for (idx, value) in values.iter().enumerate() {
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, value)?,
            None => write!(f, "{}", value)?,
        }
        if idx + 1 != values.len() {
            write!(f, " ")?;
        }
    }
    write!(f, "]")
}
