use crate::{vector::check_size, BoundedVec, LinalgError};
use ark_std::{
    ops::{Add, Sub},
    rand::Rng,
    vec::*,
    UniformRand, Zero,
};

/// Largest dimension a [`TriangularMatrix`] accepts at construction.
pub const MAX_MATRIX_SIZE: usize = 10_000;

/// Square matrix storing only the upper triangle, diagonal included.
///
/// Row `i` holds the `size - i` entries on or right of the diagonal, with
/// row-relative columns: element `(i, j)` of the full square lives at
/// `m[i][j - i]`. Indexing the matrix yields the row as a [`BoundedVec`],
/// so `m[i][j]` composes the bounds checks of both levels.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TriangularMatrix<T> {
    rows: Vec<BoundedVec<T>>,
}

impl<T> TriangularMatrix<T> {
    /// The matrix dimension, equal to the number of stored rows.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, index: isize) -> Result<&BoundedVec<T>, LinalgError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.rows.get(i))
            .ok_or(LinalgError::IndexOutOfRange(index, self.rows.len()))
    }

    pub fn row_mut(&mut self, index: isize) -> Result<&mut BoundedVec<T>, LinalgError> {
        let size = self.rows.len();
        usize::try_from(index)
            .ok()
            .and_then(|i| self.rows.get_mut(i))
            .ok_or(LinalgError::IndexOutOfRange(index, size))
    }

    pub fn iter(&self) -> impl Iterator<Item = &BoundedVec<T>> {
        self.rows.iter()
    }
}

impl<T: Clone + Zero> TriangularMatrix<T> {
    /// Zero-filled matrix of dimension `size`.
    pub fn zero(size: isize) -> Result<Self, LinalgError> {
        let n = check_size(size, MAX_MATRIX_SIZE)?;
        let rows = (0..n)
            .map(|i| BoundedVec::zero((n - i) as isize))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rows })
    }

    /// Expands the stored triangle into a full square, zero below the
    /// diagonal.
    pub fn to_dense(&self) -> Vec<Vec<T>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let mut full = vec![T::zero(); i];
                full.extend(row.iter().cloned());
                full
            })
            .collect()
    }
}

impl<T: UniformRand> TriangularMatrix<T> {
    pub fn rand<RND: Rng>(rng: &mut RND, size: isize) -> Result<Self, LinalgError> {
        let n = check_size(size, MAX_MATRIX_SIZE)?;
        let rows = (0..n)
            .map(|i| BoundedVec::rand(rng, (n - i) as isize))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rows })
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for TriangularMatrix<T> {
    type Error = LinalgError;

    /// Builds a matrix from rows of strictly decreasing length, row `i`
    /// holding `n - i` elements.
    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, LinalgError> {
        let n = rows.len();
        if n > MAX_MATRIX_SIZE {
            return Err(LinalgError::InvalidSize(n as isize, MAX_MATRIX_SIZE));
        }

        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                if row.len() != n - i {
                    return Err(LinalgError::NotTriangular {
                        row: i,
                        len: row.len(),
                        expected: n - i,
                    });
                }
                BoundedVec::try_from(row)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rows })
    }
}

impl<T: Clone + for<'a> Add<&'a T, Output = T>> TriangularMatrix<T> {
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        if self.size() != other.size() {
            return None;
        }

        let rows = self
            .rows
            .iter()
            .zip(&other.rows)
            .map(|(a, b)| a.checked_add(b))
            .collect::<Option<Vec<_>>>()?;
        Some(Self { rows })
    }

    pub fn try_add(&self, other: &Self) -> Result<Self, LinalgError> {
        self.checked_add(other)
            .ok_or(LinalgError::SizeMismatch(self.size(), other.size()))
    }
}

impl<T: Clone + for<'a> Sub<&'a T, Output = T>> TriangularMatrix<T> {
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        if self.size() != other.size() {
            return None;
        }

        let rows = self
            .rows
            .iter()
            .zip(&other.rows)
            .map(|(a, b)| a.checked_sub(b))
            .collect::<Option<Vec<_>>>()?;
        Some(Self { rows })
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self, LinalgError> {
        self.checked_sub(other)
            .ok_or(LinalgError::SizeMismatch(self.size(), other.size()))
    }
}
