//! `std::ops` impls for the container types. The panicking operator surface
//! wraps the `try_*` methods; callers that want a `Result` use those
//! directly.

use crate::{BoundedVec, TriangularMatrix};
use ark_std::ops::{Add, Index, IndexMut, Sub};

impl<T> Index<isize> for BoundedVec<T> {
    type Output = T;

    fn index(&self, index: isize) -> &T {
        self.get(index).unwrap()
    }
}

impl<T> IndexMut<isize> for BoundedVec<T> {
    fn index_mut(&mut self, index: isize) -> &mut T {
        self.get_mut(index).unwrap()
    }
}

impl<T> Index<isize> for TriangularMatrix<T> {
    type Output = BoundedVec<T>;

    fn index(&self, index: isize) -> &BoundedVec<T> {
        self.row(index).unwrap()
    }
}

impl<T> IndexMut<isize> for TriangularMatrix<T> {
    fn index_mut(&mut self, index: isize) -> &mut BoundedVec<T> {
        self.row_mut(index).unwrap()
    }
}

impl<T: Clone + for<'a> Add<&'a T, Output = T>> Add for TriangularMatrix<T> {
    type Output = TriangularMatrix<T>;

    fn add(self, other: Self) -> TriangularMatrix<T> {
        self.try_add(&other).unwrap()
    }
}

impl<T: Clone + for<'a> Add<&'a T, Output = T>> Add for &TriangularMatrix<T> {
    type Output = TriangularMatrix<T>;

    fn add(self, other: Self) -> TriangularMatrix<T> {
        self.try_add(other).unwrap()
    }
}

impl<T: Clone + for<'a> Sub<&'a T, Output = T>> Sub for TriangularMatrix<T> {
    type Output = TriangularMatrix<T>;

    fn sub(self, other: Self) -> TriangularMatrix<T> {
        self.try_sub(&other).unwrap()
    }
}

impl<T: Clone + for<'a> Sub<&'a T, Output = T>> Sub for &TriangularMatrix<T> {
    type Output = TriangularMatrix<T>;

    fn sub(self, other: Self) -> TriangularMatrix<T> {
        self.try_sub(other).unwrap()
    }
}
