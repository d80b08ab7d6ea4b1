use crate::LinalgError;
use ark_std::{
    ops::{Add, Sub},
    rand::Rng,
    vec::*,
    UniformRand, Zero,
};

/// Largest logical size a [`BoundedVec`] accepts at construction.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;

/// Owned, size-capped contiguous container with signed checked indexing.
///
/// Indices are `isize` so that a genuinely negative index fails with
/// [`LinalgError::IndexOutOfRange`] instead of wrapping.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoundedVec<T> {
    elems: Vec<T>,
}

/// Validates a requested size against a container's cap.
pub(crate) fn check_size(size: isize, max: usize) -> Result<usize, LinalgError> {
    match usize::try_from(size) {
        Ok(n) if n <= max => Ok(n),
        _ => Err(LinalgError::InvalidSize(size, max)),
    }
}

impl<T> BoundedVec<T> {
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub fn get(&self, index: isize) -> Result<&T, LinalgError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.elems.get(i))
            .ok_or(LinalgError::IndexOutOfRange(index, self.elems.len()))
    }

    pub fn get_mut(&mut self, index: isize) -> Result<&mut T, LinalgError> {
        let len = self.elems.len();
        usize::try_from(index)
            .ok()
            .and_then(|i| self.elems.get_mut(i))
            .ok_or(LinalgError::IndexOutOfRange(index, len))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elems
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.elems.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.elems.iter_mut()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.elems
    }
}

impl<T: Clone + Zero> BoundedVec<T> {
    /// Zero-filled vector of `size` elements.
    pub fn zero(size: isize) -> Result<Self, LinalgError> {
        let n = check_size(size, MAX_VECTOR_SIZE)?;
        Ok(Self {
            elems: vec![T::zero(); n],
        })
    }
}

impl<T: UniformRand> BoundedVec<T> {
    pub fn rand<RND: Rng>(rng: &mut RND, size: isize) -> Result<Self, LinalgError> {
        let n = check_size(size, MAX_VECTOR_SIZE)?;
        Ok(Self {
            elems: (0..n).map(|_| T::rand(rng)).collect(),
        })
    }
}

impl<T> TryFrom<Vec<T>> for BoundedVec<T> {
    type Error = LinalgError;

    fn try_from(elems: Vec<T>) -> Result<Self, LinalgError> {
        if elems.len() > MAX_VECTOR_SIZE {
            return Err(LinalgError::InvalidSize(elems.len() as isize, MAX_VECTOR_SIZE));
        }
        Ok(Self { elems })
    }
}

impl<T: Clone + for<'a> Add<&'a T, Output = T>> BoundedVec<T> {
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        if self.len() != other.len() {
            return None;
        }

        let elems = self
            .elems
            .iter()
            .zip(&other.elems)
            .map(|(a, b)| a.clone() + b)
            .collect();
        Some(Self { elems })
    }

    pub fn try_add(&self, other: &Self) -> Result<Self, LinalgError> {
        self.checked_add(other)
            .ok_or(LinalgError::SizeMismatch(self.len(), other.len()))
    }
}

impl<T: Clone + for<'a> Sub<&'a T, Output = T>> BoundedVec<T> {
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        if self.len() != other.len() {
            return None;
        }

        let elems = self
            .elems
            .iter()
            .zip(&other.elems)
            .map(|(a, b)| a.clone() - b)
            .collect();
        Some(Self { elems })
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self, LinalgError> {
        self.checked_sub(other)
            .ok_or(LinalgError::SizeMismatch(self.len(), other.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_vec() -> BoundedVec<i32> {
        vec![1, 2, 3, 4].try_into().unwrap()
    }

    #[test]
    fn test_zero_vector() {
        let v = BoundedVec::<i32>::zero(5).unwrap();

        assert_eq!(v.len(), 5);
        assert!(v.iter().all(|e| *e == 0));
    }

    #[test]
    fn test_zero_length_vector() {
        let v = BoundedVec::<i32>::zero(0).unwrap();

        assert!(v.is_empty());
    }

    #[test]
    fn test_negative_size_rejected() {
        let result = BoundedVec::<i32>::zero(-5);

        assert_eq!(result, Err(LinalgError::InvalidSize(-5, MAX_VECTOR_SIZE)));
    }

    #[test]
    fn test_oversized_rejected() {
        let too_large = MAX_VECTOR_SIZE as isize + 1;
        let result = BoundedVec::<i32>::zero(too_large);

        assert_eq!(
            result,
            Err(LinalgError::InvalidSize(too_large, MAX_VECTOR_SIZE))
        );
    }

    #[test]
    fn test_get_and_set() {
        let mut v = BoundedVec::<i32>::zero(4).unwrap();

        *v.get_mut(2).unwrap() = 7;

        assert_eq!(v.get(2), Ok(&7));
    }

    #[test]
    fn test_get_out_of_range() {
        let v = sample_vec();

        assert_eq!(v.get(4), Err(LinalgError::IndexOutOfRange(4, 4)));
        assert_eq!(v.get(-1), Err(LinalgError::IndexOutOfRange(-1, 4)));
    }

    #[test]
    fn test_clone_is_equal() {
        let v = sample_vec();

        assert_eq!(v.clone(), v);
    }

    #[test]
    fn test_clone_has_own_storage() {
        let v = sample_vec();
        let mut c = v.clone();

        *c.get_mut(0).unwrap() = 9;

        assert_eq!(v.get(0), Ok(&1));
        assert_ne!(v.as_slice().as_ptr(), c.as_slice().as_ptr());
    }

    #[test]
    fn test_different_lengths_not_equal() {
        let v = sample_vec();
        let w: BoundedVec<i32> = vec![1, 2, 3].try_into().unwrap();

        assert_ne!(v, w);
    }

    #[test]
    fn test_elementwise_add() {
        let v = sample_vec();
        let w: BoundedVec<i32> = vec![10, 20, 30, 40].try_into().unwrap();

        let sum = v.try_add(&w).unwrap();

        assert_eq!(sum.as_slice(), &[11, 22, 33, 44]);
    }

    #[test]
    fn test_elementwise_sub() {
        let v: BoundedVec<i32> = vec![10, 20, 30].try_into().unwrap();
        let w: BoundedVec<i32> = vec![1, 2, 3].try_into().unwrap();

        let diff = v.try_sub(&w).unwrap();

        assert_eq!(diff.as_slice(), &[9, 18, 27]);
    }

    #[test]
    fn test_add_length_mismatch() {
        let v = sample_vec();
        let w = BoundedVec::<i32>::zero(3).unwrap();

        assert_eq!(v.checked_add(&w), None);
        assert_eq!(v.try_add(&w), Err(LinalgError::SizeMismatch(4, 3)));
        assert_eq!(v.try_sub(&w), Err(LinalgError::SizeMismatch(4, 3)));
    }

    #[test]
    fn test_rand_vector() {
        let mut rng = ark_std::test_rng();

        let v = BoundedVec::<u64>::rand(&mut rng, 16).unwrap();

        assert_eq!(v.len(), 16);
    }
}
