#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
extern crate ark_std;

mod error;
mod ops;
pub mod triangular;
pub mod vector;

pub use error::LinalgError;
pub use triangular::{TriangularMatrix, MAX_MATRIX_SIZE};
pub use vector::{BoundedVec, MAX_VECTOR_SIZE};
