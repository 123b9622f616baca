// SPDX-License-Identifier: MIT OR Apache-2.0

//! Compile-time sized matrices and vectors.
//!
//! Dimensions are const generic parameters, so shape contracts — addition
//! requires identical shapes, multiplication requires agreeing inner
//! dimensions, identity and in-place transposition require square shapes —
//! are enforced by the type system. Mixed element types are supported
//! throughout: binary operators resolve their result element type through
//! the promotion rules in [`utils::num::promote`].
//!
//! ```
//! use statmat::{matrix::Matrix, vector::Vector};
//!
//! let ints = Matrix::new([[1, 2, 3], [4, 5, 6]]);
//! let doubles = Matrix::<f64, 2, 3>::ones();
//!
//! // the sum of an i32 matrix and an f64 matrix is an f64 matrix
//! let sum: Matrix<f64, 2, 3> = ints + doubles;
//! assert_eq!(sum.as_slice(), &[2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
//!
//! let v1 = Vector::new([3, 4, 5]);
//! let v2 = Vector::new([7, 2, 4]);
//! assert_eq!(v1.dot(&v2), 49);
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod matrix;
pub mod shape;
pub mod utils;
pub mod vector;

pub use crate::{matrix::Matrix, shape::Shape, vector::Vector};
