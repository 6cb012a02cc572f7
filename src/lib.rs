//! Dense vectors of `f64` with value semantics.
//!
//! [`Vector`] is an owning, fixed-length vector supporting
//! element-wise arithmetic (through the usual operators), reductions
//! (min, max and their indices), sign predicates and strided
//! iteration.  Sub-ranges of a vector, possibly with a stride, can be
//! borrowed as [`View`]s and [`ViewMut`]s which support the same
//! operations.
//!
//! Most operations are provided by the traits [`VectorRef`] and
//! [`VectorMut`]; bring them into scope with the [`prelude`].
//!
//! # Example
//!
//! ```
//! use densevec::prelude::*;
//! # fn main() -> densevec::Result<()> {
//! let mut v = vector![1, 2, 3];
//! v.axpby(&vector![2, 2, 2], 2., 3.)?;  // v = 2 [2,2,2] + 3 v
//! assert_eq!(v, vector![7, 10, 13]);
//! assert_eq!(v.minmax_index()?, (0, 2));
//! let odd = v.subvector_with_stride(0, 2, 2)?;
//! assert_eq!(odd, vector![7, 13]);
//! # Ok(()) }
//! ```
//!
//! # Errors
//!
//! Out of bounds indices, vectors of different lengths and reductions
//! of empty vectors are reported as [`Error`]s by the fallible
//! methods.  The operators (`+`, `[]`,...) panic with the same
//! message.

use std::fmt::{self, Debug, Display, Formatter};
use log::debug;

pub mod vector;
#[cfg(feature = "sundials")]
pub mod nvector;

pub use vector::{
    Vector,
    VectorRef, VectorMut,
    View, ViewMut,
    Iter, IterMut,
    Cursor, CursorMut,
};

/// Convenience re-exports: the vector type, the traits carrying its
/// operations and the [`vector!`] macro.
pub mod prelude {
    pub use crate::vector::{Vector, VectorRef, VectorMut, View, ViewMut};
    pub use crate::vector;
}

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

////////////////////////////////////////////////////////////////////////
//
// Error

#[derive(Clone, PartialEq, Eq)]
pub enum Error {
    /// The index `index` is not smaller than the length `len` of the
    /// vector.
    OutOfBounds { name: &'static str, index: usize, len: usize },
    /// A binary operation was attempted on vectors of lengths `left`
    /// and `right`.
    LengthMismatch { name: &'static str, left: usize, right: usize },
    /// The reduction has no value on a vector of length 0.
    Empty { name: &'static str },
    /// Views must have a stride ≥ 1.
    InvalidStride { name: &'static str },
    /// The function failed with the attached message (without
    /// further details).
    #[cfg(feature = "sundials")]
    Fail { name: &'static str, msg: &'static str },
}

impl Error {
    pub(crate) fn out_of_bounds(
        name: &'static str, index: usize, len: usize
    ) -> Self {
        debug!("{}: index {} out of bounds (len = {})", name, index, len);
        Error::OutOfBounds { name, index, len }
    }

    pub(crate) fn length_mismatch(
        name: &'static str, left: usize, right: usize
    ) -> Self {
        debug!("{}: lengths {} and {} differ", name, left, right);
        Error::LengthMismatch { name, left, right }
    }

    pub(crate) fn empty(name: &'static str) -> Self {
        debug!("{}: empty vector", name);
        Error::Empty { name }
    }

    pub(crate) fn invalid_stride(name: &'static str) -> Self {
        debug!("{}: stride 0", name);
        Error::InvalidStride { name }
    }

    #[cfg(feature = "sundials")]
    pub(crate) fn fail(name: &'static str, msg: &'static str) -> Self {
        debug!("{}: {}", name, msg);
        Error::Fail { name, msg }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfBounds { name, index, len } =>
                write!(f, "{}: index {} out of bounds for a vector of \
                           length {}.", name, index, len),
            Error::LengthMismatch { name, left, right } =>
                write!(f, "{}: the vectors must have the same length \
                           (got {} and {}).", name, left, right),
            Error::Empty { name } =>
                write!(f, "{}: the vector is empty.", name),
            Error::InvalidStride { name } =>
                write!(f, "{}: the stride must be positive.", name),
            #[cfg(feature = "sundials")]
            Error::Fail { name, msg } => {
                if msg.is_empty() {
                    write!(f, "The function {} failed.", name)
                } else {
                    write!(f, "The function {} failed with message: {}.",
                           name, msg)
                }
            }
        }
    }
}

// Show the message in `unwrap` and `?` from `main`.
impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

////////////////////////////////////////////////////////////////////////
//
// Literals

/// Create a [`Vector`] from a list of values, like `vec!`.
///
/// The elements are converted with `as f64` so integer literals may
/// be used.
///
/// ```
/// use densevec::{vector, Vector};
/// assert_eq!(vector![1, 2, 3], Vector::from([1., 2., 3.]));
/// assert_eq!(vector![7.; 4], Vector::from_elem(4, 7.));
/// assert!(vector![].is_empty());
/// ```
#[macro_export]
macro_rules! vector {
    () => { $crate::Vector::new() };
    ($x: expr; $n: expr) => { $crate::Vector::from_elem($n, $x as f64) };
    ($($x: expr),+ $(,)?) => { $crate::Vector::from([$($x as f64),+]) };
}


#[cfg(test)]
mod tests {
    use crate::{vector, Error, Vector, VectorRef};

    #[test]
    fn error_messages_name_the_function() {
        let e = Error::OutOfBounds { name: "Vector::set_basis",
                                     index: 3, len: 2 };
        assert_eq!(e.to_string(),
                   "Vector::set_basis: index 3 out of bounds for a \
                    vector of length 2.");
        let e = Error::Empty { name: "Vector::max" };
        assert_eq!(format!("{:?}", e), "Vector::max: the vector is empty.");
    }

    #[test]
    fn macro_forms() {
        assert_eq!(vector![], Vector::new());
        assert_eq!(vector![1, 2.5, -3], Vector::from(vec![1., 2.5, -3.]));
        assert_eq!(vector![0; 3], Vector::zeros(3));
        assert_eq!(vector![1.,].len(), 1);
    }

    #[test]
    fn compatible_with_eyre() -> eyre::Result<()> {
        let v = vector![1, 2];
        assert_eq!(v.max()?, 2.);
        Ok(())
    }
}
