//! Owned dense vectors and their views.

use std::{fmt::{self, Debug, Display, Formatter},
          mem,
          ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign,
                Div, DivAssign, Index, IndexMut}};
use crate::Error;

mod ops;
mod view;
mod iter;
#[cfg(feature = "ndarray")]
mod array;

pub use ops::{VectorRef, VectorMut};
pub use view::{View, ViewMut};
pub use iter::{Iter, IterMut, Cursor, CursorMut};

/// Owning vector of `f64` with a length fixed at construction.
///
/// Cloning a vector copies its elements.  The operations are provided
/// by the traits [`VectorRef`] and [`VectorMut`].  The arithmetic
/// operators `+`, `-`, `*` (element-wise product) and `/` work on
/// vectors (and views) of the same length and panic otherwise; use
/// [`VectorMut::try_add`],... to handle that case.  The operators
/// taking `self` by value reuse its storage.
///
/// ```
/// use densevec::prelude::*;
/// let v = vector![1, 2, 3];
/// assert_eq!(&v * 3., vector![3, 6, 9]);
/// assert_eq!(&v + &v - &v, v);
/// ```
#[derive(Clone, Default)]
pub struct Vector {
    data: Box<[f64]>,
}

impl Vector {
    /// Return a vector of length 0.
    pub fn new() -> Self {
        Vector { data: Box::new([]) }
    }

    /// Return a vector of length `n` whose elements are all 0.
    pub fn zeros(n: usize) -> Self {
        Vector { data: vec![0.; n].into_boxed_slice() }
    }

    /// Return a vector of length `n` whose elements are all `x`.
    pub fn from_elem(n: usize, x: f64) -> Self {
        let mut v = Self::zeros(n);
        if x != 0. {
            v.set_all(x);
        }
        v
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize { self.data.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    #[inline]
    pub fn as_slice(&self) -> &[f64] { &self.data }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] { &mut self.data }

    pub fn into_vec(self) -> Vec<f64> { self.data.into_vec() }

    /// Move the content out of `self`, leaving an empty vector
    /// behind.
    ///
    /// ```
    /// use densevec::{vector, Vector};
    /// let mut a = vector![1, 2];
    /// let b = a.take();
    /// assert_eq!(b, vector![1, 2]);
    /// assert!(a.is_empty());
    /// ```
    pub fn take(&mut self) -> Vector {
        mem::take(self)
    }
}

impl VectorRef for Vector {
    #[inline]
    fn storage(&self) -> &[f64] { &self.data }
    #[inline]
    fn len(&self) -> usize { self.data.len() }
    #[inline]
    fn stride(&self) -> usize { 1 }
}

impl VectorMut for Vector {
    #[inline]
    fn storage_mut(&mut self) -> &mut [f64] { &mut self.data }
}

////////////////////////////////////////////////////////////////////////
//
// Formatting, comparison, indexing

impl Debug for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vector").field(&self.data).finish()
    }
}

/// Print the elements between brackets, each with the formatting
/// options given (e.g. `{:.2}`).
impl Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 { f.write_str(", ")? }
            Display::fmt(x, f)?;
        }
        f.write_str("]")
    }
}

impl<V: VectorRef + ?Sized> PartialEq<V> for Vector {
    fn eq(&self, other: &V) -> bool { self.equal(other) }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        match self.data.get(i) {
            Some(x) => x,
            None => panic!("{}", Error::out_of_bounds(
                "Vector::index", i, self.len())),
        }
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        let len = self.len();
        match self.data.get_mut(i) {
            Some(x) => x,
            None => panic!("{}", Error::out_of_bounds(
                "Vector::index_mut", i, len)),
        }
    }
}

////////////////////////////////////////////////////////////////////////
//
// Conversions

impl From<Vec<f64>> for Vector {
    fn from(v: Vec<f64>) -> Self { Vector { data: v.into_boxed_slice() } }
}

impl From<&[f64]> for Vector {
    fn from(v: &[f64]) -> Self { Vector { data: v.into() } }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(v: [f64; N]) -> Self { Vector { data: Box::new(v) } }
}

impl From<Vector> for Vec<f64> {
    fn from(v: Vector) -> Self { v.into_vec() }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Vector { data: iter.into_iter().collect() }
    }
}

impl<'a> FromIterator<&'a f64> for Vector {
    fn from_iter<I: IntoIterator<Item = &'a f64>>(iter: I) -> Self {
        Vector { data: iter.into_iter().copied().collect() }
    }
}

impl AsRef<[f64]> for Vector {
    fn as_ref(&self) -> &[f64] { &self.data }
}

impl AsMut<[f64]> for Vector {
    fn as_mut(&mut self) -> &mut [f64] { &mut self.data }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> { self.iter() }
}

impl<'a> IntoIterator for &'a mut Vector {
    type Item = &'a mut f64;
    type IntoIter = IterMut<'a>;

    fn into_iter(self) -> IterMut<'a> { self.iter_mut() }
}

impl IntoIterator for Vector {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter { self.into_vec().into_iter() }
}

////////////////////////////////////////////////////////////////////////
//
// Operators

macro_rules! elementwise_op {
    ($Op: ident, $op: ident, $OpAssign: ident, $op_assign: ident,
     $try_op: ident) => {
        impl<V: VectorRef + ?Sized> $OpAssign<&V> for Vector {
            fn $op_assign(&mut self, x: &V) {
                if let Err(e) = self.$try_op(x) { panic!("{}", e) }
            }
        }

        impl<V: VectorRef + ?Sized> $OpAssign<&V> for ViewMut<'_> {
            fn $op_assign(&mut self, x: &V) {
                if let Err(e) = self.$try_op(x) { panic!("{}", e) }
            }
        }

        impl<V: VectorRef + ?Sized> $Op<&V> for Vector {
            type Output = Vector;
            fn $op(mut self, x: &V) -> Vector {
                self.$op_assign(x);
                self
            }
        }

        impl<V: VectorRef + ?Sized> $Op<&V> for &Vector {
            type Output = Vector;
            fn $op(self, x: &V) -> Vector {
                let mut z = self.clone();
                z.$op_assign(x);
                z
            }
        }

        impl $Op<Vector> for Vector {
            type Output = Vector;
            fn $op(mut self, x: Vector) -> Vector {
                self.$op_assign(&x);
                self
            }
        }

        impl $Op<Vector> for &Vector {
            type Output = Vector;
            fn $op(self, x: Vector) -> Vector {
                let mut z = self.clone();
                z.$op_assign(&x);
                z
            }
        }
    }
}

elementwise_op!(Add, add, AddAssign, add_assign, try_add);
elementwise_op!(Sub, sub, SubAssign, sub_assign, try_sub);
elementwise_op!(Mul, mul, MulAssign, mul_assign, try_mul);
elementwise_op!(Div, div, DivAssign, div_assign, try_div);

macro_rules! scalar_op {
    ($Op: ident, $op: ident, $OpAssign: ident, $op_assign: ident,
     $method: ident) => {
        impl $OpAssign<f64> for Vector {
            fn $op_assign(&mut self, c: f64) { self.$method(c); }
        }

        impl $OpAssign<f64> for ViewMut<'_> {
            fn $op_assign(&mut self, c: f64) { self.$method(c); }
        }

        impl $Op<f64> for Vector {
            type Output = Vector;
            fn $op(mut self, c: f64) -> Vector {
                self.$method(c);
                self
            }
        }

        impl $Op<f64> for &Vector {
            type Output = Vector;
            fn $op(self, c: f64) -> Vector {
                let mut z = self.clone();
                z.$method(c);
                z
            }
        }

        // Both operations are commutative.
        impl $Op<Vector> for f64 {
            type Output = Vector;
            fn $op(self, v: Vector) -> Vector { v.$op(self) }
        }

        impl $Op<&Vector> for f64 {
            type Output = Vector;
            fn $op(self, v: &Vector) -> Vector { v.$op(self) }
        }
    }
}

scalar_op!(Add, add, AddAssign, add_assign, add_constant);
scalar_op!(Mul, mul, MulAssign, mul_assign, scale);
