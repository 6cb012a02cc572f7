//! Operations shared by owned vectors and views.
//!
//! A type only has to describe its storage (a slice starting at the
//! first element, the number of elements and the stride) to get all
//! the operations of [`VectorRef`] and, if it can be mutated,
//! [`VectorMut`].

use crate::{Error, Result};
use super::{
    Vector,
    view::{self, View, ViewMut},
    iter::{Iter, IterMut, Cursor, CursorMut},
};

/// Read-only operations on (possibly strided) vectors of `f64`.
///
/// Element `i` is stored at `storage()[i * stride()]`.
pub trait VectorRef {
    /// Storage of the vector, starting at its first element.  Its
    /// length is `(len - 1) * stride + 1` (or 0 if `len == 0`).
    fn storage(&self) -> &[f64];

    /// Number of elements.
    fn len(&self) -> usize;

    /// Distance, in the storage, between two consecutive elements.
    fn stride(&self) -> usize;

    fn is_empty(&self) -> bool { self.len() == 0 }

    /// Return the element at index `i`.
    fn get(&self, i: usize) -> Result<f64> {
        if i < self.len() {
            Ok(self.storage()[i * self.stride()])
        } else {
            Err(Error::out_of_bounds("VectorRef::get", i, self.len()))
        }
    }

    /// Iterator over the elements, from first to last.
    fn iter(&self) -> Iter<'_> {
        Iter::new(self.storage(), self.stride())
    }

    /// Cursor on the first element.
    fn begin(&self) -> Cursor<'_> {
        Cursor::new(self.storage(), self.stride(), 0)
    }

    /// Cursor one past the last element.
    fn end(&self) -> Cursor<'_> {
        Cursor::new(self.storage(), self.stride(), self.len() as isize)
    }

    /// Borrow the whole vector as a [`View`].
    fn view(&self) -> View<'_> {
        View::from_parts(self.storage(), self.len(), self.stride())
    }

    /// View of the `n` elements starting at index `offset`.
    fn subvector(&self, offset: usize, n: usize) -> Result<View<'_>> {
        let (range, len, stride) = view::window(
            "VectorRef::subvector", self.len(), self.stride(),
            offset, 1, n)?;
        Ok(View::from_parts(&self.storage()[range], len, stride))
    }

    /// View of the `n` elements at indices `offset`, `offset +
    /// stride`,..., `offset + (n-1) stride`.
    fn subvector_with_stride(
        &self, offset: usize, stride: usize, n: usize
    ) -> Result<View<'_>> {
        let (range, len, stride) = view::window(
            "VectorRef::subvector_with_stride", self.len(), self.stride(),
            offset, stride, n)?;
        Ok(View::from_parts(&self.storage()[range], len, stride))
    }

    /// Return a contiguous copy of the elements.
    fn to_vector(&self) -> Vector {
        self.iter().collect()
    }

    /// Largest element.  If the vector contains NaN, the first NaN
    /// is returned.
    fn max(&self) -> Result<f64> {
        let i = extreme_index(self, "VectorRef::max", |x, m| x > m)?;
        Ok(at(self, i))
    }

    /// Smallest element.  If the vector contains NaN, the first NaN
    /// is returned.
    fn min(&self) -> Result<f64> {
        let i = extreme_index(self, "VectorRef::min", |x, m| x < m)?;
        Ok(at(self, i))
    }

    /// Return `(min, max)` computed in a single pass.
    fn minmax(&self) -> Result<(f64, f64)> {
        let (imin, imax) = minmax_index(self, "VectorRef::minmax")?;
        Ok((at(self, imin), at(self, imax)))
    }

    /// Index of the first occurrence of the largest element (or of
    /// the first NaN).
    fn max_index(&self) -> Result<usize> {
        extreme_index(self, "VectorRef::max_index", |x, m| x > m)
    }

    /// Index of the first occurrence of the smallest element (or of
    /// the first NaN).
    fn min_index(&self) -> Result<usize> {
        extreme_index(self, "VectorRef::min_index", |x, m| x < m)
    }

    /// Return `(argmin, argmax)`, see [`Self::min_index`] and
    /// [`Self::max_index`].
    fn minmax_index(&self) -> Result<(usize, usize)> {
        minmax_index(self, "VectorRef::minmax_index")
    }

    /// Whether all elements are exactly 0.
    fn isnull(&self) -> bool { self.iter().all(|&x| x == 0.) }

    /// Whether all elements are > 0.
    fn ispos(&self) -> bool { self.iter().all(|&x| x > 0.) }

    /// Whether all elements are < 0.
    fn isneg(&self) -> bool { self.iter().all(|&x| x < 0.) }

    /// Whether all elements are ≥ 0.
    fn isnonneg(&self) -> bool { self.iter().all(|&x| x >= 0.) }

    /// Whether `self` and `other` have the same length and exactly
    /// the same elements.
    fn equal<V: VectorRef + ?Sized>(&self, other: &V) -> bool {
        self.len() == other.len()
            && self.iter().zip(other.iter()).all(|(x, y)| x == y)
    }
}

/// Operations mutating (possibly strided) vectors of `f64`.
///
/// The binary operations require both vectors to have the same
/// length and return [`Error::LengthMismatch`] otherwise (`self` is
/// then left untouched).
pub trait VectorMut: VectorRef {
    /// Mutable storage of the vector, see [`VectorRef::storage`].
    fn storage_mut(&mut self) -> &mut [f64];

    /// Mutable reference to the element at index `i`.
    fn get_mut(&mut self, i: usize) -> Result<&mut f64> {
        let len = self.len();
        if i < len {
            let s = self.stride();
            Ok(&mut self.storage_mut()[i * s])
        } else {
            Err(Error::out_of_bounds("VectorMut::get_mut", i, len))
        }
    }

    fn iter_mut(&mut self) -> IterMut<'_> {
        let s = self.stride();
        IterMut::new(self.storage_mut(), s)
    }

    /// Mutable cursor on the first element.
    fn begin_mut(&mut self) -> CursorMut<'_> {
        let s = self.stride();
        CursorMut::new(self.storage_mut(), s, 0)
    }

    /// Mutable cursor one past the last element.
    fn end_mut(&mut self) -> CursorMut<'_> {
        let (len, s) = (self.len(), self.stride());
        CursorMut::new(self.storage_mut(), s, len as isize)
    }

    /// Borrow the whole vector as a [`ViewMut`].
    fn view_mut(&mut self) -> ViewMut<'_> {
        let (len, s) = (self.len(), self.stride());
        ViewMut::from_parts(self.storage_mut(), len, s)
    }

    /// Mutable view of the `n` elements starting at index `offset`.
    fn subvector_mut(
        &mut self, offset: usize, n: usize
    ) -> Result<ViewMut<'_>> {
        let (range, len, stride) = view::window(
            "VectorMut::subvector_mut", self.len(), self.stride(),
            offset, 1, n)?;
        Ok(ViewMut::from_parts(&mut self.storage_mut()[range], len, stride))
    }

    /// Mutable view of the `n` elements at indices `offset`, `offset
    /// + stride`,..., `offset + (n-1) stride`.
    fn subvector_with_stride_mut(
        &mut self, offset: usize, stride: usize, n: usize
    ) -> Result<ViewMut<'_>> {
        let (range, len, stride) = view::window(
            "VectorMut::subvector_with_stride_mut", self.len(),
            self.stride(), offset, stride, n)?;
        Ok(ViewMut::from_parts(&mut self.storage_mut()[range], len, stride))
    }

    /// Set all elements to `x`.
    fn set_all(&mut self, x: f64) {
        for z in self.iter_mut() { *z = x }
    }

    fn set_zero(&mut self) { self.set_all(0.) }

    /// Set the element `i` to 1 and all others to 0.
    fn set_basis(&mut self, i: usize) -> Result<()> {
        let len = self.len();
        if i >= len {
            return Err(Error::out_of_bounds("VectorMut::set_basis", i, len))
        }
        self.set_zero();
        let s = self.stride();
        self.storage_mut()[i * s] = 1.;
        Ok(())
    }

    /// Exchange the elements `i` and `j`.
    fn swap_elements(&mut self, i: usize, j: usize) -> Result<()> {
        let len = self.len();
        for k in [i, j] {
            if k >= len {
                return Err(Error::out_of_bounds(
                    "VectorMut::swap_elements", k, len))
            }
        }
        let s = self.stride();
        self.storage_mut().swap(i * s, j * s);
        Ok(())
    }

    /// Reverse the order of the elements in place.
    fn reverse(&mut self) {
        let len = self.len();
        let s = self.stride();
        let data = self.storage_mut();
        for i in 0 .. len / 2 {
            data.swap(i * s, (len - 1 - i) * s);
        }
    }

    /// Copy the elements of `x` into `self`.  Both must have the same
    /// length.
    fn copy_from<V: VectorRef + ?Sized>(&mut self, x: &V) -> Result<()> {
        check_len("VectorMut::copy_from", &*self, x)?;
        for (z, &x) in self.iter_mut().zip(x.iter()) {
            *z = x;
        }
        Ok(())
    }

    /// ∀i, selfᵢ = selfᵢ + xᵢ.
    fn try_add<V: VectorRef + ?Sized>(&mut self, x: &V) -> Result<&mut Self> {
        check_len("VectorMut::try_add", &*self, x)?;
        for (z, &x) in self.iter_mut().zip(x.iter()) {
            *z += x;
        }
        Ok(self)
    }

    /// ∀i, selfᵢ = selfᵢ - xᵢ.
    fn try_sub<V: VectorRef + ?Sized>(&mut self, x: &V) -> Result<&mut Self> {
        check_len("VectorMut::try_sub", &*self, x)?;
        for (z, &x) in self.iter_mut().zip(x.iter()) {
            *z -= x;
        }
        Ok(self)
    }

    /// ∀i, selfᵢ = selfᵢ xᵢ.
    fn try_mul<V: VectorRef + ?Sized>(&mut self, x: &V) -> Result<&mut Self> {
        check_len("VectorMut::try_mul", &*self, x)?;
        for (z, &x) in self.iter_mut().zip(x.iter()) {
            *z *= x;
        }
        Ok(self)
    }

    /// ∀i, selfᵢ = selfᵢ / xᵢ.  The xᵢ are not tested for 0 values.
    fn try_div<V: VectorRef + ?Sized>(&mut self, x: &V) -> Result<&mut Self> {
        check_len("VectorMut::try_div", &*self, x)?;
        for (z, &x) in self.iter_mut().zip(x.iter()) {
            *z /= x;
        }
        Ok(self)
    }

    /// Add `b` to each element: ∀i, selfᵢ = selfᵢ + b.
    fn add_constant(&mut self, b: f64) -> &mut Self {
        for z in self.iter_mut() { *z += b }
        self
    }

    /// Scale each element by `c`: ∀i, selfᵢ = c selfᵢ.
    fn scale(&mut self, c: f64) -> &mut Self {
        for z in self.iter_mut() { *z *= c }
        self
    }

    /// Performs the operation `self = a x + b self`.  When `b == 0`,
    /// the previous content of `self` is ignored (so NaN or infinite
    /// values are not propagated).
    fn axpby<V: VectorRef + ?Sized>(
        &mut self, x: &V, a: f64, b: f64
    ) -> Result<&mut Self> {
        check_len("VectorMut::axpby", &*self, x)?;
        let x = x.iter();
        if b == 0. {
            for (z, &x) in self.iter_mut().zip(x) { *z = a * x }
        } else if b == 1. {
            for (z, &x) in self.iter_mut().zip(x) { *z += a * x }
        } else {
            for (z, &x) in self.iter_mut().zip(x) { *z = a * x + b * *z }
        }
        Ok(self)
    }
}

/// Element `i`, assumed to be in bounds.
#[inline]
fn at<V: VectorRef + ?Sized>(v: &V, i: usize) -> f64 {
    v.storage()[i * v.stride()]
}

fn check_len<A, B>(name: &'static str, a: &A, b: &B) -> Result<()>
where A: VectorRef + ?Sized, B: VectorRef + ?Sized {
    if a.len() == b.len() {
        Ok(())
    } else {
        Err(Error::length_mismatch(name, a.len(), b.len()))
    }
}

/// Index of the first element `x` such that `better(x, m)` holds for
/// the current best `m`, or of the first NaN.
fn extreme_index<V>(
    v: &V, name: &'static str, better: impl Fn(f64, f64) -> bool,
) -> Result<usize>
where V: VectorRef + ?Sized {
    let mut x = v.iter().enumerate();
    let Some((_, &first)) = x.next() else {
        return Err(Error::empty(name))
    };
    if first.is_nan() { return Ok(0) }
    let (mut i_best, mut best) = (0, first);
    for (i, &x) in x {
        if x.is_nan() { return Ok(i) }
        if better(x, best) {
            i_best = i;
            best = x;
        }
    }
    Ok(i_best)
}

fn minmax_index<V>(v: &V, name: &'static str) -> Result<(usize, usize)>
where V: VectorRef + ?Sized {
    let mut x = v.iter().enumerate();
    let Some((_, &first)) = x.next() else {
        return Err(Error::empty(name))
    };
    if first.is_nan() { return Ok((0, 0)) }
    let (mut imin, mut min) = (0, first);
    let (mut imax, mut max) = (0, first);
    for (i, &x) in x {
        if x.is_nan() { return Ok((i, i)) }
        if x < min {
            imin = i;
            min = x;
        }
        if x > max {
            imax = i;
            max = x;
        }
    }
    Ok((imin, imax))
}


#[cfg(test)]
mod tests {
    use crate::{vector, Error, Vector};
    use super::{VectorRef, VectorMut};

    #[test]
    fn set_basis() {
        let mut v = Vector::from_elem(4, 3.);
        for i in 0 .. 4 {
            v.set_basis(i).unwrap();
            for (j, &x) in v.iter().enumerate() {
                assert_eq!(x, if i == j { 1. } else { 0. });
            }
        }
        assert_eq!(v.set_basis(4),
                   Err(Error::OutOfBounds { name: "VectorMut::set_basis",
                                            index: 4, len: 4 }));
    }

    #[test]
    fn set_all_and_zero() {
        let mut v = Vector::zeros(3);
        v.set_all(2.5);
        assert_eq!(v, vector![2.5, 2.5, 2.5]);
        v.set_zero();
        assert!(v.isnull());
    }

    #[test]
    fn checked_access() {
        let mut v = vector![1, 2, 3];
        assert_eq!(v.get(2), Ok(3.));
        assert!(matches!(v.get(3), Err(Error::OutOfBounds { index: 3, .. })));
        *v.get_mut(0).unwrap() = 10.;
        assert_eq!(v, vector![10, 2, 3]);
        assert!(v.get_mut(7).is_err());
    }

    #[test]
    fn swap_and_reverse() {
        let mut v = vector![1, 2, 3];
        v.swap_elements(0, 2).unwrap();
        assert_eq!(v, vector![3, 2, 1]);
        v.swap_elements(1, 1).unwrap();
        assert_eq!(v, vector![3, 2, 1]);
        assert!(matches!(v.swap_elements(0, 3),
                         Err(Error::OutOfBounds { index: 3, len: 3, .. })));
        let mut v = vector![1, 2, 3];
        v.reverse();
        assert_eq!(v, vector![3, 2, 1]);
        v.reverse();
        assert_eq!(v, vector![1, 2, 3]);
        let mut v = vector![1, 2, 3, 4];
        v.reverse();
        assert_eq!(v, vector![4, 3, 2, 1]);
        let mut e = Vector::new();
        e.reverse();
        assert!(e.is_empty());
    }

    #[test]
    fn reductions() {
        let v = vector![3, 1, 3, 2];
        assert_eq!(v.max(), Ok(3.));
        assert_eq!(v.min(), Ok(1.));
        assert_eq!(v.minmax(), Ok((1., 3.)));
        assert_eq!(v.max_index(), Ok(0));
        assert_eq!(v.min_index(), Ok(1));
        assert_eq!(v.minmax_index(), Ok((1, 0)));
    }

    #[test]
    fn reductions_of_empty_vector() {
        let v = Vector::new();
        assert_eq!(v.max(), Err(Error::Empty { name: "VectorRef::max" }));
        assert!(v.min().is_err());
        assert!(v.minmax().is_err());
        assert!(v.max_index().is_err());
        assert!(v.min_index().is_err());
        assert_eq!(v.minmax_index(),
                   Err(Error::Empty { name: "VectorRef::minmax_index" }));
    }

    #[test]
    fn reductions_with_nan() {
        let v = vector![1., f64::NAN, -1., f64::NAN];
        assert_eq!(v.max_index(), Ok(1));
        assert_eq!(v.min_index(), Ok(1));
        assert_eq!(v.minmax_index(), Ok((1, 1)));
        assert!(v.max().unwrap().is_nan());
    }

    #[test]
    fn predicates() {
        assert!(vector![0, 0].isnull());
        assert!(!vector![0, 1e-300].isnull());
        assert!(vector![1, 2].ispos());
        assert!(!vector![0, 2].ispos());
        assert!(vector![-1, -2].isneg());
        assert!(!vector![-1, 0].isneg());
        assert!(vector![0, 2].isnonneg());
        assert!(!vector![0, -2].isnonneg());
        let e = Vector::new();
        assert!(e.isnull() && e.ispos() && e.isneg() && e.isnonneg());
    }

    #[test]
    fn equality() {
        let v = vector![1, 2, 3];
        assert!(v.equal(&v));
        assert!(!v.equal(&vector![1, 2]));
        assert!(!v.equal(&vector![1, 2, 3.0000001]));
    }

    #[test]
    fn in_place_arithmetic() -> crate::Result<()> {
        let mut v = vector![1, 2, 3];
        v.try_add(&vector![1, 1, 1])?.try_mul(&vector![2, 2, 2])?;
        assert_eq!(v, vector![4, 6, 8]);
        v.try_sub(&vector![1, 2, 3])?.try_div(&vector![3, 4, 5])?;
        assert_eq!(v, vector![1, 1, 1]);
        v.add_constant(1.).scale(3.);
        assert_eq!(v, vector![6, 6, 6]);
        Ok(())
    }

    #[test]
    fn length_mismatch_leaves_vector_untouched() {
        let mut v = vector![1, 2, 3];
        let e = v.try_add(&vector![1, 2]).unwrap_err();
        assert_eq!(e, Error::LengthMismatch { name: "VectorMut::try_add",
                                              left: 3, right: 2 });
        assert!(v.try_sub(&Vector::new()).is_err());
        assert!(v.try_mul(&vector![1]).is_err());
        assert!(v.try_div(&vector![1, 2, 3, 4]).is_err());
        assert!(v.axpby(&vector![1], 1., 1.).is_err());
        assert!(v.copy_from(&vector![1]).is_err());
        assert_eq!(v, vector![1, 2, 3]);
    }

    #[test]
    fn axpby() -> crate::Result<()> {
        let mut v = vector![1, 1, 1];
        v.axpby(&vector![2, 2, 2], 2., 3.)?;
        assert_eq!(v, vector![7, 7, 7]);
        v.axpby(&vector![1, 2, 3], 1., 1.)?;
        assert_eq!(v, vector![8, 9, 10]);
        let mut w = vector![f64::NAN, 1.];
        w.axpby(&vector![1, 2], 2., 0.)?;
        assert_eq!(w, vector![2, 4]);
        Ok(())
    }

    #[test]
    fn copy_from() {
        let mut v = Vector::zeros(3);
        v.copy_from(&vector![1, 2, 3]).unwrap();
        assert_eq!(v, vector![1, 2, 3]);
    }

    #[test]
    fn to_vector_is_contiguous() {
        let v = vector![0, 1, 2, 3, 4, 5];
        let w = v.subvector_with_stride(1, 2, 3).unwrap().to_vector();
        assert_eq!(w, vector![1, 3, 5]);
        assert_eq!(w.stride(), 1);
    }
}
