//! Borrowed, possibly strided, views of vectors.

use std::{fmt::{self, Debug, Formatter},
          ops::{Index, IndexMut, Range}};
use crate::{Error, Result};
use super::{VectorRef, VectorMut, Vector, Iter, IterMut};

/// Read-only view of `len` elements of a vector, separated by
/// `stride` in the underlying storage.  Obtained with
/// [`VectorRef::view`], [`VectorRef::subvector`] or
/// [`VectorRef::subvector_with_stride`].
#[derive(Clone, Copy)]
pub struct View<'a> {
    data: &'a [f64],
    len: usize,
    stride: usize,
}

/// Mutable view of `len` elements of a vector, separated by `stride`
/// in the underlying storage.  Writes through the view are visible
/// in the parent vector.
pub struct ViewMut<'a> {
    data: &'a mut [f64],
    len: usize,
    stride: usize,
}

/// Storage length needed to hold `len` elements `stride` apart.
#[inline]
fn storage_len(len: usize, stride: usize) -> usize {
    if len == 0 { 0 } else { (len - 1) * stride + 1 }
}

/// Locate, in the storage of a vector of length `parent_len` and
/// stride `parent_stride`, the `n` elements at indices `offset +
/// k stride`.  Return the range of the storage holding them, their
/// number and their stride in that storage.
pub(crate) fn window(
    name: &'static str, parent_len: usize, parent_stride: usize,
    offset: usize, stride: usize, n: usize,
) -> Result<(Range<usize>, usize, usize)> {
    if stride == 0 {
        return Err(Error::invalid_stride(name))
    }
    if n == 0 {
        if offset > parent_len {
            return Err(Error::out_of_bounds(name, offset, parent_len))
        }
        return Ok((0 .. 0, 0, parent_stride))
    }
    // Index of the last element of the window in the parent.
    let last = (n - 1).checked_mul(stride)
        .and_then(|d| d.checked_add(offset))
        .unwrap_or(usize::MAX);
    if last >= parent_len {
        return Err(Error::out_of_bounds(name, last, parent_len))
    }
    // A single element has no meaningful stride.
    let s = if n == 1 { parent_stride } else { stride * parent_stride };
    let start = offset * parent_stride;
    Ok((start .. start + storage_len(n, s), n, s))
}

impl<'a> View<'a> {
    pub(crate) fn from_parts(data: &'a [f64], len: usize, stride: usize)
                             -> Self {
        debug_assert!(stride >= 1);
        debug_assert_eq!(data.len(), storage_len(len, stride));
        View { data, len, stride }
    }

    #[cfg(feature = "ndarray")]
    /// Storage with the lifetime of the parent vector.
    pub(crate) fn data(&self) -> &'a [f64] { self.data }
}

impl<'a> ViewMut<'a> {
    pub(crate) fn from_parts(
        data: &'a mut [f64], len: usize, stride: usize
    ) -> Self {
        debug_assert!(stride >= 1);
        debug_assert_eq!(data.len(), storage_len(len, stride));
        ViewMut { data, len, stride }
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> View<'_> {
        View::from_parts(&*self.data, self.len, self.stride)
    }

    /// Convert into a read-only view with the same lifetime.
    pub fn into_view(self) -> View<'a> {
        View::from_parts(self.data, self.len, self.stride)
    }
}

impl VectorRef for View<'_> {
    #[inline]
    fn storage(&self) -> &[f64] { self.data }
    #[inline]
    fn len(&self) -> usize { self.len }
    #[inline]
    fn stride(&self) -> usize { self.stride }
}

impl VectorRef for ViewMut<'_> {
    #[inline]
    fn storage(&self) -> &[f64] { &*self.data }
    #[inline]
    fn len(&self) -> usize { self.len }
    #[inline]
    fn stride(&self) -> usize { self.stride }
}

impl VectorMut for ViewMut<'_> {
    #[inline]
    fn storage_mut(&mut self) -> &mut [f64] { &mut *self.data }
}

impl Debug for View<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("View").field(&DebugList(self.iter())).finish()
    }
}

impl Debug for ViewMut<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ViewMut").field(&DebugList(self.iter())).finish()
    }
}

/// Print the elements of an iterator as a list.
pub(crate) struct DebugList<'a>(pub(crate) Iter<'a>);

impl Debug for DebugList<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}

impl<V: VectorRef + ?Sized> PartialEq<V> for View<'_> {
    fn eq(&self, other: &V) -> bool { self.equal(other) }
}

impl<V: VectorRef + ?Sized> PartialEq<V> for ViewMut<'_> {
    fn eq(&self, other: &V) -> bool { self.equal(other) }
}

impl Index<usize> for View<'_> {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        if i >= self.len {
            panic!("{}", Error::out_of_bounds("View::index", i, self.len))
        }
        &self.data[i * self.stride]
    }
}

impl Index<usize> for ViewMut<'_> {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        if i >= self.len {
            panic!("{}", Error::out_of_bounds("ViewMut::index", i, self.len))
        }
        &self.data[i * self.stride]
    }
}

impl IndexMut<usize> for ViewMut<'_> {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        if i >= self.len {
            panic!("{}", Error::out_of_bounds("ViewMut::index_mut",
                                              i, self.len))
        }
        &mut self.data[i * self.stride]
    }
}

impl<'a> IntoIterator for View<'a> {
    type Item = &'a f64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> { Iter::new(self.data, self.stride) }
}

impl<'a> IntoIterator for &'a View<'_> {
    type Item = &'a f64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> { self.iter() }
}

impl<'a> IntoIterator for ViewMut<'a> {
    type Item = &'a mut f64;
    type IntoIter = IterMut<'a>;

    fn into_iter(self) -> IterMut<'a> { IterMut::new(self.data, self.stride) }
}

impl<'a> IntoIterator for &'a mut ViewMut<'_> {
    type Item = &'a mut f64;
    type IntoIter = IterMut<'a>;

    fn into_iter(self) -> IterMut<'a> { self.iter_mut() }
}

impl From<View<'_>> for Vector {
    fn from(v: View<'_>) -> Self { v.to_vector() }
}


#[cfg(test)]
mod tests {
    use crate::{vector, Error, Vector};
    use super::super::{VectorRef, VectorMut};

    #[test]
    fn subvector() {
        let v = vector![0, 1, 2, 3, 4];
        let w = v.subvector(1, 3).unwrap();
        assert_eq!(w.len(), 3);
        assert_eq!(w.stride(), 1);
        assert_eq!(w, vector![1, 2, 3]);
        assert_eq!(w[2], 3.);
        assert_eq!(v.subvector(5, 0).unwrap().len(), 0);
        assert!(matches!(v.subvector(3, 3),
                         Err(Error::OutOfBounds { index: 5, len: 5, .. })));
        assert!(v.subvector(6, 0).is_err());
    }

    #[test]
    fn strided_subvector() {
        let v: Vector = (0 .. 10).map(|i| i as f64).collect();
        let w = v.subvector_with_stride(1, 3, 3).unwrap();
        assert_eq!(w.stride(), 3);
        assert_eq!(w, vector![1, 4, 7]);
        assert_eq!(w.max_index(), Ok(2));
        assert_eq!(w.iter().rev().copied().collect::<Vec<_>>(),
                   vec![7., 4., 1.]);
        // Views of views compose the strides.
        let ww = w.subvector_with_stride(0, 2, 2).unwrap();
        assert_eq!(ww.stride(), 6);
        assert_eq!(ww, vector![1, 7]);
        assert!(v.subvector_with_stride(1, 3, 4).is_err());
        assert_eq!(v.subvector_with_stride(0, 0, 2).unwrap_err(),
                   Error::InvalidStride {
                       name: "VectorRef::subvector_with_stride" });
    }

    #[test]
    fn huge_window_is_rejected() {
        let v = vector![1, 2, 3];
        assert!(v.subvector_with_stride(1, usize::MAX, 2).is_err());
    }

    #[test]
    fn writes_are_visible_in_parent() {
        let mut v = Vector::zeros(6);
        {
            let mut w = v.subvector_with_stride_mut(1, 2, 3).unwrap();
            w.set_all(1.);
            w[0] = 5.;
            w.reverse();
            assert_eq!(w, vector![1, 1, 5]);
        }
        assert_eq!(v, vector![0, 1, 0, 1, 0, 5]);
        v.subvector_mut(0, 2).unwrap().set_basis(1).unwrap();
        assert_eq!(v, vector![0, 1, 0, 1, 0, 5]);
        v.subvector_mut(2, 2).unwrap().add_constant(2.);
        assert_eq!(v, vector![0, 1, 2, 3, 0, 5]);
    }

    #[test]
    fn arithmetic_between_views() -> crate::Result<()> {
        let mut v = vector![1, 2, 3, 4];
        let x = vector![10, 20];
        v.subvector_with_stride_mut(0, 2, 2)?.try_add(&x)?;
        assert_eq!(v, vector![11, 2, 23, 4]);
        let odd = vector![1, 1, 1, 1];
        let mut y = Vector::zeros(2);
        y.axpby(&odd.subvector(1, 2)?, 3., 0.)?;
        assert_eq!(y, vector![3, 3]);
        Ok(())
    }

    #[test]
    fn debug_format() {
        let v = vector![1, 2, 3];
        assert_eq!(format!("{:?}", v.subvector(0, 2).unwrap()),
                   "View([1.0, 2.0])");
    }

    #[test]
    #[should_panic(expected = "View::index: index 2 out of bounds")]
    fn index_out_of_bounds_panics() {
        let v = vector![1, 2, 3];
        let w = v.subvector(0, 2).unwrap();
        let _ = w[2];
    }
}
