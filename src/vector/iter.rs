//! Iterators and cursors over the elements of vectors.
//!
//! [`Iter`] and [`IterMut`] are the usual Rust iterators.
//! [`Cursor`] and [`CursorMut`] are explicit positions (an index in
//! the storage together with a stride) that can be moved back and
//! forth and compared, in the manner of random access iterators.

use std::{iter::StepBy,
          ops::{Add, AddAssign, Sub, SubAssign},
          slice};

/// Iterator over the elements of a vector, see [`VectorRef::iter`].
///
/// [`VectorRef::iter`]: super::VectorRef::iter
#[derive(Clone, Debug)]
pub struct Iter<'a>(StepBy<slice::Iter<'a, f64>>);

/// Mutable iterator over the elements of a vector, see
/// [`VectorMut::iter_mut`].
///
/// [`VectorMut::iter_mut`]: super::VectorMut::iter_mut
#[derive(Debug)]
pub struct IterMut<'a>(StepBy<slice::IterMut<'a, f64>>);

impl<'a> Iter<'a> {
    /// `data` must start at the first element and end at the last.
    pub(crate) fn new(data: &'a [f64], stride: usize) -> Self {
        Iter(data.iter().step_by(stride))
    }
}

impl<'a> IterMut<'a> {
    pub(crate) fn new(data: &'a mut [f64], stride: usize) -> Self {
        IterMut(data.iter_mut().step_by(stride))
    }
}

macro_rules! delegate_iterator { ($it: ident, $l: lifetime, $item: ty) => {
    impl<$l> Iterator for $it<$l> {
        type Item = $item;

        #[inline]
        fn next(&mut self) -> Option<$item> { self.0.next() }

        #[inline]
        fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }

        #[inline]
        fn nth(&mut self, n: usize) -> Option<$item> { self.0.nth(n) }
    }

    impl<$l> DoubleEndedIterator for $it<$l> {
        #[inline]
        fn next_back(&mut self) -> Option<$item> { self.0.next_back() }
    }

    impl<$l> ExactSizeIterator for $it<$l> {}

    impl<$l> std::iter::FusedIterator for $it<$l> {}
}}

delegate_iterator!(Iter, 'a, &'a f64);
delegate_iterator!(IterMut, 'a, &'a mut f64);

////////////////////////////////////////////////////////////////////////
//
// Cursors

/// Position in a vector, see [`VectorRef::begin`] and
/// [`VectorRef::end`].
///
/// A cursor is only meaningful for the vector it was created from.
/// It may be moved outside the vector, in which case [`Cursor::get`]
/// returns `None`.  Positions saturate at the bounds of `isize`.  Two
/// cursors compare equal iff they point to the same position.
///
/// ```
/// use densevec::prelude::*;
/// let v = vector![1, 2, 3, 4, 5, 6];
/// let w = v.subvector_with_stride(0, 2, 3).unwrap(); // [1, 3, 5]
/// let mut c = w.begin();
/// c.inc();
/// assert_eq!(c.get(), Some(&3.));
/// assert_eq!(w.end() - c, 2);
/// assert_eq!(c + 2, w.end());
/// ```
///
/// [`VectorRef::begin`]: super::VectorRef::begin
/// [`VectorRef::end`]: super::VectorRef::end
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    data: &'a [f64],
    pos: isize, // in the storage
    stride: usize,
}

/// Mutable position in a vector, see [`VectorMut::begin_mut`] and
/// [`VectorMut::end_mut`].
///
/// It moves like a [`Cursor`].  Since it borrows the vector mutably,
/// the bounds of the walk are obtained from the cursor itself with
/// [`CursorMut::begin`] and [`CursorMut::end`]:
///
/// ```
/// use densevec::prelude::*;
/// let mut v = vector![1, 2, 3, 4];
/// let mut c = v.begin_mut();
/// while c != c.end() {
///     *c.get_mut().unwrap() *= 10.;
///     c.inc();
/// }
/// assert_eq!(v, vector![10, 20, 30, 40]);
/// ```
///
/// [`VectorMut::begin_mut`]: super::VectorMut::begin_mut
/// [`VectorMut::end_mut`]: super::VectorMut::end_mut
#[derive(Debug)]
pub struct CursorMut<'a> {
    data: &'a mut [f64],
    pos: isize,
    stride: usize,
}

/// Element at the storage position `pos`, if any.
#[inline]
fn position(data_len: usize, pos: isize) -> Option<usize> {
    if pos >= 0 && (pos as usize) < data_len { Some(pos as usize) }
    else { None }
}

/// Storage position of the element of index `i`.
#[inline]
fn storage_pos(i: isize, stride: usize) -> isize {
    i.saturating_mul(stride as isize)
}

/// Storage position one stride past the last element.
#[inline]
fn end_pos(data_len: usize, stride: usize) -> isize {
    if data_len == 0 { 0 }
    else { (data_len - 1) as isize + stride as isize }
}

impl<'a> Cursor<'a> {
    /// Cursor on the element of index `i`.
    pub(crate) fn new(data: &'a [f64], stride: usize, i: isize) -> Self {
        Cursor { data, pos: storage_pos(i, stride), stride }
    }

    /// The element under the cursor, or `None` if the cursor is
    /// outside the vector.
    pub fn get(&self) -> Option<&'a f64> {
        let data = self.data;
        position(data.len(), self.pos).map(|i| &data[i])
    }

    /// Index of the element under the cursor.
    pub fn index(&self) -> isize {
        self.pos / self.stride as isize
    }

    /// Move to the next element.
    pub fn inc(&mut self) -> &mut Self {
        self.pos = self.pos.saturating_add(self.stride as isize);
        self
    }

    /// Move to the previous element.
    pub fn dec(&mut self) -> &mut Self {
        self.pos = self.pos.saturating_sub(self.stride as isize);
        self
    }

    /// Move to the next element and return the cursor before the move.
    pub fn post_inc(&mut self) -> Self {
        let c = *self;
        self.inc();
        c
    }

    /// Move to the previous element and return the cursor before the
    /// move.
    pub fn post_dec(&mut self) -> Self {
        let c = *self;
        self.dec();
        c
    }

    /// Cursor `k` elements after (or before if `k < 0`) this one.
    pub fn offset(self, k: isize) -> Self {
        let pos = self.pos.saturating_add(storage_pos(k, self.stride));
        Cursor { pos, ..self }
    }

    /// Number of elements from `origin` to `self`.
    pub fn distance(&self, origin: &Self) -> isize {
        self.pos.saturating_sub(origin.pos) / self.stride as isize
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool { self.pos == other.pos }
}

impl Eq for Cursor<'_> {}

impl Add<isize> for Cursor<'_> {
    type Output = Self;
    fn add(self, k: isize) -> Self { self.offset(k) }
}

impl Sub<isize> for Cursor<'_> {
    type Output = Self;
    fn sub(self, k: isize) -> Self { self.offset(k.saturating_neg()) }
}

impl AddAssign<isize> for Cursor<'_> {
    fn add_assign(&mut self, k: isize) { *self = self.offset(k) }
}

impl SubAssign<isize> for Cursor<'_> {
    fn sub_assign(&mut self, k: isize) {
        *self = self.offset(k.saturating_neg())
    }
}

impl<'a> Sub for Cursor<'a> {
    type Output = isize;
    fn sub(self, origin: Cursor<'a>) -> isize { self.distance(&origin) }
}

impl<'a> CursorMut<'a> {
    pub(crate) fn new(data: &'a mut [f64], stride: usize, i: isize) -> Self {
        CursorMut { data, pos: storage_pos(i, stride), stride }
    }

    pub fn get(&self) -> Option<&f64> {
        position(self.data.len(), self.pos).map(|i| &self.data[i])
    }

    /// Mutable reference to the element under the cursor, or `None`
    /// if the cursor is outside the vector.
    pub fn get_mut(&mut self) -> Option<&mut f64> {
        position(self.data.len(), self.pos).map(|i| &mut self.data[i])
    }

    pub fn index(&self) -> isize {
        self.pos / self.stride as isize
    }

    pub fn inc(&mut self) -> &mut Self {
        self.pos = self.pos.saturating_add(self.stride as isize);
        self
    }

    pub fn dec(&mut self) -> &mut Self {
        self.pos = self.pos.saturating_sub(self.stride as isize);
        self
    }

    /// Move to the next element and return the index before the move.
    pub fn post_inc(&mut self) -> isize {
        let i = self.index();
        self.inc();
        i
    }

    /// Move to the previous element and return the index before the
    /// move.
    pub fn post_dec(&mut self) -> isize {
        let i = self.index();
        self.dec();
        i
    }

    /// Move by `k` elements (backward if `k < 0`).
    pub fn advance(&mut self, k: isize) -> &mut Self {
        self.pos = self.pos.saturating_add(storage_pos(k, self.stride));
        self
    }

    /// The cursor moved by `k` elements.
    pub fn offset(mut self, k: isize) -> Self {
        self.advance(k);
        self
    }

    /// Number of elements from `origin` to `self`.
    pub fn distance(&self, origin: &Self) -> isize {
        self.pos.saturating_sub(origin.pos) / self.stride as isize
    }

    /// Read-only cursor at the same position.
    pub fn as_cursor(&self) -> Cursor<'_> {
        Cursor { data: &*self.data, pos: self.pos, stride: self.stride }
    }

    /// Read-only cursor on the first element of the vector.
    pub fn begin(&self) -> Cursor<'_> {
        Cursor { data: &*self.data, pos: 0, stride: self.stride }
    }

    /// Read-only cursor one past the last element of the vector.
    pub fn end(&self) -> Cursor<'_> {
        let pos = end_pos(self.data.len(), self.stride);
        Cursor { data: &*self.data, pos, stride: self.stride }
    }
}

impl PartialEq for CursorMut<'_> {
    fn eq(&self, other: &Self) -> bool { self.pos == other.pos }
}

impl Eq for CursorMut<'_> {}

impl PartialEq<Cursor<'_>> for CursorMut<'_> {
    fn eq(&self, other: &Cursor<'_>) -> bool { self.pos == other.pos }
}

impl Add<isize> for CursorMut<'_> {
    type Output = Self;
    fn add(self, k: isize) -> Self { self.offset(k) }
}

impl Sub<isize> for CursorMut<'_> {
    type Output = Self;
    fn sub(self, k: isize) -> Self { self.offset(k.saturating_neg()) }
}

impl AddAssign<isize> for CursorMut<'_> {
    fn add_assign(&mut self, k: isize) { self.advance(k); }
}

impl SubAssign<isize> for CursorMut<'_> {
    fn sub_assign(&mut self, k: isize) {
        self.advance(k.saturating_neg());
    }
}

impl Sub for CursorMut<'_> {
    type Output = isize;
    fn sub(self, origin: Self) -> isize { self.distance(&origin) }
}
