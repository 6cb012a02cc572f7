//! Conversions with [`ndarray`] (feature "ndarray").

use ndarray::{Array1, ArrayView1, ArrayViewMut1, ShapeBuilder};
use super::{Vector, View, ViewMut, VectorRef, VectorMut};

impl<'a> View<'a> {
    /// Borrow the elements as an [`ArrayView1`] with the same stride.
    pub fn as_array(&self) -> ArrayView1<'a, f64> {
        let shape = (self.len(),).strides((self.stride(),));
        ArrayView1::from_shape(shape, self.data())
            .expect("densevec::View::as_array: storage too short")
    }
}

impl ViewMut<'_> {
    /// Borrow the elements as an [`ArrayViewMut1`] with the same
    /// stride.
    pub fn as_array_mut(&mut self) -> ArrayViewMut1<'_, f64> {
        let (len, s) = (self.len(), self.stride());
        ArrayViewMut1::from_shape((len,).strides((s,)), self.storage_mut())
            .expect("densevec::ViewMut::as_array_mut: storage too short")
    }
}

impl Vector {
    /// Borrow the elements as an [`ArrayView1`].
    pub fn as_array(&self) -> ArrayView1<'_, f64> {
        ArrayView1::from(self.as_slice())
    }

    /// Borrow the elements as an [`ArrayViewMut1`].
    pub fn as_array_mut(&mut self) -> ArrayViewMut1<'_, f64> {
        ArrayViewMut1::from(self.as_mut_slice())
    }
}

impl From<Vector> for Array1<f64> {
    fn from(v: Vector) -> Self { Array1::from(v.into_vec()) }
}

impl From<Array1<f64>> for Vector {
    fn from(a: Array1<f64>) -> Self { a.iter().collect() }
}

impl From<ArrayView1<'_, f64>> for Vector {
    fn from(a: ArrayView1<'_, f64>) -> Self { a.iter().collect() }
}


#[cfg(test)]
mod tests {
    use ndarray::{array, s, Array1};
    use crate::{vector, Vector, VectorRef, VectorMut};

    #[test]
    fn to_and_from_array() {
        let a: Array1<f64> = vector![1, 2, 3].into();
        assert_eq!(a, array![1., 2., 3.]);
        let v = Vector::from(a);
        assert_eq!(v, vector![1, 2, 3]);
        let b = array![0., 1., 2., 3., 4.];
        assert_eq!(Vector::from(b.slice(s![..;2])), vector![0, 2, 4]);
    }

    #[test]
    fn strided_views() {
        let mut v: Vector = (0 .. 6).map(|i| i as f64).collect();
        let w = v.subvector_with_stride(1, 2, 3).unwrap();
        assert_eq!(w.as_array(), array![1., 3., 5.]);
        v.subvector_with_stride_mut(0, 3, 2).unwrap()
            .as_array_mut().fill(-1.);
        assert_eq!(v, vector![-1, 1, 2, -1, 4, 5]);
        v.as_array_mut()[0] = 7.;
        assert_eq!(v.as_array().sum(), 18.);
    }
}
