//! Sharing [`Vector`]s with Sundials (feature "sundials").
//!
//! A [`Vector`] can be lent to Sundials routines as a serial
//! `N_Vector` without copying its elements.
//!
//! ```
//! use densevec::{vector, nvector::Context};
//! # fn main() -> densevec::Result<()> {
//! let ctx = Context::new()?;
//! let mut v = vector![1, 2, 3];
//! {
//!     let nv = v.as_nvector(&ctx)?;
//!     unsafe { sundials_sys::N_VScale(2., nv.as_ptr(), nv.as_ptr()) };
//! }
//! assert_eq!(v, vector![2, 4, 6]);
//! # Ok(()) }
//! ```

use std::{marker::PhantomData, ptr, slice};
use log::trace;
use sundials_sys::*;
use crate::{Error, Result, Vector};

/// Context is an object associated with the thread of execution.
/// Every `N_Vector` is created within a context.
pub struct Context(SUNContext);

impl Drop for Context {
    fn drop(&mut self) {
        unsafe { SUNContext_Free(&mut self.0 as *mut _); }
    }
}

impl Context {
    pub fn new() -> Result<Self> {
        let mut ctx: SUNContext = ptr::null_mut();
        if unsafe { SUNContext_Create(ptr::null_mut(), &mut ctx as *mut _) }
            < 0 {
            return Err(Error::fail("Context::new",
                                   "Failed to create a context"))
        }
        Ok(Context(ctx))
    }

    /// Raw pointer to the context, to be passed to Sundials.
    pub fn as_ptr(&self) -> SUNContext { self.0 }
}

/// Serial `N_Vector` whose content is the storage of a [`Vector`].
/// The vector is mutably borrowed as long as this value lives.
pub struct SerialNVector<'a> {
    nv: N_Vector,
    marker: PhantomData<&'a mut [f64]>,
}

impl Drop for SerialNVector<'_> {
    fn drop(&mut self) {
        // `N_VMake_Serial` sets `own_data` to false so the elements
        // are not freed.
        unsafe { N_VDestroy_Serial(self.nv) };
    }
}

impl SerialNVector<'_> {
    /// Raw `N_Vector`, valid as long as `self` is.
    pub fn as_ptr(&self) -> N_Vector { self.nv }

    pub fn len(&self) -> usize {
        unsafe { N_VGetLength_Serial(self.nv) as usize }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// The elements, as seen by Sundials.
    pub fn as_slice(&self) -> &[f64] {
        let n = self.len();
        if n == 0 { return &[] }
        unsafe { slice::from_raw_parts(N_VGetArrayPointer_Serial(self.nv), n) }
    }
}

impl Vector {
    /// Lend the elements of `self` to Sundials as a serial
    /// `N_Vector`.  Modifications done by Sundials are visible in
    /// `self` once the returned value is dropped.
    pub fn as_nvector<'a>(&'a mut self, ctx: &'a Context)
                          -> Result<SerialNVector<'a>> {
        let len = self.len();
        let data = self.as_mut_slice();
        let nv = unsafe {
            N_VMake_Serial(len as _, data.as_mut_ptr(), ctx.as_ptr()) };
        if nv.is_null() {
            return Err(Error::fail("Vector::as_nvector",
                                   "N_VMake_Serial returned NULL"))
        }
        trace!("Vector::as_nvector: shared {} elements", len);
        Ok(SerialNVector { nv, marker: PhantomData })
    }

    /// Copy the elements of a serial `N_Vector` into a new vector.
    ///
    /// # Safety
    /// `nv` must be a valid serial `N_Vector`.
    pub unsafe fn from_nvector(nv: N_Vector) -> Vector {
        let n = unsafe { N_VGetLength_Serial(nv) } as usize;
        if n == 0 { return Vector::new() }
        let ptr = unsafe { N_VGetArrayPointer_Serial(nv) };
        Vector::from(unsafe { slice::from_raw_parts(ptr, n) })
    }
}
