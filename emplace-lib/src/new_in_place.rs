use core::alloc::Layout;

use super::{
    capture::Capture,
    construct::{Construct, TryConstruct},
    emplace::Emplace,
};

/// Something that knows how to populate a slot of type `T`.
///
/// Containers take `impl NewInPlace<T>` and never see the constructor
/// arguments behind it.
pub trait NewInPlace<T> {
    #[inline(always)]
    fn result_layout(&self) -> Layout {
        Layout::new::<T>()
    }
    /// # Safety
    ///
    /// `p` must be valid for writes of `result_layout()` and aligned to it.
    unsafe fn new_in_place(self, p: *mut T);
}

pub trait TryNewInPlace<T> {
    type Error;
    #[inline(always)]
    fn result_layout(&self) -> Layout {
        Layout::new::<T>()
    }
    /// Nothing is written to `p` when an error is returned.
    ///
    /// # Safety
    ///
    /// Same as [`NewInPlace::new_in_place`].
    unsafe fn try_new_in_place(self, p: *mut T) -> Result<(), Self::Error>;
}

impl<C: Capture, T: Construct<C::Forwarded>> NewInPlace<T> for Emplace<C> {
    #[inline(always)]
    unsafe fn new_in_place(self, p: *mut T) {
        self.construct_at(p);
    }
}

impl<C: Capture, T: TryConstruct<C::Forwarded>> TryNewInPlace<T> for Emplace<C> {
    type Error = T::Error;
    #[inline(always)]
    unsafe fn try_new_in_place(self, p: *mut T) -> Result<(), Self::Error> {
        self.try_construct_at(p)
    }
}
