use core::{mem::MaybeUninit, ptr::NonNull};

use super::{
    capture::Capture,
    construct::{Construct, TryConstruct},
    error::AddressError,
    forward::Category,
    slot::slot_ptr,
};

/// A deferred construction request.
///
/// Holds the captured arguments until a destination is known, then forwards
/// them, in order and with their categories, to the constructor of the
/// requested type. Constructing consumes the token. A token whose arguments
/// are all shared borrows is `Copy`, and every copy makes the same call.
#[must_use = "an emplace token does nothing until it is constructed"]
#[derive(Debug, Clone, Copy)]
#[repr(transparent)]
pub struct Emplace<C>(C);

impl<C: Capture> Emplace<C> {
    #[inline(always)]
    pub const fn new(capture: C) -> Self {
        Self(capture)
    }
    #[inline(always)]
    pub const fn arity(&self) -> usize {
        C::ARITY
    }
    pub fn categories(&self) -> impl Iterator<Item = Category> {
        C::categories()
    }
    /// Runs the constructor and returns the object by value.
    #[inline(always)]
    pub fn construct<T: Construct<C::Forwarded>>(self) -> T {
        T::construct(self.0.forward())
    }
    #[inline(always)]
    pub fn try_construct<T: TryConstruct<C::Forwarded>>(self) -> Result<T, T::Error> {
        T::try_construct(self.0.forward())
    }
    /// Constructs a `T` in `slot` and returns a reference to it.
    ///
    /// The caller owns the result: it is not dropped with the slot.
    #[inline(always)]
    pub fn write<T: Construct<C::Forwarded>>(self, slot: &mut MaybeUninit<T>) -> &mut T {
        slot.write(self.construct())
    }
    /// On error `slot` is left uninitialized.
    #[inline(always)]
    pub fn try_write<T: TryConstruct<C::Forwarded>>(
        self,
        slot: &mut MaybeUninit<T>,
    ) -> Result<&mut T, T::Error> {
        Ok(slot.write(self.try_construct()?))
    }
    /// Constructs a `T` at `p`.
    ///
    /// # Safety
    ///
    /// `p` must be valid for writes and aligned for `T`. Whatever `p` holds is
    /// overwritten without being dropped.
    #[inline(always)]
    pub unsafe fn construct_at<T: Construct<C::Forwarded>>(self, p: *mut T) {
        p.write(self.construct());
    }
    /// Like [`Emplace::construct_at`]. On error nothing is written to `p`.
    ///
    /// # Safety
    ///
    /// Same as [`Emplace::construct_at`].
    #[inline(always)]
    pub unsafe fn try_construct_at<T: TryConstruct<C::Forwarded>>(
        self,
        p: *mut T,
    ) -> Result<(), T::Error> {
        p.write(self.try_construct()?);
        Ok(())
    }
    /// Checks that `address` is non-null and aligned for `T`, then constructs
    /// a `T` there. The token is dropped unused when the check fails.
    ///
    /// # Safety
    ///
    /// `address` must be valid for writes of `size_of::<T>()` bytes.
    pub unsafe fn construct_at_address<T: Construct<C::Forwarded>>(
        self,
        address: *mut u8,
    ) -> Result<NonNull<T>, AddressError> {
        let p = slot_ptr::<T>(address)?;
        self.construct_at(p.as_ptr());
        Ok(p)
    }
}

#[inline(always)]
pub const fn emplace<C: Capture>(capture: C) -> Emplace<C> {
    Emplace::new(capture)
}

/// Captures constructor arguments for a later placement.
///
/// Each argument must be a `&T`, a `&mut T` (forwarded as a borrow), an
/// [`Own`](crate::forward::Own) or a [`Take`](crate::forward::Take) (forwarded
/// as a value). `emplace!()` default-constructs.
#[macro_export]
macro_rules! emplace {
    ($($arg:expr),* $(,)?) => {
        $crate::emplace::Emplace::new($crate::args!($($arg),*))
    };
}
