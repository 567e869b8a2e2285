use core::{
    mem::{align_of, size_of, MaybeUninit},
    ptr::NonNull,
};

use tracing::debug;

use super::error::AddressError;

/// Checks that `address` is non-null and aligned for `T`.
///
/// Size and validity of the memory behind `address` are not checked.
pub fn slot_ptr<T>(address: *mut u8) -> Result<NonNull<T>, AddressError> {
    let Some(p) = NonNull::new(address) else {
        debug!(type_name = core::any::type_name::<T>(), "null slot address");
        return Err(AddressError::Null);
    };
    let align = align_of::<T>();
    let address = address as usize;
    if address % align != 0 {
        debug!(address, align, "misaligned slot address");
        return Err(AddressError::Misaligned { address, align });
    }
    Ok(p.cast())
}

/// A typed uninitialized slot at byte `offset` of `bytes`.
pub fn slot_at<T>(
    bytes: &mut [MaybeUninit<u8>],
    offset: usize,
) -> Result<&mut MaybeUninit<T>, AddressError> {
    let size = size_of::<T>();
    let len = bytes.len().saturating_sub(offset);
    if offset > bytes.len() || len < size {
        debug!(offset, len, size, "slot does not fit");
        return Err(AddressError::TooSmall { len, size });
    }
    let p = slot_ptr::<MaybeUninit<T>>(bytes[offset..].as_mut_ptr().cast())?;
    // `p` is aligned, in bounds for `size` bytes and borrowed from `bytes`.
    Ok(unsafe { &mut *p.as_ptr() })
}

/// A typed uninitialized slot at the start of `bytes`.
#[inline(always)]
pub fn slot_in<T>(bytes: &mut [MaybeUninit<u8>]) -> Result<&mut MaybeUninit<T>, AddressError> {
    slot_at(bytes, 0)
}
