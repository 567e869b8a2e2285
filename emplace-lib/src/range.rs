use core::{
    mem::{forget, needs_drop, MaybeUninit},
    ptr::{drop_in_place, slice_from_raw_parts_mut},
    slice::from_raw_parts_mut,
};

use tracing::{debug, trace};

use super::{
    capture::Capture,
    construct::Construct,
    emplace::Emplace,
    new_in_place::{NewInPlace, TryNewInPlace},
};

/// Drops the constructed prefix `[begin, begin + len)` unless forgotten.
struct Built<T> {
    begin: *mut T,
    len: usize,
}

impl<T> Drop for Built<T> {
    fn drop(&mut self) {
        debug!(built = self.len, "rolling back partially constructed range");
        unsafe { destruct_slice(slice_from_raw_parts_mut(self.begin, self.len)) };
    }
}

/// Constructs every slot from `f(index)`, front to back.
///
/// If a constructor panics, the slots built so far are dropped before the
/// panic continues.
pub fn construct_slice<T, N: NewInPlace<T>>(
    slots: &mut [MaybeUninit<T>],
    mut f: impl FnMut(usize) -> N,
) -> &mut [T] {
    let len = slots.len();
    trace!(len, "constructing range");
    let mut built = Built {
        begin: slots.as_mut_ptr().cast::<T>(),
        len: 0,
    };
    while built.len < len {
        unsafe { f(built.len).new_in_place(built.begin.add(built.len)) };
        built.len += 1;
    }
    let begin = built.begin;
    forget(built);
    unsafe { from_raw_parts_mut(begin, len) }
}

/// Like [`construct_slice`]. On the first error the slots built so far are
/// dropped and the error is returned as is.
pub fn try_construct_slice<T, N: TryNewInPlace<T>>(
    slots: &mut [MaybeUninit<T>],
    mut f: impl FnMut(usize) -> N,
) -> Result<&mut [T], N::Error> {
    let len = slots.len();
    trace!(len, "constructing range");
    let mut built = Built {
        begin: slots.as_mut_ptr().cast::<T>(),
        len: 0,
    };
    while built.len < len {
        unsafe { f(built.len).try_new_in_place(built.begin.add(built.len))? };
        built.len += 1;
    }
    let begin = built.begin;
    forget(built);
    Ok(unsafe { from_raw_parts_mut(begin, len) })
}

/// Constructs every slot from a copy of `token`.
pub fn fill_slice<T, C>(slots: &mut [MaybeUninit<T>], token: Emplace<C>) -> &mut [T]
where
    C: Capture + Clone,
    T: Construct<C::Forwarded>,
{
    construct_slice(slots, |_| token.clone())
}

/// Drops a constructed range in place.
///
/// # Safety
///
/// Every item of `items` must be initialized and must not be used afterwards.
pub unsafe fn destruct_slice<T>(items: *mut [T]) {
    if needs_drop::<T>() {
        trace!(len = items.len(), "destructing range");
        drop_in_place(items);
    }
}
