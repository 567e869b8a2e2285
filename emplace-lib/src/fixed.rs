use super::new_in_place::NewInPlace;

/// An already built value, moved into the slot as is.
#[repr(transparent)]
pub struct Fixed<T>(pub T);

impl<T> NewInPlace<T> for Fixed<T> {
    #[inline(always)]
    unsafe fn new_in_place(self, p: *mut T) {
        p.write(self.0);
    }
}
