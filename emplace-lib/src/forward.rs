use core::mem::take as take_value;

/// How a captured argument reaches the target constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// The constructor receives the value and may consume it.
    Moved,
    /// The constructor receives a borrow and must not consume the referent.
    Referenced,
}

/// A captured argument together with its forwarding intent.
///
/// The intent is part of the type, so it is fixed when the argument is
/// captured and re-materialized exactly once, by [`Forward::forward`].
pub trait Forward {
    const CATEGORY: Category;
    type Output;
    fn forward(self) -> Self::Output;
}

impl<'a, T: ?Sized> Forward for &'a T {
    const CATEGORY: Category = Category::Referenced;
    type Output = &'a T;
    #[inline(always)]
    fn forward(self) -> Self::Output {
        self
    }
}

impl<'a, T: ?Sized> Forward for &'a mut T {
    const CATEGORY: Category = Category::Referenced;
    type Output = &'a mut T;
    #[inline(always)]
    fn forward(self) -> Self::Output {
        self
    }
}

/// An owned value, relocated into the capture and moved into the constructor.
#[derive(Debug)]
#[repr(transparent)]
pub struct Own<T>(pub T);

impl<T> Forward for Own<T> {
    const CATEGORY: Category = Category::Moved;
    type Output = T;
    #[inline(always)]
    fn forward(self) -> Self::Output {
        self.0
    }
}

/// A borrowed value that is moved out when the capture is forwarded.
///
/// The source is left holding `T::default()`.
#[derive(Debug)]
#[repr(transparent)]
pub struct Take<'a, T: Default>(&'a mut T);

impl<T: Default> Forward for Take<'_, T> {
    const CATEGORY: Category = Category::Moved;
    type Output = T;
    #[inline(always)]
    fn forward(self) -> Self::Output {
        take_value(self.0)
    }
}

#[inline(always)]
pub const fn own<T>(value: T) -> Own<T> {
    Own(value)
}

#[inline(always)]
pub fn take<T: Default>(value: &mut T) -> Take<'_, T> {
    Take(value)
}
