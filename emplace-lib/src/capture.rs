use super::forward::{Category, Forward};

/// The empty argument list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Nil;

/// An argument followed by the rest of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cons<H, T>(pub H, pub T);

/// An ordered list of captured arguments.
///
/// Arity and per-argument categories are known statically. Forwarding walks
/// the list front to back, so the constructor sees the arguments in call-site
/// order.
pub trait Capture: Sized {
    const ARITY: usize;
    /// The list the target constructor receives.
    type Forwarded;
    fn forward(self) -> Self::Forwarded;
    fn category(index: usize) -> Option<Category>;
    #[inline(always)]
    fn categories() -> impl Iterator<Item = Category> {
        (0..Self::ARITY).filter_map(Self::category)
    }
}

impl Capture for Nil {
    const ARITY: usize = 0;
    type Forwarded = Nil;
    #[inline(always)]
    fn forward(self) -> Self::Forwarded {
        Nil
    }
    #[inline(always)]
    fn category(_: usize) -> Option<Category> {
        None
    }
}

impl<H: Forward, T: Capture> Capture for Cons<H, T> {
    const ARITY: usize = T::ARITY + 1;
    type Forwarded = Cons<H::Output, T::Forwarded>;
    #[inline(always)]
    fn forward(self) -> Self::Forwarded {
        let Cons(head, tail) = self;
        let head = head.forward();
        Cons(head, tail.forward())
    }
    fn category(index: usize) -> Option<Category> {
        match index {
            0 => Some(H::CATEGORY),
            i => T::category(i - 1),
        }
    }
}

/// Builds an argument list value: `args![a, b, c]`.
#[macro_export]
macro_rules! args {
    () => {
        $crate::capture::Nil
    };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::capture::Cons($head, $crate::args!($($tail),*))
    };
}

/// Names an argument list type: `Args![A, B, C]`.
#[macro_export]
macro_rules! Args {
    () => {
        $crate::capture::Nil
    };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::capture::Cons<$head, $crate::Args!($($tail),*)>
    };
}

/// Destructures an argument list: `let args_pat![a, b] = list;`.
#[macro_export]
macro_rules! args_pat {
    () => {
        $crate::capture::Nil
    };
    ($head:pat_param $(, $tail:pat_param)* $(,)?) => {
        $crate::capture::Cons($head, $crate::args_pat!($($tail),*))
    };
}

#[cfg(test)]
mod test {
    use wasm_bindgen_test::wasm_bindgen_test;

    use crate::forward::{own, take, Category};

    use super::{Capture, Cons, Nil};

    #[test]
    #[wasm_bindgen_test]
    fn test_arity() {
        assert_eq!(<Args![]>::ARITY, 0);
        assert_eq!(<Args![&u8]>::ARITY, 1);
        assert_eq!(<Args![&u8, &u8, &u8, &u8, &u8, &u8, &u8, &u8, &u8, &u8, &u8, &u8]>::ARITY, 12);
    }

    #[test]
    #[wasm_bindgen_test]
    fn test_macro_shape() {
        let a = 1u8;
        let list = args![&a, own(2u16)];
        let Cons(x, Cons(y, Nil)) = list;
        assert_eq!(*x, 1);
        assert_eq!(y.0, 2);
        let _: Args![u8, u16,] = args![1u8, 2u16,];
    }

    #[test]
    #[wasm_bindgen_test]
    fn test_categories_in_order() {
        let mut s = String::new();
        let n = 5;
        fn cats<C: Capture>(_: &C) -> Vec<Category> {
            C::categories().collect()
        }
        let list = args![take(&mut s), &n, own(vec![1])];
        assert_eq!(
            cats(&list),
            [Category::Moved, Category::Referenced, Category::Moved]
        );
        assert!(cats(&Nil).is_empty());
    }

    #[test]
    #[wasm_bindgen_test]
    fn test_forward_order() {
        let a = String::from("a");
        let mut b = String::from("b");
        let args_pat![x, y, z] = args![&a, take(&mut b), own(String::from("c"))].forward();
        assert_eq!([x.as_str(), y.as_str(), z.as_str()], ["a", "b", "c"]);
        assert!(b.is_empty());
    }

    #[test]
    #[wasm_bindgen_test]
    fn test_clone_duplicates_references() {
        let v = vec![1, 2, 3];
        let list = args![&v, &v];
        let copy = list;
        let args_pat![p, q] = copy.forward();
        let args_pat![r, _] = list.forward();
        assert!(core::ptr::eq(p, q));
        assert!(core::ptr::eq(p, r));
    }
}
