use super::capture::Nil;

/// A constructor of `Self` taking the argument list `A`.
///
/// A type's set of constructors is the set of `A` it implements this for,
/// so picking an overload is ordinary trait resolution. Construction from
/// `Nil` is `Default`.
pub trait Construct<A>: Sized {
    fn construct(args: A) -> Self;
}

impl<T: Default> Construct<Nil> for T {
    #[inline(always)]
    fn construct(_: Nil) -> Self {
        T::default()
    }
}

/// A constructor that may fail. The error reaches the caller as is.
pub trait TryConstruct<A>: Sized {
    type Error;
    fn try_construct(args: A) -> Result<Self, Self::Error>;
}

#[cfg(test)]
mod test {
    use wasm_bindgen_test::wasm_bindgen_test;

    use crate::capture::Nil;

    use super::{Construct, TryConstruct};

    #[derive(Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    impl Default for Point {
        fn default() -> Self {
            Point { x: -1, y: -1 }
        }
    }

    impl Construct<Args![i32, i32]> for Point {
        fn construct(args_pat![x, y]: Args![i32, i32]) -> Self {
            Point { x, y }
        }
    }

    impl<'a> Construct<Args![&'a Point]> for Point {
        fn construct(args_pat![p]: Args![&'a Point]) -> Self {
            Point { x: p.x, y: p.y }
        }
    }

    impl<'a> TryConstruct<Args![&'a str]> for Point {
        type Error = core::num::ParseIntError;
        fn try_construct(args_pat![s]: Args![&'a str]) -> Result<Self, Self::Error> {
            let x = s.parse()?;
            Ok(Point { x, y: x })
        }
    }

    #[test]
    #[wasm_bindgen_test]
    fn test_overloads() {
        assert_eq!(Point::construct(Nil), Point { x: -1, y: -1 });
        let p = Point::construct(args![3, 4]);
        assert_eq!(p, Point { x: 3, y: 4 });
        assert_eq!(Point::construct(args![&p]), p);
    }

    #[test]
    #[wasm_bindgen_test]
    fn test_try_construct() {
        assert_eq!(
            Point::try_construct(args!["7"]),
            Ok(Point { x: 7, y: 7 })
        );
        let direct = "x".parse::<i32>().unwrap_err();
        assert_eq!(Point::try_construct(args!["x"]), Err(direct));
    }
}
