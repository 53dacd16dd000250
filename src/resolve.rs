//! Arity resolution for transforms.
//!
//! `map` and `map_err` accept either a transform that discards the payload
//! (`|| ...`) or one that takes it (`|x: A| ...`), where the payload only has to
//! convert into `A`. Which of the two applies is decided by the transform's
//! declared signature: every closure implements exactly one of `FnOnce()` and
//! `FnOnce(A)`, so exactly one [`Transform`] impl matches, and the arity marker
//! is inferred at compile time.
//!
//! Because the marker is generic, one-argument closures need their parameter
//! type written out. Plain functions and zero-argument closures need nothing.

use core::marker::PhantomData;

/// Arity marker: the transform ignores its input.
pub enum Nullary {}

/// Arity marker: the transform takes its input, converted into `A`.
pub struct Unary<A>(PhantomData<fn(A)>);

/// A transform applicable to an `In`.
///
/// `Arity` is [`Nullary`] or [`Unary`], and is never named by callers.
pub trait Transform<In, Arity> {
    type Output;

    fn apply(self, input: In) -> Self::Output;
}

impl<F, R, In> Transform<In, Nullary> for F
where
    F: FnOnce() -> R,
{
    type Output = R;

    #[inline]
    fn apply(self, _: In) -> R {
        self()
    }
}

impl<F, R, In, A> Transform<In, Unary<A>> for F
where
    F: FnOnce(A) -> R,
    In: Into<A>,
{
    type Output = R;

    #[inline]
    fn apply(self, input: In) -> R {
        self(input.into())
    }
}

/// Apply `transform` to `input`, whatever its arity.
#[inline]
pub fn apply<In, Arity, F>(transform: F, input: In) -> F::Output
where
    F: Transform<In, Arity>,
{
    transform.apply(input)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Unit;

    fn double(x: u32) -> u32 {
        2 * x
    }

    #[test]
    fn nullary_discards() {
        assert_eq!(apply(|| 7, "ignored"), 7);
        assert_eq!(apply(|| "unit in, str out", Unit), "unit in, str out");
    }

    #[test]
    fn unary_takes() {
        assert_eq!(apply(|x: i32| x + 1, 1), 2);
        assert_eq!(apply(double, 21u32), 42);
    }

    #[test]
    fn unary_converts() {
        // u8 -> u64, &str -> String
        assert_eq!(apply(|x: u64| x << 40, 1u8), 1 << 40);
        assert_eq!(apply(|s: String| s.len(), "four"), 4);
    }

    #[test]
    fn moves_its_environment() {
        let owned = String::from("moved");
        let taken = apply(move || owned, Unit);
        assert_eq!(taken, "moved");
    }
}
