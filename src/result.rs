//! The result facade.
//!
//! Every operation works the same for all four payload shapes:
//! `Result<T, E>`, `Result<Unit, E>`, `Result<T, Unit>` and `Result<Unit, Unit>`.
//! Extraction from a unit-shaped slot is refused when building, not at runtime.
//!
//! Consuming operations take `self`, so using a result after it was unwrapped
//! or transformed is a move error.

use crate::resolve::Transform;
use crate::storage::{Discriminant, Occupied, Storage};
use crate::{Checked, Error};

mod compare;
pub use compare::{ByErr, ByOk, Comparand};

mod trait_implementations;

/// Either a success payload `T` or a failure payload `E`.
///
/// Build one with [`Result::success`] / [`Result::failure`], or from the
/// [`Success`](crate::Success) and [`Failure`](crate::Failure) wrappers
/// (`ok!(x).into()`). Not `Copy`: duplicate explicitly with `clone`.
#[must_use = "this `Result` may be a failure, which should be handled"]
#[derive(Clone, Hash)]
pub struct Result<T, E> {
    storage: Storage<T, E>,
}

#[cold]
#[track_caller]
fn violated(error: Error) -> ! {
    error!("{}", error);
    panic!("{}", error)
}

#[cold]
#[track_caller]
fn expectation_failed(message: &str) -> ! {
    error!("{}", message);
    panic!("{}", message)
}

// c'tors and queries
impl<T, E> Result<T, E> {
    #[inline]
    pub const fn success(t: T) -> Self {
        Self { storage: Storage::from_success(t) }
    }

    #[inline]
    pub const fn failure(e: E) -> Self {
        Self { storage: Storage::from_failure(e) }
    }

    #[inline]
    pub const fn discriminant(&self) -> Discriminant {
        self.storage.discriminant()
    }

    #[inline]
    pub const fn is_ok(&self) -> bool {
        self.storage.holds(Discriminant::Success)
    }

    #[inline]
    pub const fn is_err(&self) -> bool {
        self.storage.holds(Discriminant::Failure)
    }

    pub fn is_ok_and(self, f: impl FnOnce(T) -> bool) -> bool {
        match self.storage {
            Storage::Success(t) => f(t),
            Storage::Failure(_) => false,
        }
    }

    pub fn is_err_and(self, f: impl FnOnce(E) -> bool) -> bool {
        match self.storage {
            Storage::Success(_) => false,
            Storage::Failure(e) => f(e),
        }
    }

    /// Success payload, if any.
    pub fn ok(self) -> Option<T> {
        match self.storage {
            Storage::Success(t) => Some(t),
            Storage::Failure(_) => None,
        }
    }

    /// Failure payload, if any.
    pub fn err(self) -> Option<E> {
        match self.storage {
            Storage::Success(_) => None,
            Storage::Failure(e) => Some(e),
        }
    }

    pub fn as_ref(&self) -> Result<&T, &E> {
        Result { storage: self.storage.as_ref() }
    }

    pub fn as_mut(&mut self) -> Result<&mut T, &mut E> {
        Result { storage: self.storage.as_mut() }
    }

    /// Into the standard library's result, e.g. to propagate with `?`.
    pub fn into_std(self) -> core::result::Result<T, E> {
        match self.storage {
            Storage::Success(t) => Ok(t),
            Storage::Failure(e) => Err(e),
        }
    }
}

/// Extraction.
///
/// All of these consume the result. The checked ones are fatal on misuse:
/// the diagnostic is logged, then the caller panics.
impl<T, E> Result<T, E> {
    /// The success payload.
    ///
    /// Panics if this is a failure.
    ///
    /// ```
    /// use sumtype::{ok, Result};
    ///
    /// let r: Result<u8, u8> = ok!(1u8).into();
    /// assert_eq!(r.unwrap(), 1);
    /// ```
    ///
    /// The success slot must hold something. Extracting from a zero-sized
    /// slot fails to build, for [`Unit`](crate::Unit) and `()` as well as for
    /// any other zero-sized type, marker structs included:
    ///
    /// ```compile_fail
    /// use sumtype::{ok, Result, Unit};
    ///
    /// let r: Result<Unit, u8> = ok!().into();
    /// let _ = r.unwrap();
    /// ```
    ///
    /// ```compile_fail
    /// use sumtype::{Result, Success};
    ///
    /// struct Token;
    ///
    /// let r: Result<Token, u8> = Success(Token).into();
    /// let _ = r.unwrap();
    /// ```
    ///
    /// The same goes for the output of [`map_or`](Self::map_or):
    ///
    /// ```compile_fail
    /// use sumtype::{ok, Result, Unit};
    ///
    /// let r: Result<u8, u8> = ok!(1u8).into();
    /// let _: Unit = r.map_or(|| Unit, Unit);
    /// ```
    ///
    /// Use [`is_ok`](Self::is_ok) or [`ok`](Self::ok) for those.
    #[track_caller]
    pub fn unwrap(self) -> T {
        let () = Occupied::<T>::ASSERT;
        match self.storage {
            Storage::Success(t) => t,
            Storage::Failure(_) => violated(Error::UnwrapOnFailure),
        }
    }

    /// The failure payload.
    ///
    /// Panics if this is a success.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        let () = Occupied::<E>::ASSERT;
        match self.storage {
            Storage::Success(_) => violated(Error::UnwrapErrOnSuccess),
            Storage::Failure(e) => e,
        }
    }

    /// The success payload, without checking.
    ///
    /// # Safety
    ///
    /// `self.is_ok()` must hold, otherwise this is undefined behaviour.
    #[inline]
    pub unsafe fn unwrap_unchecked(self) -> T {
        let () = Occupied::<T>::ASSERT;
        trace!("unchecked unwrap");
        self.storage.success_unchecked()
    }

    /// The failure payload, without checking.
    ///
    /// # Safety
    ///
    /// `self.is_err()` must hold, otherwise this is undefined behaviour.
    #[inline]
    pub unsafe fn unwrap_err_unchecked(self) -> E {
        let () = Occupied::<E>::ASSERT;
        trace!("unchecked unwrap_err");
        self.storage.failure_unchecked()
    }

    /// Like [`unwrap`](Self::unwrap), but panics with `message`.
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        let () = Occupied::<T>::ASSERT;
        match self.storage {
            Storage::Success(t) => t,
            Storage::Failure(_) => expectation_failed(message),
        }
    }

    /// Like [`unwrap_err`](Self::unwrap_err), but panics with `message`.
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E {
        let () = Occupied::<E>::ASSERT;
        match self.storage {
            Storage::Success(_) => expectation_failed(message),
            Storage::Failure(e) => e,
        }
    }

    pub fn unwrap_or(self, fallback: T) -> T {
        let () = Occupied::<T>::ASSERT;
        match self.storage {
            Storage::Success(t) => t,
            Storage::Failure(_) => fallback,
        }
    }

    /// The success payload, or one computed from the failure.
    pub fn unwrap_or_else<Arity, F>(self, f: F) -> T
    where
        F: Transform<E, Arity, Output = T>,
    {
        let () = Occupied::<T>::ASSERT;
        match self.storage {
            Storage::Success(t) => t,
            Storage::Failure(e) => f.apply(e),
        }
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        let () = Occupied::<T>::ASSERT;
        match self.storage {
            Storage::Success(t) => t,
            Storage::Failure(_) => T::default(),
        }
    }

    /// Non-fatal [`unwrap`](Self::unwrap): hands back the violation instead.
    ///
    /// The failure payload is dropped.
    pub fn try_unwrap(self) -> Checked<T> {
        let () = Occupied::<T>::ASSERT;
        match self.storage {
            Storage::Success(t) => Ok(t),
            Storage::Failure(_) => Err(Error::UnwrapOnFailure),
        }
    }

    /// Non-fatal [`unwrap_err`](Self::unwrap_err).
    pub fn try_unwrap_err(self) -> Checked<E> {
        let () = Occupied::<E>::ASSERT;
        match self.storage {
            Storage::Success(_) => Err(Error::UnwrapErrOnSuccess),
            Storage::Failure(e) => Ok(e),
        }
    }
}

/// Transforms.
///
/// Transforms never fail on their own, they only convert or redirect.
/// A transform is either nullary (`|| ...`, payload discarded) or unary
/// (`|x: A| ...`, payload converted into `A`), see [`Transform`].
impl<T, E> Result<T, E> {
    /// Transform the success payload, pass a failure through untouched.
    ///
    /// `f` is not called on a failure.
    pub fn map<Arity, F>(self, f: F) -> Result<F::Output, E>
    where
        F: Transform<T, Arity>,
    {
        match self.storage {
            Storage::Success(t) => Result::success(f.apply(t)),
            Storage::Failure(e) => Result::failure(e),
        }
    }

    /// Transform the failure payload, pass a success through untouched.
    pub fn map_err<Arity, F>(self, f: F) -> Result<T, F::Output>
    where
        F: Transform<E, Arity>,
    {
        match self.storage {
            Storage::Success(t) => Result::success(t),
            Storage::Failure(e) => Result::failure(f.apply(e)),
        }
    }

    /// `f(success)`, or `fallback` on a failure.
    pub fn map_or<Arity, F, R>(self, f: F, fallback: R) -> R
    where
        F: Transform<T, Arity, Output = R>,
    {
        let () = Occupied::<R>::ASSERT;
        match self.storage {
            Storage::Success(t) => f.apply(t),
            Storage::Failure(_) => fallback,
        }
    }

    /// `f(success)` or `other(failure)`; both produce the same type.
    pub fn map_or_else<A, B, F, O, R>(self, f: F, other: O) -> R
    where
        F: Transform<T, A, Output = R>,
        O: Transform<E, B, Output = R>,
    {
        match self.storage {
            Storage::Success(t) => f.apply(t),
            Storage::Failure(e) => other.apply(e),
        }
    }

    /// Chain a fallible step on success, keeping the failure type.
    ///
    /// On a failure `f` is not called and the failure is propagated.
    pub fn and_then<Arity, F, U>(self, f: F) -> Result<U, E>
    where
        F: Transform<T, Arity, Output = Result<U, E>>,
    {
        match self.storage {
            Storage::Success(t) => f.apply(t),
            Storage::Failure(e) => Result::failure(e),
        }
    }

    /// Recover from a failure with a fallible step, keeping the success type.
    pub fn or_else<Arity, F, U>(self, f: F) -> Result<T, U>
    where
        F: Transform<E, Arity, Output = Result<T, U>>,
    {
        match self.storage {
            Storage::Success(t) => Result::success(t),
            Storage::Failure(e) => f.apply(e),
        }
    }

    /// `next` if this is a success, else this failure.
    pub fn and<U>(self, next: Result<U, E>) -> Result<U, E> {
        match self.storage {
            Storage::Success(_) => next,
            Storage::Failure(e) => Result::failure(e),
        }
    }

    /// This success, else `alternative`.
    pub fn or<U>(self, alternative: Result<T, U>) -> Result<T, U> {
        match self.storage {
            Storage::Success(t) => Result::success(t),
            Storage::Failure(_) => alternative,
        }
    }

    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        if let Some(t) = self.storage.success() {
            f(t);
        }
        self
    }

    pub fn inspect_err(self, f: impl FnOnce(&E)) -> Self {
        if let Some(e) = self.storage.failure() {
            f(e);
        }
        self
    }
}

impl<U, E> Result<Result<U, E>, E> {
    /// Collapse one level of nesting.
    pub fn flatten(self) -> Result<U, E> {
        self.and_then(|inner: Result<U, E>| inner)
    }
}
