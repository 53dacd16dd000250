//! Success and failure wrappers.
//!
//! Transient builders: they become a [`Result`](crate::Result) through `From`
//! (or [`Success::into_result`] / [`Failure::into_result`]), and otherwise only
//! appear as the right hand side of a comparison. Both are `repr(transparent)`,
//! so a borrowed payload can be viewed as a wrapper without moving it, e.g.
//! `result == *Success::from_ref(&expected)`.

use core::{cmp::Ordering, fmt};

use ref_cast::RefCast;
use zeroize::Zeroize;

use crate::{Result, Unit};

/// The success variant, on its own.
#[derive(Clone, Copy, Default, Hash, RefCast)]
#[repr(transparent)]
pub struct Success<T>(pub T);

/// The failure variant, on its own.
#[derive(Clone, Copy, Default, Hash, RefCast)]
#[repr(transparent)]
pub struct Failure<E>(pub E);

/// `ok!(value)` is `Success(value)`, `ok!()` is the unit success.
#[macro_export]
macro_rules! ok {
    () => {
        $crate::Success::unit()
    };
    ($value:expr) => {
        $crate::Success($value)
    };
}

/// `err!(value)` is `Failure(value)`, `err!()` is the unit failure.
#[macro_export]
macro_rules! err {
    () => {
        $crate::Failure::unit()
    };
    ($value:expr) => {
        $crate::Failure($value)
    };
}

macro_rules! wrapper {
    ($wrapper:ident, $param:ident, $into_result:ident: $result:ty) => {
        impl<$param> $wrapper<$param> {
            pub const fn new(value: $param) -> Self {
                Self(value)
            }

            pub fn into_inner(self) -> $param {
                self.0
            }

            /// Borrow a payload as a wrapper, e.g. to compare against it in place.
            pub fn from_ref(value: &$param) -> &Self {
                Self::ref_cast(value)
            }

            pub fn $into_result<X>(self) -> $result {
                self.into()
            }
        }

        impl $wrapper<Unit> {
            pub const fn unit() -> Self {
                Self(Unit)
            }
        }

        impl<$param: fmt::Debug> fmt::Debug for $wrapper<$param> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($wrapper)).field(&self.0).finish()
            }
        }

        impl<$param, U> PartialEq<$wrapper<U>> for $wrapper<$param>
        where
            $param: PartialEq<U>,
        {
            fn eq(&self, other: &$wrapper<U>) -> bool {
                self.0 == other.0
            }
        }

        impl<$param: Eq> Eq for $wrapper<$param> {}

        impl<$param, U> PartialOrd<$wrapper<U>> for $wrapper<$param>
        where
            $param: PartialOrd<U>,
        {
            fn partial_cmp(&self, other: &$wrapper<U>) -> Option<Ordering> {
                self.0.partial_cmp(&other.0)
            }
        }

        impl<$param: Ord> Ord for $wrapper<$param> {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.cmp(&other.0)
            }
        }

        impl<$param: Zeroize> Zeroize for $wrapper<$param> {
            fn zeroize(&mut self) {
                self.0.zeroize();
            }
        }

        #[cfg(feature = "ct-maybe")]
        impl<$param: subtle::ConstantTimeEq> subtle::ConstantTimeEq for $wrapper<$param> {
            fn ct_eq(&self, other: &Self) -> subtle::Choice {
                self.0.ct_eq(&other.0)
            }
        }
    };
}

wrapper!(Success, T, into_result: Result<T, X>);
wrapper!(Failure, E, into_result: Result<X, E>);
