//! Variant storage.
//!
//! A native enum is the tagged union: the compiler keeps the tag and the
//! constructed payload in agreement, and lays out each of the four payload
//! shapes separately. A [`Unit`](crate::Unit) slot adds nothing, so
//! `Storage<Unit, Unit>` is just the tag and `Storage<T, Unit>` is laid out
//! like `Option<T>`, niche included.

use core::{hint::unreachable_unchecked, marker::PhantomData, mem::size_of};

/// Which of the two variants is held.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Discriminant {
    Success,
    Failure,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Storage<T, E> {
    Success(T),
    Failure(E),
}

/// Build-time check that a payload slot is not unit-shaped.
///
/// `let () = Occupied::<T>::ASSERT;` fails to build once instantiated with a
/// zero-sized `T`. Used to refuse extracting a payload that was never stored.
/// Every zero-sized type counts as unit-shaped, not just `Unit` and `()`.
#[allow(dead_code)]
pub(crate) struct Occupied<T>(PhantomData<T>);

impl<T> Occupied<T> {
    pub(crate) const ASSERT: () = assert!(
        size_of::<T>() != 0,
        "payload slot is unit-shaped, there is nothing to extract"
    );
}

impl<T, E> Storage<T, E> {
    #[inline]
    pub(crate) const fn from_success(t: T) -> Self {
        Storage::Success(t)
    }

    #[inline]
    pub(crate) const fn from_failure(e: E) -> Self {
        Storage::Failure(e)
    }

    #[inline]
    pub(crate) const fn discriminant(&self) -> Discriminant {
        match self {
            Storage::Success(_) => Discriminant::Success,
            Storage::Failure(_) => Discriminant::Failure,
        }
    }

    #[inline]
    pub(crate) const fn holds(&self, discriminant: Discriminant) -> bool {
        matches!(
            (self, discriminant),
            (Storage::Success(_), Discriminant::Success) | (Storage::Failure(_), Discriminant::Failure)
        )
    }

    #[inline]
    pub(crate) fn success(&self) -> Option<&T> {
        match self {
            Storage::Success(t) => Some(t),
            Storage::Failure(_) => None,
        }
    }

    #[inline]
    pub(crate) fn failure(&self) -> Option<&E> {
        match self {
            Storage::Success(_) => None,
            Storage::Failure(e) => Some(e),
        }
    }

    /// Safety: `self.holds(Discriminant::Success)`.
    #[inline]
    pub(crate) unsafe fn success_unchecked(self) -> T {
        debug_assert!(self.holds(Discriminant::Success));
        match self {
            Storage::Success(t) => t,
            Storage::Failure(_) => unreachable_unchecked(),
        }
    }

    /// Safety: `self.holds(Discriminant::Failure)`.
    #[inline]
    pub(crate) unsafe fn failure_unchecked(self) -> E {
        debug_assert!(self.holds(Discriminant::Failure));
        match self {
            Storage::Success(_) => unreachable_unchecked(),
            Storage::Failure(e) => e,
        }
    }

    #[inline]
    pub(crate) fn as_ref(&self) -> Storage<&T, &E> {
        match self {
            Storage::Success(t) => Storage::Success(t),
            Storage::Failure(e) => Storage::Failure(e),
        }
    }

    #[inline]
    pub(crate) fn as_mut(&mut self) -> Storage<&mut T, &mut E> {
        match self {
            Storage::Success(t) => Storage::Success(t),
            Storage::Failure(e) => Storage::Failure(e),
        }
    }
}
