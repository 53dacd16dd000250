//! Comparisons of results against bare wrappers and other results.
//!
//! Two surfaces. [`Result::relate`] is the full relational algebra: any of
//! the six operators, against a [`Success`], a [`Failure`], another
//! [`Result`], or a one-sided [`ByOk`] / [`ByErr`] view of one. Payloads in
//! different states never relate, whatever the operator, `NotEqual` included.
//!
//! The native operators `==`, `!=`, `<`, `<=`, `>`, `>=` are the same
//! algebra: each one is `relate` with the matching operator, so across states
//! all six are `false`. In particular `!=` is not the negation of `==` there.
//! `partial_cmp` is `None` across states.
//!
//! Either way, a comparison is only there if the payload types support it.

use core::cmp::Ordering;

use ref_cast::RefCast;

use super::Result;
use crate::probe::{Equal, Greater, GreaterOrEqual, Less, LessOrEqual, NotEqual, Operator, Relation};
use crate::storage::Storage;
use crate::{Failure, Success};

/// A result, compared by its success payload only.
///
/// For results whose failure payloads can't be compared: two views relate
/// iff both are successes and the success payloads relate.
#[derive(RefCast)]
#[repr(transparent)]
pub struct ByOk<T, E>(Result<T, E>);

/// A result, compared by its failure payload only.
#[derive(RefCast)]
#[repr(transparent)]
pub struct ByErr<T, E>(Result<T, E>);

/// Right hand side of [`Result::relate`] under operator `Op`.
///
/// Implemented only where `Op` exists between the payloads involved.
pub trait Comparand<Op: Operator, T, E> {
    fn related(&self, op: Op, lhs: &Result<T, E>) -> bool;
}

impl<T, E> Result<T, E> {
    /// Does `self op rhs` hold?
    ///
    /// ```
    /// use sumtype::{probe::{Equal, Less, NotEqual}, Failure, Result, Success};
    ///
    /// let two: Result<u8, &str> = Result::success(2);
    /// assert!(two.relate(Less, &Success(3u8)));
    /// assert!(!two.relate(Equal, &Failure("two")));
    /// assert!(!two.relate(NotEqual, &Failure("two")));
    /// ```
    ///
    /// The payloads must support the operator. Neither of these builds:
    ///
    /// ```compile_fail
    /// use sumtype::{Result, Success};
    ///
    /// struct Opaque;
    ///
    /// let r: Result<Opaque, Opaque> = Result::success(Opaque);
    /// let _ = r == Success(Opaque);
    /// ```
    ///
    /// ```compile_fail
    /// use sumtype::{probe::Equal, Result};
    ///
    /// struct Opaque;
    ///
    /// let a: Result<u8, Opaque> = Result::success(1);
    /// let b: Result<u8, Opaque> = Result::success(1);
    /// let _ = a.relate(Equal, &b);
    /// ```
    ///
    /// Comparing by the success payloads alone does:
    ///
    /// ```
    /// use sumtype::{probe::Equal, Result};
    ///
    /// struct Opaque;
    ///
    /// let a: Result<u8, Opaque> = Result::success(1);
    /// let b: Result<u8, Opaque> = Result::success(1);
    /// assert!(a.relate(Equal, b.by_ok()));
    /// ```
    pub fn relate<Op, R>(&self, op: Op, rhs: &R) -> bool
    where
        Op: Operator,
        R: Comparand<Op, T, E> + ?Sized,
    {
        trace!("relate {}", Op::SYMBOL);
        rhs.related(op, self)
    }

    /// View comparing by success payloads only.
    pub fn by_ok(&self) -> &ByOk<T, E> {
        ByOk::ref_cast(self)
    }

    /// View comparing by failure payloads only.
    pub fn by_err(&self) -> &ByErr<T, E> {
        ByErr::ref_cast(self)
    }
}

impl<T, E> ByOk<T, E> {
    /// `self op rhs`, for an `rhs` viewed the same way.
    pub fn relate<Op, F, G>(&self, op: Op, rhs: &ByOk<F, G>) -> bool
    where
        Op: Relation<T, F>,
    {
        rhs.related(op, &self.0)
    }
}

impl<T, E> ByErr<T, E> {
    /// `self op rhs`, for an `rhs` viewed the same way.
    pub fn relate<Op, F, G>(&self, op: Op, rhs: &ByErr<F, G>) -> bool
    where
        Op: Relation<E, G>,
    {
        rhs.related(op, &self.0)
    }
}

impl<Op, T, E, U> Comparand<Op, T, E> for Success<U>
where
    Op: Relation<T, U>,
{
    fn related(&self, op: Op, lhs: &Result<T, E>) -> bool {
        match lhs.storage.success() {
            Some(t) => op.holds(t, &self.0),
            None => false,
        }
    }
}

impl<Op, T, E, U> Comparand<Op, T, E> for Failure<U>
where
    Op: Relation<E, U>,
{
    fn related(&self, op: Op, lhs: &Result<T, E>) -> bool {
        match lhs.storage.failure() {
            Some(e) => op.holds(e, &self.0),
            None => false,
        }
    }
}

impl<Op, T, E, F, G> Comparand<Op, T, E> for ByOk<F, G>
where
    Op: Relation<T, F>,
{
    fn related(&self, op: Op, lhs: &Result<T, E>) -> bool {
        match (lhs.storage.success(), self.0.storage.success()) {
            (Some(t), Some(f)) => op.holds(t, f),
            _ => false,
        }
    }
}

impl<Op, T, E, F, G> Comparand<Op, T, E> for ByErr<F, G>
where
    Op: Relation<E, G>,
{
    fn related(&self, op: Op, lhs: &Result<T, E>) -> bool {
        match (lhs.storage.failure(), self.0.storage.failure()) {
            (Some(e), Some(g)) => op.holds(e, g),
            _ => false,
        }
    }
}

impl<Op, T, E, F, G> Comparand<Op, T, E> for Result<F, G>
where
    Op: Relation<T, F> + Relation<E, G>,
{
    fn related(&self, op: Op, lhs: &Result<T, E>) -> bool {
        match (&lhs.storage, &self.storage) {
            (Storage::Success(t), Storage::Success(f)) => <Op as Relation<T, F>>::holds(op, t, f),
            (Storage::Failure(e), Storage::Failure(g)) => <Op as Relation<E, G>>::holds(op, e, g),
            // different states never relate
            _ => false,
        }
    }
}

// `!=` is the payloads' own `!=`, and false across states.
macro_rules! inequality_operator {
    ($rhs:ty) => {
        #[allow(clippy::partialeq_ne_impl)]
        fn ne(&self, other: &$rhs) -> bool {
            self.relate(NotEqual, other)
        }
    };
}

// The ordering operators delegate to the payloads' own `<`, `<=`, ...
// rather than going through `partial_cmp`.
macro_rules! ordering_operators {
    ($rhs:ty) => {
        fn lt(&self, other: &$rhs) -> bool {
            self.relate(Less, other)
        }
        fn le(&self, other: &$rhs) -> bool {
            self.relate(LessOrEqual, other)
        }
        fn gt(&self, other: &$rhs) -> bool {
            self.relate(Greater, other)
        }
        fn ge(&self, other: &$rhs) -> bool {
            self.relate(GreaterOrEqual, other)
        }
    };
}

impl<T, E, U> PartialEq<Success<U>> for Result<T, E>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Success<U>) -> bool {
        self.relate(Equal, other)
    }

    inequality_operator!(Success<U>);
}

impl<T, E, U> PartialOrd<Success<U>> for Result<T, E>
where
    T: PartialOrd<U>,
{
    fn partial_cmp(&self, other: &Success<U>) -> Option<Ordering> {
        self.storage.success()?.partial_cmp(&other.0)
    }

    ordering_operators!(Success<U>);
}

impl<T, E, U> PartialEq<Failure<U>> for Result<T, E>
where
    E: PartialEq<U>,
{
    fn eq(&self, other: &Failure<U>) -> bool {
        self.relate(Equal, other)
    }

    inequality_operator!(Failure<U>);
}

impl<T, E, U> PartialOrd<Failure<U>> for Result<T, E>
where
    E: PartialOrd<U>,
{
    fn partial_cmp(&self, other: &Failure<U>) -> Option<Ordering> {
        self.storage.failure()?.partial_cmp(&other.0)
    }

    ordering_operators!(Failure<U>);
}

impl<T, E, F, G> PartialEq<Result<F, G>> for Result<T, E>
where
    T: PartialEq<F>,
    E: PartialEq<G>,
{
    fn eq(&self, other: &Result<F, G>) -> bool {
        self.relate(Equal, other)
    }

    inequality_operator!(Result<F, G>);
}

impl<T: Eq, E: Eq> Eq for Result<T, E> {}

impl<T, E, F, G> PartialOrd<Result<F, G>> for Result<T, E>
where
    T: PartialOrd<F>,
    E: PartialOrd<G>,
{
    fn partial_cmp(&self, other: &Result<F, G>) -> Option<Ordering> {
        match (&self.storage, &other.storage) {
            (Storage::Success(t), Storage::Success(f)) => t.partial_cmp(f),
            (Storage::Failure(e), Storage::Failure(g)) => e.partial_cmp(g),
            _ => None,
        }
    }

    ordering_operators!(Result<F, G>);
}

impl<T, E, F, G> PartialEq<ByOk<F, G>> for ByOk<T, E>
where
    T: PartialEq<F>,
{
    fn eq(&self, other: &ByOk<F, G>) -> bool {
        self.relate(Equal, other)
    }

    inequality_operator!(ByOk<F, G>);
}

impl<T, E, F, G> PartialEq<ByErr<F, G>> for ByErr<T, E>
where
    E: PartialEq<G>,
{
    fn eq(&self, other: &ByErr<F, G>) -> bool {
        self.relate(Equal, other)
    }

    inequality_operator!(ByErr<F, G>);
}
