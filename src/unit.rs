//! The absent payload.

use core::{cmp::Ordering, fmt};

use zeroize::Zeroize;

/// Zero-sized stand-in for a payload slot that carries nothing.
///
/// `Result<Unit, E>` is a fallible computation without a value on success,
/// `Result<T, Unit>` one that fails without saying why. Since `Unit` occupies
/// no storage, neither case pays for the empty slot.
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Zeroize)]
pub struct Unit;

impl Unit {
    /// The one and only value.
    pub const VALUE: Unit = Unit;
}

impl fmt::Debug for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("()")
    }
}

impl From<()> for Unit {
    fn from(_: ()) -> Self {
        Unit
    }
}

impl From<Unit> for () {
    fn from(_: Unit) -> Self {}
}

// `Unit` and `()` are the same nothing, whichever side they are on.
impl PartialEq<()> for Unit {
    fn eq(&self, _: &()) -> bool {
        true
    }
}

impl PartialEq<Unit> for () {
    fn eq(&self, _: &Unit) -> bool {
        true
    }
}

impl PartialOrd<()> for Unit {
    fn partial_cmp(&self, _: &()) -> Option<Ordering> {
        Some(Ordering::Equal)
    }
}

impl PartialOrd<Unit> for () {
    fn partial_cmp(&self, _: &Unit) -> Option<Ordering> {
        Some(Ordering::Equal)
    }
}

#[cfg(feature = "ct-maybe")]
impl subtle::ConstantTimeEq for Unit {
    fn ct_eq(&self, _: &Self) -> subtle::Choice {
        subtle::Choice::from(1)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zero_sized() {
        assert_eq!(core::mem::size_of::<Unit>(), 0);
        assert_eq!(core::mem::size_of::<[Unit; 64]>(), 0);
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Unit), "()");
    }

    #[test]
    fn conversions() {
        let unit: Unit = ().into();
        assert_eq!(unit, Unit::VALUE);
        let () = unit.into();
    }

    #[test]
    fn alike_with_unit_tuple() {
        assert!(Unit == ());
        assert!(() == Unit);
        assert!(!(Unit != ()));
        assert!(Unit <= () && () >= Unit && !(Unit < ()));
    }
}
