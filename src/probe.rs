//! Capability probes for the six relational operators.
//!
//! Each operator is a zero-sized marker. `Op: Relation<L, R>` holds exactly
//! when the operator exists between `L` and `R`, so a comparison that needs
//! the capability is a trait bound, and a comparison between payloads that
//! lack it is not a `false` at runtime but a call that does not type-check.
//!
//! The equality markers ride on [`PartialEq`], the ordering markers on
//! [`PartialOrd`]; payload types opt in by implementing those.

mod sealed {
    pub trait Sealed {}
}

/// One of `==`, `!=`, `<`, `<=`, `>`, `>=`.
pub trait Operator: Copy + Default + sealed::Sealed {
    const SYMBOL: &'static str;
}

/// The operator `Self` exists between `L` and `R`.
pub trait Relation<L: ?Sized, R: ?Sized>: Operator {
    fn holds(self, lhs: &L, rhs: &R) -> bool;
}

macro_rules! operator {
    ($(#[$attr:meta])* $name:ident, $symbol:literal, $capability:ident, |$l:ident, $r:ident| $body:expr) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
        pub struct $name;

        impl sealed::Sealed for $name {}

        impl Operator for $name {
            const SYMBOL: &'static str = $symbol;
        }

        impl<L, R> Relation<L, R> for $name
        where
            L: ?Sized + $capability<R>,
            R: ?Sized,
        {
            #[inline]
            fn holds(self, $l: &L, $r: &R) -> bool {
                $body
            }
        }
    };
}

operator!(
    /// `==`
    Equal, "==", PartialEq, |lhs, rhs| lhs == rhs
);
operator!(
    /// `!=`
    NotEqual, "!=", PartialEq, |lhs, rhs| lhs != rhs
);
operator!(
    /// `<`
    Less, "<", PartialOrd, |lhs, rhs| lhs < rhs
);
operator!(
    /// `<=`
    LessOrEqual, "<=", PartialOrd, |lhs, rhs| lhs <= rhs
);
operator!(
    /// `>`
    Greater, ">", PartialOrd, |lhs, rhs| lhs > rhs
);
operator!(
    /// `>=`
    GreaterOrEqual, ">=", PartialOrd, |lhs, rhs| lhs >= rhs
);

/// Free-standing form of [`Relation::holds`].
#[inline]
pub fn relates<Op, L, R>(op: Op, lhs: &L, rhs: &R) -> bool
where
    Op: Relation<L, R>,
    L: ?Sized,
    R: ?Sized,
{
    op.holds(lhs, rhs)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Unit;

    #[test]
    fn same_type() {
        assert!(relates(Equal, &2, &2));
        assert!(!relates(NotEqual, &2, &2));
        assert!(relates(Less, &1, &2));
        assert!(relates(LessOrEqual, &2, &2));
        assert!(!relates(Greater, &1, &2));
        assert!(relates(GreaterOrEqual, &3, &2));
    }

    #[test]
    fn mixed_types() {
        // `str: PartialEq<String>` and friends
        let owned = String::from("sigil");
        assert!(relates(Equal, "sigil", &owned));
        assert!(relates(Less, &owned[..], "zebra"));
    }

    #[test]
    fn unordered_floats() {
        let nan = f64::NAN;
        assert!(!relates(Equal, &nan, &nan));
        assert!(relates(NotEqual, &nan, &nan));
        assert!(!relates(Less, &nan, &1.0));
        assert!(!relates(GreaterOrEqual, &nan, &1.0));
    }

    #[test]
    fn units_are_all_alike() {
        assert!(relates(Equal, &Unit, &Unit));
        assert!(relates(LessOrEqual, &Unit, &Unit));
        assert!(!relates(Less, &Unit, &Unit));
    }

    #[test]
    fn symbols() {
        assert_eq!(Equal::SYMBOL, "==");
        assert_eq!(GreaterOrEqual::SYMBOL, ">=");
    }
}
