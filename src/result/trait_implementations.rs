use core::fmt;

use zeroize::Zeroize;

use super::Result;
use crate::storage::Storage;
use crate::{Failure, Success};

impl<T, E> From<Success<T>> for Result<T, E> {
    fn from(success: Success<T>) -> Self {
        Self::success(success.0)
    }
}

impl<T, E> From<Failure<E>> for Result<T, E> {
    fn from(failure: Failure<E>) -> Self {
        Self::failure(failure.0)
    }
}

impl<T, E> From<core::result::Result<T, E>> for Result<T, E> {
    fn from(result: core::result::Result<T, E>) -> Self {
        match result {
            Ok(t) => Self::success(t),
            Err(e) => Self::failure(e),
        }
    }
}

impl<T, E> From<Result<T, E>> for core::result::Result<T, E> {
    fn from(result: Result<T, E>) -> Self {
        result.into_std()
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Result<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.storage {
            Storage::Success(t) => f.debug_tuple("Success").field(t).finish(),
            Storage::Failure(e) => f.debug_tuple("Failure").field(e).finish(),
        }
    }
}

/// Clears the active payload, the variant stays.
impl<T: Zeroize, E: Zeroize> Zeroize for Result<T, E> {
    fn zeroize(&mut self) {
        match &mut self.storage {
            Storage::Success(t) => t.zeroize(),
            Storage::Failure(e) => e.zeroize(),
        }
    }
}

/// Not constant time across variants, only within one.
#[cfg(feature = "ct-maybe")]
impl<T, E> subtle::ConstantTimeEq for Result<T, E>
where
    T: subtle::ConstantTimeEq,
    E: subtle::ConstantTimeEq,
{
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        match (&self.storage, &other.storage) {
            (Storage::Success(a), Storage::Success(b)) => a.ct_eq(b),
            (Storage::Failure(a), Storage::Failure(b)) => a.ct_eq(b),
            _ => subtle::Choice::from(0),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{err, ok, Unit};
    use hex_literal::hex;

    #[test]
    fn from_wrappers() {
        let r: Result<u8, Unit> = ok!(1).into();
        assert!(r == Success(1u8));
        let r: Result<u8, Unit> = err!().into();
        assert!(r == Failure(Unit));
    }

    #[test]
    fn std_interop() {
        let r: Result<u8, &str> = Ok(1).into();
        assert!(r.is_ok());
        let r: Result<u8, &str> = core::result::Result::Err("e").into();
        assert!(r.is_err());

        let back: core::result::Result<u8, &str> = r.into();
        assert_eq!(back, Err("e"));
    }

    #[test]
    fn debug() {
        let r: Result<u8, Unit> = Result::success(3);
        assert_eq!(format!("{:?}", r), "Success(3)");
        let r: Result<Unit, &str> = Result::failure("bad");
        assert_eq!(format!("{:?}", r), "Failure(\"bad\")");
    }

    #[test]
    fn clone_is_explicit_duplication() {
        let original: Result<Vec<u8>, Unit> = Result::success(vec![1, 2, 3]);
        let copy = original.clone();
        assert!(copy == original);
        assert_eq!(original.unwrap(), copy.unwrap());
    }

    #[test]
    fn zeroize_keeps_variant() {
        let mut key: Result<[u8; 8], [u8; 4]> = Result::success(hex!("0011223344556677"));
        key.zeroize();
        assert!(key.is_ok());
        assert!(key == Success([0u8; 8]));

        let mut tag: Result<[u8; 8], [u8; 4]> = Result::failure(hex!("deadbeef"));
        tag.zeroize();
        assert!(tag == Failure([0u8; 4]));
    }

    #[cfg(feature = "ct-maybe")]
    #[test]
    fn constant_time_eq() {
        use subtle::ConstantTimeEq;

        let a: Result<u32, u8> = Result::success(7);
        let b: Result<u32, u8> = Result::success(7);
        let c: Result<u32, u8> = Result::failure(7);
        assert!(bool::from(a.ct_eq(&b)));
        assert!(!bool::from(a.ct_eq(&c)));
    }
}
