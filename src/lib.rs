#![cfg_attr(not(test), no_std)]
//! A two-variant sum type, success or failure, with a combinator algebra.
//!
//! ```
//! use sumtype::{ok, err, Result, Unit};
//!
//! fn checked_div(a: u32, b: u32) -> Result<u32, &'static str> {
//!     if b == 0 { err!("division by zero").into() } else { ok!(a / b).into() }
//! }
//!
//! let r = checked_div(12, 4)
//!     .map(|q: u32| q + 1)
//!     .and_then(|q: u32| checked_div(q, 2));
//! assert_eq!(r.unwrap(), 2);
//!
//! let r = checked_div(1, 0).map_err(|| Unit);
//! assert!(r.is_err());
//! ```
//!
//! All four payload shapes are first class: a slot without payload is a
//! [`Unit`], which takes up no space. Transforms accept both zero- and
//! one-argument closures ([`resolve`]), and comparisons exist exactly where
//! the payloads are comparable ([`probe`]).

delog::generate_macros!();

mod error;
pub use error::{Checked, Error};
pub mod probe;
pub use probe::{Operator, Relation};
pub mod resolve;
pub use resolve::Transform;
mod result;
pub use result::{ByErr, ByOk, Comparand, Result};
mod storage;
pub use storage::Discriminant;
mod unit;
pub use unit::Unit;
mod wrapper;
pub use wrapper::{Failure, Success};
