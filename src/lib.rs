//! An arbitrary precision signed decimal number implementation written in
//! pure Rust, suitable for calculator style applications that need exact
//! results: no floating point drift and no overflow at any bit width.
//!
//! The [`Decimal`] type stores a sign and two sequences of base-10 digits
//! (integer part and fraction part) and performs negation, addition,
//! subtraction and multiplication digit by digit with manual carry and
//! borrow propagation. Values parse from and render to plain decimal
//! strings of the form `-?\d+(\.\d*)?` and always normalize to a canonical
//! form with no insignificant zeros and no negative zero.
//!
//! ```
//! use exact_decimal::Decimal;
//! use std::str::FromStr;
//!
//! let price = Decimal::from_str("0.1")?;
//! let tax = Decimal::from_str("0.2")?;
//! assert_eq!("0.3", (price + tax).to_string());
//!
//! let owed = Decimal::from_str("123.45")? + Decimal::from_str("-23.45")?;
//! assert_eq!("100", owed.to_string());
//! # Ok::<(), exact_decimal::Error>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decimal;
mod error;
mod ops;
mod str;

#[cfg(feature = "proptest")]
mod proptest;
#[cfg(feature = "serde")]
mod serde;

pub use crate::decimal::Decimal;
pub use crate::error::Error;

/// A convenience module appropriate for glob imports: `use exact_decimal::prelude::*;`
pub mod prelude {
    pub use crate::{Decimal, Error};
    pub use num_traits::{One, Zero};
}
