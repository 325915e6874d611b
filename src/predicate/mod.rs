//! Boolean predicates for describing field formats
//!
//! Rules answer with a [`ValidationResult`](crate::ValidationResult); the
//! grammars underneath them (what an email looks like, how many digits a
//! phone number has, how old is old enough) are plain yes/no checks. This
//! module provides those checks as small composable values.
//!
//! # Example
//!
//! ```rust
//! use rulechain::predicate::*;
//!
//! let digits = all_chars(|c: char| c.is_ascii_digit()).and(len_between(7, 15));
//! assert!(digits.check("48535325"));
//! assert!(!digits.check("4853-5325"));
//!
//! let adult = ge(18u32);
//! assert!(adult.check(&18));
//! ```

mod combinators;
mod number;
mod string;

pub use combinators::{And, Predicate, PredicateExt};
pub use number::{ge, gt, Ge, Gt};
pub use string::{
    all_chars, any_char, len_between, not_empty, starts_with, AllChars, AnyChar, LenBetween,
    NotEmpty, StartsWith,
};
