//! # Rite
//!
//! Build reusable, named validators from three cooperating behavior
//! fragments: a predicate, a failure-message generator, and a rescue
//! strategy.
//!
//! ## Philosophy
//!
//! Rather than writing a new type by hand for every validation rule, you
//! declare the rule's behavior through a small builder surface and receive
//! back a ready-to-use [`Validator`]. The validator implements the
//! five-operation [`Validate`] contract:
//!
//! - [`validate`](Validate::validate) - does the value pass?
//! - [`ensure`](Validate::ensure) - like `validate`, but a failing value
//!   is an [`Error::Validation`]
//! - [`is_valid`](Validate::is_valid) - like `validate`, but predicate
//!   errors are routed through the rescue strategy
//! - [`failure_message`](Validate::failure_message) - render the failure
//!   text for a value
//! - [`handle_error`](Validate::handle_error) - apply the rescue strategy
//!   directly
//!
//! Anything you do not declare falls back to a documented contract
//! default. `ensure` and `is_valid` are derived from the other three and
//! cannot be declared.
//!
//! ## Quick Example
//!
//! ```rust
//! use rite::{define_validator, Validate};
//!
//! let adult = define_validator(|v| {
//!     v.validate(|age: &u32, _: &()| *age >= 18)
//!         .message("%value is under 18");
//! });
//!
//! assert_eq!(adult.is_valid(&25, &()).unwrap(), true);
//! assert_eq!(adult.is_valid(&12, &()).unwrap(), false);
//! assert_eq!(adult.failure_message(&12, &()), "12 is under 18");
//!
//! // ensure turns a failing value into an error
//! assert!(adult.ensure(&12, &()).is_err());
//! ```
//!
//! Validators can thread extra arguments through every operation by
//! picking a concrete argument type:
//!
//! ```rust
//! use rite::{define_validator, Validate};
//!
//! let within = define_validator(|v| {
//!     v.validate(|value: &i32, range: &(i32, i32)| (range.0..=range.1).contains(value))
//!         .message_with(|value, range| {
//!             format!("{} is outside {}..={}", value, range.0, range.1)
//!         });
//! });
//!
//! assert_eq!(within.is_valid(&5, &(0, 10)).unwrap(), true);
//! assert_eq!(within.failure_message(&42, &(0, 10)), "42 is outside 0..=10");
//! ```
//!
//! Errors raised while evaluating the predicate are governed by the
//! [`Rescue`] strategy; see the [`rescue`] module for the policies.
//!
//! This is not a schema language: there are no combinators, no cross-field
//! rules, and no coercion - just the minimal mechanism for building one
//! named validator from three functions.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod builder;
pub mod contract;
pub mod error;
pub mod rescue;
pub mod validator;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use builder::{define_validator, ValidatorBuilder};
pub use contract::Validate;
pub use error::{BoxError, DslError, Error, ValidationError};
pub use rescue::Rescue;
pub use validator::Validator;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::builder::{define_validator, ValidatorBuilder};
    pub use crate::contract::Validate;
    pub use crate::error::{BoxError, DslError, Error, ValidationError};
    pub use crate::rescue::Rescue;
    pub use crate::validator::Validator;
}
