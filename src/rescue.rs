//! Named rescue strategies for predicate evaluation errors.
//!
//! A rescue strategy is the policy governing how `is_valid` reacts to an
//! error raised while evaluating the predicate. The three named strategies
//! form a closed enumeration mapped to fixed handler behaviors; a custom
//! handler function can be registered instead via
//! [`ValidatorBuilder::rescue_with_fn`](crate::ValidatorBuilder::rescue_with_fn).
//!
//! # Example
//!
//! ```rust
//! use rite::{define_validator, Error, Rescue, Validate};
//!
//! let checked = define_validator(|v| {
//!     v.try_validate(|value: &str, _: &()| {
//!         value
//!             .parse::<i32>()
//!             .map(|n| n > 0)
//!             .map_err(Error::predicate)
//!     })
//!     .rescue_with(Rescue::Ignoring);
//! });
//!
//! // The parse error is swallowed; the value simply does not validate.
//! assert_eq!(checked.is_valid("not a number", &()).unwrap(), false);
//! assert_eq!(checked.is_valid("42", &()).unwrap(), true);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{DslError, Error, ValidationError};

/// How `is_valid` reacts to an error raised while evaluating the predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rescue {
    /// Rethrow the error unchanged. Equivalent to the contract default.
    Reraising,
    /// Swallow the error: `is_valid` reports `false` and nothing escapes.
    Ignoring,
    /// Rethrow as a [`ValidationError`] whose message embeds the original
    /// error's kind and message text.
    Wrapping,
}

impl Rescue {
    /// The named strategies, in declaration order.
    pub const ALL: [Rescue; 3] = [Rescue::Reraising, Rescue::Ignoring, Rescue::Wrapping];

    /// The strategy's lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Rescue::Reraising => "reraising",
            Rescue::Ignoring => "ignoring",
            Rescue::Wrapping => "wrapping",
        }
    }

    /// Apply this strategy to an error raised by the predicate.
    pub(crate) fn apply(self, error: Error) -> Result<(), Error> {
        match self {
            Rescue::Reraising => Err(error),
            Rescue::Ignoring => Ok(()),
            Rescue::Wrapping => {
                Err(ValidationError::new(format!("{}: {}", error.kind(), error)).into())
            }
        }
    }
}

impl fmt::Display for Rescue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a strategy name. An unrecognized name is a definition error, not
/// a silent no-op.
///
/// # Example
///
/// ```rust
/// use rite::Rescue;
///
/// assert_eq!("wrapping".parse::<Rescue>().unwrap(), Rescue::Wrapping);
/// assert!("retrying".parse::<Rescue>().is_err());
/// ```
impl FromStr for Rescue {
    type Err = DslError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reraising" => Ok(Rescue::Reraising),
            "ignoring" => Ok(Rescue::Ignoring),
            "wrapping" => Ok(Rescue::Wrapping),
            other => Err(DslError::unknown_strategy(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reraising_rethrows_unchanged() {
        let result = Rescue::Reraising.apply(Error::NotImplemented);
        assert!(matches!(result, Err(Error::NotImplemented)));
    }

    #[test]
    fn test_ignoring_swallows() {
        assert!(Rescue::Ignoring.apply(Error::NotImplemented).is_ok());
    }

    #[test]
    fn test_wrapping_converts_to_validation_error() {
        let underlying: Error = ValidationError::new("inner detail").into();
        let result = Rescue::Wrapping.apply(underlying);

        match result {
            Err(Error::Validation(e)) => {
                assert_eq!(e.message(), "ValidationError: inner detail");
            }
            other => panic!("expected a wrapped validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_names_parse_back() {
        for strategy in Rescue::ALL {
            assert_eq!(strategy.name().parse::<Rescue>().unwrap(), strategy);
            assert_eq!(strategy.to_string(), strategy.name());
        }
    }

    #[test]
    fn test_unknown_name_is_a_dsl_error() {
        let err = "swallowing".parse::<Rescue>().unwrap_err();
        assert_eq!(err.to_string(), "unknown rescue strategy `swallowing`");
    }
}
