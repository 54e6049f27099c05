//! The validator contract: five operations every validator supports.
//!
//! [`Validate`] is polymorphic over the capability set, not a class
//! hierarchy - any type implementing it with the contracted signatures
//! qualifies as a validator. All five operations have default bodies, so
//! the defaults *are* the base contract: an empty impl on a unit struct
//! behaves exactly like an unconfigured validator.
//!
//! Two of the operations are derived, not declared. [`Validate::ensure`]
//! and [`Validate::is_valid`] are always expressed in terms of the other
//! three; built validators never override them.
//!
//! # Example
//!
//! ```rust
//! use rite::{Error, Validate};
//!
//! struct Bare;
//!
//! impl Validate<str> for Bare {}
//!
//! // The base contract is a template, not a usable validator.
//! assert!(matches!(Bare.validate("x", &()), Err(Error::NotImplemented)));
//! assert_eq!(Bare.failure_message("x", &()), "\"x\" failed validation");
//! ```

use std::fmt::Display;

use crate::error::{Error, ValidationError};

/// The five-operation validator contract.
///
/// `T` is the validated value type, `A` the type of any extra arguments
/// threaded through every operation (defaults to `()` for validators that
/// take none).
pub trait Validate<T: ?Sized, A: ?Sized = ()> {
    /// Decide whether `value` passes this validator's rule.
    ///
    /// A `false` outcome is local logic, not an error; the `Err` channel is
    /// reserved for exceptional conditions raised while evaluating the
    /// predicate. The default errs with [`Error::NotImplemented`].
    fn validate(&self, value: &T, args: &A) -> Result<bool, Error> {
        let _ = (value, args);
        Err(Error::NotImplemented)
    }

    /// Render the failure message for `value`.
    ///
    /// The default wraps the value's natural string form in double quotes:
    /// `"<value>" failed validation`.
    fn failure_message(&self, value: &T, args: &A) -> String
    where
        T: Display,
    {
        let _ = args;
        default_failure_message(value)
    }

    /// React to an error raised while evaluating the predicate.
    ///
    /// Invoked by [`Validate::is_valid`] before anything escapes. Returning
    /// `Ok(())` swallows the error; returning `Err` rethrows it (possibly
    /// converted). The default rethrows unchanged - the no-op default is
    /// "do not swallow errors".
    fn handle_error(&self, error: Error, value: &T, args: &A) -> Result<(), Error> {
        let _ = (value, args);
        Err(error)
    }

    /// Validate `value`, erring with [`ValidationError`] on failure.
    ///
    /// Derived: calls [`Validate::validate`] and converts a `false` outcome
    /// into an error carrying [`Validate::failure_message`]. Predicate
    /// errors propagate verbatim; nothing is caught here.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rite::{define_validator, Validate};
    ///
    /// let even = define_validator(|v| {
    ///     v.validate(|value: &i32, _: &()| value % 2 == 0)
    ///         .message("%value is odd");
    /// });
    ///
    /// assert!(even.ensure(&4, &()).is_ok());
    /// assert_eq!(even.ensure(&5, &()).unwrap_err().to_string(), "5 is odd");
    /// ```
    fn ensure(&self, value: &T, args: &A) -> Result<(), Error>
    where
        T: Display,
    {
        if self.validate(value, args)? {
            Ok(())
        } else {
            let message = self.failure_message(value, args);
            #[cfg(feature = "tracing")]
            tracing::debug!(%message, "value failed validation");
            Err(ValidationError::new(message).into())
        }
    }

    /// Validate `value`, reporting errors through the rescue strategy.
    ///
    /// Derived: when the predicate completes normally the result is exactly
    /// [`Validate::validate`]'s outcome. When it errs, the error is routed
    /// through [`Validate::handle_error`] first - if the handler swallows
    /// it the result is `Ok(false)`, otherwise whatever the handler
    /// rethrows propagates. This is the only operation guaranteed never to
    /// let a predicate error escape unhandled.
    fn is_valid(&self, value: &T, args: &A) -> Result<bool, Error> {
        match self.validate(value, args) {
            Ok(outcome) => Ok(outcome),
            Err(error) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %error, "predicate raised, applying rescue strategy");
                self.handle_error(error, value, args)?;
                Ok(false)
            }
        }
    }
}

/// The contract's fallback failure message: the value's Display form
/// wrapped in double quotes.
pub(crate) fn default_failure_message<T: Display + ?Sized>(value: &T) -> String {
    format!("\"{}\" failed validation", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare;

    impl<T: ?Sized, A: ?Sized> Validate<T, A> for Bare {}

    struct Custom;

    impl std::fmt::Display for Custom {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "<Custom>")
        }
    }

    #[test]
    fn test_base_validate_is_not_implemented() {
        assert!(matches!(
            Bare.validate("anything", &()),
            Err(Error::NotImplemented)
        ));
    }

    #[test]
    fn test_base_ensure_propagates_not_implemented() {
        assert!(matches!(Bare.ensure("x", &()), Err(Error::NotImplemented)));
    }

    #[test]
    fn test_base_is_valid_propagates_through_default_handler() {
        // The default handler rethrows, so the not-implemented signal
        // escapes is_valid too.
        assert!(matches!(
            Bare.is_valid("x", &()),
            Err(Error::NotImplemented)
        ));
    }

    #[test]
    fn test_default_failure_message_quotes_strings() {
        assert_eq!(Bare.failure_message("x", &()), "\"x\" failed validation");
    }

    #[test]
    fn test_default_failure_message_uses_display_form() {
        assert_eq!(Bare.failure_message(&1001, &()), "\"1001\" failed validation");
        assert_eq!(
            Bare.failure_message(&10.01, &()),
            "\"10.01\" failed validation"
        );
        assert_eq!(
            Bare.failure_message(&Custom, &()),
            "\"<Custom>\" failed validation"
        );
    }

    #[test]
    fn test_default_handle_error_rethrows_unchanged() {
        let result = Bare.handle_error(Error::NotImplemented, "x", &());
        assert!(matches!(result, Err(Error::NotImplemented)));
    }
}

#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use tracing_test::traced_test;

    struct Bare;

    impl<T: ?Sized, A: ?Sized> Validate<T, A> for Bare {}

    #[traced_test]
    #[test]
    fn test_rescue_path_emits_debug_event() {
        let _ = Bare.is_valid("x", &());
        assert!(logs_contain("applying rescue strategy"));
    }
}
