//! Error types for validator definition and evaluation.
//!
//! Three kinds of failure are distinguished:
//!
//! - [`DslError`] - a validator *definition* was malformed. Surfaced
//!   synchronously while the definition is being declared, never later.
//! - [`ValidationError`] - a value failed validation, or an underlying
//!   error was deliberately wrapped by the `wrapping` rescue strategy.
//! - [`Error::Predicate`] - an arbitrary error raised inside a
//!   caller-supplied predicate. These are not wrapped by default; they
//!   propagate as-is unless a rescue strategy intercepts them.
//!
//! All three converge in the root [`Error`] enum, which is what the
//! contract operations return on their `Err` channel.

use std::fmt;

/// Boxed error type for failures raised inside caller-supplied fragments.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The root error type for all validator operations.
///
/// # Examples
///
/// ```rust
/// use rite::{define_validator, Error, Validate};
///
/// let positive = define_validator(|v| {
///     v.validate(|value: &i32, _: &()| *value > 0)
///         .message("%value must be positive");
/// });
///
/// match positive.ensure(&-3, &()) {
///     Err(Error::Validation(e)) => assert_eq!(e.message(), "-3 must be positive"),
///     other => panic!("expected a validation error, got {:?}", other),
/// }
/// ```
#[derive(Debug)]
pub enum Error {
    /// `validate` was called on a contract with no predicate installed.
    ///
    /// The base contract is a behavioral template, not a usable validator.
    NotImplemented,
    /// A value failed validation, or an underlying error was wrapped by a
    /// rescue strategy.
    Validation(ValidationError),
    /// A validator definition was malformed.
    Dsl(DslError),
    /// An error raised inside a caller-supplied predicate, propagated as-is.
    Predicate {
        /// Type name of the underlying error, captured at construction.
        kind: &'static str,
        /// The underlying error.
        source: BoxError,
    },
}

impl Error {
    /// Wrap an error raised inside a caller-supplied predicate.
    ///
    /// The concrete error type's name is captured so that the `wrapping`
    /// rescue strategy can embed it in its message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rite::Error;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    /// let err = Error::predicate(io);
    /// assert!(err.kind().contains("io"));
    /// assert_eq!(err.to_string(), "missing");
    /// ```
    pub fn predicate<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Predicate {
            kind: std::any::type_name::<E>(),
            source: Box::new(source),
        }
    }

    /// The name of this error's kind.
    ///
    /// For predicate errors this is the underlying error's type name; for
    /// the crate's own errors it is the conventional class-style name used
    /// in wrapped messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::NotImplemented => "NotImplementedError",
            Error::Validation(_) => "ValidationError",
            Error::Dsl(_) => "DSLError",
            Error::Predicate { kind, .. } => kind,
        }
    }

    /// Returns true if this is a [`ValidationError`].
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Returns true if this is a [`DslError`].
    pub fn is_dsl(&self) -> bool {
        matches!(self, Error::Dsl(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotImplemented => write!(f, "validate is not implemented yet"),
            Error::Validation(e) => write!(f, "{}", e),
            Error::Dsl(e) => write!(f, "{}", e),
            Error::Predicate { source, .. } => write!(f, "{}", source),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::NotImplemented => None,
            Error::Validation(e) => Some(e),
            Error::Dsl(e) => Some(e),
            Error::Predicate { source, .. } => Some(source.as_ref()),
        }
    }
}

impl From<ValidationError> for Error {
    fn from(error: ValidationError) -> Self {
        Error::Validation(error)
    }
}

impl From<DslError> for Error {
    fn from(error: DslError) -> Self {
        Error::Dsl(error)
    }
}

/// A value failed validation.
///
/// Raised by `ensure` when the predicate reports `false`, and by the
/// `wrapping` rescue strategy when it converts an underlying error.
/// Carries the human-readable message produced by `failure_message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Create a validation error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// A validator definition was malformed.
///
/// Only produced while a definition is being declared, for example when an
/// unrecognized rescue-strategy name is parsed. Never raised by a built
/// validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DslError {
    message: String,
}

impl DslError {
    /// Create a definition error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Definition error for an unrecognized rescue-strategy name.
    pub fn unknown_strategy(name: &str) -> Self {
        Self::new(format!("unknown rescue strategy `{}`", name))
    }

    /// The definition error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for DslError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for DslError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Boom;

    impl fmt::Display for Boom {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "boom")
        }
    }

    impl std::error::Error for Boom {}

    #[test]
    fn test_not_implemented_display() {
        let err = Error::NotImplemented;
        assert_eq!(err.to_string(), "validate is not implemented yet");
        assert_eq!(err.kind(), "NotImplementedError");
    }

    #[test]
    fn test_validation_error_display_is_its_message() {
        let err = ValidationError::new("5 must be even");
        assert_eq!(err.to_string(), "5 must be even");
        assert_eq!(err.message(), "5 must be even");

        let root: Error = err.into();
        assert_eq!(root.to_string(), "5 must be even");
        assert_eq!(root.kind(), "ValidationError");
        assert!(root.is_validation());
    }

    #[test]
    fn test_dsl_error_unknown_strategy() {
        let err = DslError::unknown_strategy("retrying");
        assert_eq!(err.to_string(), "unknown rescue strategy `retrying`");

        let root: Error = err.into();
        assert_eq!(root.kind(), "DSLError");
        assert!(root.is_dsl());
    }

    #[test]
    fn test_predicate_error_captures_kind_and_source() {
        let err = Error::predicate(Boom);
        assert!(err.kind().ends_with("Boom"));
        assert_eq!(err.to_string(), "boom");

        use std::error::Error as _;
        let source = err.source().expect("predicate errors carry a source");
        assert_eq!(source.to_string(), "boom");
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error as _;

        let root: Error = ValidationError::new("bad").into();
        assert!(root.source().is_some());
        assert!(Error::NotImplemented.source().is_none());
    }
}
