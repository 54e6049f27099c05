//! Declarative construction of validators.
//!
//! [`define_validator`] hands the caller's configuration function a
//! [`ValidatorBuilder`] by mutable reference. The builder collects the
//! three behavior fragments (predicate, failure message, rescue strategy),
//! then is consumed exactly once into an immutable
//! [`Validator`](crate::Validator).
//!
//! Each fragment's shape is enforced by its declaration method's signature:
//! a predicate that does not take the value as its first parameter cannot
//! be written, so a malformed definition fails at compile time rather than
//! at validation time.
//!
//! # Example
//!
//! ```rust
//! use rite::{define_validator, Validate};
//!
//! let at_least = define_validator(|v| {
//!     v.validate(|value: &i32, min: &i32| value >= min)
//!         .message_with(|value, min| format!("{} expected to be at least {}", value, min));
//! });
//!
//! assert_eq!(at_least.validate(&21, &18).unwrap(), true);
//! assert_eq!(at_least.validate(&15, &18).unwrap(), false);
//! assert_eq!(at_least.failure_message(&15, &18), "15 expected to be at least 18");
//! ```

use std::fmt::Display;

use crate::error::Error;
use crate::rescue::Rescue;
use crate::validator::{MessageFn, PredicateFn, RescueFn, Validator};

/// Collects the behavior fragments of a validator under construction.
///
/// Created fresh per [`define_validator`] call and discarded once the
/// validator is built. Re-declaring a fragment replaces the previous
/// registration.
pub struct ValidatorBuilder<T: ?Sized, A: ?Sized = ()> {
    predicate: Option<PredicateFn<T, A>>,
    message: Option<MessageFn<T, A>>,
    rescue: Option<RescueFn<T, A>>,
}

impl<T: ?Sized, A: ?Sized> ValidatorBuilder<T, A> {
    fn new() -> Self {
        Self {
            predicate: None,
            message: None,
            rescue: None,
        }
    }

    /// Register the predicate deciding whether a value passes.
    ///
    /// For predicates that can themselves fail, use
    /// [`try_validate`](Self::try_validate).
    pub fn validate<F>(&mut self, predicate: F) -> &mut Self
    where
        F: Fn(&T, &A) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Box::new(move |value, args| Ok(predicate(value, args))));
        self
    }

    /// Register a fallible predicate.
    ///
    /// Errors on its `Err` channel propagate verbatim through `validate`
    /// and `ensure`, and are routed through the rescue strategy by
    /// `is_valid`. Use [`Error::predicate`] to carry an arbitrary
    /// underlying error.
    pub fn try_validate<F>(&mut self, predicate: F) -> &mut Self
    where
        F: Fn(&T, &A) -> Result<bool, Error> + Send + Sync + 'static,
    {
        self.predicate = Some(Box::new(predicate));
        self
    }

    /// Register a literal failure-message template.
    ///
    /// Every occurrence of the `%value` token is replaced with the value's
    /// Display form; extra arguments are ignored. The substitution is
    /// literal text replacement, not a templating language.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rite::{define_validator, Validate};
    ///
    /// let named = define_validator(|v| {
    ///     v.validate(|value: &str, _: &()| !value.is_empty())
    ///         .message("%value is bad");
    /// });
    ///
    /// assert_eq!(named.failure_message("x", &()), "x is bad");
    /// ```
    pub fn message(&mut self, template: impl Into<String>) -> &mut Self
    where
        T: Display,
    {
        let template = template.into();
        self.message = Some(Box::new(move |value, _args| {
            template.replace("%value", &value.to_string())
        }));
        self
    }

    /// Register a failure-message generator function.
    pub fn message_with<F>(&mut self, message: F) -> &mut Self
    where
        F: Fn(&T, &A) -> String + Send + Sync + 'static,
    {
        self.message = Some(Box::new(message));
        self
    }

    /// Register a named rescue strategy.
    pub fn rescue_with(&mut self, strategy: Rescue) -> &mut Self {
        self.rescue = Some(Box::new(move |error, _value, _args| strategy.apply(error)));
        self
    }

    /// Register a custom error handler.
    ///
    /// The handler receives the error raised by the predicate together
    /// with the value and arguments under validation. Returning `Ok(())`
    /// swallows the error; returning `Err` rethrows it.
    pub fn rescue_with_fn<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(Error, &T, &A) -> Result<(), Error> + Send + Sync + 'static,
    {
        self.rescue = Some(Box::new(handler));
        self
    }

    fn build(self) -> Validator<T, A> {
        Validator {
            predicate: self.predicate,
            message: self.message,
            rescue: self.rescue,
        }
    }
}

impl<T: ?Sized, A: ?Sized> std::fmt::Debug for ValidatorBuilder<T, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorBuilder")
            .field("predicate", &self.predicate.as_ref().map(|_| ".."))
            .field("message", &self.message.as_ref().map(|_| ".."))
            .field("rescue", &self.rescue.as_ref().map(|_| ".."))
            .finish()
    }
}

/// Build a validator by declaring its behavior fragments.
///
/// `build` is invoked exactly once, synchronously, with a fresh
/// [`ValidatorBuilder`]; the populated definition is consumed into an
/// immutable [`Validator`]. Behaviors that were not declared fall back to
/// the contract defaults described on [`Validate`](crate::Validate).
///
/// # Example
///
/// ```rust
/// use rite::{define_validator, Validate};
///
/// let non_blank = define_validator(|v| {
///     v.validate(|value: &String, _: &()| !value.trim().is_empty())
///         .message("%value must not be blank");
/// });
///
/// assert!(non_blank.ensure(&"hello".to_string(), &()).is_ok());
/// let err = non_blank.ensure(&"".to_string(), &()).unwrap_err();
/// assert_eq!(err.to_string(), " must not be blank");
/// ```
pub fn define_validator<T, A, F>(build: F) -> Validator<T, A>
where
    T: ?Sized,
    A: ?Sized,
    F: FnOnce(&mut ValidatorBuilder<T, A>),
{
    let mut definition = ValidatorBuilder::new();
    build(&mut definition);
    definition.build()
}
