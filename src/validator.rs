//! The built validator value.

use std::fmt;
use std::fmt::Display;

use crate::contract::{default_failure_message, Validate};
use crate::error::Error;

pub(crate) type PredicateFn<T, A> =
    Box<dyn Fn(&T, &A) -> Result<bool, Error> + Send + Sync + 'static>;
pub(crate) type MessageFn<T, A> = Box<dyn Fn(&T, &A) -> String + Send + Sync + 'static>;
pub(crate) type RescueFn<T, A> =
    Box<dyn Fn(Error, &T, &A) -> Result<(), Error> + Send + Sync + 'static>;

/// An immutable validator produced by
/// [`define_validator`](crate::define_validator).
///
/// Holds the three behavior fragments registered during construction and
/// implements [`Validate`] by binding them into `validate`,
/// `failure_message` and `handle_error`. Any fragment that was not supplied
/// falls back to the contract default. `ensure` and `is_valid` are always
/// the derived contract formulas; they cannot be overridden.
///
/// A `Validator` is never mutated after construction, so sharing it across
/// concurrent callers by reference is safe (it is `Send + Sync` because
/// every fragment is).
///
/// # Example
///
/// ```rust
/// use rite::{define_validator, Validate};
///
/// let shorter_than = define_validator(|v| {
///     v.validate(|value: &str, max: &usize| value.len() < *max)
///         .message_with(|value, max| format!("{} is {} chars or longer", value, max));
/// });
///
/// assert_eq!(shorter_than.is_valid("abc", &10).unwrap(), true);
/// assert_eq!(shorter_than.is_valid("abcdef", &3).unwrap(), false);
/// assert_eq!(
///     shorter_than.failure_message("abcdef", &3),
///     "abcdef is 3 chars or longer"
/// );
/// ```
pub struct Validator<T: ?Sized, A: ?Sized = ()> {
    pub(crate) predicate: Option<PredicateFn<T, A>>,
    pub(crate) message: Option<MessageFn<T, A>>,
    pub(crate) rescue: Option<RescueFn<T, A>>,
}

impl<T: ?Sized, A: ?Sized> Validate<T, A> for Validator<T, A> {
    fn validate(&self, value: &T, args: &A) -> Result<bool, Error> {
        match &self.predicate {
            Some(predicate) => predicate(value, args),
            None => Err(Error::NotImplemented),
        }
    }

    fn failure_message(&self, value: &T, args: &A) -> String
    where
        T: Display,
    {
        match &self.message {
            Some(message) => message(value, args),
            None => default_failure_message(value),
        }
    }

    fn handle_error(&self, error: Error, value: &T, args: &A) -> Result<(), Error> {
        match &self.rescue {
            Some(rescue) => rescue(error, value, args),
            None => Err(error),
        }
    }
}

impl<T: ?Sized, A: ?Sized> fmt::Debug for Validator<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("predicate", &self.predicate.as_ref().map(|_| ".."))
            .field("message", &self.message.as_ref().map(|_| ".."))
            .field("rescue", &self.rescue.as_ref().map(|_| ".."))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::define_validator;

    fn positive() -> Validator<i32> {
        define_validator(|v| {
            v.validate(|value: &i32, _: &()| *value > 0);
        })
    }

    #[test]
    fn test_registered_predicate_drives_all_operations() {
        let validator = positive();

        assert_eq!(validator.validate(&5, &()).unwrap(), true);
        assert_eq!(validator.validate(&-5, &()).unwrap(), false);
        assert!(validator.ensure(&5, &()).is_ok());
        assert!(validator.ensure(&-5, &()).is_err());
        assert_eq!(validator.is_valid(&5, &()).unwrap(), true);
        assert_eq!(validator.is_valid(&-5, &()).unwrap(), false);
    }

    #[test]
    fn test_missing_message_falls_back_to_contract_default() {
        let validator = positive();
        assert_eq!(
            validator.failure_message(&-5, &()),
            "\"-5\" failed validation"
        );
    }

    #[test]
    fn test_unconfigured_validator_behaves_like_the_base_contract() {
        let empty: Validator<i32> = define_validator(|_| {});

        assert!(matches!(empty.validate(&1, &()), Err(Error::NotImplemented)));
        assert!(matches!(empty.is_valid(&1, &()), Err(Error::NotImplemented)));
    }

    #[test]
    fn test_validator_is_send_and_sync() {
        fn assert_shareable<V: Send + Sync>(_: &V) {}
        let validator = positive();
        assert_shareable(&validator);
    }

    #[test]
    fn test_debug_shows_installed_fragments() {
        let validator = positive();
        let rendered = format!("{:?}", validator);
        assert!(rendered.contains("predicate: Some"));
        assert!(rendered.contains("message: None"));
    }
}
