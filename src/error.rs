//! Error types for contract violations and captured panics.
//!
//! This module provides the two failure values the crate hands out:
//!
//! - [`InvalidState`]: a programmer-contract violation, such as extracting a value
//!   from `None` or aggregating an empty sequence without a seed. The `*_state`
//!   extractors raise it as a panic payload, and the `try_*` folds return it as data.
//! - [`PanicError`]: a panic captured by [`try_catch`](crate::result::try_catch).

use std::any::Any;
use std::borrow::Cow;
use std::fmt;

use static_assertions::assert_impl_all;

/// A programmer-contract violation carrying a diagnostic message.
///
/// Raised through [`std::panic::panic_any`], so a caller can capture exactly these
/// failures with [`try_catch_as`](crate::result::try_catch_as):
///
/// ```rust
/// use optres::error::InvalidState;
/// use optres::option::OptionExt;
/// use optres::result::try_catch_as;
///
/// let caught = try_catch_as::<InvalidState, _, _>(|| None::<i32>.unwrap_state());
/// assert_eq!(
///     caught.unwrap_err().message(),
///     "called `Option::unwrap_state()` on a `None` value"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InvalidState {
    message: Cow<'static, str>,
}

impl InvalidState {
    /// Creates an `InvalidState` with the given message.
    #[inline]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The error raised when a seedless aggregate meets an empty sequence.
    #[must_use]
    pub const fn empty_sequence() -> Self {
        Self {
            message: Cow::Borrowed("sequence contains no elements"),
        }
    }

    /// Returns the diagnostic message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Panics with `self` as the payload.
    ///
    /// # Panics
    ///
    /// Always.
    #[track_caller]
    pub fn raise(self) -> ! {
        std::panic::panic_any(self)
    }
}

impl fmt::Display for InvalidState {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "invalid state: {}", self.message)
    }
}

impl std::error::Error for InvalidState {}

/// A panic captured while running a computation.
///
/// Holds the original payload so it can be inspected, downcast, or re-raised.
pub struct PanicError {
    payload: Box<dyn Any + Send>,
}

impl PanicError {
    /// Wraps a payload obtained from `catch_unwind`.
    #[inline]
    pub fn new(payload: Box<dyn Any + Send>) -> Self {
        Self { payload }
    }

    /// Returns the panic message when the payload is a string or an [`InvalidState`].
    pub fn message(&self) -> Option<&str> {
        if let Some(message) = self.payload.downcast_ref::<&'static str>() {
            Some(message)
        } else if let Some(message) = self.payload.downcast_ref::<String>() {
            Some(message.as_str())
        } else {
            self.payload
                .downcast_ref::<InvalidState>()
                .map(InvalidState::message)
        }
    }

    /// Returns `true` if the payload is of type `P`.
    #[inline]
    pub fn is<P: Any>(&self) -> bool {
        self.payload.is::<P>()
    }

    /// Returns a reference to the payload if it is of type `P`.
    #[inline]
    pub fn downcast_ref<P: Any>(&self) -> Option<&P> {
        self.payload.downcast_ref::<P>()
    }

    /// Consumes the error and returns the raw payload.
    #[inline]
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }

    /// Re-raises the captured panic.
    pub fn resume(self) -> ! {
        std::panic::resume_unwind(self.payload)
    }
}

impl fmt::Debug for PanicError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("PanicError")
            .field("message", &self.message())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for PanicError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(formatter, "panicked: {message}"),
            None => formatter.write_str("panicked with a non-string payload"),
        }
    }
}

impl std::error::Error for PanicError {}

assert_impl_all!(InvalidState: Send, Sync, std::error::Error);
assert_impl_all!(PanicError: Send, std::error::Error);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[rstest]
    fn test_invalid_state_display() {
        let error = InvalidState::new("called on None");
        assert_eq!(format!("{error}"), "invalid state: called on None");
    }

    #[rstest]
    fn test_invalid_state_owned_message() {
        let error = InvalidState::new(format!("value {}", 3));
        assert_eq!(error.message(), "value 3");
    }

    #[rstest]
    fn test_empty_sequence_message() {
        assert_eq!(
            InvalidState::empty_sequence().message(),
            "sequence contains no elements"
        );
    }

    #[rstest]
    fn test_invalid_state_raise_carries_payload() {
        let payload = catch_unwind(|| -> i32 { InvalidState::new("boom").raise() }).unwrap_err();
        assert_eq!(
            payload.downcast_ref::<InvalidState>(),
            Some(&InvalidState::new("boom"))
        );
    }

    #[rstest]
    #[case(Box::new("static") as Box<dyn Any + Send>, Some("static"))]
    #[case(Box::new(String::from("owned")) as Box<dyn Any + Send>, Some("owned"))]
    #[case(Box::new(InvalidState::new("state")) as Box<dyn Any + Send>, Some("state"))]
    #[case(Box::new(42_u8) as Box<dyn Any + Send>, None)]
    fn test_panic_error_message(
        #[case] payload: Box<dyn Any + Send>,
        #[case] expected: Option<&str>,
    ) {
        let error = PanicError::new(payload);
        assert_eq!(error.message(), expected);
    }

    #[rstest]
    fn test_panic_error_display() {
        let error = PanicError::new(Box::new("oops"));
        assert_eq!(format!("{error}"), "panicked: oops");

        let opaque = PanicError::new(Box::new(7_i32));
        assert_eq!(format!("{opaque}"), "panicked with a non-string payload");
    }

    #[rstest]
    fn test_panic_error_downcast() {
        let error = PanicError::new(Box::new(7_i32));
        assert!(error.is::<i32>());
        assert_eq!(error.downcast_ref::<i32>(), Some(&7));
        assert!(error.downcast_ref::<String>().is_none());
    }

    #[rstest]
    fn test_panic_error_resume_reraises() {
        let error = PanicError::new(Box::new(9_u32));
        let payload = catch_unwind(AssertUnwindSafe(|| -> u32 { error.resume() })).unwrap_err();
        assert_eq!(payload.downcast_ref::<u32>(), Some(&9));
    }

    #[rstest]
    fn test_errors_are_std_errors() {
        use std::error::Error;

        let state = InvalidState::new("x");
        assert!(state.source().is_none());
        let _: &dyn Error = &PanicError::new(Box::new("x"));
    }
}
