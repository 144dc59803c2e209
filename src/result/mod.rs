//! Extensions for [`Result`].
//!
//! std covers `map`, `map_err`, `and_then`, `or_else`, `flatten`, `transpose`,
//! `ok`, `err` and the rest of the two-sided surface. [`ResultExt`] adds:
//!
//! - [`tap`](ResultExt::tap) / [`tap_err`](ResultExt::tap_err): observe either side
//! - `*_state` extractors that fail with a typed [`InvalidState`] payload
//! - [`cmp_success`](ResultExt::cmp_success): success-first ordering where every
//!   `Err` sorts below every `Ok`
//! - [`to_vec`](ResultExt::to_vec): the zero-or-one element sequence
//!
//! Folding sequences lives in [`ResultIterExt`], and the panic bridge in
//! [`try_catch`] and its siblings.

mod catch;
mod iter;

#[cfg(feature = "async")]
pub use catch::{try_catch_async, try_catch_async_as};
pub use catch::{try_catch, try_catch_as};
pub use iter::ResultIterExt;

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::error::InvalidState;

/// Combinators on [`Result`] that std does not provide.
pub trait ResultExt<T, E>: Sized {
    /// Calls `function` with the success payload, then returns the result unchanged.
    #[must_use]
    fn tap<F>(self, function: F) -> Self
    where
        F: FnOnce(&T);

    /// Calls `function` with the error payload, then returns the result unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::result::ResultExt;
    ///
    /// let mut logged = Vec::new();
    /// let failed: Result<i32, &str> = Err("timeout");
    /// let same = failed.tap_err(|error| logged.push(error.to_string()));
    /// assert_eq!(same, Err("timeout"));
    /// assert_eq!(logged, vec!["timeout".to_string()]);
    /// ```
    #[must_use]
    fn tap_err<F>(self, function: F) -> Self
    where
        F: FnOnce(&E);

    /// Returns the success payload, or panics with an [`InvalidState`] whose
    /// message is `"{message}: {error:?}"`.
    ///
    /// # Panics
    ///
    /// Panics if the result is `Err`.
    fn expect_state(self, message: &str) -> T
    where
        E: Debug;

    /// Returns the error payload, or panics with an [`InvalidState`] whose
    /// message is `"{message}: {value:?}"`.
    ///
    /// # Panics
    ///
    /// Panics if the result is `Ok`.
    fn expect_err_state(self, message: &str) -> E
    where
        T: Debug;

    /// Returns the success payload, or panics with an [`InvalidState`] that
    /// embeds the error.
    ///
    /// # Panics
    ///
    /// Panics if the result is `Err`.
    fn unwrap_state(self) -> T
    where
        E: Debug;

    /// Returns the error payload, or panics with an [`InvalidState`] that embeds
    /// the success value.
    ///
    /// # Panics
    ///
    /// Panics if the result is `Ok`.
    fn unwrap_err_state(self) -> E
    where
        T: Debug;

    /// Compares two results with every `Err` ordered below every `Ok`.
    ///
    /// Two `Ok` values compare by payload. Two `Err` values compare equal, whatever
    /// their payloads.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::result::ResultExt;
    /// use std::cmp::Ordering;
    ///
    /// let small: Result<i32, &str> = Ok(1);
    /// let large: Result<i32, &str> = Ok(2);
    /// let failed: Result<i32, &str> = Err("x");
    ///
    /// assert_eq!(small.cmp_success(&large), Ordering::Less);
    /// assert_eq!(failed.cmp_success(&small), Ordering::Less);
    /// assert_eq!(failed.cmp_success(&Err("y")), Ordering::Equal);
    /// ```
    fn cmp_success(&self, other: &Self) -> Ordering
    where
        T: Ord;

    /// Returns a one-element vector for `Ok`, an empty vector for `Err`.
    fn to_vec(self) -> Vec<T>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn tap<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Ok(value) = &self {
            function(value);
        }
        self
    }

    #[inline]
    fn tap_err<F>(self, function: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Err(error) = &self {
            function(error);
        }
        self
    }

    #[inline]
    #[track_caller]
    fn expect_state(self, message: &str) -> T
    where
        E: Debug,
    {
        match self {
            Ok(value) => value,
            Err(error) => InvalidState::new(format!("{message}: {error:?}")).raise(),
        }
    }

    #[inline]
    #[track_caller]
    fn expect_err_state(self, message: &str) -> E
    where
        T: Debug,
    {
        match self {
            Ok(value) => InvalidState::new(format!("{message}: {value:?}")).raise(),
            Err(error) => error,
        }
    }

    #[inline]
    #[track_caller]
    fn unwrap_state(self) -> T
    where
        E: Debug,
    {
        self.expect_state("called `Result::unwrap_state()` on an `Err` value")
    }

    #[inline]
    #[track_caller]
    fn unwrap_err_state(self) -> E
    where
        T: Debug,
    {
        self.expect_err_state("called `Result::unwrap_err_state()` on an `Ok` value")
    }

    fn cmp_success(&self, other: &Self) -> Ordering
    where
        T: Ord,
    {
        match (self, other) {
            (Ok(left), Ok(right)) => left.cmp(right),
            (Ok(_), Err(_)) => Ordering::Greater,
            (Err(_), Ok(_)) => Ordering::Less,
            (Err(_), Err(_)) => Ordering::Equal,
        }
    }

    #[inline]
    fn to_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}
