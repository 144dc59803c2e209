//! Extensions for [`Option`].
//!
//! std already provides the bulk of the `Option` combinator surface
//! (`map`, `and_then`, `filter`, `xor`, `zip`, `unzip`, `flatten`, `transpose`,
//! `ok_or`, ...). [`OptionExt`] adds the operations it lacks:
//!
//! - [`tap`](OptionExt::tap): observe the payload without changing the option
//! - [`expect_state`](OptionExt::expect_state) / [`unwrap_state`](OptionExt::unwrap_state):
//!   extraction that fails with a typed [`InvalidState`] payload
//! - [`zip_map`](OptionExt::zip_map): zip two options through a combining function
//! - [`to_vec`](OptionExt::to_vec): the zero-or-one element sequence
//!
//! Folding a sequence of options lives in [`OptionIterExt`].
//!
//! # Examples
//!
//! ```rust
//! use optres::option::OptionExt;
//!
//! let width = Some(3);
//! let height = Some(4);
//! assert_eq!(width.zip_map(height, |w, h| w * h), Some(12));
//! assert_eq!(width.zip_map(None::<i32>, |w, h| w * h), None);
//! ```

mod iter;

pub use iter::OptionIterExt;

use crate::error::InvalidState;

/// Combinators on [`Option`] that std does not provide.
pub trait OptionExt<T>: Sized {
    /// Calls `function` with a reference to the payload if present, then returns
    /// the option unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::option::OptionExt;
    ///
    /// let mut seen = Vec::new();
    /// let value = Some(5).tap(|x| seen.push(*x));
    /// assert_eq!(value, Some(5));
    /// assert_eq!(seen, vec![5]);
    ///
    /// let absent = None::<i32>.tap(|_| unreachable!());
    /// assert_eq!(absent, None);
    /// ```
    #[must_use]
    fn tap<F>(self, function: F) -> Self
    where
        F: FnOnce(&T);

    /// Returns the payload, or panics with an [`InvalidState`] carrying `message`.
    ///
    /// # Panics
    ///
    /// Panics if the option is `None`. The payload is an `InvalidState`.
    fn expect_state(self, message: &str) -> T;

    /// Returns the payload, or panics with an [`InvalidState`].
    ///
    /// # Panics
    ///
    /// Panics if the option is `None`. The payload is an `InvalidState` with the
    /// message ``called `Option::unwrap_state()` on a `None` value``.
    fn unwrap_state(self) -> T;

    /// Combines two present payloads with `function`.
    ///
    /// Returns `None` if either option is `None`; `function` is then not called.
    fn zip_map<U, R, F>(self, other: Option<U>, function: F) -> Option<R>
    where
        F: FnOnce(T, U) -> R;

    /// Returns a one-element vector for `Some`, an empty vector for `None`.
    fn to_vec(self) -> Vec<T>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn tap<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self {
            function(value);
        }
        self
    }

    #[inline]
    #[track_caller]
    fn expect_state(self, message: &str) -> T {
        match self {
            Some(value) => value,
            None => InvalidState::new(message.to_owned()).raise(),
        }
    }

    #[inline]
    #[track_caller]
    fn unwrap_state(self) -> T {
        match self {
            Some(value) => value,
            None => InvalidState::new("called `Option::unwrap_state()` on a `None` value").raise(),
        }
    }

    #[inline]
    fn zip_map<U, R, F>(self, other: Option<U>, function: F) -> Option<R>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Some(left), Some(right)) => Some(function(left, right)),
            _ => None,
        }
    }

    #[inline]
    fn to_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}
