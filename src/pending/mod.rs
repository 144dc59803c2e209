//! Asynchronous lifting of `Option` and `Result` combinators.
//!
//! Every combinator works whether the container, the callback, or both are
//! asynchronous:
//!
//! | Receiver | Callback | Entry point |
//! |----------|----------|-------------|
//! | `Option` / `Result` | sync | std and the crate's `*Ext` traits |
//! | `Option` / `Result` | async | [`OptionAsyncExt`] / [`ResultAsyncExt`] |
//! | future | sync | [`PendingOption`] / [`PendingResult`], plain method names |
//! | future | async | [`PendingOption`] / [`PendingResult`], `_async` methods |
//!
//! A future becomes a wrapper through [`PendingExt`] or `PendingOption::new`.
//! The receiver is always awaited first, and a callback on a short-circuited path
//! is never called, so its future is never created.
//!
//! # Examples
//!
//! ```rust
//! use optres::pending::{OptionAsyncExt, PendingExt};
//!
//! async fn lookup(id: u32) -> Option<String> {
//!     (id == 7).then(|| "seven".to_string())
//! }
//!
//! # futures::executor::block_on(async {
//! let length = lookup(7).pending_option().map(|name| name.len()).await;
//! assert_eq!(length, Some(5));
//!
//! let chained = Some(7).and_then_async(lookup).await;
//! assert_eq!(chained.as_deref(), Some("seven"));
//! # });
//! ```

mod option;
mod result;

pub use option::PendingOption;
pub use result::PendingResult;

use std::future::Future;

use futures::future::Ready;
use static_assertions::assert_impl_all;

assert_impl_all!(PendingOption<Ready<Option<i32>>>: Send, Sync, Unpin);
assert_impl_all!(PendingResult<Ready<Result<i32, String>>>: Send, Sync, Unpin);

/// Wraps any future in the matching pending container.
pub trait PendingExt: Future + Sized {
    /// Views a future of `Option<T>` as a [`PendingOption`].
    fn pending_option<T>(self) -> PendingOption<Self>
    where
        Self: Future<Output = Option<T>>,
    {
        PendingOption::new(self)
    }

    /// Views a future of `Result<T, E>` as a [`PendingResult`].
    fn pending_result<T, E>(self) -> PendingResult<Self>
    where
        Self: Future<Output = Result<T, E>>,
    {
        PendingResult::new(self)
    }
}

impl<Fut: Future> PendingExt for Fut {}

// =============================================================================
// Async Callbacks on Option
// =============================================================================

/// `_async` combinators for an [`Option`] that is already available.
///
/// Each method wraps the receiver with [`into_pending`](Self::into_pending) and
/// delegates to the [`PendingOption`] method of the same name.
pub trait OptionAsyncExt<T>: Sized {
    /// Lifts the option into a [`PendingOption`].
    fn into_pending(self) -> PendingOption<Ready<Option<T>>>;

    /// Resolves to `predicate(value)` on `Some(value)`, `false` on `None`.
    fn is_some_and_async<P, PFut>(self, predicate: P) -> impl Future<Output = bool>
    where
        P: FnOnce(T) -> PFut,
        PFut: Future<Output = bool>,
    {
        self.into_pending().is_some_and_async(predicate)
    }

    /// Resolves to the payload or awaits `provider()`.
    fn unwrap_or_else_async<D, DFut>(self, provider: D) -> impl Future<Output = T>
    where
        D: FnOnce() -> DFut,
        DFut: Future<Output = T>,
    {
        self.into_pending().unwrap_or_else_async(provider)
    }

    /// Awaits `function(&value)` on `Some`; the option is unchanged.
    fn tap_async<F, TFut>(self, function: F) -> PendingOption<impl Future<Output = Option<T>>>
    where
        F: FnOnce(&T) -> TFut,
        TFut: Future<Output = ()>,
    {
        self.into_pending().tap_async(function)
    }

    /// Keeps the payload when the asynchronous `predicate` holds.
    fn filter_async<P, PFut>(self, predicate: P) -> PendingOption<impl Future<Output = Option<T>>>
    where
        P: FnOnce(&T) -> PFut,
        PFut: Future<Output = bool>,
    {
        self.into_pending().filter_async(predicate)
    }

    /// Maps the payload with an asynchronous `function`.
    fn map_async<U, F, MFut>(self, function: F) -> PendingOption<impl Future<Output = Option<U>>>
    where
        F: FnOnce(T) -> MFut,
        MFut: Future<Output = U>,
    {
        self.into_pending().map_async(function)
    }

    /// Resolves to `function(value)` on `Some`, `default` on `None`.
    fn map_or_async<U, F, MFut>(self, default: U, function: F) -> impl Future<Output = U>
    where
        F: FnOnce(T) -> MFut,
        MFut: Future<Output = U>,
    {
        self.into_pending().map_or_async(default, function)
    }

    /// Resolves to `function(value)` on `Some`, `provider()` on `None`.
    fn map_or_else_async<U, D, DFut, F, MFut>(
        self,
        provider: D,
        function: F,
    ) -> impl Future<Output = U>
    where
        D: FnOnce() -> DFut,
        DFut: Future<Output = U>,
        F: FnOnce(T) -> MFut,
        MFut: Future<Output = U>,
    {
        self.into_pending().map_or_else_async(provider, function)
    }

    /// Chains an asynchronous optional computation.
    fn and_then_async<U, F, AFut>(
        self,
        function: F,
    ) -> PendingOption<impl Future<Output = Option<U>>>
    where
        F: FnOnce(T) -> AFut,
        AFut: Future<Output = Option<U>>,
    {
        self.into_pending().and_then_async(function)
    }

    /// Keeps the payload, or awaits `provider()` on `None`.
    fn or_else_async<D, DFut>(self, provider: D) -> PendingOption<impl Future<Output = Option<T>>>
    where
        D: FnOnce() -> DFut,
        DFut: Future<Output = Option<T>>,
    {
        self.into_pending().or_else_async(provider)
    }

    /// Combines both payloads with an asynchronous `function` when both are present.
    fn zip_map_async<U, R, F, ZFut>(
        self,
        other: Option<U>,
        function: F,
    ) -> PendingOption<impl Future<Output = Option<R>>>
    where
        F: FnOnce(T, U) -> ZFut,
        ZFut: Future<Output = R>,
    {
        self.into_pending().zip_map_async(other, function)
    }

    /// Converts to a result, awaiting `provider()` for the error on `None`.
    fn ok_or_else_async<E, D, DFut>(
        self,
        provider: D,
    ) -> PendingResult<impl Future<Output = Result<T, E>>>
    where
        D: FnOnce() -> DFut,
        DFut: Future<Output = E>,
    {
        self.into_pending().ok_or_else_async(provider)
    }
}

impl<T> OptionAsyncExt<T> for Option<T> {
    #[inline]
    fn into_pending(self) -> PendingOption<Ready<Option<T>>> {
        PendingOption::ready(self)
    }
}

// =============================================================================
// Async Callbacks on Result
// =============================================================================

/// `_async` combinators for a [`Result`] that is already available.
pub trait ResultAsyncExt<T, E>: Sized {
    /// Lifts the result into a [`PendingResult`].
    fn into_pending(self) -> PendingResult<Ready<Result<T, E>>>;

    /// Resolves to `predicate(value)` on `Ok(value)`, `false` on `Err`.
    fn is_ok_and_async<P, PFut>(self, predicate: P) -> impl Future<Output = bool>
    where
        P: FnOnce(T) -> PFut,
        PFut: Future<Output = bool>,
    {
        self.into_pending().is_ok_and_async(predicate)
    }

    /// Resolves to `predicate(error)` on `Err(error)`, `false` on `Ok`.
    fn is_err_and_async<P, PFut>(self, predicate: P) -> impl Future<Output = bool>
    where
        P: FnOnce(E) -> PFut,
        PFut: Future<Output = bool>,
    {
        self.into_pending().is_err_and_async(predicate)
    }

    /// Resolves to the success payload or awaits `provider(error)`.
    fn unwrap_or_else_async<D, DFut>(self, provider: D) -> impl Future<Output = T>
    where
        D: FnOnce(E) -> DFut,
        DFut: Future<Output = T>,
    {
        self.into_pending().unwrap_or_else_async(provider)
    }

    /// Awaits `function(&value)` on `Ok`; the result is unchanged.
    fn tap_async<F, TFut>(self, function: F) -> PendingResult<impl Future<Output = Result<T, E>>>
    where
        F: FnOnce(&T) -> TFut,
        TFut: Future<Output = ()>,
    {
        self.into_pending().tap_async(function)
    }

    /// Awaits `function(&error)` on `Err`; the result is unchanged.
    fn tap_err_async<F, TFut>(
        self,
        function: F,
    ) -> PendingResult<impl Future<Output = Result<T, E>>>
    where
        F: FnOnce(&E) -> TFut,
        TFut: Future<Output = ()>,
    {
        self.into_pending().tap_err_async(function)
    }

    /// Maps the success payload with an asynchronous `function`.
    fn map_async<U, F, MFut>(self, function: F) -> PendingResult<impl Future<Output = Result<U, E>>>
    where
        F: FnOnce(T) -> MFut,
        MFut: Future<Output = U>,
    {
        self.into_pending().map_async(function)
    }

    /// Maps the error payload with an asynchronous `function`.
    fn map_err_async<X, F, MFut>(
        self,
        function: F,
    ) -> PendingResult<impl Future<Output = Result<T, X>>>
    where
        F: FnOnce(E) -> MFut,
        MFut: Future<Output = X>,
    {
        self.into_pending().map_err_async(function)
    }

    /// Resolves to `function(value)` on `Ok`, `default` on `Err`.
    fn map_or_async<U, F, MFut>(self, default: U, function: F) -> impl Future<Output = U>
    where
        F: FnOnce(T) -> MFut,
        MFut: Future<Output = U>,
    {
        self.into_pending().map_or_async(default, function)
    }

    /// Resolves to `function(value)` on `Ok`, `provider(error)` on `Err`.
    fn map_or_else_async<U, D, DFut, F, MFut>(
        self,
        provider: D,
        function: F,
    ) -> impl Future<Output = U>
    where
        D: FnOnce(E) -> DFut,
        DFut: Future<Output = U>,
        F: FnOnce(T) -> MFut,
        MFut: Future<Output = U>,
    {
        self.into_pending().map_or_else_async(provider, function)
    }

    /// Chains an asynchronous fallible computation on the success payload.
    fn and_then_async<U, F, AFut>(
        self,
        function: F,
    ) -> PendingResult<impl Future<Output = Result<U, E>>>
    where
        F: FnOnce(T) -> AFut,
        AFut: Future<Output = Result<U, E>>,
    {
        self.into_pending().and_then_async(function)
    }

    /// Keeps the success, or recovers by awaiting `function(error)`.
    fn or_else_async<X, F, OFut>(
        self,
        function: F,
    ) -> PendingResult<impl Future<Output = Result<T, X>>>
    where
        F: FnOnce(E) -> OFut,
        OFut: Future<Output = Result<T, X>>,
    {
        self.into_pending().or_else_async(function)
    }
}

impl<T, E> ResultAsyncExt<T, E> for Result<T, E> {
    #[inline]
    fn into_pending(self) -> PendingResult<Ready<Result<T, E>>> {
        PendingResult::ready(self)
    }
}
