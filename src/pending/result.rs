//! `PendingResult`: the combinator surface of `Result` over a pending computation.

use std::convert::identity;
use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::future::{self, Either, Map, Ready, Then};
use pin_project_lite::pin_project;

use super::PendingOption;
use crate::result::ResultExt;

pin_project! {
    /// A pending computation of a [`Result`].
    ///
    /// The two-sided counterpart of [`PendingOption`]: every `Result` combinator is
    /// available, the receiver is awaited first, and callbacks on a short-circuited
    /// path are never invoked. `map`, `and_then` and friends skip their callback on
    /// `Err`; `map_err`, `or_else` and friends skip theirs on `Ok`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::pending::PendingResult;
    ///
    /// # futures::executor::block_on(async {
    /// let port = PendingResult::ready("8080".parse::<u16>())
    ///     .map_err(|error| error.to_string())
    ///     .and_then(|port| if port > 1024 { Ok(port) } else { Err("privileged".into()) })
    ///     .await;
    /// assert_eq!(port, Ok(8080));
    /// # });
    /// ```
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct PendingResult<Fut> {
        #[pin]
        future: Fut,
    }
}

impl<Fut> PendingResult<Fut> {
    /// Wraps a future producing a `Result`.
    #[inline]
    pub const fn new(future: Fut) -> Self {
        Self { future }
    }

    /// Returns the wrapped future.
    #[inline]
    pub fn into_inner(self) -> Fut {
        self.future
    }
}

impl<T, E> PendingResult<Ready<Result<T, E>>> {
    /// Lifts an already available result.
    #[inline]
    pub fn ready(result: Result<T, E>) -> Self {
        Self::new(future::ready(result))
    }
}

impl<Fut: Future> Future for PendingResult<Fut> {
    type Output = Fut::Output;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().future.poll(context)
    }
}

// =============================================================================
// Lifting
// =============================================================================

impl<Fut, T, E> PendingResult<Fut>
where
    Fut: Future<Output = Result<T, E>>,
{
    /// Awaits the result, then applies `function` to it.
    #[inline]
    pub fn lift<R, F>(self, function: F) -> Map<Fut, F>
    where
        F: FnOnce(Result<T, E>) -> R,
    {
        FutureExt::map(self.future, function)
    }

    /// Awaits the result, then awaits the future `function` builds from it.
    #[inline]
    pub fn lift_async<Next, F>(self, function: F) -> Then<Fut, Next, F>
    where
        F: FnOnce(Result<T, E>) -> Next,
        Next: Future,
    {
        FutureExt::then(self.future, function)
    }

    fn remap<U, X, F>(self, function: F) -> PendingResult<Map<Fut, F>>
    where
        F: FnOnce(Result<T, E>) -> Result<U, X>,
    {
        PendingResult::new(self.lift(function))
    }

    fn rethen<U, X, Next, F>(self, function: F) -> PendingResult<Then<Fut, Next, F>>
    where
        F: FnOnce(Result<T, E>) -> Next,
        Next: Future<Output = Result<U, X>>,
    {
        PendingResult::new(self.lift_async(function))
    }
}

// =============================================================================
// Inspection and Extraction
// =============================================================================

impl<Fut, T, E> PendingResult<Fut>
where
    Fut: Future<Output = Result<T, E>>,
{
    /// Resolves to `true` on `Ok`.
    pub fn is_ok(self) -> impl Future<Output = bool> {
        self.lift(|result| result.is_ok())
    }

    /// Resolves to `true` on `Err`.
    pub fn is_err(self) -> impl Future<Output = bool> {
        self.lift(|result| result.is_err())
    }

    /// Resolves to `predicate(value)` on `Ok(value)`, `false` on `Err`.
    pub fn is_ok_and<P>(self, predicate: P) -> impl Future<Output = bool>
    where
        P: FnOnce(T) -> bool,
    {
        self.lift(move |result| result.is_ok_and(predicate))
    }

    /// Like [`is_ok_and`](Self::is_ok_and) with an asynchronous predicate.
    pub fn is_ok_and_async<P, PFut>(self, predicate: P) -> impl Future<Output = bool>
    where
        P: FnOnce(T) -> PFut,
        PFut: Future<Output = bool>,
    {
        self.lift_async(move |result| match result {
            Ok(value) => Either::Left(predicate(value)),
            Err(_) => Either::Right(future::ready(false)),
        })
    }

    /// Resolves to `predicate(error)` on `Err(error)`, `false` on `Ok`.
    pub fn is_err_and<P>(self, predicate: P) -> impl Future<Output = bool>
    where
        P: FnOnce(E) -> bool,
    {
        self.lift(move |result| result.is_err_and(predicate))
    }

    /// Like [`is_err_and`](Self::is_err_and) with an asynchronous predicate.
    pub fn is_err_and_async<P, PFut>(self, predicate: P) -> impl Future<Output = bool>
    where
        P: FnOnce(E) -> PFut,
        PFut: Future<Output = bool>,
    {
        self.lift_async(move |result| match result {
            Ok(_) => Either::Left(future::ready(false)),
            Err(error) => Either::Right(predicate(error)),
        })
    }

    /// Resolves to the success payload.
    ///
    /// # Panics
    ///
    /// The returned future panics with `message` and the error on `Err`.
    pub fn expect(self, message: &str) -> impl Future<Output = T>
    where
        E: Debug,
    {
        self.lift(move |result| result.expect(message))
    }

    /// Resolves to the error payload.
    ///
    /// # Panics
    ///
    /// The returned future panics with `message` and the value on `Ok`.
    pub fn expect_err(self, message: &str) -> impl Future<Output = E>
    where
        T: Debug,
    {
        self.lift(move |result| result.expect_err(message))
    }

    /// Resolves to the success payload.
    ///
    /// # Panics
    ///
    /// The returned future panics on `Err`, embedding the error in the message.
    pub fn unwrap(self) -> impl Future<Output = T>
    where
        E: Debug,
    {
        self.lift(|result| result.unwrap())
    }

    /// Resolves to the error payload.
    ///
    /// # Panics
    ///
    /// The returned future panics on `Ok`.
    pub fn unwrap_err(self) -> impl Future<Output = E>
    where
        T: Debug,
    {
        self.lift(|result| result.unwrap_err())
    }

    /// [`ResultExt::expect_state`] after awaiting.
    ///
    /// # Panics
    ///
    /// The returned future panics with an `InvalidState` on `Err`.
    pub fn expect_state(self, message: &str) -> impl Future<Output = T>
    where
        E: Debug,
    {
        self.lift(move |result| result.expect_state(message))
    }

    /// [`ResultExt::expect_err_state`] after awaiting.
    ///
    /// # Panics
    ///
    /// The returned future panics with an `InvalidState` on `Ok`.
    pub fn expect_err_state(self, message: &str) -> impl Future<Output = E>
    where
        T: Debug,
    {
        self.lift(move |result| result.expect_err_state(message))
    }

    /// [`ResultExt::unwrap_state`] after awaiting.
    ///
    /// # Panics
    ///
    /// The returned future panics with an `InvalidState` on `Err`.
    pub fn unwrap_state(self) -> impl Future<Output = T>
    where
        E: Debug,
    {
        self.lift(|result| result.unwrap_state())
    }

    /// [`ResultExt::unwrap_err_state`] after awaiting.
    ///
    /// # Panics
    ///
    /// The returned future panics with an `InvalidState` on `Ok`.
    pub fn unwrap_err_state(self) -> impl Future<Output = E>
    where
        T: Debug,
    {
        self.lift(|result| result.unwrap_err_state())
    }

    /// Resolves to the success payload or `default`.
    pub fn unwrap_or(self, default: T) -> impl Future<Output = T> {
        self.lift(move |result| result.unwrap_or(default))
    }

    /// Resolves to the success payload or `T::default()`.
    pub fn unwrap_or_default(self) -> impl Future<Output = T>
    where
        T: Default,
    {
        self.lift(|result| result.unwrap_or_default())
    }

    /// Resolves to the success payload or `provider(error)`.
    pub fn unwrap_or_else<D>(self, provider: D) -> impl Future<Output = T>
    where
        D: FnOnce(E) -> T,
    {
        self.lift(move |result| result.unwrap_or_else(provider))
    }

    /// Resolves to the success payload or awaits `provider(error)`.
    pub fn unwrap_or_else_async<D, DFut>(self, provider: D) -> impl Future<Output = T>
    where
        D: FnOnce(E) -> DFut,
        DFut: Future<Output = T>,
    {
        self.lift_async(move |result| match result {
            Ok(value) => Either::Left(future::ready(value)),
            Err(error) => Either::Right(provider(error)),
        })
    }

    /// Resolves to a one-element vector on `Ok`, an empty vector on `Err`.
    pub fn to_vec(self) -> impl Future<Output = Vec<T>> {
        self.lift(|result| result.to_vec())
    }
}

// =============================================================================
// Observation
// =============================================================================

impl<Fut, T, E> PendingResult<Fut>
where
    Fut: Future<Output = Result<T, E>>,
{
    /// Calls `function` with the success payload; the result is unchanged.
    pub fn tap<F>(self, function: F) -> PendingResult<impl Future<Output = Result<T, E>>>
    where
        F: FnOnce(&T),
    {
        self.remap(move |result| result.tap(function))
    }

    /// Awaits `function(&value)` on `Ok`; the result is unchanged.
    pub fn tap_async<F, TFut>(
        self,
        function: F,
    ) -> PendingResult<impl Future<Output = Result<T, E>>>
    where
        F: FnOnce(&T) -> TFut,
        TFut: Future<Output = ()>,
    {
        self.rethen(move |result| match result {
            Ok(value) => {
                let observer = function(&value);
                Either::Left(observer.map(move |()| Ok(value)))
            }
            Err(error) => Either::Right(future::ready(Err(error))),
        })
    }

    /// Calls `function` with the error payload; the result is unchanged.
    pub fn tap_err<F>(self, function: F) -> PendingResult<impl Future<Output = Result<T, E>>>
    where
        F: FnOnce(&E),
    {
        self.remap(move |result| result.tap_err(function))
    }

    /// Awaits `function(&error)` on `Err`; the result is unchanged.
    pub fn tap_err_async<F, TFut>(
        self,
        function: F,
    ) -> PendingResult<impl Future<Output = Result<T, E>>>
    where
        F: FnOnce(&E) -> TFut,
        TFut: Future<Output = ()>,
    {
        self.rethen(move |result| match result {
            Ok(value) => Either::Left(future::ready(Ok(value))),
            Err(error) => {
                let observer = function(&error);
                Either::Right(observer.map(move |()| Err(error)))
            }
        })
    }
}

// =============================================================================
// Transformation
// =============================================================================

impl<Fut, T, E> PendingResult<Fut>
where
    Fut: Future<Output = Result<T, E>>,
{
    /// Maps the success payload.
    pub fn map<U, F>(self, function: F) -> PendingResult<impl Future<Output = Result<U, E>>>
    where
        F: FnOnce(T) -> U,
    {
        self.remap(move |result| result.map(function))
    }

    /// Maps the success payload with an asynchronous `function`.
    pub fn map_async<U, F, MFut>(
        self,
        function: F,
    ) -> PendingResult<impl Future<Output = Result<U, E>>>
    where
        F: FnOnce(T) -> MFut,
        MFut: Future<Output = U>,
    {
        self.rethen(move |result| match result {
            Ok(value) => Either::Left(function(value).map(Ok)),
            Err(error) => Either::Right(future::ready(Err(error))),
        })
    }

    /// Maps the error payload.
    pub fn map_err<X, F>(self, function: F) -> PendingResult<impl Future<Output = Result<T, X>>>
    where
        F: FnOnce(E) -> X,
    {
        self.remap(move |result| result.map_err(function))
    }

    /// Maps the error payload with an asynchronous `function`.
    pub fn map_err_async<X, F, MFut>(
        self,
        function: F,
    ) -> PendingResult<impl Future<Output = Result<T, X>>>
    where
        F: FnOnce(E) -> MFut,
        MFut: Future<Output = X>,
    {
        self.rethen(move |result| match result {
            Ok(value) => Either::Left(future::ready(Ok(value))),
            Err(error) => Either::Right(function(error).map(Err)),
        })
    }

    /// Resolves to `function(value)` on `Ok`, `default` on `Err`.
    pub fn map_or<U, F>(self, default: U, function: F) -> impl Future<Output = U>
    where
        F: FnOnce(T) -> U,
    {
        self.lift(move |result| result.map_or(default, function))
    }

    /// Like [`map_or`](Self::map_or) with an asynchronous `function`.
    pub fn map_or_async<U, F, MFut>(self, default: U, function: F) -> impl Future<Output = U>
    where
        F: FnOnce(T) -> MFut,
        MFut: Future<Output = U>,
    {
        self.lift_async(move |result| match result {
            Ok(value) => Either::Left(function(value)),
            Err(_) => Either::Right(future::ready(default)),
        })
    }

    /// Resolves to `function(value)` on `Ok`, `provider(error)` on `Err`.
    pub fn map_or_else<U, D, F>(self, provider: D, function: F) -> impl Future<Output = U>
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        self.lift(move |result| result.map_or_else(provider, function))
    }

    /// Like [`map_or_else`](Self::map_or_else) with asynchronous callbacks.
    pub fn map_or_else_async<U, D, DFut, F, MFut>(
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
        self.lift_async(move |result| match result {
            Ok(value) => Either::Left(function(value)),
            Err(error) => Either::Right(provider(error)),
        })
    }
}

// =============================================================================
// Logical Combinators
// =============================================================================

impl<Fut, T, E> PendingResult<Fut>
where
    Fut: Future<Output = Result<T, E>>,
{
    /// Resolves to `other` on `Ok`, or keeps the error.
    pub fn and<U>(self, other: Result<U, E>) -> PendingResult<impl Future<Output = Result<U, E>>> {
        self.remap(move |result| result.and(other))
    }

    /// Chains a fallible computation on the success payload.
    pub fn and_then<U, F>(self, function: F) -> PendingResult<impl Future<Output = Result<U, E>>>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        self.remap(move |result| result.and_then(function))
    }

    /// Chains an asynchronous fallible computation on the success payload.
    pub fn and_then_async<U, F, AFut>(
        self,
        function: F,
    ) -> PendingResult<impl Future<Output = Result<U, E>>>
    where
        F: FnOnce(T) -> AFut,
        AFut: Future<Output = Result<U, E>>,
    {
        self.rethen(move |result| match result {
            Ok(value) => Either::Left(function(value)),
            Err(error) => Either::Right(future::ready(Err(error))),
        })
    }

    /// Keeps the success, or resolves to `other` on `Err`.
    pub fn or<X>(self, other: Result<T, X>) -> PendingResult<impl Future<Output = Result<T, X>>> {
        self.remap(move |result| result.or(other))
    }

    /// Keeps the success, or recovers with `function(error)`.
    pub fn or_else<X, F>(self, function: F) -> PendingResult<impl Future<Output = Result<T, X>>>
    where
        F: FnOnce(E) -> Result<T, X>,
    {
        self.remap(move |result| result.or_else(function))
    }

    /// Keeps the success, or recovers by awaiting `function(error)`.
    pub fn or_else_async<X, F, OFut>(
        self,
        function: F,
    ) -> PendingResult<impl Future<Output = Result<T, X>>>
    where
        F: FnOnce(E) -> OFut,
        OFut: Future<Output = Result<T, X>>,
    {
        self.rethen(move |result| match result {
            Ok(value) => Either::Left(future::ready(Ok(value))),
            Err(error) => Either::Right(function(error)),
        })
    }
}

// =============================================================================
// Conversion
// =============================================================================

impl<Fut, T, E> PendingResult<Fut>
where
    Fut: Future<Output = Result<T, E>>,
{
    /// Projects the success side, discarding the error.
    pub fn ok(self) -> PendingOption<impl Future<Output = Option<T>>> {
        PendingOption::new(self.lift(|result| result.ok()))
    }

    /// Projects the error side, discarding the success.
    pub fn err(self) -> PendingOption<impl Future<Output = Option<E>>> {
        PendingOption::new(self.lift(|result| result.err()))
    }
}

impl<Fut, T, E> PendingResult<Fut>
where
    Fut: Future<Output = Result<Result<T, E>, E>>,
{
    /// Removes one level of nesting.
    pub fn flatten(self) -> PendingResult<impl Future<Output = Result<T, E>>> {
        self.remap(|result| result.and_then(identity))
    }
}

impl<Fut, T, E> PendingResult<Fut>
where
    Fut: Future<Output = Result<Option<T>, E>>,
{
    /// Swaps `Result<Option<T>, E>` into `Option<Result<T, E>>`.
    pub fn transpose(self) -> PendingOption<impl Future<Output = Option<Result<T, E>>>> {
        PendingOption::new(self.lift(|result| result.transpose()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use rstest::rstest;

    #[rstest]
    fn test_ready_round_trips() {
        assert_eq!(block_on(PendingResult::ready(Ok::<i32, ()>(1))), Ok(1));
        assert_eq!(block_on(PendingResult::ready(Err::<i32, _>("e"))), Err("e"));
    }

    #[rstest]
    fn test_lift_applies_any_result_method() {
        let copied = PendingResult::ready(Ok::<_, ()>(&5)).lift(|result| result.copied());
        assert_eq!(block_on(copied), Ok(5));
    }

    #[rstest]
    fn test_flatten_keeps_outer_error() {
        let outer: Result<Result<i32, &str>, &str> = Err("outer");
        assert_eq!(block_on(PendingResult::ready(outer).flatten()), Err("outer"));

        let inner: Result<Result<i32, &str>, &str> = Ok(Err("inner"));
        assert_eq!(block_on(PendingResult::ready(inner).flatten()), Err("inner"));
    }

    #[rstest]
    fn test_transpose_to_pending_option() {
        let none: Result<Option<i32>, ()> = Ok(None);
        assert_eq!(block_on(PendingResult::ready(none).transpose()), None);
    }
}
