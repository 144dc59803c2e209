//! `PendingOption`: the combinator surface of `Option` over a pending computation.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::future::{self, Either, Map, Ready, Then};
use pin_project_lite::pin_project;

use super::PendingResult;
use crate::option::OptionExt;

pin_project! {
    /// A pending computation of an [`Option`].
    ///
    /// `PendingOption<Fut>` wraps a future whose output is `Option<T>` and exposes
    /// every `Option` combinator on it. The receiver is always awaited first. Methods
    /// with a plain name take synchronous callbacks. Methods suffixed `_async` take
    /// callbacks that return futures, which are awaited in turn.
    ///
    /// Callbacks on a short-circuited path are never invoked: `and_then_async` on a
    /// `None` neither calls its callback nor creates the callback's future.
    ///
    /// # impl `Future`
    ///
    /// `PendingOption` implements `Future` directly, so it can be awaited:
    ///
    /// ```rust,ignore
    /// let doubled = PendingOption::ready(Some(21)).map(|x| x * 2).await;
    /// assert_eq!(doubled, Some(42));
    /// ```
    ///
    /// # Laws
    ///
    /// Each combinator awaits the receiver and then applies the synchronous `Option`
    /// combinator of the same name, so the functor and monad laws carry over:
    ///
    /// 1. **Identity**: `p.map(|x| x).await == p.await`
    /// 2. **Composition**: `p.map(f).map(g).await == p.map(|x| g(f(x))).await`
    /// 3. **Left Identity**: `PendingOption::ready(Some(a)).and_then(f).await == f(a)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::pending::PendingOption;
    ///
    /// # futures::executor::block_on(async {
    /// let name = PendingOption::ready(Some("ada"))
    ///     .map(str::to_uppercase)
    ///     .filter(|name| name.len() == 3)
    ///     .unwrap_or_default()
    ///     .await;
    /// assert_eq!(name, "ADA");
    /// # });
    /// ```
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct PendingOption<Fut> {
        #[pin]
        future: Fut,
    }
}

impl<Fut> PendingOption<Fut> {
    /// Wraps a future producing an `Option`.
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

impl<T> PendingOption<Ready<Option<T>>> {
    /// Lifts an already available option.
    #[inline]
    pub fn ready(option: Option<T>) -> Self {
        Self::new(future::ready(option))
    }
}

impl<Fut: Future> Future for PendingOption<Fut> {
    type Output = Fut::Output;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().future.poll(context)
    }
}

// =============================================================================
// Lifting
// =============================================================================

impl<Fut, T> PendingOption<Fut>
where
    Fut: Future<Output = Option<T>>,
{
    /// Awaits the option, then applies `function` to it.
    ///
    /// This is the lift every synchronous combinator below is built on. It also
    /// accepts any `Option` method the wrapper does not mirror:
    ///
    /// ```rust
    /// use optres::pending::PendingOption;
    ///
    /// # futures::executor::block_on(async {
    /// let present = PendingOption::ready(Some(3)).lift(|option| option.is_some_and(|x| x > 2));
    /// assert!(present.await);
    /// # });
    /// ```
    #[inline]
    pub fn lift<R, F>(self, function: F) -> Map<Fut, F>
    where
        F: FnOnce(Option<T>) -> R,
    {
        FutureExt::map(self.future, function)
    }

    /// Awaits the option, then awaits the future `function` builds from it.
    #[inline]
    pub fn lift_async<Next, F>(self, function: F) -> Then<Fut, Next, F>
    where
        F: FnOnce(Option<T>) -> Next,
        Next: Future,
    {
        FutureExt::then(self.future, function)
    }

    fn remap<U, F>(self, function: F) -> PendingOption<Map<Fut, F>>
    where
        F: FnOnce(Option<T>) -> Option<U>,
    {
        PendingOption::new(self.lift(function))
    }

    fn rethen<U, Next, F>(self, function: F) -> PendingOption<Then<Fut, Next, F>>
    where
        F: FnOnce(Option<T>) -> Next,
        Next: Future<Output = Option<U>>,
    {
        PendingOption::new(self.lift_async(function))
    }
}

// =============================================================================
// Inspection and Extraction
// =============================================================================

impl<Fut, T> PendingOption<Fut>
where
    Fut: Future<Output = Option<T>>,
{
    /// Resolves to `true` if the option is `Some`.
    pub fn is_some(self) -> impl Future<Output = bool> {
        self.lift(|option| option.is_some())
    }

    /// Resolves to `true` if the option is `None`.
    pub fn is_none(self) -> impl Future<Output = bool> {
        self.lift(|option| option.is_none())
    }

    /// Resolves to `predicate(value)` for `Some(value)`, `false` for `None`.
    pub fn is_some_and<P>(self, predicate: P) -> impl Future<Output = bool>
    where
        P: FnOnce(T) -> bool,
    {
        self.lift(move |option| option.is_some_and(predicate))
    }

    /// Like [`is_some_and`](Self::is_some_and) with an asynchronous predicate.
    pub fn is_some_and_async<P, PFut>(self, predicate: P) -> impl Future<Output = bool>
    where
        P: FnOnce(T) -> PFut,
        PFut: Future<Output = bool>,
    {
        self.lift_async(move |option| match option {
            Some(value) => Either::Left(predicate(value)),
            None => Either::Right(future::ready(false)),
        })
    }

    /// Resolves to the payload.
    ///
    /// # Panics
    ///
    /// The returned future panics with `message` if the option is `None`.
    pub fn expect(self, message: &str) -> impl Future<Output = T> {
        self.lift(move |option| option.expect(message))
    }

    /// Resolves to the payload.
    ///
    /// # Panics
    ///
    /// The returned future panics if the option is `None`.
    pub fn unwrap(self) -> impl Future<Output = T> {
        self.lift(|option| option.unwrap())
    }

    /// Resolves to the payload, failing with an
    /// [`InvalidState`](crate::error::InvalidState) carrying `message`.
    ///
    /// # Panics
    ///
    /// The returned future panics if the option is `None`.
    pub fn expect_state(self, message: &str) -> impl Future<Output = T> {
        self.lift(move |option| option.expect_state(message))
    }

    /// Resolves to the payload, failing with an
    /// [`InvalidState`](crate::error::InvalidState).
    ///
    /// # Panics
    ///
    /// The returned future panics if the option is `None`.
    pub fn unwrap_state(self) -> impl Future<Output = T> {
        self.lift(|option| option.unwrap_state())
    }

    /// Resolves to the payload or `default`.
    pub fn unwrap_or(self, default: T) -> impl Future<Output = T> {
        self.lift(move |option| option.unwrap_or(default))
    }

    /// Resolves to the payload or `T::default()`.
    pub fn unwrap_or_default(self) -> impl Future<Output = T>
    where
        T: Default,
    {
        self.lift(|option| option.unwrap_or_default())
    }

    /// Resolves to the payload or the value computed by `provider`.
    pub fn unwrap_or_else<D>(self, provider: D) -> impl Future<Output = T>
    where
        D: FnOnce() -> T,
    {
        self.lift(move |option| option.unwrap_or_else(provider))
    }

    /// Resolves to the payload or awaits the value computed by `provider`.
    pub fn unwrap_or_else_async<D, DFut>(self, provider: D) -> impl Future<Output = T>
    where
        D: FnOnce() -> DFut,
        DFut: Future<Output = T>,
    {
        self.lift_async(move |option| match option {
            Some(value) => Either::Left(future::ready(value)),
            None => Either::Right(provider()),
        })
    }

    /// Resolves to a one-element vector for `Some`, an empty vector for `None`.
    pub fn to_vec(self) -> impl Future<Output = Vec<T>> {
        self.lift(|option| option.to_vec())
    }
}

// =============================================================================
// Transformation
// =============================================================================

impl<Fut, T> PendingOption<Fut>
where
    Fut: Future<Output = Option<T>>,
{
    /// Calls `function` with the payload if present; the option is unchanged.
    pub fn tap<F>(self, function: F) -> PendingOption<impl Future<Output = Option<T>>>
    where
        F: FnOnce(&T),
    {
        self.remap(move |option| option.tap(function))
    }

    /// Awaits `function(&value)` if present; the option is unchanged.
    ///
    /// The callback's future cannot borrow the payload; copy out what it needs.
    pub fn tap_async<F, TFut>(self, function: F) -> PendingOption<impl Future<Output = Option<T>>>
    where
        F: FnOnce(&T) -> TFut,
        TFut: Future<Output = ()>,
    {
        self.rethen(move |option| match option {
            Some(value) => {
                let observer = function(&value);
                Either::Left(observer.map(move |()| Some(value)))
            }
            None => Either::Right(future::ready(None)),
        })
    }

    /// Keeps the payload only if `predicate` holds.
    pub fn filter<P>(self, predicate: P) -> PendingOption<impl Future<Output = Option<T>>>
    where
        P: FnOnce(&T) -> bool,
    {
        self.remap(move |option| option.filter(predicate))
    }

    /// Keeps the payload only if the asynchronous `predicate` resolves to `true`.
    pub fn filter_async<P, PFut>(
        self,
        predicate: P,
    ) -> PendingOption<impl Future<Output = Option<T>>>
    where
        P: FnOnce(&T) -> PFut,
        PFut: Future<Output = bool>,
    {
        self.rethen(move |option| match option {
            Some(value) => {
                let verdict = predicate(&value);
                Either::Left(verdict.map(move |keep| keep.then_some(value)))
            }
            None => Either::Right(future::ready(None)),
        })
    }

    /// Maps the payload with `function`.
    pub fn map<U, F>(self, function: F) -> PendingOption<impl Future<Output = Option<U>>>
    where
        F: FnOnce(T) -> U,
    {
        self.remap(move |option| option.map(function))
    }

    /// Maps the payload with an asynchronous `function`.
    pub fn map_async<U, F, MFut>(
        self,
        function: F,
    ) -> PendingOption<impl Future<Output = Option<U>>>
    where
        F: FnOnce(T) -> MFut,
        MFut: Future<Output = U>,
    {
        self.rethen(move |option| match option {
            Some(value) => Either::Left(function(value).map(Some)),
            None => Either::Right(future::ready(None)),
        })
    }

    /// Resolves to `function(value)` for `Some(value)`, `default` for `None`.
    pub fn map_or<U, F>(self, default: U, function: F) -> impl Future<Output = U>
    where
        F: FnOnce(T) -> U,
    {
        self.lift(move |option| option.map_or(default, function))
    }

    /// Like [`map_or`](Self::map_or) with an asynchronous `function`.
    pub fn map_or_async<U, F, MFut>(self, default: U, function: F) -> impl Future<Output = U>
    where
        F: FnOnce(T) -> MFut,
        MFut: Future<Output = U>,
    {
        self.lift_async(move |option| match option {
            Some(value) => Either::Left(function(value)),
            None => Either::Right(future::ready(default)),
        })
    }

    /// Resolves to `function(value)` for `Some(value)`, `provider()` for `None`.
    pub fn map_or_else<U, D, F>(self, provider: D, function: F) -> impl Future<Output = U>
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        self.lift(move |option| option.map_or_else(provider, function))
    }

    /// Like [`map_or_else`](Self::map_or_else) with asynchronous callbacks.
    ///
    /// A synchronous callback joins this form through [`std::future::ready`].
    pub fn map_or_else_async<U, D, DFut, F, MFut>(
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
        self.lift_async(move |option| match option {
            Some(value) => Either::Left(function(value)),
            None => Either::Right(provider()),
        })
    }
}

// =============================================================================
// Logical Combinators
// =============================================================================

impl<Fut, T> PendingOption<Fut>
where
    Fut: Future<Output = Option<T>>,
{
    /// Resolves to `other` if the option is `Some`, otherwise `None`.
    pub fn and<U>(self, other: Option<U>) -> PendingOption<impl Future<Output = Option<U>>> {
        self.remap(move |option| option.and(other))
    }

    /// Chains a computation that may itself produce `None`.
    pub fn and_then<U, F>(self, function: F) -> PendingOption<impl Future<Output = Option<U>>>
    where
        F: FnOnce(T) -> Option<U>,
    {
        self.remap(move |option| option.and_then(function))
    }

    /// Chains an asynchronous computation that may itself produce `None`.
    pub fn and_then_async<U, F, AFut>(
        self,
        function: F,
    ) -> PendingOption<impl Future<Output = Option<U>>>
    where
        F: FnOnce(T) -> AFut,
        AFut: Future<Output = Option<U>>,
    {
        self.rethen(move |option| match option {
            Some(value) => Either::Left(function(value)),
            None => Either::Right(future::ready(None)),
        })
    }

    /// Resolves to the option if it is `Some`, otherwise `other`.
    pub fn or(self, other: Option<T>) -> PendingOption<impl Future<Output = Option<T>>> {
        self.remap(move |option| option.or(other))
    }

    /// Resolves to the option if it is `Some`, otherwise `provider()`.
    pub fn or_else<D>(self, provider: D) -> PendingOption<impl Future<Output = Option<T>>>
    where
        D: FnOnce() -> Option<T>,
    {
        self.remap(move |option| option.or_else(provider))
    }

    /// Resolves to the option if it is `Some`, otherwise awaits `provider()`.
    pub fn or_else_async<D, DFut>(
        self,
        provider: D,
    ) -> PendingOption<impl Future<Output = Option<T>>>
    where
        D: FnOnce() -> DFut,
        DFut: Future<Output = Option<T>>,
    {
        self.rethen(move |option| match option {
            Some(value) => Either::Left(future::ready(Some(value))),
            None => Either::Right(provider()),
        })
    }

    /// Resolves to whichever of the two options is `Some`, or `None` if both or
    /// neither are.
    pub fn xor(self, other: Option<T>) -> PendingOption<impl Future<Output = Option<T>>> {
        self.remap(move |option| option.xor(other))
    }

    /// Pairs the payload with `other`'s.
    pub fn zip<U>(self, other: Option<U>) -> PendingOption<impl Future<Output = Option<(T, U)>>> {
        self.remap(move |option| option.zip(other))
    }

    /// Combines the payload with `other`'s through `function`.
    pub fn zip_map<U, R, F>(
        self,
        other: Option<U>,
        function: F,
    ) -> PendingOption<impl Future<Output = Option<R>>>
    where
        F: FnOnce(T, U) -> R,
    {
        self.remap(move |option| option.zip_map(other, function))
    }

    /// Combines the payload with `other`'s through an asynchronous `function`.
    pub fn zip_map_async<U, R, F, ZFut>(
        self,
        other: Option<U>,
        function: F,
    ) -> PendingOption<impl Future<Output = Option<R>>>
    where
        F: FnOnce(T, U) -> ZFut,
        ZFut: Future<Output = R>,
    {
        self.rethen(move |option| match option.zip(other) {
            Some((left, right)) => Either::Left(function(left, right).map(Some)),
            None => Either::Right(future::ready(None)),
        })
    }
}

// =============================================================================
// Conversion
// =============================================================================

impl<Fut, T> PendingOption<Fut>
where
    Fut: Future<Output = Option<T>>,
{
    /// Lowers `None` to `Err(error)`.
    pub fn ok_or<E>(self, error: E) -> PendingResult<impl Future<Output = Result<T, E>>> {
        PendingResult::new(self.lift(move |option| option.ok_or(error)))
    }

    /// Lowers `None` to `Err(provider())`.
    pub fn ok_or_else<E, D>(self, provider: D) -> PendingResult<impl Future<Output = Result<T, E>>>
    where
        D: FnOnce() -> E,
    {
        PendingResult::new(self.lift(move |option| option.ok_or_else(provider)))
    }

    /// Lowers `None` to the error the asynchronous `provider` resolves to.
    pub fn ok_or_else_async<E, D, DFut>(
        self,
        provider: D,
    ) -> PendingResult<impl Future<Output = Result<T, E>>>
    where
        D: FnOnce() -> DFut,
        DFut: Future<Output = E>,
    {
        PendingResult::new(self.lift_async(move |option| match option {
            Some(value) => Either::Left(future::ready(Ok(value))),
            None => Either::Right(provider().map(Err)),
        }))
    }
}

impl<Fut, T> PendingOption<Fut>
where
    Fut: Future<Output = Option<Option<T>>>,
{
    /// Removes one level of nesting.
    pub fn flatten(self) -> PendingOption<impl Future<Output = Option<T>>> {
        self.remap(|option| option.flatten())
    }
}

impl<Fut, A, B> PendingOption<Fut>
where
    Fut: Future<Output = Option<(A, B)>>,
{
    /// Splits a pending option of a pair into a pair of options.
    pub fn unzip(self) -> impl Future<Output = (Option<A>, Option<B>)> {
        self.lift(|option| option.unzip())
    }
}

impl<Fut, T, E> PendingOption<Fut>
where
    Fut: Future<Output = Option<Result<T, E>>>,
{
    /// Swaps `Option<Result<T, E>>` into `Result<Option<T>, E>`.
    pub fn transpose(self) -> PendingResult<impl Future<Output = Result<Option<T>, E>>> {
        PendingResult::new(self.lift(|option| option.transpose()))
    }
}
