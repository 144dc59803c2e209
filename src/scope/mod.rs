//! Scope guards and scoping helpers.
//!
//! - [`defer`] / [`defer_with`]: RAII guards whose cleanup runs exactly once when
//!   the guard is dropped, including while unwinding from a panic
//! - [`defer_async`] / [`defer_async_with`]: the bracket pattern for asynchronous
//!   cleanup (feature `async`)
//! - [`ScopeExt`]: `also` / `let_with` and their async forms on every value
//!
//! Rust has no asynchronous drop. If a future returned by `defer_async` is dropped
//! before it completes, its cleanup does not run. Use [`defer`] for cleanup that
//! must survive cancellation.

use std::fmt;
use std::future::Future;
use std::ops::{Deref, DerefMut};

// =============================================================================
// Defer
// =============================================================================

/// Runs an action when dropped.
///
/// Created by [`defer`].
#[must_use = "the action runs immediately if the guard is not bound to a variable"]
pub struct Defer<F: FnOnce()> {
    action: Option<F>,
}

/// Schedules `action` to run when the returned guard goes out of scope.
///
/// # Examples
///
/// ```rust
/// use optres::scope::defer;
/// use std::cell::RefCell;
///
/// let log = RefCell::new(Vec::new());
/// {
///     let _guard = defer(|| log.borrow_mut().push("closed"));
///     log.borrow_mut().push("working");
/// }
/// assert_eq!(*log.borrow(), vec!["working", "closed"]);
/// ```
pub const fn defer<F: FnOnce()>(action: F) -> Defer<F> {
    Defer {
        action: Some(action),
    }
}

impl<F: FnOnce()> Defer<F> {
    /// Disarms the guard; the action never runs.
    pub fn cancel(mut self) {
        self.action = None;
    }
}

impl<F: FnOnce()> Drop for Defer<F> {
    fn drop(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}

impl<F: FnOnce()> fmt::Debug for Defer<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Defer")
            .field("armed", &self.action.is_some())
            .finish()
    }
}

// =============================================================================
// DeferWith
// =============================================================================

/// Owns a value and hands it to a cleanup action when dropped.
///
/// Dereferences to the owned value. Created by [`defer_with`].
#[must_use = "the cleanup runs immediately if the guard is not bound to a variable"]
pub struct DeferWith<T, F: FnOnce(T)> {
    slot: Option<(T, F)>,
}

/// Wraps `value` in a guard that calls `cleanup(value)` on drop.
///
/// # Examples
///
/// ```rust
/// use optres::scope::defer_with;
/// use std::cell::Cell;
///
/// let flushed = Cell::new(0);
/// {
///     let mut buffer = defer_with(Vec::new(), |items: Vec<i32>| flushed.set(items.len()));
///     buffer.push(1);
///     buffer.push(2);
/// }
/// assert_eq!(flushed.get(), 2);
/// ```
pub const fn defer_with<T, F: FnOnce(T)>(value: T, cleanup: F) -> DeferWith<T, F> {
    DeferWith {
        slot: Some((value, cleanup)),
    }
}

impl<T, F: FnOnce(T)> DeferWith<T, F> {
    /// Disarms the guard and returns the value without running the cleanup.
    pub fn into_inner(mut self) -> T {
        occupied(self.slot.take()).0
    }
}

// The slot is emptied only by `drop` or `into_inner`, both of which consume the guard.
fn occupied<S>(slot: Option<S>) -> S {
    slot.unwrap_or_else(|| unreachable!("DeferWith slot accessed after release"))
}

impl<T, F: FnOnce(T)> Deref for DeferWith<T, F> {
    type Target = T;

    fn deref(&self) -> &T {
        &occupied(self.slot.as_ref()).0
    }
}

impl<T, F: FnOnce(T)> DerefMut for DeferWith<T, F> {
    fn deref_mut(&mut self) -> &mut T {
        &mut occupied(self.slot.as_mut()).0
    }
}

impl<T, F: FnOnce(T)> Drop for DeferWith<T, F> {
    fn drop(&mut self) {
        if let Some((value, cleanup)) = self.slot.take() {
            cleanup(value);
        }
    }
}

impl<T: fmt::Debug, F: FnOnce(T)> fmt::Debug for DeferWith<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DeferWith")
            .field("value", &self.slot.as_ref().map(|(value, _)| value))
            .finish()
    }
}

// =============================================================================
// Async Defer
// =============================================================================

/// Awaits `body`, then awaits `cleanup()` whatever the outcome.
///
/// A panic inside `body` is held while the cleanup runs and then resumed. If the
/// cleanup itself panics after a successful body, that panic is resumed instead.
/// When both panic, the body's panic wins.
///
/// # Panics
///
/// Resumes any panic raised by `body` or `cleanup`.
///
/// # Examples
///
/// ```rust
/// use optres::scope::defer_async;
/// use std::cell::Cell;
///
/// let closed = &Cell::new(false);
/// # futures::executor::block_on(async {
/// let value = defer_async(async { 42 }, move || async move { closed.set(true) }).await;
/// assert_eq!(value, 42);
/// # });
/// assert!(closed.get());
/// ```
#[cfg(feature = "async")]
pub async fn defer_async<A, Body, Cleanup, CFut>(body: Body, cleanup: Cleanup) -> A
where
    Body: Future<Output = A>,
    Cleanup: FnOnce() -> CFut,
    CFut: Future<Output = ()>,
{
    use futures::FutureExt;
    use std::panic::AssertUnwindSafe;

    let outcome = AssertUnwindSafe(body).catch_unwind().await;
    let released = AssertUnwindSafe(async move { cleanup().await })
        .catch_unwind()
        .await;
    settle(outcome, released)
}

/// Lends `resource` to `body`, then hands it to `cleanup` whatever the outcome.
///
/// Panics are handled as in [`defer_async`].
///
/// # Panics
///
/// Resumes any panic raised by `body` or `cleanup`.
///
/// # Examples
///
/// ```rust
/// use optres::scope::defer_async_with;
///
/// # futures::executor::block_on(async {
/// let total = defer_async_with(
///     vec![1, 2, 3],
///     async |items: &mut Vec<i32>| {
///         items.push(4);
///         items.iter().sum::<i32>()
///     },
///     |items| async move { assert_eq!(items.len(), 4) },
/// )
/// .await;
/// assert_eq!(total, 10);
/// # });
/// ```
#[cfg(feature = "async")]
pub async fn defer_async_with<R, A, Body, Cleanup, CFut>(
    mut resource: R,
    body: Body,
    cleanup: Cleanup,
) -> A
where
    Body: AsyncFnOnce(&mut R) -> A,
    Cleanup: FnOnce(R) -> CFut,
    CFut: Future<Output = ()>,
{
    use futures::FutureExt;
    use std::panic::AssertUnwindSafe;

    let outcome = AssertUnwindSafe(body(&mut resource)).catch_unwind().await;
    let released = AssertUnwindSafe(async move { cleanup(resource).await })
        .catch_unwind()
        .await;
    settle(outcome, released)
}

#[cfg(feature = "async")]
type Unwound<T> = std::thread::Result<T>;

#[cfg(feature = "async")]
fn settle<A>(outcome: Unwound<A>, released: Unwound<()>) -> A {
    use std::panic::resume_unwind;

    match (outcome, released) {
        (Ok(value), Ok(())) => value,
        (Err(original), Ok(())) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("deferred cleanup ran after a panicking body; resuming unwind");
            resume_unwind(original)
        }
        (Ok(_), Err(cleanup_panic)) => resume_unwind(cleanup_panic),
        (Err(original), Err(_)) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("deferred cleanup panicked while unwinding; keeping the body's panic");
            resume_unwind(original)
        }
    }
}

// =============================================================================
// ScopeExt
// =============================================================================

/// Scoping helpers available on every value.
///
/// # Examples
///
/// ```rust
/// use optres::scope::ScopeExt;
///
/// let sorted = vec![3, 1, 2].also(|items| items.sort());
/// assert_eq!(sorted, vec![1, 2, 3]);
///
/// let described = 42.let_with(|n| format!("n = {n}"));
/// assert_eq!(described, "n = 42");
/// ```
pub trait ScopeExt: Sized {
    /// Mutates `self` in place with `function`, then returns it.
    #[must_use]
    fn also<F>(mut self, function: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        function(&mut self);
        self
    }

    /// Passes `self` to `function` and returns its result.
    fn let_with<R, F>(self, function: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        function(self)
    }

    /// Awaits `function(&mut self)`, then returns `self`.
    fn also_async<F>(mut self, function: F) -> impl Future<Output = Self>
    where
        F: AsyncFnOnce(&mut Self),
    {
        async move {
            function(&mut self).await;
            self
        }
    }

    /// Passes `self` to the asynchronous `function` and awaits its result.
    fn let_async<R, F, Fut>(self, function: F) -> impl Future<Output = R>
    where
        F: FnOnce(Self) -> Fut,
        Fut: Future<Output = R>,
    {
        function(self)
    }
}

impl<T> ScopeExt for T {}
