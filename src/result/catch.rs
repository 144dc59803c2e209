//! Bridging panics into `Result`.
//!
//! A panic is Rust's closest analog to a thrown exception. These functions run a
//! computation under `catch_unwind` and report a panic as `Err` instead of letting
//! it unwind further:
//!
//! - [`try_catch`]: any panic becomes `Err(PanicError)`
//! - [`try_catch_as`]: only panics whose payload is a `P` are captured; every other
//!   panic keeps unwinding
//! - [`try_catch_async`] / [`try_catch_async_as`]: the same for a closure that
//!   builds a future, covering panics raised both while building and while polling
//!
//! A computation with no meaningful return value is simply `T = ()`.
//!
//! The panic hook still runs before the panic is captured, so the usual message is
//! printed to stderr unless the hook has been replaced.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};

#[cfg(feature = "async")]
use std::future::Future;

use crate::error::PanicError;

/// Runs `function`, capturing any panic as `Err`.
///
/// # Errors
///
/// Returns a [`PanicError`] holding the payload if `function` panics.
///
/// # Examples
///
/// ```rust
/// use optres::result::try_catch;
///
/// assert_eq!(try_catch(|| 42).ok(), Some(42));
///
/// let divisor = std::hint::black_box(0);
/// let error = try_catch(|| 1 / divisor).unwrap_err();
/// assert_eq!(error.message(), Some("attempt to divide by zero"));
/// ```
pub fn try_catch<T, F>(function: F) -> Result<T, PanicError>
where
    F: FnOnce() -> T,
{
    catch_unwind(AssertUnwindSafe(function)).map_err(captured)
}

/// Runs `function`, capturing only panics whose payload is a `P`.
///
/// # Errors
///
/// Returns the payload if `function` panics with a `P`.
///
/// # Panics
///
/// Resumes the original panic if its payload is not a `P`.
///
/// # Examples
///
/// ```rust
/// use optres::result::try_catch_as;
///
/// #[derive(Debug, PartialEq)]
/// struct Timeout(u32);
///
/// let caught = try_catch_as::<Timeout, (), _>(|| std::panic::panic_any(Timeout(30)));
/// assert_eq!(caught, Err(Timeout(30)));
/// ```
pub fn try_catch_as<P, T, F>(function: F) -> Result<T, P>
where
    P: Any,
    F: FnOnce() -> T,
{
    catch_unwind(AssertUnwindSafe(function)).map_err(select::<P>)
}

/// Builds and awaits a future, capturing any panic as `Err`.
///
/// # Errors
///
/// Returns a [`PanicError`] if `function` or the future it returns panics.
#[cfg(feature = "async")]
pub async fn try_catch_async<T, F, Fut>(function: F) -> Result<T, PanicError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    use futures::FutureExt;

    let future = catch_unwind(AssertUnwindSafe(function)).map_err(captured)?;
    AssertUnwindSafe(future).catch_unwind().await.map_err(captured)
}

/// Builds and awaits a future, capturing only panics whose payload is a `P`.
///
/// # Errors
///
/// Returns the payload if `function` or its future panics with a `P`.
///
/// # Panics
///
/// Resumes the original panic if its payload is not a `P`.
#[cfg(feature = "async")]
pub async fn try_catch_async_as<P, T, F, Fut>(function: F) -> Result<T, P>
where
    P: Any,
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    use futures::FutureExt;

    let future = catch_unwind(AssertUnwindSafe(function)).map_err(select::<P>)?;
    AssertUnwindSafe(future).catch_unwind().await.map_err(select::<P>)
}

fn captured(payload: Box<dyn Any + Send>) -> PanicError {
    let error = PanicError::new(payload);
    #[cfg(feature = "tracing")]
    tracing::debug!(panic = %error, "captured panic into Err");
    error
}

fn select<P: Any>(payload: Box<dyn Any + Send>) -> P {
    match payload.downcast::<P>() {
        Ok(matched) => *matched,
        Err(other) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                expected = std::any::type_name::<P>(),
                "panic payload rejected; resuming unwind"
            );
            resume_unwind(other)
        }
    }
}
