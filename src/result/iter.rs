//! Folding sequences of results.
//!
//! Every operation short-circuits on the first `Err`, which becomes the result.

use crate::error::InvalidState;
use crate::numeric::Numeric;

/// Collect, aggregate and numeric folds over an iterator of [`Result`]s.
///
/// # Examples
///
/// ```rust
/// use optres::result::ResultIterExt;
///
/// let parsed = ["1", "2", "3"].iter().map(|s| s.parse::<i32>());
/// assert_eq!(parsed.sum_results(), Ok(6));
///
/// let broken = ["1", "x", "3"].iter().map(|s| s.parse::<i32>());
/// assert!(broken.collect_results().is_err());
/// ```
pub trait ResultIterExt<T, E>: Iterator<Item = Result<T, E>> + Sized {
    /// Collects all success payloads into a vector, or returns the first `Err`.
    fn collect_results(self) -> Result<Vec<T>, E> {
        self.collect()
    }

    /// Folds success payloads pairwise, starting from the first element.
    ///
    /// The outer `Result` reports a contract violation, the inner one the first
    /// failure found in the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidState::empty_sequence`] when the iterator is empty.
    fn try_aggregate_results<F>(mut self, function: F) -> Result<Result<T, E>, InvalidState>
    where
        F: FnMut(T, T) -> T,
    {
        match self.next() {
            None => Err(InvalidState::empty_sequence()),
            Some(Err(error)) => Ok(Err(error)),
            Some(Ok(first)) => Ok(self.fold_results(first, function)),
        }
    }

    /// Folds success payloads pairwise, starting from the first element.
    ///
    /// # Panics
    ///
    /// Panics with an [`InvalidState`] payload when the iterator is empty.
    #[track_caller]
    fn aggregate_results<F>(self, function: F) -> Result<T, E>
    where
        F: FnMut(T, T) -> T,
    {
        match self.try_aggregate_results(function) {
            Ok(aggregate) => aggregate,
            Err(error) => error.raise(),
        }
    }

    /// Folds success payloads into `seed`. An empty iterator yields `Ok(seed)`.
    fn fold_results<A, F>(mut self, seed: A, mut function: F) -> Result<A, E>
    where
        F: FnMut(A, T) -> A,
    {
        self.try_fold(seed, |accumulator, item| {
            item.map(|value| function(accumulator, value))
        })
    }

    /// Folds success payloads into `seed`, awaiting `function` once per element.
    ///
    /// The iterator is pulled lazily, one element after each awaited step, so the
    /// first `Err` stops the fold before `function` sees any later element.
    #[cfg(feature = "async")]
    fn fold_results_async<A, F, FFut>(
        self,
        seed: A,
        mut function: F,
    ) -> impl Future<Output = Result<A, E>>
    where
        F: FnMut(A, T) -> FFut,
        FFut: Future<Output = A>,
    {
        async move {
            let mut accumulator = seed;
            for item in self {
                accumulator = function(accumulator, item?).await;
            }
            Ok::<A, E>(accumulator)
        }
    }

    /// Asynchronous counterpart of [`try_aggregate_results`](Self::try_aggregate_results).
    ///
    /// # Errors
    ///
    /// Resolves to [`InvalidState::empty_sequence`] when the iterator is empty.
    #[cfg(feature = "async")]
    fn try_aggregate_results_async<F, FFut>(
        mut self,
        function: F,
    ) -> impl Future<Output = Result<Result<T, E>, InvalidState>>
    where
        F: FnMut(T, T) -> FFut,
        FFut: Future<Output = T>,
    {
        async move {
            match self.next() {
                None => Err(InvalidState::empty_sequence()),
                Some(Err(error)) => Ok(Err(error)),
                Some(Ok(first)) => Ok(self.fold_results_async(first, function).await),
            }
        }
    }

    /// Asynchronous counterpart of [`aggregate_results`](Self::aggregate_results).
    ///
    /// # Panics
    ///
    /// Panics with an [`InvalidState`] payload, when polled, if the iterator is empty.
    #[cfg(feature = "async")]
    fn aggregate_results_async<F, FFut>(self, function: F) -> impl Future<Output = Result<T, E>>
    where
        F: FnMut(T, T) -> FFut,
        FFut: Future<Output = T>,
    {
        async move {
            match self.try_aggregate_results_async(function).await {
                Ok(aggregate) => aggregate,
                Err(error) => error.raise(),
            }
        }
    }

    /// Adds all success payloads. An empty iterator yields `Ok(T::ZERO)`.
    ///
    /// # Panics
    ///
    /// Primitive integers overflow as `+` does, which panics in debug builds. Use
    /// [`Wrapping`](std::num::Wrapping) payloads for wrapping arithmetic.
    fn sum_results(self) -> Result<T, E>
    where
        T: Numeric,
    {
        self.fold_results(T::ZERO, |total, value| total + value)
    }

    /// Multiplies all success payloads. An empty iterator yields `Ok(T::ONE)`.
    ///
    /// # Panics
    ///
    /// Primitive integers overflow as `*` does, which panics in debug builds. Use
    /// [`Wrapping`](std::num::Wrapping) payloads for wrapping arithmetic.
    fn product_results(self) -> Result<T, E>
    where
        T: Numeric,
    {
        self.fold_results(T::ONE, |total, value| total * value)
    }
}

impl<I, T, E> ResultIterExt<T, E> for I where I: Iterator<Item = Result<T, E>> {}
