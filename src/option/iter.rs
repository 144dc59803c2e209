//! Folding sequences of options.
//!
//! Every operation short-circuits: the first `None` ends the traversal and becomes
//! the result, and no later element is pulled from the iterator.

use crate::error::InvalidState;
use crate::numeric::Numeric;

/// Collect, aggregate and numeric folds over an iterator of [`Option`]s.
///
/// # Examples
///
/// ```rust
/// use optres::option::OptionIterExt;
///
/// let present = vec![Some(1), Some(2), Some(3)];
/// assert_eq!(present.clone().into_iter().collect_options(), Some(vec![1, 2, 3]));
/// assert_eq!(present.into_iter().product_options(), Some(6));
///
/// let gap = vec![Some(1), None, Some(3)];
/// assert_eq!(gap.into_iter().sum_options(), None);
/// ```
pub trait OptionIterExt<T>: Iterator<Item = Option<T>> + Sized {
    /// Collects all payloads into a vector, or returns `None` at the first `None`.
    ///
    /// Order is preserved.
    fn collect_options(self) -> Option<Vec<T>> {
        self.collect()
    }

    /// Folds payloads pairwise, starting from the first element.
    ///
    /// Returns `Ok(None)` if any element is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidState::empty_sequence`] when the iterator is empty.
    fn try_aggregate_options<F>(mut self, function: F) -> Result<Option<T>, InvalidState>
    where
        F: FnMut(T, T) -> T,
    {
        match self.next() {
            None => Err(InvalidState::empty_sequence()),
            Some(None) => Ok(None),
            Some(Some(first)) => Ok(self.fold_options(first, function)),
        }
    }

    /// Folds payloads pairwise, starting from the first element.
    ///
    /// # Panics
    ///
    /// Panics with an [`InvalidState`] payload when the iterator is empty.
    #[track_caller]
    fn aggregate_options<F>(self, function: F) -> Option<T>
    where
        F: FnMut(T, T) -> T,
    {
        match self.try_aggregate_options(function) {
            Ok(aggregate) => aggregate,
            Err(error) => error.raise(),
        }
    }

    /// Folds payloads into `seed`. An empty iterator yields `Some(seed)`.
    fn fold_options<A, F>(mut self, seed: A, mut function: F) -> Option<A>
    where
        F: FnMut(A, T) -> A,
    {
        self.try_fold(seed, |accumulator, item| {
            item.map(|value| function(accumulator, value))
        })
    }

    /// Folds payloads into `seed`, awaiting `function` once per element.
    ///
    /// The iterator is pulled lazily, one element after each awaited step, so the
    /// first `None` stops the fold before `function` sees any later element.
    #[cfg(feature = "async")]
    fn fold_options_async<A, F, FFut>(
        self,
        seed: A,
        mut function: F,
    ) -> impl Future<Output = Option<A>>
    where
        F: FnMut(A, T) -> FFut,
        FFut: Future<Output = A>,
    {
        async move {
            let mut accumulator = seed;
            for item in self {
                accumulator = function(accumulator, item?).await;
            }
            Some::<A>(accumulator)
        }
    }

    /// Asynchronous counterpart of [`try_aggregate_options`](Self::try_aggregate_options).
    ///
    /// # Errors
    ///
    /// Resolves to [`InvalidState::empty_sequence`] when the iterator is empty.
    #[cfg(feature = "async")]
    fn try_aggregate_options_async<F, FFut>(
        mut self,
        function: F,
    ) -> impl Future<Output = Result<Option<T>, InvalidState>>
    where
        F: FnMut(T, T) -> FFut,
        FFut: Future<Output = T>,
    {
        async move {
            match self.next() {
                None => Err(InvalidState::empty_sequence()),
                Some(None) => Ok(None),
                Some(Some(first)) => Ok(self.fold_options_async(first, function).await),
            }
        }
    }

    /// Asynchronous counterpart of [`aggregate_options`](Self::aggregate_options).
    ///
    /// # Panics
    ///
    /// Panics with an [`InvalidState`] payload, when polled, if the iterator is empty.
    #[cfg(feature = "async")]
    fn aggregate_options_async<F, FFut>(self, function: F) -> impl Future<Output = Option<T>>
    where
        F: FnMut(T, T) -> FFut,
        FFut: Future<Output = T>,
    {
        async move {
            match self.try_aggregate_options_async(function).await {
                Ok(aggregate) => aggregate,
                Err(error) => error.raise(),
            }
        }
    }

    /// Adds all payloads. An empty iterator yields `Some(T::ZERO)`.
    ///
    /// # Panics
    ///
    /// Primitive integers overflow as `+` does, which panics in debug builds. Use
    /// [`Wrapping`](std::num::Wrapping) payloads for wrapping arithmetic.
    fn sum_options(self) -> Option<T>
    where
        T: Numeric,
    {
        self.fold_options(T::ZERO, |total, value| total + value)
    }

    /// Multiplies all payloads. An empty iterator yields `Some(T::ONE)`.
    ///
    /// # Panics
    ///
    /// Primitive integers overflow as `*` does, which panics in debug builds. Use
    /// [`Wrapping`](std::num::Wrapping) payloads for wrapping arithmetic.
    fn product_options(self) -> Option<T>
    where
        T: Numeric,
    {
        self.fold_options(T::ONE, |total, value| total * value)
    }
}

impl<I, T> OptionIterExt<T> for I where I: Iterator<Item = Option<T>> {}
