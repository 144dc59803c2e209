//! # optres
//!
//! Combinators, folds, asynchronous lifting and scope guards for the standard
//! library's [`Option`] and [`Result`].
//!
//! ## Overview
//!
//! `Option` and `Result` are already tagged unions in Rust, and std ships most of
//! the combinators a functional programmer expects. This crate fills in the rest:
//!
//! - **Extension traits**: [`OptionExt`](option::OptionExt) and
//!   [`ResultExt`](result::ResultExt) add `tap`, `zip_map`, success-first ordering
//!   and extractors that fail with a typed [`InvalidState`](error::InvalidState).
//! - **Folds**: [`OptionIterExt`](option::OptionIterExt) and
//!   [`ResultIterExt`](result::ResultIterExt) collect, aggregate, sum and multiply
//!   sequences of containers, short-circuiting on the first absence or failure.
//! - **Panic bridge**: [`try_catch`](result::try_catch) and friends turn a panic
//!   into an `Err`, optionally only for one payload type.
//! - **Async lifting**: [`PendingOption`](pending::PendingOption) and
//!   [`PendingResult`](pending::PendingResult) carry every combinator over to
//!   pending containers and asynchronous callbacks.
//! - **Scope guards**: [`defer`](scope::defer), [`defer_with`](scope::defer_with)
//!   and their async counterparts run cleanup exactly once.
//!
//! ## Feature Flags
//!
//! - `async`: Pending wrappers and async helpers (enabled by default)
//! - `tracing`: Emit `tracing` events from the panic bridge and async guards
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use optres::prelude::*;
//!
//! let doubled = Some(5).map(|x| x * 2).tap(|x| assert_eq!(*x, 10));
//! assert_eq!(doubled.unwrap_state(), 10);
//!
//! let total = vec![Some(1), Some(2), Some(3)].into_iter().sum_options();
//! assert_eq!(total, Some(6));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the extension traits, error types and helpers.
///
/// # Usage
///
/// ```rust
/// use optres::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;
    pub use crate::numeric::*;
    pub use crate::option::*;
    pub use crate::result::*;
    pub use crate::scope::*;

    #[cfg(feature = "async")]
    pub use crate::pending::*;
}

pub mod error;
pub mod numeric;
pub mod option;
pub mod result;
pub mod scope;

#[cfg(feature = "async")]
pub mod pending;
