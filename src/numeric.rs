//! The numeric capability used by `sum_*` and `product_*` folds.
//!
//! A [`Numeric`] type has an additive identity, a multiplicative identity, and
//! closed `+` and `*`. A payload type that does not implement it cannot be summed
//! or multiplied; the constraint is checked at compile time.
//!
//! # Laws
//!
//! ```text
//! T::ZERO + x == x
//! T::ONE * x == x
//! ```

use std::num::Wrapping;
use std::ops::{Add, Mul};

/// Types with additive and multiplicative identities.
///
/// # Implementing Numeric
///
/// ```rust
/// use optres::numeric::Numeric;
/// use std::ops::{Add, Mul};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Cents(i64);
///
/// impl Add for Cents {
///     type Output = Self;
///     fn add(self, other: Self) -> Self { Cents(self.0 + other.0) }
/// }
///
/// impl Mul for Cents {
///     type Output = Self;
///     fn mul(self, other: Self) -> Self { Cents(self.0 * other.0) }
/// }
///
/// impl Numeric for Cents {
///     const ZERO: Self = Cents(0);
///     const ONE: Self = Cents(1);
/// }
///
/// assert_eq!(Cents::ZERO + Cents(5), Cents(5));
/// ```
pub trait Numeric: Sized + Add<Output = Self> + Mul<Output = Self> {
    /// The additive identity.
    const ZERO: Self;

    /// The multiplicative identity.
    const ONE: Self;
}

macro_rules! impl_numeric {
    ($zero:expr, $one:expr => $($numeric:ty),+ $(,)?) => {
        $(
            impl Numeric for $numeric {
                const ZERO: Self = $zero;
                const ONE: Self = $one;
            }

            impl Numeric for Wrapping<$numeric> {
                const ZERO: Self = Wrapping($zero);
                const ONE: Self = Wrapping($one);
            }
        )+
    };
}

impl_numeric!(0, 1 => i8, i16, i32, i64, i128, isize);
impl_numeric!(0, 1 => u8, u16, u32, u64, u128, usize);

impl Numeric for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
}

impl Numeric for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
}
