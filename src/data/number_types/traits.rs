//! # Traits
//!
//! The simplex method is defined over the ordered fields. All tableau entries are elements of such a
//! field, and all algorithmic logic in this crate is written against the `Field` trait defined here.
//!
//! Only exact types should be used: the solver compares values with zero directly, without any
//! tolerance. The default element type is `relp_num::RationalBig`.
use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

/// Basic ordered field operations with `Self` and with references to `Self`.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait Field:
    PartialEq +
    Eq +
    PartialOrd +
    Ord +
    Zero + // Additive identity
    Neg<Output=Self> + // Additive inverse
    One + // Multiplicative identity
    // First operation
    Add<Self, Output=Self> +
    for<'r> Add<&'r Self, Output=Self> +
    for<'r> AddAssign<&'r Self> +
    // First operation inverse
    Sub<Self, Output=Self> +
    for<'r> Sub<&'r Self, Output=Self> +
    for<'r> SubAssign<&'r Self> +
    // Second operation
    Mul<Self, Output=Self> +
    for<'r> Mul<&'r Self, Output=Self> +
    // Second operation inverse
    Div<Self, Output=Self> +
    for<'r> Div<&'r Self, Output=Self> +
    for<'r> DivAssign<&'r Self> +
    // Practicalities
    Clone +
    Display +
    Debug +
{
    /// Whether this value is strictly larger than zero.
    fn is_positive(&self) -> bool {
        self > &Self::zero()
    }

    /// Whether this value is strictly smaller than zero.
    fn is_negative(&self) -> bool {
        self < &Self::zero()
    }
}

impl<T> Field for T
where
    T: PartialEq + Eq + PartialOrd + Ord +
        Zero + Neg<Output=T> + One +
        Add<T, Output=T> + for<'r> Add<&'r T, Output=T> + for<'r> AddAssign<&'r T> +
        Sub<T, Output=T> + for<'r> Sub<&'r T, Output=T> + for<'r> SubAssign<&'r T> +
        Mul<T, Output=T> + for<'r> Mul<&'r T, Output=T> +
        Div<T, Output=T> + for<'r> Div<&'r T, Output=T> + for<'r> DivAssign<&'r T> +
        Clone + Display + Debug,
{
}
