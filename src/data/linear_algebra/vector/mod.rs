//! # Vector types for linear programs
//!
//! Tableau rows are stored densely: a simplex tableau for a small, exactly solved problem has few
//! enough entries that sparsity doesn't pay off.
pub use dense::Dense;

mod dense;
