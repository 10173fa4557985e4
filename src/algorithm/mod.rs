//! # Algorithms
//!
//! The two-phase simplex method and everything it needs besides the problem data: configuration,
//! errors and small helpers.
pub mod error;
pub mod options;
pub mod two_phase;
pub mod utilities;
