//! # Linear algebra primitives
//!
//! Linear algebra primitives used to represent the rows of the simplex tableau.
pub mod vector;
