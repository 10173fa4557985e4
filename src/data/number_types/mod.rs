//! # Number types
//!
//! The solver is defined over exact ordered fields. This module describes the operations that the
//! algorithms need from such a field; implementations are provided by the `relp-num` crate.
pub mod traits;
