//! # Reasons for a solve to fail
//!
//! A linear program that is consistently described is either infeasible, unbounded, or has a finite
//! optimum. Only the latter is returned as a value; all other outcomes are errors.
use thiserror::Error;

use crate::data::linear_program::elements::Variable;

/// A `SolveError` is returned when no optimal solution could be determined.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum SolveError {
    /// There is no assignment of the variables that satisfies all constraints.
    #[error("the problem is infeasible: {0}")]
    Infeasible(InfeasibilityCause),
    /// The objective function can be improved without limit.
    #[error("the problem is unbounded: column {column} ({variable}) can enter the basis without bound")]
    Unbounded {
        /// Index of the tableau column that could not be bounded by any row.
        column: usize,
        /// Label of that column.
        variable: Variable,
    },
    /// More pivots were needed than allowed.
    ///
    /// Without an anti-cycling pivot rule, this is typically caused by cycling. The solve can be
    /// retried with `Options::with_avoid_cycling(true)`.
    #[error("no optimum was found within {limit} pivots")]
    IterationLimitExceeded {
        /// The maximum number of pivots that was configured.
        limit: usize,
    },
    /// The problem was not described consistently.
    #[error(transparent)]
    InvalidInput(#[from] InputError),
}

/// Which of the infeasibility checks failed.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum InfeasibilityCause {
    /// After the first phase, the sum of artificial variables could not be reduced to zero.
    #[error("the artificial variables could not be driven to zero")]
    ArtificialCostNotZero,
    /// After the first phase, an artificial variable is still basic.
    #[error("artificial variable {variable} is still basic in row {row}")]
    ArtificialVariableInBasis {
        /// Constraint row (zero-based) in which the variable is basic.
        row: usize,
        /// Label of the artificial variable.
        variable: Variable,
    },
    /// A variable has a negative value while all variables are required to be nonnegative.
    #[error("variable {variable} has a negative value")]
    NegativeValue {
        /// Label of the variable.
        variable: Variable,
    },
}

/// An `InputError` is returned when the dimensions of a linear program are inconsistent.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum InputError {
    /// A linear program needs at least one variable.
    #[error("a linear program needs at least one variable")]
    NoVariables,
    /// A constraint has a different number of coefficients than there are variables.
    #[error("constraint {constraint} has {found} coefficients, expected {expected}")]
    ConstraintLength {
        /// Index of the constraint (zero-based).
        constraint: usize,
        /// The number of variables.
        expected: usize,
        /// The number of coefficients of the constraint.
        found: usize,
    },
    /// The objective function has a different number of coefficients than there are variables.
    #[error("the objective function has {found} coefficients, expected {expected}")]
    ObjectiveLength {
        /// The number of variables.
        expected: usize,
        /// The number of coefficients of the objective function.
        found: usize,
    },
}
