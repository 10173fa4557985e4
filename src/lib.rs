//! # An exact linear program solver
//!
//! Linear programs are solved using the two-phase tableau Simplex Method, in exact rational
//! arithmetic. There is no rounding: results are exact, and the solver compares values with zero
//! directly.
//!
//! ```
//! use exact_simplex::{Constraint, ObjectiveFunction, Options, RB, solve};
//!
//! let solution = solve(
//!     2,
//!     vec![
//!         Constraint::less(vec![RB!(1), RB!(1)], RB!(6)),
//!         Constraint::less(vec![RB!(5), RB!(9)], RB!(45)),
//!     ],
//!     ObjectiveFunction::maximize(vec![RB!(5), RB!(6)]),
//!     &Options::default(),
//! ).unwrap();
//!
//! assert_eq!(solution.objective_value(), &RB!(135, 4));
//! assert_eq!(solution.value(1), Some(&RB!(9, 4)));
//! ```
//!
//! The solver logs through the `log` facade; it doesn't install a logger itself.
#![warn(missing_docs)]

pub use relp_num::{RationalBig, RB};

pub use crate::algorithm::error::{InfeasibilityCause, InputError, SolveError};
pub use crate::algorithm::options::Options;
pub use crate::algorithm::two_phase::{Phase, solve_with_observer};
pub use crate::algorithm::two_phase::observer::{NoObserver, PivotEvent, PivotObserver};
pub use crate::data::linear_program::elements::{ConstraintType, Objective, Variable};
pub use crate::data::linear_program::general_form::{Constraint, LinearProgram, ObjectiveFunction};
pub use crate::data::linear_program::solution::{Solution, Statistics};
pub use crate::data::number_types::traits::Field;

pub mod algorithm;
pub mod data;


/// Solve a linear program over nonnegative variables.
///
/// # Arguments
///
/// * `nr_variables`: Number of variables, at least one.
/// * `constraints`: Each with `nr_variables` coefficients.
/// * `objective`: Function to optimize, with `nr_variables` coefficients.
/// * `options`: Solver configuration.
///
/// # Return value
///
/// An optimal solution, with values for the variables `x1` until `x{nr_variables}`.
///
/// # Errors
///
/// `InvalidInput` if the dimensions don't match, otherwise if the problem is infeasible or
/// unbounded, or when the iteration limit is reached.
pub fn solve<F: Field>(
    nr_variables: usize,
    constraints: Vec<Constraint<F>>,
    objective: ObjectiveFunction<F>,
    options: &Options,
) -> Result<Solution<F>, SolveError> {
    LinearProgram::new(nr_variables, constraints, objective)?.solve(options)
}
