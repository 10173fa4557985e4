//! # Representation of optimal solutions
//!
//! Once the second phase terminates, the values of the original variables are read from the final
//! tableau. Slack, surplus and artificial variables are not part of the solution.
use std::fmt::{Display, Formatter, Result as FormatResult};

use enum_map::EnumMap;
use itertools::Itertools;

use crate::algorithm::error::{InfeasibilityCause, SolveError};
use crate::algorithm::two_phase::Phase;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::elements::Variable;
use crate::data::linear_program::general_form::ObjectiveFunction;
use crate::data::number_types::traits::Field;

/// Represents an optimal solution to a linear program.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Solution<F> {
    /// Value of the objective function for this solution, including any constant that was included
    /// in the original problem.
    objective_value: F,
    /// Values of the original variables, ordered by index.
    values: Vec<F>,
    /// Whether a non-basic column had a zero reduced cost at optimality.
    has_alternate_optimum: bool,
    statistics: Statistics,
}

impl<F: Field> Solution<F> {
    /// Read the solution from an optimal tableau.
    ///
    /// Basic variables take the right-hand side value of the row they are basic in, all other
    /// variables are zero.
    ///
    /// # Arguments
    ///
    /// * `tableau`: Optimal tableau, without artificial columns.
    /// * `objective`: Objective function that was optimized, for its constant.
    /// * `enforce_non_negative`: Whether to verify that all values are nonnegative.
    ///
    /// # Errors
    ///
    /// An infeasibility error if nonnegativity is enforced and a variable is negative.
    pub(crate) fn from_tableau(
        tableau: &Tableau<F>,
        objective: &ObjectiveFunction<F>,
        enforce_non_negative: bool,
        has_alternate_optimum: bool,
        statistics: Statistics,
    ) -> Result<Self, SolveError> {
        let nr_variables = tableau.layout().nr_variables();

        let mut values = vec![F::zero(); nr_variables];
        for (row, &column) in tableau.basis_indices().iter().enumerate() {
            if column < nr_variables {
                values[column] = tableau.rhs(row).clone();
            }
        }

        if enforce_non_negative {
            if let Some(j) = values.iter().position(|value| value.is_negative()) {
                return Err(SolveError::Infeasible(InfeasibilityCause::NegativeValue {
                    variable: Variable::Original(j),
                }));
            }
        }

        Ok(Self {
            objective_value: tableau.objective_function_value().clone() + objective.constant(),
            values,
            has_alternate_optimum,
            statistics,
        })
    }
}

impl<F> Solution<F> {
    /// The optimal value of the objective function.
    pub fn objective_value(&self) -> &F {
        &self.objective_value
    }

    /// Value of an original variable.
    ///
    /// # Arguments
    ///
    /// * `variable`: One-based index of the variable, such that `1` refers to `x1`.
    ///
    /// # Return value
    ///
    /// `None` if there is no such variable.
    pub fn value(&self, variable: usize) -> Option<&F> {
        variable.checked_sub(1).and_then(|i| self.values.get(i))
    }

    /// Values of all original variables, ordered by index.
    pub fn values(&self) -> &[F] {
        &self.values
    }

    /// Iterate over `(one-based variable index, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item=(usize, &F)> {
        self.values.iter().enumerate().map(|(i, value)| (i + 1, value))
    }

    /// Whether another basic solution with the same objective value exists.
    pub fn has_alternate_optimum(&self) -> bool {
        self.has_alternate_optimum
    }

    /// Pivot counts of the solve that produced this solution.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}

impl<F: Display> Display for Solution<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        writeln!(f, "objective value: {}", self.objective_value)?;
        write!(
            f,
            "{}",
            self.values.iter().enumerate()
                .map(|(j, value)| format!("{} = {}", Variable::Original(j), value))
                .join(", "),
        )
    }
}

/// Counters describing the work done during a solve.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct Statistics {
    pivots: EnumMap<Phase, usize>,
    degenerate_pivots: usize,
}

impl Statistics {
    pub(crate) fn record_pivot(&mut self, phase: Phase, degenerate: bool) {
        self.pivots[phase] += 1;
        if degenerate {
            self.degenerate_pivots += 1;
        }
    }

    /// Number of pivots done in one phase.
    pub fn pivots(&self, phase: Phase) -> usize {
        self.pivots[phase]
    }

    /// Number of pivots done in both phases together.
    pub fn total_pivots(&self) -> usize {
        self.pivots.values().sum()
    }

    /// Number of pivots with a minimum ratio of zero, that didn't change the objective value.
    pub fn degenerate_pivots(&self) -> usize {
        self.degenerate_pivots
    }
}
