//! # Phase two: optimizing
//!
//! Starting from the feasible basis found in the first phase, the actual objective function is
//! optimized.
use log::{debug, warn};

use crate::algorithm::error::SolveError;
use crate::algorithm::two_phase::{Phase, Progress};
use crate::algorithm::two_phase::observer::PivotObserver;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_algebra::vector::Dense;
use crate::data::linear_program::general_form::ObjectiveFunction;
use crate::data::number_types::traits::Field;

/// Replace the objective row of a feasible tableau by the cost row of the objective function.
///
/// The coefficients are negated, slack columns get cost zero, and the row is priced out with
/// respect to the current basis, such that the last value is the objective value of the current
/// basic solution.
pub fn set_objective<F: Field>(tableau: &mut Tableau<F>, objective: &ObjectiveFunction<F>) {
    debug_assert_eq!(tableau.layout().nr_artificial(), 0);
    debug_assert_eq!(objective.coefficients().len(), tableau.layout().nr_variables());

    let mut row = Dense::zeros(tableau.nr_columns() + 1);
    for (j, coefficient) in objective.coefficients().iter().enumerate() {
        row[j] = -coefficient.clone();
    }
    tableau.set_objective_row(row);
    tableau.price_out_basis();
}

/// Nonbasic column with a zero relative cost, if there is any.
///
/// At an optimum, bringing such a column into the basis leads to another basic solution with the
/// same objective value.
pub fn alternate_optimum_column<F: Field>(tableau: &Tableau<F>) -> Option<usize> {
    (0..tableau.nr_columns())
        .filter(|&j| !tableau.is_in_basis(j))
        .find(|&j| tableau.relative_cost(j).is_zero())
}

/// Optimize the objective function.
///
/// # Arguments
///
/// * `tableau`: Feasible tableau without artificial columns.
/// * `objective`: Objective function to optimize, in the direction it specifies.
///
/// # Return value
///
/// Whether the optimum found is not unique.
///
/// # Errors
///
/// `Unbounded` or `IterationLimitExceeded`, as determined by the simplex loop.
pub(crate) fn primal<F, PR, O>(
    tableau: &mut Tableau<F>,
    objective: &ObjectiveFunction<F>,
    progress: &mut Progress<'_, O>,
) -> Result<bool, SolveError>
where
    F: Field,
    PR: PivotRule<F>,
    O: PivotObserver<F>,
{
    set_objective(tableau, objective);
    debug!(
        "{}: {} the objective function, initial value {}",
        Phase::Two, objective.direction(), tableau.objective_function_value(),
    );

    super::primal::<_, PR, _>(tableau, objective.direction(), Phase::Two, progress)?;

    let alternate = alternate_optimum_column(tableau);
    if let Some(j) = alternate {
        warn!(
            "{}: alternate optimum, nonbasic column {} ({}) has a zero relative cost",
            Phase::Two, j, tableau.variable(j),
        );
    }

    Ok(alternate.is_some())
}
