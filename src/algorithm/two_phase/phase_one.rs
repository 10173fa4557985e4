//! # Phase one: finding a basic feasible solution
//!
//! The artificial variables provide an initial basis for all rows that lack a slack column with a
//! positive coefficient. Their sum is minimized; when it reaches zero and no artificial variable is
//! still basic, the current basis is feasible for the original problem.
use log::debug;

use crate::algorithm::error::{InfeasibilityCause, SolveError};
use crate::algorithm::two_phase::{Phase, Progress};
use crate::algorithm::two_phase::observer::PivotObserver;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_algebra::vector::Dense;
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::traits::Field;

/// Create the tableau of the first phase.
///
/// The objective row is the cost row of "minimize the sum of all artificial variables", priced out
/// with respect to the initial basis. Because each artificial column has cost `1` and is basic in
/// the row it was created for, pricing out comes down to adding those rows to the objective row.
///
/// # Return value
///
/// The tableau, and whether it contains any artificial columns.
pub fn artificial_tableau<F: Field>(standard_form: StandardForm<F>) -> (Tableau<F>, bool) {
    let (layout, rows, basis_indices, artificial_rows) = standard_form.into_parts();
    let width = layout.nr_columns() + 1;

    let mut tableau = Tableau::new(layout, Dense::zeros(width), rows, basis_indices);
    if artificial_rows.is_empty() {
        return (tableau, false);
    }

    let mut objective = Dense::zeros(width);
    for j in layout.artificial_range() {
        objective[j] = -F::one();
    }
    tableau.set_objective_row(objective);
    for row in artificial_rows {
        tableau.add_row_to_objective(row);
    }

    (tableau, true)
}

/// Compute a basic feasible solution.
///
/// # Return value
///
/// A tableau without artificial columns, in which the basis is feasible. Its objective row still
/// needs to be set.
///
/// # Errors
///
/// `Infeasible` if the artificial variables can't all be made nonbasic at value zero. Errors of the
/// simplex loop are propagated.
pub(crate) fn primal<F, PR, O>(
    standard_form: StandardForm<F>,
    progress: &mut Progress<'_, O>,
) -> Result<Tableau<F>, SolveError>
where
    F: Field,
    PR: PivotRule<F>,
    O: PivotObserver<F>,
{
    let (mut tableau, has_artificial) = artificial_tableau(standard_form);
    if !has_artificial {
        debug!("{}: the slack variables form a feasible basis", Phase::One);
        return Ok(tableau);
    }

    debug!(
        "{}: {} artificial variables, initial infeasibility {}",
        Phase::One, tableau.layout().nr_artificial(), tableau.objective_function_value(),
    );
    super::primal::<_, PR, _>(&mut tableau, Objective::Minimize, Phase::One, progress)?;

    if !tableau.objective_function_value().is_zero() {
        debug!("{}: minimal infeasibility {}", Phase::One, tableau.objective_function_value());
        return Err(SolveError::Infeasible(InfeasibilityCause::ArtificialCostNotZero));
    }

    let layout = tableau.layout();
    if let Some((row, &column)) = tableau.basis_indices().iter()
        .enumerate()
        .find(|&(_, &column)| layout.is_artificial(column)) {
        return Err(SolveError::Infeasible(InfeasibilityCause::ArtificialVariableInBasis {
            row,
            variable: layout.variable(column),
        }));
    }

    Ok(tableau.remove_artificial_columns())
}
