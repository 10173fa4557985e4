//! # The two-phase simplex method
//!
//! A linear program in standard form is solved in two phases. The first phase finds a basic
//! feasible solution by minimizing the sum of the artificial variables. The second phase starts
//! from that basis and optimizes the actual objective function.
//!
//! Both phases share the primal simplex loop in this module. It is generic over the pivot rule,
//! which is chosen once per solve.
use std::fmt::{Display, Formatter, Result as FormatResult};

use enum_map::Enum;
use log::{debug, trace, warn};

use crate::algorithm::error::SolveError;
use crate::algorithm::options::Options;
use crate::algorithm::two_phase::observer::{NoObserver, PivotEvent, PivotObserver};
use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, PivotRule, SteepestDescentAlongVariable};
use crate::algorithm::two_phase::tableau::{debug_assert_in_basic_feasible_solution_state, Tableau};
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::linear_program::solution::{Solution, Statistics};
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::traits::Field;

pub mod observer;
pub mod phase_one;
pub mod phase_two;
pub mod strategy;
pub mod tableau;

/// The two phases of the method.
#[derive(Enum, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Searching for a basic feasible solution.
    One,
    /// Optimizing the objective function, starting from a basic feasible solution.
    Two,
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        f.write_str(match self {
            Phase::One => "phase one",
            Phase::Two => "phase two",
        })
    }
}

/// Solve a linear program.
///
/// # Errors
///
/// If the problem is infeasible or unbounded, or when the iteration limit is reached.
pub fn solve<F: Field>(program: &LinearProgram<F>, options: &Options) -> Result<Solution<F>, SolveError> {
    solve_with_observer(program, options, &mut NoObserver)
}

/// Solve a linear program, reporting every pivot to an observer.
///
/// # Arguments
///
/// * `program`: Problem to solve.
/// * `options`: Pivot rule, iteration limit and the non-negativity check.
/// * `observer`: Called after each pivot, in both phases.
///
/// # Errors
///
/// If the problem is infeasible or unbounded, or when the iteration limit is reached.
pub fn solve_with_observer<F, O>(
    program: &LinearProgram<F>,
    options: &Options,
    observer: &mut O,
) -> Result<Solution<F>, SolveError>
where
    F: Field,
    O: PivotObserver<F>,
{
    if options.avoid_cycling {
        solve_with_rule::<_, FirstProfitable, _>(program, options, observer)
    } else {
        solve_with_rule::<_, SteepestDescentAlongVariable, _>(program, options, observer)
    }
}

fn solve_with_rule<F, PR, O>(
    program: &LinearProgram<F>,
    options: &Options,
    observer: &mut O,
) -> Result<Solution<F>, SolveError>
where
    F: Field,
    PR: PivotRule<F>,
    O: PivotObserver<F>,
{
    debug!(
        "solving a problem with {} variables and {} constraints ({})",
        program.nr_variables(), program.nr_constraints(), program.objective().direction(),
    );

    let mut progress = Progress::new(options.max_iterations, observer);
    let standard_form = StandardForm::new(program);

    let mut tableau = phase_one::primal::<_, PR, _>(standard_form, &mut progress)?;
    let has_alternate_optimum = phase_two::primal::<_, PR, _>(&mut tableau, program.objective(), &mut progress)?;

    let statistics = progress.into_statistics();
    debug!(
        "optimal after {} pivots ({} in phase one, {} degenerate)",
        statistics.total_pivots(), statistics.pivots(Phase::One), statistics.degenerate_pivots(),
    );

    Solution::from_tableau(
        &tableau,
        program.objective(),
        options.enforce_non_negative,
        has_alternate_optimum,
        statistics,
    )
}

/// Bookkeeping shared by both phases: pivot counts, the limit on them, and the observer.
pub(crate) struct Progress<'a, O> {
    max_iterations: usize,
    statistics: Statistics,
    observer: &'a mut O,
}

impl<'a, O> Progress<'a, O> {
    fn new(max_iterations: usize, observer: &'a mut O) -> Self {
        Self { max_iterations, statistics: Statistics::default(), observer }
    }

    /// Whether another pivot is allowed.
    fn check_limit(&self) -> Result<(), SolveError> {
        if self.statistics.total_pivots() >= self.max_iterations {
            debug!("iteration limit of {} reached", self.max_iterations);
            Err(SolveError::IterationLimitExceeded { limit: self.max_iterations })
        } else {
            Ok(())
        }
    }

    fn into_statistics(self) -> Statistics {
        self.statistics
    }
}

/// Reoptimizes a tableau with the primal simplex method.
///
/// Pivots until no column has an improving relative cost.
///
/// # Arguments
///
/// * `tableau`: Tableau in a basic feasible state, with a priced out objective row.
/// * `direction`: Whether the objective row is minimized or maximized.
/// * `phase`: For statistics, logging and the observer.
///
/// # Errors
///
/// `Unbounded` if an improving column is not limited by any row, `IterationLimitExceeded` if
/// another pivot is needed after the maximum number of pivots.
pub(crate) fn primal<F, PR, O>(
    tableau: &mut Tableau<F>,
    direction: Objective,
    phase: Phase,
    progress: &mut Progress<'_, O>,
) -> Result<(), SolveError>
where
    F: Field,
    PR: PivotRule<F>,
    O: PivotObserver<F>,
{
    let mut rule = PR::new();

    loop {
        debug_assert_in_basic_feasible_solution_state(tableau);

        let Some(column) = rule.select_primal_pivot_column(tableau, direction) else {
            debug!(
                "{}: no improving column left, objective value {}",
                phase, tableau.objective_function_value(),
            );
            return Ok(());
        };

        let Some((row, ratio)) = tableau.select_primal_pivot_row(column) else {
            let variable = tableau.variable(column);
            debug!("{}: column {} ({}) is not bounded by any row", phase, column, variable);
            return Err(SolveError::Unbounded { column, variable });
        };

        progress.check_limit()?;

        let degenerate = ratio.is_zero();
        if degenerate {
            warn!(
                "{}: degenerate pivot, {} enters in row {} without changing the objective value",
                phase, tableau.variable(column), row,
            );
        }

        let leaving = tableau.bring_into_basis(column, row);
        progress.statistics.record_pivot(phase, degenerate);
        let iteration = progress.statistics.total_pivots();
        trace!(
            "{} iteration {}: {} enters, {} leaves in row {}, objective value {}",
            phase, iteration, tableau.variable(column), tableau.variable(leaving), row,
            tableau.objective_function_value(),
        );

        progress.observer.after_pivot(&PivotEvent {
            phase,
            iteration,
            entering: tableau.variable(column),
            leaving: tableau.variable(leaving),
            degenerate,
            tableau,
        });
    }
}
