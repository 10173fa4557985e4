//! # Pivot rules
//!
//! Strategies for selecting the column that enters the basis in the primal simplex method.
//!
//! Once the column has been selected, a row needs to be found. That decision is made by the ratio
//! test of the tableau, independent of the rule.
use crate::algorithm::two_phase::tableau::Tableau;
use crate::algorithm::utilities::{index_of_max, index_of_min};
use crate::data::linear_program::elements::Objective;
use crate::data::number_types::traits::Field;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
pub trait PivotRule<F> {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Arguments
    ///
    /// * `tableau`: Tableau with an objective row in internal form.
    /// * `direction`: Whether the objective row is being minimized or maximized.
    ///
    /// # Return value
    ///
    /// The index of a column with an improving relative cost, or `None` if the current basis is
    /// optimal.
    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>, direction: Objective) -> Option<usize>;
}

/// Whether bringing a column with this relative cost into the basis improves the objective.
///
/// When minimizing, the relative costs in internal form are improving when strictly positive. When
/// maximizing, they are improving when strictly negative.
pub fn is_improving<F: Field>(relative_cost: &F, direction: Objective) -> bool {
    match direction {
        Objective::Minimize => relative_cost.is_positive(),
        Objective::Maximize => relative_cost.is_negative(),
    }
}

/// Simply pivot on the first column which has an improving relative cost.
///
/// This is Bland's rule: together with the lowest-index tie break in the ratio test, it guarantees
/// that the simplex method terminates.
pub struct FirstProfitable;
impl<F: Field> PivotRule<F> for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>, direction: Objective) -> Option<usize> {
        (0..tableau.nr_columns())
            .find(|&j| is_improving(tableau.relative_cost(j), direction))
    }
}

/// Pivot on the column with the most improving relative cost.
///
/// On ties, the column with the lowest index is chosen. This rule may cycle on degenerate problems.
pub struct SteepestDescentAlongVariable;
impl<F: Field> PivotRule<F> for SteepestDescentAlongVariable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>, direction: Objective) -> Option<usize> {
        let costs = &tableau.objective_row().as_slice()[..tableau.nr_columns()];
        let candidate = match direction {
            Objective::Minimize => index_of_max(costs),
            Objective::Maximize => index_of_min(costs),
        };

        candidate.filter(|&j| is_improving(&costs[j], direction))
    }
}
