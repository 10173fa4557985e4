//! # The Simplex tableau
//!
//! Contains the dense simplex tableau and the elementary operations which can be performed upon it.
//! All values, including the right-hand side, are stored explicitly: the objective row and one row
//! per constraint, each of length `nr_columns() + 1`.
//!
//! The objective row holds the reduced costs in "internal form": when the problem is to minimize
//! `c^T x`, the row starts as `-c` such that a positive reduced cost indicates that bringing the
//! column into the basis decreases the objective. The last value of the objective row is then
//! exactly the objective value of the current basic solution.
use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::data::linear_algebra::vector::Dense;
use crate::data::linear_program::elements::Variable;
use crate::data::linear_program::standard_form::ColumnLayout;
use crate::data::number_types::traits::Field;

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// It owns all data that describes the current basis.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Tableau<F> {
    layout: ColumnLayout,
    /// Relative costs and (as the last value) the objective value.
    objective: Dense<F>,
    /// Constraint rows with the right-hand side as the last value.
    constraints: Vec<Dense<F>>,
    /// For each row, the index of the column that is basic in it.
    basis_indices: Vec<usize>,
}

impl<F: Field> Tableau<F> {
    /// Create a new tableau.
    ///
    /// # Arguments
    ///
    /// * `layout`: Column blocks of this tableau.
    /// * `objective`: Objective row, of length `layout.nr_columns() + 1`.
    /// * `constraints`: Constraint rows, each of length `layout.nr_columns() + 1`.
    /// * `basis_indices`: For each row, the column basic in it.
    pub fn new(
        layout: ColumnLayout,
        objective: Dense<F>,
        constraints: Vec<Dense<F>>,
        basis_indices: Vec<usize>,
    ) -> Self {
        debug_assert_eq!(objective.len(), layout.nr_columns() + 1);
        debug_assert!(constraints.iter().all(|row| row.len() == layout.nr_columns() + 1));
        debug_assert_eq!(basis_indices.len(), constraints.len());
        debug_assert!(basis_indices.iter().all(|&j| j < layout.nr_columns()));

        Self { layout, objective, constraints, basis_indices }
    }

    /// Replace the objective row.
    ///
    /// The row is not yet consistent with the basis; call `price_out_basis` afterwards.
    pub fn set_objective_row(&mut self, objective: Dense<F>) {
        debug_assert_eq!(objective.len(), self.width());

        self.objective = objective;
    }

    /// Add a constraint row to the objective row.
    pub fn add_row_to_objective(&mut self, row: usize) {
        debug_assert!(row < self.nr_rows());

        self.objective.add_assign_vector(&self.constraints[row]);
    }

    /// Make the relative cost of all basic columns zero.
    ///
    /// For each basic column with a nonzero value in the objective row, a multiple of the row it is
    /// basic in is subtracted from the objective row.
    pub fn price_out_basis(&mut self) {
        for (row, &column) in self.basis_indices.iter().enumerate() {
            if !self.objective[column].is_zero() {
                let factor = self.objective[column].clone();
                self.objective.sub_multiple(&factor, &self.constraints[row]);
            }
        }
    }

    /// Determine the row to pivot on, given a column.
    ///
    /// This is the ratio test: only rows with a strictly positive value in the column are
    /// considered, and amongst those, the one with the lowest ratio between the right-hand side
    /// and that value is chosen. On ties, the row with the lowest index wins.
    ///
    /// # Arguments
    ///
    /// * `column`: Index of the column that will enter the basis.
    ///
    /// # Return value
    ///
    /// The row index together with the minimum ratio, or `None` if no row limits the column, in
    /// which case the problem is unbounded.
    pub fn select_primal_pivot_row(&self, column: usize) -> Option<(usize, F)> {
        debug_assert!(column < self.nr_columns());

        let rhs = self.nr_columns();
        let mut min_values: Option<(usize, F)> = None;
        for (i, row) in self.constraints.iter().enumerate() {
            if row[column].is_positive() {
                let ratio = row[rhs].clone() / &row[column];
                match &min_values {
                    Some((_, min_ratio)) if &ratio >= min_ratio => {},
                    _ => min_values = Some((i, ratio)),
                }
            }
        }

        min_values
    }

    /// Brings a column into the basis by updating the tableau.
    ///
    /// The pivot row is divided by the pivot value, after which a multiple of it is subtracted
    /// from every other row (the objective row included) to make the column a unit vector.
    ///
    /// # Arguments
    ///
    /// * `pivot_column_index`: Index of the column that enters the basis.
    /// * `pivot_row_index`: Row in which the column becomes basic, such as given by
    /// `select_primal_pivot_row`.
    ///
    /// # Return value
    ///
    /// The index of the column that left the basis.
    pub fn bring_into_basis(&mut self, pivot_column_index: usize, pivot_row_index: usize) -> usize {
        debug_assert!(pivot_column_index < self.nr_columns());
        debug_assert!(pivot_row_index < self.nr_rows());
        debug_assert!(!self.constraints[pivot_row_index][pivot_column_index].is_zero());
        debug_assert!(!self.is_in_basis(pivot_column_index));

        let pivot_value = self.constraints[pivot_row_index][pivot_column_index].clone();
        self.constraints[pivot_row_index].div_assign_scalar(&pivot_value);
        let pivot_row = self.constraints[pivot_row_index].clone();

        for (i, row) in self.constraints.iter_mut().enumerate() {
            if i != pivot_row_index && !row[pivot_column_index].is_zero() {
                let factor = row[pivot_column_index].clone();
                row.sub_multiple(&factor, &pivot_row);
            }
        }
        if !self.objective[pivot_column_index].is_zero() {
            let factor = self.objective[pivot_column_index].clone();
            self.objective.sub_multiple(&factor, &pivot_row);
        }

        std::mem::replace(&mut self.basis_indices[pivot_row_index], pivot_column_index)
    }

    /// Create a new, smaller tableau without the artificial columns.
    ///
    /// The objective row is copied as well, but will typically be replaced.
    ///
    /// # Return value
    ///
    /// A freshly allocated tableau with `nr_variables + nr_slack + 1` values per row.
    #[must_use]
    pub fn remove_artificial_columns(self) -> Self {
        debug_assert!(self.basis_indices.iter().all(|&j| !self.layout.is_artificial(j)));

        let layout = self.layout.without_artificial();
        let rhs = self.nr_columns();
        let keep = || layout.original_range()
            .chain(layout.slack_range())
            .chain(std::iter::once(rhs));

        Self::new(
            layout,
            self.objective.select(keep()),
            self.constraints.iter().map(|row| row.select(keep())).collect(),
            self.basis_indices,
        )
    }

    /// Relative cost of a column, that is, its value in the objective row.
    pub fn relative_cost(&self, j: usize) -> &F {
        debug_assert!(j < self.nr_columns());

        &self.objective[j]
    }

    /// Current right-hand side value of a constraint row.
    pub fn rhs(&self, i: usize) -> &F {
        debug_assert!(i < self.nr_rows());

        &self.constraints[i][self.nr_columns()]
    }

    /// Value of the objective function of the current basic solution.
    ///
    /// Does not include any constant from the problem.
    pub fn objective_function_value(&self) -> &F {
        &self.objective[self.nr_columns()]
    }
}

impl<F> Tableau<F> {
    /// Number of constraint rows, excluding the objective row.
    pub fn nr_rows(&self) -> usize {
        self.constraints.len()
    }

    /// Number of columns, excluding the right-hand side.
    pub fn nr_columns(&self) -> usize {
        self.layout.nr_columns()
    }

    /// Number of values stored per row.
    fn width(&self) -> usize {
        self.nr_columns() + 1
    }

    /// Column blocks of this tableau.
    pub fn layout(&self) -> ColumnLayout {
        self.layout
    }

    /// Label of a column.
    pub fn variable(&self, j: usize) -> Variable {
        self.layout.variable(j)
    }

    /// The objective row, right-hand side included.
    pub fn objective_row(&self) -> &Dense<F> {
        &self.objective
    }

    /// A constraint row, right-hand side included.
    pub fn constraint_row(&self, i: usize) -> &Dense<F> {
        &self.constraints[i]
    }

    /// A column over all constraint rows, without the objective row.
    pub fn column(&self, j: usize) -> Dense<F> where F: Clone {
        debug_assert!(j < self.nr_columns());

        Dense::new(self.constraints.iter().map(|row| row[j].clone()).collect())
    }

    /// For each row, the index of the column basic in it.
    pub fn basis_indices(&self) -> &[usize] {
        &self.basis_indices
    }

    /// Whether a column is currently in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        debug_assert!(column < self.nr_columns());

        self.basis_indices.contains(&column)
    }
}

/// Check whether the tableau is in a consistent basic state.
///
/// Every row should have the same length and every basic column should be the unit vector of the
/// row it is basic in, with a zero relative cost.
///
/// Only used for debug purposes.
pub fn debug_assert_in_basic_feasible_solution_state<F: Field>(tableau: &Tableau<F>) {
    debug_assert_eq!(tableau.objective.len(), tableau.width());
    for (i, row) in tableau.constraints.iter().enumerate() {
        debug_assert_eq!(row.len(), tableau.width(), "row {} has the wrong length", i);
    }

    for (i, &j) in tableau.basis_indices.iter().enumerate() {
        let column = tableau.column(j);
        debug_assert!(column.is_unit_vector(i), "column {} is not equal to e_{}: {}", j, i, column);
        debug_assert!(
            tableau.objective[j].is_zero(),
            "relative cost of basic column {} is not zero", j,
        );
    }
}

impl<F: Display> Display for Tableau<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        let label_header = "BV";
        let objective_label = "z";

        let headers = (0..self.nr_columns())
            .map(|j| self.variable(j).to_string())
            .chain(std::iter::once("RHS".to_string()))
            .collect::<Vec<_>>();
        let objective = self.objective.iter().map(ToString::to_string).collect::<Vec<_>>();
        let rows = self.constraints.iter()
            .map(|row| row.iter().map(ToString::to_string).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let labels = self.basis_indices.iter()
            .map(|&j| self.variable(j).to_string())
            .collect::<Vec<_>>();

        let label_width = labels.iter()
            .map(String::len)
            .chain([label_header.len(), objective_label.len()])
            .max()
            .unwrap_or_default();
        let column_width = (0..headers.len()).map(|j| {
            rows.iter()
                .map(|row| row[j].len())
                .chain([headers[j].len(), objective[j].len()])
                .max()
                .unwrap_or_default()
        }).collect::<Vec<_>>();
        let total_width = label_width + 2 + column_width.iter().map(|width| width + 1).sum::<usize>();

        writeln!(f, "=== Tableau ===")?;
        write_line(f, (label_header, label_width), &headers, &column_width)?;
        writeln!(f, "{}", "-".repeat(total_width))?;
        write_line(f, (objective_label, label_width), &objective, &column_width)?;
        writeln!(f, "{}", "-".repeat(total_width))?;
        for (label, row) in labels.iter().zip(&rows) {
            write_line(f, (label, label_width), row, &column_width)?;
        }

        Ok(())
    }
}

/// Write a right-aligned label followed by right-aligned values.
fn write_line(
    f: &mut Formatter<'_>,
    (label, label_width): (&str, usize),
    values: &[String],
    widths: &[usize],
) -> FormatResult {
    write!(f, "{0:>width$} |", label, width = label_width)?;
    for (value, width) in values.iter().zip(widths) {
        write!(f, " {0:>width$}", value, width = width)?;
    }
    writeln!(f)
}
