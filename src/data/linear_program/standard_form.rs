//! # Linear programs in standard form
//!
//! A linear program in standard form has only equality constraints over nonnegative variables.
//! Inequalities are made equalities by adding a slack (for `<=`) or surplus (for `>=`) variable.
//! Constraints for which no column readily provides an initial basis column (`>=` and `=`) get an
//! artificial variable, which is driven out of the problem in the first phase.
//!
//! Columns are laid out in blocks, in this order: the original variables, the slack and surplus
//! variables, the artificial variables. Within each block, columns are ordered by the constraint
//! they originate from.
use std::ops::Range;

use log::{debug, warn};

use crate::data::linear_algebra::vector::Dense;
use crate::data::linear_program::elements::{ConstraintType, Variable};
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::number_types::traits::Field;

/// Sizes of the column blocks of a tableau.
///
/// The right-hand side is not counted as a column; it is stored directly after the last column.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct ColumnLayout {
    nr_variables: usize,
    nr_slack: usize,
    nr_artificial: usize,
}

impl ColumnLayout {
    /// Create a new layout from the sizes of the three column blocks.
    pub fn new(nr_variables: usize, nr_slack: usize, nr_artificial: usize) -> Self {
        Self { nr_variables, nr_slack, nr_artificial }
    }

    /// Number of original variables.
    pub fn nr_variables(&self) -> usize {
        self.nr_variables
    }

    /// Number of slack and surplus variables.
    pub fn nr_slack(&self) -> usize {
        self.nr_slack
    }

    /// Number of artificial variables.
    pub fn nr_artificial(&self) -> usize {
        self.nr_artificial
    }

    /// Total number of columns, excluding the right-hand side.
    pub fn nr_columns(&self) -> usize {
        self.nr_variables + self.nr_slack + self.nr_artificial
    }

    /// Indices of the columns of the original variables.
    pub fn original_range(&self) -> Range<usize> {
        0..self.nr_variables
    }

    /// Indices of the slack and surplus columns.
    pub fn slack_range(&self) -> Range<usize> {
        self.nr_variables..(self.nr_variables + self.nr_slack)
    }

    /// Indices of the artificial columns.
    pub fn artificial_range(&self) -> Range<usize> {
        (self.nr_variables + self.nr_slack)..self.nr_columns()
    }

    /// Whether a column is artificial.
    pub fn is_artificial(&self, column: usize) -> bool {
        self.artificial_range().contains(&column)
    }

    /// Label of a column.
    ///
    /// # Arguments
    ///
    /// * `column`: Index in range `0` until `self.nr_columns()`.
    pub fn variable(&self, column: usize) -> Variable {
        debug_assert!(column < self.nr_columns());

        if column < self.nr_variables {
            Variable::Original(column)
        } else if column < self.nr_variables + self.nr_slack {
            Variable::Slack(column - self.nr_variables)
        } else {
            Variable::Artificial(column - self.nr_variables - self.nr_slack)
        }
    }

    /// The layout after all artificial columns are removed.
    #[must_use]
    pub fn without_artificial(&self) -> Self {
        Self { nr_artificial: 0, ..*self }
    }
}

/// A linear program in standard form, ready to be turned into a tableau.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct StandardForm<F> {
    layout: ColumnLayout,
    /// One row per constraint, each of length `layout.nr_columns() + 1` (the last value being the
    /// right-hand side).
    rows: Vec<Dense<F>>,
    /// For each row, the column that is initially basic in it.
    basis_indices: Vec<usize>,
    /// Rows that received an artificial variable, sorted.
    artificial_rows: Vec<usize>,
}

impl<F: Field> StandardForm<F> {
    /// Convert a linear program to standard form.
    ///
    /// Right-hand sides are copied as they are; they are not negated to make them nonnegative.
    pub fn new(program: &LinearProgram<F>) -> Self {
        let constraints = program.constraints();

        let nr_slack = constraints.iter()
            .filter(|constraint| constraint.constraint_type().needs_slack())
            .count();
        let nr_artificial = constraints.iter()
            .filter(|constraint| constraint.constraint_type().needs_artificial())
            .count();
        let layout = ColumnLayout::new(program.nr_variables(), nr_slack, nr_artificial);
        let width = layout.nr_columns() + 1;

        let mut next_slack = layout.slack_range().start;
        let mut next_artificial = layout.artificial_range().start;
        let mut rows = Vec::with_capacity(constraints.len());
        let mut basis_indices = Vec::with_capacity(constraints.len());
        let mut artificial_rows = Vec::with_capacity(nr_artificial);

        for (i, constraint) in constraints.iter().enumerate() {
            let mut row = Dense::zeros(width);
            for (j, coefficient) in constraint.coefficients().iter().enumerate() {
                row[j] = coefficient.clone();
            }

            let basis_column = match constraint.constraint_type() {
                ConstraintType::Less => {
                    row[next_slack] = F::one();
                    next_slack += 1;
                    next_slack - 1
                },
                ConstraintType::Greater => {
                    row[next_slack] = -F::one();
                    next_slack += 1;
                    row[next_artificial] = F::one();
                    next_artificial += 1;
                    artificial_rows.push(i);
                    next_artificial - 1
                },
                ConstraintType::Equal => {
                    row[next_artificial] = F::one();
                    next_artificial += 1;
                    artificial_rows.push(i);
                    next_artificial - 1
                },
            };
            if constraint.rhs().is_negative() {
                warn!(
                    "constraint {} has negative right-hand side {}, the initial basis is not feasible",
                    i, constraint.rhs(),
                );
            }
            row[width - 1] = constraint.rhs().clone();

            rows.push(row);
            basis_indices.push(basis_column);
        }
        debug_assert_eq!(next_slack, layout.slack_range().end);
        debug_assert_eq!(next_artificial, layout.artificial_range().end);

        debug!(
            "standard form: {} rows, {} original, {} slack and {} artificial columns",
            rows.len(), layout.nr_variables(), layout.nr_slack(), layout.nr_artificial(),
        );

        Self { layout, rows, basis_indices, artificial_rows }
    }
}

impl<F> StandardForm<F> {
    /// Sizes of the column blocks.
    pub fn layout(&self) -> ColumnLayout {
        self.layout
    }

    /// Constraint rows, including the right-hand side as the last value.
    pub fn rows(&self) -> &[Dense<F>] {
        &self.rows
    }

    /// Initially basic column for each row.
    ///
    /// That is the artificial column for rows that need one, and the slack column otherwise.
    pub fn basis_indices(&self) -> &[usize] {
        &self.basis_indices
    }

    /// Rows that received an artificial variable.
    pub fn artificial_rows(&self) -> &[usize] {
        &self.artificial_rows
    }

    pub(crate) fn into_parts(self) -> (ColumnLayout, Vec<Dense<F>>, Vec<usize>, Vec<usize>) {
        (self.layout, self.rows, self.basis_indices, self.artificial_rows)
    }
}
