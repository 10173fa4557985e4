//! # Linear programs in "general form"
//!
//! Data structure describing a linear program as provided by the user: any mix of constraint types,
//! a direction of optimization and nonnegative variables. It is immutable once created and is
//! converted into standard form by the solver.
use crate::algorithm::error::{InputError, SolveError};
use crate::algorithm::options::Options;
use crate::algorithm::two_phase;
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::traits::Field;

/// A single linear (in)equality `<coefficients, x> (relation) rhs`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Constraint<F> {
    coefficients: Vec<F>,
    constraint_type: ConstraintType,
    rhs: F,
}

impl<F> Constraint<F> {
    /// Create a new constraint.
    ///
    /// # Arguments
    ///
    /// * `coefficients`: One coefficient for each variable of the problem.
    /// * `constraint_type`: Relation between the left- and right-hand side.
    /// * `rhs`: Right-hand side. Should be nonnegative; it is not normalized by the solver.
    pub fn new(coefficients: Vec<F>, constraint_type: ConstraintType, rhs: F) -> Self {
        Self { coefficients, constraint_type, rhs }
    }

    /// Create a constraint `<coefficients, x> <= rhs`.
    pub fn less(coefficients: Vec<F>, rhs: F) -> Self {
        Self::new(coefficients, ConstraintType::Less, rhs)
    }

    /// Create a constraint `<coefficients, x> >= rhs`.
    pub fn greater(coefficients: Vec<F>, rhs: F) -> Self {
        Self::new(coefficients, ConstraintType::Greater, rhs)
    }

    /// Create a constraint `<coefficients, x> == rhs`.
    pub fn equal(coefficients: Vec<F>, rhs: F) -> Self {
        Self::new(coefficients, ConstraintType::Equal, rhs)
    }

    #[allow(missing_docs)]
    pub fn coefficients(&self) -> &[F] {
        &self.coefficients
    }

    #[allow(missing_docs)]
    pub fn constraint_type(&self) -> ConstraintType {
        self.constraint_type
    }

    #[allow(missing_docs)]
    pub fn rhs(&self) -> &F {
        &self.rhs
    }
}

/// Linear function to optimize, `<coefficients, x> + constant`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ObjectiveFunction<F> {
    direction: Objective,
    coefficients: Vec<F>,
    /// Constant in the cost function.
    ///
    /// Doesn't influence the optimal solution, only the reported objective value.
    constant: F,
}

impl<F: Field> ObjectiveFunction<F> {
    /// Create a new objective function without a constant term.
    pub fn new(direction: Objective, coefficients: Vec<F>) -> Self {
        Self { direction, coefficients, constant: F::zero() }
    }

    /// Objective function to minimize.
    pub fn minimize(coefficients: Vec<F>) -> Self {
        Self::new(Objective::Minimize, coefficients)
    }

    /// Objective function to maximize.
    pub fn maximize(coefficients: Vec<F>) -> Self {
        Self::new(Objective::Maximize, coefficients)
    }

    /// Add a constant term to the objective function.
    #[must_use]
    pub fn with_constant(mut self, constant: F) -> Self {
        self.constant = constant;
        self
    }
}

impl<F> ObjectiveFunction<F> {
    #[allow(missing_docs)]
    pub fn direction(&self) -> Objective {
        self.direction
    }

    #[allow(missing_docs)]
    pub fn coefficients(&self) -> &[F] {
        &self.coefficients
    }

    #[allow(missing_docs)]
    pub fn constant(&self) -> &F {
        &self.constant
    }
}

/// A linear program in general form.
///
/// All variables are implicitly nonnegative. The dimensions are checked at creation, such that the
/// solver can rely on them.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LinearProgram<F> {
    nr_variables: usize,
    /// Ordered; the order determines the order of the slack and artificial columns.
    constraints: Vec<Constraint<F>>,
    objective: ObjectiveFunction<F>,
}

impl<F: Field> LinearProgram<F> {
    /// Create a new linear program.
    ///
    /// # Arguments
    ///
    /// * `nr_variables`: Number of (original) variables, at least one.
    /// * `constraints`: Each with `nr_variables` coefficients.
    /// * `objective`: With `nr_variables` coefficients.
    ///
    /// # Errors
    ///
    /// An `InputError` if any of the dimensions doesn't match.
    pub fn new(
        nr_variables: usize,
        constraints: Vec<Constraint<F>>,
        objective: ObjectiveFunction<F>,
    ) -> Result<Self, InputError> {
        if nr_variables == 0 {
            return Err(InputError::NoVariables);
        }

        if let Some((constraint, found)) = constraints.iter()
            .map(|constraint| constraint.coefficients.len())
            .enumerate()
            .find(|&(_, length)| length != nr_variables) {
            return Err(InputError::ConstraintLength { constraint, expected: nr_variables, found });
        }

        if objective.coefficients.len() != nr_variables {
            return Err(InputError::ObjectiveLength {
                expected: nr_variables,
                found: objective.coefficients.len(),
            });
        }

        Ok(Self { nr_variables, constraints, objective })
    }

    /// Solve this linear program with the two-phase simplex method.
    ///
    /// # Errors
    ///
    /// If the problem is infeasible or unbounded, or if the iteration limit was reached.
    pub fn solve(&self, options: &Options) -> Result<Solution<F>, SolveError> {
        two_phase::solve(self, options)
    }
}

impl<F> LinearProgram<F> {
    /// Number of original variables.
    pub fn nr_variables(&self) -> usize {
        self.nr_variables
    }

    /// Number of constraints.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }

    #[allow(missing_docs)]
    pub fn constraints(&self) -> &[Constraint<F>] {
        &self.constraints
    }

    #[allow(missing_docs)]
    pub fn objective(&self) -> &ObjectiveFunction<F> {
        &self.objective
    }
}
