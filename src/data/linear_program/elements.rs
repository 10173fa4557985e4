//! # Building blocks to describe linear programs.
use std::fmt::{Display, Formatter, Result as FormatResult};

/// A `Constraint` is a type of (in)equality.
///
/// These are read "from constraint to constraint value", meaning:
/// * When a constraint is `ConstraintType::Equal`, the equation is `<a, x> == b`
/// * When a constraint is `ConstraintType::Less`, the equation is `<a, x> <= b`
/// * When a constraint is `ConstraintType::Greater`, the equation is `<a, x> >= b`
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ConstraintType {
    Equal,
    Greater,
    Less,
}

impl ConstraintType {
    /// Whether a constraint of this type gets a slack or surplus column in standard form.
    pub fn needs_slack(self) -> bool {
        match self {
            ConstraintType::Less | ConstraintType::Greater => true,
            ConstraintType::Equal => false,
        }
    }

    /// Whether a constraint of this type gets an artificial column in standard form.
    ///
    /// Only for `ConstraintType::Less` does the slack column provide an initial basis column.
    pub fn needs_artificial(self) -> bool {
        match self {
            ConstraintType::Greater | ConstraintType::Equal => true,
            ConstraintType::Less => false,
        }
    }
}

impl Display for ConstraintType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        f.write_str(match self {
            ConstraintType::Equal => "=",
            ConstraintType::Greater => ">=",
            ConstraintType::Less => "<=",
        })
    }
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Objective {
    Maximize,
    #[default]
    Minimize,
}

impl Display for Objective {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        f.write_str(match self {
            Objective::Maximize => "maximize",
            Objective::Minimize => "minimize",
        })
    }
}

/// Label of a column of the tableau.
///
/// The contained index is zero-based within its block; the `Display` implementation is one-based,
/// such that the first original variable reads as `x1`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Variable {
    /// A variable of the problem as provided by the user.
    Original(usize),
    /// Slack (for `<=` constraints) or surplus (for `>=` constraints) variable.
    Slack(usize),
    /// Variable only present during the first phase, providing an initial basis.
    Artificial(usize),
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        match self {
            Variable::Original(i) => write!(f, "x{}", i + 1),
            Variable::Slack(i) => write!(f, "s{}", i + 1),
            Variable::Artificial(i) => write!(f, "a{}", i + 1),
        }
    }
}
