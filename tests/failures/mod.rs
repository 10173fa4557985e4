//! Problems without an optimal solution, and problems that are described incorrectly.
use exact_simplex::{Constraint, InfeasibilityCause, InputError, ObjectiveFunction, Options, RationalBig, RB, SolveError, solve, Variable};

fn beale() -> (Vec<Constraint<RationalBig>>, ObjectiveFunction<RationalBig>) {
    (
        vec![
            Constraint::less(vec![RB!(1, 2), -RB!(11, 2), -RB!(5, 2), RB!(9)], RB!(0)),
            Constraint::less(vec![RB!(1, 2), -RB!(3, 2), -RB!(1, 2), RB!(1)], RB!(0)),
            Constraint::less(vec![RB!(1), RB!(0), RB!(0), RB!(0)], RB!(1)),
        ],
        ObjectiveFunction::minimize(vec![RB!(-10), RB!(57), RB!(9), RB!(24)]),
    )
}

#[test]
fn infeasible() {
    let result = solve(
        3,
        vec![
            Constraint::less(vec![RB!(2), RB!(-1), RB!(-2)], RB!(4)),
            Constraint::greater(vec![RB!(-2), RB!(3), RB!(1)], RB!(5)),
            Constraint::greater(vec![RB!(1), RB!(-1), RB!(-1)], RB!(1)),
        ],
        ObjectiveFunction::maximize(vec![RB!(1), RB!(-1), RB!(1)]),
        &Options::default(),
    );
    assert_eq!(result, Err(SolveError::Infeasible(InfeasibilityCause::ArtificialCostNotZero)));

    let result = solve(
        2,
        vec![
            Constraint::greater(vec![RB!(1), RB!(1)], RB!(2)),
            Constraint::less(vec![RB!(1), RB!(1)], RB!(1)),
        ],
        ObjectiveFunction::minimize(vec![RB!(1), RB!(1)]),
        &Options::default(),
    );
    assert_eq!(result, Err(SolveError::Infeasible(InfeasibilityCause::ArtificialCostNotZero)));
}

#[test]
fn redundant_equality_keeps_artificial_basic() {
    let result = solve(
        2,
        vec![
            Constraint::equal(vec![RB!(1), RB!(1)], RB!(2)),
            Constraint::equal(vec![RB!(1), RB!(1)], RB!(2)),
        ],
        ObjectiveFunction::minimize(vec![RB!(1), RB!(0)]),
        &Options::default(),
    );
    assert_eq!(result, Err(SolveError::Infeasible(InfeasibilityCause::ArtificialVariableInBasis {
        row: 1,
        variable: Variable::Artificial(1),
    })));
}

#[test]
fn negative_right_hand_side() {
    let constraints = vec![Constraint::equal(vec![RB!(1)], RB!(-1))];
    let objective = ObjectiveFunction::minimize(vec![RB!(1)]);

    let result = solve(1, constraints.clone(), objective.clone(), &Options::default());
    assert_eq!(result, Err(SolveError::Infeasible(InfeasibilityCause::NegativeValue {
        variable: Variable::Original(0),
    })));

    let solution = solve(1, constraints, objective, &Options::default().with_enforce_non_negative(false)).unwrap();
    assert_eq!(solution.values(), &[RB!(-1)]);
    assert_eq!(solution.objective_value(), &RB!(-1));
}

#[test]
fn negative_right_hand_side_absorbed_by_slack() {
    // The slack column takes the value -1, only the original variables are checked
    let solution = solve(
        2,
        vec![Constraint::less(vec![RB!(1), RB!(1)], RB!(-1))],
        ObjectiveFunction::minimize(vec![RB!(1), RB!(1)]),
        &Options::default(),
    ).unwrap();

    assert_eq!(solution.objective_value(), &RB!(0));
    assert_eq!(solution.values(), &[RB!(0), RB!(0)]);
}

#[test]
fn unbounded() {
    let result = solve(
        4,
        vec![
            Constraint::equal(vec![-RB!(1, 3), RB!(0), RB!(1), RB!(1, 3)], RB!(5, 3)),
            Constraint::equal(vec![-RB!(2, 3), RB!(1), RB!(0), -RB!(1, 3)], RB!(1, 3)),
        ],
        ObjectiveFunction::minimize(vec![-RB!(3, 5), RB!(0), RB!(0), -RB!(1, 3)])
            .with_constant(-RB!(1, 3)),
        &Options::default(),
    );
    assert_eq!(result, Err(SolveError::Unbounded { column: 0, variable: Variable::Original(0) }));

    let result = solve(
        2,
        vec![
            Constraint::less(vec![RB!(-1), RB!(1)], RB!(2)),
            Constraint::greater(vec![RB!(-2), RB!(3)], RB!(1)),
        ],
        ObjectiveFunction::maximize(vec![RB!(1), RB!(1)]),
        &Options::default(),
    );
    assert_eq!(result, Err(SolveError::Unbounded { column: 0, variable: Variable::Original(0) }));
}

#[test]
fn iteration_limit() {
    let (constraints, objective) = beale();
    let result = solve(4, constraints.clone(), objective.clone(), &Options::default());
    assert_eq!(result, Err(SolveError::IterationLimitExceeded { limit: 10_000 }));

    let result = solve(4, constraints, objective, &Options::default().with_max_iterations(2));
    assert_eq!(result, Err(SolveError::IterationLimitExceeded { limit: 2 }));
}

#[test]
fn zero_iterations_allowed() {
    let result = solve(
        1,
        vec![Constraint::less(vec![RB!(1)], RB!(1))],
        ObjectiveFunction::maximize(vec![RB!(1)]),
        &Options::default().with_max_iterations(0),
    );
    assert_eq!(result, Err(SolveError::IterationLimitExceeded { limit: 0 }));

    // Already optimal, no pivot needed
    let solution = solve(
        1,
        vec![Constraint::less(vec![RB!(1)], RB!(1))],
        ObjectiveFunction::minimize(vec![RB!(1)]),
        &Options::default().with_max_iterations(0),
    ).unwrap();
    assert_eq!(solution.values(), &[RB!(0)]);
}

#[test]
fn invalid_input() {
    let result = solve::<RationalBig>(0, vec![], ObjectiveFunction::minimize(vec![]), &Options::default());
    assert_eq!(result, Err(SolveError::InvalidInput(InputError::NoVariables)));

    let result = solve(
        2,
        vec![Constraint::less(vec![RB!(1), RB!(1), RB!(1)], RB!(1))],
        ObjectiveFunction::minimize(vec![RB!(1), RB!(1)]),
        &Options::default(),
    );
    assert_eq!(result, Err(SolveError::InvalidInput(InputError::ConstraintLength {
        constraint: 0,
        expected: 2,
        found: 3,
    })));

    let result = solve(
        2,
        vec![Constraint::less(vec![RB!(1), RB!(1)], RB!(1))],
        ObjectiveFunction::minimize(vec![RB!(1)]),
        &Options::default(),
    );
    assert_eq!(result, Err(SolveError::InvalidInput(InputError::ObjectiveLength { expected: 2, found: 1 })));
}
