//! Small problems with a known, finite optimum.
use exact_simplex::{Constraint, ObjectiveFunction, Options, Phase, RationalBig, RB, solve};
use exact_simplex::LinearProgram;

fn production_constraints() -> Vec<Constraint<RationalBig>> {
    vec![
        Constraint::less(vec![RB!(2), RB!(1)], RB!(18)),
        Constraint::less(vec![RB!(2), RB!(3)], RB!(42)),
        Constraint::less(vec![RB!(3), RB!(1)], RB!(24)),
    ]
}

#[test]
fn minimize_and_maximize_are_symmetric() {
    let minimized = solve(
        2,
        production_constraints(),
        ObjectiveFunction::minimize(vec![RB!(-3), RB!(-2)]),
        &Options::default(),
    ).unwrap();
    let maximized = solve(
        2,
        production_constraints(),
        ObjectiveFunction::maximize(vec![RB!(3), RB!(2)]),
        &Options::default(),
    ).unwrap();

    assert_eq!(minimized.objective_value(), &RB!(-33));
    assert_eq!(maximized.objective_value(), &RB!(33));
    assert_eq!(minimized.values(), &[RB!(3), RB!(12)]);
    assert_eq!(maximized.values(), minimized.values());
    assert_eq!(minimized.statistics().pivots(Phase::One), 0);
}

#[test]
fn mixed_constraints() {
    let solution = solve(
        3,
        vec![
            Constraint::less(vec![RB!(2), RB!(-1), RB!(2)], RB!(4)),
            Constraint::greater(vec![RB!(-2), RB!(3), RB!(-1)], RB!(5)),
            Constraint::greater(vec![RB!(1), RB!(-1), RB!(2)], RB!(1)),
        ],
        ObjectiveFunction::maximize(vec![RB!(1), RB!(-1), RB!(1)]),
        &Options::default(),
    ).unwrap();

    assert_eq!(solution.objective_value(), &RB!(3, 5));
    assert_eq!(solution.value(1), Some(&RB!(0)));
    assert_eq!(solution.value(2), Some(&RB!(14, 5)));
    assert_eq!(solution.value(3), Some(&RB!(17, 5)));
    assert!(!solution.has_alternate_optimum());
}

#[test]
fn three_variables() {
    let solution = solve(
        3,
        vec![
            Constraint::less(vec![RB!(4), RB!(5), RB!(3)], RB!(12)),
            Constraint::less(vec![RB!(3), RB!(4), RB!(2)], RB!(10)),
            Constraint::less(vec![RB!(4), RB!(2), RB!(1)], RB!(8)),
        ],
        ObjectiveFunction::minimize(vec![RB!(-6), RB!(-4), RB!(-3)]),
        &Options::default(),
    ).unwrap();
    assert_eq!(solution.objective_value(), &RB!(-15));
    assert_eq!(solution.values(), &[RB!(3, 2), RB!(0), RB!(2)]);

    let solution = solve(
        3,
        vec![
            Constraint::less(vec![RB!(3), RB!(6), RB!(1)], RB!(6)),
            Constraint::less(vec![RB!(4), RB!(2), RB!(1)], RB!(4)),
            Constraint::less(vec![RB!(1), RB!(-1), RB!(1)], RB!(3)),
        ],
        ObjectiveFunction::minimize(vec![RB!(-2), RB!(3), RB!(-1)]),
        &Options::default(),
    ).unwrap();
    assert_eq!(solution.objective_value(), &-RB!(10, 3));
    assert_eq!(solution.values(), &[RB!(1, 3), RB!(0), RB!(8, 3)]);
}

#[test]
fn fractional_optimum() {
    let solution = solve(
        2,
        vec![
            Constraint::less(vec![RB!(1), RB!(1)], RB!(6)),
            Constraint::less(vec![RB!(5), RB!(9)], RB!(45)),
        ],
        ObjectiveFunction::maximize(vec![RB!(5), RB!(6)]),
        &Options::default(),
    ).unwrap();

    assert_eq!(solution.objective_value(), &RB!(135, 4));
    assert_eq!(solution.iter().collect::<Vec<_>>(), vec![(1, &RB!(9, 4)), (2, &RB!(15, 4))]);
}

#[test]
fn equality_and_greater() {
    let solution = solve(
        2,
        vec![
            Constraint::greater(vec![RB!(1), RB!(0)], RB!(2)),
            Constraint::equal(vec![RB!(0), RB!(1)], RB!(3)),
        ],
        ObjectiveFunction::minimize(vec![RB!(1), RB!(1)]),
        &Options::default(),
    ).unwrap();

    assert_eq!(solution.objective_value(), &RB!(5));
    assert_eq!(solution.values(), &[RB!(2), RB!(3)]);
    assert!(solution.statistics().pivots(Phase::One) > 0);
}

#[test]
fn objective_constant() {
    let program = LinearProgram::new(
        2,
        production_constraints(),
        ObjectiveFunction::minimize(vec![RB!(-3), RB!(-2)]).with_constant(RB!(7, 2)),
    ).unwrap();
    let solution = program.solve(&Options::default()).unwrap();

    assert_eq!(solution.objective_value(), &-RB!(59, 2));
    assert_eq!(solution.values(), &[RB!(3), RB!(12)]);
}

#[test]
fn alternate_optimum() {
    let solution = solve(
        2,
        vec![Constraint::less(vec![RB!(1), RB!(1)], RB!(4))],
        ObjectiveFunction::maximize(vec![RB!(1), RB!(1)]),
        &Options::default(),
    ).unwrap();

    assert_eq!(solution.objective_value(), &RB!(4));
    assert_eq!(solution.values(), &[RB!(4), RB!(0)]);
    assert!(solution.has_alternate_optimum());
}

#[test]
fn blands_rule_terminates_on_cycling_problem() {
    let solution = solve(
        4,
        vec![
            Constraint::less(vec![RB!(1, 2), -RB!(11, 2), -RB!(5, 2), RB!(9)], RB!(0)),
            Constraint::less(vec![RB!(1, 2), -RB!(3, 2), -RB!(1, 2), RB!(1)], RB!(0)),
            Constraint::less(vec![RB!(1), RB!(0), RB!(0), RB!(0)], RB!(1)),
        ],
        ObjectiveFunction::minimize(vec![RB!(-10), RB!(57), RB!(9), RB!(24)]),
        &Options::default().with_avoid_cycling(true),
    ).unwrap();

    assert_eq!(solution.objective_value(), &RB!(-1));
    assert_eq!(solution.values(), &[RB!(1), RB!(0), RB!(1), RB!(0)]);
    assert!(solution.statistics().degenerate_pivots() > 0);
}
