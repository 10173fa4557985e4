//! Properties of the intermediate tableaus, checked after every pivot through an observer.
use exact_simplex::{Constraint, LinearProgram, ObjectiveFunction, Options, Phase, PivotEvent, RationalBig, RB, solve_with_observer, Variable};
use num_traits::Zero;

fn check_basis(event: &PivotEvent<'_, RationalBig>) {
    let tableau = event.tableau;
    let width = tableau.nr_columns() + 1;
    assert_eq!(tableau.objective_row().len(), width);

    for (i, &j) in tableau.basis_indices().iter().enumerate() {
        assert!(tableau.objective_row()[j].is_zero(), "iteration {}: basic column {} has a cost", event.iteration, j);
        assert!(tableau.column(j).is_unit_vector(i), "iteration {}: column {} is not e_{}", event.iteration, j, i);
    }
    for k in 0..tableau.nr_rows() {
        assert_eq!(tableau.constraint_row(k).len(), width);
    }

    for i in 0..tableau.nr_rows() {
        assert!(tableau.rhs(i) >= &RB!(0), "iteration {}: negative rhs in row {}", event.iteration, i);
    }
}

/// Solve and check the basis after every pivot.
///
/// # Return value
///
/// The events as `(phase, entering, leaving, objective value after the pivot, artificial basic)`.
fn solve_checked(program: &LinearProgram<RationalBig>, options: &Options) -> Vec<(Phase, Variable, Variable, RationalBig, bool)> {
    let mut events = Vec::new();
    let result = solve_with_observer(program, options, &mut |event: &PivotEvent<'_, RationalBig>| {
        check_basis(event);
        let tableau = event.tableau;
        let artificial_basic = tableau.basis_indices().iter().any(|&j| tableau.layout().is_artificial(j));
        events.push((event.phase, event.entering, event.leaving, tableau.objective_function_value().clone(), artificial_basic));
    });
    assert!(result.is_ok());

    events
}

fn mixed() -> LinearProgram<RationalBig> {
    LinearProgram::new(
        3,
        vec![
            Constraint::less(vec![RB!(2), RB!(-1), RB!(2)], RB!(4)),
            Constraint::greater(vec![RB!(-2), RB!(3), RB!(-1)], RB!(5)),
            Constraint::greater(vec![RB!(1), RB!(-1), RB!(2)], RB!(1)),
        ],
        ObjectiveFunction::maximize(vec![RB!(1), RB!(-1), RB!(1)]),
    ).unwrap()
}

#[test]
fn phase_one_ends_feasible() {
    let events = solve_checked(&mixed(), &Options::default());

    let (_, _, _, infeasibility, artificial_basic) = events.iter()
        .rev()
        .find(|(phase, ..)| *phase == Phase::One)
        .cloned()
        .unwrap();
    assert_eq!(infeasibility, RB!(0));
    assert!(!artificial_basic);

    assert!(events.iter()
        .filter(|(phase, ..)| *phase == Phase::Two)
        .all(|&(_, entering, _, _, artificial_basic)| {
            !artificial_basic && !matches!(entering, Variable::Artificial(_))
        }));
}

#[test]
fn objective_improves_monotonically() {
    let events = solve_checked(&mixed(), &Options::default());

    let phase_one = events.iter().filter(|(phase, ..)| *phase == Phase::One).map(|event| &event.3).collect::<Vec<_>>();
    assert!(phase_one.windows(2).all(|pair| pair[0] >= pair[1]));
    let phase_two = events.iter().filter(|(phase, ..)| *phase == Phase::Two).map(|event| &event.3).collect::<Vec<_>>();
    assert!(phase_two.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn unit_columns_while_cycling_is_avoided() {
    let program = LinearProgram::new(
        4,
        vec![
            Constraint::less(vec![RB!(1, 2), -RB!(11, 2), -RB!(5, 2), RB!(9)], RB!(0)),
            Constraint::less(vec![RB!(1, 2), -RB!(3, 2), -RB!(1, 2), RB!(1)], RB!(0)),
            Constraint::less(vec![RB!(1), RB!(0), RB!(0), RB!(0)], RB!(1)),
        ],
        ObjectiveFunction::minimize(vec![RB!(-10), RB!(57), RB!(9), RB!(24)]),
    ).unwrap();

    let events = solve_checked(&program, &Options::default().with_avoid_cycling(true));
    assert!(!events.is_empty());
    assert!(events.iter().all(|(phase, ..)| *phase == Phase::Two));
    assert!(events.iter().all(|(_, entering, leaving, ..)| entering != leaving));
}

#[test]
fn observer_without_pivots() {
    let program = LinearProgram::new(
        1,
        vec![Constraint::less(vec![RB!(1)], RB!(1))],
        ObjectiveFunction::minimize(vec![RB!(1)]),
    ).unwrap();

    let mut calls = 0;
    let solution = solve_with_observer(&program, &Options::default(), &mut |_: &PivotEvent<'_, RationalBig>| calls += 1)
        .unwrap();
    assert_eq!(calls, 0);
    assert!(solution.value(1).is_some_and(|value| value.is_zero()));
    assert_eq!(solution.objective_value(), &RB!(0));
}
