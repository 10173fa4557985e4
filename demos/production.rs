//! Production planning with two products and three scarce resources.
//!
//! Each unit of product one earns 3 and product two earns 2. Every pivot of the solver is printed,
//! followed by the optimal production plan.
use exact_simplex::{Constraint, LinearProgram, ObjectiveFunction, Options, PivotEvent, RationalBig, RB, solve_with_observer};

fn main() {
    let program = LinearProgram::new(
        2,
        vec![
            // Machine hours
            Constraint::less(vec![RB!(2), RB!(1)], RB!(18)),
            // Labour
            Constraint::less(vec![RB!(2), RB!(3)], RB!(42)),
            // Material
            Constraint::less(vec![RB!(3), RB!(1)], RB!(24)),
        ],
        ObjectiveFunction::maximize(vec![RB!(3), RB!(2)]),
    ).expect("dimensions match");

    let mut print_pivot = |event: &PivotEvent<'_, RationalBig>| {
        println!(
            "{} iteration {}: {} enters, {} leaves{}",
            event.phase, event.iteration, event.entering, event.leaving,
            if event.degenerate { " (degenerate)" } else { "" },
        );
        println!("{}", event.tableau);
    };

    match solve_with_observer(&program, &Options::default(), &mut print_pivot) {
        Ok(solution) => {
            println!("{}", solution);
            println!("{} pivots", solution.statistics().total_pivots());
        },
        Err(error) => eprintln!("{}", error),
    }
}
