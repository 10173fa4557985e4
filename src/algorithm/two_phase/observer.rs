//! # Observing the simplex method
//!
//! A caller can follow a solve pivot by pivot, for example to trace the tableau or to verify
//! properties of intermediate bases. Observers are called synchronously and can't influence the
//! algorithm.
use crate::algorithm::two_phase::Phase;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::elements::Variable;

/// Everything known about a pivot, just after it happened.
#[derive(Debug)]
pub struct PivotEvent<'a, F> {
    /// Phase in which the pivot happened.
    pub phase: Phase,
    /// Number of pivots done so far, over both phases, this one included.
    pub iteration: usize,
    /// Variable that entered the basis.
    pub entering: Variable,
    /// Variable that left the basis.
    pub leaving: Variable,
    /// Whether the minimum ratio was zero.
    pub degenerate: bool,
    /// The tableau after the pivot.
    pub tableau: &'a Tableau<F>,
}

/// Receives a `PivotEvent` after every pivot.
pub trait PivotObserver<F> {
    /// Called after a column was brought into the basis.
    fn after_pivot(&mut self, event: &PivotEvent<'_, F>);
}

impl<F, T> PivotObserver<F> for T
where
    T: FnMut(&PivotEvent<'_, F>),
{
    fn after_pivot(&mut self, event: &PivotEvent<'_, F>) {
        self(event)
    }
}

/// Observer that ignores all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoObserver;

impl<F> PivotObserver<F> for NoObserver {
    fn after_pivot(&mut self, _event: &PivotEvent<'_, F>) {}
}
