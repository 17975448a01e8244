//! A [`TerminationCondition`] is polled by the solver before every case split. It indicates when
//! the solver should give up, even though the search has not reached a conclusion; the solver then
//! reports [`crate::SatisfactionResult::Unknown`].

mod combinator;
mod decision_budget;
mod indefinite;

pub use combinator::Combinator;
pub use decision_budget::DecisionBudget;
pub use indefinite::Indefinite;

/// The central trait that defines a termination condition.
pub trait TerminationCondition {
    /// Returns `true` when the solver should stop, `false` otherwise.
    fn should_stop(&mut self) -> bool;

    /// Called by the solver every time it branches on a variable.
    fn decision_has_been_made(&mut self) {}
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        match self {
            Some(t) => t.should_stop(),
            None => false,
        }
    }

    fn decision_has_been_made(&mut self) {
        if let Some(t) = self {
            t.decision_has_been_made()
        }
    }
}
