use log::trace;

use crate::formula::Domain;
use crate::formula::Literal;
use crate::formula::Variable;

/// The steps taken by the solver, reported to a [`SearchObserver`] as they happen. The `depth` is
/// the number of case splits on the path from the root to the current node of the search tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchEvent {
    /// A unit clause forced `literal` to be true.
    UnitPropagated { literal: Literal, depth: usize },
    /// `literal` was pure and has been made true.
    PureLiteral { literal: Literal, depth: usize },
    /// The solver branches by assuming `literal`.
    Decision { literal: Literal, depth: usize },
    /// The formula of the current branch contains the empty clause.
    Conflict { depth: usize },
    /// The branch on `variable` failed; `num_undone` assignments have been rolled back.
    Backtrack {
        variable: Variable,
        num_undone: usize,
        depth: usize,
    },
}

/// Receives [`SearchEvent`]s from the solver. Observers only watch; they cannot influence the
/// search.
pub trait SearchObserver {
    fn on_event(&mut self, event: &SearchEvent);
}

impl<F: FnMut(&SearchEvent)> SearchObserver for F {
    fn on_event(&mut self, event: &SearchEvent) {
        self(event)
    }
}

/// The observer used by [`crate::DpllSolver::satisfy`]: it writes every event to the `trace` log
/// level using the variable names of the domain.
#[derive(Clone, Copy, Debug)]
pub struct LogObserver<'a> {
    domain: &'a Domain,
}

impl<'a> LogObserver<'a> {
    pub fn new(domain: &'a Domain) -> LogObserver<'a> {
        LogObserver { domain }
    }
}

impl SearchObserver for LogObserver<'_> {
    fn on_event(&mut self, event: &SearchEvent) {
        match *event {
            SearchEvent::UnitPropagated { literal, depth } => {
                trace!(
                    "[{depth}] unit propagation: {}",
                    self.domain.named_literal(literal)
                )
            }
            SearchEvent::PureLiteral { literal, depth } => {
                trace!("[{depth}] pure literal: {}", self.domain.named_literal(literal))
            }
            SearchEvent::Decision { literal, depth } => {
                trace!("[{depth}] trying {}", self.domain.named_literal(literal))
            }
            SearchEvent::Conflict { depth } => trace!("[{depth}] conflict"),
            SearchEvent::Backtrack {
                variable,
                num_undone,
                depth,
            } => trace!(
                "[{depth}] backtracking on {}, undoing {num_undone} assignments",
                self.domain.name(variable)
            ),
        }
    }
}
