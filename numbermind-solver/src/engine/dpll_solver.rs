use log::debug;

use super::termination::Indefinite;
use super::termination::TerminationCondition;
use super::Assignment;
use super::LogObserver;
use super::SearchEvent;
use super::SearchObserver;
use super::SolverStatistics;
use crate::basic_types::SatisfactionResult;
use crate::basic_types::Solution;
use crate::dpll_assert_moderate;
use crate::formula::Domain;
use crate::formula::Formula;
use crate::formula::Literal;
use crate::statistics::log_statistic_postfix;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

/// Decides satisfiability of a [`Formula`] over a [`Domain`] with the DPLL procedure: unit
/// propagation and pure-literal elimination to a fixpoint, followed by a two-way case split on the
/// next unassigned variable in domain order.
///
/// The search is chronological and exhaustive. There is no clause learning and no variable
/// selection heuristic; the domain order is the only tie-break, which makes the solver fully
/// deterministic.
///
/// # Example
/// ```rust
/// # use numbermind_solver::formula::Clause;
/// # use numbermind_solver::formula::Domain;
/// # use numbermind_solver::formula::Formula;
/// # use numbermind_solver::formula::Literal;
/// # use numbermind_solver::termination::Indefinite;
/// # use numbermind_solver::DpllSolver;
/// # use numbermind_solver::SatisfactionResult;
/// let mut domain = Domain::default();
/// let x = domain.new_variable("x");
/// let y = domain.new_variable("y");
///
/// // (x or y) and (not x)
/// let formula = Formula::new([
///     Clause::from([Literal::positive(x), Literal::positive(y)]),
///     Clause::unit(Literal::negative(x)),
/// ]);
///
/// let mut solver = DpllSolver::default();
/// let result = solver.satisfy(&formula, &domain, &mut Indefinite);
///
/// let SatisfactionResult::Satisfiable(solution) = result else {
///     panic!("the formula is satisfiable")
/// };
/// assert!(!solution.get_value(x));
/// assert!(solution.get_value(y));
/// ```
#[derive(Debug, Default)]
pub struct DpllSolver {
    statistics: SolverStatistics,
}

/// Decides `formula` over `domain` without a termination condition. Returns a total assignment
/// of the domain if the formula is satisfiable, and `None` otherwise.
pub fn solve(formula: &Formula, domain: &Domain) -> Option<Solution> {
    DpllSolver::default()
        .satisfy(formula, domain, &mut Indefinite)
        .into_solution()
}

impl DpllSolver {
    /// Searches for a solution, writing the search events to the `trace` log level.
    pub fn satisfy(
        &mut self,
        formula: &Formula,
        domain: &Domain,
        termination: &mut impl TerminationCondition,
    ) -> SatisfactionResult {
        let mut observer = LogObserver::new(domain);
        self.satisfy_with_observer(formula, domain, termination, &mut observer)
    }

    /// Searches for a solution, reporting every step of the search to `observer`.
    ///
    /// Variables of the domain which are not fixed by the search (because they disappeared from
    /// the formula before being decided) are `false` in the returned solution.
    pub fn satisfy_with_observer(
        &mut self,
        formula: &Formula,
        domain: &Domain,
        termination: &mut impl TerminationCondition,
        observer: &mut impl SearchObserver,
    ) -> SatisfactionResult {
        dpll_assert_moderate!(
            formula
                .iter()
                .flat_map(|clause| clause.iter())
                .all(|literal| domain.contains(literal.get_variable())),
            "every variable of the formula must belong to the domain"
        );

        debug!(
            "Solving a formula of {} clauses over {} variables",
            formula.num_clauses(),
            domain.len()
        );

        let mut search = Search {
            domain,
            assignment: Assignment::new(domain.len()),
            termination,
            observer,
            statistics: &mut self.statistics,
        };

        match search.branch(formula.clone(), 0, 0) {
            BranchOutcome::Satisfied => {
                debug!(
                    "Satisfiable, {} of {} variables fixed by the search",
                    search.assignment.num_assigned(),
                    domain.len()
                );
                SatisfactionResult::Satisfiable(search.assignment.to_solution())
            }
            BranchOutcome::Conflict => {
                debug!("Unsatisfiable");
                SatisfactionResult::Unsatisfiable
            }
            BranchOutcome::Stopped => {
                debug!("Search stopped by the termination condition");
                SatisfactionResult::Unknown
            }
        }
    }

    pub fn statistics(&self) -> &SolverStatistics {
        &self.statistics
    }

    /// Logs the statistics gathered so far under the `solver` prefix, followed by the configured
    /// closing line.
    pub fn log_statistics(&self) {
        self.statistics.log(StatisticLogger::new(["solver"]));
        log_statistic_postfix();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BranchOutcome {
    Satisfied,
    Conflict,
    Stopped,
}

/// The state of a single call to [`DpllSolver::satisfy_with_observer`]. The formula is not part
/// of it: each branch receives its own formula by value.
struct Search<'a, Termination, Observer> {
    domain: &'a Domain,
    assignment: Assignment,
    termination: &'a mut Termination,
    observer: &'a mut Observer,
    statistics: &'a mut SolverStatistics,
}

impl<Termination: TerminationCondition, Observer: SearchObserver>
    Search<'_, Termination, Observer>
{
    /// Solves the branch of `formula`, considering case splits on the domain variables from
    /// position `index` onwards.
    ///
    /// Assignments made in a branch that fails are left for the caller to undo.
    fn branch(&mut self, formula: Formula, index: usize, depth: usize) -> BranchOutcome {
        if formula.is_empty() {
            return BranchOutcome::Satisfied;
        }

        let formula = self.propagate_units(formula, depth);
        if formula.contains_empty_clause() {
            return self.conflict(depth);
        }

        let formula = self.eliminate_pure_literals(formula, depth);
        if formula.is_empty() {
            return BranchOutcome::Satisfied;
        }
        if formula.contains_empty_clause() {
            return self.conflict(depth);
        }

        // Variables fixed by simplification are skipped without branching.
        let Some(variable) = self
            .domain
            .iter()
            .skip(index)
            .find(|&variable| !self.assignment.is_assigned(variable))
        else {
            return self.conflict(depth);
        };
        let next_index = variable.index() + 1;

        if self.termination.should_stop() {
            return BranchOutcome::Stopped;
        }

        self.assignment.new_level();
        match self.decide(&formula, Literal::positive(variable), next_index, depth) {
            BranchOutcome::Conflict => {}
            outcome => return outcome,
        }

        let num_undone = self.assignment.undo_level();
        self.observer.on_event(&SearchEvent::Backtrack {
            variable,
            num_undone,
            depth,
        });

        if self.termination.should_stop() {
            return BranchOutcome::Stopped;
        }

        self.decide(&formula, Literal::negative(variable), next_index, depth)
    }

    fn decide(
        &mut self,
        formula: &Formula,
        literal: Literal,
        next_index: usize,
        depth: usize,
    ) -> BranchOutcome {
        self.termination.decision_has_been_made();
        self.statistics.num_decisions += 1;
        self.statistics.max_depth = self.statistics.max_depth.max(depth + 1);
        self.observer
            .on_event(&SearchEvent::Decision { literal, depth });

        self.branch(formula.with_unit_clause(literal), next_index, depth + 1)
    }

    fn conflict(&mut self, depth: usize) -> BranchOutcome {
        self.statistics.num_conflicts += 1;
        self.observer.on_event(&SearchEvent::Conflict { depth });
        BranchOutcome::Conflict
    }

    /// Makes the literals of unit clauses true until no unit clause remains, or until the empty
    /// clause appears.
    fn propagate_units(&mut self, mut formula: Formula, depth: usize) -> Formula {
        while let Some(literal) = formula.find_unit_literal() {
            self.assignment.assign(literal);
            self.statistics.num_unit_propagations += 1;
            self.observer
                .on_event(&SearchEvent::UnitPropagated { literal, depth });

            formula = formula
                .delete_clauses_containing(literal)
                .delete_complement_from_clauses(literal);

            if formula.contains_empty_clause() {
                break;
            }
        }

        formula
    }

    /// Makes pure literals true, one at a time in domain order, until none remains.
    fn eliminate_pure_literals(&mut self, mut formula: Formula, depth: usize) -> Formula {
        while let Some(literal) = formula.find_pure_literal(self.domain) {
            self.assignment.assign(literal);
            self.statistics.num_pure_literals += 1;
            self.observer
                .on_event(&SearchEvent::PureLiteral { literal, depth });

            formula = formula.delete_clauses_containing(literal);
        }

        formula
    }
}
