//! # Number Mind solver
//! A propositional satisfiability solver based on the DPLL procedure, together with an encoder
//! which turns Number Mind puzzles into formulas for it.
//!
//! In a Number Mind puzzle, an unknown digit string has to be found from a list of guesses, each
//! annotated with the number of positions at which the guess has the correct digit. For example,
//! the guesses
//! ```text
//! 90342 ;2 correct
//! 70794 ;0 correct
//! 39458 ;2 correct
//! 34109 ;1 correct
//! 51545 ;2 correct
//! 12531 ;1 correct
//! ```
//! have the unique answer `39542`.
//!
//! # Solving a formula
//! A [`formula::Formula`] is a conjunction of [`formula::Clause`]s over the variables of a
//! [`formula::Domain`]. The order of the domain is the order in which the solver branches on the
//! variables:
//! ```rust
//! # use numbermind_solver::formula::Clause;
//! # use numbermind_solver::formula::Domain;
//! # use numbermind_solver::formula::Formula;
//! # use numbermind_solver::formula::Literal;
//! let mut domain = Domain::default();
//! let a = Literal::positive(domain.new_variable("a"));
//! let b = Literal::positive(domain.new_variable("b"));
//!
//! // (a or b) and (not a or not b) and (not b)
//! let formula = Formula::new([Clause::from([a, b]), Clause::from([!a, !b]), Clause::unit(!b)]);
//!
//! let solution = numbermind_solver::solve(&formula, &domain).expect("satisfiable");
//! assert!(solution.get_literal_value(a));
//! assert!(!solution.get_literal_value(b));
//! ```
//! For more control, such as stopping the search after a number of decisions or observing the
//! individual steps of the search, use a [`DpllSolver`] with a
//! [`termination::TerminationCondition`] and a [`SearchObserver`].
//!
//! # Solving a puzzle
//! ```rust
//! # use numbermind_solver::encoders::Guess;
//! # use numbermind_solver::encoders::PuzzleConfiguration;
//! let puzzle = ["90342:2", "70794:0", "39458:2", "34109:1", "51545:2", "12531:1"]
//!     .into_iter()
//!     .map(|guess| guess.parse::<Guess>().expect("valid guess"))
//!     .fold(PuzzleConfiguration::new(5), PuzzleConfiguration::with_guess)
//!     .encode();
//!
//! let solution = numbermind_solver::solve(puzzle.formula(), puzzle.domain()).expect("satisfiable");
//! assert_eq!(Ok("39542".to_owned()), puzzle.decode(&solution));
//! ```
pub(crate) mod basic_types;
pub(crate) mod dpll_asserts;
pub mod encoders;
pub(crate) mod engine;
pub mod formula;
pub mod parsers;
pub mod statistics;

pub use crate::basic_types::SatisfactionResult;
pub use crate::basic_types::Solution;
pub use crate::engine::solve;
pub use crate::engine::termination;
pub use crate::engine::DpllSolver;
pub use crate::engine::LogObserver;
pub use crate::engine::SearchEvent;
pub use crate::engine::SearchObserver;
pub use crate::engine::SolverStatistics;

#[doc(hidden)]
pub mod asserts {
    pub use crate::dpll_assert_eq_simple;
    pub use crate::dpll_assert_moderate;
    pub use crate::dpll_assert_simple;
    pub use crate::dpll_asserts::DPLL_ASSERT_LEVEL_DEFINITION;
    pub use crate::dpll_asserts::DPLL_ASSERT_MODERATE;
    pub use crate::dpll_asserts::DPLL_ASSERT_SIMPLE;
}
