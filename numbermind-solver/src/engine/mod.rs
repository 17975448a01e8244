mod assignment;
mod dpll_solver;
mod search_observer;
mod solver_statistics;
pub mod termination;

pub(crate) use assignment::Assignment;
pub use dpll_solver::solve;
pub use dpll_solver::DpllSolver;
pub use search_observer::LogObserver;
pub use search_observer::SearchEvent;
pub use search_observer::SearchObserver;
pub use solver_statistics::SolverStatistics;
