use super::Solution;

/// The outcome of a call to [`crate::DpllSolver::satisfy`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SatisfactionResult {
    /// A total assignment of the domain which satisfies the formula.
    Satisfiable(Solution),
    /// The search tree was exhausted without finding a satisfying assignment.
    Unsatisfiable,
    /// The termination condition stopped the search before a conclusion was reached.
    Unknown,
}

impl SatisfactionResult {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SatisfactionResult::Satisfiable(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution> {
        match self {
            SatisfactionResult::Satisfiable(solution) => Some(solution),
            _ => None,
        }
    }
}
