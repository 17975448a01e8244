use crate::create_statistics_struct;

create_statistics_struct!(
    /// Counters collected by the [`crate::DpllSolver`] over all of its calls.
    SolverStatistics {
        /// The number of branches tried by case splitting
        num_decisions: u64,
        /// The number of branches which ended with the empty clause
        num_conflicts: u64,
        /// The number of literals made true by unit propagation
        num_unit_propagations: u64,
        /// The number of literals made true by pure-literal elimination
        num_pure_literals: u64,
        /// The deepest nesting of case splits reached
        max_depth: usize,
});
