use itertools::Itertools;

use crate::formula::Clause;
use crate::formula::Literal;
use crate::formula::Variable;

/// Encodes that exactly one of `variables` is true: one clause with every variable positive, and
/// for every pair of variables a clause forbidding both to be true. This gives `1 + n(n-1)/2`
/// clauses for `n` variables.
pub fn exactly_one(variables: &[Variable]) -> Vec<Clause> {
    let at_least_one = Clause::new(variables.iter().copied().map(Literal::positive));

    let at_most_one = variables
        .iter()
        .tuple_combinations()
        .map(|(&a, &b)| Clause::from([Literal::negative(a), Literal::negative(b)]));

    std::iter::once(at_least_one).chain(at_most_one).collect()
}

/// Encodes that at most `k` of `literals` are true by forbidding every subset of `k + 1` of them
/// from being true together.
pub fn at_most_k(literals: &[Literal], k: usize) -> Vec<Clause> {
    literals
        .iter()
        .map(|&literal| !literal)
        .combinations(k + 1)
        .map(Clause::new)
        .collect()
}

/// Encodes that at least `k` of `literals` are true: if fewer were true, some subset of
/// `n - k + 1` literals would all be false, so every such subset gets a clause.
///
/// When `k` exceeds the number of literals the constraint cannot hold and the result is the empty
/// clause.
pub fn at_least_k(literals: &[Literal], k: usize) -> Vec<Clause> {
    if k > literals.len() {
        return vec![Clause::empty()];
    }

    literals
        .iter()
        .copied()
        .combinations(literals.len() - k + 1)
        .map(Clause::new)
        .collect()
}

/// Encodes that exactly `k` of `literals` are true, as the conjunction of [`at_most_k`] and
/// [`at_least_k`].
pub fn exactly_k(literals: &[Literal], k: usize) -> Vec<Clause> {
    let mut clauses = at_most_k(literals, k);
    clauses.extend(at_least_k(literals, k));
    clauses
}
