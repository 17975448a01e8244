//! The propositional model consumed by the solver: [`Variable`]s drawn from a [`Domain`],
//! [`Literal`]s, disjunctive [`Clause`]s and conjunctive [`Formula`]s.
mod clause;
mod domain;
#[allow(
    clippy::module_inception,
    reason = "the formula type lives in the formula module"
)]
mod formula;
mod literal;
mod variable;

pub use clause::Clause;
pub use domain::Domain;
pub use domain::NamedClause;
pub use domain::NamedLiteral;
pub use formula::Formula;
pub use literal::Literal;
pub use variable::Variable;
