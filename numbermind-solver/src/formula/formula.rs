use super::Clause;
use super::Domain;
use super::Literal;
use super::Variable;

const OCCURS_POSITIVE: u8 = 0b01;
const OCCURS_NEGATIVE: u8 = 0b10;

/// A conjunction of [`Clause`]s. The formula without clauses is trivially satisfied.
///
/// The simplification operations do not modify the formula they are called on; they return a new
/// formula so that the original remains available for a later branch of the search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formula {
    clauses: Vec<Clause>,
}

impl Formula {
    pub fn new(clauses: impl IntoIterator<Item = Clause>) -> Formula {
        Formula {
            clauses: clauses.into_iter().collect(),
        }
    }

    pub fn add_clause(&mut self, clause: impl Into<Clause>) {
        self.clauses.push(clause.into());
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clause> + '_ {
        self.clauses.iter()
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    /// Returns true if there are no clauses left, i.e. the formula is satisfied.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn contains_empty_clause(&self) -> bool {
        self.clauses.iter().any(Clause::is_empty)
    }

    /// Returns the literal of the first unit clause, if any.
    pub fn find_unit_literal(&self) -> Option<Literal> {
        self.clauses.iter().find_map(Clause::as_unit)
    }

    /// Removes every clause which contains `literal`; these clauses are satisfied once `literal`
    /// is true.
    pub fn delete_clauses_containing(&self, literal: Literal) -> Formula {
        Formula {
            clauses: self
                .clauses
                .iter()
                .filter(|clause| !clause.contains(literal))
                .cloned()
                .collect(),
        }
    }

    /// Removes the complement of `literal` from every clause. A clause that loses its last literal
    /// is kept as the empty clause.
    pub fn delete_complement_from_clauses(&self, literal: Literal) -> Formula {
        Formula {
            clauses: self
                .clauses
                .iter()
                .map(|clause| clause.without_complement_of(literal))
                .collect(),
        }
    }

    /// Returns this formula extended with the unit clause `[literal]`.
    pub fn with_unit_clause(&self, literal: Literal) -> Formula {
        let mut clauses = Vec::with_capacity(self.clauses.len() + 1);
        clauses.extend(self.clauses.iter().cloned());
        clauses.push(Clause::unit(literal));
        Formula { clauses }
    }

    /// Finds the first variable, in domain order, which occurs in the formula with a single
    /// polarity, and returns it as a literal with that polarity.
    pub fn find_pure_literal(&self, domain: &Domain) -> Option<Literal> {
        let mut occurrences = vec![0_u8; domain.len()];

        for literal in self.clauses.iter().flat_map(Clause::iter) {
            let Some(occurrence) = occurrences.get_mut(literal.get_variable().index()) else {
                continue;
            };

            *occurrence |= if literal.is_positive() {
                OCCURS_POSITIVE
            } else {
                OCCURS_NEGATIVE
            };
        }

        domain
            .iter()
            .find_map(|variable| match occurrences[variable.index()] {
                OCCURS_POSITIVE => Some(Literal::positive(variable)),
                OCCURS_NEGATIVE => Some(Literal::negative(variable)),
                _ => None,
            })
    }

    /// Evaluates the formula under a total valuation of the variables.
    pub fn evaluate(&self, value: impl Fn(Variable) -> bool) -> bool {
        self.clauses.iter().all(|clause| {
            clause.evaluate(|literal| value(literal.get_variable()) == literal.is_positive())
        })
    }
}

impl FromIterator<Clause> for Formula {
    fn from_iter<T: IntoIterator<Item = Clause>>(iter: T) -> Self {
        Formula::new(iter)
    }
}

impl Extend<Clause> for Formula {
    fn extend<T: IntoIterator<Item = Clause>>(&mut self, iter: T) {
        self.clauses.extend(iter)
    }
}

impl IntoIterator for Formula {
    type Item = Clause;
    type IntoIter = std::vec::IntoIter<Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.into_iter()
    }
}
