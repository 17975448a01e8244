use super::Literal;

/// A disjunction of [`Literal`]s. The empty clause is the explicit falsity marker: it can never
/// be satisfied and signals a conflict when it shows up in a [`super::Formula`].
///
/// The order of the literals carries no meaning for the solver, it merely reflects the order in
/// which they were generated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn new(literals: impl IntoIterator<Item = Literal>) -> Clause {
        Clause {
            literals: literals.into_iter().collect(),
        }
    }

    pub fn empty() -> Clause {
        Clause::default()
    }

    pub fn unit(literal: Literal) -> Clause {
        Clause {
            literals: vec![literal],
        }
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Returns the single literal of a unit clause.
    pub fn as_unit(&self) -> Option<Literal> {
        match self.literals.as_slice() {
            [literal] => Some(*literal),
            _ => None,
        }
    }

    pub fn contains(&self, literal: Literal) -> bool {
        self.literals.contains(&literal)
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn iter(&self) -> impl Iterator<Item = Literal> + '_ {
        self.literals.iter().copied()
    }

    /// Returns a copy of this clause without any literal that is the complement of `literal`.
    pub fn without_complement_of(&self, literal: Literal) -> Clause {
        Clause {
            literals: self
                .literals
                .iter()
                .copied()
                .filter(|l| !l.is_opposite_of(literal))
                .collect(),
        }
    }

    /// Evaluates the clause under a total valuation of the variables.
    pub fn evaluate(&self, value: impl Fn(Literal) -> bool) -> bool {
        self.literals.iter().any(|&literal| value(literal))
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<T: IntoIterator<Item = Literal>>(iter: T) -> Self {
        Clause::new(iter)
    }
}

impl<const N: usize> From<[Literal; N]> for Clause {
    fn from(literals: [Literal; N]) -> Self {
        Clause::new(literals)
    }
}
