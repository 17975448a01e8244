use std::fmt::Display;

use super::Variable;

/// A [`Variable`] with a polarity: either the variable itself or its negation.
///
/// Two literals are equal only if both the variable and the polarity match; see
/// [`Literal::is_opposite_of`] for complementary literals.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    code: u32,
}

impl Literal {
    pub fn new(variable: Variable, is_positive: bool) -> Literal {
        Literal {
            code: variable.index() as u32 * 2 + (is_positive as u32),
        }
    }

    pub fn positive(variable: Variable) -> Literal {
        Literal::new(variable, true)
    }

    pub fn negative(variable: Variable) -> Literal {
        Literal::new(variable, false)
    }

    pub fn is_positive(&self) -> bool {
        (self.code & 1) == 1
    }

    pub fn is_negative(&self) -> bool {
        (self.code & 1) == 0
    }

    pub fn get_variable(&self) -> Variable {
        Variable::new(self.code / 2)
    }

    /// Returns true iff `self` and `other` refer to the same variable with differing polarity.
    pub fn is_opposite_of(&self, other: Literal) -> bool {
        self.code ^ other.code == 1
    }
}

impl std::ops::Not for Literal {
    type Output = Literal;

    fn not(self) -> Literal {
        Literal { code: self.code ^ 1 }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_negative() {
            write!(f, "-{}", self.get_variable())
        } else {
            write!(f, "{}", self.get_variable())
        }
    }
}
