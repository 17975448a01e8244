use std::fmt::Display;

/// A propositional variable. Variables are created through [`crate::formula::Domain`], which
/// hands out consecutive indices; the index doubles as the position of the variable in the
/// domain order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable {
    index: u32,
}

impl Variable {
    pub(crate) fn new(index: u32) -> Variable {
        Variable { index }
    }

    pub fn index(&self) -> usize {
        self.index as usize
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.index)
    }
}
