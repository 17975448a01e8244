use std::fmt::Display;

use super::Clause;
use super::Literal;
use super::Variable;
use crate::basic_types::HashMap;

/// The ordered universe of variables that must all be assigned in a solution.
///
/// The domain also owns the names of the variables. Variables are handed out in creation order,
/// and that order is the one used by the solver both to look for pure literals and to pick the
/// next variable to branch on.
#[derive(Clone, Debug, Default)]
pub struct Domain {
    names: Vec<String>,
    variables_by_name: HashMap<String, Variable>,
}

impl Domain {
    /// Returns the variable with the given name, creating it at the end of the domain if it does
    /// not exist yet.
    pub fn new_variable(&mut self, name: impl Into<String>) -> Variable {
        let name = name.into();
        if let Some(variable) = self.variables_by_name.get(&name) {
            return *variable;
        }

        let variable = Variable::new(self.names.len() as u32);
        self.names.push(name.clone());
        let _ = self.variables_by_name.insert(name, variable);
        variable
    }

    pub fn get(&self, name: &str) -> Option<Variable> {
        self.variables_by_name.get(name).copied()
    }

    /// Get the name of a variable in this domain.
    pub fn name(&self, variable: Variable) -> &str {
        &self.names[variable.index()]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, variable: Variable) -> bool {
        variable.index() < self.names.len()
    }

    /// Iterate over the variables in domain order.
    pub fn iter(&self) -> impl Iterator<Item = Variable> + '_ {
        (0..self.names.len() as u32).map(Variable::new)
    }

    pub fn named_literal(&self, literal: Literal) -> NamedLiteral<'_> {
        NamedLiteral {
            domain: self,
            literal,
        }
    }

    pub fn named_clause<'a>(&'a self, clause: &'a Clause) -> NamedClause<'a> {
        NamedClause {
            domain: self,
            clause,
        }
    }
}

/// Displays a literal by the name of its variable, prefixed with `-` when negative.
#[derive(Clone, Copy, Debug)]
pub struct NamedLiteral<'a> {
    domain: &'a Domain,
    literal: Literal,
}

impl Display for NamedLiteral<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = self.domain.name(self.literal.get_variable());
        if self.literal.is_negative() {
            write!(f, "-{name}")
        } else {
            write!(f, "{name}")
        }
    }
}

/// Displays a clause as its named literals separated by spaces; the empty clause shows as `[]`.
#[derive(Clone, Copy, Debug)]
pub struct NamedClause<'a> {
    domain: &'a Domain,
    clause: &'a Clause,
}

impl Display for NamedClause<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.clause.is_empty() {
            return write!(f, "[]");
        }

        for (i, literal) in self.clause.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", self.domain.named_literal(literal))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variables_are_interned_by_name() {
        let mut domain = Domain::default();

        let a = domain.new_variable("a");
        let b = domain.new_variable("b");
        let a_again = domain.new_variable("a");

        assert_eq!(a, a_again);
        assert_ne!(a, b);
        assert_eq!(2, domain.len());
        assert_eq!(Some(b), domain.get("b"));
        assert_eq!(None, domain.get("c"));
    }

    #[test]
    fn iteration_follows_creation_order() {
        let mut domain = Domain::default();
        let names = ["12", "03", "40"];
        let variables = names
            .iter()
            .map(|name| domain.new_variable(*name))
            .collect::<Vec<_>>();

        assert_eq!(variables, domain.iter().collect::<Vec<_>>());
        assert_eq!(
            names.to_vec(),
            domain.iter().map(|v| domain.name(v)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn clauses_are_displayed_with_names() {
        let mut domain = Domain::default();
        let x = domain.new_variable("x");
        let y = domain.new_variable("y");

        let clause = Clause::from([Literal::positive(x), Literal::negative(y)]);

        assert_eq!("x -y", domain.named_clause(&clause).to_string());
        assert_eq!("[]", domain.named_clause(&Clause::empty()).to_string());
    }
}
