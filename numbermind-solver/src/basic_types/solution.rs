use crate::formula::Formula;
use crate::formula::Literal;
use crate::formula::Variable;

/// A total assignment: every variable of the domain it was created for has a truth value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Solution {
    values: Vec<bool>,
}

impl Solution {
    pub(crate) fn new(values: Vec<bool>) -> Solution {
        Solution { values }
    }

    pub fn num_variables(&self) -> usize {
        self.values.len()
    }

    pub fn get_value(&self, variable: Variable) -> bool {
        self.values[variable.index()]
    }

    pub fn get_literal_value(&self, literal: Literal) -> bool {
        self.get_value(literal.get_variable()) == literal.is_positive()
    }

    /// Iterate over all variables and their values, in domain order.
    pub fn iter(&self) -> impl Iterator<Item = (Variable, bool)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(index, &value)| (Variable::new(index as u32), value))
    }

    pub fn satisfies(&self, formula: &Formula) -> bool {
        formula.evaluate(|variable| self.get_value(variable))
    }
}
