use crate::basic_types::Solution;
use crate::basic_types::Trail;
use crate::dpll_assert_moderate;
use crate::formula::Literal;
use crate::formula::Variable;

/// The partial assignment built up during search.
///
/// Every assignment is recorded on a [`Trail`]. Opening a level before a case split and undoing
/// it when the split fails restores the assignment to exactly the state it had before the split,
/// without copying it.
#[derive(Clone, Debug)]
pub(crate) struct Assignment {
    values: Vec<Option<bool>>,
    trail: Trail<Variable>,
}

impl Assignment {
    pub(crate) fn new(num_variables: usize) -> Assignment {
        Assignment {
            values: vec![None; num_variables],
            trail: Trail::default(),
        }
    }

    /// Makes `literal` true.
    pub(crate) fn assign(&mut self, literal: Literal) {
        let variable = literal.get_variable();
        let value = literal.is_positive();

        match self.values[variable.index()] {
            Some(existing) => {
                dpll_assert_moderate!(
                    existing == value,
                    "{variable} cannot be assigned both polarities in one branch"
                );
            }
            None => {
                self.values[variable.index()] = Some(value);
                self.trail.push(variable);
            }
        }
    }

    pub(crate) fn get_value(&self, variable: Variable) -> Option<bool> {
        self.values[variable.index()]
    }

    pub(crate) fn is_assigned(&self, variable: Variable) -> bool {
        self.get_value(variable).is_some()
    }

    pub(crate) fn num_assigned(&self) -> usize {
        self.trail.len()
    }

    pub(crate) fn new_level(&mut self) {
        self.trail.new_level();
    }

    /// Unassigns every variable assigned since the matching [`Assignment::new_level`] and returns
    /// how many there were.
    pub(crate) fn undo_level(&mut self) -> usize {
        let mut num_undone = 0;
        for variable in self.trail.undo_level() {
            self.values[variable.index()] = None;
            num_undone += 1;
        }
        num_undone
    }

    /// Completes the assignment into a [`Solution`]; unassigned variables default to `false`.
    pub(crate) fn to_solution(&self) -> Solution {
        Solution::new(
            self.values
                .iter()
                .map(|value| value.unwrap_or(false))
                .collect(),
        )
    }
}
