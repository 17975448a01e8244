use super::TerminationCondition;

/// A [`TerminationCondition`] which triggers when one of two given [`TerminationCondition`]s
/// triggers.
#[derive(Clone, Copy, Debug)]
pub struct Combinator<T1, T2> {
    t1: T1,
    t2: T2,
}

impl<T1, T2> Combinator<T1, T2> {
    pub fn new(t1: T1, t2: T2) -> Self {
        Combinator { t1, t2 }
    }
}

impl<T1: TerminationCondition, T2: TerminationCondition> TerminationCondition
    for Combinator<T1, T2>
{
    fn should_stop(&mut self) -> bool {
        self.t1.should_stop() || self.t2.should_stop()
    }

    fn decision_has_been_made(&mut self) {
        self.t1.decision_has_been_made();
        self.t2.decision_has_been_made();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::termination::DecisionBudget;
    use crate::termination::Indefinite;

    #[test]
    fn decisions_are_forwarded_to_both_conditions() {
        let mut combined = Combinator::new(DecisionBudget::new(3), DecisionBudget::new(1));

        combined.decision_has_been_made();

        assert!(combined.should_stop());
    }

    #[test]
    fn does_not_stop_when_neither_condition_triggers() {
        let mut combined = Combinator::new(Indefinite, None::<DecisionBudget>);

        assert!(!combined.should_stop());
    }
}
