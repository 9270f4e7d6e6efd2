use std::rc::Rc;

use crate::basic_types::Literal;
use crate::basic_types::PbConstraint;
use crate::basic_types::PropositionalVariable;
use crate::cutplane_assert_simple;

/// One assigned literal on the trail; propagated literals carry the constraint that forced
/// them, decisions do not.
#[derive(Debug, Clone)]
pub struct TrailEntry {
    pub literal: Literal,
    pub reason: Option<Rc<PbConstraint>>,
}

/// The assignment state of the embedding solver as seen by the conflict analyzer: truth values,
/// decision levels and reasons per variable, plus the chronological trail. The analyzer only
/// reads this; enqueueing is the propagation engine's job.
#[derive(Debug, Clone, Default)]
pub struct Assignments {
    trail: Vec<TrailEntry>,
    values: Vec<Option<bool>>,
    levels: Vec<u32>,
    reasons: Vec<Option<Rc<PbConstraint>>>,
    current_decision_level: u32,
}

impl Assignments {
    /// Registers a fresh unassigned variable.
    pub fn grow(&mut self) -> PropositionalVariable {
        let variable = PropositionalVariable::new(self.values.len() as u32);
        self.values.push(None);
        self.levels.push(0);
        self.reasons.push(None);
        variable
    }

    pub fn get_decision_level(&self) -> u32 {
        self.current_decision_level
    }

    pub fn num_trail_entries(&self) -> usize {
        self.trail.len()
    }

    pub fn get_trail_entry(&self, index: usize) -> &TrailEntry {
        &self.trail[index]
    }

    /// Opens a new decision level and assigns `literal` as its decision.
    pub fn decide(&mut self, literal: Literal) {
        self.current_decision_level += 1;
        self.assign(literal, None);
    }

    /// Assigns `literal` at the current decision level as a consequence of `reason`.
    pub fn enqueue(&mut self, literal: Literal, reason: Rc<PbConstraint>) {
        self.assign(literal, Some(reason));
    }

    fn assign(&mut self, literal: Literal, reason: Option<Rc<PbConstraint>>) {
        let index = literal.get_propositional_variable().index() as usize;
        cutplane_assert_simple!(
            self.values[index].is_none(),
            "a variable may only be assigned once"
        );
        self.values[index] = Some(literal.is_positive());
        self.levels[index] = self.current_decision_level;
        self.reasons[index].clone_from(&reason);
        self.trail.push(TrailEntry { literal, reason });
    }

    pub fn is_assigned(&self, literal: Literal) -> bool {
        self.value_of(literal).is_some()
    }

    pub fn is_satisfied(&self, literal: Literal) -> bool {
        self.value_of(literal) == Some(true)
    }

    pub fn is_falsified(&self, literal: Literal) -> bool {
        self.value_of(literal) == Some(false)
    }

    /// The decision level at which the variable of `literal` was assigned, or `None` if it is
    /// unassigned.
    pub fn decision_level_of(&self, literal: Literal) -> Option<u32> {
        let index = literal.get_propositional_variable().index() as usize;
        self.values[index].map(|_| self.levels[index])
    }

    pub fn reason_for(&self, literal: Literal) -> Option<&Rc<PbConstraint>> {
        self.reasons[literal.get_propositional_variable().index() as usize].as_ref()
    }

    fn value_of(&self, literal: Literal) -> Option<bool> {
        self.values[literal.get_propositional_variable().index() as usize]
            .map(|value| value == literal.is_positive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trail_and_levels_track_decisions_and_propagations() {
        let mut assignments = Assignments::default();
        let x = assignments.grow();
        let y = assignments.grow();
        let z = assignments.grow();
        let (x, y, z) = (
            Literal::new(x, true),
            Literal::new(y, true),
            Literal::new(z, true),
        );

        assignments.decide(x);
        let reason = Rc::new(PbConstraint::clause(vec![y, !x]));
        assignments.enqueue(y, Rc::clone(&reason));
        assignments.decide(!z);

        assert_eq!(assignments.get_decision_level(), 2);
        assert_eq!(assignments.num_trail_entries(), 3);
        assert_eq!(assignments.get_trail_entry(1).literal, y);

        assert!(assignments.is_satisfied(x));
        assert!(assignments.is_falsified(!y));
        assert!(assignments.is_falsified(z));

        assert_eq!(assignments.decision_level_of(x), Some(1));
        assert_eq!(assignments.decision_level_of(y), Some(1));
        assert_eq!(assignments.decision_level_of(z), Some(2));

        assert!(assignments.reason_for(x).is_none());
        assert_eq!(**assignments.reason_for(y).unwrap(), *reason);
    }

    #[test]
    fn unassigned_variables_have_no_level_or_value() {
        let mut assignments = Assignments::default();
        let x = Literal::new(assignments.grow(), true);

        assert!(!assignments.is_assigned(x));
        assert!(!assignments.is_falsified(x));
        assert!(!assignments.is_satisfied(x));
        assert_eq!(assignments.decision_level_of(x), None);
    }
}
