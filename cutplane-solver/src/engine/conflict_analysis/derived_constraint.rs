use num::BigInt;
use num::BigUint;
use num::One;
use num::Zero;

use super::WeightedLiterals;
use crate::basic_types::Literal;
use crate::basic_types::PbConstraint;
use crate::engine::Assignments;

/// The multipliers of a single resolution step: `coef_mult` scales the derived constraint and
/// `coef_mult_cons` scales the reason, chosen so the pivot cancels exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multipliers {
    pub coef_mult: BigUint,
    pub coef_mult_cons: BigUint,
}

impl Default for Multipliers {
    fn default() -> Self {
        Multipliers {
            coef_mult: BigUint::one(),
            coef_mult_cons: BigUint::one(),
        }
    }
}

/// The constraint being derived over the course of one conflict analysis: the weighted-literal
/// accumulator, the running degree, and whether the constraint has been degraded to a clause.
#[derive(Debug, Clone)]
pub struct DerivedConstraint {
    pub weighted_literals: WeightedLiterals,
    pub degree: BigUint,
    pub has_been_reduced: bool,
}

impl DerivedConstraint {
    pub fn from_constraint(constraint: &PbConstraint) -> Self {
        let mut weighted_literals = WeightedLiterals::default();
        for (literal, coefficient) in constraint.iter() {
            weighted_literals.accumulate(literal, coefficient.clone());
        }
        DerivedConstraint {
            weighted_literals,
            degree: constraint.degree().clone(),
            has_been_reduced: false,
        }
    }

    /// The slack under the current partial assignment, see [`PbConstraint::slack`].
    pub fn slack(&self, assignments: &Assignments) -> BigInt {
        let obtainable: BigUint = self
            .weighted_literals
            .iter()
            .filter(|&(literal, _)| !assignments.is_falsified(literal))
            .map(|(_, weight)| weight)
            .sum();
        BigInt::from(obtainable) - BigInt::from(self.degree.clone())
    }

    /// The slack the constraint would have after undoing every assignment made at decision
    /// level `level` or above: only literals falsified strictly below `level` remain falsified.
    pub fn slack_at_level(&self, assignments: &Assignments, level: u32) -> BigInt {
        let obtainable: BigUint = self
            .weighted_literals
            .iter()
            .filter(|&(literal, _)| {
                !assignments.is_falsified(literal)
                    || assignments.decision_level_of(literal) >= Some(level)
            })
            .map(|(_, weight)| weight)
            .sum();
        BigInt::from(obtainable) - BigInt::from(self.degree.clone())
    }

    /// Whether undoing every assignment at `level` or above turns the constraint into a
    /// propagating one: its slack becomes non-negative and some literal that would then be
    /// unassigned has a weight exceeding the slack.
    pub fn is_assertive(&self, assignments: &Assignments, level: u32) -> bool {
        let slack = self.slack_at_level(assignments, level);
        if slack < BigInt::zero() {
            return false;
        }
        self.weighted_literals.iter().any(|(literal, weight)| {
            let unassigned_after_undo = !assignments.is_assigned(literal)
                || assignments.decision_level_of(literal) >= Some(level);
            unassigned_after_undo && BigInt::from(weight.clone()) > slack
        })
    }

    /// Rewrites the constraint to the clause over the complement of the pivot and the literals
    /// of the accumulator that are currently falsified; everything else is dropped. This is the
    /// degradation step: from here on the constraint is clausal for the rest of the conflict.
    pub fn reduce_to_clause(&mut self, pivot_complement: Literal, assignments: &Assignments) {
        self.weighted_literals.retain(|&literal, _| {
            literal == pivot_complement || assignments.is_falsified(literal)
        });
        self.weighted_literals.make_unit();
        self.degree = BigUint::one();
        self.has_been_reduced = true;
    }

    /// Extracts the derived constraint with its terms in literal-code order, so the result is
    /// deterministic regardless of hash iteration order.
    pub fn extract(&self) -> PbConstraint {
        let mut terms: Vec<(Literal, BigUint)> = self
            .weighted_literals
            .iter()
            .map(|(literal, weight)| (literal, weight.clone()))
            .collect();
        terms.sort_by_key(|&(literal, _)| literal.to_u32());
        PbConstraint::new(terms, self.degree.clone())
    }
}
