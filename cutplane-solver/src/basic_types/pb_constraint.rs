use std::fmt::Display;
use std::fmt::Formatter;

use itertools::Itertools;
use num::BigInt;
use num::BigUint;
use num::Zero;

use super::Literal;
use crate::cutplane_assert_simple;
use crate::engine::Assignments;

/// A pseudo-Boolean constraint `sum(coefficient_i * literal_i) >= degree` with non-negative
/// arbitrary-precision coefficients.
///
/// Construction normalises the terms: zero coefficients are dropped and coefficients are
/// saturated at the degree. Every variable occurs at most once. The conflict analyzer treats
/// constraints handed to it as read-only and clones a reason before weakening it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PbConstraint {
    literals: Vec<Literal>,
    coefficients: Vec<BigUint>,
    degree: BigUint,
}

impl PbConstraint {
    pub fn new(terms: Vec<(Literal, BigUint)>, degree: BigUint) -> Self {
        let mut literals = Vec::with_capacity(terms.len());
        let mut coefficients = Vec::with_capacity(terms.len());
        for (literal, coefficient) in terms {
            if coefficient.is_zero() {
                continue;
            }
            literals.push(literal);
            coefficients.push(coefficient);
        }

        cutplane_assert_simple!(!literals.is_empty(), "a constraint must have at least one term");
        cutplane_assert_simple!(!degree.is_zero(), "a constraint must have a positive degree");
        cutplane_assert_simple!(
            literals
                .iter()
                .map(|literal| literal.get_propositional_variable())
                .all_unique(),
            "a variable may occur at most once in a constraint"
        );

        let mut constraint = PbConstraint {
            literals,
            coefficients,
            degree,
        };
        constraint.saturate();
        constraint
    }

    /// The clause over `literals`, i.e. unit coefficients and degree one.
    pub fn clause(literals: impl IntoIterator<Item = Literal>) -> Self {
        PbConstraint::new(
            literals
                .into_iter()
                .map(|literal| (literal, BigUint::from(1u32)))
                .collect(),
            BigUint::from(1u32),
        )
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn literal(&self, index: usize) -> Literal {
        self.literals[index]
    }

    pub fn coefficient(&self, index: usize) -> &BigUint {
        &self.coefficients[index]
    }

    pub fn degree(&self) -> &BigUint {
        &self.degree
    }

    pub fn iter(&self) -> impl Iterator<Item = (Literal, &BigUint)> + '_ {
        self.literals.iter().copied().zip(self.coefficients.iter())
    }

    pub fn position_of(&self, literal: Literal) -> Option<usize> {
        self.literals.iter().position(|&other| other == literal)
    }

    pub fn contains_variable_of(&self, literal: Literal) -> bool {
        self.literals.iter().any(|other| {
            other.get_propositional_variable() == literal.get_propositional_variable()
        })
    }

    /// The slack under the current (partial) assignment: the weight that is still obtainable,
    /// counting every literal that is not falsified, minus the degree. Negative slack means the
    /// constraint cannot be satisfied anymore.
    pub fn slack(&self, assignments: &Assignments) -> BigInt {
        let obtainable: BigUint = self
            .iter()
            .filter(|&(literal, _)| !assignments.is_falsified(literal))
            .map(|(_, coefficient)| coefficient)
            .sum();
        BigInt::from(obtainable) - BigInt::from(self.degree.clone())
    }

    pub fn is_conflicting(&self, assignments: &Assignments) -> bool {
        self.slack(assignments) < BigInt::zero()
    }

    /// Evaluates the constraint under a total assignment, used to cross-check learned
    /// constraints against the inputs they were derived from.
    pub fn is_satisfied_under(&self, is_true: impl Fn(Literal) -> bool) -> bool {
        let obtained: BigUint = self
            .iter()
            .filter(|&(literal, _)| is_true(literal))
            .map(|(_, coefficient)| coefficient)
            .sum();
        obtained >= self.degree
    }

    /// Removes the term at `index` and lowers the degree by its coefficient, then re-saturates.
    /// Sound for any term, but only useful for literals that are not falsified.
    pub(crate) fn weaken_at(&mut self, index: usize) {
        let coefficient = self.coefficients.swap_remove(index);
        let _ = self.literals.swap_remove(index);
        cutplane_assert_simple!(
            coefficient < self.degree,
            "weakening must leave a positive degree"
        );
        self.degree -= coefficient;
        self.saturate();
    }

    /// Caps every coefficient at the degree. A coefficient above the degree carries no extra
    /// strength, and capping keeps the magnitudes the resolver works with tight.
    pub(crate) fn saturate(&mut self) {
        for coefficient in self.coefficients.iter_mut() {
            if *coefficient > self.degree {
                coefficient.clone_from(&self.degree);
            }
        }
    }
}

impl Display for PbConstraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} >= {}",
            self.iter()
                .map(|(literal, coefficient)| format!("{coefficient} {literal}"))
                .join(" + "),
            self.degree
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::PropositionalVariable;

    fn literals(n: u32) -> Vec<Literal> {
        (0..n)
            .map(|index| Literal::new(PropositionalVariable::new(index), true))
            .collect()
    }

    fn big(value: u32) -> BigUint {
        BigUint::from(value)
    }

    #[test]
    fn construction_drops_zero_coefficients_and_saturates() {
        let lits = literals(3);
        let constraint = PbConstraint::new(
            vec![(lits[0], big(7)), (lits[1], big(0)), (lits[2], big(2))],
            big(4),
        );

        assert_eq!(constraint.len(), 2);
        assert_eq!(constraint.position_of(lits[1]), None);
        // 7 is capped at the degree
        assert_eq!(*constraint.coefficient(0), big(4));
        assert_eq!(*constraint.coefficient(1), big(2));
    }

    #[test]
    fn slack_counts_literals_that_are_not_falsified() {
        let mut assignments = Assignments::default();
        let x = (0..3)
            .map(|_| assignments.grow())
            .map(|variable| Literal::new(variable, true))
            .collect::<Vec<_>>();
        let constraint = PbConstraint::new(
            vec![(x[0], big(3)), (x[1], big(2)), (x[2], big(2))],
            big(4),
        );

        // nothing assigned: everything is obtainable
        assert_eq!(constraint.slack(&assignments), BigInt::from(3));

        assignments.decide(!x[1]);
        assert_eq!(constraint.slack(&assignments), BigInt::from(1));

        assignments.decide(!x[0]);
        assert_eq!(constraint.slack(&assignments), BigInt::from(-2));
        assert!(constraint.is_conflicting(&assignments));

        // a satisfied literal still counts towards the obtainable weight
        assignments.decide(x[2]);
        assert_eq!(constraint.slack(&assignments), BigInt::from(-2));
    }

    #[test]
    fn weakening_removes_the_term_and_lowers_the_degree() {
        let lits = literals(3);
        let mut constraint = PbConstraint::new(
            vec![(lits[0], big(3)), (lits[1], big(2)), (lits[2], big(1))],
            big(5),
        );

        let index = constraint.position_of(lits[1]).unwrap();
        constraint.weaken_at(index);

        assert_eq!(constraint.len(), 2);
        assert_eq!(*constraint.degree(), big(3));
        assert_eq!(constraint.position_of(lits[1]), None);
        // both remaining coefficients are within the new degree
        assert!(constraint.iter().all(|(_, c)| *c <= big(3)));
    }

    #[test]
    fn clause_has_unit_coefficients_and_degree_one() {
        let lits = literals(3);
        let clause = PbConstraint::clause(lits.clone());

        assert_eq!(*clause.degree(), big(1));
        assert!(clause.iter().all(|(_, c)| *c == big(1)));
        assert!(clause.is_satisfied_under(|literal| literal == lits[2]));
        assert!(!clause.is_satisfied_under(|_| false));
    }

    #[test]
    fn display_is_readable() {
        let lits = literals(2);
        let constraint = PbConstraint::new(vec![(lits[0], big(3)), (!lits[1], big(2))], big(4));
        assert_eq!(constraint.to_string(), "3 x0 + 2 ~x1 >= 4");
    }
}
