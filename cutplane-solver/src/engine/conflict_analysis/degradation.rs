use std::fmt::Debug;

use log::debug;
use num::one;
use num::pow::pow;
use num::BigUint;

use super::DerivedConstraint;
use super::Multipliers;
use crate::basic_types::InvalidDigitLimit;
use crate::basic_types::Literal;
use crate::basic_types::PbConstraint;
use crate::engine::Assignments;

/// The policy that decides, once per resolution step, whether the derived constraint is
/// degraded to a clause before the merge.
///
/// The strategy is consulted after the reason has been weakened and the multipliers have been
/// fixed. When it degrades, it rewrites the derived constraint and the multipliers in place and
/// returns `true`; the resolver then skips the merge for that step.
pub trait DegradationStrategy: Debug {
    fn degrade(
        &mut self,
        derived: &mut DerivedConstraint,
        multipliers: &mut Multipliers,
        pivot: Literal,
        reason: &PbConstraint,
        assignments: &Assignments,
    ) -> bool;
}

/// Degrades the derived constraint to a clause as soon as a coefficient the upcoming merge
/// would produce reaches the configured number of decimal digits. This trades proof strength
/// for bounded arithmetic: the clause {complement of the pivot} ∪ {falsified literals of the
/// accumulator} is much weaker than the linear constraint it replaces, but every later step of
/// the conflict stays clausal and cheap.
///
/// The digit check compares against a precomputed power of ten; coefficients are never
/// formatted to count their digits.
#[derive(Debug)]
pub struct SwitchToClause {
    digit_limit: u32,
    /// `10^digit_limit`; a coefficient is out of bounds iff it is >= this threshold.
    threshold: BigUint,
    number_of_reductions: u64,
}

impl SwitchToClause {
    pub fn with_digit_limit(digit_limit: u32) -> Result<Self, InvalidDigitLimit> {
        if digit_limit == 0 {
            return Err(InvalidDigitLimit);
        }
        Ok(SwitchToClause {
            digit_limit,
            threshold: pow(BigUint::from(10u32), digit_limit as usize),
            number_of_reductions: 0,
        })
    }

    pub fn digit_limit(&self) -> u32 {
        self.digit_limit
    }

    /// The number of degradations performed over the lifetime of this strategy, at most one
    /// per conflict.
    pub fn number_of_reductions(&self) -> u64 {
        self.number_of_reductions
    }

    fn exceeds_limit(&self, coefficient: &BigUint) -> bool {
        *coefficient >= self.threshold
    }

    /// Checks every coefficient the merge would store: combined coefficients for variables the
    /// reason mentions, and scaled accumulator coefficients for the rest. The pivot pair
    /// cancels exactly and is not checked.
    fn projection_exceeds_limit(
        &self,
        derived: &DerivedConstraint,
        multipliers: &Multipliers,
        pivot: Literal,
        reason: &PbConstraint,
    ) -> bool {
        let Multipliers {
            coef_mult,
            coef_mult_cons,
        } = multipliers;

        for (literal, coefficient) in reason.iter() {
            if literal == pivot {
                continue;
            }
            let scaled = coefficient * coef_mult_cons;
            let combined = if let Some(existing) = derived.weighted_literals.get(literal) {
                scaled + existing * coef_mult
            } else if let Some(opposed) = derived.weighted_literals.get(!literal) {
                // complementary occurrence: the smaller side cancels
                let opposed = opposed * coef_mult;
                if opposed >= scaled {
                    opposed - scaled
                } else {
                    scaled - opposed
                }
            } else {
                scaled
            };
            if self.exceeds_limit(&combined) {
                return true;
            }
        }

        derived.weighted_literals.iter().any(|(literal, weight)| {
            !reason.contains_variable_of(literal) && self.exceeds_limit(&(weight * coef_mult))
        })
    }
}

impl DegradationStrategy for SwitchToClause {
    fn degrade(
        &mut self,
        derived: &mut DerivedConstraint,
        multipliers: &mut Multipliers,
        pivot: Literal,
        reason: &PbConstraint,
        assignments: &Assignments,
    ) -> bool {
        // Degradation is monotone within a conflict; once clausal, coefficients stay 0/1 and
        // can never reach the threshold again.
        if derived.has_been_reduced {
            return false;
        }
        if !self.projection_exceeds_limit(derived, multipliers, pivot, reason) {
            return false;
        }

        debug!(
            "coefficient would exceed {} digits, reducing the derived constraint to a clause",
            self.digit_limit
        );
        derived.reduce_to_clause(!pivot, assignments);
        // The accumulator is now a unit clause, so the step multipliers collapse to one.
        multipliers.coef_mult = one();
        multipliers.coef_mult_cons = derived.weighted_literals.weight(!pivot);
        self.number_of_reductions += 1;
        true
    }
}

/// Never degrades: conflict analysis runs full-precision cutting planes no matter how large
/// the coefficients grow.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeepLinear;

impl DegradationStrategy for KeepLinear {
    fn degrade(
        &mut self,
        _derived: &mut DerivedConstraint,
        _multipliers: &mut Multipliers,
        _pivot: Literal,
        _reason: &PbConstraint,
        _assignments: &Assignments,
    ) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use num::One;

    use super::*;

    fn big(value: u32) -> BigUint {
        BigUint::from(value)
    }

    fn grown_literals(assignments: &mut Assignments, n: u32) -> Vec<Literal> {
        (0..n)
            .map(|_| Literal::new(assignments.grow(), true))
            .collect()
    }

    #[test]
    fn a_zero_digit_limit_is_rejected() {
        assert_eq!(
            SwitchToClause::with_digit_limit(0).unwrap_err(),
            InvalidDigitLimit
        );
    }

    #[test]
    fn the_threshold_is_a_power_of_ten() {
        let strategy = SwitchToClause::with_digit_limit(2).unwrap();
        assert!(!strategy.exceeds_limit(&big(99)));
        assert!(strategy.exceeds_limit(&big(100)));
    }

    #[test]
    fn degradation_rewrites_the_accumulator_to_a_clause() {
        let mut assignments = Assignments::default();
        let x = grown_literals(&mut assignments, 4);
        assignments.decide(!x[1]);
        assignments.decide(!x[2]);
        assignments.decide(!x[0]);

        // C1 from the running example: 3 x0 + 2 x1 + 2 x2 >= 4, all three falsified
        let mut derived = DerivedConstraint::from_constraint(&PbConstraint::new(
            vec![(x[0], big(3)), (x[1], big(2)), (x[2], big(2))],
            big(4),
        ));
        // C2: 5 ~x0 + 1 x3 >= 5, the reason for ~x0
        let reason = PbConstraint::new(vec![(!x[0], big(5)), (x[3], big(1))], big(5));
        let mut multipliers = Multipliers {
            coef_mult: big(5),
            coef_mult_cons: big(3),
        };

        let mut strategy = SwitchToClause::with_digit_limit(1).unwrap();
        // x1 would combine to 2 * 5 = 10, which has two digits
        assert!(strategy.degrade(
            &mut derived,
            &mut multipliers,
            !x[0],
            &reason,
            &assignments
        ));

        assert!(derived.has_been_reduced);
        assert_eq!(derived.degree, BigUint::one());
        for literal in [x[0], x[1], x[2]] {
            assert_eq!(derived.weighted_literals.weight(literal), BigUint::one());
        }
        assert_eq!(derived.weighted_literals.len(), 3);
        assert_eq!(multipliers, Multipliers::default());
        assert_eq!(strategy.number_of_reductions(), 1);
    }

    #[test]
    fn no_degradation_when_all_projected_coefficients_fit() {
        let mut assignments = Assignments::default();
        let x = grown_literals(&mut assignments, 3);
        assignments.decide(!x[0]);
        assignments.decide(!x[1]);

        let mut derived = DerivedConstraint::from_constraint(&PbConstraint::new(
            vec![(x[0], big(2)), (x[1], big(1))],
            big(2),
        ));
        let reason = PbConstraint::new(vec![(!x[0], big(2)), (x[2], big(1))], big(2));
        let mut multipliers = Multipliers::default();

        let mut strategy = SwitchToClause::with_digit_limit(1).unwrap();
        assert!(!strategy.degrade(
            &mut derived,
            &mut multipliers,
            !x[0],
            &reason,
            &assignments
        ));
        assert!(!derived.has_been_reduced);
        assert_eq!(strategy.number_of_reductions(), 0);
    }

    #[test]
    fn degradation_is_monotone_within_a_conflict() {
        let mut assignments = Assignments::default();
        let x = grown_literals(&mut assignments, 2);
        assignments.decide(!x[0]);
        assignments.decide(!x[1]);

        let mut derived = DerivedConstraint::from_constraint(&PbConstraint::new(
            vec![(x[0], big(1)), (x[1], big(1))],
            big(1),
        ));
        derived.has_been_reduced = true;

        // even an absurd projection cannot degrade twice
        let reason = PbConstraint::new(vec![(!x[0], big(1)), (x[1], big(900))], big(900));
        let mut multipliers = Multipliers {
            coef_mult: big(900),
            coef_mult_cons: big(900),
        };
        let mut strategy = SwitchToClause::with_digit_limit(1).unwrap();
        assert!(!strategy.degrade(
            &mut derived,
            &mut multipliers,
            !x[0],
            &reason,
            &assignments
        ));
    }

    #[test]
    fn keep_linear_never_degrades() {
        let mut assignments = Assignments::default();
        let x = grown_literals(&mut assignments, 2);
        assignments.decide(!x[0]);

        let mut derived = DerivedConstraint::from_constraint(&PbConstraint::new(
            vec![(x[0], big(1_000_000)), (x[1], big(999_999))],
            big(1_000_000),
        ));
        let reason = PbConstraint::new(vec![(!x[0], big(999_983))], big(999_983));
        let mut multipliers = Multipliers {
            coef_mult: big(999_983),
            coef_mult_cons: big(1_000_000),
        };

        assert!(!KeepLinear.degrade(
            &mut derived,
            &mut multipliers,
            !x[0],
            &reason,
            &assignments
        ));
        assert!(!derived.has_been_reduced);
    }
}
