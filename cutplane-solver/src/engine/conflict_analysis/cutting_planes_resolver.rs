use std::rc::Rc;

use log::debug;
use log::trace;
use num::BigInt;
use num::Integer;
use num::One;
use num::Zero;

use super::ConflictAnalysisContext;
use super::DegradationStrategy;
use super::DerivedConstraint;
use super::LearnedConstraint;
use super::Multipliers;
use crate::basic_types::ConflictAnalysisError;
use crate::basic_types::Literal;
use crate::basic_types::PbConstraint;
use crate::cutplane_assert_advanced;
use crate::cutplane_assert_moderate;
use crate::cutplane_assert_ne_simple;
use crate::cutplane_assert_simple;
use crate::engine::termination::TerminationCondition;
use crate::engine::Assignments;
use crate::engine::ConflictAnalysisStatistics;
use crate::statistics::moving_averages::MovingAverage;

/// Analyses one conflict by cutting-planes resolution: starting from the falsified constraint,
/// it repeatedly cancels the most recently propagated participating literal against its reason
/// until the derived constraint is assertive. One instance is created per conflict and consumed
/// by [`resolve_conflict`](CuttingPlanesResolver::resolve_conflict).
#[derive(Debug)]
pub struct CuttingPlanesResolver {
    derived: DerivedConstraint,
    multipliers: Multipliers,
    implied_literal: Literal,
    decision_level: u32,
}

impl CuttingPlanesResolver {
    /// `conflicting_constraint` is the constraint found falsified while it propagated
    /// `implied_literal`'s complement away; it must contain the complement of
    /// `implied_literal`. `decision_level` is the level the conflict was detected at.
    pub fn new(
        conflicting_constraint: &PbConstraint,
        implied_literal: Literal,
        decision_level: u32,
    ) -> Self {
        cutplane_assert_simple!(
            conflicting_constraint
                .position_of(!implied_literal)
                .is_some(),
            "the conflicting constraint must contain the complement of the implied literal"
        );
        cutplane_assert_ne_simple!(decision_level, 0, "conflicts at the root are not analysed");

        CuttingPlanesResolver {
            derived: DerivedConstraint::from_constraint(conflicting_constraint),
            multipliers: Multipliers::default(),
            implied_literal,
            decision_level,
        }
    }

    /// Runs the resolution loop until the derived constraint is assertive and returns it
    /// together with its backjump level. The termination condition is polled between steps; a
    /// step itself is atomic.
    pub fn resolve_conflict(
        mut self,
        context: &mut ConflictAnalysisContext<'_>,
        strategy: &mut dyn DegradationStrategy,
        termination: &mut dyn TerminationCondition,
    ) -> Result<LearnedConstraint, ConflictAnalysisError> {
        let assignments = context.assignments;
        cutplane_assert_advanced!(
            self.derived.slack(assignments) < BigInt::zero(),
            "conflict analysis starts from a falsified constraint"
        );

        context.statistics.num_conflicts_analysed += 1;
        debug!(
            "analysing conflict at level {} (implied literal {})",
            self.decision_level, self.implied_literal
        );

        let mut trail_index = assignments.num_trail_entries();
        loop {
            // Checked before anything else so that an already-assertive conflicting constraint
            // resolves in zero steps.
            if self.derived.is_assertive(assignments, self.decision_level) {
                let constraint = self.derived.extract();
                let backjump_level = self.backjump_level(assignments);
                debug!("learned {constraint}, backjump to level {backjump_level}");
                context
                    .statistics
                    .average_learned_constraint_length
                    .add_term(constraint.len() as u64);
                return Ok(LearnedConstraint {
                    constraint,
                    backjump_level,
                });
            }

            if termination.should_stop() {
                return Err(ConflictAnalysisError::Interrupted);
            }

            let (pivot, reason) = self.next_pivot(assignments, &mut trail_index)?;
            trace!("resolving on {pivot} with reason {reason}");

            let degraded = self.resolve(pivot, reason.as_ref(), context, strategy);
            context.statistics.num_resolution_steps += 1;

            if degraded {
                context.statistics.num_switches_to_clause += 1;
                // The clause may have regained literals whose trail positions were already
                // passed; rescan from the top. Degradation is monotone within a conflict, so
                // this happens at most once.
                trail_index = assignments.num_trail_entries();
            }
        }
    }

    /// Walks the trail most-recent-first to the next literal of the current decision level
    /// whose complement occurs in the derived constraint.
    fn next_pivot(
        &self,
        assignments: &Assignments,
        trail_index: &mut usize,
    ) -> Result<(Literal, Rc<PbConstraint>), ConflictAnalysisError> {
        loop {
            if *trail_index == 0 {
                return Err(ConflictAnalysisError::ExhaustedTrail);
            }
            *trail_index -= 1;

            let entry = assignments.get_trail_entry(*trail_index);
            let pivot = entry.literal;
            if assignments.decision_level_of(pivot) != Some(self.decision_level) {
                // The trail is chronological; below the current level nothing is resolvable.
                return Err(ConflictAnalysisError::ExhaustedTrail);
            }
            if !self.derived.weighted_literals.contains(!pivot) {
                continue;
            }

            return match &entry.reason {
                Some(reason) => Ok((pivot, Rc::clone(reason))),
                None => Err(ConflictAnalysisError::MissingReason(pivot)),
            };
        }
    }

    /// One resolution step on `pivot`. Returns whether the degradation strategy fired, in
    /// which case the derived constraint was rewritten and no merge took place.
    fn resolve(
        &mut self,
        pivot: Literal,
        reason: &PbConstraint,
        context: &mut ConflictAnalysisContext<'_>,
        strategy: &mut dyn DegradationStrategy,
    ) -> bool {
        let assignments = context.assignments;

        let reason = if self.derived.has_been_reduced {
            // Clausal mode: resolving two clauses is always conflicting again, no weakening
            // or multiplier search is needed.
            self.multipliers = Multipliers::default();
            Self::clausified(reason, pivot, assignments)
        } else {
            self.reduce_until_conflict(reason, pivot, assignments, context.statistics)
        };

        if strategy.degrade(
            &mut self.derived,
            &mut self.multipliers,
            pivot,
            &reason,
            assignments,
        ) {
            return true;
        }

        self.merge(&reason, pivot);
        false
    }

    /// The clause {`pivot`} ∪ {falsified literals of `reason`}, the weakest form of the reason
    /// that still propagates the pivot.
    fn clausified(reason: &PbConstraint, pivot: Literal, assignments: &Assignments) -> PbConstraint {
        PbConstraint::clause(
            reason
                .iter()
                .map(|(literal, _)| literal)
                .filter(|&literal| literal == pivot || assignments.is_falsified(literal)),
        )
    }

    /// Clones the reason and weakens it until the upcoming cut is guaranteed to be falsified
    /// again: while `coef_mult * slack(derived) + coef_mult_cons * slack(reason)` is
    /// non-negative, a non-pivot literal that is not falsified is removed from the reason and
    /// the multipliers are recomputed. Fixes `self.multipliers` as a side effect.
    fn reduce_until_conflict(
        &mut self,
        reason: &PbConstraint,
        pivot: Literal,
        assignments: &Assignments,
        statistics: &mut ConflictAnalysisStatistics,
    ) -> PbConstraint {
        let mut reason = reason.clone();
        let derived_slack = self.derived.slack(assignments);

        loop {
            let Some(pivot_index) = reason.position_of(pivot) else {
                unreachable!("the reason for {pivot} must contain it")
            };
            let Some(accumulator_coefficient) = self.derived.weighted_literals.get(!pivot) else {
                unreachable!("the derived constraint must contain the complement of {pivot}")
            };

            let reason_coefficient = reason.coefficient(pivot_index);
            let g = accumulator_coefficient.gcd(reason_coefficient);
            self.multipliers.coef_mult = reason_coefficient / &g;
            self.multipliers.coef_mult_cons = accumulator_coefficient / &g;

            let estimate = BigInt::from(self.multipliers.coef_mult.clone()) * &derived_slack
                + BigInt::from(self.multipliers.coef_mult_cons.clone())
                    * reason.slack(assignments);
            if estimate < BigInt::zero() {
                return reason;
            }

            let weakened = (0..reason.len()).find(|&index| {
                reason.literal(index) != pivot && !assignments.is_falsified(reason.literal(index))
            });
            let Some(index) = weakened else {
                unreachable!(
                    "a cut with a propagating reason turns conflicting before the reason runs \
                     out of weakenable literals"
                )
            };
            trace!("weakening {} out of {reason}", reason.literal(index));
            reason.weaken_at(index);
            statistics.num_reason_weakenings += 1;
        }
    }

    /// Adds `coef_mult_cons` times the reason to `coef_mult` times the derived constraint,
    /// cancelling complementary literal pairs and lowering the degree by each cancelled
    /// amount, then saturates the coefficients at the new degree.
    fn merge(&mut self, reason: &PbConstraint, pivot: Literal) {
        let Multipliers {
            coef_mult,
            coef_mult_cons,
        } = self.multipliers.clone();

        if !coef_mult.is_one() {
            self.derived.weighted_literals.scale(&coef_mult);
            self.derived.degree *= &coef_mult;
        }
        // All degree contributions are added before any cancellation is subtracted, so the
        // running value never dips below the final degree.
        self.derived.degree += reason.degree() * &coef_mult_cons;

        for (literal, coefficient) in reason.iter() {
            let scaled = coefficient * &coef_mult_cons;
            match self.derived.weighted_literals.remove(!literal) {
                Some(opposed) => {
                    if opposed > scaled {
                        self.derived.degree -= &scaled;
                        self.derived
                            .weighted_literals
                            .accumulate(!literal, opposed - scaled);
                    } else if scaled > opposed {
                        self.derived.degree -= &opposed;
                        self.derived
                            .weighted_literals
                            .accumulate(literal, scaled - opposed);
                    } else {
                        self.derived.degree -= &opposed;
                    }
                }
                None => self.derived.weighted_literals.accumulate(literal, scaled),
            }
        }

        cutplane_assert_moderate!(
            !self.derived.weighted_literals.contains(pivot)
                && !self.derived.weighted_literals.contains(!pivot),
            "the pivot must cancel exactly"
        );

        let degree = self.derived.degree.clone();
        self.derived.weighted_literals.saturate(&degree);
    }

    /// The smallest level such that undoing everything above it leaves the derived constraint
    /// propagating (or still falsified, which makes it conflict again right away).
    fn backjump_level(&self, assignments: &Assignments) -> u32 {
        for level in 1..=self.decision_level {
            if self.derived.is_assertive(assignments, level)
                || self.derived.slack_at_level(assignments, level) < BigInt::zero()
            {
                return level - 1;
            }
        }
        unreachable!("an assertive constraint has a backjump level below the conflict level")
    }
}
