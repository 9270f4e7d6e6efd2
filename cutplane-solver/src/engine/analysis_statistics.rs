use crate::create_statistics_struct;
use crate::statistics::moving_averages::CumulativeMovingAverage;

create_statistics_struct!(
    /// Counters describing the behaviour of the conflict analyzer. Purely diagnostic; none of
    /// these values feed back into the analysis itself.
    ConflictAnalysisStatistics {
        /// Number of conflicts that have been analysed.
        num_conflicts_analysed: u64,
        /// Number of cutting-planes resolution steps over all conflicts.
        num_resolution_steps: u64,
        /// Number of times a reason was weakened to keep the cut conflicting.
        num_reason_weakenings: u64,
        /// Number of times the derived constraint was degraded to a clause.
        num_switches_to_clause: u64,
        /// Average number of terms in the learned constraints.
        average_learned_constraint_length: CumulativeMovingAverage<u64>,
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::moving_averages::MovingAverage;

    #[test]
    fn statistics_start_at_zero() {
        let statistics = ConflictAnalysisStatistics::default();
        assert_eq!(statistics.num_conflicts_analysed, 0);
        assert_eq!(statistics.num_resolution_steps, 0);
        assert_eq!(statistics.average_learned_constraint_length.value(), 0.0);
    }
}
