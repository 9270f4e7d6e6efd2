use std::fmt::Debug;
use std::fmt::Display;

use num::cast::AsPrimitive;
use num::traits::NumAssign;

use super::MovingAverage;

/// The running mean over every term added so far. This is what backs statistics that average
/// over the whole run, such as the learned constraint length.
#[derive(Default, Debug, Copy, Clone)]
pub struct CumulativeMovingAverage<Term> {
    sum: Term,
    num_terms: u64,
}

impl<Term> Display for CumulativeMovingAverage<Term>
where
    Term: Debug + NumAssign + AsPrimitive<f64>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl<Term> MovingAverage<Term> for CumulativeMovingAverage<Term>
where
    Term: Debug + NumAssign + AsPrimitive<f64>,
{
    fn add_term(&mut self, new_term: Term) {
        self.sum += new_term;
        self.num_terms += 1
    }

    fn value(&self) -> f64 {
        if self.num_terms > 0 {
            self.sum.as_() / (self.num_terms as f64)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ConflictAnalysisStatistics;
    use crate::statistics::moving_averages::MovingAverage;

    #[test]
    fn the_average_follows_the_added_terms() {
        let mut average: CumulativeMovingAverage<u64> = CumulativeMovingAverage::default();
        average.add_term(10);
        assert_eq!(average.value(), 10.0);
        average.add_term(20);
        assert_eq!(average.value(), 15.0);
        average.add_term(30);
        assert_eq!(average.value(), 20.0);
    }

    #[test]
    fn an_empty_average_is_zero_and_displays_as_such() {
        let average: CumulativeMovingAverage<u64> = CumulativeMovingAverage::default();
        assert_eq!(average.value(), 0.0);
        assert_eq!(average.to_string(), "0");
    }

    #[test]
    fn learned_constraint_lengths_average_through_the_statistics_struct() {
        let mut statistics = ConflictAnalysisStatistics::default();
        statistics.average_learned_constraint_length.add_term(3);
        statistics.average_learned_constraint_length.add_term(1);

        assert_eq!(statistics.average_learned_constraint_length.value(), 2.0);
    }
}
