use clap::ValueEnum;
use serde::Serialize;

use crate::basic_types::InvalidDigitLimit;
use crate::engine::conflict_analysis::DegradationStrategy;
use crate::engine::conflict_analysis::KeepLinear;
use crate::engine::conflict_analysis::SwitchToClause;

/// Options which determine how conflicts are analysed.
#[derive(Debug, Copy, Clone)]
pub struct ConflictAnalysisOptions {
    /// The number of decimal digits a coefficient of the derived constraint may grow to
    /// before degradation kicks in. Ignored by [`DegradationPolicy::KeepLinear`].
    pub coefficient_digit_limit: u32,
    /// Specifies which degradation policy the resolver consults.
    pub degradation_policy: DegradationPolicy,
}

impl Default for ConflictAnalysisOptions {
    fn default() -> Self {
        Self {
            coefficient_digit_limit: 20,
            degradation_policy: DegradationPolicy::SwitchToClause,
        }
    }
}

impl ConflictAnalysisOptions {
    /// Builds the configured degradation strategy. An unusable digit limit is rejected here,
    /// at setup, rather than in the middle of a conflict.
    pub fn build_degradation_strategy(
        &self,
    ) -> Result<Box<dyn DegradationStrategy>, InvalidDigitLimit> {
        match self.degradation_policy {
            DegradationPolicy::SwitchToClause => Ok(Box::new(SwitchToClause::with_digit_limit(
                self.coefficient_digit_limit,
            )?)),
            DegradationPolicy::KeepLinear => Ok(Box::new(KeepLinear)),
        }
    }
}

/// The policy which bounds coefficient growth during conflict analysis.
#[derive(ValueEnum, Default, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DegradationPolicy {
    /// Degrade the derived constraint to a clause once a coefficient would grow past the
    /// digit limit.
    #[default]
    SwitchToClause,
    /// Never degrade; coefficients may grow without bound.
    KeepLinear,
}

impl std::fmt::Display for DegradationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            DegradationPolicy::SwitchToClause => write!(f, "switch-to-clause"),
            DegradationPolicy::KeepLinear => write!(f, "keep-linear"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_build() {
        assert!(ConflictAnalysisOptions::default()
            .build_degradation_strategy()
            .is_ok());
    }

    #[test]
    fn a_zero_digit_limit_is_rejected_at_setup() {
        let options = ConflictAnalysisOptions {
            coefficient_digit_limit: 0,
            degradation_policy: DegradationPolicy::SwitchToClause,
        };
        assert_eq!(
            options.build_degradation_strategy().unwrap_err(),
            InvalidDigitLimit
        );
    }

    #[test]
    fn keep_linear_does_not_use_the_digit_limit() {
        let options = ConflictAnalysisOptions {
            coefficient_digit_limit: 0,
            degradation_policy: DegradationPolicy::KeepLinear,
        };
        assert!(options.build_degradation_strategy().is_ok());
    }
}
