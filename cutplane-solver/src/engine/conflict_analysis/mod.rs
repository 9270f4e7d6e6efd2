//! Conflict analysis by cutting-planes resolution over pseudo-Boolean constraints, with a
//! pluggable clause-degradation policy that bounds coefficient growth.

mod conflict_analysis_context;
mod cutting_planes_resolver;
mod degradation;
mod derived_constraint;
mod learned_constraint;
mod weighted_literals;

pub use conflict_analysis_context::ConflictAnalysisContext;
pub use cutting_planes_resolver::CuttingPlanesResolver;
pub use degradation::DegradationStrategy;
pub use degradation::KeepLinear;
pub use degradation::SwitchToClause;
pub use derived_constraint::DerivedConstraint;
pub use derived_constraint::Multipliers;
pub use learned_constraint::LearnedConstraint;
pub use weighted_literals::WeightedLiterals;
