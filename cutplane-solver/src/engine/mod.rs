//! The solver-facing engine components: the assignment trail, conflict analysis, and the
//! termination conditions under which long-running analysis can be interrupted.

mod analysis_statistics;
mod assignments;
pub mod conflict_analysis;
pub mod termination;

pub use analysis_statistics::ConflictAnalysisStatistics;
pub use assignments::Assignments;
pub use assignments::TrailEntry;
