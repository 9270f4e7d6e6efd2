use crate::engine::Assignments;
use crate::engine::ConflictAnalysisStatistics;

/// The solver state the conflict analyzer works on: the (read-only) assignments and the
/// statistics it reports into.
#[derive(Debug)]
pub struct ConflictAnalysisContext<'a> {
    pub assignments: &'a Assignments,
    pub statistics: &'a mut ConflictAnalysisStatistics,
}
