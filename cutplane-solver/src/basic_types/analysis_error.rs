use thiserror::Error;

use super::Literal;

/// Faults that abort the analysis of a single conflict. The first two indicate an
/// internally inconsistent solver state and are not recoverable; [`Interrupted`] is raised when
/// the termination condition fires between resolution steps.
///
/// [`Interrupted`]: ConflictAnalysisError::Interrupted
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictAnalysisError {
    #[error("ran off the current decision level without becoming assertive")]
    ExhaustedTrail,
    #[error("propagated literal {0} has no reason")]
    MissingReason(Literal),
    #[error("conflict analysis was interrupted by the termination condition")]
    Interrupted,
}

/// The clause degradation bound is expressed in decimal digits and must allow at least one
/// digit; rejected at setup, before any conflict is analysed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("the coefficient digit limit must be at least 1")]
pub struct InvalidDigitLimit;
