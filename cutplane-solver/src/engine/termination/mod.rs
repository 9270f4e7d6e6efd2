//! A [`TerminationCondition`] is polled by the conflict analyzer between resolution steps. It
//! indicates when analysis should be abandoned even though no constraint has been learned yet,
//! for example because a time budget ran out.

pub mod indefinite;
pub mod time_budget;

pub use indefinite::Indefinite;
pub use time_budget::TimeBudget;

/// The central trait that defines a termination condition. Polled only between resolution
/// steps; a single step is never interrupted.
pub trait TerminationCondition {
    /// Returns `true` when the analyzer should stop, `false` otherwise.
    fn should_stop(&mut self) -> bool;
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        match self {
            Some(t) => t.should_stop(),
            None => false,
        }
    }
}
