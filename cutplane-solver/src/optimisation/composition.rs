use clap::ValueEnum;
use num::BigInt;
use num::One;
use num::Zero;
use serde::Serialize;
use thiserror::Error;

use super::ObjectiveFunction;

/// How multiple objectives are combined into a single one.
#[derive(ValueEnum, Default, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompositionStrategy {
    /// Earlier objectives strictly dominate later ones; realised by scaling each objective
    /// past the combined range of everything below it.
    #[default]
    Lexicographic,
    /// All objectives are equally important. There is no single objective with this meaning,
    /// so composing more than one objective this way is rejected.
    Pareto,
}

impl std::fmt::Display for CompositionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            CompositionStrategy::Lexicographic => write!(f, "lexicographic"),
            CompositionStrategy::Pareto => write!(f, "pareto"),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionError {
    #[error("pareto composition of multiple objectives does not yield a single objective")]
    UnsupportedComposition,
}

/// Combines the given objectives, in priority order, into a single objective to minimise.
///
/// No objectives compose to `None`; a single objective is returned unchanged.
pub fn compose(
    strategy: CompositionStrategy,
    mut objectives: Vec<ObjectiveFunction>,
) -> Result<Option<ObjectiveFunction>, CompositionError> {
    match objectives.len() {
        0 => Ok(None),
        1 => Ok(objectives.pop()),
        _ => match strategy {
            CompositionStrategy::Lexicographic => Ok(Some(compose_lexicographic(objectives))),
            CompositionStrategy::Pareto => Err(CompositionError::UnsupportedComposition),
        },
    }
}

fn compose_lexicographic(objectives: Vec<ObjectiveFunction>) -> ObjectiveFunction {
    let mut factor = BigInt::one();
    let mut offset = BigInt::zero();
    let mut terms = Vec::new();

    // Walk from the least significant objective up. An objective with `range` r takes at most
    // r + 1 distinct values, so scaling the next objective by `factor` makes any improvement
    // in it outweigh the entire combined range below.
    for objective in objectives.into_iter().rev() {
        let step = objective.range() + BigInt::one();

        terms.extend(
            objective
                .iter()
                .map(|(literal, coefficient)| (literal, coefficient * &factor)),
        );
        offset += objective.offset() * &factor;

        factor *= step;
    }

    ObjectiveFunction::new(terms).shifted(offset)
}
