//! Linear objectives over literals and their composition into a single objective.

mod composition;
mod objective_function;

pub use composition::compose;
pub use composition::CompositionError;
pub use composition::CompositionStrategy;
pub use objective_function::ObjectiveFunction;
