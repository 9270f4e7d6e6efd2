mod analysis_error;
mod literal;
mod pb_constraint;
mod propositional_variable;

pub use analysis_error::ConflictAnalysisError;
pub use analysis_error::InvalidDigitLimit;
pub use literal::Literal;
pub use pb_constraint::PbConstraint;
pub use propositional_variable::PropositionalVariable;

use fnv::FnvBuildHasher;

pub type HashMap<K, V, Hasher = FnvBuildHasher> = std::collections::HashMap<K, V, Hasher>;
