use crate::basic_types::PbConstraint;

/// The outcome of analysing one conflict: the constraint to learn and the decision level to
/// backjump to. After backjumping to `backjump_level` the constraint is propagating (or still
/// falsified, in which case it conflicts again at that level).
#[derive(Debug, Clone)]
pub struct LearnedConstraint {
    pub constraint: PbConstraint,
    pub backjump_level: u32,
}
