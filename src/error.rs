// error.rs - Typed errors for pedigree validation and inference

use thiserror::Error;

/// Errors raised while validating a pedigree into a closed world.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedPedigreeError {
    /// A parent reference does not resolve to any individual in the set
    #[error("unknown parent '{parent}' referenced by '{child}'")]
    DanglingParent { child: String, parent: String },

    /// Exactly one of mother/father is present (parents must be both known or both unknown)
    #[error("'{name}' has exactly one known parent; parents must be both known or both unknown")]
    HalfSpecifiedParents { name: String },

    /// Two individuals share the same identifier
    #[error("duplicate individual '{0}'")]
    DuplicateIndividual(String),

    /// More individuals than the partition bitmask can address
    #[error("pedigree has {count} individuals, more than the supported maximum of {max}")]
    TooManyIndividuals { count: usize, max: usize },
}

/// Raised during normalization when a person's accumulated probability mass
/// is exactly zero: the observed evidence is impossible under the tables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("accumulated probability for '{name}' ({field}) sums to zero: evidence is impossible under the current tables")]
pub struct DegenerateDistributionError {
    pub name: String,
    pub field: &'static str,
}

/// Errors surfaced by a full inference run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InferenceError {
    #[error(transparent)]
    MalformedPedigree(#[from] MalformedPedigreeError),

    #[error(transparent)]
    DegenerateDistribution(#[from] DegenerateDistributionError),
}
