// lib.rs - pedprob library root

//! # pedprob - Exact gene/trait posterior calculator for family pedigrees
//!
//! This library computes, for every individual in a family pedigree, the
//! exact posterior probability of carrying 0, 1 or 2 copies of a gene and of
//! exhibiting the trait the gene influences, given partial observations of
//! who shows the trait.
//!
//! ## Features
//!
//! - **Exact inference**: every logically consistent assignment of hidden
//!   states is enumerated and scored, no sampling
//! - **Evidence filtering**: assignments contradicting an observation are
//!   discarded before they are ever scored
//! - **Configurable tables**: gene prior, trait-given-gene table and mutation
//!   rate can be overridden via TOML
//! - **Parallel scoring**: candidate worlds are scored across threads with
//!   deterministic, bit-for-bit reproducible results
//! - **Multiple formats**: TSV, CSV and JSON output
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use pedprob::prelude::*;
//!
//! // Load a pedigree (columns: name, mother, father, trait)
//! let pedigree = Pedigree::from_file(
//!     std::path::Path::new("family0.csv"),
//!     "-",  // missing character
//! )?;
//!
//! // Compute posteriors with the standard probability tables
//! let engine = InferenceEngine::new(CptConfig::default());
//! let posteriors = engine.infer(&pedigree).map_err(|e| e.to_string())?;
//!
//! for (name, entry) in posteriors.iter() {
//!     println!("{}: carrier probability {:.4}", name, entry.gene[1] + entry.gene[2]);
//! }
//! # Ok::<(), String>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod core;
pub mod data;
pub mod error;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, Config, ValidationResult};
    pub use crate::core::{joint_probability, CptConfig, GeneState, TraitState};
    pub use crate::core::{InferenceEngine, PersonPosterior, PosteriorTable, WorldHypothesis};
    pub use crate::data::{Pedigree, Person, PersonRecord, TraitEvidence};
    pub use crate::error::{DegenerateDistributionError, InferenceError, MalformedPedigreeError};
    pub use crate::output::{write_results, OutputFormat};
}

// Re-export main types at the root level for convenience
pub use crate::core::{CptConfig, GeneState, InferenceEngine, PosteriorTable, TraitState};
pub use crate::data::{Pedigree, PersonRecord, TraitEvidence};
pub use crate::error::{DegenerateDistributionError, InferenceError, MalformedPedigreeError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "pedprob v{} - Exact posterior calculator for gene/trait pedigrees",
        VERSION
    )
}
