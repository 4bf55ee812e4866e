// mod.rs - Core inference module

pub mod cpt;
pub mod infer;
pub mod joint;
pub mod partition;
pub mod posterior;

// Re-export main types for convenience
pub use cpt::{CptConfig, GeneState, TraitState};
pub use infer::InferenceEngine;
pub use joint::joint_probability;
pub use partition::{disjoint_pairs, subsets, trait_partitions, WorldHypothesis};
pub use posterior::{PersonPosterior, PosteriorTable};
