// infer.rs - Exact inference driver over all candidate worlds

use crate::core::cpt::CptConfig;
use crate::core::joint::joint_probability;
use crate::core::partition::{disjoint_pairs, trait_partitions, WorldHypothesis};
use crate::core::posterior::PosteriorTable;
use crate::data::Pedigree;
use crate::error::InferenceError;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::Instant;

/// Exact posterior calculator for one set of probability tables.
///
/// Owns an immutable `CptConfig`; each `infer` call enumerates every
/// evidence-consistent world of the given pedigree, so runtime is O(6^n)
/// in the number of individuals.
pub struct InferenceEngine {
    cpt: CptConfig,
}

impl Default for InferenceEngine {
    fn default() -> Self {
        Self::new(CptConfig::default())
    }
}

impl InferenceEngine {
    pub fn new(cpt: CptConfig) -> Self {
        Self { cpt }
    }

    pub fn cpt(&self) -> &CptConfig {
        &self.cpt
    }

    /// Compute normalized gene and trait posteriors for every individual.
    ///
    /// Trait partitions violating observed evidence are never scored. Worlds
    /// are scored in parallel per trait partition; partial tables are merged
    /// in partition order, so identical input yields bit-for-bit identical
    /// output regardless of thread count.
    pub fn infer(&self, pedigree: &Pedigree) -> Result<PosteriorTable, InferenceError> {
        let universe = pedigree.universe_mask();
        let (known, required) = pedigree.evidence_masks();

        let trait_masks: Vec<u64> = trait_partitions(universe, known, required).collect();
        let gene_partitions = 3f64.powi(pedigree.len() as i32);
        println!(
            "🔄 Scoring {} trait partitions × {:.0} gene partitions each...",
            trait_masks.len(),
            gene_partitions
        );

        let start = Instant::now();
        let pb = ProgressBar::new(trait_masks.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) ETA: {eta}")
                .unwrap()
                .progress_chars("#>-"),
        );

        // Worlds are mutually independent: each trait partition gets its own
        // partial table, merged afterwards in a fixed order.
        let partials: Vec<PosteriorTable> = trait_masks
            .par_iter()
            .map(|&have_trait| {
                let mut partial = PosteriorTable::zeroed(pedigree);
                for (one_gene, two_genes) in disjoint_pairs(universe) {
                    let world = WorldHypothesis {
                        one_gene,
                        two_genes,
                        have_trait,
                    };
                    partial.accumulate(&world, joint_probability(pedigree, &world, &self.cpt));
                }
                pb.inc(1);
                partial
            })
            .collect();

        pb.finish_and_clear();

        let mut posteriors = PosteriorTable::zeroed(pedigree);
        for partial in &partials {
            posteriors.merge(partial);
        }
        posteriors.normalize()?;

        println!(
            "✅ Posteriors computed in {:.2}s",
            start.elapsed().as_secs_f64()
        );
        Ok(posteriors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cpt::{GeneState, TraitState};
    use crate::data::{PersonRecord, TraitEvidence};
    use crate::error::InferenceError;

    fn record(
        name: &str,
        mother: Option<&str>,
        father: Option<&str>,
        evidence: TraitEvidence,
    ) -> PersonRecord {
        PersonRecord {
            name: name.to_string(),
            mother: mother.map(|s| s.to_string()),
            father: father.map(|s| s.to_string()),
            evidence,
        }
    }

    fn potter_family(harry_evidence: TraitEvidence) -> Pedigree {
        Pedigree::from_records(&[
            record("Harry", Some("Lily"), Some("James"), harry_evidence),
            record("James", None, None, TraitEvidence::Unknown),
            record("Lily", None, None, TraitEvidence::Unknown),
        ])
        .unwrap()
    }

    #[test]
    fn test_single_founder_matches_prior() {
        let pedigree = Pedigree::from_records(&[record("solo", None, None, TraitEvidence::Unknown)])
            .unwrap();
        let engine = InferenceEngine::default();
        let posteriors = engine.infer(&pedigree).unwrap();

        let solo = posteriors.get("solo").unwrap();
        assert!((solo.gene_prob(GeneState::ZeroCopies) - 0.96).abs() < 1e-9);
        assert!((solo.gene_prob(GeneState::OneCopy) - 0.03).abs() < 1e-9);
        assert!((solo.gene_prob(GeneState::TwoCopies) - 0.01).abs() < 1e-9);

        // Trait posterior is the prior-weighted mixture of the trait rows
        let expected_present = 0.96 * 0.01 + 0.03 * 0.56 + 0.01 * 0.65;
        assert!((solo.trait_prob(TraitState::Present) - expected_present).abs() < 1e-9);
        assert!((solo.trait_prob(TraitState::Absent) - (1.0 - expected_present)).abs() < 1e-9);
    }

    #[test]
    fn test_distributions_are_valid() {
        let pedigree = potter_family(TraitEvidence::Present);
        let posteriors = InferenceEngine::default().infer(&pedigree).unwrap();
        for (_, entry) in posteriors.iter() {
            let gene_sum: f64 = entry.gene.iter().sum();
            let trait_sum: f64 = entry.trait_dist.iter().sum();
            assert!((gene_sum - 1.0).abs() < 1e-6);
            assert!((trait_sum - 1.0).abs() < 1e-6);
            assert!(entry.gene.iter().all(|p| *p >= 0.0));
            assert!(entry.trait_dist.iter().all(|p| *p >= 0.0));
        }
    }

    #[test]
    fn test_observed_trait_is_certain_in_posterior() {
        let pedigree = potter_family(TraitEvidence::Present);
        let posteriors = InferenceEngine::default().infer(&pedigree).unwrap();
        let harry = posteriors.get("Harry").unwrap();
        assert_eq!(harry.trait_prob(TraitState::Present), 1.0);
        assert_eq!(harry.trait_prob(TraitState::Absent), 0.0);
    }

    #[test]
    fn test_child_evidence_propagates_to_parents() {
        let pedigree = potter_family(TraitEvidence::Present);
        let posteriors = InferenceEngine::default().infer(&pedigree).unwrap();

        // The unconditioned chance of carrying at least one copy is 0.04;
        // a trait-positive child must pull both parents above it
        let carrier_prior = 0.03 + 0.01;
        for parent in ["James", "Lily"] {
            let entry = posteriors.get(parent).unwrap();
            let carrier_posterior =
                entry.gene_prob(GeneState::OneCopy) + entry.gene_prob(GeneState::TwoCopies);
            assert!(carrier_posterior > carrier_prior);
        }
    }

    #[test]
    fn test_inference_is_idempotent() {
        let pedigree = potter_family(TraitEvidence::Present);
        let engine = InferenceEngine::default();
        let first = engine.infer(&pedigree).unwrap();
        let second = engine.infer(&pedigree).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_mutation_certain_child() {
        // All founders carry two copies and mutation is off: the child's
        // posterior collapses to two copies with certainty
        let cpt = CptConfig {
            gene_prior: [0.0, 0.0, 1.0],
            mutation: 0.0,
            ..CptConfig::default()
        };
        let pedigree = potter_family(TraitEvidence::Unknown);
        let posteriors = InferenceEngine::new(cpt).infer(&pedigree).unwrap();
        let harry = posteriors.get("Harry").unwrap();
        assert_eq!(harry.gene_prob(GeneState::ZeroCopies), 0.0);
        assert_eq!(harry.gene_prob(GeneState::OneCopy), 0.0);
        assert_eq!(harry.gene_prob(GeneState::TwoCopies), 1.0);
    }

    #[test]
    fn test_impossible_evidence_reports_degenerate_distribution() {
        // The trait is certain for every copy count, yet one individual is
        // observed without it: every consistent world has probability zero
        let cpt = CptConfig {
            trait_given_gene: [[1.0, 0.0], [1.0, 0.0], [1.0, 0.0]],
            ..CptConfig::default()
        };
        let pedigree = Pedigree::from_records(&[record(
            "solo",
            None,
            None,
            TraitEvidence::Absent,
        )])
        .unwrap();
        let err = InferenceEngine::new(cpt).infer(&pedigree).unwrap_err();
        assert!(matches!(err, InferenceError::DegenerateDistribution(_)));
    }

    #[test]
    fn test_empty_pedigree_yields_empty_table() {
        let pedigree = Pedigree::from_records(&[]).unwrap();
        let posteriors = InferenceEngine::default().infer(&pedigree).unwrap();
        assert!(posteriors.is_empty());
    }
}
