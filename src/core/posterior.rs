// posterior.rs - Posterior accumulation and normalization

use crate::core::cpt::{GeneState, TraitState};
use crate::core::partition::WorldHypothesis;
use crate::data::Pedigree;
use crate::error::DegenerateDistributionError;

/// Per-person posterior buckets: unnormalized totals during accumulation,
/// probability distributions after `PosteriorTable::normalize`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonPosterior {
    /// Probability mass for carrying 0, 1 or 2 gene copies
    pub gene: [f64; 3],
    /// Probability mass for (trait present, trait absent)
    pub trait_dist: [f64; 2],
}

impl PersonPosterior {
    pub fn gene_prob(&self, gene: GeneState) -> f64 {
        self.gene[gene.index()]
    }

    pub fn trait_prob(&self, trait_state: TraitState) -> f64 {
        self.trait_dist[trait_state.index()]
    }
}

/// Posterior table over every individual of one pedigree, in pedigree order.
#[derive(Debug, Clone, PartialEq)]
pub struct PosteriorTable {
    names: Vec<String>,
    entries: Vec<PersonPosterior>,
}

impl PosteriorTable {
    /// Empty buckets for every individual of the pedigree
    pub fn zeroed(pedigree: &Pedigree) -> Self {
        Self {
            names: pedigree.people().iter().map(|p| p.name().to_string()).collect(),
            entries: vec![PersonPosterior::default(); pedigree.len()],
        }
    }

    /// Fold one scored world into the table.
    ///
    /// Called once per enumerated-and-unfiltered world; a zero joint
    /// probability contributes nothing but is still a valid accumulation.
    pub fn accumulate(&mut self, world: &WorldHypothesis, joint: f64) {
        for (idx, entry) in self.entries.iter_mut().enumerate() {
            entry.gene[world.gene_of(idx).index()] += joint;
            entry.trait_dist[world.trait_of(idx).index()] += joint;
        }
    }

    /// Add another table's mass into this one, bucket by bucket
    pub fn merge(&mut self, other: &PosteriorTable) {
        debug_assert_eq!(self.entries.len(), other.entries.len());
        for (entry, partial) in self.entries.iter_mut().zip(&other.entries) {
            for (bucket, value) in entry.gene.iter_mut().zip(&partial.gene) {
                *bucket += value;
            }
            for (bucket, value) in entry.trait_dist.iter_mut().zip(&partial.trait_dist) {
                *bucket += value;
            }
        }
    }

    /// Rescale every distribution to sum to 1.
    ///
    /// A zero sum means the evidence admits no world with positive
    /// probability under the tables; that is a configuration error, reported
    /// rather than silently propagated as NaN.
    pub fn normalize(&mut self) -> Result<(), DegenerateDistributionError> {
        for (name, entry) in self.names.iter().zip(self.entries.iter_mut()) {
            let gene_sum: f64 = entry.gene.iter().sum();
            if gene_sum == 0.0 {
                return Err(DegenerateDistributionError {
                    name: name.clone(),
                    field: "gene",
                });
            }
            for bucket in &mut entry.gene {
                *bucket /= gene_sum;
            }

            let trait_sum: f64 = entry.trait_dist.iter().sum();
            if trait_sum == 0.0 {
                return Err(DegenerateDistributionError {
                    name: name.clone(),
                    field: "trait",
                });
            }
            for bucket in &mut entry.trait_dist {
                *bucket /= trait_sum;
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&PersonPosterior> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|idx| &self.entries[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PersonPosterior)> {
        self.names
            .iter()
            .map(|n| n.as_str())
            .zip(self.entries.iter())
    }
}
