// cpt.rs - Conditional probability tables and hidden-state types

use serde::{Deserialize, Serialize};

/// Number of gene copies an individual carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneState {
    ZeroCopies,
    OneCopy,
    TwoCopies,
}

impl GeneState {
    pub const ALL: [GeneState; 3] = [GeneState::ZeroCopies, GeneState::OneCopy, GeneState::TwoCopies];

    /// Copy count as a table index (0, 1 or 2)
    pub fn index(self) -> usize {
        match self {
            GeneState::ZeroCopies => 0,
            GeneState::OneCopy => 1,
            GeneState::TwoCopies => 2,
        }
    }
}

/// Whether an individual exhibits the observable trait
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraitState {
    Present,
    Absent,
}

impl TraitState {
    pub const ALL: [TraitState; 2] = [TraitState::Present, TraitState::Absent];

    /// Table index (0 = present, 1 = absent)
    pub fn index(self) -> usize {
        match self {
            TraitState::Present => 0,
            TraitState::Absent => 1,
        }
    }

    pub fn from_bool(present: bool) -> Self {
        if present {
            TraitState::Present
        } else {
            TraitState::Absent
        }
    }
}

/// Conditional probability tables for the inheritance network.
///
/// Immutable once constructed; passed explicitly into the joint-probability
/// calculator rather than read from a global.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CptConfig {
    /// Unconditional probability of carrying 0, 1 or 2 copies (founders)
    pub gene_prior: [f64; 3],
    /// Probability of (trait present, trait absent) given 0, 1 or 2 copies
    pub trait_given_gene: [[f64; 2]; 3],
    /// Probability that a copy flips state when passed to a child
    pub mutation: f64,
}

impl Default for CptConfig {
    fn default() -> Self {
        Self {
            gene_prior: [0.96, 0.03, 0.01],
            trait_given_gene: [[0.01, 0.99], [0.56, 0.44], [0.65, 0.35]],
            mutation: 0.01,
        }
    }
}

impl CptConfig {
    const ROW_SUM_TOLERANCE: f64 = 1e-9;

    /// Prior probability of a founder carrying `gene` copies
    pub fn prior(&self, gene: GeneState) -> f64 {
        self.gene_prior[gene.index()]
    }

    /// Probability of the trait state given the gene copy count
    pub fn trait_prob(&self, gene: GeneState, trait_state: TraitState) -> f64 {
        self.trait_given_gene[gene.index()][trait_state.index()]
    }

    /// Probability that a parent with `gene` copies passes a copy to a child.
    ///
    /// A heterozygous parent transmits either chromosome with equal chance;
    /// homozygous parents transmit (or fail to transmit) the copy unless it
    /// mutates in flight.
    pub fn transmission_prob(&self, gene: GeneState) -> f64 {
        match gene {
            GeneState::OneCopy => 0.5,
            GeneState::TwoCopies => 1.0 - self.mutation,
            GeneState::ZeroCopies => self.mutation,
        }
    }

    /// Check that every distribution in the tables is a valid probability
    /// distribution and the mutation rate is a probability.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.mutation) {
            return Err(format!(
                "Mutation rate must be between 0.0 and 1.0, got {}",
                self.mutation
            ));
        }

        if self.gene_prior.iter().any(|p| *p < 0.0) {
            return Err("Gene prior probabilities must be non-negative".to_string());
        }
        let prior_sum: f64 = self.gene_prior.iter().sum();
        if (prior_sum - 1.0).abs() > Self::ROW_SUM_TOLERANCE {
            return Err(format!("Gene prior must sum to 1.0, sums to {}", prior_sum));
        }

        for (copies, row) in self.trait_given_gene.iter().enumerate() {
            if row.iter().any(|p| *p < 0.0) {
                return Err(format!(
                    "Trait probabilities for {} copies must be non-negative",
                    copies
                ));
            }
            let row_sum: f64 = row.iter().sum();
            if (row_sum - 1.0).abs() > Self::ROW_SUM_TOLERANCE {
                return Err(format!(
                    "Trait probabilities for {} copies must sum to 1.0, sum to {}",
                    copies, row_sum
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables_validate() {
        let cpt = CptConfig::default();
        assert!(cpt.validate().is_ok());
        assert_eq!(cpt.prior(GeneState::ZeroCopies), 0.96);
        assert_eq!(cpt.prior(GeneState::OneCopy), 0.03);
        assert_eq!(cpt.prior(GeneState::TwoCopies), 0.01);
        assert_eq!(cpt.trait_prob(GeneState::OneCopy, TraitState::Present), 0.56);
        assert_eq!(cpt.trait_prob(GeneState::ZeroCopies, TraitState::Absent), 0.99);
    }

    #[test]
    fn test_transmission_probabilities() {
        let cpt = CptConfig::default();
        assert_eq!(cpt.transmission_prob(GeneState::OneCopy), 0.5);
        assert!((cpt.transmission_prob(GeneState::TwoCopies) - 0.99).abs() < 1e-12);
        assert!((cpt.transmission_prob(GeneState::ZeroCopies) - 0.01).abs() < 1e-12);

        let certain = CptConfig {
            mutation: 0.0,
            ..CptConfig::default()
        };
        assert_eq!(certain.transmission_prob(GeneState::TwoCopies), 1.0);
        assert_eq!(certain.transmission_prob(GeneState::ZeroCopies), 0.0);
    }

    #[test]
    fn test_invalid_mutation_rejected() {
        let cpt = CptConfig {
            mutation: 1.5,
            ..CptConfig::default()
        };
        assert!(cpt.validate().is_err());
    }

    #[test]
    fn test_unnormalized_rows_rejected() {
        let mut cpt = CptConfig::default();
        cpt.trait_given_gene[1] = [0.56, 0.56];
        assert!(cpt.validate().is_err());

        let mut cpt = CptConfig::default();
        cpt.gene_prior = [0.5, 0.5, 0.5];
        assert!(cpt.validate().is_err());
    }

    #[test]
    fn test_state_indices() {
        assert_eq!(GeneState::ZeroCopies.index(), 0);
        assert_eq!(GeneState::TwoCopies.index(), 2);
        assert_eq!(TraitState::Present.index(), 0);
        assert_eq!(TraitState::from_bool(false), TraitState::Absent);
    }
}
