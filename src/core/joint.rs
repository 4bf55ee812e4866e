// joint.rs - Joint probability of one fully-specified world

use crate::core::cpt::{CptConfig, GeneState};
use crate::core::partition::WorldHypothesis;
use crate::data::Pedigree;

/// Probability that the exact joint assignment in `world` occurs.
///
/// The pedigree factorizes the joint: conditioned on its parents' copy
/// counts, each individual's gene and trait are independent of every
/// non-ancestor, so the whole-pedigree probability is the product of one
/// conditional contribution per person. Returns 0.0 for impossible worlds;
/// never negative, never an error.
pub fn joint_probability(pedigree: &Pedigree, world: &WorldHypothesis, cpt: &CptConfig) -> f64 {
    let mut joint = 1.0;

    for (idx, person) in pedigree.people().iter().enumerate() {
        let gene = world.gene_of(idx);

        let gene_prob = match person.parents() {
            // Founders draw from the unconditional prior
            None => cpt.prior(gene),
            Some((mother, father)) => {
                let from_mother = cpt.transmission_prob(world.gene_of(mother));
                let from_father = cpt.transmission_prob(world.gene_of(father));
                match gene {
                    GeneState::TwoCopies => from_mother * from_father,
                    GeneState::OneCopy => {
                        from_mother * (1.0 - from_father) + from_father * (1.0 - from_mother)
                    }
                    GeneState::ZeroCopies => (1.0 - from_mother) * (1.0 - from_father),
                }
            }
        };

        // The trait depends only on the copy count, not on the parents
        joint *= gene_prob * cpt.trait_prob(gene, world.trait_of(idx));
    }

    joint
}
