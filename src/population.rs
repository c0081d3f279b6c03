use crate::error::{Result, SimError};
use crate::genotype::{Genotype, Phenotype};
use crate::params::validate_fractions;
use crate::random::RandomSource;

use crate::genotype::Allele::{A, B, O};

// Equally likely genotypes used to seed each phenotype.
const PHENOTYPE_O_GENOTYPES: [Genotype; 1] = [Genotype { first: O, second: O }];
const PHENOTYPE_A_GENOTYPES: [Genotype; 3] = [
    Genotype { first: A, second: A },
    Genotype { first: A, second: O },
    Genotype { first: O, second: A },
];
const PHENOTYPE_B_GENOTYPES: [Genotype; 3] = [
    Genotype { first: B, second: B },
    Genotype { first: B, second: O },
    Genotype { first: O, second: B },
];
const PHENOTYPE_AB_GENOTYPES: [Genotype; 2] = [
    Genotype { first: A, second: B },
    Genotype { first: B, second: A },
];

/// One mating pool.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Population {
    individuals: Vec<Genotype>,
}

impl Population {
    pub fn new(individuals: Vec<Genotype>) -> Self {
        Self { individuals }
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn individuals(&self) -> &[Genotype] {
        &self.individuals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Genotype> {
        self.individuals.iter()
    }

    pub fn count_phenotype(&self, phenotype: Phenotype) -> usize {
        self.iter().filter(|g| g.phenotype() == phenotype).count()
    }
}

fn genotypes_for(phenotype: Phenotype) -> &'static [Genotype] {
    match phenotype {
        Phenotype::O => &PHENOTYPE_O_GENOTYPES,
        Phenotype::A => &PHENOTYPE_A_GENOTYPES,
        Phenotype::B => &PHENOTYPE_B_GENOTYPES,
        Phenotype::AB => &PHENOTYPE_AB_GENOTYPES,
    }
}

/// Builds a population of `size` individuals whose phenotypes follow
/// `fractions` (ordered O, A, B, AB).
///
/// Individuals are laid out in blocks, one per phenotype. Block
/// boundaries are `floor(size * cumulative fraction)`, so any
/// rounding remainder ends up in the AB block. Within a block the
/// genotype is drawn uniformly from the ordered allele pairs that
/// express the phenotype, e.g. {A/A, A/O, O/A} for A.
pub fn create_population<R: RandomSource + ?Sized>(
    size: usize,
    fractions: &[f64],
    rng: &mut R,
) -> Result<Population> {
    if size == 0 {
        return Err(SimError::empty_population("population size must be > 0"));
    }
    validate_fractions(fractions)?;

    let mut cumulative = 0.0;
    let mut boundaries = [size; 4];
    for (boundary, fraction) in boundaries.iter_mut().zip(fractions).take(3) {
        cumulative += fraction;
        *boundary = ((size as f64 * cumulative).floor() as usize).min(size);
    }

    let individuals = (0..size)
        .map(|index| {
            let block = boundaries.iter().position(|b| index < *b).unwrap_or(3);
            let choices = genotypes_for(Phenotype::ALL[block]);
            if choices.len() == 1 {
                choices[0]
            } else {
                choices[rng.uniform_index(choices.len())]
            }
        })
        .collect::<Vec<Genotype>>();

    Ok(Population::new(individuals))
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use rand::SeedableRng;

    fn rng(seed: u64) -> rand::rngs::StdRng {
        rand::rngs::StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_all_o() {
        let pop = create_population(100, &[1.0, 0.0, 0.0, 0.0], &mut rng(1)).unwrap();
        assert_eq!(pop.len(), 100);
        assert!(pop.iter().all(|g| g.phenotype() == Phenotype::O));
    }

    #[test]
    fn test_all_ab() {
        let pop = create_population(100, &[0.0, 0.0, 0.0, 1.0], &mut rng(2)).unwrap();
        assert_eq!(pop.len(), 100);
        assert!(pop.iter().all(|g| g.phenotype() == Phenotype::AB));
        assert!(pop.iter().any(|g| *g == Genotype::new(A, B)));
        assert!(pop.iter().any(|g| *g == Genotype::new(B, A)));
    }

    #[test]
    fn test_block_layout() {
        let pop = create_population(8, &[0.25, 0.25, 0.25, 0.25], &mut rng(3)).unwrap();
        let phenotypes = pop.iter().map(|g| g.phenotype()).collect::<Vec<_>>();
        use Phenotype as P;
        assert_eq!(
            phenotypes,
            vec![P::O, P::O, P::A, P::A, P::B, P::B, P::AB, P::AB]
        );
    }

    #[test]
    fn test_remainder_goes_to_ab() {
        // floor(10 * 0.15) = 1, floor(10 * 0.3) = 3, floor(10 * 0.45) = 4
        let pop = create_population(10, &[0.15, 0.15, 0.15, 0.55], &mut rng(4)).unwrap();
        assert_eq!(pop.count_phenotype(Phenotype::O), 1);
        assert_eq!(pop.count_phenotype(Phenotype::A), 2);
        assert_eq!(pop.count_phenotype(Phenotype::B), 1);
        assert_eq!(pop.count_phenotype(Phenotype::AB), 6);
    }

    #[test]
    fn test_heterozygotes_twice_as_common() {
        let pop = create_population(30000, &[0.0, 1.0, 0.0, 0.0], &mut rng(5)).unwrap();
        let homozygous = pop.iter().filter(|g| **g == Genotype::new(A, A)).count();
        let fraction = homozygous as f64 / pop.len() as f64;
        assert!((fraction - 1.0 / 3.0).abs() < 0.02, "{fraction}");
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(
            create_population(0, &[1.0, 0.0, 0.0, 0.0], &mut rng(6)),
            Err(SimError::EmptyPopulation { .. })
        ));
        assert!(matches!(
            create_population(10, &[0.5, 0.0, 0.0], &mut rng(6)),
            Err(SimError::InvalidConfiguration { .. })
        ));
    }

    proptest! {
        #[test]
        fn size_is_respected(seed in 0..u64::MAX, size in 1usize..500) {
            let pop = create_population(size, &[0.1, 0.2, 0.3, 0.4], &mut rng(seed)).unwrap();
            prop_assert_eq!(pop.len(), size);
        }
    }
}
