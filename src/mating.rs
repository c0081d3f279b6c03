//! Random mating between the two pools.
//!
//! Every offspring gets one allele from a parent drawn (with
//! replacement) from pool 1, and one from a parent drawn from pool 2.
//! Both new pools are produced by the same rule, so a call makes
//! 8N independent draws for pools of size N.

#[cfg(feature = "parallel")]
use rand::SeedableRng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{Result, SimError};
use crate::genotype::{Allele, Genotype};
use crate::population::Population;
use crate::random::RandomSource;

/// Offspring per independently seeded stream.
#[cfg(feature = "parallel")]
const CHUNK_SIZE: usize = 4096;

/// Scratch buffers holding the random draws for a run of offspring.
#[derive(Debug, Default)]
struct OffspringDraws {
    parent_a: Vec<usize>,
    parent_b: Vec<usize>,
    allele_a: Vec<bool>,
    allele_b: Vec<bool>,
}

impl OffspringDraws {
    fn fill<R: RandomSource + ?Sized>(
        &mut self,
        num_offspring: usize,
        num_parents: usize,
        rng: &mut R,
    ) {
        self.parent_a.resize(num_offspring, 0);
        self.parent_b.resize(num_offspring, 0);
        self.allele_a.resize(num_offspring, false);
        self.allele_b.resize(num_offspring, false);
        rng.batch_uniform_index(num_parents, &mut self.parent_a);
        rng.batch_uniform_index(num_parents, &mut self.parent_b);
        rng.batch_coin_flip(&mut self.allele_a);
        rng.batch_coin_flip(&mut self.allele_b);
    }
}

// pool1 and pool2 must be non-empty and of equal length
fn generate_offspring<R: RandomSource + ?Sized>(
    pool1: &[Genotype],
    pool2: &[Genotype],
    output: &mut [Genotype],
    draws: &mut OffspringDraws,
    rng: &mut R,
) {
    draws.fill(output.len(), pool1.len(), rng);
    output.iter_mut().enumerate().for_each(|(i, offspring)| {
        let parent_a = pool1[draws.parent_a[i]];
        let parent_b = pool2[draws.parent_b[i]];
        *offspring = Genotype::new(
            parent_a.transmit(draws.allele_a[i]),
            parent_b.transmit(draws.allele_b[i]),
        );
    });
}

#[cfg(not(feature = "parallel"))]
fn fill_offspring<R: RandomSource + ?Sized>(
    pool1: &[Genotype],
    pool2: &[Genotype],
    offspring: &mut [Genotype],
    rng: &mut R,
) {
    let mut draws = OffspringDraws::default();
    generate_offspring(pool1, pool2, offspring, &mut draws, rng);
}

// Each chunk reads its own ChaCha stream, keyed by one seed from the
// caller's generator and the chunk index. Output depends on the seed
// only, never on the number of threads.
#[cfg(feature = "parallel")]
fn fill_offspring<R: RandomSource + ?Sized>(
    pool1: &[Genotype],
    pool2: &[Genotype],
    offspring: &mut [Genotype],
    rng: &mut R,
) {
    let seed = rng.next_seed();
    offspring
        .par_chunks_mut(CHUNK_SIZE)
        .enumerate()
        .for_each_init(OffspringDraws::default, |draws, (chunk, output)| {
            let mut chunk_rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
            chunk_rng.set_stream(chunk as u64);
            generate_offspring(pool1, pool2, output, draws, &mut chunk_rng);
        });
}

/// Produces the next generation's two pools from the current ones.
///
/// Both returned pools have the same size as the inputs. Fails if
/// either pool is empty or if their sizes differ.
pub fn next_generation<R: RandomSource + ?Sized>(
    pool1: &Population,
    pool2: &Population,
    rng: &mut R,
) -> Result<(Population, Population)> {
    if pool1.is_empty() || pool2.is_empty() {
        return Err(SimError::empty_population(
            "cannot draw parents from an empty pool",
        ));
    }
    if pool1.len() != pool2.len() {
        return Err(SimError::invalid_configuration(format!(
            "pool sizes differ: {} != {}",
            pool1.len(),
            pool2.len()
        )));
    }

    let size = pool1.len();
    let mut offspring = vec![Genotype::new(Allele::O, Allele::O); 2 * size];
    fill_offspring(pool1.individuals(), pool2.individuals(), &mut offspring, rng);
    let second = offspring.split_off(size);
    Ok((Population::new(offspring), Population::new(second)))
}
