use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};
use crate::genotype::{Allele, Phenotype};
use crate::population::Population;

/// Allele counts over every gene copy in a pair of pools.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlleleFrequencies {
    counts: [usize; 3],
    total: usize,
}

impl AlleleFrequencies {
    pub fn count(&self, allele: Allele) -> usize {
        self.counts[allele.index()]
    }

    /// Number of gene copies, i.e. twice the number of individuals.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn frequency(&self, allele: Allele) -> f64 {
        self.count(allele) as f64 / self.total as f64
    }
}

/// Phenotype frequencies of one generation, over both pools.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationSummary {
    counts: [usize; 4],
    frequencies: [f64; 4],
    total: usize,
    alleles: AlleleFrequencies,
}

impl GenerationSummary {
    pub fn frequency(&self, phenotype: Phenotype) -> f64 {
        self.frequencies[phenotype.index()]
    }

    /// Frequencies in [`Phenotype::ALL`] order.
    pub fn frequencies(&self) -> &[f64; 4] {
        &self.frequencies
    }

    pub fn count(&self, phenotype: Phenotype) -> usize {
        self.counts[phenotype.index()]
    }

    /// Number of individuals summarized.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn alleles(&self) -> &AlleleFrequencies {
        &self.alleles
    }
}

/// Tallies the phenotypes of `pool1` and `pool2` together.
///
/// Fails with [`SimError::EmptyPopulation`] when either pool is empty
/// and with [`SimError::InvalidConfiguration`] when their sizes differ.
pub fn summarize(pool1: &Population, pool2: &Population) -> Result<GenerationSummary> {
    if pool1.is_empty() || pool2.is_empty() {
        return Err(SimError::empty_population(
            "cannot compute phenotype frequencies of an empty pool",
        ));
    }
    if pool1.len() != pool2.len() {
        return Err(SimError::invalid_configuration(format!(
            "pool sizes differ: {} != {}",
            pool1.len(),
            pool2.len()
        )));
    }
    let total = pool1.len() + pool2.len();

    let mut counts = [0usize; 4];
    let mut allele_counts = [0usize; 3];
    pool1.iter().chain(pool2.iter()).for_each(|genotype| {
        counts[genotype.phenotype().index()] += 1;
        allele_counts[genotype.first.index()] += 1;
        allele_counts[genotype.second.index()] += 1;
    });
    let frequencies = counts.map(|c| c as f64 / total as f64);

    Ok(GenerationSummary {
        counts,
        frequencies,
        total,
        alleles: AlleleFrequencies {
            counts: allele_counts,
            total: 2 * total,
        },
    })
}

/// Frequencies of O, A and B among all gene copies in both pools.
pub fn allele_frequencies(pool1: &Population, pool2: &Population) -> Result<AlleleFrequencies> {
    summarize(pool1, pool2).map(|summary| summary.alleles)
}
