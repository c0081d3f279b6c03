use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};
use crate::genotype::Phenotype;

/// Fractions may deviate from summing to one by this much.
pub const FRACTION_TOLERANCE: f64 = 1e-6;

#[derive(Parser, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimParams {
    #[arg(short, long)]
    pub seed: u64,
    /// Individuals per pool.
    #[arg(long = "popsize", short = 'p', default_value_t = 10000)]
    pub size: usize,
    #[arg(short, long = "ngens", default_value_t = 100)]
    pub num_generations: u32,
    /// Initial phenotype fractions, in the order O,A,B,AB.
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_values_t = vec![0.25, 0.25, 0.25, 0.25]
    )]
    pub fractions: Vec<f64>,
}

impl SimParams {
    pub fn validate(self) -> Result<Self> {
        if self.size == 0 {
            return Err(SimError::empty_population("population size must be > 0"));
        }
        validate_fractions(&self.fractions)?;
        Ok(self)
    }
}

/// Checks that `fractions` holds one finite, non-negative entry per
/// [`Phenotype`] and that they sum to one.
pub fn validate_fractions(fractions: &[f64]) -> Result<()> {
    if fractions.len() != Phenotype::ALL.len() {
        return Err(SimError::invalid_configuration(format!(
            "expected {} phenotype fractions, got {}",
            Phenotype::ALL.len(),
            fractions.len()
        )));
    }
    if let Some(bad) = fractions.iter().find(|f| !f.is_finite() || **f < 0.0) {
        return Err(SimError::invalid_configuration(format!(
            "phenotype fractions must be finite and non-negative, got {bad}"
        )));
    }
    let total: f64 = fractions.iter().sum();
    if (total - 1.0).abs() > FRACTION_TOLERANCE {
        return Err(SimError::invalid_configuration(format!(
            "phenotype fractions must sum to 1, got {total}"
        )));
    }
    Ok(())
}
