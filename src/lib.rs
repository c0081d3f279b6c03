//! Forward simulation of ABO blood-type frequencies under random mating.
//!
//! A population of fixed size is held as two mating pools. Every
//! generation, each offspring takes one allele from a random member of
//! pool 1 and one from a random member of pool 2. The two-pool split
//! only decides who may mate with whom; it is not a model of sexes.
//!
//! ```no_run
//! use abo_drift::{run, Phenotype, SimParams};
//!
//! let params = SimParams {
//!     seed: 42,
//!     size: 10000,
//!     num_generations: 100,
//!     fractions: vec![0.25, 0.25, 0.25, 0.25],
//! };
//! let trace = run(params).unwrap();
//! let ab = trace.series(Phenotype::AB);
//! assert_eq!(ab.len(), 101);
//! ```

pub mod error;
pub mod genotype;
pub mod mating;
pub mod params;
pub mod population;
pub mod random;
pub mod simulation;
pub mod summary;

pub use error::{Result, SimError};
pub use genotype::{phenotype_of, Allele, Genotype, Phenotype};
pub use mating::next_generation;
pub use params::SimParams;
pub use population::{create_population, Population};
pub use random::RandomSource;
pub use simulation::{run, Simulation, SimulationTrace};
pub use summary::{allele_frequencies, summarize, AlleleFrequencies, GenerationSummary};
