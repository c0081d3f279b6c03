use std::io::Write;

use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::genotype::{Allele, Phenotype};
use crate::mating::next_generation;
use crate::params::SimParams;
use crate::population::{create_population, Population};
use crate::summary::{summarize, GenerationSummary};

/// One summary per generation. Index 0 is the initial population.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationTrace {
    generations: Vec<GenerationSummary>,
}

impl SimulationTrace {
    pub fn len(&self) -> usize {
        self.generations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    pub fn generations(&self) -> &[GenerationSummary] {
        &self.generations
    }

    /// Frequency of `phenotype` in every generation, in order.
    pub fn series(&self, phenotype: Phenotype) -> Vec<f64> {
        self.generations
            .iter()
            .map(|s| s.frequency(phenotype))
            .collect()
    }

    /// Writes one row per generation. Allele frequency columns are
    /// appended when `with_alleles` is set.
    pub fn write_csv<W: Write>(&self, mut writer: W, with_alleles: bool) -> Result<()> {
        write!(writer, "generation")?;
        for phenotype in Phenotype::ALL {
            write!(writer, ",{}", phenotype.label())?;
        }
        if with_alleles {
            for allele in Allele::ALL {
                write!(writer, ",allele_{}", allele.label())?;
            }
        }
        writeln!(writer)?;

        for (generation, summary) in self.generations.iter().enumerate() {
            write!(writer, "{generation}")?;
            for frequency in summary.frequencies() {
                write!(writer, ",{frequency}")?;
            }
            if with_alleles {
                for allele in Allele::ALL {
                    write!(writer, ",{}", summary.alleles().frequency(allele))?;
                }
            }
            writeln!(writer)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

impl FromIterator<GenerationSummary> for SimulationTrace {
    fn from_iter<I: IntoIterator<Item = GenerationSummary>>(iter: I) -> Self {
        Self {
            generations: iter.into_iter().collect(),
        }
    }
}

/// Generation-by-generation view of a run.
///
/// Yields the summary of generation 0 first, then one summary per
/// round of mating, `num_generations + 1` items in total. Only the
/// current pair of pools is kept alive.
pub struct Simulation {
    params: SimParams,
    rng: rand::rngs::StdRng,
    pool1: Population,
    pool2: Population,
    generation: u32,
    done: bool,
}

impl Simulation {
    /// Validates `params` and builds the two initial pools.
    pub fn new(params: SimParams) -> Result<Self> {
        let params = params.validate()?;
        let mut rng = rand::rngs::StdRng::seed_from_u64(params.seed);
        let pool1 = create_population(params.size, &params.fractions, &mut rng)?;
        let pool2 = create_population(params.size, &params.fractions, &mut rng)?;
        tracing::info!(
            seed = params.seed,
            size = params.size,
            num_generations = params.num_generations,
            fractions = ?params.fractions,
            "initialized pools"
        );
        Ok(Self {
            params,
            rng,
            pool1,
            pool2,
            generation: 0,
            done: false,
        })
    }

    /// The most recently summarized pools.
    pub fn pools(&self) -> (&Population, &Population) {
        (&self.pool1, &self.pool2)
    }

    fn step(&mut self) -> Result<GenerationSummary> {
        let generation = self.generation;
        let span = tracing::info_span!("generation", generation);
        let _guard = span.enter();
        if generation > 0 {
            let (pool1, pool2) = next_generation(&self.pool1, &self.pool2, &mut self.rng)?;
            self.pool1 = pool1;
            self.pool2 = pool2;
        }
        let summary = summarize(&self.pool1, &self.pool2)?;
        tracing::debug!(frequencies = ?summary.frequencies(), "summarized");
        Ok(summary)
    }
}

impl Iterator for Simulation {
    type Item = Result<GenerationSummary>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.generation > self.params.num_generations {
            return None;
        }
        let rv = self.step();
        match &rv {
            Ok(_) => match self.generation.checked_add(1) {
                Some(next) => self.generation = next,
                None => self.done = true,
            },
            Err(_) => self.done = true,
        }
        Some(rv)
    }
}

/// Runs a whole simulation and returns its trace.
pub fn run(params: SimParams) -> Result<SimulationTrace> {
    let simulation = Simulation::new(params)?;
    let trace = simulation.collect::<Result<SimulationTrace>>()?;
    tracing::info!(generations = trace.len(), "simulation complete");
    Ok(trace)
}
