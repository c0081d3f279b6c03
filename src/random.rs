use rand::prelude::Rng;

/// The random draws the simulation needs.
///
/// Batch methods fill a caller-owned buffer so that implementations
/// are free to vectorize. Every [`Rng`] is a `RandomSource`, drawing
/// one value at a time from its stream.
pub trait RandomSource {
    /// A value uniform in `[0, upper)`. `upper` must be > 0.
    fn uniform_index(&mut self, upper: usize) -> usize;

    /// Fill `output` with values uniform in `[0, upper)`.
    /// `upper` must be > 0.
    fn batch_uniform_index(&mut self, upper: usize, output: &mut [usize]);

    /// Fill `output` with fair coin flips.
    fn batch_coin_flip(&mut self, output: &mut [bool]);

    /// A seed for a generator that runs independently of this one.
    fn next_seed(&mut self) -> u64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform_index(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }

    fn batch_uniform_index(&mut self, upper: usize, output: &mut [usize]) {
        let picker = rand::distributions::Uniform::<usize>::new(0, upper);
        output.iter_mut().for_each(|o| *o = self.sample(picker));
    }

    fn batch_coin_flip(&mut self, output: &mut [bool]) {
        output.iter_mut().for_each(|o| *o = self.gen::<bool>());
    }

    fn next_seed(&mut self) -> u64 {
        self.gen::<u64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use rand::SeedableRng;

    proptest! {
        #[test]
        fn batch_indexes_in_range(seed in 0..u64::MAX, upper in 1usize..1000) {
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            let mut output = vec![usize::MAX; 64];
            rng.batch_uniform_index(upper, &mut output);
            prop_assert!(output.iter().all(|i| *i < upper));
        }
    }

    #[test]
    fn test_coin_flips_are_roughly_fair() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(101);
        let mut output = vec![false; 100000];
        rng.batch_coin_flip(&mut output);
        let heads = output.iter().filter(|c| **c).count() as f64 / output.len() as f64;
        assert!((heads - 0.5).abs() < 0.01, "{heads}");
    }

    #[test]
    fn test_same_seed_same_draws() {
        let mut first = vec![0; 32];
        let mut second = vec![0; 32];
        rand::rngs::StdRng::seed_from_u64(7).batch_uniform_index(10, &mut first);
        rand::rngs::StdRng::seed_from_u64(7).batch_uniform_index(10, &mut second);
        assert_eq!(first, second);
    }
}
