use serde::{Deserialize, Serialize};

/// One copy of the ABO gene.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Allele {
    O,
    A,
    B,
}

impl Allele {
    pub const ALL: [Allele; 3] = [Allele::O, Allele::A, Allele::B];

    /// Position of this allele in [`Allele::ALL`].
    pub fn index(self) -> usize {
        match self {
            Allele::O => 0,
            Allele::A => 1,
            Allele::B => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Allele::O => "O",
            Allele::A => "A",
            Allele::B => "B",
        }
    }
}

/// Observable blood type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phenotype {
    O,
    A,
    B,
    AB,
}

impl Phenotype {
    /// Canonical order, also the order of initial fractions.
    pub const ALL: [Phenotype; 4] = [Phenotype::O, Phenotype::A, Phenotype::B, Phenotype::AB];

    pub fn index(self) -> usize {
        match self {
            Phenotype::O => 0,
            Phenotype::A => 1,
            Phenotype::B => 2,
            Phenotype::AB => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Phenotype::O => "O",
            Phenotype::A => "A",
            Phenotype::B => "B",
            Phenotype::AB => "AB",
        }
    }
}

/// A diploid genotype.
///
/// The pair is ordered: `first` came from the pool-1 parent and
/// `second` from the pool-2 parent. (A, O) and (O, A) are therefore
/// different values, but always express the same [`Phenotype`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genotype {
    pub first: Allele,
    pub second: Allele,
}

impl Genotype {
    pub fn new(first: Allele, second: Allele) -> Self {
        Self { first, second }
    }

    pub fn phenotype(self) -> Phenotype {
        phenotype_of(self)
    }

    /// The allele passed on to an offspring.
    /// `coin == false` transmits `first`.
    #[inline]
    pub fn transmit(self, coin: bool) -> Allele {
        if coin {
            self.second
        } else {
            self.first
        }
    }

    pub fn carries(self, allele: Allele) -> bool {
        self.first == allele || self.second == allele
    }
}

/// ABO dominance: O is recessive, A and B are codominant.
#[inline]
pub fn phenotype_of(genotype: Genotype) -> Phenotype {
    match (genotype.first, genotype.second) {
        (Allele::O, Allele::O) => Phenotype::O,
        (Allele::A, Allele::B) | (Allele::B, Allele::A) => Phenotype::AB,
        (Allele::A, _) | (_, Allele::A) => Phenotype::A,
        (Allele::B, _) | (_, Allele::B) => Phenotype::B,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    fn any_allele() -> impl Strategy<Value = Allele> {
        prop_oneof![Just(Allele::O), Just(Allele::A), Just(Allele::B)]
    }

    proptest! {
        #[test]
        fn phenotype_is_order_independent(x in any_allele(), y in any_allele()) {
            prop_assert_eq!(
                phenotype_of(Genotype::new(x, y)),
                phenotype_of(Genotype::new(y, x))
            );
        }

        #[test]
        fn transmitted_allele_is_carried(x in any_allele(), y in any_allele(), coin in any::<bool>()) {
            let genotype = Genotype::new(x, y);
            prop_assert!(genotype.carries(genotype.transmit(coin)));
        }
    }

    #[test]
    fn test_dominance_table() {
        use Allele::*;
        let expected = [
            ((O, O), Phenotype::O),
            ((A, O), Phenotype::A),
            ((O, A), Phenotype::A),
            ((A, A), Phenotype::A),
            ((B, O), Phenotype::B),
            ((O, B), Phenotype::B),
            ((B, B), Phenotype::B),
            ((A, B), Phenotype::AB),
            ((B, A), Phenotype::AB),
        ];
        for ((first, second), phenotype) in expected {
            assert_eq!(
                phenotype_of(Genotype::new(first, second)),
                phenotype,
                "{first:?}/{second:?}"
            );
        }
    }

    #[test]
    fn test_indexes_match_all() {
        for (i, a) in Allele::ALL.iter().enumerate() {
            assert_eq!(a.index(), i);
        }
        for (i, p) in Phenotype::ALL.iter().enumerate() {
            assert_eq!(p.index(), i);
        }
    }
}
