use alloc::vec::Vec;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// Source of tile orders.
pub trait Shuffler {
    /// Returns a permutation of `0..n`.
    fn shuffle(&mut self, n: usize) -> Vec<usize>;
}

/// Uniform Fisher-Yates shuffle over a seeded generator. The seed only lives
/// as long as the shuffler; consecutive calls draw independent orders.
#[derive(Clone, Debug)]
pub struct RandomShuffler {
    rng: SmallRng,
}

impl RandomShuffler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Shuffler for RandomShuffler {
    fn shuffle(&mut self, n: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..n).collect();
        if n > 1 {
            order.shuffle(&mut self.rng);
        }
        order
    }
}
