use rand::prelude::*;

use super::*;

/// Uniformly random colors from a seeded small RNG, so the same seed always deals the same board.
#[derive(Clone, Debug)]
pub struct RandomColors {
    seed: u64,
    rng: SmallRng,
}

impl RandomColors {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl ColorSource for RandomColors {
    fn next_color(&mut self, colors: u8) -> Color {
        if colors <= 1 {
            return Color(0);
        }
        Color(self.rng.random_range(0..colors))
    }
}
