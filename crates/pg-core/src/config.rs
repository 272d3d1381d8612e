//! Configuration for a game.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for a game.
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// RNG seed for reproducible rolls. `None` draws a seed from the OS.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the random source for a game.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default().with_seed(123);
        assert_eq!(cfg.seed, Some(123));
    }

    #[test]
    fn seeded_rngs_agree() {
        let cfg = GameConfig::default().with_seed(7);
        let (mut r1, mut r2) = (cfg.rng(), cfg.rng());
        let a: Vec<u32> = (0..5).map(|_| r1.random()).collect();
        let b: Vec<u32> = (0..5).map(|_| r2.random()).collect();
        assert_eq!(a, b);
    }
}
