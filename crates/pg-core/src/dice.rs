//! Inclusive integer ranges and rolling.
//!
//! Every randomized value in the game is a stat plus a roll from a small
//! per-class range. Ranges may be written with their bounds in either order;
//! they are normalized on construction so the roll is always inclusive on
//! both ends.

use rand::Rng;
use rand::rngs::StdRng;

/// An inclusive range of integers to roll from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollRange {
    low: i32,
    high: i32,
}

impl RollRange {
    /// Create a range from two bounds, swapping them if inverted.
    pub const fn new(a: i32, b: i32) -> Self {
        if a > b {
            Self { low: b, high: a }
        } else {
            Self { low: a, high: b }
        }
    }

    /// The lowest value this range can produce.
    pub fn low(&self) -> i32 {
        self.low
    }

    /// The highest value this range can produce.
    pub fn high(&self) -> i32 {
        self.high
    }

    /// Returns true if `value` lies within the range.
    pub fn contains(&self, value: i32) -> bool {
        (self.low..=self.high).contains(&value)
    }

    /// Roll a value using the given RNG.
    pub fn roll(&self, rng: &mut StdRng) -> i32 {
        rng.random_range(self.low..=self.high)
    }

    /// Shift both bounds by `base`, saturating at the `i32` bounds.
    pub fn offset(&self, base: i32) -> Self {
        Self {
            low: base.saturating_add(self.low),
            high: base.saturating_add(self.high),
        }
    }
}

impl std::fmt::Display for RollRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    #[test]
    fn inverted_bounds_are_swapped() {
        let range = RollRange::new(-1, -3);
        assert_eq!(range.low(), -3);
        assert_eq!(range.high(), -1);
        assert_eq!(range, RollRange::new(-3, -1));
    }

    #[test]
    fn single_value_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let range = RollRange::new(4, 4);
        for _ in 0..20 {
            assert_eq!(range.roll(&mut rng), 4);
        }
    }

    #[test]
    fn offset_shifts_both_bounds() {
        let range = RollRange::new(3, 5).offset(5);
        assert_eq!(range, RollRange::new(8, 10));
    }

    #[test]
    fn offset_saturates() {
        assert_eq!(
            RollRange::new(5, 10).offset(i32::MAX),
            RollRange::new(i32::MAX, i32::MAX)
        );
        assert_eq!(
            RollRange::new(-3, -1).offset(i32::MIN),
            RollRange::new(i32::MIN, i32::MIN)
        );
    }

    #[test]
    fn display() {
        assert_eq!(RollRange::new(2, -2).to_string(), "[-2, 2]");
    }

    #[test]
    fn roll_reaches_both_ends() {
        let mut rng = StdRng::seed_from_u64(42);
        let range = RollRange::new(5, 10);
        let rolls: Vec<i32> = (0..500).map(|_| range.roll(&mut rng)).collect();
        assert!(rolls.contains(&5));
        assert!(rolls.contains(&10));
    }

    #[test]
    fn roll_deterministic_with_seed() {
        let range = RollRange::new(-2, 2);
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        for _ in 0..10 {
            assert_eq!(range.roll(&mut rng1), range.roll(&mut rng2));
        }
    }

    proptest! {
        #[test]
        fn roll_stays_within_bounds(a in -100i32..100, b in -100i32..100, seed: u64) {
            let mut rng = StdRng::seed_from_u64(seed);
            let range = RollRange::new(a, b);
            let value = range.roll(&mut rng);
            prop_assert!(value >= a.min(b) && value <= a.max(b));
            prop_assert!(range.contains(value));
        }
    }
}
