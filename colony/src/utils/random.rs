#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::Float;
use rand::distributions::{Distribution, WeightedIndex};
use rand::prelude::*;
use std::sync::Mutex;

/// Specifies underlying random generator type.
pub type RandomGen = SmallRng;

/// Provides the way to use randomized values in generic way.
pub trait Random {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.get_rng().gen_range(min..=max)
    }

    /// Produces real random value, uniformly distributed on the closed interval [min, max)
    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        self.get_rng().gen_range(min..max)
    }

    /// Returns an index from collection with probability proportional to its weight.
    /// Returns `None` when no weight is positive and finite.
    fn weighted(&self, weights: &[Float]) -> Option<usize> {
        sample_weighted(weights, &mut self.get_rng())
    }

    /// Returns a new RNG. Generators returned by consequent calls are independent from each other.
    fn get_rng(&self) -> RandomGen;
}

/// Samples an index with probability proportional to its weight using given generator.
/// Returns `None` when no weight is positive and finite.
pub fn sample_weighted<R: Rng + ?Sized>(weights: &[Float], rng: &mut R) -> Option<usize> {
    // NOTE uniform sampling over an infinite total weight panics inside rand
    if !weights.iter().sum::<Float>().is_finite() {
        return None;
    }

    WeightedIndex::new(weights).ok().map(|distribution| distribution.sample(rng))
}

/// A default random implementation.
///
/// Without a seed, the generator is initialized from entropy. With a seed, the sequence of
/// produced values (and generators returned by `get_rng`) is fully reproducible.
pub struct DefaultRandom {
    rng: Mutex<SmallRng>,
}

impl DefaultRandom {
    /// Creates a new instance of `DefaultRandom` with given seed.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { rng: Mutex::new(SmallRng::seed_from_u64(seed)) }
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: Mutex::new(SmallRng::from_entropy()) }
    }
}

impl Random for DefaultRandom {
    fn get_rng(&self) -> RandomGen {
        // NOTE a poisoned lock still holds a valid generator state
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        SmallRng::seed_from_u64(rng.next_u64())
    }
}
