use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::detection::domain::detection_sampler::DetectionSampler;
use crate::shared::constants::DETECTION_SAMPLE_PROBABILITY;

/// Runs detection on a random subset of frames.
///
/// Each frame independently triggers detection with the given probability,
/// so the expected detection rate is `probability` regardless of cadence
/// alignment with the video content.
pub struct RandomSampler {
    rng: StdRng,
    probability: f64,
}

impl RandomSampler {
    pub fn new(probability: f64) -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            probability,
        }
    }

    /// Deterministic sampler for reproducible runs.
    pub fn with_seed(probability: f64, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            probability,
        }
    }
}

impl Default for RandomSampler {
    fn default() -> Self {
        Self::new(DETECTION_SAMPLE_PROBABILITY)
    }
}

impl DetectionSampler for RandomSampler {
    fn should_detect(&mut self) -> bool {
        self.rng.random::<f64>() < self.probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probability_zero_never_detects() {
        let mut sampler = RandomSampler::with_seed(0.0, 42);
        assert!((0..100).all(|_| !sampler.should_detect()));
    }

    #[test]
    fn test_probability_one_always_detects() {
        let mut sampler = RandomSampler::with_seed(1.0, 42);
        assert!((0..100).all(|_| sampler.should_detect()));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let mut a = RandomSampler::with_seed(0.2, 7);
        let mut b = RandomSampler::with_seed(0.2, 7);
        let seq_a: Vec<bool> = (0..50).map(|_| a.should_detect()).collect();
        let seq_b: Vec<bool> = (0..50).map(|_| b.should_detect()).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn test_default_rate_is_roughly_one_in_five() {
        let mut sampler = RandomSampler::with_seed(DETECTION_SAMPLE_PROBABILITY, 123);
        let hits = (0..10_000).filter(|_| sampler.should_detect()).count();
        // 20% of 10,000 with generous slack
        assert!((1_500..2_500).contains(&hits), "hits = {hits}");
    }
}
