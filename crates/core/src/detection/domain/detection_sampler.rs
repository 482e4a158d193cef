/// Decides, frame by frame, whether to run the face detector.
///
/// Detection is far more expensive than rendering, so the scheduler asks
/// the sampler before each frame and reuses the last tracked faces when
/// the answer is no.
pub trait DetectionSampler: Send {
    fn should_detect(&mut self) -> bool;
}

/// Detects on every Nth frame. `cadence` of 1 detects on every frame.
pub struct FixedCadenceSampler {
    cadence: u32,
    counter: u32,
}

impl FixedCadenceSampler {
    pub fn new(cadence: u32) -> Self {
        debug_assert!(cadence >= 1);
        // Start at cadence - 1 so the very first frame always detects
        Self {
            cadence,
            counter: cadence.saturating_sub(1),
        }
    }
}

impl DetectionSampler for FixedCadenceSampler {
    fn should_detect(&mut self) -> bool {
        self.counter += 1;
        if self.counter >= self.cadence {
            self.counter = 0;
            true
        } else {
            false
        }
    }
}
