use crate::shared::constants::OVERLAY_RADIUS_FACTOR;

/// A detected or tracked face bounding box in frame pixel coordinates.
///
/// Coordinates are kept as `f64` so that exponential smoothing across
/// frames does not accumulate rounding drift; rasterization rounds at
/// draw time only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FaceBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "face box must have area");
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Euclidean distance between this box's top-left corner and another's.
    ///
    /// Top-left distance (not center distance) is what the tracker matches
    /// on, so a box that grows in place still matches its prior track.
    pub fn corner_distance(&self, other: &FaceBox) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Overlay radius for this face: 0.7 of the longer side, scaled by the
    /// configured size multiplier.
    pub fn overlay_radius(&self, size_multiplier: f64) -> f64 {
        self.width.max(self.height) * OVERLAY_RADIUS_FACTOR * size_multiplier
    }
}
