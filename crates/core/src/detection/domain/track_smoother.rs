use crate::shared::face_box::FaceBox;

/// Blends fresh detections toward the previous frame's tracked boxes so
/// the overlay doesn't jitter with per-frame detector noise.
///
/// A detection matches a prior box when their top-left corners lie within
/// `match_distance` pixels. Matched boxes are interpolated; unmatched
/// detections pass through untouched, and prior boxes with no matching
/// detection are dropped (the face left the scene). Matching is
/// independent per detection, so two detections near the same prior both
/// smooth toward it.
pub struct TrackSmoother {
    factor: f64,
    match_distance: f64,
}

impl Default for TrackSmoother {
    fn default() -> Self {
        Self {
            factor: 0.3,
            match_distance: 50.0,
        }
    }
}

impl TrackSmoother {
    pub fn new(factor: f64, match_distance: f64) -> Self {
        Self {
            factor,
            match_distance,
        }
    }

    pub fn smooth(&self, detections: &[FaceBox], prior: &[FaceBox]) -> Vec<FaceBox> {
        detections
            .iter()
            .map(|det| {
                let nearest = prior
                    .iter()
                    .filter(|p| det.corner_distance(p) < self.match_distance)
                    .min_by(|a, b| {
                        det.corner_distance(a)
                            .partial_cmp(&det.corner_distance(b))
                            .unwrap_or(std::cmp::Ordering::Equal)
                    });

                match nearest {
                    Some(p) => lerp_box(p, det, self.factor),
                    None => *det,
                }
            })
            .collect()
    }
}

fn lerp_box(from: &FaceBox, to: &FaceBox, t: f64) -> FaceBox {
    FaceBox::new(
        from.x + (to.x - from.x) * t,
        from.y + (to.y - from.y) * t,
        from.width + (to.width - from.width) * t,
        from.height + (to.height - from.height) * t,
    )
}
