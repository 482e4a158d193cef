use crate::detection::domain::face_detector::FaceDetector;
use crate::shared::face_box::FaceBox;
use crate::shared::frame::Frame;

/// Wraps a detector so a failed inference degrades to "no faces" instead
/// of aborting the whole video run.
///
/// The overlay then keeps drawing at the last tracked positions until a
/// later detection succeeds.
pub struct ResilientDetector<D: FaceDetector> {
    inner: D,
}

impl<D: FaceDetector> ResilientDetector<D> {
    pub fn new(inner: D) -> Self {
        Self { inner }
    }
}

impl<D: FaceDetector> FaceDetector for ResilientDetector<D> {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<FaceBox>, Box<dyn std::error::Error>> {
        match self.inner.detect(frame) {
            Ok(faces) => Ok(faces),
            Err(e) => {
                log::warn!("Face detection failed on frame {}: {e}", frame.index());
                Ok(Vec::new())
            }
        }
    }
}
