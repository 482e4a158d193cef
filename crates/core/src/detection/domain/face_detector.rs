use crate::shared::face_box::FaceBox;
use crate::shared::frame::Frame;

/// Finds faces in a single frame.
///
/// Implementations take `&mut self` so they can keep per-session state
/// (inference sessions, caches) without interior mutability.
pub trait FaceDetector: Send {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<FaceBox>, Box<dyn std::error::Error>>;
}
