use crate::config::settings::FilterSettings;
use crate::shared::face_box::FaceBox;
use crate::shared::frame::Frame;

/// Draws an overlay on top of a frame at the given face positions.
///
/// Called once per frame with the full tracked set. Implementations that
/// animate advance their animation state once per call, not per face.
pub trait OverlayRenderer: Send {
    fn render(&mut self, frame: &mut Frame, faces: &[FaceBox]);

    /// Picks up live settings changes mid-run. Default: ignore them.
    fn apply_settings(&mut self, _settings: &FilterSettings) {}
}
