use std::error::Error;

use crate::config::settings::FilterSettings;
use crate::shared::frame::Frame;

/// A per-frame video stylization effect.
pub trait FrameStylizer: Send {
    /// Transforms the frame's pixels in place according to the settings.
    fn stylize(&mut self, frame: &mut Frame, settings: &FilterSettings)
        -> Result<(), Box<dyn Error>>;
}
