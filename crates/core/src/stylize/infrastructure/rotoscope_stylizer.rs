use std::error::Error;

use crate::config::settings::FilterSettings;
use crate::shared::frame::Frame;
use crate::stylize::domain::frame_stylizer::FrameStylizer;
use crate::stylize::infrastructure::{color_matrix, posterize, sobel};

/// Cartoon-style rotoscope effect: posterized colors, a color grade, and
/// black edge lines composited on top.
///
/// The edge mask is computed from the unmodified source pixels, so
/// posterization artifacts never introduce false edges. Line thickness is
/// carried in the settings for presets but not applied as a dilation pass;
/// the Sobel response already spans 2-3 pixels across a boundary.
pub struct RotoscopeStylizer {
    // Reused across frames to avoid a per-frame allocation
    mask: Vec<u8>,
}

impl RotoscopeStylizer {
    pub fn new() -> Self {
        Self { mask: Vec::new() }
    }
}

impl Default for RotoscopeStylizer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameStylizer for RotoscopeStylizer {
    fn stylize(
        &mut self,
        frame: &mut Frame,
        settings: &FilterSettings,
    ) -> Result<(), Box<dyn Error>> {
        if frame.is_empty() {
            return Ok(());
        }
        let width = frame.width() as usize;
        let height = frame.height() as usize;
        let channels = frame.channels() as usize;
        if frame.data().len() != width * height * channels {
            log::warn!(
                "Skipping malformed frame {}: {} bytes for {}x{}x{}",
                frame.index(),
                frame.data().len(),
                width,
                height,
                channels
            );
            return Ok(());
        }

        self.mask = sobel::edge_mask(
            frame.data(),
            width,
            height,
            channels,
            settings.edge_threshold(),
        );

        let data = frame.data_mut();
        posterize::posterize(data, channels, settings.posterization());
        color_matrix::apply(data, channels, settings.color_matrix());

        for (pixel_idx, &m) in self.mask.iter().enumerate() {
            if m == 255 {
                let i = pixel_idx * channels;
                data[i] = 0;
                data[i + 1] = 0;
                data[i + 2] = 0;
            }
        }
        Ok(())
    }
}
