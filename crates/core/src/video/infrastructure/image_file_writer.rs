use std::path::{Path, PathBuf};

use crate::shared::frame::Frame;
use crate::shared::video_metadata::VideoMetadata;
use crate::video::domain::video_writer::VideoWriter;

/// Writes a single processed frame to an image file using the `image`
/// crate, behind the [`VideoWriter`] interface.
///
/// Pairs with `ImageFileReader` so still images flow through the same
/// pipeline as videos. Writing more than one frame overwrites the file.
pub struct ImageFileWriter {
    path: Option<PathBuf>,
}

impl ImageFileWriter {
    pub fn new() -> Self {
        Self { path: None }
    }
}

impl Default for ImageFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoWriter for ImageFileWriter {
    fn open(
        &mut self,
        path: &Path,
        _metadata: &VideoMetadata,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    fn write(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        let path = self.path.as_ref().ok_or("ImageFileWriter: not opened")?;

        let img =
            image::RgbaImage::from_raw(frame.width(), frame.height(), frame.data().to_vec())
                .ok_or("Failed to create image from frame data")?;
        img.save(path)?;
        Ok(())
    }

    fn close(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.path = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(w: u32, h: u32) -> VideoMetadata {
        VideoMetadata {
            width: w,
            height: h,
            fps: 0.0,
            total_frames: 1,
            codec: String::new(),
            source_path: None,
        }
    }

    #[test]
    fn test_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let mut writer = ImageFileWriter::new();
        writer.open(&path, &metadata(100, 80)).unwrap();
        writer.write(&Frame::solid_rgba(100, 80, 128, 0)).unwrap();
        writer.close().unwrap();
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_roundtrip_preserves_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let mut writer = ImageFileWriter::new();
        writer.open(&path, &metadata(50, 50)).unwrap();
        writer.write(&Frame::solid_rgba(50, 50, 77, 0)).unwrap();
        writer.close().unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 50);
        assert_eq!(img.height(), 50);
        assert_eq!(img.get_pixel(0, 0).0, [77, 77, 77, 255]);
    }

    #[test]
    fn test_write_without_open_returns_error() {
        let mut writer = ImageFileWriter::new();
        assert!(writer.write(&Frame::solid_rgba(10, 10, 0, 0)).is_err());
    }

    #[test]
    fn test_open_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.png");
        let mut writer = ImageFileWriter::new();
        writer.open(&path, &metadata(10, 10)).unwrap();
        writer.write(&Frame::solid_rgba(10, 10, 0, 0)).unwrap();
        assert!(path.exists());
    }
}
