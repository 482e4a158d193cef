use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq)]
pub struct VideoMetadata {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
    pub total_frames: usize,
    pub codec: String,
    pub source_path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() {
        let meta = VideoMetadata {
            width: 1280,
            height: 720,
            fps: 24.0,
            total_frames: 480,
            codec: "h264".to_string(),
            source_path: Some(PathBuf::from("/tmp/in.mp4")),
        };
        assert_eq!(meta.width, 1280);
        assert_eq!(meta.height, 720);
        assert_eq!(meta.fps, 24.0);
        assert_eq!(meta.total_frames, 480);
        assert_eq!(meta.codec, "h264");
        assert_eq!(meta.source_path, Some(PathBuf::from("/tmp/in.mp4")));
    }

    #[test]
    fn test_image_metadata() {
        // Still images are single-frame videos with fps=0
        let meta = VideoMetadata {
            width: 800,
            height: 600,
            fps: 0.0,
            total_frames: 1,
            codec: "png".to_string(),
            source_path: None,
        };
        assert_eq!(meta.total_frames, 1);
        assert_eq!(meta.fps, 0.0);
    }
}
