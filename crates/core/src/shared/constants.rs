pub const BLAZEFACE_MODEL_NAME: &str = "blazeface_short_range.onnx";
pub const BLAZEFACE_MODEL_URL: &str =
    "https://github.com/rotomask/rotomask/releases/download/v0.1.0/blazeface_short_range.onnx";
/// Mirror tried when the primary release asset is unreachable.
pub const BLAZEFACE_MODEL_FALLBACK_URL: &str =
    "https://storage.googleapis.com/mediapipe-models/face_detector/blaze_face_short_range/float16/latest/blaze_face_short_range.onnx";

/// Per-frame probability that the scheduler re-runs face detection.
pub const DETECTION_SAMPLE_PROBABILITY: f64 = 0.2;

/// Overlay radius as a fraction of the longer face box side.
pub const OVERLAY_RADIUS_FACTOR: f64 = 0.7;

/// Default endpoint of the external deface anonymization service.
pub const DEFACE_ENDPOINT: &str = "http://localhost:8080/anonymize";

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];
