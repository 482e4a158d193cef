pub mod detection_sampler;
pub mod face_detector;
pub mod track_smoother;
