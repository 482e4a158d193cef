pub mod execution_provider;
pub mod onnx_blazeface_detector;
pub mod random_sampler;
pub mod resilient_detector;
