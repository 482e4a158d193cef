//! Core library for rotomask: cartoon rotoscope stylization, animated
//! face overlays, and external anonymization for videos and images.
//!
//! Organized by bounded context, each split into `domain` (traits and
//! pure logic) and `infrastructure` (ffmpeg, ONNX Runtime, HTTP).

pub mod config;
pub mod deface;
pub mod detection;
pub mod overlay;
pub mod pipeline;
pub mod shared;
pub mod stylize;
pub mod video;
