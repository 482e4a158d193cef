pub mod frame_stylizer;
pub mod style_preset;
