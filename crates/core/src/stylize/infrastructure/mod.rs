pub mod color_matrix;
pub mod posterize;
pub mod rotoscope_stylizer;
pub mod sobel;
