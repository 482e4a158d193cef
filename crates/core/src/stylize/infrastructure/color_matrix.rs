/// Applies a row-major 3x3 matrix to each pixel's RGB vector.
///
/// Results are clamped to [0, 255] at the write, so matrices with gains
/// above 1.0 saturate instead of wrapping. Alpha passes through.
pub fn apply(data: &mut [u8], channels: usize, matrix: &[f64; 9]) {
    for px in data.chunks_exact_mut(channels) {
        let r = px[0] as f64;
        let g = px[1] as f64;
        let b = px[2] as f64;
        px[0] = clamp_u8(matrix[0] * r + matrix[1] * g + matrix[2] * b);
        px[1] = clamp_u8(matrix[3] * r + matrix[4] * g + matrix[5] * b);
        px[2] = clamp_u8(matrix[6] * r + matrix[7] * g + matrix[8] * b);
    }
}

fn clamp_u8(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDENTITY: [f64; 9] = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];

    #[test]
    fn test_identity_leaves_pixels_unchanged() {
        let mut data = vec![12, 200, 99, 255, 0, 255, 128, 40];
        let original = data.clone();
        apply(&mut data, 4, &IDENTITY);
        assert_eq!(data, original);
    }

    #[test]
    fn test_channel_swap() {
        let mut data = vec![10, 20, 30, 255];
        let swap_rb = [0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0];
        apply(&mut data, 4, &swap_rb);
        assert_eq!(data, vec![30, 20, 10, 255]);
    }

    #[test]
    fn test_gain_saturates_instead_of_wrapping() {
        let mut data = vec![200, 200, 200, 255];
        let boost = [1.5, 0.0, 0.0, 0.0, 1.5, 0.0, 0.0, 0.0, 1.5];
        apply(&mut data, 4, &boost);
        assert_eq!(&data[..3], &[255, 255, 255]);
    }

    #[test]
    fn test_negative_result_clamps_to_zero() {
        let mut data = vec![10, 200, 10, 255];
        let m = [1.0, -1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
        apply(&mut data, 4, &m);
        assert_eq!(data[0], 0);
    }

    #[test]
    fn test_alpha_untouched() {
        let mut data = vec![50, 50, 50, 77];
        let boost = [2.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0];
        apply(&mut data, 4, &boost);
        assert_eq!(data[3], 77);
    }
}
