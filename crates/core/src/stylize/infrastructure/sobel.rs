/// Sobel edge detection over packed pixel data.
///
/// Returns a one-byte-per-pixel mask: 255 where the gradient magnitude
/// exceeds `threshold`, 0 elsewhere. The one-pixel border is always 0
/// because the 3x3 kernels need a full neighborhood.
pub fn edge_mask(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    threshold: f64,
) -> Vec<u8> {
    let mut mask = vec![0u8; width * height];
    if width < 3 || height < 3 {
        return mask;
    }

    let luma = |x: usize, y: usize| -> f64 {
        let i = (y * width + x) * channels;
        0.299 * data[i] as f64 + 0.587 * data[i + 1] as f64 + 0.114 * data[i + 2] as f64
    };

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let gx = -luma(x - 1, y - 1) + luma(x + 1, y - 1)
                - 2.0 * luma(x - 1, y)
                + 2.0 * luma(x + 1, y)
                - luma(x - 1, y + 1)
                + luma(x + 1, y + 1);
            let gy = -luma(x - 1, y - 1) - 2.0 * luma(x, y - 1) - luma(x + 1, y - 1)
                + luma(x - 1, y + 1)
                + 2.0 * luma(x, y + 1)
                + luma(x + 1, y + 1);

            if (gx * gx + gy * gy).sqrt() > threshold {
                mask[y * width + x] = 255;
            }
        }
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    const CH: usize = 4;

    fn flat_frame(width: usize, height: usize, value: u8) -> Vec<u8> {
        let mut data = vec![value; width * height * CH];
        for px in data.chunks_exact_mut(CH) {
            px[3] = 255;
        }
        data
    }

    #[test]
    fn test_flat_frame_yields_empty_mask() {
        let data = flat_frame(8, 8, 128);
        let mask = edge_mask(&data, 8, 8, CH, 30.0);
        assert!(mask.iter().all(|&m| m == 0));
    }

    #[test]
    fn test_vertical_boundary_detected_on_interior() {
        // Left half black, right half white
        let width = 8;
        let height = 8;
        let mut data = flat_frame(width, height, 0);
        for y in 0..height {
            for x in width / 2..width {
                let i = (y * width + x) * CH;
                data[i] = 255;
                data[i + 1] = 255;
                data[i + 2] = 255;
            }
        }
        let mask = edge_mask(&data, width, height, CH, 30.0);
        // Pixels adjacent to the boundary light up
        assert_eq!(mask[3 * width + width / 2], 255);
        assert_eq!(mask[3 * width + width / 2 - 1], 255);
        // Far from the boundary stays dark
        assert_eq!(mask[3 * width + 1], 0);
    }

    #[test]
    fn test_border_is_always_zero() {
        let width = 6;
        let height = 6;
        let mut data = flat_frame(width, height, 0);
        // Checkerboard maximizes gradients everywhere
        for y in 0..height {
            for x in 0..width {
                if (x + y) % 2 == 0 {
                    let i = (y * width + x) * CH;
                    data[i] = 255;
                    data[i + 1] = 255;
                    data[i + 2] = 255;
                }
            }
        }
        let mask = edge_mask(&data, width, height, CH, 10.0);
        for x in 0..width {
            assert_eq!(mask[x], 0);
            assert_eq!(mask[(height - 1) * width + x], 0);
        }
        for y in 0..height {
            assert_eq!(mask[y * width], 0);
            assert_eq!(mask[y * width + width - 1], 0);
        }
    }

    #[test]
    fn test_too_small_frame_yields_empty_mask() {
        let data = flat_frame(2, 2, 255);
        let mask = edge_mask(&data, 2, 2, CH, 0.0);
        assert_eq!(mask, vec![0u8; 4]);
    }

    #[test]
    fn test_higher_threshold_masks_fewer_pixels() {
        let width = 8;
        let height = 8;
        let mut data = flat_frame(width, height, 0);
        for y in 0..height {
            for x in width / 2..width {
                let i = (y * width + x) * CH;
                data[i] = 100;
                data[i + 1] = 100;
                data[i + 2] = 100;
            }
        }
        let low: usize = edge_mask(&data, width, height, CH, 10.0)
            .iter()
            .filter(|&&m| m == 255)
            .count();
        let high: usize = edge_mask(&data, width, height, CH, 500.0)
            .iter()
            .filter(|&&m| m == 255)
            .count();
        assert!(low > high);
    }
}
