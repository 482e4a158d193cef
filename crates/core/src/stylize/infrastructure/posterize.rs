/// Quantizes each color channel to `levels` evenly spaced values.
///
/// With step = 255 / (levels - 1), each value maps to the nearest multiple
/// of step, so 0 and 255 are always representable. The alpha channel is
/// left untouched.
pub fn posterize(data: &mut [u8], channels: usize, levels: u32) {
    debug_assert!(levels >= 2);
    let step = 255.0 / (levels - 1) as f64;
    for px in data.chunks_exact_mut(channels) {
        for v in px.iter_mut().take(3) {
            *v = ((*v as f64 / step).round() * step) as u8;
        }
    }
}
