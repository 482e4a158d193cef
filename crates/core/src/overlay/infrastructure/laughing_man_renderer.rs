use std::f64::consts::TAU;

use crate::overlay::domain::overlay_renderer::OverlayRenderer;
use crate::shared::face_box::FaceBox;
use crate::shared::frame::Frame;

/// Fill color of the disc (dark turquoise).
const FILL: [u8; 3] = [0, 206, 209];
/// Ring, eyes, and tick color.
const DARK: [u8; 3] = [10, 40, 42];

/// Number of tick marks in the rotating outer band.
const TICK_COUNT: usize = 12;
/// Angular half-width of one tick, in radians.
const TICK_HALF_WIDTH: f64 = 0.09;

/// Procedurally drawn spinning-disc face overlay.
///
/// Each face gets an alpha-blended turquoise disc with a dark outer ring,
/// a band of tick marks that rotates a little every frame, and two eyes.
/// The rotation angle is renderer state so the spin stays continuous even
/// when face positions jump between frames.
pub struct LaughingManRenderer {
    opacity: f64,
    rotation_speed: f64,
    size_multiplier: f64,
    rotation: f64,
}

impl LaughingManRenderer {
    pub fn new(opacity: f64, rotation_speed: f64, size_multiplier: f64) -> Self {
        Self {
            opacity,
            rotation_speed,
            size_multiplier,
            rotation: 0.0,
        }
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity;
    }

    pub fn set_rotation_speed(&mut self, speed: f64) {
        self.rotation_speed = speed;
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    fn draw_disc(&self, frame: &mut Frame, face: &FaceBox) {
        let radius = face.overlay_radius(self.size_multiplier);
        if radius <= 0.0 {
            return;
        }
        let (cx, cy) = face.center();
        let width = frame.width() as i64;
        let height = frame.height() as i64;
        let channels = frame.channels() as usize;

        let x_min = ((cx - radius).floor() as i64).max(0);
        let x_max = ((cx + radius).ceil() as i64).min(width - 1);
        let y_min = ((cy - radius).floor() as i64).max(0);
        let y_max = ((cy + radius).ceil() as i64).min(height - 1);

        let data = frame.data_mut();
        for y in y_min..=y_max {
            for x in x_min..=x_max {
                let dx = x as f64 + 0.5 - cx;
                let dy = y as f64 + 0.5 - cy;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist > radius {
                    continue;
                }
                let color = self.disc_color(dx, dy, dist, radius);
                let i = (y as usize * width as usize + x as usize) * channels;
                blend(&mut data[i..i + 3], color, self.opacity);
            }
        }
    }

    /// Color at a point inside the disc, in disc-local coordinates.
    fn disc_color(&self, dx: f64, dy: f64, dist: f64, radius: f64) -> [u8; 3] {
        let r = dist / radius;

        // Outer ring
        if r > 0.92 {
            return DARK;
        }
        // Rotating tick band
        if (0.74..=0.86).contains(&r) {
            let angle = dy.atan2(dx) - self.rotation;
            let sector = TAU / TICK_COUNT as f64;
            let off = angle.rem_euclid(sector);
            if off < TICK_HALF_WIDTH || off > sector - TICK_HALF_WIDTH {
                return DARK;
            }
        }
        // Eyes, symmetric about the vertical axis
        let eye_r = 0.09;
        for ex in [-0.28, 0.28] {
            let edx = dx / radius - ex;
            let edy = dy / radius + 0.15;
            if (edx * edx + edy * edy).sqrt() < eye_r {
                return DARK;
            }
        }
        FILL
    }
}

impl OverlayRenderer for LaughingManRenderer {
    fn render(&mut self, frame: &mut Frame, faces: &[FaceBox]) {
        if frame.is_empty() {
            return;
        }
        for face in faces {
            self.draw_disc(frame, face);
        }
        // One step per frame regardless of face count
        self.rotation = (self.rotation + self.rotation_speed).rem_euclid(TAU);
    }

    fn apply_settings(&mut self, settings: &crate::config::settings::FilterSettings) {
        self.opacity = settings.logo_opacity();
        self.rotation_speed = settings.rotation_speed();
    }
}

fn blend(dst: &mut [u8], src: [u8; 3], alpha: f64) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d = (*d as f64 * (1.0 - alpha) + s as f64 * alpha).round() as u8;
    }
}
