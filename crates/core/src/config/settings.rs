use thiserror::Error;

use crate::stylize::domain::style_preset::StylePreset;

#[derive(Error, Debug, PartialEq)]
pub enum SettingsError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
    #[error("posterization levels must be at least 2, got {0}")]
    TooFewLevels(u32),
}

/// Live filter configuration: the union of a selected style preset and
/// user overrides.
///
/// Fields are private so every mutation goes through a validating setter —
/// out-of-range values are rejected, never clamped silently.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterSettings {
    edge_threshold: f64,
    posterization: u32,
    line_thickness: f64,
    color_matrix: [f64; 9],
    logo_opacity: f64,
    rotation_speed: f64,
    deface_threshold: f64,
}

impl Default for FilterSettings {
    /// Scanner-preset filter values with the original visual defaults.
    fn default() -> Self {
        Self {
            edge_threshold: 30.0,
            posterization: 6,
            line_thickness: 2.0,
            color_matrix: [0.8, 0.1, 0.1, 0.1, 0.8, 0.1, 0.1, 0.1, 0.8],
            logo_opacity: 0.9,
            rotation_speed: 0.02,
            deface_threshold: 0.3,
        }
    }
}

impl FilterSettings {
    pub fn edge_threshold(&self) -> f64 {
        self.edge_threshold
    }

    pub fn posterization(&self) -> u32 {
        self.posterization
    }

    pub fn line_thickness(&self) -> f64 {
        self.line_thickness
    }

    pub fn color_matrix(&self) -> &[f64; 9] {
        &self.color_matrix
    }

    pub fn logo_opacity(&self) -> f64 {
        self.logo_opacity
    }

    pub fn rotation_speed(&self) -> f64 {
        self.rotation_speed
    }

    pub fn deface_threshold(&self) -> f64 {
        self.deface_threshold
    }

    pub fn set_edge_threshold(&mut self, value: f64) -> Result<(), SettingsError> {
        check_range("edge_threshold", value, 0.0, 255.0)?;
        self.edge_threshold = value;
        Ok(())
    }

    pub fn set_posterization(&mut self, levels: u32) -> Result<(), SettingsError> {
        if levels < 2 {
            return Err(SettingsError::TooFewLevels(levels));
        }
        self.posterization = levels;
        Ok(())
    }

    pub fn set_line_thickness(&mut self, value: f64) -> Result<(), SettingsError> {
        check_range("line_thickness", value, 0.5, 5.0)?;
        self.line_thickness = value;
        Ok(())
    }

    pub fn set_logo_opacity(&mut self, value: f64) -> Result<(), SettingsError> {
        check_range("logo_opacity", value, 0.5, 1.0)?;
        self.logo_opacity = value;
        Ok(())
    }

    pub fn set_rotation_speed(&mut self, value: f64) -> Result<(), SettingsError> {
        check_range("rotation_speed", value, 0.0, 0.2)?;
        self.rotation_speed = value;
        Ok(())
    }

    pub fn set_deface_threshold(&mut self, value: f64) -> Result<(), SettingsError> {
        check_range("deface_threshold", value, 0.1, 0.9)?;
        self.deface_threshold = value;
        Ok(())
    }

    /// Replaces the stylization fields with a preset's values.
    ///
    /// Only edge threshold, posterization, line thickness, and the color
    /// matrix change; overlay and deface settings keep their current values.
    pub fn apply_preset(&mut self, preset: &StylePreset) {
        self.edge_threshold = preset.edge_threshold;
        self.posterization = preset.posterization;
        self.line_thickness = preset.line_thickness;
        self.color_matrix = preset.color_matrix;
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), SettingsError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(SettingsError::OutOfRange {
            field,
            min,
            max,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stylize::domain::style_preset;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_defaults_match_scanner_preset() {
        let settings = FilterSettings::default();
        assert_relative_eq!(settings.edge_threshold(), 30.0);
        assert_eq!(settings.posterization(), 6);
        assert_relative_eq!(settings.line_thickness(), 2.0);
        assert_relative_eq!(settings.logo_opacity(), 0.9);
    }

    #[test]
    fn test_valid_setter_applies() {
        let mut settings = FilterSettings::default();
        settings.set_edge_threshold(55.0).unwrap();
        assert_relative_eq!(settings.edge_threshold(), 55.0);
    }

    #[rstest]
    #[case::negative_threshold(-1.0)]
    #[case::too_high_threshold(256.0)]
    #[case::nan(f64::NAN)]
    fn test_edge_threshold_rejected_not_clamped(#[case] value: f64) {
        let mut settings = FilterSettings::default();
        let before = settings.edge_threshold();
        assert!(settings.set_edge_threshold(value).is_err());
        assert_relative_eq!(settings.edge_threshold(), before);
    }

    #[test]
    fn test_posterization_below_two_rejected() {
        let mut settings = FilterSettings::default();
        assert_eq!(
            settings.set_posterization(1),
            Err(SettingsError::TooFewLevels(1))
        );
        assert!(settings.set_posterization(2).is_ok());
    }

    #[test]
    fn test_logo_opacity_range() {
        let mut settings = FilterSettings::default();
        assert!(settings.set_logo_opacity(0.4).is_err());
        assert!(settings.set_logo_opacity(0.5).is_ok());
        assert!(settings.set_logo_opacity(1.0).is_ok());
        assert!(settings.set_logo_opacity(1.1).is_err());
    }

    #[test]
    fn test_deface_threshold_range() {
        let mut settings = FilterSettings::default();
        assert!(settings.set_deface_threshold(0.05).is_err());
        assert!(settings.set_deface_threshold(0.45).is_ok());
        assert!(settings.set_deface_threshold(0.95).is_err());
    }

    #[test]
    fn test_apply_preset_leaves_overlay_settings_untouched() {
        let mut settings = FilterSettings::default();
        settings.set_logo_opacity(0.75).unwrap();

        let noir = style_preset::preset("noir").unwrap();
        settings.apply_preset(noir);

        assert_relative_eq!(settings.edge_threshold(), 40.0);
        assert_eq!(settings.posterization(), 8);
        assert_relative_eq!(settings.logo_opacity(), 0.75);
        assert_relative_eq!(settings.rotation_speed(), 0.02);
    }
}
