use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid configuration:\n{}", .0.join("\n"))]
    Invalid(Vec<String>),
}

/// Tuned runtime parameters, grouped the way the config file groups them.
///
/// Defaults are the values the original tuning run settled on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningConfig {
    pub face_detection: FaceDetectionTuning,
    pub visual: VisualTuning,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceDetectionTuning {
    /// Detector confidence threshold, valid in [0.1, 0.9].
    pub score_threshold: f64,
    /// Overlay size relative to the face box, valid in [0.8, 2.0].
    pub overlay_size_multiplier: f64,
    /// Face tracking smoothing weight, valid in [0.1, 0.8].
    pub smoothing_factor: f64,
    /// Run detection every Nth frame when fixed cadence is used, [1, 5].
    pub frame_skip: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualTuning {
    /// Overlay transparency, valid in [0.5, 1.0].
    pub logo_opacity: f64,
    pub rotation_speed: f64,
    /// Deface service confidence threshold, valid in [0.1, 0.9].
    pub deface_threshold: f64,
}

impl Default for FaceDetectionTuning {
    fn default() -> Self {
        Self {
            score_threshold: 0.45,
            overlay_size_multiplier: 1.1,
            smoothing_factor: 0.1,
            frame_skip: 2,
        }
    }
}

impl Default for VisualTuning {
    fn default() -> Self {
        Self {
            logo_opacity: 0.75,
            rotation_speed: 0.02,
            deface_threshold: 0.45,
        }
    }
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            face_detection: FaceDetectionTuning::default(),
            visual: VisualTuning::default(),
        }
    }
}

/// Partial user config: any field may be omitted and falls back to the
/// tuned default for its group.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct TuningOverrides {
    pub face_detection: FaceDetectionOverrides,
    pub visual: VisualOverrides,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct FaceDetectionOverrides {
    pub score_threshold: Option<f64>,
    pub overlay_size_multiplier: Option<f64>,
    pub smoothing_factor: Option<f64>,
    pub frame_skip: Option<u32>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct VisualOverrides {
    pub logo_opacity: Option<f64>,
    pub rotation_speed: Option<f64>,
    pub deface_threshold: Option<f64>,
}

impl TuningConfig {
    /// Merges user overrides onto the tuned defaults, field by field within
    /// each group, then validates the merged whole.
    ///
    /// Validation happens only after the merge so a config is either fully
    /// accepted or fully rejected — never partially applied.
    pub fn merged(overrides: &TuningOverrides) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let fd = &overrides.face_detection;
        let vis = &overrides.visual;
        let merged = Self {
            face_detection: FaceDetectionTuning {
                score_threshold: fd
                    .score_threshold
                    .unwrap_or(defaults.face_detection.score_threshold),
                overlay_size_multiplier: fd
                    .overlay_size_multiplier
                    .unwrap_or(defaults.face_detection.overlay_size_multiplier),
                smoothing_factor: fd
                    .smoothing_factor
                    .unwrap_or(defaults.face_detection.smoothing_factor),
                frame_skip: fd.frame_skip.unwrap_or(defaults.face_detection.frame_skip),
            },
            visual: VisualTuning {
                logo_opacity: vis.logo_opacity.unwrap_or(defaults.visual.logo_opacity),
                rotation_speed: vis
                    .rotation_speed
                    .unwrap_or(defaults.visual.rotation_speed),
                deface_threshold: vis
                    .deface_threshold
                    .unwrap_or(defaults.visual.deface_threshold),
            },
        };
        merged.validate()?;
        Ok(merged)
    }

    /// Loads overrides from a JSON file and merges them onto the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let overrides: TuningOverrides = serde_json::from_str(&text)?;
        Self::merged(&overrides)
    }

    /// Checks every field against its documented range, collecting all
    /// violations rather than stopping at the first.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();
        let fd = &self.face_detection;
        let vis = &self.visual;

        if !(0.1..=0.9).contains(&fd.score_threshold) {
            errors.push(format!(
                "score_threshold must be between 0.1 and 0.9, got {}",
                fd.score_threshold
            ));
        }
        if !(0.8..=2.0).contains(&fd.overlay_size_multiplier) {
            errors.push(format!(
                "overlay_size_multiplier must be between 0.8 and 2.0, got {}",
                fd.overlay_size_multiplier
            ));
        }
        if !(0.1..=0.8).contains(&fd.smoothing_factor) {
            errors.push(format!(
                "smoothing_factor must be between 0.1 and 0.8, got {}",
                fd.smoothing_factor
            ));
        }
        if !(1..=5).contains(&fd.frame_skip) {
            errors.push(format!(
                "frame_skip must be between 1 and 5, got {}",
                fd.frame_skip
            ));
        }
        if !(0.5..=1.0).contains(&vis.logo_opacity) {
            errors.push(format!(
                "logo_opacity must be between 0.5 and 1.0, got {}",
                vis.logo_opacity
            ));
        }
        if !(0.1..=0.9).contains(&vis.deface_threshold) {
            errors.push(format!(
                "deface_threshold must be between 0.1 and 0.9, got {}",
                vis.deface_threshold
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_are_valid() {
        assert!(TuningConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_values_match_tuned_config() {
        let config = TuningConfig::default();
        assert_relative_eq!(config.face_detection.score_threshold, 0.45);
        assert_relative_eq!(config.face_detection.overlay_size_multiplier, 1.1);
        assert_relative_eq!(config.face_detection.smoothing_factor, 0.1);
        assert_eq!(config.face_detection.frame_skip, 2);
        assert_relative_eq!(config.visual.logo_opacity, 0.75);
        assert_relative_eq!(config.visual.deface_threshold, 0.45);
    }

    #[test]
    fn test_merge_overrides_single_field_keeps_group_defaults() {
        let overrides = TuningOverrides {
            face_detection: FaceDetectionOverrides {
                score_threshold: Some(0.6),
                ..Default::default()
            },
            ..Default::default()
        };
        let merged = TuningConfig::merged(&overrides).unwrap();
        assert_relative_eq!(merged.face_detection.score_threshold, 0.6);
        // Other fields in the same group keep their defaults
        assert_relative_eq!(merged.face_detection.overlay_size_multiplier, 1.1);
        assert_eq!(merged.face_detection.frame_skip, 2);
    }

    #[test]
    fn test_merge_rejects_out_of_range_override() {
        let overrides = TuningOverrides {
            face_detection: FaceDetectionOverrides {
                score_threshold: Some(0.95),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = TuningConfig::merged(&overrides);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_collects_all_violations() {
        let mut config = TuningConfig::default();
        config.face_detection.score_threshold = 5.0;
        config.face_detection.frame_skip = 0;
        config.visual.logo_opacity = 0.1;

        match config.validate() {
            Err(ConfigError::Invalid(errors)) => assert_eq!(errors.len(), 3),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tuning.json");
        std::fs::write(
            &path,
            r#"{"visual": {"logo_opacity": 0.9}, "face_detection": {"frame_skip": 3}}"#,
        )
        .unwrap();

        let config = TuningConfig::load(&path).unwrap();
        assert_relative_eq!(config.visual.logo_opacity, 0.9);
        assert_eq!(config.face_detection.frame_skip, 3);
        // Untouched fields fall back to tuned defaults
        assert_relative_eq!(config.visual.deface_threshold, 0.45);
    }

    #[test]
    fn test_load_invalid_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            TuningConfig::load(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        assert!(matches!(
            TuningConfig::load(Path::new("/nonexistent/tuning.json")),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_empty_overrides_equals_defaults() {
        let merged = TuningConfig::merged(&TuningOverrides::default()).unwrap();
        assert_eq!(merged, TuningConfig::default());
    }
}
