//! Conversion settings.
//!
//! The browser app always runs with [`ConvertConfig::default`], which
//! matches the fixed behavior users know: WebP at 80% quality, bundled
//! into `foto-terkompresi.zip`.

use serde::{Deserialize, Serialize};

use crate::types::{OutputFormat, PipelineError};

/// Default encoder quality factor (0.0 to 1.0).
pub const DEFAULT_QUALITY: f32 = 0.8;

/// Default file name offered for the downloaded archive.
pub const DEFAULT_ARCHIVE_NAME: &str = "foto-terkompresi.zip";

/// What to do when two inputs map to the same archive entry name
/// (e.g. `a.png` and `a.jpg` both become `a.webp`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Keep every output: later duplicates become `a (2).webp`,
    /// `a (3).webp`, and so on.
    #[default]
    Rename,
    /// Last write wins: a later duplicate replaces the earlier entry.
    Overwrite,
}

/// Configuration for one batch conversion run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Encoder quality factor passed to the browser encoder.
    ///
    /// Must be within `0.0..=1.0`.
    pub quality: f32,

    /// Output raster format.
    pub format: OutputFormat,

    /// Download name of the finished archive. Must end in `.zip`.
    pub archive_name: String,

    /// Handling of colliding entry names.
    pub duplicates: DuplicatePolicy,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            format: OutputFormat::default(),
            archive_name: DEFAULT_ARCHIVE_NAME.to_owned(),
            duplicates: DuplicatePolicy::default(),
        }
    }
}

impl ConvertConfig {
    /// Check the invariants the pipeline relies on.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidConfig`] if `quality` is outside
    /// `0.0..=1.0` (or NaN), or if `archive_name` is empty or does not
    /// end in `.zip`.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if !(0.0..=1.0).contains(&self.quality) {
            return Err(PipelineError::InvalidConfig(format!(
                "quality must be within 0.0..=1.0, got {}",
                self.quality
            )));
        }
        let has_zip_suffix = self
            .archive_name
            .rsplit_once('.')
            .is_some_and(|(stem, ext)| !stem.is_empty() && ext.eq_ignore_ascii_case("zip"));
        if !has_zip_suffix {
            return Err(PipelineError::InvalidConfig(format!(
                "archive name must end in .zip, got {:?}",
                self.archive_name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_behavior() {
        let config = ConvertConfig::default();
        assert!((config.quality - 0.8).abs() < f32::EPSILON);
        assert_eq!(config.format, OutputFormat::WebP);
        assert_eq!(config.archive_name, "foto-terkompresi.zip");
        assert_eq!(config.duplicates, DuplicatePolicy::Rename);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn quality_out_of_range_is_rejected() {
        for quality in [-0.1, 1.5, f32::NAN] {
            let config = ConvertConfig {
                quality,
                ..ConvertConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(PipelineError::InvalidConfig(_))),
                "quality {quality} should be rejected"
            );
        }
    }

    #[test]
    fn quality_bounds_are_inclusive() {
        for quality in [0.0, 1.0] {
            let config = ConvertConfig {
                quality,
                ..ConvertConfig::default()
            };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn archive_name_must_be_zip() {
        for name in ["", ".zip", "photos", "photos.tar"] {
            let config = ConvertConfig {
                archive_name: name.to_owned(),
                ..ConvertConfig::default()
            };
            assert!(
                config.validate().is_err(),
                "archive name {name:?} should be rejected"
            );
        }
        let config = ConvertConfig {
            archive_name: "Photos.ZIP".to_owned(),
            ..ConvertConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_json_fields_fall_back_to_defaults() {
        let config: ConvertConfig =
            serde_json::from_str(r#"{"duplicates": "overwrite"}"#).unwrap();
        assert_eq!(config.duplicates, DuplicatePolicy::Overwrite);
        assert_eq!(config.archive_name, DEFAULT_ARCHIVE_NAME);
        assert_eq!(config.format, OutputFormat::WebP);
    }

    #[test]
    fn json_round_trip() {
        let config = ConvertConfig {
            quality: 0.5,
            archive_name: "out.zip".to_owned(),
            ..ConvertConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""format":"webp""#), "got {json}");
        let back: ConvertConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
