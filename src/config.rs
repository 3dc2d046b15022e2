//! Configuration types for detection and conversion.
//!
//! Detection is driven by a handful of tuning constants: the minimum sample
//! length, the Unicode-density threshold, the signature scoring curve and the
//! confidences the arbiter assigns to each kind of evidence. None of them has
//! a derivation behind it; they are empirical values that worked on real
//! Marathi and Hindi government PDFs. Keeping them in [`DetectionConfig`]
//! rather than as literals lets callers retune them per corpus and lets two
//! runs be diffed by their config alone.
//!
//! Conversion has far fewer knobs, collected in [`ConverterConfig`].

use crate::error::{LipiError, Result};
use serde::{Deserialize, Serialize};

/// Tuning constants for encoding detection.
///
/// Built via [`DetectionConfig::builder()`] or [`DetectionConfig::default()`].
///
/// # Example
/// ```rust
/// use lipi_convert::DetectionConfig;
///
/// let config = DetectionConfig::builder()
///     .min_sample_len(40)
///     .min_signature_matches(3)
///     .build()
///     .unwrap();
/// assert_eq!(config.min_sample_len, 40);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Samples shorter than this many chars are rejected by the heuristic
    /// detector with [`LipiError::InsufficientSample`]. Default: 20.
    ///
    /// Signature substrings are two to six chars long; below ~20 chars a
    /// single common word can satisfy the minimum match count by accident.
    pub min_sample_len: usize,

    /// Fraction of non-whitespace chars in the Devanagari blocks above which
    /// the sample is reported as already Unicode. Default: 0.3.
    pub unicode_threshold: f64,

    /// Distinct signatures a table must match to qualify. Default: 2.
    pub min_signature_matches: usize,

    /// Confidence intercept of the signature scoring curve. Default: 0.7.
    pub signature_base_confidence: f64,

    /// Confidence added per distinct matched signature. Default: 0.1.
    pub signature_step: f64,

    /// Upper bound on heuristic confidence. Must stay below 1.0, which is
    /// reserved for overrides and already-Unicode text. Default: 0.95.
    pub heuristic_cap: f64,

    /// Confidence cap for a tie the priority ranking cannot break. Default: 0.5.
    pub ambiguous_cap: f64,

    /// Confidence when font name and heuristic agree. Default: 0.98.
    pub combined_confidence: f64,

    /// Confidence when only the font name identifies the encoding. Default: 0.90.
    pub font_name_confidence: f64,

    /// Threshold used by `DetectionResult::is_high_confidence`. Default: 0.9.
    pub high_confidence: f64,

    /// Share of Latin-1/extended chars that marks unidentified text as
    /// probably legacy (reported as a warning only). Default: 0.2.
    pub legacy_density_threshold: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_sample_len: 20,
            unicode_threshold: 0.3,
            min_signature_matches: 2,
            signature_base_confidence: 0.7,
            signature_step: 0.1,
            heuristic_cap: 0.95,
            ambiguous_cap: 0.5,
            combined_confidence: 0.98,
            font_name_confidence: 0.90,
            high_confidence: 0.9,
            legacy_density_threshold: 0.2,
        }
    }
}

impl DetectionConfig {
    /// Create a new builder for `DetectionConfig`.
    pub fn builder() -> DetectionConfigBuilder {
        DetectionConfigBuilder {
            config: Self::default(),
        }
    }

    /// Heuristic confidence for a table matching `distinct` signatures.
    ///
    /// Monotonic non-decreasing in `distinct`, capped at `heuristic_cap`.
    pub fn signature_confidence(&self, distinct: usize) -> f64 {
        let raw = self.signature_base_confidence + self.signature_step * distinct as f64;
        raw.min(self.heuristic_cap)
    }
}

/// Builder for [`DetectionConfig`].
#[derive(Debug)]
pub struct DetectionConfigBuilder {
    config: DetectionConfig,
}

impl DetectionConfigBuilder {
    pub fn min_sample_len(mut self, n: usize) -> Self {
        self.config.min_sample_len = n.max(1);
        self
    }

    pub fn unicode_threshold(mut self, t: f64) -> Self {
        self.config.unicode_threshold = t.clamp(0.0, 1.0);
        self
    }

    pub fn min_signature_matches(mut self, n: usize) -> Self {
        self.config.min_signature_matches = n.max(1);
        self
    }

    pub fn signature_base_confidence(mut self, c: f64) -> Self {
        self.config.signature_base_confidence = c.clamp(0.0, 1.0);
        self
    }

    pub fn signature_step(mut self, step: f64) -> Self {
        self.config.signature_step = step.max(0.0);
        self
    }

    pub fn heuristic_cap(mut self, c: f64) -> Self {
        self.config.heuristic_cap = c;
        self
    }

    pub fn ambiguous_cap(mut self, c: f64) -> Self {
        self.config.ambiguous_cap = c.clamp(0.0, 1.0);
        self
    }

    pub fn combined_confidence(mut self, c: f64) -> Self {
        self.config.combined_confidence = c.clamp(0.0, 1.0);
        self
    }

    pub fn font_name_confidence(mut self, c: f64) -> Self {
        self.config.font_name_confidence = c.clamp(0.0, 1.0);
        self
    }

    pub fn high_confidence(mut self, c: f64) -> Self {
        self.config.high_confidence = c.clamp(0.0, 1.0);
        self
    }

    pub fn legacy_density_threshold(mut self, t: f64) -> Self {
        self.config.legacy_density_threshold = t.clamp(0.0, 1.0);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<DetectionConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl DetectionConfig {
    /// Check the invariants the builder enforces.
    ///
    /// Useful for configs deserialised from JSON, which bypass the builder.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.heuristic_cap) {
            return Err(LipiError::InvalidConfig(format!(
                "heuristic_cap must be in [0, 1), got {}",
                self.heuristic_cap
            )));
        }
        if self.min_signature_matches == 0 {
            return Err(LipiError::InvalidConfig(
                "min_signature_matches must be ≥ 1".into(),
            ));
        }
        if !(self.signature_step >= 0.0) {
            return Err(LipiError::InvalidConfig(format!(
                "signature_step must be ≥ 0, got {}",
                self.signature_step
            )));
        }
        for (name, value) in [
            ("unicode_threshold", self.unicode_threshold),
            ("signature_base_confidence", self.signature_base_confidence),
            ("ambiguous_cap", self.ambiguous_cap),
            ("combined_confidence", self.combined_confidence),
            ("font_name_confidence", self.font_name_confidence),
            ("high_confidence", self.high_confidence),
            ("legacy_density_threshold", self.legacy_density_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(LipiError::InvalidConfig(format!(
                    "{name} must be in [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }

    /// A copy with every field forced into the range [`validate`](Self::validate)
    /// accepts. NaN becomes 0.
    pub fn clamped(&self) -> DetectionConfig {
        let unit = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        DetectionConfig {
            min_sample_len: self.min_sample_len.max(1),
            unicode_threshold: unit(self.unicode_threshold),
            min_signature_matches: self.min_signature_matches.max(1),
            signature_base_confidence: unit(self.signature_base_confidence),
            signature_step: if self.signature_step > 0.0 {
                self.signature_step
            } else {
                0.0
            },
            heuristic_cap: unit(self.heuristic_cap).min(MAX_HEURISTIC_CAP),
            ambiguous_cap: unit(self.ambiguous_cap),
            combined_confidence: unit(self.combined_confidence),
            font_name_confidence: unit(self.font_name_confidence),
            high_confidence: unit(self.high_confidence),
            legacy_density_threshold: unit(self.legacy_density_threshold),
        }
    }
}

/// Largest `heuristic_cap` [`DetectionConfig::clamped`] keeps.
const MAX_HEURISTIC_CAP: f64 = 0.99;

// ── Converter ────────────────────────────────────────────────────────────

/// What the converter emits for a code unit with no mapping.
///
/// Either way the position is recorded as an
/// [`UnmappedChar`](crate::output::UnmappedChar) warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmappedPolicy {
    /// Keep the original code unit. (default)
    #[default]
    PassThrough,
    /// Substitute U+FFFD REPLACEMENT CHARACTER.
    Replace,
}

/// Options for the Unicode converter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Handling of unmapped code units. Default: [`UnmappedPolicy::PassThrough`].
    pub unmapped: UnmappedPolicy,

    /// Compose the result to NFC. Default: true.
    ///
    /// Turning this off exposes the raw rule-chain output, which is only
    /// useful when debugging a mapping table.
    pub normalize: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            unmapped: UnmappedPolicy::default(),
            normalize: true,
        }
    }
}

impl ConverterConfig {
    pub fn builder() -> ConverterConfigBuilder {
        ConverterConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConverterConfig`].
#[derive(Debug)]
pub struct ConverterConfigBuilder {
    config: ConverterConfig,
}

impl ConverterConfigBuilder {
    pub fn unmapped(mut self, policy: UnmappedPolicy) -> Self {
        self.config.unmapped = policy;
        self
    }

    pub fn normalize(mut self, v: bool) -> Self {
        self.config.normalize = v;
        self
    }

    pub fn build(self) -> ConverterConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let c = DetectionConfig::default();
        assert_eq!(c.min_sample_len, 20);
        assert_eq!(c.min_signature_matches, 2);
        assert!((c.unicode_threshold - 0.3).abs() < 1e-9);
        assert!((c.combined_confidence - 0.98).abs() < 1e-9);
        assert!((c.font_name_confidence - 0.90).abs() < 1e-9);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_signature_confidence_curve() {
        let c = DetectionConfig::default();
        assert!((c.signature_confidence(2) - 0.9).abs() < 1e-9);
        assert!((c.signature_confidence(3) - 0.95).abs() < 1e-9);
        assert!((c.signature_confidence(9) - 0.95).abs() < 1e-9);
        let mut last = 0.0;
        for n in 0..20 {
            let v = c.signature_confidence(n);
            assert!(v >= last, "curve decreased at {n}");
            last = v;
        }
    }

    #[test]
    fn test_builder_clamps() {
        let c = DetectionConfig::builder()
            .min_sample_len(0)
            .min_signature_matches(0)
            .unicode_threshold(3.0)
            .build()
            .unwrap();
        assert_eq!(c.min_sample_len, 1);
        assert_eq!(c.min_signature_matches, 1);
        assert_eq!(c.unicode_threshold, 1.0);
    }

    #[test]
    fn test_heuristic_cap_must_stay_below_one() {
        let err = DetectionConfig::builder().heuristic_cap(1.0).build();
        assert!(matches!(err, Err(LipiError::InvalidConfig(_))));
    }

    #[test]
    fn test_clamped_repairs_out_of_range_fields() {
        let c = DetectionConfig {
            combined_confidence: 2.0,
            font_name_confidence: -1.0,
            heuristic_cap: 1.0,
            signature_step: f64::NAN,
            min_signature_matches: 0,
            ..DetectionConfig::default()
        };
        assert!(c.validate().is_err());
        let fixed = c.clamped();
        assert!(fixed.validate().is_ok());
        assert_eq!(fixed.combined_confidence, 1.0);
        assert_eq!(fixed.font_name_confidence, 0.0);
        assert!(fixed.heuristic_cap < 1.0);
        assert_eq!(fixed.signature_step, 0.0);
        assert_eq!(fixed.min_signature_matches, 1);
        assert_eq!(DetectionConfig::default().clamped(), DetectionConfig::default());
    }

    #[test]
    fn test_config_deserialises_with_defaults() {
        let c: DetectionConfig = serde_json::from_str(r#"{"min_sample_len": 50}"#).unwrap();
        assert_eq!(c.min_sample_len, 50);
        assert_eq!(c.min_signature_matches, 2);
    }

    #[test]
    fn test_converter_config_builder() {
        let c = ConverterConfig::builder()
            .unmapped(UnmappedPolicy::Replace)
            .normalize(false)
            .build();
        assert_eq!(c.unmapped, UnmappedPolicy::Replace);
        assert!(!c.normalize);
        assert!(ConverterConfig::default().normalize);
    }
}
