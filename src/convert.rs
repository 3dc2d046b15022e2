//! Detection and conversion entry points.
//!
//! ## Why separate detect and convert?
//!
//! Callers usually detect once per font span and convert many text runs with
//! the answer, or skip detection entirely when a user has picked the encoding
//! by hand. Keeping the two steps independent means neither pays for the
//! other. Both take the [`Registry`] explicitly and only read from it, so any
//! number of threads can call them concurrently on one shared registry.

use crate::config::{ConverterConfig, DetectionConfig};
use crate::error::Result;
use crate::output::{ConversionResult, DetectionResult, EncodingInfo, ALREADY_UNICODE};
use crate::pipeline::{arbiter, rules, scan};
use crate::registry::Registry;
use std::time::Instant;
use tracing::{debug, info, warn};
use unicode_normalization::UnicodeNormalization;

/// Ids the converter treats as "already Unicode": the text is only normalised.
const UNICODE_ALIASES: &[&str] = &[
    ALREADY_UNICODE,
    "unicode",
    "unicode-devanagari",
    "utf-8",
    "utf8",
];

/// Detect the encoding of `text` with default tuning.
///
/// # Arguments
/// * `text`: A sample of extracted text, ideally one font span
/// * `font_name`: The embedded font name for that span, if known
/// * `registry`: Tables to detect against
///
/// # Returns
/// Always a result. When nothing matches, `encoding_id` is
/// [`UNKNOWN`](crate::UNKNOWN) with confidence 0.0.
pub fn detect(text: &str, font_name: Option<&str>, registry: &Registry) -> DetectionResult {
    detect_with(text, font_name, registry, &DetectionConfig::default())
}

/// Detect with explicit tuning constants.
///
/// A config that fails [`DetectionConfig::validate`] (typically one
/// deserialised or written field by field) is clamped into range with a
/// warning, so reported confidences always stay within [0, 1].
pub fn detect_with(
    text: &str,
    font_name: Option<&str>,
    registry: &Registry,
    config: &DetectionConfig,
) -> DetectionResult {
    let clamped;
    let config = match config.validate() {
        Ok(()) => config,
        Err(e) => {
            warn!("{}; clamping detection config", e);
            clamped = config.clamped();
            &clamped
        }
    };
    let start = Instant::now();
    let result = arbiter::arbitrate(text, font_name, registry, config);
    debug!(
        "Detected '{}' via {} (confidence {:.2}) in {}µs",
        result.encoding_id,
        result.method,
        result.confidence,
        start.elapsed().as_micros()
    );
    if result.is_ambiguous() {
        warn!(
            "Ambiguous detection; reporting '{}' with capped confidence",
            result.encoding_id
        );
    }
    result
}

/// Detect, letting a caller-supplied encoding take precedence.
///
/// With `override_id` set, both detectors are skipped and the id is returned
/// at confidence 1.0 with method `override`.
///
/// # Errors
/// [`LipiError::UnknownEncoding`](crate::LipiError::UnknownEncoding) when
/// `override_id` is neither registered nor `already-unicode`.
pub fn detect_with_override(
    text: &str,
    font_name: Option<&str>,
    override_id: Option<&str>,
    registry: &Registry,
) -> Result<DetectionResult> {
    detect_with_override_config(
        text,
        font_name,
        override_id,
        registry,
        &DetectionConfig::default(),
    )
}

/// [`detect_with_override`] with explicit tuning constants for the
/// no-override path.
pub fn detect_with_override_config(
    text: &str,
    font_name: Option<&str>,
    override_id: Option<&str>,
    registry: &Registry,
    config: &DetectionConfig,
) -> Result<DetectionResult> {
    match override_id {
        Some(id) => {
            info!("Encoding override: '{}'", id);
            arbiter::resolve_override(id, registry)
        }
        None => Ok(detect_with(text, font_name, registry, config)),
    }
}

/// Convert `text` from a legacy encoding to NFC Unicode.
///
/// `encoding_id` is usually the id from a [`DetectionResult`].
/// `already-unicode` (and its aliases such as `unicode`) returns the text
/// normalised and otherwise untouched.
///
/// # Errors
/// [`LipiError::UnknownEncoding`](crate::LipiError::UnknownEncoding) for an
/// unregistered id, including [`UNKNOWN`](crate::UNKNOWN). Unmapped input
/// chars are never errors; they are listed in
/// [`ConversionResult::warnings`].
pub fn convert(text: &str, encoding_id: &str, registry: &Registry) -> Result<ConversionResult> {
    convert_with(text, encoding_id, registry, &ConverterConfig::default())
}

/// Convert with explicit converter options.
pub fn convert_with(
    text: &str,
    encoding_id: &str,
    registry: &Registry,
    config: &ConverterConfig,
) -> Result<ConversionResult> {
    if UNICODE_ALIASES.contains(&encoding_id) {
        return Ok(ConversionResult {
            converted_text: finish(text.to_string(), config),
            source_encoding_id: ALREADY_UNICODE.to_string(),
            warnings: Vec::new(),
            applied_rules: Vec::new(),
            mapped_chars: 0,
        });
    }

    let table = registry.compiled(encoding_id)?;
    let scanned = scan::scan(table, text, config.unmapped);
    let (reordered, applied) = rules::apply_chain(&table.table.post_rules, &scanned.text);

    if !scanned.warnings.is_empty() {
        debug!(
            "{} unmapped chars converting {} chars from '{}'",
            scanned.warnings.len(),
            text.chars().count(),
            encoding_id
        );
    }
    Ok(ConversionResult {
        converted_text: finish(reordered, config),
        source_encoding_id: encoding_id.to_string(),
        warnings: scanned.warnings,
        applied_rules: applied.iter().map(|r| r.name().to_string()).collect(),
        mapped_chars: scanned.mapped_chars,
    })
}

fn finish(text: String, config: &ConverterConfig) -> String {
    if config.normalize {
        text.nfc().collect()
    } else {
        text
    }
}

/// Every registered encoding, in registration order.
pub fn list_encodings(registry: &Registry) -> Vec<EncodingInfo> {
    registry.infos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UnmappedPolicy;
    use crate::error::LipiError;

    fn builtin() -> Registry {
        Registry::builtin().unwrap()
    }

    fn kruti(text: &str) -> ConversionResult {
        convert(text, "kruti-dev", &builtin()).unwrap()
    }

    #[test]
    fn test_kruti_words() {
        assert_eq!(kruti("Hkkjr").converted_text, "भारत");
        assert_eq!(kruti("fgUnh").converted_text, "हिन्दी");
        assert_eq!(kruti("vkSj").converted_text, "और");
        assert_eq!(kruti("eqacbZ").converted_text, "मुंबई");
        assert_eq!(kruti("ifj;kstuk").converted_text, "परियोजना");
        assert_eq!(kruti("fo|ky;").converted_text, "विद्यालय");
    }

    #[test]
    fn test_kruti_sentence() {
        let r = kruti("Hkkjr esa fgUnh Hkk\"kk gS");
        assert_eq!(r.converted_text, "भारत में हिन्दी भाषा है");
        assert!(r.is_clean());
    }

    #[test]
    fn test_reordering_rules_are_reported() {
        let r = kruti("dk;Z");
        assert_eq!(r.converted_text, "कार्य");
        assert_eq!(r.applied_rules, vec!["repha"]);

        let r = kruti("dhfrZ");
        assert_eq!(r.converted_text, "कीर्ति");
        assert_eq!(r.applied_rules, vec!["pre_base_matra", "repha"]);

        assert_eq!(kruti("fLFkfr").converted_text, "स्थिति");
    }

    #[test]
    fn test_half_form_and_ligature() {
        assert_eq!(kruti("D").converted_text, "क्");
        assert_eq!(kruti("Dk").converted_text, "क");
        assert_eq!(kruti("{k").converted_text, "क्ष");
    }

    #[test]
    fn test_unmapped_char_is_reported() {
        let r = kruti("{k\u{1}");
        assert_eq!(r.converted_text, "क्ष\u{1}");
        assert_eq!(r.warnings.len(), 1);
        assert_eq!(r.warnings[0].position, 2);
        assert_eq!(r.mapped_chars, 2);
    }

    #[test]
    fn test_replace_policy() {
        let config = ConverterConfig::builder()
            .unmapped(UnmappedPolicy::Replace)
            .build();
        let r = convert_with("{k\u{1}", "kruti-dev", &builtin(), &config).unwrap();
        assert_eq!(r.converted_text, "क्ष\u{FFFD}");
        assert!(r.warnings[0].replaced);
    }

    #[test]
    fn test_dvb_words() {
        let reg = builtin();
        let r = convert("×¾Ö³ÖÖÝÖ ×®ÖμÖ´Ö", "dvb-tt", &reg).unwrap();
        assert_eq!(r.converted_text, "विभाग नियम");
        let r = convert("´ÖÆüÖ¸üÖÂ™Òü ¿ÖÖÃÖ®Ö", "dvb-tt", &reg).unwrap();
        assert_eq!(r.converted_text, "महाराष्ट्र शासन");
    }

    #[test]
    fn test_unicode_aliases_pass_through() {
        let reg = builtin();
        for id in UNICODE_ALIASES {
            let r = convert("महाराष्ट्र", id, &reg).unwrap();
            assert_eq!(r.converted_text, "महाराष्ट्र");
            assert_eq!(r.source_encoding_id, ALREADY_UNICODE);
            assert!(r.is_clean());
        }
    }

    #[test]
    fn test_unknown_id_is_an_error() {
        let reg = builtin();
        for id in ["unknown", "wingdings", ""] {
            assert!(matches!(
                convert("abc", id, &reg),
                Err(LipiError::UnknownEncoding { .. })
            ));
        }
    }

    #[test]
    fn test_empty_input() {
        let r = kruti("");
        assert!(r.converted_text.is_empty());
        assert!(r.is_clean());
        assert_eq!(r.conversion_rate(), 1.0);
    }

    #[test]
    fn test_override() {
        let reg = builtin();
        let r = detect_with_override("anything", None, Some("shusha"), &reg).unwrap();
        assert_eq!(r.encoding_id, "shusha");
        assert!(detect_with_override("anything", None, Some("nope"), &reg).is_err());
        let r = detect_with_override("anything", None, None, &reg).unwrap();
        assert!(r.is_unknown());
    }

    #[test]
    fn test_override_path_uses_given_config() {
        let reg = builtin();
        let config = DetectionConfig::builder().min_sample_len(3).build().unwrap();
        let r = detect_with_override_config("fd dh", None, None, &reg, &config).unwrap();
        assert_eq!(r.encoding_id, "kruti-dev");
        assert!(r.warnings.is_empty());
        let r = detect_with_override("fd dh", None, None, &reg).unwrap();
        assert!(matches!(
            r.warnings[..],
            [crate::output::DetectionWarning::InsufficientSample { len: 5, min: 20 }]
        ));
    }

    #[test]
    fn test_out_of_range_config_is_clamped() {
        let config = DetectionConfig {
            combined_confidence: 2.0,
            ..DetectionConfig::default()
        };
        let r = detect_with(
            "Hkkjr ns'k esa d`fr gS fd dh",
            Some("KrutiDev010"),
            &builtin(),
            &config,
        );
        assert_eq!(r.encoding_id, "kruti-dev");
        assert_eq!(r.confidence, 1.0);
    }

    #[test]
    fn test_list_encodings_matches_registry() {
        let reg = builtin();
        let ids: Vec<String> = list_encodings(&reg)
            .into_iter()
            .map(|i| i.encoding_id)
            .collect();
        assert_eq!(ids, reg.list());
    }
}
