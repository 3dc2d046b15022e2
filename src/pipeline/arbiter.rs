//! Combine font-name and content evidence into one detection.
//!
//! ## Precedence
//!
//! | # | Evidence                                   | Result                         |
//! |---|--------------------------------------------|--------------------------------|
//! | 0 | manual override                            | override id, 1.0               |
//! | 1 | content is already Unicode                 | `already-unicode`, 1.0         |
//! | 2 | content winner (or a tied table) is a font match | that id, `combined_confidence` |
//! | 3 | font matches only (or they disagree)       | top font match, `font_name_confidence` |
//! | 4 | content winner only                        | content result as-is           |
//! | 5 | font is a known Unicode font               | `already-unicode`, `font_name_confidence` |
//! | 6 | nothing                                    | `unknown`, 0.0                 |
//!
//! Font names are trusted over content when they disagree: a font name is an
//! explicit claim by the PDF producer, signatures are statistics. The
//! disagreement is still surfaced as a warning with the content winner as the
//! first alternative.

use super::font::{is_unicode_font, match_font, FontCandidate};
use super::heuristic::detect_heuristic;
use crate::config::DetectionConfig;
use crate::error::{LipiError, Result};
use crate::output::{
    Alternative, DetectionMethod, DetectionResult, DetectionWarning, ALREADY_UNICODE,
};
use crate::registry::Registry;
use tracing::{debug, warn};

/// Detection result for a caller-chosen encoding.
///
/// Accepts any registered id and [`ALREADY_UNICODE`]; anything else is
/// [`LipiError::UnknownEncoding`].
pub fn resolve_override(encoding_id: &str, registry: &Registry) -> Result<DetectionResult> {
    if encoding_id != ALREADY_UNICODE && !registry.contains(encoding_id) {
        return Err(LipiError::unknown(encoding_id));
    }
    Ok(DetectionResult {
        encoding_id: encoding_id.to_string(),
        confidence: 1.0,
        method: DetectionMethod::Override,
        alternatives: Vec::new(),
        warnings: Vec::new(),
    })
}

/// Run both detectors and pick a single answer. Never fails.
pub fn arbitrate(
    text: &str,
    font_name: Option<&str>,
    registry: &Registry,
    config: &DetectionConfig,
) -> DetectionResult {
    let fonts = match_font(font_name, registry);

    let mut warnings = Vec::new();
    let content = match detect_heuristic(text, registry, config) {
        Ok(r) => Some(r),
        Err(LipiError::InsufficientSample { len, min }) => {
            debug!("Sample of {} chars below {}; font name only", len, min);
            warnings.push(DetectionWarning::InsufficientSample { len, min });
            None
        }
        Err(e) => {
            warn!("Content detection failed: {}", e);
            None
        }
    };
    // Only a named winner counts as content evidence.
    let (winner, content_warnings) = match content {
        Some(r) if !r.is_unknown() => (Some(r), Vec::new()),
        Some(r) => (None, r.warnings),
        None => (None, Vec::new()),
    };

    // ── Rule 1: already Unicode ──────────────────────────────────────────
    if let Some(r) = winner.as_ref().filter(|r| r.is_unicode()) {
        let method = if font_name.is_some_and(is_unicode_font) {
            DetectionMethod::Combined
        } else {
            DetectionMethod::Heuristic
        };
        return DetectionResult {
            method,
            warnings,
            ..r.clone()
        };
    }

    // ── Rule 2: both agree ───────────────────────────────────────────────
    let agreed = winner
        .as_ref()
        .and_then(|r| agreed_id(r, &fonts).map(|id| (r, id)));
    if let Some((r, id)) = agreed {
        if id != r.encoding_id {
            debug!("Font name '{}' settles tie with '{}'", id, r.encoding_id);
        }
        let mut alternatives = Vec::new();
        push_fonts(&mut alternatives, &fonts, &id, config);
        push_unique(
            &mut alternatives,
            &id,
            Alternative::new(r.encoding_id.clone(), r.confidence),
        );
        for alt in &r.alternatives {
            push_unique(&mut alternatives, &id, alt.clone());
        }
        return DetectionResult {
            encoding_id: id,
            confidence: config.combined_confidence,
            method: DetectionMethod::Combined,
            alternatives,
            warnings,
        };
    }

    // ── Rule 3: font name wins ───────────────────────────────────────────
    if let Some(top) = fonts.first() {
        let mut alternatives = Vec::new();
        if let Some(r) = &winner {
            debug!(
                "Font says '{}', content says '{}'",
                top.encoding_id, r.encoding_id
            );
            warnings.push(DetectionWarning::FontHeuristicDisagreement {
                font: top.encoding_id.clone(),
                heuristic: r.encoding_id.clone(),
            });
            push_unique(
                &mut alternatives,
                &top.encoding_id,
                Alternative::new(r.encoding_id.clone(), r.confidence),
            );
        }
        push_fonts(&mut alternatives, &fonts, &top.encoding_id, config);
        warnings.extend(content_warnings);
        return DetectionResult {
            encoding_id: top.encoding_id.clone(),
            confidence: config.font_name_confidence,
            method: DetectionMethod::FontName,
            alternatives,
            warnings,
        };
    }

    // ── Rule 4: content only ─────────────────────────────────────────────
    if let Some(mut r) = winner {
        warnings.append(&mut r.warnings);
        r.warnings = warnings;
        return r;
    }

    warnings.extend(content_warnings);

    // ── Rule 5: Unicode font ─────────────────────────────────────────────
    if font_name.is_some_and(is_unicode_font) {
        return DetectionResult {
            encoding_id: ALREADY_UNICODE.to_string(),
            confidence: config.font_name_confidence,
            method: DetectionMethod::FontName,
            alternatives: Vec::new(),
            warnings,
        };
    }

    // ── Rule 6: nothing ──────────────────────────────────────────────────
    DetectionResult {
        warnings,
        ..DetectionResult::unknown()
    }
}

/// The id both detectors agree on, if any.
///
/// The content winner agrees when it is a font candidate. Under an
/// unbroken signature tie every tied table counts as the content answer,
/// so the first font candidate among them agrees too.
fn agreed_id(content: &DetectionResult, fonts: &[FontCandidate]) -> Option<String> {
    if fonts.iter().any(|f| f.encoding_id == content.encoding_id) {
        return Some(content.encoding_id.clone());
    }
    let tied = content.warnings.iter().find_map(|w| match w {
        DetectionWarning::AmbiguousTie { candidates } => Some(candidates),
        _ => None,
    })?;
    fonts
        .iter()
        .find(|f| tied.contains(&f.encoding_id))
        .map(|f| f.encoding_id.clone())
}

fn push_fonts(
    out: &mut Vec<Alternative>,
    fonts: &[FontCandidate],
    winner: &str,
    config: &DetectionConfig,
) {
    for f in fonts {
        push_unique(
            out,
            winner,
            Alternative::new(f.encoding_id.clone(), config.font_name_confidence),
        );
    }
}

fn push_unique(out: &mut Vec<Alternative>, winner: &str, alt: Alternative) {
    if alt.encoding_id != winner && !out.iter().any(|a| a.encoding_id == alt.encoding_id) {
        out.push(alt);
    }
}
