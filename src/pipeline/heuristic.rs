//! Content-based encoding detection.
//!
//! Two checks, in order:
//!
//! 1. **Unicode density.** If more than `unicode_threshold` of the
//!    non-whitespace chars are already Devanagari, the text needs no
//!    conversion.
//! 2. **Signatures.** Each table lists substrings that its garbled output
//!    produces over and over (Kruti-Dev renders भारत as `Hkkjr`). A table
//!    qualifies when at least `min_signature_matches` *distinct* signatures
//!    occur. Repeats of one signature never add confidence.
//!
//! When qualifiers tie on distinct matches, table priority decides. A tie
//! that priority cannot break is reported, not hidden: the first-registered
//! table wins with capped confidence and an [`DetectionWarning::AmbiguousTie`].

use super::is_devanagari;
use crate::config::DetectionConfig;
use crate::error::{LipiError, Result};
use crate::output::{
    Alternative, DetectionMethod, DetectionResult, DetectionWarning, ALREADY_UNICODE,
};
use crate::registry::Registry;
use tracing::debug;

#[derive(Debug)]
struct Scored<'a> {
    encoding_id: &'a str,
    distinct: usize,
    occurrences: usize,
    priority: u8,
}

/// Devanagari and extended-char shares of the non-whitespace chars.
fn densities(text: &str) -> (f64, f64) {
    let (mut total, mut deva, mut extended) = (0usize, 0usize, 0usize);
    for c in text.chars().filter(|c| !c.is_whitespace()) {
        total += 1;
        if is_devanagari(c) {
            deva += 1;
        } else if !c.is_ascii() {
            extended += 1;
        }
    }
    if total == 0 {
        return (0.0, 0.0);
    }
    (deva as f64 / total as f64, extended as f64 / total as f64)
}

/// Detect the encoding of `text` from its content alone.
///
/// Fails with [`LipiError::InsufficientSample`] when `text` is shorter than
/// `config.min_sample_len` chars. Every other outcome, including "nothing
/// matched", is an `Ok` result with method [`DetectionMethod::Heuristic`].
pub fn detect_heuristic(
    text: &str,
    registry: &Registry,
    config: &DetectionConfig,
) -> Result<DetectionResult> {
    let len = text.chars().count();
    if len < config.min_sample_len {
        return Err(LipiError::InsufficientSample {
            len,
            min: config.min_sample_len,
        });
    }

    let (unicode_ratio, extended_ratio) = densities(text);
    if unicode_ratio > config.unicode_threshold {
        debug!("Devanagari density {:.2}: already Unicode", unicode_ratio);
        return Ok(DetectionResult {
            encoding_id: ALREADY_UNICODE.to_string(),
            confidence: 1.0,
            method: DetectionMethod::Heuristic,
            alternatives: Vec::new(),
            warnings: Vec::new(),
        });
    }

    let mut scored: Vec<Scored> = registry
        .iter()
        .map(|table| {
            let counts: Vec<usize> = table
                .table
                .signatures
                .iter()
                .map(|sig| text.matches(sig.as_str()).count())
                .collect();
            Scored {
                encoding_id: table.id(),
                distinct: counts.iter().filter(|&&n| n > 0).count(),
                occurrences: counts.iter().sum(),
                priority: table.table.priority,
            }
        })
        .filter(|s| s.distinct > 0 && s.distinct >= config.min_signature_matches)
        .collect();

    if scored.is_empty() {
        let mut result = DetectionResult::unknown();
        if extended_ratio > config.legacy_density_threshold {
            debug!("Extended-char density {:.2} but no signatures matched", extended_ratio);
            result
                .warnings
                .push(DetectionWarning::LegacyTextUnidentified { extended_ratio });
        }
        return Ok(result);
    }

    // Stable: equal (distinct, priority) keeps registration order.
    scored.sort_by(|a, b| {
        b.distinct
            .cmp(&a.distinct)
            .then_with(|| b.priority.cmp(&a.priority))
    });
    let top = &scored[0];
    let tied: Vec<&str> = scored
        .iter()
        .take_while(|s| s.distinct == top.distinct && s.priority == top.priority)
        .map(|s| s.encoding_id)
        .collect();

    let mut confidence = config.signature_confidence(top.distinct);
    let mut warnings = Vec::new();
    if tied.len() > 1 {
        confidence = confidence.min(config.ambiguous_cap);
        warnings.push(DetectionWarning::AmbiguousTie {
            candidates: tied.iter().map(|id| id.to_string()).collect(),
        });
    }

    // Tied candidates sort directly after the winner, so they lead the list.
    let alternatives = scored[1..]
        .iter()
        .map(|s| {
            let c = config.signature_confidence(s.distinct);
            let c = if tied.contains(&s.encoding_id) {
                c.min(config.ambiguous_cap)
            } else {
                c
            };
            Alternative::new(s.encoding_id, c)
        })
        .collect();

    debug!(
        "Signature winner '{}' ({} distinct, {} hits, confidence {:.2}, {} tied)",
        top.encoding_id,
        top.distinct,
        top.occurrences,
        confidence,
        tied.len()
    );
    Ok(DetectionResult {
        encoding_id: top.encoding_id.to_string(),
        confidence,
        method: DetectionMethod::Heuristic,
        alternatives,
        warnings,
    })
}
