//! Result types returned by detection and conversion.
//!
//! Every type here is plain data: created once per call, never mutated
//! afterwards, and serialisable so the surrounding pipeline can persist a
//! detection report next to the converted text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel id: no encoding could be identified.
pub const UNKNOWN: &str = "unknown";

/// Sentinel id: the text is already Unicode and needs no conversion.
pub const ALREADY_UNICODE: &str = "already-unicode";

// ── Detection ────────────────────────────────────────────────────────────

/// Which evidence produced a [`DetectionResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    /// The embedded font name alone.
    FontName,
    /// Text content alone (signatures or Unicode density).
    Heuristic,
    /// Font name and text content agreed.
    Combined,
    /// A caller-supplied manual override.
    Override,
}

impl DetectionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionMethod::FontName => "font_name",
            DetectionMethod::Heuristic => "heuristic",
            DetectionMethod::Combined => "combined",
            DetectionMethod::Override => "override",
        }
    }
}

impl fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ranked runner-up encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub encoding_id: String,
    pub confidence: f64,
}

impl Alternative {
    pub fn new(encoding_id: impl Into<String>, confidence: f64) -> Self {
        Self {
            encoding_id: encoding_id.into(),
            confidence,
        }
    }
}

/// A non-fatal caveat attached to a detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetectionWarning {
    /// Several encodings matched equally well and share a priority.
    ///
    /// The reported encoding is the first-registered of `candidates`.
    AmbiguousTie { candidates: Vec<String> },

    /// The sample was too short for content analysis; only the font name was used.
    InsufficientSample { len: usize, min: usize },

    /// The text looks like legacy-font output but no table's signatures matched.
    LegacyTextUnidentified { extended_ratio: f64 },

    /// Font name and text content point at different encodings.
    FontHeuristicDisagreement { font: String, heuristic: String },
}

/// Outcome of encoding detection for one text sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Registered encoding id, or [`UNKNOWN`] / [`ALREADY_UNICODE`].
    pub encoding_id: String,
    /// Confidence in `[0, 1]`. 1.0 only for overrides and already-Unicode text.
    pub confidence: f64,
    pub method: DetectionMethod,
    /// Next-best candidates, best first.
    pub alternatives: Vec<Alternative>,
    /// Quality caveats, e.g. an unbroken tie.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<DetectionWarning>,
}

impl DetectionResult {
    pub(crate) fn unknown() -> Self {
        Self {
            encoding_id: UNKNOWN.to_string(),
            confidence: 0.0,
            method: DetectionMethod::Heuristic,
            alternatives: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.encoding_id == UNKNOWN
    }

    pub fn is_unicode(&self) -> bool {
        self.encoding_id == ALREADY_UNICODE
    }

    /// True when the detection reported an unbroken tie.
    pub fn is_ambiguous(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, DetectionWarning::AmbiguousTie { .. }))
    }

    /// Whether `confidence` reaches `threshold`
    /// (see [`DetectionConfig::high_confidence`](crate::DetectionConfig)).
    pub fn is_high_confidence(&self, threshold: f64) -> bool {
        self.confidence >= threshold
    }
}

// ── Conversion ───────────────────────────────────────────────────────────

/// A code unit the converter had no mapping for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmappedChar {
    /// Index of the char in the input, counted in chars.
    pub position: usize,
    /// Byte offset of the char in the input string.
    pub byte_offset: usize,
    /// The unmapped char itself.
    pub ch: char,
    /// Whether it was replaced with U+FFFD instead of passed through.
    pub replaced: bool,
}

impl fmt::Display for UnmappedChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unmapped U+{:04X} at position {}{}",
            self.ch as u32,
            self.position,
            if self.replaced { " (replaced)" } else { "" }
        )
    }
}

/// Outcome of converting one text unit to Unicode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub converted_text: String,
    pub source_encoding_id: String,
    pub warnings: Vec<UnmappedChar>,
    /// Post rules that changed the text, in the order they ran.
    pub applied_rules: Vec<String>,
    /// Input chars that went through a mapping (ligature, half-form or char).
    pub mapped_chars: usize,
}

impl ConversionResult {
    /// Share of non-transparent input chars that had a mapping.
    ///
    /// Returns 1.0 when the input contained nothing to map.
    pub fn conversion_rate(&self) -> f64 {
        let total = self.mapped_chars + self.warnings.len();
        if total == 0 {
            1.0
        } else {
            self.mapped_chars as f64 / total as f64
        }
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

// ── Enumeration ──────────────────────────────────────────────────────────

/// Summary of a registered encoding, for UI enumeration and search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodingInfo {
    pub encoding_id: String,
    pub display_name: String,
    pub language: String,
    pub script: String,
}
