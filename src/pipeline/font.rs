//! Font-name matching.
//!
//! PDF producers embed font names in many spellings: `KrutiDev010`,
//! `Kruti Dev 010`, `ABCDEF+KrutiDev010` (subset prefix), `SHREE-DEV-0714`.
//! Each table carries case-insensitive patterns that absorb the separator
//! noise. A name can match several tables (`Walkman-Chanakya905` also
//! contains `chanakya`), so candidates are ranked by how much of the name
//! their best pattern explains: the longest matched span wins.

use crate::registry::Registry;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Subset prefix added by PDF producers, e.g. `BCDEEE+`.
static RE_SUBSET_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{6}\+").unwrap());

/// Fonts that already carry Unicode Devanagari.
static RE_UNICODE_FONT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)sakal[-_\s]*marathi|mangal|nirmala[-_\s]*ui|aparajita|kokila|utsaah|shruti|lohit[-_\s]*devanagari|noto[-_\s]*sans[-_\s]*devanagari|adobe[-_\s]*devanagari|tiro[-_\s]*devanagari|poppins[-_\s]*devanagari",
    )
    .unwrap()
});

/// A table whose font-name patterns matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontCandidate {
    pub encoding_id: String,
    /// Length in chars of the longest matched span. Higher is more specific.
    pub priority: usize,
}

/// Drop the six-letter subset tag and surrounding whitespace.
pub fn strip_subset_prefix(font_name: &str) -> &str {
    let name = font_name.trim();
    match RE_SUBSET_PREFIX.find(name) {
        Some(m) => &name[m.end()..],
        None => name,
    }
}

/// Every table matching `font_name`, most specific first.
///
/// Ties keep registration order. Returns nothing for a missing or empty
/// name and never fails.
pub fn match_font(font_name: Option<&str>, registry: &Registry) -> Vec<FontCandidate> {
    let Some(raw) = font_name else {
        return Vec::new();
    };
    let name = strip_subset_prefix(raw);
    if name.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<FontCandidate> = registry
        .iter()
        .filter_map(|table| {
            table
                .font_patterns
                .iter()
                .filter_map(|re| re.find(name))
                .map(|m| m.as_str().chars().count())
                .max()
                .map(|priority| FontCandidate {
                    encoding_id: table.id().to_string(),
                    priority,
                })
        })
        .collect();
    // Stable sort keeps registration order among equal priorities.
    candidates.sort_by(|a, b| b.priority.cmp(&a.priority));

    debug!(
        "Font '{}' matched {:?}",
        name,
        candidates.iter().map(|c| c.encoding_id.as_str()).collect::<Vec<_>>()
    );
    candidates
}

/// True when `font_name` is a known Unicode Devanagari font.
pub fn is_unicode_font(font_name: &str) -> bool {
    RE_UNICODE_FONT.is_match(strip_subset_prefix(font_name))
}
