//! Document-level detection.
//!
//! A PDF usually mixes fonts: Latin headers, a legacy body font, maybe a
//! Unicode title. Detecting each text block independently and voting gives
//! the encoding that dominates the document, while the per-block results
//! stay available for span-by-span conversion.

use crate::config::DetectionConfig;
use crate::convert::detect_with;
use crate::output::{Alternative, DetectionMethod, DetectionResult};
use crate::registry::Registry;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Maximum number of runner-up encodings in the overall result.
const MAX_ALTERNATIVES: usize = 3;

/// One extracted run of text and the font it was drawn with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    pub text: String,
    #[serde(default)]
    pub font_name: Option<String>,
}

impl TextBlock {
    pub fn new(text: impl Into<String>, font_name: Option<&str>) -> Self {
        Self {
            text: text.into(),
            font_name: font_name.map(str::to_string),
        }
    }
}

/// Overall verdict plus the per-block results it was voted from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentDetection {
    pub overall: DetectionResult,
    /// One result per input block, in input order.
    pub blocks: Vec<DetectionResult>,
}

#[derive(Debug)]
struct Tally<'a> {
    encoding_id: &'a str,
    votes: usize,
    confidence_sum: f64,
    method: DetectionMethod,
}

/// Detect every block, then vote.
///
/// Blocks detected as `unknown` do not vote. The winner has the most votes;
/// ties go to the higher summed confidence, then to the encoding seen first.
/// Overall confidence is the mean over the winner's blocks.
pub fn detect_document(
    blocks: &[TextBlock],
    registry: &Registry,
    config: &DetectionConfig,
) -> DocumentDetection {
    let results: Vec<DetectionResult> = blocks
        .iter()
        .map(|b| detect_with(&b.text, b.font_name.as_deref(), registry, config))
        .collect();

    let mut tallies: Vec<Tally> = Vec::new();
    for r in results.iter().filter(|r| !r.is_unknown()) {
        match tallies.iter_mut().find(|t| t.encoding_id == r.encoding_id) {
            Some(t) => {
                t.votes += 1;
                t.confidence_sum += r.confidence;
            }
            None => tallies.push(Tally {
                encoding_id: &r.encoding_id,
                votes: 1,
                confidence_sum: r.confidence,
                method: r.method,
            }),
        }
    }
    // Stable: full ties keep first-seen order.
    tallies.sort_by(|a, b| {
        b.votes.cmp(&a.votes).then_with(|| {
            b.confidence_sum
                .partial_cmp(&a.confidence_sum)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    });

    let overall = match tallies.first() {
        Some(top) => DetectionResult {
            encoding_id: top.encoding_id.to_string(),
            confidence: top.confidence_sum / top.votes as f64,
            method: top.method,
            alternatives: tallies[1..]
                .iter()
                .take(MAX_ALTERNATIVES)
                .map(|t| Alternative::new(t.encoding_id, t.confidence_sum / t.votes as f64))
                .collect(),
            warnings: Vec::new(),
        },
        None => DetectionResult::unknown(),
    };
    info!(
        "Document encoding '{}' from {} blocks ({} voting)",
        overall.encoding_id,
        blocks.len(),
        tallies.iter().map(|t| t.votes).sum::<usize>()
    );

    DocumentDetection {
        overall,
        blocks: results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KRUTI: &str = "Hkkjr ns'k esa d`fr gS fd dh";

    #[test]
    fn test_majority_wins() {
        let reg = Registry::builtin().unwrap();
        let blocks = vec![
            TextBlock::new(KRUTI, Some("KrutiDev010")),
            TextBlock::new("Annual Report 2019-20", Some("Arial")),
            TextBlock::new(KRUTI, None),
            TextBlock::new("short", Some("DVBWTTSurekhNormal")),
        ];
        let doc = detect_document(&blocks, &reg, &DetectionConfig::default());
        assert_eq!(doc.blocks.len(), 4);
        assert_eq!(doc.overall.encoding_id, "kruti-dev");
        assert_eq!(doc.overall.method, DetectionMethod::Combined);
        // Mean of 0.98 (combined) and 0.95 (heuristic).
        assert!((doc.overall.confidence - 0.965).abs() < 1e-9);
        assert_eq!(doc.overall.alternatives[0].encoding_id, "dvb-tt");
    }

    #[test]
    fn test_no_blocks_is_unknown() {
        let reg = Registry::builtin().unwrap();
        let doc = detect_document(&[], &reg, &DetectionConfig::default());
        assert!(doc.overall.is_unknown());
        assert!(doc.blocks.is_empty());
    }

    #[test]
    fn test_vote_tie_goes_to_confidence() {
        let reg = Registry::builtin().unwrap();
        let blocks = vec![
            TextBlock::new("short", Some("Shusha02")),
            TextBlock::new(KRUTI, Some("KrutiDev010")),
        ];
        let doc = detect_document(&blocks, &reg, &DetectionConfig::default());
        assert_eq!(doc.overall.encoding_id, "kruti-dev");
    }
}
