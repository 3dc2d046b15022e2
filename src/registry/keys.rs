//! Longest-key-first lookup for ligature and half-form maps.
//!
//! Keys are bucketed by their length in chars. At a given input position the
//! scanner asks each bucket, longest first, whether the slice of that length
//! is a key. The number of buckets is bounded by the longest key in the
//! table (a dozen chars for whole-word entries), so a full scan stays linear
//! in the input length.

use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Default)]
pub(crate) struct KeyIndex {
    entries: HashMap<String, String>,
    /// Distinct key lengths in chars, descending.
    lengths: Vec<usize>,
}

impl KeyIndex {
    pub(crate) fn build(map: &BTreeMap<String, String>) -> Self {
        let mut lengths: Vec<usize> = map.keys().map(|k| k.chars().count()).collect();
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        lengths.dedup();
        Self {
            entries: map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            lengths,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Longest key starting at char index `pos`.
    ///
    /// `bounds` holds the byte offset of every char in `text` followed by
    /// `text.len()`, so `bounds.len()` is the char count plus one. Returns the
    /// matched key length in chars and the mapped value.
    pub(crate) fn longest_at<'a>(
        &'a self,
        text: &str,
        bounds: &[usize],
        pos: usize,
    ) -> Option<(usize, &'a str)> {
        let remaining = bounds.len().saturating_sub(pos + 1);
        for &len in &self.lengths {
            if len > remaining {
                continue;
            }
            let slice = &text[bounds[pos]..bounds[pos + len]];
            if let Some(value) = self.entries.get(slice) {
                return Some((len, value.as_str()));
            }
        }
        None
    }
}

/// Byte offsets of every char in `text`, plus a final `text.len()`.
pub(crate) fn char_bounds(text: &str) -> Vec<usize> {
    text.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect()
}
