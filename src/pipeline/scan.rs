//! Longest-match substitution pass.
//!
//! A single left-to-right scan. At each position the scanner tries, in
//! order, the longest ligature key, the longest half-form key and the single
//! char. Whatever matched is emitted and the scan advances past it.
//! Unmapped chars never abort the scan: they pass through (or become U+FFFD)
//! and are recorded with their position.

use super::is_devanagari;
use super::rules::{PostRule, PRE_BASE_MARK, REPHA_MARK};
use crate::config::UnmappedPolicy;
use crate::output::UnmappedChar;
use crate::registry::keys::char_bounds;
use crate::registry::CompiledTable;

const SHORT_I: char = '\u{093F}';
const REPHA: &str = "\u{0930}\u{094D}";

/// Raw substitution output, before the post-rule chain.
#[derive(Debug, Default)]
pub(crate) struct ScanOutput {
    pub(crate) text: String,
    pub(crate) warnings: Vec<UnmappedChar>,
    pub(crate) mapped_chars: usize,
}

/// Chars that are not legacy glyphs and pass through without a warning.
///
/// Legacy PDFs routinely mix in Latin text, digits, punctuation and spans
/// that were already Unicode; none of that is a mapping failure.
fn is_transparent(c: char) -> bool {
    c.is_whitespace() || c.is_ascii_graphic() || is_devanagari(c)
}

pub(crate) fn scan(table: &CompiledTable, input: &str, policy: UnmappedPolicy) -> ScanOutput {
    let mark_pre_base = table.has_rule(PostRule::PreBaseMatra);
    let mark_repha = table.has_rule(PostRule::Repha);
    let bounds = char_bounds(input);
    let n = bounds.len() - 1;

    let mut out = ScanOutput {
        text: String::with_capacity(input.len() * 2),
        ..Default::default()
    };
    let emit = |text: &mut String, value: &str, single: bool| {
        if mark_pre_base && value.starts_with(SHORT_I) {
            text.push(PRE_BASE_MARK);
        }
        if mark_repha && single && value == REPHA {
            text.push(REPHA_MARK);
        }
        text.push_str(value);
    };

    let has_ligatures = !table.ligatures.is_empty();
    let has_half_forms = !table.half_forms.is_empty();

    let mut pos = 0;
    while pos < n {
        let ligature = has_ligatures
            .then(|| table.ligatures.longest_at(input, &bounds, pos))
            .flatten();
        if let Some((len, value)) = ligature {
            emit(&mut out.text, value, false);
            out.mapped_chars += len;
            pos += len;
            continue;
        }
        let half_form = has_half_forms
            .then(|| table.half_forms.longest_at(input, &bounds, pos))
            .flatten();
        if let Some((len, value)) = half_form {
            emit(&mut out.text, value, false);
            out.mapped_chars += len;
            pos += len;
            continue;
        }

        let start = bounds[pos];
        let c = input[start..bounds[pos + 1]]
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        if let Some(value) = table.chars.get(&c) {
            emit(&mut out.text, value, true);
            out.mapped_chars += 1;
        } else if c == PRE_BASE_MARK || c == REPHA_MARK {
            // Internal markers must not leak in from the input.
            out.text.push(char::REPLACEMENT_CHARACTER);
            out.warnings.push(UnmappedChar {
                position: pos,
                byte_offset: start,
                ch: c,
                replaced: true,
            });
        } else if is_transparent(c) {
            out.text.push(c);
        } else {
            let replaced = policy == UnmappedPolicy::Replace;
            out.text
                .push(if replaced { char::REPLACEMENT_CHARACTER } else { c });
            out.warnings.push(UnmappedChar {
                position: pos,
                byte_offset: start,
                ch: c,
                replaced,
            });
        }
        pos += 1;
    }
    out
}
