//! Pipeline stages for legacy-font detection and conversion.
//!
//! Each submodule implements exactly one step. Keeping stages separate makes
//! each independently testable and lets a caller run only the part it needs
//! (e.g. conversion with a manually chosen encoding skips detection).
//!
//! ## Data Flow
//!
//! ```text
//!             ┌─▶ font ──────┐
//! text+font ──┤              ├──▶ arbiter ──▶ scan ──▶ rules ──▶ NFC
//!             └─▶ heuristic ─┘   (encoding)  (substitute) (reorder)
//! ```
//!
//! 1. [`font`]     : match the embedded font name against table patterns
//! 2. [`heuristic`]: Unicode density check, then signature scoring
//! 3. [`arbiter`]  : combine both signals into one `DetectionResult`
//! 4. [`scan`]     : longest-match substitution (ligature > half form > char)
//! 5. [`rules`]    : the table's post-rule chain, in declared order
//!
//! Every stage is a pure, synchronous function of its inputs and the
//! registry. None of them blocks, retries or allocates shared state.

pub mod arbiter;
pub mod font;
pub mod heuristic;
pub mod rules;
pub mod scan;

/// Devanagari, Devanagari Extended and Vedic Extensions.
pub(crate) fn is_devanagari(c: char) -> bool {
    matches!(c, '\u{0900}'..='\u{097F}' | '\u{A8E0}'..='\u{A8FF}' | '\u{1CD0}'..='\u{1CFF}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_devanagari() {
        assert!(is_devanagari('क'));
        assert!(is_devanagari('\u{094D}'));
        assert!(is_devanagari('\u{A8F2}'));
        assert!(!is_devanagari('k'));
        assert!(!is_devanagari('Ö'));
    }
}
