//! Post-processing: reorder and compose the raw substitution output into
//! Unicode logical order.
//!
//! ## Why is post-processing necessary?
//!
//! Legacy fonts store glyphs in *visual* order. The short-i sign (ि) is typed
//! before the consonant it follows in speech, the repha (र्) is typed after
//! the syllable it precedes, and some fonts build ो out of two glyph pieces.
//! A glyph-by-glyph substitution therefore produces Unicode that renders
//! almost right but sorts, searches and translates wrong.
//!
//! Each [`PostRule`] is one pure `&str → String` pass over the whole string;
//! reordering needs to see across the consonant-cluster boundary, which a
//! per-char rule cannot. A table declares which rules it needs and in what
//! order.
//!
//! ## Markers
//!
//! Canonical Unicode already has ि after its cluster, so a rule that moved
//! *every* ि would corrupt correct text. Instead the scanner plants a marker
//! (a Unicode noncharacter) in front of each ि or repha it emits from a
//! legacy glyph, and the reorder rules only touch marked signs. Text with
//! no markers passes through unchanged, which is what makes every rule
//! idempotent on already-correct input.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Planted before a ि produced from a pre-base glyph.
pub(crate) const PRE_BASE_MARK: char = '\u{FDD0}';
/// Planted before a र् produced from a repha glyph.
pub(crate) const REPHA_MARK: char = '\u{FDD1}';

/// A named, pure text transform applied after substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostRule {
    /// Move a marked ि after the consonant cluster that follows it.
    PreBaseMatra,
    /// Move a marked र् before the cluster (and its signs) that precedes it.
    Repha,
    /// Put a nukta directly after its consonant; compose ऩ ऱ ऴ.
    NuktaPlacement,
    /// Fuse split vowel signs (ा + े → ो, ा + ॅ → ॉ, ...).
    MatraCompose,
    /// Fuse candra E and anusvara, in either order, into candrabindu.
    CandrabinduCompose,
    /// Move anusvara, candrabindu and visarga after the vowel sign.
    MarkAfterMatra,
    /// Drop whitespace that separates a combining mark from its base.
    AttachMarks,
}

impl PostRule {
    pub fn name(&self) -> &'static str {
        match self {
            PostRule::PreBaseMatra => "pre_base_matra",
            PostRule::Repha => "repha",
            PostRule::NuktaPlacement => "nukta_placement",
            PostRule::MatraCompose => "matra_compose",
            PostRule::CandrabinduCompose => "candrabindu_compose",
            PostRule::MarkAfterMatra => "mark_after_matra",
            PostRule::AttachMarks => "attach_marks",
        }
    }

    /// Apply this rule to `input`.
    pub fn apply(&self, input: &str) -> String {
        match self {
            PostRule::PreBaseMatra => reorder_pre_base_matra(input),
            PostRule::Repha => reorder_repha(input),
            PostRule::NuktaPlacement => place_nukta(input),
            PostRule::MatraCompose => compose_matras(input),
            PostRule::CandrabinduCompose => compose_candrabindu(input),
            PostRule::MarkAfterMatra => marks_after_matra(input),
            PostRule::AttachMarks => attach_marks(input),
        }
    }
}

impl fmt::Display for PostRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Run `rules` in order. Returns the text and the rules that changed it.
///
/// Any markers left over are stripped at the end, so a table that plants
/// markers without declaring the matching rule still yields clean text.
pub fn apply_chain(rules: &[PostRule], input: &str) -> (String, Vec<PostRule>) {
    let mut text = input.to_string();
    let mut applied = Vec::new();
    for rule in rules {
        let next = rule.apply(&text);
        if next != text {
            applied.push(*rule);
            text = next;
        }
    }
    (strip_markers(&text), applied)
}

fn strip_markers(input: &str) -> String {
    input.replace([PRE_BASE_MARK, REPHA_MARK], "")
}

// Consonants, including the precomposed nukta letters.
const CONSONANT: &str = r"[\x{0915}-\x{0939}\x{0958}-\x{095F}]";

/// One consonant cluster: (C nukta? virama)* C nukta?
static CLUSTER: Lazy<String> =
    Lazy::new(|| format!(r"(?:{CONSONANT}\x{{093C}}?\x{{094D}})*{CONSONANT}\x{{093C}}?"));

// ── Rule 1: Pre-base short-i ─────────────────────────────────────────────────

static RE_PRE_BASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"\x{{FDD0}}\x{{093F}}({})", *CLUSTER)).unwrap());

fn reorder_pre_base_matra(input: &str) -> String {
    if !input.contains(PRE_BASE_MARK) {
        return input.to_string();
    }
    let s = RE_PRE_BASE.replace_all(input, "${1}\u{093F}");
    s.replace(PRE_BASE_MARK, "")
}

// ── Rule 2: Repha ────────────────────────────────────────────────────────────

static RE_REPHA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"({})([\x{{093E}}-\x{{094C}}\x{{0901}}-\x{{0903}}]*)\x{{FDD1}}\x{{0930}}\x{{094D}}",
        *CLUSTER
    ))
    .unwrap()
});

fn reorder_repha(input: &str) -> String {
    if !input.contains(REPHA_MARK) {
        return input.to_string();
    }
    let s = RE_REPHA.replace_all(input, "\u{0930}\u{094D}${1}${2}");
    s.replace(REPHA_MARK, "")
}

// ── Rule 3: Nukta placement ──────────────────────────────────────────────────

static RE_NUKTA_AFTER_MATRA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"({CONSONANT})([\x{{093E}}-\x{{094C}}])\x{{093C}}")).unwrap()
});

/// Consonant + nukta pairs with an NFC-stable precomposed form.
const NUKTA_COMPOSE: &[(&str, &str)] = &[
    ("\u{0928}\u{093C}", "\u{0929}"),
    ("\u{0930}\u{093C}", "\u{0931}"),
    ("\u{0933}\u{093C}", "\u{0934}"),
];

fn place_nukta(input: &str) -> String {
    let mut s = RE_NUKTA_AFTER_MATRA
        .replace_all(input, "${1}\u{093C}${2}")
        .into_owned();
    for (pair, composed) in NUKTA_COMPOSE {
        if s.contains(pair) {
            s = s.replace(pair, composed);
        }
    }
    s
}

// ── Rule 4: Split vowel signs ────────────────────────────────────────────────

const MATRA_PAIRS: &[(&str, &str)] = &[
    ("\u{093E}\u{0947}", "\u{094B}"), // ा + े → ो
    ("\u{093E}\u{0948}", "\u{094C}"), // ा + ै → ौ
    ("\u{0947}\u{093E}", "\u{094B}"), // े + ा → ो
    ("\u{0948}\u{093E}", "\u{094C}"), // ै + ा → ौ
    ("\u{093E}\u{0945}", "\u{0949}"), // ा + ॅ → ॉ
    ("\u{0945}\u{093E}", "\u{0949}"), // ॅ + ा → ॉ
    ("\u{093E}\u{094B}", "\u{094B}"), // ा + ो → ो
];

fn compose_matras(input: &str) -> String {
    let mut s = input.to_string();
    for (pair, composed) in MATRA_PAIRS {
        if s.contains(pair) {
            s = s.replace(pair, composed);
        }
    }
    s
}

// ── Rule 5: Anusvara / candrabindu / visarga after the vowel sign ────────────

static RE_MARK_BEFORE_MATRA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([\x{0901}-\x{0903}]+)([\x{093E}-\x{094C}]+)").unwrap());

fn marks_after_matra(input: &str) -> String {
    RE_MARK_BEFORE_MATRA
        .replace_all(input, "${2}${1}")
        .into_owned()
}

// ── Rule 6: Attach combining marks ───────────────────────────────────────────

static RE_SPACE_BEFORE_MARK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+([\x{0901}-\x{0903}\x{093C}\x{093E}-\x{094D}])").unwrap()
});

fn attach_marks(input: &str) -> String {
    RE_SPACE_BEFORE_MARK.replace_all(input, "${1}").into_owned()
}

// ── Rule 7: Candra E + anusvara ──────────────────────────────────────────────

// SHREE-DEV draws candrabindu as ॅ and ं stacked, typed in either order.
// Runs before MatraCompose so ा + ॅ + ं ends up as ाँ, not ॉं.
const CANDRABINDU_PAIRS: &[(&str, &str)] = &[
    ("\u{0945}\u{0902}", "\u{0901}"), // ॅ + ं → ँ
    ("\u{0902}\u{0945}", "\u{0901}"), // ं + ॅ → ँ
];

fn compose_candrabindu(input: &str) -> String {
    let mut s = input.to_string();
    for (pair, composed) in CANDRABINDU_PAIRS {
        if s.contains(pair) {
            s = s.replace(pair, composed);
        }
    }
    s
}
