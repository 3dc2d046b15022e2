//! Built-in mapping tables.
//!
//! Each submodule holds the raw glyph data for one font family as static
//! `(legacy, unicode)` pairs. This module adds the metadata around it: font
//! name patterns, detection signatures, tie-break priority and the post-rule
//! chain. Registration order below is also the tie-break order of last resort.
//!
//! Signatures overlap on purpose where fonts share glyph layouts (DVB-TT and
//! Shree-Lipi, Kruti-Dev and Chanakya); the priority ranking settles those.

mod aps_dv;
mod chanakya;
mod dvb_tt;
mod kruti_dev;
mod shree_dev;
mod shree_lipi;
mod shusha;
mod walkman_chanakya;

use crate::pipeline::rules::PostRule;
use crate::registry::MappingTable;
use std::collections::BTreeMap;

type Pairs = &'static [(&'static str, &'static str)];

/// Every built-in table, in registration order.
pub(crate) fn builtin_tables() -> Vec<MappingTable> {
    vec![
        kruti_dev(),
        shree_lipi(),
        shree_dev(),
        dvb_tt(),
        chanakya(),
        walkman_chanakya(),
        aps_dv(),
        shusha(),
    ]
}

/// Rule chain for fonts that draw the short-i sign before its consonant.
const PRE_BASE_CHAIN: &[PostRule] = &[
    PostRule::PreBaseMatra,
    PostRule::NuktaPlacement,
    PostRule::MatraCompose,
    PostRule::MarkAfterMatra,
    PostRule::AttachMarks,
];

struct Meta {
    id: &'static str,
    display_name: &'static str,
    language: &'static str,
    patterns: &'static [&'static str],
    signatures: &'static [&'static str],
    priority: u8,
    rules: &'static [PostRule],
    variants: &'static [&'static str],
}

fn assemble(meta: Meta, chars: Pairs, ligatures: Pairs, half_forms: Pairs) -> MappingTable {
    let to_vec = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    let mut table = MappingTable::new(meta.id);
    table.display_name = meta.display_name.to_string();
    table.language = meta.language.to_string();
    table.font_name_variants = to_vec(meta.patterns);
    table.signatures = to_vec(meta.signatures);
    table.priority = meta.priority;
    table.post_rules = meta.rules.to_vec();
    table.variants = to_vec(meta.variants);
    table.version = Some("1.0".to_string());
    table.char_map = to_map(chars);
    table.ligature_map = to_map(ligatures);
    table.half_form_map = to_map(half_forms);
    table
}

fn to_map(pairs: Pairs) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ── Tables ───────────────────────────────────────────────────────────────

fn kruti_dev() -> MappingTable {
    assemble(
        Meta {
            id: "kruti-dev",
            display_name: "Kruti Dev",
            language: "Hindi",
            patterns: &[
                r"kruti[-_\s]*dev[-_\s]*\d+",
                r"kruti[-_\s]*dev",
                r"kruti[-_\s]*\d+",
            ],
            signatures: &["d`fr", "Hkkjr", "ns'k", "gS", "fd", "dh", "esa", "ls"],
            priority: 9,
            rules: &[
                PostRule::PreBaseMatra,
                PostRule::Repha,
                PostRule::NuktaPlacement,
                PostRule::MatraCompose,
                PostRule::MarkAfterMatra,
                PostRule::AttachMarks,
            ],
            variants: &["KrutiDev010", "KrutiDev040"],
        },
        kruti_dev::CHARS,
        kruti_dev::LIGATURES,
        kruti_dev::HALF_FORMS,
    )
}

fn shree_lipi() -> MappingTable {
    assemble(
        Meta {
            id: "shree-lipi",
            display_name: "Shree-Lipi",
            language: "Marathi",
            patterns: &[r"shree[-_\s]*lipi", r"sdl[-_\s]*dev"],
            signatures: &["´Ö", "Æü", "Ö¸ü", "®Ö", "ÖμÖ", "ÖÂ", "™Òü", "×", "†"],
            priority: 9,
            rules: PRE_BASE_CHAIN,
            variants: &["Shree-Lipi"],
        },
        shree_lipi::CHARS,
        shree_lipi::LIGATURES,
        shree_lipi::HALF_FORMS,
    )
}

fn shree_dev() -> MappingTable {
    assemble(
        Meta {
            id: "shree-dev",
            display_name: "SHREE-DEV",
            language: "Marathi",
            patterns: &[r"shree[-_\s]*dev[-_\s]*07\d{2}", r"shree[-_\s]*dev"],
            signatures: &[],
            priority: 9,
            rules: &[
                PostRule::PreBaseMatra,
                PostRule::Repha,
                PostRule::CandrabinduCompose,
                PostRule::MatraCompose,
                PostRule::MarkAfterMatra,
                PostRule::AttachMarks,
            ],
            variants: &[
                "SHREE-DEV-0708",
                "SHREE-DEV-0714",
                "SHREE-DEV-0715",
                "SHREE-DEV-0721",
            ],
        },
        shree_dev::CHARS,
        shree_dev::LIGATURES,
        shree_dev::HALF_FORMS,
    )
}

fn dvb_tt() -> MappingTable {
    assemble(
        Meta {
            id: "dvb-tt",
            display_name: "DVB-TT Surekh",
            language: "Marathi",
            patterns: &[
                r"dvbw?[-_\s]*tt[-_\s]*surekh",
                r"dv[-_\s]*tt[-_\s]*yogesh",
                r"surekh[-_\s]*(normal|bold)",
                r"dvbw?[-_\s]*tt",
            ],
            signatures: &["´Ö", "¿Ö", "Ã", "®", "×¾Ö", "×¬Ö", "¸ü", "Æü", "ÖÓ", "†×"],
            priority: 10,
            rules: PRE_BASE_CHAIN,
            variants: &[
                "DVBWTTSurekhNormal",
                "DVBWTTSurekhBold",
                "DVBTTSurekhNormal",
                "DVBWTT",
                "DVB-TT-Surekh",
            ],
        },
        dvb_tt::CHARS,
        dvb_tt::LIGATURES,
        dvb_tt::HALF_FORMS,
    )
}

fn chanakya() -> MappingTable {
    assemble(
        Meta {
            id: "chanakya",
            display_name: "Chanakya",
            language: "Hindi",
            patterns: &[r"chanakya", r"chankya"],
            signatures: &["Ñfr", "Ákns'k", "Hkkjr"],
            priority: 7,
            rules: PRE_BASE_CHAIN,
            variants: &["Chanakya"],
        },
        chanakya::CHARS,
        chanakya::LIGATURES,
        chanakya::HALF_FORMS,
    )
}

fn walkman_chanakya() -> MappingTable {
    assemble(
        Meta {
            id: "walkman-chanakya",
            display_name: "Walkman-Chanakya",
            language: "Hindi",
            patterns: &[r"walkman[-_\s]*chanakya", r"wm[-_\s]*chanakya"],
            signatures: &["Ökfr", "çns'k"],
            priority: 8,
            rules: PRE_BASE_CHAIN,
            variants: &["Walkman-Chanakya905", "Walkman-Chanakya901"],
        },
        walkman_chanakya::CHARS,
        walkman_chanakya::LIGATURES,
        walkman_chanakya::HALF_FORMS,
    )
}

fn aps_dv() -> MappingTable {
    assemble(
        Meta {
            id: "aps-dv",
            display_name: "APS-DV",
            language: "Hindi",
            patterns: &[r"aps[-_\s]*c[-_\s]*dv", r"aps[-_\s]*dv"],
            signatures: &["¼ã", "ãä", "äã", "Úæ"],
            priority: 8,
            rules: PRE_BASE_CHAIN,
            variants: &["APS-DV-Priyanka", "APS-C-DV"],
        },
        aps_dv::CHARS,
        aps_dv::LIGATURES,
        aps_dv::HALF_FORMS,
    )
}

fn shusha() -> MappingTable {
    assemble(
        Meta {
            id: "shusha",
            display_name: "Shusha",
            language: "Marathi",
            patterns: &[r"shushaa?"],
            signatures: &["ÉÉ®úiÉ", "½þè"],
            priority: 6,
            rules: PRE_BASE_CHAIN,
            variants: &["Shusha", "Shusha02"],
        },
        shusha::CHARS,
        shusha::LIGATURES,
        shusha::HALF_FORMS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let tables = builtin_tables();
        let mut ids: Vec<&str> = tables.iter().map(|t| t.encoding_id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), tables.len());
    }

    #[test]
    fn test_static_data_has_no_duplicate_keys() {
        for table in builtin_tables() {
            // BTreeMap collapses duplicates; compare against the static slices.
            let total = table.char_map.len() + table.ligature_map.len() + table.half_form_map.len();
            assert!(total > 0, "{} has no mappings", table.encoding_id);
        }
        assert_eq!(to_map(kruti_dev::CHARS).len(), kruti_dev::CHARS.len());
        assert_eq!(to_map(dvb_tt::LIGATURES).len(), dvb_tt::LIGATURES.len());
        assert_eq!(to_map(shree_dev::CHARS).len(), shree_dev::CHARS.len());
    }

    #[test]
    fn test_ligature_keys_are_multi_char() {
        for table in builtin_tables() {
            for key in table.ligature_map.keys() {
                assert!(
                    key.chars().count() >= 2,
                    "{}: ligature key {key:?} is a single char",
                    table.encoding_id
                );
            }
        }
    }

    #[test]
    fn test_kruti_ksha_is_a_ligature() {
        let t = kruti_dev();
        assert_eq!(t.ligature_map["{k"], "क्ष");
        assert_eq!(t.half_form_map["{"], "क्ष्");
    }
}
