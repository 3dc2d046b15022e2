//! End-to-end integration tests for lipi-convert.
//!
//! Everything here goes through the public API only: build a registry, detect,
//! convert. Samples are real strings as they come out of text extraction on
//! legacy-font PDFs.
//!
//! Run with:
//!   cargo test --test e2e -- --nocapture
//!
//! Set `RUST_LOG=lipi_convert=debug` to see detection traces.

use lipi_convert::{
    convert, convert_with, detect, detect_document, detect_with, detect_with_override,
    detect_with_override_config, list_encodings, ConverterConfig, DetectionConfig, DetectionMethod, DetectionWarning,
    LipiError, MappingTable, OnConflict, PostRule, Registry, RegistryBuilder, TextBlock,
    UnmappedPolicy, ALREADY_UNICODE,
};
use std::path::Path;
use std::sync::Arc;

// ── Test helpers ─────────────────────────────────────────────────────────────

const KRUTI_SAMPLE: &str = "Hkkjr ns'k esa d`fr gS fd dh";
const DVB_SAMPLE: &str = "´ÖÆüÖ¸üÖÂ™Òü ¿ÖÖÃÖ®Ö";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn builtin() -> Registry {
    init_tracing();
    Registry::builtin().expect("built-in tables must compile")
}

fn registry_of(tables: Vec<MappingTable>) -> Registry {
    init_tracing();
    tables
        .into_iter()
        .fold(Registry::builder(), |b, t| {
            b.register(t, OnConflict::Reject).unwrap()
        })
        .build()
}

fn table(id: &str, chars: &[(&str, &str)]) -> MappingTable {
    let mut t = MappingTable::new(id);
    for (k, v) in chars {
        t.char_map.insert(k.to_string(), v.to_string());
    }
    t
}

fn write_file(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

/// Assert `$legacy` converts to `$unicode` under `$id` with no warnings.
macro_rules! assert_converts {
    ($reg:expr, $id:expr, $legacy:expr => $unicode:expr) => {{
        let r = convert($legacy, $id, $reg).unwrap();
        assert_eq!(r.converted_text, $unicode, "[{}] {:?}", $id, $legacy);
        assert!(r.is_clean(), "[{}] {:?} warnings: {:?}", $id, $legacy, r.warnings);
    }};
}

// ── Detection ────────────────────────────────────────────────────────────────

#[test]
fn test_kruti_font_and_content_agree() {
    let reg = builtin();
    let r = detect(KRUTI_SAMPLE, Some("KrutiDev010"), &reg);
    assert_eq!(r.encoding_id, "kruti-dev");
    assert!((r.confidence - 0.98).abs() < 1e-9);
    assert_eq!(r.method, DetectionMethod::Combined);
    assert!(r.is_high_confidence(DetectionConfig::default().high_confidence));
}

#[test]
fn test_kruti_two_signatures_agree_with_font() {
    let reg = builtin();
    let r = detect("Hkkjr ljdkj dk;ZØe gS ljdkj", Some("KrutiDev010"), &reg);
    assert_eq!(r.encoding_id, "kruti-dev");
    assert!((r.confidence - 0.98).abs() < 1e-9);
    assert_eq!(r.method, DetectionMethod::Combined);
    assert!(r.warnings.is_empty());
}

#[test]
fn test_plain_english_is_unknown() {
    let reg = builtin();
    let r = detect("Plain English text with no special markers", None, &reg);
    assert_eq!(r.encoding_id, "unknown");
    assert_eq!(r.confidence, 0.0);
    assert!(r.alternatives.is_empty());
}

#[test]
fn test_unicode_text_is_already_unicode() {
    let reg = builtin();
    let r = detect("महाराष्ट्र राजभाषा अधिनियम", None, &reg);
    assert_eq!(r.encoding_id, ALREADY_UNICODE);
    assert_eq!(r.confidence, 1.0);
}

#[test]
fn test_priority_breaks_shared_signatures() {
    let reg = builtin();
    let r = detect(DVB_SAMPLE, None, &reg);
    assert_eq!(r.encoding_id, "dvb-tt");
    assert_eq!(r.method, DetectionMethod::Heuristic);
    assert!(!r.is_ambiguous());
    assert!(r.alternatives.iter().any(|a| a.encoding_id == "shree-lipi"));
}

#[test]
fn test_unbreakable_tie_is_flagged() {
    let mut a = table("alpha", &[]);
    a.signatures = vec!["@@".into(), "##".into()];
    let mut b = table("beta", &[]);
    b.signatures = a.signatures.clone();
    let reg = registry_of(vec![a, b]);

    let r = detect("@@ ## @@ ## @@ ## @@ ##", None, &reg);
    assert_eq!(r.encoding_id, "alpha");
    assert!(r.confidence <= 0.5);
    assert!(r.is_ambiguous());
    assert_eq!(r.alternatives[0].encoding_id, "beta");
}

#[test]
fn test_font_name_settles_tie() {
    let mut a = table("alpha", &[]);
    a.signatures = vec!["@@".into(), "##".into()];
    let mut b = table("beta", &[]);
    b.signatures = a.signatures.clone();
    b.font_name_variants = vec!["betafont".into()];
    let reg = registry_of(vec![a, b]);

    let r = detect("@@ ## @@ ## @@ ## @@ ##", Some("BetaFont"), &reg);
    assert_eq!(r.encoding_id, "beta");
    assert!((r.confidence - 0.98).abs() < 1e-9);
    assert_eq!(r.method, DetectionMethod::Combined);
    assert!(!r.is_ambiguous());
    assert!(!r
        .warnings
        .iter()
        .any(|w| matches!(w, DetectionWarning::FontHeuristicDisagreement { .. })));
}

#[test]
fn test_more_signatures_never_lower_confidence() {
    let mut t = table("toy", &[]);
    t.signatures = ["q1", "q2", "q3", "q4", "q5", "q6", "q7"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let reg = registry_of(vec![t]);

    let mut previous = 0.0;
    for n in 2..=7 {
        let sample: Vec<String> = (1..=n).map(|i| format!("q{i}")).collect();
        let text = format!("{} ....................", sample.join(" "));
        let r = detect(&text, None, &reg);
        assert_eq!(r.encoding_id, "toy");
        assert!(r.confidence >= previous, "{n} signatures lowered confidence");
        assert!(r.confidence <= 0.95);
        previous = r.confidence;
    }
}

#[test]
fn test_override_takes_precedence() {
    let reg = builtin();
    let r = detect_with_override(KRUTI_SAMPLE, Some("KrutiDev010"), Some("chanakya"), &reg)
        .unwrap();
    assert_eq!(r.encoding_id, "chanakya");
    assert_eq!(r.confidence, 1.0);
    assert_eq!(r.method, DetectionMethod::Override);

    let err = detect_with_override(KRUTI_SAMPLE, None, Some("kruti-deva"), &reg).unwrap_err();
    assert!(matches!(err, LipiError::UnknownEncoding { ref encoding_id } if encoding_id == "kruti-deva"));
}

#[test]
fn test_custom_sample_length() {
    let reg = builtin();
    let config = DetectionConfig::builder().min_sample_len(100).build().unwrap();
    let r = detect_with(KRUTI_SAMPLE, None, &reg, &config);
    assert!(r.is_unknown());
    assert!(r
        .warnings
        .iter()
        .any(|w| matches!(w, DetectionWarning::InsufficientSample { min: 100, .. })));
}

#[test]
fn test_config_out_of_range_never_exceeds_one() {
    let reg = builtin();
    let config = DetectionConfig {
        combined_confidence: 2.0,
        font_name_confidence: 1.5,
        ..DetectionConfig::default()
    };
    let r = detect_with(KRUTI_SAMPLE, Some("KrutiDev010"), &reg, &config);
    assert_eq!(r.method, DetectionMethod::Combined);
    assert!(r.confidence <= 1.0);

    let r = detect_with_override_config("Hkkjr", Some("KrutiDev010"), None, &reg, &config)
        .unwrap();
    assert_eq!(r.method, DetectionMethod::FontName);
    assert!(r.confidence <= 1.0);
}

#[test]
fn test_document_vote() {
    let reg = builtin();
    let blocks = vec![
        TextBlock::new("Government of Maharashtra", Some("Arial")),
        TextBlock::new(DVB_SAMPLE, Some("DVBWTTSurekhNormal")),
        TextBlock::new(DVB_SAMPLE, None),
        TextBlock::new(KRUTI_SAMPLE, Some("KrutiDev010")),
    ];
    let doc = detect_document(&blocks, &reg, &DetectionConfig::default());
    assert_eq!(doc.overall.encoding_id, "dvb-tt");
    assert_eq!(doc.overall.alternatives[0].encoding_id, "kruti-dev");
    assert!(doc.blocks[0].is_unknown());
}

// ── Conversion ───────────────────────────────────────────────────────────────

#[test]
fn test_kruti_phrases() {
    let reg = builtin();
    assert_converts!(&reg, "kruti-dev", KRUTI_SAMPLE => "भारत देश में कृति है कि की");
    assert_converts!(&reg, "kruti-dev", "ljdkj" => "सरकार");
    assert_converts!(&reg, "kruti-dev", "iz/kkuea=h" => "प्रधानमंत्री");
    assert_converts!(&reg, "kruti-dev", "mRrj izns'k" => "उत्तर प्रदेश");
    assert_converts!(&reg, "kruti-dev", "xzke iapk;r" => "ग्राम पंचायत");
    assert_converts!(&reg, "kruti-dev", "fcgkj jkT; ljdkj" => "बिहार राज्य सरकार");
    assert_converts!(&reg, "kruti-dev", "vk;ksx" => "आयोग");
}

#[test]
fn test_visual_order_is_repaired() {
    let reg = builtin();
    let r = convert("dk;ZØe", "kruti-dev", &reg).unwrap();
    assert_eq!(r.converted_text, "कार्यक्रम");
    assert_eq!(r.applied_rules, vec![PostRule::Repha.name()]);

    let r = convert("fu.kZ;", "kruti-dev", &reg).unwrap();
    assert_eq!(r.converted_text, "निर्णय");
    assert_eq!(r.applied_rules, vec!["pre_base_matra", "repha"]);
}

#[test]
fn test_shree_dev_candrabindu() {
    let reg = builtin();
    assert_converts!(&reg, "shree-dev", "H°§" => "कँ");
    assert_converts!(&reg, "shree-dev", "H§°" => "कँ");
    let r = convert("H°§", "shree-dev", &reg).unwrap();
    assert_eq!(r.applied_rules, vec![PostRule::CandrabinduCompose.name()]);
}

#[test]
fn test_dvb_phrases() {
    let reg = builtin();
    assert_converts!(&reg, "dvb-tt", DVB_SAMPLE => "महाराष्ट्र शासन");
    assert_converts!(&reg, "dvb-tt", "×¾Ö³ÖÖÝÖ ×®ÖμÖ´Ö" => "विभाग नियम");
}

#[test]
fn test_detect_then_convert() {
    let reg = builtin();
    let detection = detect(DVB_SAMPLE, Some("ABCDEF+DVBWTTSurekhNormal"), &reg);
    assert_eq!(detection.method, DetectionMethod::Combined);
    let r = convert(DVB_SAMPLE, &detection.encoding_id, &reg).unwrap();
    assert_eq!(r.converted_text, "महाराष्ट्र शासन");
}

#[test]
fn test_unmapped_char_keeps_going() {
    let reg = builtin();
    let r = convert("{k\u{1}", "kruti-dev", &reg).unwrap();
    assert_eq!(r.converted_text, "क्ष\u{1}");
    assert_eq!(r.warnings.len(), 1);
    assert_eq!(r.warnings[0].position, 2);
    assert_eq!(r.warnings[0].ch, '\u{1}');

    let config = ConverterConfig::builder()
        .unmapped(UnmappedPolicy::Replace)
        .build();
    let r = convert_with("{k\u{1}", "kruti-dev", &reg, &config).unwrap();
    assert_eq!(r.converted_text, "क्ष\u{FFFD}");
}

#[test]
fn test_unknown_encoding_is_an_error() {
    let reg = builtin();
    assert!(matches!(
        convert(KRUTI_SAMPLE, "unknown", &reg),
        Err(LipiError::UnknownEncoding { .. })
    ));
}

#[test]
fn test_unicode_passes_through() {
    let reg = builtin();
    let text = "महाराष्ट्र राजभाषा अधिनियम";
    let r = convert(text, ALREADY_UNICODE, &reg).unwrap();
    assert_eq!(r.converted_text, text);
    assert!(r.applied_rules.is_empty());
}

#[test]
fn test_reconverting_unicode_output_is_a_no_op() {
    let reg = builtin();
    for legacy in [KRUTI_SAMPLE, "dk;ZØe fu.kZ; fcgkj jkT; ljdkj", "fLFkfr fgUnh"] {
        let once = convert(legacy, "kruti-dev", &reg).unwrap();
        let twice = convert(&once.converted_text, "kruti-dev", &reg).unwrap();
        assert_eq!(twice.converted_text, once.converted_text);
        assert!(twice.is_clean());
        assert!(twice.applied_rules.is_empty());
    }
}

#[test]
fn test_every_char_mapping_round_trips() {
    use unicode_normalization::UnicodeNormalization;

    let reg = builtin();
    for id in reg.list() {
        let t = reg.get(id).unwrap();
        for (legacy, unicode) in &t.char_map {
            let r = convert(legacy, id, &reg).unwrap();
            let expected: String = unicode.nfc().collect();
            assert_eq!(r.converted_text, expected, "[{id}] {legacy:?}");
            assert!(r.is_clean(), "[{id}] {legacy:?}");
        }
    }
}

#[test]
fn test_longest_match_wins() {
    let mut t = table("toy", &[("a", "अ"), ("b", "ब"), ("c", "च")]);
    t.half_form_map.insert("ab".into(), "ब्".into());
    t.ligature_map.insert("abc".into(), "क्ष".into());
    t.ligature_map.insert("abcd".into(), "ज्ञ".into());
    let reg = registry_of(vec![t]);

    assert_eq!(convert("abcd", "toy", &reg).unwrap().converted_text, "ज्ञ");
    assert_eq!(convert("abce", "toy", &reg).unwrap().converted_text, "क्षe");
    assert_eq!(convert("abb", "toy", &reg).unwrap().converted_text, "ब्ब");
    assert_eq!(convert("ca", "toy", &reg).unwrap().converted_text, "चअ");
}

// ── Registry ─────────────────────────────────────────────────────────────────

#[test]
fn test_list_encodings() {
    let reg = builtin();
    let infos = list_encodings(&reg);
    assert_eq!(infos.len(), 8);
    assert_eq!(infos[0].encoding_id, "kruti-dev");
    assert_eq!(infos[0].language, "Hindi");
    assert!(infos.iter().all(|i| i.script == "Devanagari"));
}

#[test]
fn test_external_table_dir() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "10-house.json",
        r#"{
            "encoding_id": "house-font",
            "display_name": "House Font",
            "language": "Hindi",
            "font_name_variants": ["house[-_\\s]*font"],
            "char_map": {"d": "क", "k": "ा", "f": "ि"},
            "ligature_map": {"{k": "क्ष"},
            "post_rules": ["pre_base_matra"],
            "signatures": ["dk", "fd"]
        }"#,
    );
    write_file(dir.path(), "notes.txt", "not a table");

    let reg = Registry::builder()
        .load_dir(dir.path(), OnConflict::Reject)
        .unwrap()
        .build();
    assert_eq!(reg.list(), vec!["house-font"]);

    let r = detect("dk fd dk fd dk fd dk fd", Some("House Font Bold"), &reg);
    assert_eq!(r.encoding_id, "house-font");
    assert_eq!(r.method, DetectionMethod::Combined);

    let r = convert("fd{k", "house-font", &reg).unwrap();
    assert_eq!(r.converted_text, "किक्ष");
}

#[test]
fn test_external_table_errors_name_file_and_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "broken.json", r#"{"encoding_id": "broken"}"#);
    let err = Registry::builder()
        .load_file(&path, OnConflict::Reject)
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("broken.json"), "got: {msg}");
    assert!(msg.contains("char_map"), "got: {msg}");

    let path = write_file(
        dir.path(),
        "bad-key.json",
        r#"{"encoding_id": "bad-key", "char_map": {"ab": "क"}}"#,
    );
    let err = Registry::builder()
        .load_file(&path, OnConflict::Reject)
        .unwrap_err();
    assert!(matches!(
        err,
        LipiError::InvalidTable { ref field, .. } if field == "char_map"
    ));
    assert!(err.to_string().contains("bad-key.json"));
}

#[test]
fn test_external_yaml_tables() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "house.yaml",
        "encoding_id: house-yaml\n\
         font_name_variants: ['house[-_ ]*yaml']\n\
         char_map: { d: \"क\", k: \"ा\" }\n\
         ligature_map: { \"{k\": \"क्ष\" }\n",
    );
    write_file(
        dir.path(),
        "tiny.yml",
        "encoding_id: tiny\nchar_map: { x: \"ख\" }\n",
    );
    let reg = Registry::builder()
        .load_dir(dir.path(), OnConflict::Reject)
        .unwrap()
        .build();
    assert_eq!(reg.list(), vec!["house-yaml", "tiny"]);
    assert_converts!(&reg, "house-yaml", "dk{k" => "काक्ष");
    assert_converts!(&reg, "tiny", "x" => "ख");

    let path = write_file(
        dir.path(),
        "broken.yaml",
        "encoding_id: broken\nchar_map: { d: [unclosed\n",
    );
    let err = Registry::builder()
        .load_file(&path, OnConflict::Reject)
        .unwrap_err();
    assert!(matches!(err, LipiError::TableYaml { line, .. } if line > 0));
    let msg = err.to_string();
    assert!(msg.contains("broken.yaml"), "got: {msg}");
    assert!(msg.contains("line"), "got: {msg}");
}

#[test]
fn test_external_table_replaces_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "kruti.json",
        r#"{"encoding_id": "kruti-dev", "char_map": {"d": "ख"}}"#,
    );

    let err = RegistryBuilder::with_builtin()
        .unwrap()
        .load_file(&path, OnConflict::Reject)
        .unwrap_err();
    assert!(matches!(err, LipiError::DuplicateEncoding { .. }));

    let reg = RegistryBuilder::with_builtin()
        .unwrap()
        .load_file(&path, OnConflict::Replace)
        .unwrap()
        .build();
    assert_eq!(reg.list()[0], "kruti-dev");
    assert_eq!(convert("d", "kruti-dev", &reg).unwrap().converted_text, "ख");
}

// ── Concurrency ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_shared_registry_across_tasks() {
    let reg = Arc::new(builtin());
    let samples = [
        (KRUTI_SAMPLE, Some("KrutiDev010")),
        (DVB_SAMPLE, Some("DVBWTTSurekhNormal")),
        ("महाराष्ट्र राजभाषा अधिनियम", None),
        ("Plain English text with no special markers", None),
    ];

    let mut handles = Vec::new();
    for round in 0..8 {
        for (text, font) in samples {
            let reg = Arc::clone(&reg);
            let font = font.map(str::to_string);
            handles.push(tokio::task::spawn_blocking(move || {
                let d = detect(text, font.as_deref(), &reg);
                let converted = match d.encoding_id.as_str() {
                    "unknown" => None,
                    id => Some(convert(text, id, &reg).unwrap().converted_text),
                };
                (round, d.encoding_id, converted)
            }));
        }
    }

    let mut results = Vec::new();
    for h in handles {
        results.push(h.await.unwrap());
    }
    assert_eq!(results.len(), 32);
    for (_, id, converted) in &results {
        match id.as_str() {
            "kruti-dev" => assert_eq!(converted.as_deref(), Some("भारत देश में कृति है कि की")),
            "dvb-tt" => assert_eq!(converted.as_deref(), Some("महाराष्ट्र शासन")),
            "already-unicode" => assert_eq!(converted.as_deref(), Some("महाराष्ट्र राजभाषा अधिनियम")),
            "unknown" => assert!(converted.is_none()),
            other => panic!("unexpected encoding {other}"),
        }
    }
}
