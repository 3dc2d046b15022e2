//! # lipi-convert
//!
//! Detect legacy Indian font encodings in extracted text and convert them to
//! Unicode Devanagari.
//!
//! ## Why this crate?
//!
//! Millions of Hindi and Marathi government PDFs were typeset with
//! pre-Unicode fonts (Kruti-Dev, Shree-Lipi, DVB-TT Surekh, Chanakya, ...)
//! that draw Devanagari glyphs at Latin code points. Text extraction returns
//! what the bytes say, not what the page shows: भारत comes out as `Hkkjr`.
//! This crate figures out which font produced the text and maps it back to
//! searchable, correctly ordered Unicode.
//!
//! ## Pipeline Overview
//!
//! ```text
//! text + font name
//!  │
//!  ├─ 1. Font      match the embedded font name against table patterns
//!  ├─ 2. Content   Unicode density, then distinct-signature scoring
//!  ├─ 3. Arbiter   one DetectionResult with confidence and alternatives
//!  ├─ 4. Scan      longest-match substitution (ligature > half form > char)
//!  ├─ 5. Rules     reorder pre-base matras and repha, compose matras
//!  └─ 6. Output    NFC text + unmapped-char warnings
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use lipi_convert::{convert, detect, Registry};
//!
//! let registry = Registry::builtin()?;
//! let text = "Hkkjr ns'k esa d`fr gS fd dh";
//!
//! let detection = detect(text, Some("KrutiDev010"), &registry);
//! assert_eq!(detection.encoding_id, "kruti-dev");
//!
//! let result = convert(text, &detection.encoding_id, &registry)?;
//! assert!(result.converted_text.starts_with("भारत देश में"));
//! # Ok::<(), lipi_convert::LipiError>(())
//! ```
//!
//! ## Built-in Encodings
//!
//! | Id | Fonts | Language |
//! |----|-------|----------|
//! | `kruti-dev` | Kruti Dev 010, 040, ... | Hindi |
//! | `shree-lipi` | Shree-Lipi, SDL-Dev | Marathi |
//! | `shree-dev` | SHREE-DEV-0708 ... 0721 | Marathi |
//! | `dvb-tt` | DVBW-TT Surekh, DV-TT Yogesh | Marathi |
//! | `chanakya` | Chanakya | Hindi |
//! | `walkman-chanakya` | Walkman-Chanakya 901/905 | Hindi |
//! | `aps-dv` | APS-DV, APS-C-DV | Hindi |
//! | `shusha` | Shusha | Marathi |
//!
//! More tables can be loaded from JSON or YAML files at startup; see
//! [`RegistryBuilder::load_dir`].

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod document;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod registry;
mod tables;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{
    ConverterConfig, ConverterConfigBuilder, DetectionConfig, DetectionConfigBuilder,
    UnmappedPolicy,
};
pub use convert::{
    convert, convert_with, detect, detect_with, detect_with_override, detect_with_override_config,
    list_encodings,
};
pub use document::{detect_document, DocumentDetection, TextBlock};
pub use error::{LipiError, Result};
pub use output::{
    Alternative, ConversionResult, DetectionMethod, DetectionResult, DetectionWarning,
    EncodingInfo, UnmappedChar, ALREADY_UNICODE, UNKNOWN,
};
pub use pipeline::font::{is_unicode_font, FontCandidate};
pub use pipeline::rules::PostRule;
pub use registry::{MappingTable, OnConflict, Registry, RegistryBuilder};
