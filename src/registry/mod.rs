//! Mapping table registry.
//!
//! ## Why a builder?
//!
//! Tables are registered once at startup (built-ins first, then any external
//! definition files) and are read-only afterwards. Splitting construction
//! ([`RegistryBuilder`]) from use ([`Registry`]) makes that a type-level
//! property: a `Registry` has no mutating methods, so it can be shared behind
//! `&` or `Arc` across any number of threads without locking.
//!
//! There is deliberately no process-wide default registry. Every detection
//! and conversion call takes the registry it should use, which lets tests
//! build isolated registries out of synthetic tables.
//!
//! ## Compilation
//!
//! Registration validates a table and compiles everything the hot path
//! needs: NFC-normalised values, longest-match key indexes and
//! case-insensitive font-name regexes. Conversion never compiles anything.

pub(crate) mod keys;
pub mod loader;

use crate::error::{LipiError, Result};
use crate::output::{EncodingInfo, ALREADY_UNICODE, UNKNOWN};
use crate::pipeline::rules::PostRule;
use keys::KeyIndex;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::{debug, info, warn};
use unicode_normalization::UnicodeNormalization;

/// One legacy encoding: its glyph maps, detection hints and rule chain.
///
/// This is also the shape of an external table file (one JSON or YAML
/// object per file). `encoding_id` and `char_map` are required; everything else has a
/// default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MappingTable {
    /// Unique key, e.g. `"kruti-dev"`.
    pub encoding_id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub language: String,
    #[serde(default = "default_script")]
    pub script: String,
    /// Case-insensitive regexes matched against embedded font names, most
    /// specific first.
    #[serde(default)]
    pub font_name_variants: Vec<String>,
    /// Single legacy char → Unicode.
    pub char_map: BTreeMap<String, String>,
    /// Multi-char legacy sequences → Unicode. Longest key wins.
    #[serde(default)]
    pub ligature_map: BTreeMap<String, String>,
    /// Consonant half forms. Tried after ligatures, before single chars.
    #[serde(default)]
    pub half_form_map: BTreeMap<String, String>,
    /// Post-processing rules, applied in this order.
    #[serde(default)]
    pub post_rules: Vec<PostRule>,
    /// Substrings characteristic of this encoding's garbled output.
    #[serde(default)]
    pub signatures: Vec<String>,
    /// Tie-break rank for heuristic detection; higher wins.
    #[serde(default)]
    pub priority: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Font names this table is known to cover, for display only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<String>,
}

fn default_script() -> String {
    "Devanagari".to_string()
}

impl MappingTable {
    /// An empty table with the given id, for building synthetic tables.
    pub fn new(encoding_id: impl Into<String>) -> Self {
        let encoding_id = encoding_id.into();
        Self {
            display_name: encoding_id.clone(),
            encoding_id,
            language: String::new(),
            script: default_script(),
            font_name_variants: Vec::new(),
            char_map: BTreeMap::new(),
            ligature_map: BTreeMap::new(),
            half_form_map: BTreeMap::new(),
            post_rules: Vec::new(),
            signatures: Vec::new(),
            priority: 0,
            version: None,
            variants: Vec::new(),
        }
    }

    pub fn info(&self) -> EncodingInfo {
        EncodingInfo {
            encoding_id: self.encoding_id.clone(),
            display_name: self.display_name.clone(),
            language: self.language.clone(),
            script: self.script.clone(),
        }
    }
}

/// What to do when a registered id is registered again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnConflict {
    /// Fail with [`LipiError::DuplicateEncoding`]. (default)
    #[default]
    Reject,
    /// Replace the existing table, keeping its registration slot.
    Replace,
}

// ── Compiled form ────────────────────────────────────────────────────────

/// A validated table plus the lookup structures the converter scans with.
#[derive(Debug)]
pub(crate) struct CompiledTable {
    pub(crate) table: MappingTable,
    pub(crate) chars: HashMap<char, String>,
    pub(crate) ligatures: KeyIndex,
    pub(crate) half_forms: KeyIndex,
    pub(crate) font_patterns: Vec<Regex>,
}

impl CompiledTable {
    pub(crate) fn compile(mut table: MappingTable, source: &str) -> Result<Self> {
        let id = table.encoding_id.trim().to_string();
        if id.is_empty() {
            return Err(LipiError::invalid_table(source, "encoding_id", "must not be empty"));
        }
        if id == UNKNOWN || id == ALREADY_UNICODE {
            return Err(LipiError::invalid_table(
                source,
                "encoding_id",
                format!("'{id}' is reserved"),
            ));
        }
        table.encoding_id = id;

        normalize_values(&mut table.char_map);
        normalize_values(&mut table.ligature_map);
        normalize_values(&mut table.half_form_map);

        let mut chars = HashMap::with_capacity(table.char_map.len());
        for (key, value) in &table.char_map {
            let mut it = key.chars();
            match (it.next(), it.next()) {
                (Some(c), None) => {
                    chars.insert(c, value.clone());
                }
                _ => {
                    return Err(LipiError::invalid_table(
                        source,
                        "char_map",
                        format!("key {key:?} must be exactly one char"),
                    ))
                }
            }
        }
        if let Some(key) = table.ligature_map.keys().find(|k| k.chars().count() < 2) {
            return Err(LipiError::invalid_table(
                source,
                "ligature_map",
                format!("key {key:?} must be at least two chars"),
            ));
        }
        if table.half_form_map.contains_key("") {
            return Err(LipiError::invalid_table(source, "half_form_map", "empty key"));
        }
        if table.signatures.iter().any(|s| s.is_empty()) {
            return Err(LipiError::invalid_table(source, "signatures", "empty signature"));
        }

        let font_patterns = table
            .font_name_variants
            .iter()
            .map(|p| {
                RegexBuilder::new(p)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| {
                        LipiError::invalid_table(
                            source,
                            "font_name_variants",
                            format!("pattern {p:?}: {e}"),
                        )
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            chars,
            ligatures: KeyIndex::build(&table.ligature_map),
            half_forms: KeyIndex::build(&table.half_form_map),
            font_patterns,
            table,
        })
    }

    pub(crate) fn id(&self) -> &str {
        &self.table.encoding_id
    }

    pub(crate) fn has_rule(&self, rule: PostRule) -> bool {
        self.table.post_rules.contains(&rule)
    }
}

fn normalize_values(map: &mut BTreeMap<String, String>) {
    for value in map.values_mut() {
        *value = value.nfc().collect();
    }
}

// ── Registry ─────────────────────────────────────────────────────────────

/// Immutable set of mapping tables, in registration order.
#[derive(Debug, Default)]
pub struct Registry {
    tables: Vec<CompiledTable>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Start building a registry with no tables.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// A registry with no tables.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry holding every built-in table.
    pub fn builtin() -> Result<Self> {
        Ok(RegistryBuilder::with_builtin()?.build())
    }

    /// Look up a table by id.
    pub fn get(&self, encoding_id: &str) -> Result<&MappingTable> {
        self.compiled(encoding_id).map(|c| &c.table)
    }

    /// Registered ids in registration order.
    pub fn list(&self) -> Vec<&str> {
        self.tables.iter().map(|c| c.id()).collect()
    }

    pub fn contains(&self, encoding_id: &str) -> bool {
        self.index.contains_key(encoding_id)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Summaries of every table, for UI enumeration.
    pub fn infos(&self) -> Vec<EncodingInfo> {
        self.tables.iter().map(|c| c.table.info()).collect()
    }

    pub(crate) fn compiled(&self, encoding_id: &str) -> Result<&CompiledTable> {
        self.index
            .get(encoding_id)
            .map(|&i| &self.tables[i])
            .ok_or_else(|| LipiError::unknown(encoding_id))
    }

    /// Compiled tables in registration order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &CompiledTable> {
        self.tables.iter()
    }
}

/// Collects tables at startup, then freezes them into a [`Registry`].
///
/// # Example
/// ```rust
/// use lipi_convert::{MappingTable, OnConflict, Registry};
///
/// let mut table = MappingTable::new("toy");
/// table.char_map.insert("d".into(), "क".into());
///
/// let registry = Registry::builder()
///     .register(table, OnConflict::Reject)
///     .unwrap()
///     .build();
/// assert_eq!(registry.list(), vec!["toy"]);
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    tables: Vec<CompiledTable>,
    index: HashMap<String, usize>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder pre-loaded with every built-in table.
    pub fn with_builtin() -> Result<Self> {
        let mut builder = Self::new();
        for table in crate::tables::builtin_tables() {
            builder = builder.register_from(table, OnConflict::Reject, "<builtin>")?;
        }
        Ok(builder)
    }

    /// Register a table built in code.
    pub fn register(self, table: MappingTable, on_conflict: OnConflict) -> Result<Self> {
        self.register_from(table, on_conflict, "<memory>")
    }

    /// Register the table stored in one external JSON or YAML file.
    pub fn load_file(self, path: impl AsRef<Path>, on_conflict: OnConflict) -> Result<Self> {
        let path = path.as_ref();
        let source = path.display().to_string();
        let builder = loader::read_table(path)
            .and_then(|table| self.register_from(table, on_conflict, &source))
            .inspect_err(|e| warn!("Rejected mapping file {}: {}", source, e))?;
        info!("Loaded mapping table from {}", source);
        Ok(builder)
    }

    /// Register every `*.json`, `*.yaml` and `*.yml` table in `dir`, in file-name order.
    pub fn load_dir(self, dir: impl AsRef<Path>, on_conflict: OnConflict) -> Result<Self> {
        let files = loader::table_files(dir.as_ref())?;
        debug!("Found {} mapping files in {}", files.len(), dir.as_ref().display());
        files
            .iter()
            .try_fold(self, |builder, path| builder.load_file(path, on_conflict))
    }

    fn register_from(
        mut self,
        table: MappingTable,
        on_conflict: OnConflict,
        source: &str,
    ) -> Result<Self> {
        let compiled = CompiledTable::compile(table, source)?;
        let id = compiled.id().to_string();
        let existing = self.index.get(&id).copied();
        match (existing, on_conflict) {
            (Some(_), OnConflict::Reject) => {
                return Err(LipiError::DuplicateEncoding { encoding_id: id });
            }
            (Some(slot), OnConflict::Replace) => {
                warn!("Replacing mapping table '{}' with one from {}", id, source);
                self.tables[slot] = compiled;
            }
            (None, _) => {
                debug!(
                    "Registered '{}' ({} chars, {} ligatures, {} half forms)",
                    id,
                    compiled.table.char_map.len(),
                    compiled.table.ligature_map.len(),
                    compiled.table.half_form_map.len()
                );
                self.index.insert(id, self.tables.len());
                self.tables.push(compiled);
            }
        }
        Ok(self)
    }

    /// Freeze the registered tables.
    pub fn build(self) -> Registry {
        info!("Mapping registry ready with {} tables", self.tables.len());
        Registry {
            tables: self.tables,
            index: self.index,
        }
    }
}
