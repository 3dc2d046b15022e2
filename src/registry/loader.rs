//! External mapping table files.
//!
//! One table per file, as a JSON or YAML object with exactly the
//! [`MappingTable`] fields. The extension picks the parser: `.yaml` and
//! `.yml` are YAML, anything else is JSON. Unknown fields are rejected so a
//! misspelt `ligature_mpa` fails at startup instead of silently dropping a map.
//!
//! ```json
//! {
//!   "encoding_id": "kruti-dev-custom",
//!   "display_name": "Kruti Dev (house style)",
//!   "language": "Hindi",
//!   "font_name_variants": ["kruti[-_\\s]*house"],
//!   "char_map": { "d": "क", "k": "ा" },
//!   "ligature_map": { "{k": "क्ष" },
//!   "post_rules": ["pre_base_matra", "matra_compose"]
//! }
//! ```
//!
//! The same table in YAML:
//!
//! ```yaml
//! encoding_id: kruti-dev-custom
//! display_name: Kruti Dev (house style)
//! font_name_variants: ['kruti[-_\s]*house']
//! char_map: { d: क, k: ा }
//! ligature_map: { "{k": क्ष }
//! post_rules: [pre_base_matra, matra_compose]
//! ```
//!
//! Loading only happens while a [`RegistryBuilder`](super::RegistryBuilder)
//! is being assembled; a malformed file fails startup with an error naming
//! the file and the offending field, never a conversion.

use super::MappingTable;
use crate::error::{LipiError, Result};
use std::path::{Path, PathBuf};

/// Read and parse one table file.
pub fn read_table(path: &Path) -> Result<MappingTable> {
    let text = std::fs::read_to_string(path).map_err(|source| LipiError::TableIo {
        path: path.to_path_buf(),
        source,
    })?;
    parse_table(&text, path)
}

/// Parse table text, as YAML for `.yaml`/`.yml` paths and JSON otherwise.
///
/// `path` picks the format and names the file in error messages.
pub fn parse_table(text: &str, path: &Path) -> Result<MappingTable> {
    if is_yaml(path) {
        return serde_yaml::from_str(text).map_err(|source| {
            let (line, column) = source
                .location()
                .map_or((0, 0), |loc| (loc.line(), loc.column()));
            LipiError::TableYaml {
                path: path.to_path_buf(),
                line,
                column,
                source,
            }
        });
    }
    serde_json::from_str(text).map_err(|source| LipiError::TableParse {
        path: path.to_path_buf(),
        line: source.line(),
        column: source.column(),
        source,
    })
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == "yaml" || ext == "yml")
}

fn is_table_file(path: &Path) -> bool {
    is_yaml(path) || path.extension().is_some_and(|ext| ext == "json")
}

/// `*.json`, `*.yaml` and `*.yml` files directly inside `dir`, sorted by file name.
pub fn table_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let io_err = |source: std::io::Error| LipiError::TableIo {
        path: dir.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && is_table_file(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
