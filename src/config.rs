//! Archive configuration.
//!
//! Handles loading, validating, and merging `archive.toml`. The file is
//! optional and sparse: it sits in the site root and overrides only the
//! stock defaults it names.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! output = "data/archiveData.json"  # Relative to the site root
//! format = "json"                   # "json" or "script"
//! global_name = "ARCHIVE_DATA"      # Only used by format = "script"
//!
//! [scan]
//! exclude_dirs = ["node_modules", ".git", "scripts", "data"]
//! index_file = "index.html"
//! extension = "html"
//!
//! [titles]
//! untitled = "제목 없음"
//! strip_prefixes = ["비주얼 매거진:"]
//! ```
//!
//! Arrays replace their default wholesale: setting `exclude_dirs` to
//! `["drafts"]` stops excluding `node_modules` too.
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file looked up in the site root.
pub const CONFIG_FILE: &str = "archive.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// How the record list is written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// A bare JSON array, fetched by the viewer page.
    #[default]
    Json,
    /// `window.<global_name> = [...];`, loaded with a `<script>` tag.
    Script,
}

/// Archive configuration loaded from `archive.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArchiveConfig {
    /// Output path, relative to the site root.
    pub output: String,
    /// Serialization of the output file.
    pub format: OutputFormat,
    /// Global the `script` format assigns to.
    pub global_name: String,
    /// Which files the tree walker picks up.
    pub scan: ScanConfig,
    /// Title cleanup rules.
    pub titles: TitlesConfig,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            output: "data/archiveData.json".to_string(),
            format: OutputFormat::Json,
            global_name: "ARCHIVE_DATA".to_string(),
            scan: ScanConfig::default(),
            titles: TitlesConfig::default(),
        }
    }
}

impl ArchiveConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.trim().is_empty() {
            return Err(ConfigError::Validation("output must not be empty".into()));
        }
        if !is_js_identifier(&self.global_name) {
            return Err(ConfigError::Validation(format!(
                "global_name must be a JavaScript identifier, got {:?}",
                self.global_name
            )));
        }
        if self.scan.extension.is_empty() {
            return Err(ConfigError::Validation(
                "scan.extension must not be empty".into(),
            ));
        }
        if self.scan.index_file.is_empty() {
            return Err(ConfigError::Validation(
                "scan.index_file must not be empty".into(),
            ));
        }
        // An empty substring matches every directory.
        if self.scan.exclude_dirs.iter().any(|d| d.is_empty()) {
            return Err(ConfigError::Validation(
                "scan.exclude_dirs entries must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Tree walker settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// A directory is skipped, with everything under it, when its path
    /// relative to the root contains any of these substrings.
    pub exclude_dirs: Vec<String>,
    /// Exact file name that is never archived (the viewer page itself).
    pub index_file: String,
    /// Page extension, without the dot. Matched case-insensitively.
    pub extension: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            exclude_dirs: ["node_modules", ".git", "scripts", "data"]
                .into_iter()
                .map(String::from)
                .collect(),
            index_file: "index.html".to_string(),
            extension: "html".to_string(),
        }
    }
}

/// Title cleanup settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TitlesConfig {
    /// Title used when a page has no `<title>` element.
    pub untitled: String,
    /// Leading labels removed from titles, with any whitespace after them.
    pub strip_prefixes: Vec<String>,
}

impl Default for TitlesConfig {
    fn default() -> Self {
        Self {
            untitled: "제목 없음".to_string(),
            strip_prefixes: vec!["비주얼 매거진:".to_string()],
        }
    }
}

fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(ArchiveConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay, arrays included, replace base values.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `archive.toml` from the site root as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist, `Err` if it exists but
/// is not valid TOML.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<ArchiveConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: ArchiveConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config for the site rooted at `root`.
///
/// Uses stock defaults when there is no `archive.toml`.
pub fn load_config(root: &Path) -> Result<ArchiveConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `archive.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Archive Index Configuration
# ===========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Place this file in the site root.
# Unknown keys will cause an error.

# Where the archive data is written, relative to the site root.
output = "data/archiveData.json"

# "json"   -> a plain JSON array, fetched by the archive page.
# "script" -> window.<global_name> = [...]; for pages that load the data
#             with a <script> tag. Point `output` at a .js file.
format = "json"

# Global variable assigned by the "script" format.
global_name = "ARCHIVE_DATA"

# ---------------------------------------------------------------------------
# Page discovery
# ---------------------------------------------------------------------------
[scan]
# Directories whose path (relative to the site root) contains any of these
# strings are skipped entirely. Note these are substrings: "data" also
# skips "metadata/".
exclude_dirs = ["node_modules", ".git", "scripts", "data"]

# The archive viewer page itself; never listed.
index_file = "index.html"

# Extension of archived pages (case-insensitive, no dot).
extension = "html"

# ---------------------------------------------------------------------------
# Titles
# ---------------------------------------------------------------------------
[titles]
# Shown for pages without a <title>.
untitled = "제목 없음"

# Leading labels removed from page titles.
strip_prefixes = ["비주얼 매거진:"]
"##
}
