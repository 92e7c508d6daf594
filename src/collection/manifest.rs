//! Collection manifest model (`*.collection.yml`).
//!
//! A manifest is a declarative grouping of existing content files. It owns no
//! content: items are references by library-relative path, each annotated
//! with the kind the author expects the file to be.

use crate::error::CuratorError;
use crate::types::{ContentKind, COLLECTION_SUFFIX};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One item reference inside a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRef {
    /// Library-relative path of the referenced file.
    pub path: String,
    /// Kind the author declares for the file. Checked against the suffix at
    /// resolution time.
    pub kind: ContentKind,
}

/// Presentation order for a collection's items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemOrdering {
    /// Sort alphabetically by path for display.
    Alpha,
    /// Keep the manifest's declared order.
    #[default]
    Declared,
}

impl ItemOrdering {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Declared => "declared",
        }
    }
}

/// Presentation hints. Never a correctness constraint: resolution and
/// validation ignore this section entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    #[serde(default)]
    pub ordering: ItemOrdering,
    #[serde(default)]
    pub show_badge: bool,
}

/// A parsed collection manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionManifest {
    /// Stable identifier. Must match the manifest filename stem.
    pub id: String,
    /// Human-readable title.
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub items: Vec<ItemRef>,
    #[serde(default)]
    pub display: DisplayOptions,
}

impl CollectionManifest {
    /// Parse a manifest from YAML source.
    pub fn parse(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Load a manifest from disk, treating parse failures as operational
    /// errors. Validation paths parse separately so they can report instead.
    pub fn load(path: &Path) -> Result<Self, CuratorError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CuratorError::io(path.to_path_buf(), e))?;
        Self::parse(&content).map_err(|e| {
            CuratorError::InvalidInput(format!("manifest {} does not parse: {e}", path.display()))
        })
    }

    /// The filename a manifest with this id is expected to have.
    pub fn expected_file_name(&self) -> String {
        format!("{}{}", self.id, COLLECTION_SUFFIX)
    }

    /// Whether any item carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// The filename stem of a manifest path, without the collection suffix.
/// Returns `None` when the name does not carry the suffix.
pub fn manifest_stem(file_name: &str) -> Option<&str> {
    file_name.strip_suffix(COLLECTION_SUFFIX)
}

/// Check an id against the identifier format: 1 to 64 characters, lowercase
/// alphanumeric and hyphens, no leading, trailing, or consecutive hyphens.
pub fn validate_collection_id(id: &str) -> Result<(), String> {
    if id.is_empty() {
        return Err("id is empty".to_string());
    }
    if id.len() > 64 {
        return Err(format!("id exceeds 64 characters ({} chars)", id.len()));
    }
    for c in id.chars() {
        if !c.is_ascii_lowercase() && !c.is_ascii_digit() && c != '-' {
            return Err(format!(
                "invalid character '{c}' (must be lowercase alphanumeric or hyphen)"
            ));
        }
    }
    if id.starts_with('-') || id.ends_with('-') {
        return Err("id cannot start or end with a hyphen".to_string());
    }
    if id.contains("--") {
        return Err("id cannot contain consecutive hyphens".to_string());
    }
    Ok(())
}
