//! Shared types for library commands and status.

use crate::types::ContentKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Inventory counts after a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub root: String,
    pub prompts: usize,
    pub instructions: usize,
    pub agents: usize,
    pub collections: usize,
}

impl ScanSummary {
    pub fn content_total(&self) -> usize {
        self.prompts + self.instructions + self.agents
    }
}

/// One row of the content section: count per kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KindCount {
    pub kind: String,
    pub files: usize,
}

/// Content section of unified status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentStatus {
    pub root: String,
    pub total: usize,
    pub by_kind: Vec<KindCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// One row of the collections section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionStatusEntry {
    pub id: String,
    pub path: String,
    pub items: usize,
    pub errors: usize,
    pub warnings: usize,
    pub valid: bool,
}

/// Collections section of unified status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionStatusOutput {
    pub collections: Vec<CollectionStatusEntry>,
    pub total: usize,
    pub valid_count: usize,
}

/// Unified status output combining content and collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnifiedStatusOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collections: Option<CollectionStatusOutput>,
}

/// One row for content list output.
#[derive(Debug, Clone, Serialize)]
pub struct ContentListEntry {
    pub path: String,
    pub kind: ContentKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Result of the list command for content files.
#[derive(Debug, Clone, Serialize)]
pub struct ContentListResult {
    pub entries: Vec<ContentListEntry>,
    pub total: usize,
}

/// Result of show on a content file.
#[derive(Debug, Clone, Serialize)]
pub struct ContentShowResult {
    pub path: String,
    pub kind: ContentKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Prompt-only: target chat mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
    /// Instruction-only: scope glob.
    #[serde(rename = "applyTo", skip_serializing_if = "Option::is_none")]
    pub apply_to: Option<String>,
    /// Agent-only: declared capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,
    /// Front-matter fields outside the kind's schema.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, serde_yaml::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}
