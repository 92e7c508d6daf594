//! Library command service: single entry point per library CLI command
//! variant.
//!
//! Owns scan, status, list, and show workflows; CLI parses, calls one method
//! per variant, and formats output.

use crate::collection::manifest::manifest_stem;
use crate::content::{ContentFile, FrontMatter, FrontMatterStatus};
use crate::error::CuratorError;
use crate::library::index::LibraryIndex;
use crate::library::paths::{canonicalize_root, file_name, normalize_rel};
use crate::library::scanner::{ScanConfig, Scanner};
use crate::library::types::{
    CollectionStatusEntry, CollectionStatusOutput, ContentListEntry, ContentListResult,
    ContentShowResult, ContentStatus, KindCount, ScanSummary, UnifiedStatusOutput,
};
use crate::types::ContentKind;
use crate::validate;
use crate::validate::report::Severity;
use std::path::{Path, PathBuf};

pub struct LibraryCommandService;

/// Which content kinds a list command covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTarget {
    Prompts,
    Instructions,
    Agents,
    Collections,
    All,
}

impl ListTarget {
    /// Parse the CLI selector.
    pub fn parse(target: &str) -> Result<Self, CuratorError> {
        match target {
            "prompts" => Ok(Self::Prompts),
            "instructions" => Ok(Self::Instructions),
            "agents" => Ok(Self::Agents),
            "collections" => Ok(Self::Collections),
            "all" => Ok(Self::All),
            _ => Err(CuratorError::InvalidInput(format!(
                "Invalid list target: {target}. Must be prompts, instructions, agents, collections, or all"
            ))),
        }
    }

    fn includes(&self, kind: ContentKind) -> bool {
        match self {
            Self::Prompts => kind == ContentKind::Prompt,
            Self::Instructions => kind == ContentKind::Instruction,
            Self::Agents => kind == ContentKind::Agent,
            Self::Collections => false,
            Self::All => true,
        }
    }
}

impl LibraryCommandService {
    /// Scan the library and return inventory counts.
    pub fn scan(root: &Path, config: ScanConfig) -> Result<ScanSummary, CuratorError> {
        let canonical = canonicalize_root(root)?;
        let index = Scanner::new(&canonical).with_config(config).scan()?;
        Ok(Self::summarize(&canonical, &index))
    }

    /// Unified status: content inventory plus per-collection validity.
    pub fn status(
        root: &Path,
        config: ScanConfig,
        include_content: bool,
        include_collections: bool,
    ) -> Result<UnifiedStatusOutput, CuratorError> {
        let canonical = canonicalize_root(root)?;
        let index = Scanner::new(&canonical).with_config(config).scan()?;

        let content = include_content.then(|| Self::content_status(&canonical, &index));
        let collections =
            include_collections.then(|| Self::collection_status(&canonical, &index));

        Ok(UnifiedStatusOutput {
            content,
            collections,
        })
    }

    /// List content files of the targeted kinds, with their descriptions.
    /// `ListTarget::Collections` is served by the collection service instead.
    pub fn list(
        root: &Path,
        config: ScanConfig,
        target: ListTarget,
    ) -> Result<ContentListResult, CuratorError> {
        let canonical = canonicalize_root(root)?;
        let index = Scanner::new(&canonical).with_config(config).scan()?;

        let mut entries = Vec::new();
        for (rel, kind) in index.content_paths() {
            if !target.includes(kind) {
                continue;
            }
            let description = ContentFile::load(&canonical, rel, kind)
                .ok()
                .and_then(|f| f.description().map(str::to_string));
            entries.push(ContentListEntry {
                path: rel.to_string(),
                kind,
                description,
            });
        }

        let total = entries.len();
        Ok(ContentListResult { entries, total })
    }

    /// Show one content file by library-relative path.
    pub fn show(
        root: &Path,
        path: &str,
        include_body: bool,
    ) -> Result<ContentShowResult, CuratorError> {
        let canonical = canonicalize_root(root)?;
        let rel = normalize_rel(path);
        let kind = ContentKind::from_file_name(file_name(&rel)).ok_or_else(|| {
            CuratorError::InvalidInput(format!(
                "'{rel}' carries no content suffix (.prompt.md, .instructions.md, .agent.md)"
            ))
        })?;

        if !canonical.join(&rel).is_file() {
            return Err(CuratorError::NotFound(format!("content file '{rel}'")));
        }
        let file = ContentFile::load(&canonical, &rel, kind)?;

        let mut result = ContentShowResult {
            path: rel,
            kind,
            description: None,
            agent: None,
            apply_to: None,
            tools: None,
            extra: Default::default(),
            body: include_body.then(|| file.body.clone()),
        };

        if let FrontMatterStatus::Parsed(front_matter) = &file.front_matter {
            result.description = front_matter.description().map(str::to_string);
            result.extra = front_matter.extra().clone();
            match front_matter {
                FrontMatter::Prompt(h) => result.agent = h.agent.clone(),
                FrontMatter::Instruction(h) => result.apply_to = h.apply_to.clone(),
                FrontMatter::Agent(h) => result.tools = h.tools.clone(),
            }
        }

        Ok(result)
    }

    /// Resolve the library root for display.
    pub fn display_root(root: &Path) -> PathBuf {
        canonicalize_root(root).unwrap_or_else(|_| root.to_path_buf())
    }

    fn summarize(root: &Path, index: &LibraryIndex) -> ScanSummary {
        ScanSummary {
            root: root.display().to_string(),
            prompts: index.count_of(ContentKind::Prompt),
            instructions: index.count_of(ContentKind::Instruction),
            agents: index.count_of(ContentKind::Agent),
            collections: index.manifest_len(),
        }
    }

    fn content_status(root: &Path, index: &LibraryIndex) -> ContentStatus {
        let by_kind = ContentKind::all()
            .iter()
            .map(|kind| KindCount {
                kind: kind.as_str().to_string(),
                files: index.count_of(*kind),
            })
            .collect();

        let message = index
            .is_empty()
            .then(|| "No content found. Run 'curator init' to scaffold a library.".to_string());

        ContentStatus {
            root: root.display().to_string(),
            total: index.content_len(),
            by_kind,
            message,
        }
    }

    fn collection_status(root: &Path, index: &LibraryIndex) -> CollectionStatusOutput {
        let mut collections = Vec::new();

        for rel in index.manifest_paths() {
            let issues = validate::manifest_issues(root, rel, index);
            let errors = issues.iter().filter(|i| i.severity == Severity::Error).count();
            let warnings = issues.len() - errors;

            let (id, items) = match crate::collection::CollectionManifest::load(&root.join(rel)) {
                Ok(manifest) => (manifest.id, manifest.items.len()),
                Err(_) => (
                    manifest_stem(file_name(rel)).unwrap_or(rel).to_string(),
                    0,
                ),
            };

            collections.push(CollectionStatusEntry {
                id,
                path: rel.clone(),
                items,
                errors,
                warnings,
                valid: errors == 0,
            });
        }

        let total = collections.len();
        let valid_count = collections.iter().filter(|c| c.valid).count();
        CollectionStatusOutput {
            collections,
            total,
            valid_count,
        }
    }
}
