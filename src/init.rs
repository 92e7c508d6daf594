//! Library initialization (`curator init`).
//!
//! Creates the standard skeleton (prompts/, instructions/, agents/,
//! collections/) with one starter file per kind and a starter collection
//! referencing them. Starter content goes through the scaffolder, so an
//! initialized library always validates clean.

use crate::collection::{CollectionManifest, DisplayOptions, ItemRef};
use crate::error::CuratorError;
use crate::library::scanner::ScanConfig;
use crate::scaffold::{self, ScaffoldRequest};
use crate::types::ContentKind;
use crate::validate::{validate_library, ValidationReport};
use std::path::Path;

/// Directories every library carries.
pub const LIBRARY_DIRS: [&str; 4] = ["prompts", "instructions", "agents", "collections"];

const STARTER_MANIFEST_PATH: &str = "collections/starter-kit.collection.yml";

/// What `init --list` would create.
#[derive(Debug, Clone)]
pub struct InitPreview {
    pub directories: Vec<String>,
    pub files: Vec<String>,
}

impl InitPreview {
    pub fn is_empty(&self) -> bool {
        self.directories.is_empty() && self.files.is_empty()
    }
}

/// Per-category outcome of an init run.
#[derive(Debug, Clone, Default)]
pub struct SectionOutcome {
    pub created: Vec<String>,
    pub skipped: Vec<String>,
    pub errors: Vec<String>,
}

/// Full outcome of an init run, including the post-init validation report.
#[derive(Debug, Clone)]
pub struct InitSummary {
    pub directories: SectionOutcome,
    pub files: SectionOutcome,
    pub report: ValidationReport,
}

fn starter_requests() -> Vec<ScaffoldRequest> {
    vec![
        ScaffoldRequest {
            kind: ContentKind::Prompt,
            name: "explain-code".to_string(),
            description: "Explain what the selected code does and why".to_string(),
            agent: Some("ask".to_string()),
            apply_to: None,
            tools: Vec::new(),
        },
        ScaffoldRequest {
            kind: ContentKind::Instruction,
            name: "python-style".to_string(),
            description: "Python style conventions for generated code".to_string(),
            agent: None,
            apply_to: Some("**/*.py".to_string()),
            tools: Vec::new(),
        },
        ScaffoldRequest {
            kind: ContentKind::Agent,
            name: "data-engineer".to_string(),
            description: "Designs and reviews data pipelines".to_string(),
            agent: None,
            apply_to: None,
            tools: vec!["search".to_string(), "codebase".to_string()],
        },
    ]
}

fn starter_manifest() -> CollectionManifest {
    CollectionManifest {
        id: "starter-kit".to_string(),
        name: "Starter Kit".to_string(),
        description: "A minimal set of content files to copy from".to_string(),
        tags: vec!["starter".to_string()],
        items: starter_requests()
            .iter()
            .map(|request| ItemRef {
                path: scaffold::relative_path(request.kind, &request.name),
                kind: request.kind,
            })
            .collect(),
        display: DisplayOptions::default(),
    }
}

/// List what initialization would create under `root`, without touching disk.
pub fn list_initialization(root: &Path) -> Result<InitPreview, CuratorError> {
    let directories = LIBRARY_DIRS
        .iter()
        .filter(|dir| !root.join(dir).is_dir())
        .map(|dir| dir.to_string())
        .collect();

    let mut files: Vec<String> = starter_requests()
        .iter()
        .map(|request| scaffold::relative_path(request.kind, &request.name))
        .filter(|rel| !root.join(rel).exists())
        .collect();
    if !root.join(STARTER_MANIFEST_PATH).exists() {
        files.push(STARTER_MANIFEST_PATH.to_string());
    }

    Ok(InitPreview { directories, files })
}

/// Create the skeleton and starter files, then validate the whole library.
///
/// Existing files are skipped unless `force` is set. Per-file failures are
/// recorded and initialization continues; only an unreadable root aborts.
pub fn initialize_library(root: &Path, force: bool) -> Result<InitSummary, CuratorError> {
    let mut directories = SectionOutcome::default();
    for dir in LIBRARY_DIRS {
        let path = root.join(dir);
        if path.is_dir() {
            directories.skipped.push(dir.to_string());
            continue;
        }
        match std::fs::create_dir_all(&path) {
            Ok(()) => directories.created.push(dir.to_string()),
            Err(e) => directories.errors.push(format!("{dir}: {e}")),
        }
    }

    let mut files = SectionOutcome::default();
    for request in starter_requests() {
        let rel = scaffold::relative_path(request.kind, &request.name);
        if root.join(&rel).exists() && !force {
            files.skipped.push(rel);
            continue;
        }
        match scaffold::create(root, &request, force) {
            Ok(result) => files.created.push(result.path),
            Err(e) => files.errors.push(format!("{rel}: {e}")),
        }
    }
    write_starter_manifest(root, force, &mut files);

    let report = validate_library(root, ScanConfig::default())?;
    tracing::info!(
        created = files.created.len(),
        skipped = files.skipped.len(),
        valid = report.valid,
        "library initialized"
    );
    Ok(InitSummary {
        directories,
        files,
        report,
    })
}

fn write_starter_manifest(root: &Path, force: bool, files: &mut SectionOutcome) {
    let path = root.join(STARTER_MANIFEST_PATH);
    if path.exists() && !force {
        files.skipped.push(STARTER_MANIFEST_PATH.to_string());
        return;
    }
    let rendered = match serde_yaml::to_string(&starter_manifest()) {
        Ok(yaml) => yaml,
        Err(e) => {
            files.errors.push(format!("{STARTER_MANIFEST_PATH}: {e}"));
            return;
        }
    };
    let write_result = path
        .parent()
        .map(std::fs::create_dir_all)
        .unwrap_or(Ok(()))
        .and_then(|_| std::fs::write(&path, rendered));
    match write_result {
        Ok(()) => files.created.push(STARTER_MANIFEST_PATH.to_string()),
        Err(e) => files.errors.push(format!("{STARTER_MANIFEST_PATH}: {e}")),
    }
}
