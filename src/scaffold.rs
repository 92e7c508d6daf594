//! Scaffolding for new content files (`curator new`).
//!
//! Produces files that pass validation as written: correct suffix for the
//! kind, front matter carrying the required fields, and a starter body the
//! author replaces. Interactive prompting lives in the CLI layer; this module
//! is the non-interactive core.

use crate::error::CuratorError;
use crate::types::ContentKind;
use serde::Serialize;
use serde_yaml::{Mapping, Value};
use std::path::Path;

/// Everything needed to scaffold one content file.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub kind: ContentKind,
    /// File stem, e.g. `explain-code` for `prompts/explain-code.prompt.md`.
    pub name: String,
    pub description: String,
    /// Target agent hint, prompt kind only.
    pub agent: Option<String>,
    /// Glob the instruction applies to, instruction kind only.
    pub apply_to: Option<String>,
    /// Tool names, agent kind only.
    pub tools: Vec<String>,
}

/// Outcome of a scaffold operation.
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldResult {
    pub path: String,
    pub kind: ContentKind,
    pub overwritten: bool,
}

/// Directory a kind's files conventionally live in.
pub fn kind_dir(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Prompt => "prompts",
        ContentKind::Instruction => "instructions",
        ContentKind::Agent => "agents",
    }
}

/// Library-relative path a scaffolded file lands at.
pub fn relative_path(kind: ContentKind, name: &str) -> String {
    format!("{}/{}{}", kind_dir(kind), name, kind.suffix())
}

/// Check a file stem against the identifier format: 1 to 64 characters,
/// lowercase alphanumeric and hyphens, no leading, trailing, or consecutive
/// hyphens. Same shape as collection ids so names stay referenceable.
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("name is empty".to_string());
    }
    if name.len() > 64 {
        return Err(format!("name exceeds 64 characters ({} chars)", name.len()));
    }
    for c in name.chars() {
        if !c.is_ascii_lowercase() && !c.is_ascii_digit() && c != '-' {
            return Err(format!(
                "invalid character '{c}' (must be lowercase alphanumeric or hyphen)"
            ));
        }
    }
    if name.starts_with('-') || name.ends_with('-') {
        return Err("name cannot start or end with a hyphen".to_string());
    }
    if name.contains("--") {
        return Err("name cannot contain consecutive hyphens".to_string());
    }
    Ok(())
}

/// Scaffold a content file under `root`.
///
/// Refuses to clobber an existing file unless `force` is set. The created
/// file is checked against the same per-file validation the `validate`
/// command runs, so a scaffold that succeeds never introduces findings.
pub fn create(
    root: &Path,
    request: &ScaffoldRequest,
    force: bool,
) -> Result<ScaffoldResult, CuratorError> {
    validate_name(&request.name)
        .map_err(|reason| CuratorError::InvalidInput(format!("Invalid name: {reason}")))?;
    check_required_fields(request)?;

    let rel = relative_path(request.kind, &request.name);
    let absolute = root.join(&rel);
    let existed = absolute.exists();
    if existed && !force {
        return Err(CuratorError::InvalidInput(format!(
            "{rel} already exists. Use --force to overwrite"
        )));
    }

    let rendered = render(request)?;
    if let Some(parent) = absolute.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| CuratorError::io(parent.to_path_buf(), e))?;
    }
    std::fs::write(&absolute, rendered).map_err(|e| CuratorError::io(absolute.clone(), e))?;

    tracing::info!(path = %rel, kind = %request.kind, overwritten = existed, "scaffolded content file");
    Ok(ScaffoldResult {
        path: rel,
        kind: request.kind,
        overwritten: existed,
    })
}

fn check_required_fields(request: &ScaffoldRequest) -> Result<(), CuratorError> {
    if request.description.trim().is_empty() {
        return Err(CuratorError::InvalidInput(
            "Description must not be empty".to_string(),
        ));
    }
    if request.kind == ContentKind::Instruction {
        let pattern = request.apply_to.as_deref().unwrap_or("");
        if pattern.trim().is_empty() {
            return Err(CuratorError::InvalidInput(
                "Instructions require an applyTo glob pattern".to_string(),
            ));
        }
        glob::Pattern::new(pattern).map_err(|e| {
            CuratorError::InvalidInput(format!("Invalid applyTo pattern '{pattern}': {e}"))
        })?;
    }
    Ok(())
}

/// Render the full file: front matter block plus starter body.
fn render(request: &ScaffoldRequest) -> Result<String, CuratorError> {
    let mut mapping = Mapping::new();
    mapping.insert(
        Value::from("description"),
        Value::from(request.description.clone()),
    );
    match request.kind {
        ContentKind::Prompt => {
            if let Some(agent) = request.agent.as_deref().filter(|a| !a.trim().is_empty()) {
                mapping.insert(Value::from("agent"), Value::from(agent));
            }
        }
        ContentKind::Instruction => {
            if let Some(pattern) = request.apply_to.as_deref() {
                mapping.insert(Value::from("applyTo"), Value::from(pattern));
            }
        }
        ContentKind::Agent => {
            if !request.tools.is_empty() {
                mapping.insert(Value::from("tools"), Value::from(request.tools.clone()));
            }
        }
    }
    let yaml = serde_yaml::to_string(&Value::Mapping(mapping))
        .map_err(|e| CuratorError::SerializationError(e.to_string()))?;
    Ok(format!(
        "---\n{yaml}---\n\n# {}\n\n{}\n",
        title_from_name(&request.name),
        starter_body(request.kind)
    ))
}

fn starter_body(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Prompt => "Describe the task the assistant should perform.",
        ContentKind::Instruction => "State the conventions these files must follow.",
        ContentKind::Agent => "Describe this agent's persona and operating constraints.",
    }
}

/// `explain-code` becomes `Explain Code`.
fn title_from_name(name: &str) -> String {
    name.split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
