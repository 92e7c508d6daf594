//! Per-file front-matter validation rules.
//!
//! Pure functions from a parsed file to findings. Callers decide how to
//! aggregate and present them.

use crate::content::file::{ContentFile, FrontMatterStatus};
use crate::content::schema::FrontMatter;
use crate::validate::report::{Issue, IssueKind};

/// Validate one content file. Returns every finding, never just the first.
pub fn validate_content_file(file: &ContentFile) -> Vec<Issue> {
    let mut issues = Vec::new();

    match &file.front_matter {
        FrontMatterStatus::Missing => {
            issues.push(Issue::error(IssueKind::MissingFrontMatter));
        }
        FrontMatterStatus::Unclosed => {
            issues.push(Issue::error(IssueKind::UnclosedFrontMatter));
        }
        FrontMatterStatus::Invalid(message) => {
            issues.push(Issue::error(IssueKind::InvalidFrontMatter {
                message: message.clone(),
            }));
        }
        FrontMatterStatus::Parsed(front_matter) => {
            validate_header(front_matter, &mut issues);
        }
    }

    issues
}

fn validate_header(front_matter: &FrontMatter, issues: &mut Vec<Issue>) {
    check_description(front_matter.description(), issues);

    match front_matter {
        FrontMatter::Prompt(header) => {
            if let Some(agent) = &header.agent {
                if agent.trim().is_empty() {
                    issues.push(Issue::warning(IssueKind::EmptyField {
                        field: "agent".to_string(),
                    }));
                }
            }
        }
        FrontMatter::Instruction(header) => match &header.apply_to {
            None => issues.push(Issue::error(IssueKind::MissingRequiredField {
                field: "applyTo".to_string(),
            })),
            Some(pattern) => check_glob("applyTo", pattern, issues),
        },
        FrontMatter::Agent(header) => {
            if let Some(tools) = &header.tools {
                if tools.iter().any(|t| t.trim().is_empty()) {
                    issues.push(Issue::warning(IssueKind::EmptyField {
                        field: "tools".to_string(),
                    }));
                }
            }
        }
    }
}

fn check_description(description: Option<&str>, issues: &mut Vec<Issue>) {
    match description {
        None => issues.push(Issue::error(IssueKind::MissingRequiredField {
            field: "description".to_string(),
        })),
        Some(text) if text.trim().is_empty() => {
            issues.push(Issue::error(IssueKind::EmptyField {
                field: "description".to_string(),
            }));
        }
        Some(_) => {}
    }
}

fn check_glob(field: &str, pattern: &str, issues: &mut Vec<Issue>) {
    if pattern.trim().is_empty() {
        issues.push(Issue::error(IssueKind::EmptyField {
            field: field.to_string(),
        }));
        return;
    }

    if let Err(e) = glob::Pattern::new(pattern) {
        issues.push(Issue::error(IssueKind::InvalidGlob {
            field: field.to_string(),
            pattern: pattern.to_string(),
            message: e.to_string(),
        }));
    }
}
