//! Content file model: a parsed Markdown file with its inferred kind.

use crate::content::schema::{AgentHeader, FrontMatter, InstructionHeader, PromptHeader};
use crate::error::CuratorError;
use crate::frontmatter::{self, SplitError};
use crate::types::ContentKind;
use std::path::Path;

/// State of a file's front matter after parsing.
///
/// Malformed front matter is a state, not an error: the file still loads so
/// that validation can report it alongside everything else.
#[derive(Debug, Clone)]
pub enum FrontMatterStatus {
    /// Parsed and typed by the file's kind.
    Parsed(FrontMatter),
    /// No leading `---` block.
    Missing,
    /// Opening delimiter never closed.
    Unclosed,
    /// Block present but not a valid YAML mapping, or a schema field has the
    /// wrong type.
    Invalid(String),
}

/// One Markdown content file.
#[derive(Debug, Clone)]
pub struct ContentFile {
    /// Library-relative, `/`-separated path.
    pub path: String,
    /// Kind inferred from the filename suffix.
    pub kind: ContentKind,
    pub front_matter: FrontMatterStatus,
    /// Markdown body. Opaque to validation. When the front-matter block is
    /// missing or malformed this holds the full file text.
    pub body: String,
}

impl ContentFile {
    /// Parse a content file from raw text. `path` is the normalized
    /// library-relative path; `kind` must already be inferred from it.
    pub fn parse(path: String, kind: ContentKind, content: &str) -> Self {
        let (front_matter, body) = match frontmatter::split(content) {
            Ok((yaml, body)) => (Self::parse_typed(kind, yaml), body.to_string()),
            Err(SplitError::Missing) => (FrontMatterStatus::Missing, content.to_string()),
            Err(SplitError::Unclosed) => (FrontMatterStatus::Unclosed, content.to_string()),
        };

        Self {
            path,
            kind,
            front_matter,
            body,
        }
    }

    /// Load and parse a content file from disk.
    pub fn load(root: &Path, rel_path: &str, kind: ContentKind) -> Result<Self, CuratorError> {
        let abs = root.join(rel_path);
        let content =
            std::fs::read_to_string(&abs).map_err(|e| CuratorError::io(abs.clone(), e))?;
        Ok(Self::parse(rel_path.to_string(), kind, &content))
    }

    fn parse_typed(kind: ContentKind, yaml: &str) -> FrontMatterStatus {
        let parsed = match kind {
            ContentKind::Prompt => {
                frontmatter::parse_header::<PromptHeader>(yaml).map(FrontMatter::Prompt)
            }
            ContentKind::Instruction => {
                frontmatter::parse_header::<InstructionHeader>(yaml).map(FrontMatter::Instruction)
            }
            ContentKind::Agent => {
                frontmatter::parse_header::<AgentHeader>(yaml).map(FrontMatter::Agent)
            }
        };

        match parsed {
            Ok(front_matter) => FrontMatterStatus::Parsed(front_matter),
            Err(e) => FrontMatterStatus::Invalid(e.to_string()),
        }
    }

    /// The description field when front matter parsed.
    pub fn description(&self) -> Option<&str> {
        match &self.front_matter {
            FrontMatterStatus::Parsed(fm) => fm.description(),
            _ => None,
        }
    }
}
