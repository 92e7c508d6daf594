//! Core types for the prompt-library validation system.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Filename suffix identifying prompt files.
pub const PROMPT_SUFFIX: &str = ".prompt.md";

/// Filename suffix identifying instruction files.
pub const INSTRUCTIONS_SUFFIX: &str = ".instructions.md";

/// Filename suffix identifying agent files.
pub const AGENT_SUFFIX: &str = ".agent.md";

/// Filename suffix identifying collection manifests.
pub const COLLECTION_SUFFIX: &str = ".collection.yml";

/// Kind of a content file, inferred from its filename suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Prompt,
    Instruction,
    Agent,
}

impl ContentKind {
    /// Infer the kind from a filename. Returns `None` when the name matches
    /// no known content suffix.
    pub fn from_file_name(name: &str) -> Option<Self> {
        if name.ends_with(PROMPT_SUFFIX) {
            Some(Self::Prompt)
        } else if name.ends_with(INSTRUCTIONS_SUFFIX) {
            Some(Self::Instruction)
        } else if name.ends_with(AGENT_SUFFIX) {
            Some(Self::Agent)
        } else {
            None
        }
    }

    /// Parse the lowercase tag used in manifests ("prompt", "instruction",
    /// "agent").
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "prompt" => Some(Self::Prompt),
            "instruction" => Some(Self::Instruction),
            "agent" => Some(Self::Agent),
            _ => None,
        }
    }

    /// The filename suffix for this kind.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Prompt => PROMPT_SUFFIX,
            Self::Instruction => INSTRUCTIONS_SUFFIX,
            Self::Agent => AGENT_SUFFIX,
        }
    }

    /// Lowercase tag used in manifests and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prompt => "prompt",
            Self::Instruction => "instruction",
            Self::Agent => "agent",
        }
    }

    /// All kinds, in display order.
    pub fn all() -> [Self; 3] {
        [Self::Prompt, Self::Instruction, Self::Agent]
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True when the filename denotes a collection manifest.
pub fn is_collection_manifest(name: &str) -> bool {
    name.ends_with(COLLECTION_SUFFIX)
}
