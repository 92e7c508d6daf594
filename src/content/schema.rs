//! Typed front-matter headers, one per content kind.
//!
//! Every field is optional at the serde level so that presence checks happen
//! during validation and produce per-field findings instead of parse errors.
//! Fields outside the schema are preserved, never rejected.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Front matter of a `.prompt.md` file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptHeader {
    /// One-line summary shown in pickers. Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Chat mode the prompt targets, e.g. "ask" or "edit".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// Front matter of an `.instructions.md` file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstructionHeader {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Glob selecting the files the guidance applies to, e.g. `**/*.py`.
    /// Required.
    #[serde(rename = "applyTo", skip_serializing_if = "Option::is_none")]
    pub apply_to: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// Front matter of an `.agent.md` file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentHeader {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Capability names the persona may use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// Parsed front matter, typed by the file's kind.
#[derive(Debug, Clone)]
pub enum FrontMatter {
    Prompt(PromptHeader),
    Instruction(InstructionHeader),
    Agent(AgentHeader),
}

impl FrontMatter {
    /// The description field, common to every kind.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Prompt(h) => h.description.as_deref(),
            Self::Instruction(h) => h.description.as_deref(),
            Self::Agent(h) => h.description.as_deref(),
        }
    }

    /// Fields outside the kind's schema, preserved as parsed.
    pub fn extra(&self) -> &BTreeMap<String, serde_yaml::Value> {
        match self {
            Self::Prompt(h) => &h.extra,
            Self::Instruction(h) => &h.extra,
            Self::Agent(h) => &h.extra,
        }
    }
}
