//! Curator: Prompt Library Validation and Curation
//!
//! Validates directory trees of AI prompt content: Markdown files with YAML
//! front matter (prompts, instructions, agents) and the collection manifests
//! that group them. Findings are reported, never fatal; the same tree always
//! produces the same report.

pub mod collection;
pub mod config;
pub mod content;
pub mod error;
pub mod frontmatter;
pub mod init;
pub mod library;
pub mod logging;
pub mod scaffold;
pub mod tooling;
pub mod types;
pub mod validate;
