//! Content File Model
//!
//! Defines the three content kinds, their typed front-matter schemas, and the
//! per-file validation rules. Parsing is total: malformed files become states
//! that validation reports, never early exits.

pub mod file;
pub mod schema;
mod validation;

pub use file::{ContentFile, FrontMatterStatus};
pub use schema::{AgentHeader, FrontMatter, InstructionHeader, PromptHeader};
pub use validation::validate_content_file;
