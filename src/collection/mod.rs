//! Collection Model
//!
//! Manifests group existing content files by reference. This module owns the
//! manifest schema, the resolver that checks references against the library
//! index, and the manifest-level validation rules.

pub mod commands;
pub mod manifest;
pub mod resolver;
mod validation;

pub use commands::CollectionCommandService;
pub use manifest::{
    manifest_stem, validate_collection_id, CollectionManifest, DisplayOptions, ItemOrdering,
    ItemRef,
};
pub use resolver::{resolve, ResolvedItem, Resolution};
pub use validation::validate_manifest;
