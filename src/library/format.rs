//! Format status, list, and collection output as text.

use crate::collection::commands::{CollectionListResult, CollectionShowResult};
use crate::library::types::{
    CollectionStatusOutput, ContentListResult, ContentShowResult, ContentStatus,
    UnifiedStatusOutput,
};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline. Respects NO_COLOR and TTY.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Format the content section of status as human-readable text.
pub fn format_content_status_text(data: &ContentStatus) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Content")));
    out.push_str(&format!("  Library root: {}\n", data.root));
    out.push_str(&format!("  Total files: {}\n\n", data.total));

    if let Some(ref msg) = data.message {
        out.push_str(msg);
        out.push('\n');
        return out;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Kind", "Files"]);
    for row in &data.by_kind {
        table.add_row(vec![row.kind.clone(), row.files.to_string()]);
    }
    out.push_str(&format!("{}\n", table));
    out
}

/// Format the collections section of status as human-readable text.
pub fn format_collection_status_text(data: &CollectionStatusOutput) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Collections")));
    if data.collections.is_empty() {
        out.push_str("No collections defined.\n");
        return out;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Id", "Items", "Errors", "Warnings", "Valid"]);
    for row in &data.collections {
        table.add_row(vec![
            row.id.clone(),
            row.items.to_string(),
            row.errors.to_string(),
            row.warnings.to_string(),
            if row.valid { "yes" } else { "no" }.to_string(),
        ]);
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format!(
        "Total: {} collections, {} valid.\n",
        data.total, data.valid_count
    ));
    out
}

/// Format unified status as human-readable text.
pub fn format_unified_status_text(data: &UnifiedStatusOutput) -> String {
    let mut out = String::new();

    if let Some(ref content) = data.content {
        out.push_str(&format_content_status_text(content));
        out.push('\n');
    }

    if let Some(ref collections) = data.collections {
        out.push_str(&format_collection_status_text(collections));
    }

    out
}

/// Format a content list as human-readable text.
pub fn format_content_list_text(data: &ContentListResult) -> String {
    let mut out = String::new();
    if data.entries.is_empty() {
        out.push_str("No content files found.\n");
        return out;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Path", "Kind", "Description"]);
    for row in &data.entries {
        table.add_row(vec![
            row.path.clone(),
            row.kind.to_string(),
            row.description.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format!("Total: {} files.\n", data.total));
    out
}

/// Format a collection list as human-readable text.
pub fn format_collection_list_text(data: &CollectionListResult) -> String {
    let mut out = String::new();
    if data.collections.is_empty() {
        out.push_str("No collections found.\n");
        return out;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Id", "Name", "Items", "Tags"]);
    for row in &data.collections {
        table.add_row(vec![
            row.id.clone(),
            row.name.clone(),
            row.items.to_string(),
            row.tags.join(", "),
        ]);
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format!("Total: {} collections.\n", data.total));
    out
}

/// Format a single content file as human-readable text.
pub fn format_content_show_text(data: &ContentShowResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading(&data.path)));
    out.push_str(&format!("  Kind: {}\n", data.kind));
    out.push_str(&format!(
        "  Description: {}\n",
        data.description.as_deref().unwrap_or("-")
    ));
    if let Some(ref agent) = data.agent {
        out.push_str(&format!("  Agent: {}\n", agent));
    }
    if let Some(ref apply_to) = data.apply_to {
        out.push_str(&format!("  Applies to: {}\n", apply_to));
    }
    if let Some(ref tools) = data.tools {
        out.push_str(&format!("  Tools: {}\n", tools.join(", ")));
    }
    for (key, value) in &data.extra {
        let rendered = serde_yaml::to_string(value)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| "?".to_string());
        out.push_str(&format!("  {}: {}\n", key, rendered));
    }
    if let Some(ref body) = data.body {
        out.push_str(&format!("\n{}\n", body));
    }
    out
}

/// Format a resolved collection as human-readable text.
pub fn format_collection_show_text(data: &CollectionShowResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading(&data.name)));
    out.push_str(&format!("  Id: {}\n", data.id));
    out.push_str(&format!("  Path: {}\n", data.path));
    if !data.description.is_empty() {
        out.push_str(&format!("  Description: {}\n", data.description));
    }
    if !data.tags.is_empty() {
        out.push_str(&format!("  Tags: {}\n", data.tags.join(", ")));
    }
    out.push_str(&format!("  Ordering: {}\n", data.ordering));

    out.push('\n');
    if data.items.is_empty() {
        out.push_str("No resolved items.\n");
    } else {
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Path", "Kind", "Description"]);
        for item in &data.items {
            table.add_row(vec![
                item.path.clone(),
                item.kind.to_string(),
                item.description.clone().unwrap_or_else(|| "-".to_string()),
            ]);
        }
        out.push_str(&format!("{}\n", table));
    }

    if !data.issues.is_empty() {
        out.push('\n');
        out.push_str(&format!("{}\n", format_section_heading("Issues")));
        for issue in &data.issues {
            out.push_str(&format!("  - {}\n", issue.message));
        }
    }

    out
}
