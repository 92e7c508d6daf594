use std::fs;

use curator::tooling::cli::{CliContext, CollectionCommands, Commands};
use tempfile::TempDir;

use crate::support::{seed_broken_library, seed_valid_library, with_xdg_env};

#[test]
fn scan_json_contract_has_required_fields() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let root = temp_dir.path().join("library");
        seed_valid_library(&root);

        let cli = CliContext::new(root, None).unwrap();
        let output = cli
            .execute(&Commands::Scan {
                format: "json".to_string(),
            })
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(parsed.get("root").and_then(|v| v.as_str()).is_some());
        assert_eq!(parsed.get("prompts").and_then(|v| v.as_u64()), Some(1));
        assert_eq!(parsed.get("instructions").and_then(|v| v.as_u64()), Some(1));
        assert_eq!(parsed.get("agents").and_then(|v| v.as_u64()), Some(1));
        assert_eq!(parsed.get("collections").and_then(|v| v.as_u64()), Some(1));
    });
}

#[test]
fn validate_json_contract_has_required_fields() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let root = temp_dir.path().join("library");
        seed_valid_library(&root);

        let cli = CliContext::new(root, None).unwrap();
        let output = cli
            .execute(&Commands::Validate {
                format: "json".to_string(),
                strict: false,
            })
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(parsed.get("root").and_then(|v| v.as_str()).is_some());
        assert_eq!(parsed.get("content_files").and_then(|v| v.as_u64()), Some(3));
        assert_eq!(parsed.get("collections").and_then(|v| v.as_u64()), Some(1));
        let files = parsed
            .get("files")
            .and_then(|v| v.as_array())
            .expect("files array should exist");
        assert!(files.is_empty());
        assert_eq!(parsed.get("error_count").and_then(|v| v.as_u64()), Some(0));
        assert_eq!(parsed.get("warning_count").and_then(|v| v.as_u64()), Some(0));
        assert_eq!(parsed.get("valid").and_then(|v| v.as_bool()), Some(true));
    });
}

#[test]
fn validate_json_findings_carry_code_and_severity() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let root = temp_dir.path().join("library");
        seed_broken_library(&root);

        let cli = CliContext::new(root, None).unwrap();
        let output = cli
            .execute(&Commands::Validate {
                format: "json".to_string(),
                strict: false,
            })
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let files = parsed
            .get("files")
            .and_then(|v| v.as_array())
            .expect("files array should exist");

        let prompt = files
            .iter()
            .find(|f| f["path"] == "prompts/no-description.prompt.md")
            .expect("prompt with findings should appear");
        assert_eq!(prompt["kind"], "prompt");

        let issue = &prompt["issues"][0];
        assert_eq!(issue["code"], "missing-required-field");
        assert_eq!(issue["severity"], "error");
        assert_eq!(issue["field"], "description");
        assert!(issue.get("message").and_then(|v| v.as_str()).is_some());
    });
}

#[test]
fn status_json_contract_has_both_sections() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let root = temp_dir.path().join("library");
        seed_valid_library(&root);

        let cli = CliContext::new(root, None).unwrap();
        let output = cli
            .execute(&Commands::Status {
                format: "json".to_string(),
                content_only: false,
                collections_only: false,
            })
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let content = parsed.get("content").expect("content section should exist");
        assert_eq!(content.get("total").and_then(|v| v.as_u64()), Some(3));
        let by_kind = content
            .get("by_kind")
            .and_then(|v| v.as_array())
            .expect("by_kind array should exist");
        assert_eq!(by_kind.len(), 3);

        let collections = parsed
            .get("collections")
            .expect("collections section should exist");
        assert_eq!(collections.get("total").and_then(|v| v.as_u64()), Some(1));
        assert_eq!(
            collections.get("valid_count").and_then(|v| v.as_u64()),
            Some(1)
        );
    });
}

#[test]
fn status_content_only_omits_collections() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let root = temp_dir.path().join("library");
        seed_valid_library(&root);

        let cli = CliContext::new(root, None).unwrap();
        let output = cli
            .execute(&Commands::Status {
                format: "json".to_string(),
                content_only: true,
                collections_only: false,
            })
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(parsed.get("content").is_some());
        assert!(parsed.get("collections").is_none());
    });
}

#[test]
fn list_json_contract_has_required_fields() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let root = temp_dir.path().join("library");
        seed_valid_library(&root);

        let cli = CliContext::new(root, None).unwrap();
        let output = cli
            .execute(&Commands::List {
                target: "all".to_string(),
                format: "json".to_string(),
                tag: None,
            })
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.get("total").and_then(|v| v.as_u64()), Some(3));
        let entries = parsed
            .get("entries")
            .and_then(|v| v.as_array())
            .expect("entries array should exist");

        let entry = entries
            .iter()
            .find(|e| e["path"] == "prompts/explain-code.prompt.md")
            .expect("prompt should be listed");
        assert_eq!(entry["kind"], "prompt");
        assert_eq!(entry["description"], "Explain the selected code");
    });
}

#[test]
fn show_content_json_contract_has_required_fields() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let root = temp_dir.path().join("library");
        seed_valid_library(&root);

        let cli = CliContext::new(root, None).unwrap();
        let output = cli
            .execute(&Commands::Show {
                path: "instructions/python-style.instructions.md".to_string(),
                format: "json".to_string(),
                include_body: false,
            })
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["path"], "instructions/python-style.instructions.md");
        assert_eq!(parsed["kind"], "instruction");
        assert_eq!(parsed["applyTo"], "**/*.py");
        assert!(parsed.get("body").is_none());
    });
}

#[test]
fn show_routes_collection_selectors() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let root = temp_dir.path().join("library");
        seed_valid_library(&root);

        let cli = CliContext::new(root, None).unwrap();
        let output = cli
            .execute(&Commands::Show {
                path: "core".to_string(),
                format: "json".to_string(),
                include_body: false,
            })
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["id"], "core");
        assert_eq!(parsed["ordering"], "declared");
        let items = parsed
            .get("items")
            .and_then(|v| v.as_array())
            .expect("items array should exist");
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["path"], "prompts/explain-code.prompt.md");
        assert_eq!(items[0]["kind"], "prompt");
    });
}

#[test]
fn collection_list_json_contract_has_required_fields() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let root = temp_dir.path().join("library");
        seed_valid_library(&root);

        let cli = CliContext::new(root, None).unwrap();
        let output = cli
            .execute(&Commands::Collection {
                command: CollectionCommands::List {
                    format: "json".to_string(),
                    tag: None,
                },
            })
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.get("total").and_then(|v| v.as_u64()), Some(1));
        let collections = parsed
            .get("collections")
            .and_then(|v| v.as_array())
            .expect("collections array should exist");

        let entry = &collections[0];
        assert_eq!(entry["id"], "core");
        assert_eq!(entry["name"], "Core Kit");
        assert_eq!(entry["path"], "collections/core.collection.yml");
        assert_eq!(entry["items"].as_u64(), Some(3));
        let tags = entry["tags"].as_array().expect("tags array should exist");
        assert_eq!(tags[0], "starter");
    });
}

#[test]
fn collection_validate_json_is_a_result_array() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let root = temp_dir.path().join("library");
        seed_valid_library(&root);

        let cli = CliContext::new(root, None).unwrap();
        let output = cli
            .execute(&Commands::Collection {
                command: CollectionCommands::Validate {
                    selector: None,
                    all: true,
                    format: "json".to_string(),
                },
            })
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let results = parsed.as_array().expect("output should be an array");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["path"], "collections/core.collection.yml");
        assert_eq!(results[0]["valid"], true);
    });
}

#[test]
fn ci_json_contract_and_report_file() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let root = temp_dir.path().join("library");
        seed_valid_library(&root);
        let report_path = temp_dir.path().join("artifacts/report.json");

        let cli = CliContext::new(root, None).unwrap();
        let output = cli
            .execute(&Commands::Ci {
                report: Some(report_path.clone()),
                strict: false,
            })
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(parsed.get("root").and_then(|v| v.as_str()).is_some());
        assert!(parsed.get("generated_at").and_then(|v| v.as_str()).is_some());
        assert_eq!(parsed.get("passed").and_then(|v| v.as_bool()), Some(true));

        let results = parsed
            .get("results")
            .and_then(|v| v.as_array())
            .expect("results array should exist");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["operation"], "scan");
        assert_eq!(results[1]["operation"], "validate");
        assert_eq!(results[1]["passed"], true);

        let written = fs::read_to_string(&report_path).expect("report file should be written");
        let from_disk: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(from_disk["passed"], true);
    });
}

#[test]
fn validate_text_output_reports_success() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let root = temp_dir.path().join("library");
        seed_valid_library(&root);

        let cli = CliContext::new(root, None).unwrap();
        let output = cli
            .execute(&Commands::Validate {
                format: "text".to_string(),
                strict: false,
            })
            .unwrap();

        assert!(output.contains("Validation passed"));
    });
}

#[test]
fn validate_text_output_lists_findings() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let root = temp_dir.path().join("library");
        seed_broken_library(&root);

        let cli = CliContext::new(root, None).unwrap();
        let output = cli
            .execute(&Commands::Validate {
                format: "text".to_string(),
                strict: false,
            })
            .unwrap();

        assert!(output.contains("prompts/no-description.prompt.md"));
        assert!(output.contains("collections/broken.collection.yml"));
        assert!(output.contains("missing required field 'description'"));
        assert!(output.contains("Summary: 3 errors, 0 warnings in 2 files."));
    });
}
