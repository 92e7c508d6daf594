//! End-to-end validation semantics: verdict flags, report-all behavior,
//! determinism, and strict-mode promotion through configuration layers.

use curator::tooling::cli::{CliContext, CollectionCommands, Commands};
use tempfile::TempDir;

use crate::support::{
    seed_broken_library, seed_valid_library, seed_warning_library, with_env_var, with_xdg_env,
    write_file,
};

fn validate_json(strict: bool) -> Commands {
    Commands::Validate {
        format: "json".to_string(),
        strict,
    }
}

#[test]
fn kind_mismatch_names_expected_and_actual() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let root = temp_dir.path().join("library");
        seed_broken_library(&root);

        let cli = CliContext::new(root, None).unwrap();
        let output = cli.execute(&validate_json(false)).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        let manifest = parsed["files"]
            .as_array()
            .unwrap()
            .iter()
            .find(|f| f["path"] == "collections/broken.collection.yml")
            .expect("manifest findings should be attributed to the manifest")
            .clone();

        let mismatch = manifest["issues"]
            .as_array()
            .unwrap()
            .iter()
            .find(|i| i["code"] == "kind-mismatch")
            .expect("kind mismatch should be reported");
        assert_eq!(mismatch["path"], "prompts/described.prompt.md");
        assert_eq!(mismatch["expected"], "agent");
        assert_eq!(mismatch["actual"], "prompt");
        assert_eq!(mismatch["severity"], "error");
    });
}

#[test]
fn dangling_reference_names_missing_path() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let root = temp_dir.path().join("library");
        seed_broken_library(&root);

        let cli = CliContext::new(root, None).unwrap();
        let output = cli.execute(&validate_json(false)).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        let manifest = parsed["files"]
            .as_array()
            .unwrap()
            .iter()
            .find(|f| f["path"] == "collections/broken.collection.yml")
            .expect("manifest findings should be attributed to the manifest")
            .clone();

        let dangling = manifest["issues"]
            .as_array()
            .unwrap()
            .iter()
            .find(|i| i["code"] == "dangling-reference")
            .expect("dangling reference should be reported");
        assert_eq!(dangling["path"], "prompts/ghost.prompt.md");
        assert_eq!(dangling["severity"], "error");
    });
}

#[test]
fn every_finding_reported_in_one_run() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let root = temp_dir.path().join("library");
        seed_broken_library(&root);

        let cli = CliContext::new(root, None).unwrap();
        let output = cli.execute(&validate_json(false)).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        // One content failure and two manifest failures, nothing swallowed.
        assert_eq!(parsed["error_count"].as_u64(), Some(3));
        assert_eq!(parsed["files"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["valid"].as_bool(), Some(false));
    });
}

#[test]
fn errors_always_fail_the_verdict() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let root = temp_dir.path().join("library");
        seed_broken_library(&root);

        let cli = CliContext::new(root, None).unwrap();
        let outcome = cli.run(&validate_json(false)).unwrap();
        assert!(outcome.validation_failed);
    });
}

#[test]
fn warnings_fail_only_under_strict() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let root = temp_dir.path().join("library");
        seed_warning_library(&root);

        let cli = CliContext::new(root.clone(), None).unwrap();

        let relaxed = cli.run(&validate_json(false)).unwrap();
        assert!(!relaxed.validation_failed);

        let parsed: serde_json::Value = serde_json::from_str(&relaxed.output).unwrap();
        assert_eq!(parsed["error_count"].as_u64(), Some(0));
        assert_eq!(parsed["warning_count"].as_u64(), Some(1));
        assert_eq!(parsed["valid"].as_bool(), Some(true));

        let strict = cli.run(&validate_json(true)).unwrap();
        assert!(strict.validation_failed);
    });
}

#[test]
fn revalidation_is_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let root = temp_dir.path().join("library");
        seed_broken_library(&root);

        let cli = CliContext::new(root, None).unwrap();
        let first = cli.execute(&validate_json(false)).unwrap();
        let second = cli.execute(&validate_json(false)).unwrap();
        assert_eq!(first, second);
    });
}

#[test]
fn init_produces_a_library_that_validates_clean() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let root = temp_dir.path().join("library");
        std::fs::create_dir_all(&root).unwrap();

        let cli = CliContext::new(root, None).unwrap();
        let init = cli
            .run(&Commands::Init {
                force: false,
                list: false,
            })
            .unwrap();
        assert!(!init.validation_failed);
        assert!(init.output.contains("Initialization complete"));

        let outcome = cli.run(&validate_json(true)).unwrap();
        assert!(!outcome.validation_failed);

        let parsed: serde_json::Value = serde_json::from_str(&outcome.output).unwrap();
        assert_eq!(parsed["content_files"].as_u64(), Some(3));
        assert_eq!(parsed["collections"].as_u64(), Some(1));
        assert_eq!(parsed["valid"].as_bool(), Some(true));
    });
}

#[test]
fn init_list_previews_without_creating() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let root = temp_dir.path().join("library");
        std::fs::create_dir_all(&root).unwrap();

        let cli = CliContext::new(root.clone(), None).unwrap();
        let output = cli
            .execute(&Commands::Init {
                force: false,
                list: true,
            })
            .unwrap();

        assert!(output.contains("prompts"));
        assert!(output.contains("collections"));
        assert!(output.contains("curator init"));
        assert!(!root.join("prompts").exists());
    });
}

#[test]
fn library_config_file_sets_strict() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let root = temp_dir.path().join("library");
        seed_warning_library(&root);
        write_file(&root, "curator.toml", "[validate]\nstrict = true\n");

        let cli = CliContext::new(root, None).unwrap();
        let outcome = cli.run(&validate_json(false)).unwrap();
        assert!(outcome.validation_failed);
    });
}

#[test]
fn env_overlay_sets_strict() {
    let temp_dir = TempDir::new().unwrap();
    with_env_var(&temp_dir, "CURATOR__VALIDATE__STRICT", "true", || {
        let root = temp_dir.path().join("library");
        seed_warning_library(&root);

        let cli = CliContext::new(root, None).unwrap();
        let outcome = cli.run(&validate_json(false)).unwrap();
        assert!(outcome.validation_failed);
    });
}

#[test]
fn collection_validate_all_flags_failures() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let root = temp_dir.path().join("library");
        seed_valid_library(&root);
        write_file(
            &root,
            "collections/stale.collection.yml",
            "id: stale\nname: Stale\ndescription: d\nitems:\n  - path: prompts/gone.prompt.md\n    kind: prompt\n",
        );

        let cli = CliContext::new(root, None).unwrap();
        let outcome = cli
            .run(&Commands::Collection {
                command: CollectionCommands::Validate {
                    selector: None,
                    all: true,
                    format: "json".to_string(),
                },
            })
            .unwrap();
        assert!(outcome.validation_failed);

        let parsed: serde_json::Value = serde_json::from_str(&outcome.output).unwrap();
        let results = parsed.as_array().unwrap();
        assert_eq!(results.len(), 2);
        let stale = results
            .iter()
            .find(|r| r["path"] == "collections/stale.collection.yml")
            .expect("stale collection should be in the results");
        assert_eq!(stale["valid"], false);
    });
}

#[test]
fn duplicate_items_warn_but_do_not_invalidate() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let root = temp_dir.path().join("library");
        seed_valid_library(&root);
        write_file(
            &root,
            "collections/dupes.collection.yml",
            concat!(
                "id: dupes\n",
                "name: Dupes\n",
                "description: Lists the same file twice\n",
                "items:\n",
                "  - path: prompts/explain-code.prompt.md\n",
                "    kind: prompt\n",
                "  - path: prompts/explain-code.prompt.md\n",
                "    kind: prompt\n",
            ),
        );

        let cli = CliContext::new(root, None).unwrap();
        let outcome = cli.run(&validate_json(false)).unwrap();
        assert!(!outcome.validation_failed);

        let parsed: serde_json::Value = serde_json::from_str(&outcome.output).unwrap();
        assert_eq!(parsed["error_count"].as_u64(), Some(0));
        assert_eq!(parsed["warning_count"].as_u64(), Some(1));
        assert_eq!(parsed["valid"].as_bool(), Some(true));

        let strict = cli.run(&validate_json(true)).unwrap();
        assert!(strict.validation_failed);
    });
}

#[test]
fn new_scaffolds_a_file_that_validates() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let root = temp_dir.path().join("library");
        std::fs::create_dir_all(&root).unwrap();

        let cli = CliContext::new(root.clone(), None).unwrap();
        let outcome = cli
            .run(&Commands::New {
                kind: "prompt".to_string(),
                name: "summarize-diff".to_string(),
                description: Some("Summarize a diff".to_string()),
                agent: None,
                apply_to: None,
                tools: vec![],
                force: false,
                non_interactive: true,
            })
            .unwrap();
        assert!(outcome.output.contains("Created"));
        assert!(root.join("prompts/summarize-diff.prompt.md").is_file());

        let validated = cli.run(&validate_json(true)).unwrap();
        assert!(!validated.validation_failed);
    });
}

#[test]
fn new_instruction_requires_apply_to_when_non_interactive() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let root = temp_dir.path().join("library");
        std::fs::create_dir_all(&root).unwrap();

        let cli = CliContext::new(root, None).unwrap();
        let err = cli
            .run(&Commands::New {
                kind: "instruction".to_string(),
                name: "python-style".to_string(),
                description: Some("Python rules".to_string()),
                agent: None,
                apply_to: None,
                tools: vec![],
                force: false,
                non_interactive: true,
            })
            .unwrap_err();
        assert!(err.to_string().contains("applyTo is required"));
    });
}
