//! Shared helpers for the contract test suite.

use std::ffi::OsString;
use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, OnceLock};

use tempfile::TempDir;

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Restores the captured variables when dropped, so a panicking test cannot
/// leak its environment into the next one.
struct EnvRestore {
    saved: Vec<(&'static str, Option<OsString>)>,
}

impl Drop for EnvRestore {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..) {
            match value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
    }
}

/// Run `f` with `HOME` and `XDG_CONFIG_HOME` pointed into the temp directory.
/// Config loading consults global paths and environment overlays; without
/// this a developer's real config could leak into assertions. All tests that
/// load configuration go through here so they serialize on one lock.
pub fn with_xdg_env<F: FnOnce()>(temp_dir: &TempDir, f: F) {
    let _guard = env_lock();
    let _restore = EnvRestore {
        saved: vec![
            ("HOME", std::env::var_os("HOME")),
            ("XDG_CONFIG_HOME", std::env::var_os("XDG_CONFIG_HOME")),
        ],
    };
    std::env::set_var("HOME", temp_dir.path());
    std::env::set_var("XDG_CONFIG_HOME", temp_dir.path().join("xdg"));
    f();
}

/// Same isolation as [`with_xdg_env`] plus one extra variable for the
/// duration of `f`.
pub fn with_env_var<F: FnOnce()>(temp_dir: &TempDir, key: &'static str, value: &str, f: F) {
    let _guard = env_lock();
    let _restore = EnvRestore {
        saved: vec![
            ("HOME", std::env::var_os("HOME")),
            ("XDG_CONFIG_HOME", std::env::var_os("XDG_CONFIG_HOME")),
            (key, std::env::var_os(key)),
        ],
    };
    std::env::set_var("HOME", temp_dir.path());
    std::env::set_var("XDG_CONFIG_HOME", temp_dir.path().join("xdg"));
    std::env::set_var(key, value);
    f();
}

/// Write a library-relative file, creating parent directories.
pub fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Seed a library that validates clean: one file of each content kind plus a
/// collection referencing all three.
pub fn seed_valid_library(root: &Path) {
    write_file(
        root,
        "prompts/explain-code.prompt.md",
        "---\ndescription: Explain the selected code\nagent: ask\n---\n\n# Explain Code\n\nExplain what the selection does.\n",
    );
    write_file(
        root,
        "instructions/python-style.instructions.md",
        "---\ndescription: Python style rules\napplyTo: \"**/*.py\"\n---\n\nFollow PEP 8.\n",
    );
    write_file(
        root,
        "agents/data-engineer.agent.md",
        "---\ndescription: Data engineering assistant\ntools:\n  - search\n---\n\n# Data Engineer\n\nYou build pipelines.\n",
    );
    write_file(
        root,
        "collections/core.collection.yml",
        concat!(
            "id: core\n",
            "name: Core Kit\n",
            "description: Everything needed to get started\n",
            "tags:\n",
            "  - starter\n",
            "items:\n",
            "  - path: prompts/explain-code.prompt.md\n",
            "    kind: prompt\n",
            "  - path: instructions/python-style.instructions.md\n",
            "    kind: instruction\n",
            "  - path: agents/data-engineer.agent.md\n",
            "    kind: agent\n",
        ),
    );
}

/// Seed a library exercising the classic failure modes: a missing
/// description, a manifest kind that contradicts the file suffix, and a
/// reference to a file that does not exist.
pub fn seed_broken_library(root: &Path) {
    write_file(
        root,
        "prompts/no-description.prompt.md",
        "---\nagent: ask\n---\n\nBody.\n",
    );
    write_file(
        root,
        "prompts/described.prompt.md",
        "---\ndescription: Properly described\n---\n\nBody.\n",
    );
    write_file(
        root,
        "collections/broken.collection.yml",
        concat!(
            "id: broken\n",
            "name: Broken\n",
            "description: Exercises resolver findings\n",
            "items:\n",
            "  - path: prompts/described.prompt.md\n",
            "    kind: agent\n",
            "  - path: prompts/ghost.prompt.md\n",
            "    kind: prompt\n",
        ),
    );
}

/// Seed a library whose only finding is a warning: a prompt with a blank
/// `agent` field.
pub fn seed_warning_library(root: &Path) {
    write_file(
        root,
        "prompts/advisory.prompt.md",
        "---\ndescription: Carries a blank agent field\nagent: \"  \"\n---\n\nBody.\n",
    );
}
