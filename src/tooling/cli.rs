//! CLI Tooling
//!
//! Command-line interface for all curator operations. Parses arguments,
//! loads configuration, delegates to the command services, and formats
//! their results. Validation findings never abort a command here; they are
//! carried in the outcome so the binary can map them to an exit code.

use crate::collection::commands::{CollectionCommandService, CollectionValidateResult};
use crate::config::{ConfigLoader, CuratorConfig};
use crate::error::CuratorError;
use crate::init::{InitPreview, InitSummary};
use crate::library::commands::{LibraryCommandService, ListTarget};
use crate::library::format::{
    format_collection_list_text, format_collection_show_text, format_content_list_text,
    format_content_show_text, format_unified_status_text,
};
use crate::library::index::LibraryIndex;
use crate::library::paths::{canonicalize_root, file_name, normalize_rel};
use crate::library::scanner::{ScanConfig, Scanner};
use crate::library::types::ScanSummary;
use crate::library::watch::{WatchConfig, WatchDaemon};
use crate::logging::{init_logging, resolve_log_file_path};
use crate::scaffold::{self, ScaffoldRequest};
use crate::tooling::ci::{write_report, BatchOperation, CiIntegration};
use crate::types::ContentKind;
use crate::validate::report::ValidationReport;
use crate::validate::validate_library;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Curator CLI - prompt library validation and curation
#[derive(Parser)]
#[command(name = "curator")]
#[command(about = "Validation and curation tooling for AI prompt libraries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Library root directory
    #[arg(long, default_value = ".")]
    pub library: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan the library and report inventory counts
    Scan {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Validate every content file and collection manifest
    Validate {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },
    /// Show unified status (content, collections)
    Status {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Show only the content section
        #[arg(long)]
        content_only: bool,
        /// Show only the collections section
        #[arg(long)]
        collections_only: bool,
    },
    /// List content files or collections
    List {
        /// What to list: prompts, instructions, agents, collections, or all
        #[arg(default_value = "all")]
        target: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Only collections carrying this tag (collections target only)
        #[arg(long)]
        tag: Option<String>,
    },
    /// Show one content file, or one collection with its resolved items
    Show {
        /// Library-relative path of a content file, or a collection id/path
        path: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Include the Markdown body (content files only)
        #[arg(long)]
        include_body: bool,
    },
    /// Manage collections
    Collection {
        #[command(subcommand)]
        command: CollectionCommands,
    },
    /// Scaffold a new content file
    New {
        /// Content kind: prompt, instruction, or agent
        kind: String,
        /// File stem, e.g. explain-code
        name: String,
        /// Front matter description
        #[arg(long)]
        description: Option<String>,
        /// Target agent hint (prompt kind only)
        #[arg(long)]
        agent: Option<String>,
        /// applyTo glob pattern (instruction kind only)
        #[arg(long)]
        apply_to: Option<String>,
        /// Tool name (agent kind only; repeat for several)
        #[arg(long = "tool")]
        tools: Vec<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
        /// Fail on missing fields instead of prompting
        #[arg(long)]
        non_interactive: bool,
    },
    /// Initialize the standard library skeleton
    Init {
        /// Force re-initialization (overwrite existing starter files)
        #[arg(long)]
        force: bool,
        /// List what would be initialized without creating
        #[arg(long)]
        list: bool,
    },
    /// Start watch mode: revalidate whenever library files change
    Watch {
        /// Debounce window in milliseconds
        #[arg(long, default_value = "100")]
        debounce_ms: u64,
        /// Batch window in milliseconds
        #[arg(long, default_value = "50")]
        batch_window_ms: u64,
    },
    /// Run the CI batch (scan + validate) and print the JSON report
    Ci {
        /// Also write the report to this path
        #[arg(long)]
        report: Option<PathBuf>,
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Subcommand)]
pub enum CollectionCommands {
    /// List collections
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Only collections carrying this tag
        #[arg(long)]
        tag: Option<String>,
    },
    /// Show one collection with its resolved items
    Show {
        /// Collection id or manifest path
        selector: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Validate one collection, or all of them
    Validate {
        /// Collection id or manifest path
        selector: Option<String>,
        /// Validate every manifest
        #[arg(long)]
        all: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// What a command produced: printable output plus the validation verdict.
///
/// A failed validation is not an `Err`; the binary maps it to exit code 2
/// while operational errors exit 1.
#[derive(Debug)]
pub struct CommandOutcome {
    pub output: String,
    pub validation_failed: bool,
}

impl CommandOutcome {
    fn ok(output: String) -> Self {
        Self {
            output,
            validation_failed: false,
        }
    }
}

/// CLI context holding the library root and loaded configuration.
pub struct CliContext {
    library_root: PathBuf,
    config: CuratorConfig,
}

impl CliContext {
    /// Create a new CLI context, loading configuration for the library.
    pub fn new(library_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, CuratorError> {
        let config = if let Some(path) = &config_path {
            ConfigLoader::load_from_file(path)?
        } else {
            ConfigLoader::load(&library_root)?
        };
        Ok(Self {
            library_root,
            config,
        })
    }

    pub fn config(&self) -> &CuratorConfig {
        &self.config
    }

    /// Initialize logging with CLI flags layered over the configured section.
    pub fn init_logging(&self, cli: &Cli) -> Result<(), CuratorError> {
        let mut logging = self.config.logging.clone();
        if let Some(level) = &cli.log_level {
            logging.level = level.clone();
        }
        if let Some(format) = &cli.log_format {
            logging.format = format.clone();
        }
        if let Some(output) = &cli.log_output {
            logging.output = output.clone();
        }
        if cli.log_file.is_some() || logging.output.contains("file") {
            // Scope the default log file by library only when the root exists;
            // init must be able to run against a path it will create.
            let scope = self
                .library_root
                .exists()
                .then_some(self.library_root.as_path());
            logging.file = Some(resolve_log_file_path(
                cli.log_file.clone(),
                logging.file.take(),
                scope,
            )?);
        }
        init_logging(Some(&logging))
    }

    /// Execute a CLI command, producing printable output.
    pub fn execute(&self, command: &Commands) -> Result<String, CuratorError> {
        Ok(self.run(command)?.output)
    }

    /// Execute a CLI command, keeping the validation verdict.
    pub fn run(&self, command: &Commands) -> Result<CommandOutcome, CuratorError> {
        let started = Instant::now();
        let result = self.run_inner(command);
        info!(
            command = command_name(command),
            elapsed_ms = started.elapsed().as_millis() as u64,
            ok = result.is_ok(),
            "command finished"
        );
        result
    }

    fn run_inner(&self, command: &Commands) -> Result<CommandOutcome, CuratorError> {
        match command {
            Commands::Scan { format } => {
                let summary =
                    LibraryCommandService::scan(&self.library_root, self.scan_config())?;
                let output = if format == "json" {
                    serde_json::to_string_pretty(&summary)?
                } else {
                    format_scan_summary_text(&summary)
                };
                Ok(CommandOutcome::ok(output))
            }
            Commands::Validate { format, strict } => {
                let strict = *strict || self.config.validate.strict;
                let report = validate_library(&self.library_root, self.scan_config())?;
                let output = if format == "json" {
                    serde_json::to_string_pretty(&report)?
                } else {
                    format_validation_report_text(&report, strict)
                };
                Ok(CommandOutcome {
                    output,
                    validation_failed: !report.passes(strict),
                })
            }
            Commands::Status {
                format,
                content_only,
                collections_only,
            } => {
                if *content_only && *collections_only {
                    return Err(CuratorError::InvalidInput(
                        "--content-only and --collections-only are mutually exclusive"
                            .to_string(),
                    ));
                }
                let status = LibraryCommandService::status(
                    &self.library_root,
                    self.scan_config(),
                    !collections_only,
                    !content_only,
                )?;
                let output = if format == "json" {
                    serde_json::to_string_pretty(&status)?
                } else {
                    format_unified_status_text(&status)
                };
                Ok(CommandOutcome::ok(output))
            }
            Commands::List {
                target,
                format,
                tag,
            } => {
                let target = ListTarget::parse(target)?;
                if tag.is_some() && target != ListTarget::Collections {
                    return Err(CuratorError::InvalidInput(
                        "--tag applies to the collections target only".to_string(),
                    ));
                }
                if target == ListTarget::Collections {
                    let (root, index) = self.scan_index()?;
                    let result =
                        CollectionCommandService::list(&root, &index, tag.as_deref())?;
                    let output = if format == "json" {
                        serde_json::to_string_pretty(&result)?
                    } else {
                        format_collection_list_text(&result)
                    };
                    return Ok(CommandOutcome::ok(output));
                }
                let result =
                    LibraryCommandService::list(&self.library_root, self.scan_config(), target)?;
                let output = if format == "json" {
                    serde_json::to_string_pretty(&result)?
                } else {
                    format_content_list_text(&result)
                };
                Ok(CommandOutcome::ok(output))
            }
            Commands::Show {
                path,
                format,
                include_body,
            } => {
                if is_content_path(path) {
                    let result =
                        LibraryCommandService::show(&self.library_root, path, *include_body)?;
                    let output = if format == "json" {
                        serde_json::to_string_pretty(&result)?
                    } else {
                        format_content_show_text(&result)
                    };
                    return Ok(CommandOutcome::ok(output));
                }
                let (root, index) = self.scan_index()?;
                let result = CollectionCommandService::show(&root, &index, path)?;
                let output = if format == "json" {
                    serde_json::to_string_pretty(&result)?
                } else {
                    format_collection_show_text(&result)
                };
                Ok(CommandOutcome::ok(output))
            }
            Commands::Collection { command } => self.handle_collection_command(command),
            Commands::New {
                kind,
                name,
                description,
                agent,
                apply_to,
                tools,
                force,
                non_interactive,
            } => self.handle_new(
                kind,
                name,
                description.as_deref(),
                agent.as_deref(),
                apply_to.as_deref(),
                tools,
                *force,
                *non_interactive,
            ),
            Commands::Init { force, list } => self.handle_init(*force, *list),
            Commands::Watch {
                debounce_ms,
                batch_window_ms,
            } => {
                let mut watch_config = WatchConfig::default();
                watch_config.library_root = canonicalize_root(&self.library_root)?;
                watch_config.debounce_ms = *debounce_ms;
                watch_config.batch_window_ms = *batch_window_ms;
                watch_config.ignore_patterns = self.config.scan.ignore.clone();

                let daemon = WatchDaemon::new(watch_config, self.scan_config());

                info!("Starting watch mode daemon");
                daemon.start()?;

                Ok(CommandOutcome::ok("Watch daemon stopped".to_string()))
            }
            Commands::Ci { report, strict } => {
                let strict = *strict || self.config.validate.strict;
                let ci = CiIntegration::new(&self.library_root, self.scan_config());
                let batch = ci
                    .run_batch(&[
                        BatchOperation::Scan,
                        BatchOperation::Validate { strict },
                    ])
                    .map_err(|e| CuratorError::ConfigError(format!("CI batch failed: {e:#}")))?;
                if let Some(path) = report {
                    write_report(&batch, path).map_err(|e| {
                        CuratorError::ConfigError(format!("CI report not written: {e:#}"))
                    })?;
                }
                Ok(CommandOutcome {
                    output: serde_json::to_string_pretty(&batch)?,
                    validation_failed: !batch.passed,
                })
            }
        }
    }

    /// Handle collection subcommands
    fn handle_collection_command(
        &self,
        command: &CollectionCommands,
    ) -> Result<CommandOutcome, CuratorError> {
        match command {
            CollectionCommands::List { format, tag } => {
                let (root, index) = self.scan_index()?;
                let result = CollectionCommandService::list(&root, &index, tag.as_deref())?;
                let output = if format == "json" {
                    serde_json::to_string_pretty(&result)?
                } else {
                    format_collection_list_text(&result)
                };
                Ok(CommandOutcome::ok(output))
            }
            CollectionCommands::Show { selector, format } => {
                let (root, index) = self.scan_index()?;
                let result = CollectionCommandService::show(&root, &index, selector)?;
                let output = if format == "json" {
                    serde_json::to_string_pretty(&result)?
                } else {
                    format_collection_show_text(&result)
                };
                Ok(CommandOutcome::ok(output))
            }
            CollectionCommands::Validate {
                selector,
                all,
                format,
            } => {
                let (root, index) = self.scan_index()?;
                let results = if *all {
                    CollectionCommandService::validate_all(&root, &index)?
                } else {
                    let selector = selector.as_deref().ok_or_else(|| {
                        CuratorError::InvalidInput(
                            "Provide a collection selector or --all".to_string(),
                        )
                    })?;
                    vec![CollectionCommandService::validate_single(
                        &root, &index, selector,
                    )?]
                };
                let validation_failed = results.iter().any(|r| !r.valid);
                let output = if format == "json" {
                    serde_json::to_string_pretty(&results)?
                } else {
                    format_collection_validate_text(&results)
                };
                Ok(CommandOutcome {
                    output,
                    validation_failed,
                })
            }
        }
    }

    /// Handle the new command, prompting for missing fields when interactive.
    fn handle_new(
        &self,
        kind: &str,
        name: &str,
        description: Option<&str>,
        agent: Option<&str>,
        apply_to: Option<&str>,
        tools: &[String],
        force: bool,
        non_interactive: bool,
    ) -> Result<CommandOutcome, CuratorError> {
        let kind = ContentKind::parse(kind).ok_or_else(|| {
            CuratorError::InvalidInput(format!(
                "Invalid kind: {kind}. Must be prompt, instruction, or agent"
            ))
        })?;

        let description = match description {
            Some(d) => d.to_string(),
            None if non_interactive => {
                return Err(CuratorError::ConfigError(
                    "Description is required in non-interactive mode. Use --description <text>"
                        .to_string(),
                ))
            }
            None => prompt_for_input("Description", false)?,
        };

        let apply_to = match (kind, apply_to) {
            (ContentKind::Instruction, Some(p)) => Some(p.to_string()),
            (ContentKind::Instruction, None) if non_interactive => {
                return Err(CuratorError::ConfigError(
                    "applyTo is required in non-interactive mode. Use --apply-to <glob>"
                        .to_string(),
                ))
            }
            (ContentKind::Instruction, None) => {
                Some(prompt_for_input("applyTo glob (e.g. **/*.py)", false)?)
            }
            _ => None,
        };

        let agent = match (kind, agent) {
            (ContentKind::Prompt, Some(a)) => Some(a.to_string()),
            (ContentKind::Prompt, None) if !non_interactive => {
                let value = prompt_for_input("Target agent (empty for none)", true)?;
                (!value.trim().is_empty()).then_some(value)
            }
            _ => None,
        };

        let tools = if kind == ContentKind::Agent && tools.is_empty() && !non_interactive {
            let value = prompt_for_input("Tools (comma-separated, empty for none)", true)?;
            value
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect()
        } else {
            tools.to_vec()
        };

        let request = ScaffoldRequest {
            kind,
            name: name.to_string(),
            description,
            agent,
            apply_to,
            tools,
        };
        let result = scaffold::create(&self.library_root, &request, force)?;
        let verb = if result.overwritten {
            "Overwrote"
        } else {
            "Created"
        };
        Ok(CommandOutcome::ok(format!(
            "{verb} {}: {}\nRun 'curator validate' to check the library.",
            result.kind, result.path
        )))
    }

    /// Handle init command
    fn handle_init(&self, force: bool, list: bool) -> Result<CommandOutcome, CuratorError> {
        if list {
            let preview = crate::init::list_initialization(&self.library_root)?;
            Ok(CommandOutcome::ok(format_init_preview(&preview)))
        } else {
            let summary = crate::init::initialize_library(&self.library_root, force)?;
            Ok(CommandOutcome::ok(format_init_summary(&summary, force)))
        }
    }

    fn scan_config(&self) -> ScanConfig {
        self.config.scan.to_scan_config()
    }

    /// Canonical root plus a fresh index, for commands that resolve against it.
    fn scan_index(&self) -> Result<(PathBuf, LibraryIndex), CuratorError> {
        let root = canonicalize_root(&self.library_root)?;
        let index = Scanner::new(&root).with_config(self.scan_config()).scan()?;
        Ok((root, index))
    }
}

/// Prompt for one line of input.
fn prompt_for_input(prompt: &str, allow_empty: bool) -> Result<String, CuratorError> {
    use dialoguer::Input;

    Input::new()
        .with_prompt(prompt)
        .allow_empty(allow_empty)
        .interact_text()
        .map_err(|e| CuratorError::ConfigError(format!("Failed to get user input: {}", e)))
}

/// True when the path names a content file rather than a collection selector.
fn is_content_path(path: &str) -> bool {
    let rel = normalize_rel(path);
    ContentKind::from_file_name(file_name(&rel)).is_some()
}

fn command_name(command: &Commands) -> String {
    match command {
        Commands::Scan { .. } => "scan".to_string(),
        Commands::Validate { .. } => "validate".to_string(),
        Commands::Status { .. } => "status".to_string(),
        Commands::List { .. } => "list".to_string(),
        Commands::Show { .. } => "show".to_string(),
        Commands::Collection { command } => {
            format!("collection.{}", collection_command_name(command))
        }
        Commands::New { .. } => "new".to_string(),
        Commands::Init { .. } => "init".to_string(),
        Commands::Watch { .. } => "watch".to_string(),
        Commands::Ci { .. } => "ci".to_string(),
    }
}

fn collection_command_name(command: &CollectionCommands) -> &'static str {
    match command {
        CollectionCommands::List { .. } => "list",
        CollectionCommands::Show { .. } => "show",
        CollectionCommands::Validate { .. } => "validate",
    }
}

fn format_scan_summary_text(summary: &ScanSummary) -> String {
    format!(
        "Library scan:\n  Root: {}\n  Prompts: {}\n  Instructions: {}\n  Agents: {}\n  Collections: {}",
        summary.root, summary.prompts, summary.instructions, summary.agents, summary.collections
    )
}

fn format_validation_report_text(report: &ValidationReport, strict: bool) -> String {
    if report.files.is_empty() {
        return format!(
            "Validation passed:\n  Library root: {}\n  Content files: {}\n  Collections: {}\n  All checks passed",
            report.root, report.content_files, report.collections
        );
    }

    let mut s = format!(
        "Validation completed with findings:\n  Library root: {}\n  Content files: {}\n  Collections: {}\n",
        report.root, report.content_files, report.collections
    );
    for file in &report.files {
        s.push_str(&format!(
            "\n{} ({} errors, {} warnings)\n",
            file.path,
            file.error_count(),
            file.warning_count()
        ));
        for issue in &file.issues {
            s.push_str(&format!(
                "  - [{}] {}\n",
                issue.severity.as_str(),
                issue.message
            ));
        }
    }
    s.push_str(&format!(
        "\nSummary: {} errors, {} warnings in {} files.",
        report.error_count,
        report.warning_count,
        report.files.len()
    ));
    if strict && report.error_count == 0 && report.warning_count > 0 {
        s.push_str("\nStrict mode: warnings are treated as failures.");
    }
    s
}

fn format_collection_validate_text(results: &[CollectionValidateResult]) -> String {
    if results.is_empty() {
        return "No collections found.".to_string();
    }
    let mut s = String::new();
    for result in results {
        if result.issues.is_empty() {
            s.push_str(&format!("{}: ok\n", result.path));
            continue;
        }
        s.push_str(&format!("{}:\n", result.path));
        for issue in &result.issues {
            s.push_str(&format!(
                "  - [{}] {}\n",
                issue.severity.as_str(),
                issue.message
            ));
        }
    }
    let valid = results.iter().filter(|r| r.valid).count();
    s.push_str(&format!(
        "\n{} of {} collections valid.",
        valid,
        results.len()
    ));
    s
}

/// Format initialization preview
fn format_init_preview(preview: &InitPreview) -> String {
    let mut output = String::from("Initialization Preview:\n\n");

    if !preview.directories.is_empty() {
        output.push_str("Would create directories:\n");
        for dir in &preview.directories {
            output.push_str(&format!("  - {}/\n", dir));
        }
        output.push('\n');
    }

    if !preview.files.is_empty() {
        output.push_str("Would create files:\n");
        for file in &preview.files {
            output.push_str(&format!("  - {}\n", file));
        }
        output.push('\n');
    }

    if preview.is_empty() {
        output.push_str("Library skeleton already exists.\n");
    } else {
        output.push_str("Run 'curator init' to perform initialization.\n");
    }

    output
}

/// Format initialization summary
fn format_init_summary(summary: &InitSummary, force: bool) -> String {
    let mut output = String::from("Initializing library...\n\n");

    if !summary.directories.created.is_empty() {
        output.push_str("Created directories:\n");
        for dir in &summary.directories.created {
            output.push_str(&format!("   {}/\n", dir));
        }
        output.push('\n');
    }

    if !summary.files.created.is_empty() || !summary.files.skipped.is_empty() {
        output.push_str("Starter files:\n");
        for file in &summary.files.created {
            if force {
                output.push_str(&format!("   {} (overwritten)\n", file));
            } else {
                output.push_str(&format!("   {}\n", file));
            }
        }
        for file in &summary.files.skipped {
            output.push_str(&format!("   {} (already exists, skipped)\n", file));
        }
        output.push('\n');
    }

    if !summary.directories.errors.is_empty() || !summary.files.errors.is_empty() {
        output.push_str("Errors:\n");
        for error in &summary.directories.errors {
            output.push_str(&format!("   {}\n", error));
        }
        for error in &summary.files.errors {
            output.push_str(&format!("   {}\n", error));
        }
        output.push('\n');
    }

    output.push_str("Validation:\n");
    if summary.report.valid {
        output.push_str(&format!(
            "   Library valid ({} content files, {} collections)\n\n",
            summary.report.content_files, summary.report.collections
        ));
    } else {
        for file in &summary.report.files {
            output.push_str(&format!("   {} has findings:\n", file.path));
            for issue in &file.issues {
                output.push_str(&format!("    - {}\n", issue.message));
            }
        }
        output.push('\n');
    }

    if summary.files.created.is_empty() && !force {
        output.push_str("All starter files already exist. Use --force to re-initialize.\n");
    } else {
        output.push_str("Initialization complete! You can now use:\n");
        output.push_str("  - curator list               # List all content\n");
        output.push_str("  - curator validate           # Validate the library\n");
        output.push_str("  - curator new prompt <name>  # Scaffold more content\n");
    }

    output
}
