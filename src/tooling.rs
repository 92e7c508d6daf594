//! Tooling & Integration Layer
//!
//! CLI tools and the CI batch entry point. Keeps command parsing and output
//! formatting out of the library core so validation behaves identically from
//! every environment.

pub mod ci;
pub mod cli;

pub use ci::{BatchOperation, BatchReport, CiIntegration};
pub use cli::{Cli, CliContext, CommandOutcome, Commands};
pub use crate::library::watch::{WatchConfig, WatchDaemon};
