//! Library domain: scanning, indexing, command orchestration, and the watch
//! runtime.

pub mod commands;
pub mod format;
pub mod index;
pub mod paths;
pub mod scanner;
pub mod types;
pub mod watch;

pub use commands::{LibraryCommandService, ListTarget};
pub use index::LibraryIndex;
pub use scanner::{ScanConfig, Scanner};
