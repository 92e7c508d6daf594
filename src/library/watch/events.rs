//! Watch events, batching, and configuration.

use crate::library::paths::normalize_rel;
use crate::library::scanner;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Watch mode configuration
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Library root directory
    pub library_root: PathBuf,
    /// Debounce window in milliseconds
    pub debounce_ms: u64,
    /// Batch window in milliseconds
    pub batch_window_ms: u64,
    /// Maximum events per batch
    pub max_batch_size: usize,
    /// Ignore patterns, matched like scanner ignores
    pub ignore_patterns: Vec<String>,
    /// Maximum event queue size
    pub max_queue_size: usize,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            library_root: PathBuf::from("."),
            debounce_ms: 100,
            batch_window_ms: 50,
            max_batch_size: 100,
            ignore_patterns: scanner::DEFAULT_IGNORE
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_queue_size: 10000,
        }
    }
}

/// Filesystem change event
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChangeEvent {
    Created(PathBuf),
    Modified(PathBuf),
    Removed(PathBuf),
    Renamed { from: PathBuf, to: PathBuf },
}

impl ChangeEvent {
    /// The path the event settles on.
    pub fn path(&self) -> &Path {
        match self {
            Self::Created(p) | Self::Modified(p) | Self::Removed(p) => p,
            Self::Renamed { to, .. } => to,
        }
    }
}

/// Event batcher for grouping and debouncing events
pub(crate) struct EventBatcher {
    config: WatchConfig,
    pending_events: HashMap<PathBuf, ChangeEvent>,
    last_event_time: HashMap<PathBuf, Instant>,
}

impl EventBatcher {
    pub(crate) fn new(config: WatchConfig) -> Self {
        Self {
            config,
            pending_events: HashMap::new(),
            last_event_time: HashMap::new(),
        }
    }

    /// Record an event. Returns true when the batch is full and should be
    /// drained immediately.
    pub(crate) fn add_event(&mut self, event: ChangeEvent) -> bool {
        let path = event.path().to_path_buf();

        if self.should_ignore(&path) {
            return false;
        }

        let now = Instant::now();
        let debounce_window = std::time::Duration::from_millis(self.config.debounce_ms);

        if let Some(last_time) = self.last_event_time.get(&path) {
            if now.duration_since(*last_time) < debounce_window {
                self.pending_events.insert(path, event);
                return false;
            }
        }

        self.pending_events.insert(path.clone(), event);
        self.last_event_time.insert(path, now);

        self.pending_events.len() >= self.config.max_batch_size
    }

    pub(crate) fn take_batch(&mut self) -> Vec<ChangeEvent> {
        let events: Vec<_> = self.pending_events.values().cloned().collect();
        self.pending_events.clear();
        self.last_event_time.clear();
        events
    }

    pub(crate) fn has_pending(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn should_ignore(&self, path: &Path) -> bool {
        let rel = path
            .strip_prefix(&self.config.library_root)
            .unwrap_or(path);
        let rel_path = normalize_rel(&rel.to_string_lossy());
        scanner::is_ignored(&rel_path, &self.config.ignore_patterns)
    }
}
