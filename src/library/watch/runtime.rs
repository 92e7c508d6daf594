//! Watch daemon and runtime logic.

use super::events::{ChangeEvent, EventBatcher, WatchConfig};
use crate::error::CuratorError;
use crate::library::scanner::ScanConfig;
use crate::validate::{self, ValidationReport};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use parking_lot::RwLock;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Watch mode daemon: revalidates the library whenever its files change.
pub struct WatchDaemon {
    config: WatchConfig,
    scan_config: ScanConfig,
    running: Arc<RwLock<bool>>,
}

impl WatchDaemon {
    pub fn new(config: WatchConfig, scan_config: ScanConfig) -> Self {
        Self {
            config,
            scan_config,
            running: Arc::new(RwLock::new(false)),
        }
    }

    /// Shared flag for stopping the daemon from another thread.
    pub fn running_handle(&self) -> Arc<RwLock<bool>> {
        Arc::clone(&self.running)
    }

    /// Start the daemon. Runs an initial validation, then blocks observing
    /// the library until [`stop`](Self::stop) is called or the watcher
    /// channel closes.
    pub fn start(&self) -> Result<(), CuratorError> {
        *self.running.write() = true;

        info!(library = ?self.config.library_root, "Running initial validation");
        let report = self.revalidate()?;
        log_report(&report);

        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res| {
            if let Err(e) = tx.send(res) {
                error!("Error sending watch event: {}", e);
            }
        })
        .map_err(|e| CuratorError::WatchError(format!("Failed to create watcher: {e}")))?;

        watcher
            .watch(&self.config.library_root, RecursiveMode::Recursive)
            .map_err(|e| CuratorError::WatchError(format!("Failed to watch library: {e}")))?;

        info!(library = ?self.config.library_root, "Watching library");

        let mut batcher = EventBatcher::new(self.config.clone());
        let batch_window = Duration::from_millis(self.config.batch_window_ms);

        let mut last_batch_time = Instant::now();
        let mut pending_events: Vec<ChangeEvent> = Vec::new();

        loop {
            if !*self.running.read() {
                break;
            }

            let timeout = batch_window.saturating_sub(last_batch_time.elapsed());
            match rx.recv_timeout(timeout) {
                Ok(Ok(event)) => {
                    if let Some(change_event) = convert_event(event) {
                        if pending_events.len() >= self.config.max_queue_size {
                            warn!("Event queue full, dropping event");
                        } else if batcher.add_event(change_event.clone()) {
                            pending_events.extend(batcher.take_batch());
                        } else {
                            pending_events.push(change_event);
                        }
                    }
                }
                Ok(Err(e)) => {
                    warn!("Watch error: {}", e);
                }
                Err(mpsc::RecvTimeoutError::Timeout) => {
                    if !pending_events.is_empty() && last_batch_time.elapsed() >= batch_window {
                        self.process_events(pending_events.drain(..).collect())?;
                        last_batch_time = Instant::now();
                    }
                }
                Err(mpsc::RecvTimeoutError::Disconnected) => {
                    error!("Watcher channel disconnected");
                    break;
                }
            }

            if !pending_events.is_empty() && last_batch_time.elapsed() >= batch_window {
                self.process_events(pending_events.drain(..).collect())?;
                last_batch_time = Instant::now();
            }
        }

        Ok(())
    }

    /// Stop the daemon. The watch loop exits on its next pass.
    pub fn stop(&self) {
        *self.running.write() = false;
    }

    fn process_events(&self, events: Vec<ChangeEvent>) -> Result<(), CuratorError> {
        if events.is_empty() {
            return Ok(());
        }

        for event in &events {
            let (kind, path) = match event {
                ChangeEvent::Created(p) => ("created", p),
                ChangeEvent::Modified(p) => ("modified", p),
                ChangeEvent::Removed(p) => ("removed", p),
                ChangeEvent::Renamed { to, .. } => ("renamed", to),
            };
            debug!(kind = kind, path = ?path, "file changed");
        }

        info!(event_count = events.len(), "Change detected, revalidating");
        let report = self.revalidate()?;
        log_report(&report);

        Ok(())
    }

    fn revalidate(&self) -> Result<ValidationReport, CuratorError> {
        validate::validate_library(&self.config.library_root, self.scan_config.clone())
    }
}

fn convert_event(event: Event) -> Option<ChangeEvent> {
    match event.kind {
        EventKind::Create(_) => event.paths.first().map(|p| ChangeEvent::Created(p.clone())),
        EventKind::Modify(notify::event::ModifyKind::Name(_)) => {
            if event.paths.len() >= 2 {
                Some(ChangeEvent::Renamed {
                    from: event.paths[0].clone(),
                    to: event.paths[1].clone(),
                })
            } else {
                event
                    .paths
                    .first()
                    .map(|p| ChangeEvent::Modified(p.clone()))
            }
        }
        EventKind::Modify(_) => event
            .paths
            .first()
            .map(|p| ChangeEvent::Modified(p.clone())),
        EventKind::Remove(_) => event.paths.first().map(|p| ChangeEvent::Removed(p.clone())),
        _ => None,
    }
}

fn log_report(report: &ValidationReport) {
    if report.valid {
        info!(
            content_files = report.content_files,
            collections = report.collections,
            warnings = report.warning_count,
            "Library valid"
        );
    } else {
        warn!(
            errors = report.error_count,
            warnings = report.warning_count,
            files = report.files.len(),
            "Library has validation errors"
        );
        for file in &report.files {
            for issue in &file.issues {
                warn!(path = %file.path, "{}", issue.message);
            }
        }
    }
}
