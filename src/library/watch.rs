//! Watch runtime: events, batching, and the revalidation daemon.

mod events;
mod runtime;

pub use events::{ChangeEvent, WatchConfig};
pub use runtime::WatchDaemon;
