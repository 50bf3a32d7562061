//! Log sink handed to the stats fetcher.
//!
//! The fetcher reports every attempt through a [`FetchLogger`] instead of
//! calling the global `tracing` macros directly, so tests can count entries
//! per severity. [`TracingLogger`] is the production sink.

use std::fmt;
use tracing::{debug, error, info, warn};

/// Severity of a fetch log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
    /// Terminal failure; the fetch gave up
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        };
        f.write_str(label)
    }
}

pub trait FetchLogger: Send + Sync {
    fn log(&self, severity: Severity, message: &str);
}

/// Forwards entries to the process-wide tracing subscriber.
///
/// `tracing` has no level above ERROR, so critical entries are emitted at
/// ERROR with a `CRITICAL:` prefix to keep them greppable in the log file.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl FetchLogger for TracingLogger {
    fn log(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Debug => debug!("{message}"),
            Severity::Info => info!("{message}"),
            Severity::Warning => warn!("{message}"),
            Severity::Error => error!("{message}"),
            Severity::Critical => error!("CRITICAL: {message}"),
        }
    }
}
