//! Error types and Result aliases for phocus

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for phocus operations
pub type Result<T> = std::result::Result<T, Error>;

/// The step of a hosts table operation that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostsAction {
    Open,
    Read,
    Write,
}

impl fmt::Display for HostsAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostsAction::Open => write!(f, "open"),
            HostsAction::Read => write!(f, "read"),
            HostsAction::Write => write!(f, "write"),
        }
    }
}

/// Main error type for phocus
#[derive(Debug, Error)]
pub enum Error {
    // === Hosts table errors ===
    /// The hosts table could not be opened, read or written
    #[error("failed to {action} hosts file '{}': {source}", path.display())]
    HostsIo {
        action: HostsAction,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A domain was empty after trimming
    #[error("domain cannot be empty")]
    EmptyDomain,

    // === DNS cache errors ===
    /// A flush command could not be spawned or exited non-zero
    #[error("'{command}' failed: {reason}")]
    Command { command: String, reason: String },

    /// Every flush mechanism failed, including the hosts file reload
    #[error("all DNS flush methods failed; last error: {last_error}")]
    FlushFailed { last_error: String },

    /// The operating system family has no known flush strategy
    #[error("unsupported operating system: {os}")]
    UnsupportedPlatform { os: String },

    // === Session errors ===
    /// The process lacks the privileges needed to edit the hosts table
    #[error("root privileges are required to modify the hosts file and flush DNS")]
    PrivilegeRequired,

    /// The session already ran its teardown
    #[error("session has already terminated")]
    SessionTerminated,

    // === Configuration errors ===
    /// Failed to load configuration file
    #[error("failed to load config from '{}': {reason}", path.display())]
    ConfigLoadFailed { path: PathBuf, reason: String },

    /// Failed to parse configuration
    #[error("failed to parse {format} config: {reason}")]
    ConfigParseFailed { format: String, reason: String },

    /// Failed to serialize configuration
    #[error("failed to serialize config as {format}: {reason}")]
    ConfigSerializationFailed { format: String, reason: String },

    /// Configuration validation failed
    #[error("configuration validation failed for '{field}': {reason}")]
    ConfigValidationFailed { field: String, reason: String },

    // === Terminal and log I/O ===
    /// I/O errors outside the hosts table
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for failures of the DNS cache flush step.
    ///
    /// These are soft: the hosts table edit that preceded the flush has
    /// already taken effect.
    pub fn is_flush_error(&self) -> bool {
        matches!(
            self,
            Error::Command { .. } | Error::FlushFailed { .. } | Error::UnsupportedPlatform { .. }
        )
    }

    pub(crate) fn hosts_io(action: HostsAction, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::HostsIo {
            action,
            path: path.into(),
            source,
        }
    }
}
