//! Platform-specific operation traits
//!
//! Everything in the crate that differs between operating systems goes
//! through one of these.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Platform-specific filesystem operations
pub trait FilesystemOps: Send + Sync {
    /// Whether `path` is a file this user may execute
    fn is_executable(&self, path: &Path) -> bool;

    /// Resolve a program name on the search path. A name containing a path
    /// separator is checked as given.
    fn find_command(&self, command: &str) -> Result<Option<PathBuf>>;
}

/// Platform-specific path operations
pub trait PathOps: Send + Sync {
    /// Location of the OS hosts table
    fn hosts_file(&self) -> PathBuf;

    /// Per-user configuration root; phocus uses its `phocus/` subdirectory
    fn config_dir(&self) -> Result<PathBuf>;

    /// Per-user cache root, home of the default log file
    fn cache_dir(&self) -> Result<PathBuf>;
}

/// Platform-specific privilege checks
pub trait PrivilegeOps: Send + Sync {
    /// Whether the process may write the hosts table and restart system services.
    ///
    /// Unix checks for effective UID 0. Windows does no check and always
    /// returns true, so a non-elevated run there fails later on the hosts
    /// file write.
    fn is_elevated(&self) -> bool;
}
