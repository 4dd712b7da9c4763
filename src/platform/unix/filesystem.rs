//! Unix filesystem operations

use crate::error::Result;
use crate::platform::traits::FilesystemOps;
use std::env;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Directories searched after PATH. Service tools like `service` and `nscd`
/// live in sbin, which sudo does not always keep on PATH.
const SBIN_DIRS: &[&str] = &["/usr/local/sbin", "/usr/sbin", "/sbin"];

pub struct UnixFilesystem;

impl UnixFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl FilesystemOps for UnixFilesystem {
    fn is_executable(&self, path: &Path) -> bool {
        if let Ok(metadata) = path.metadata() {
            if metadata.is_file() {
                // Check if file has executable permissions
                let permissions = metadata.permissions();
                return (permissions.mode() & 0o111) != 0;
            }
        }
        false
    }

    fn find_command(&self, command: &str) -> Result<Option<PathBuf>> {
        // Paths are taken as-is
        if command.contains('/') {
            let path = PathBuf::from(command);
            return Ok(self.is_executable(&path).then_some(path));
        }

        let mut search_dirs: Vec<PathBuf> = env::var_os("PATH")
            .map(|path_env| env::split_paths(&path_env).collect())
            .unwrap_or_default();
        search_dirs.extend(SBIN_DIRS.iter().map(PathBuf::from));

        for dir in search_dirs {
            let candidate = dir.join(command);
            if self.is_executable(&candidate) {
                trace!("Resolved {} to {}", command, candidate.display());
                return Ok(Some(candidate));
            }
        }

        Ok(None)
    }
}
