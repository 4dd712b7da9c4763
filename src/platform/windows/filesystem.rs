//! Windows filesystem operations

use crate::error::Result;
use crate::platform::traits::FilesystemOps;
use std::env;
use std::path::{Path, PathBuf};

/// Used when PATHEXT is unset
const DEFAULT_EXTENSIONS: &[&str] = &[".com", ".exe", ".bat", ".cmd"];

pub struct WindowsFilesystem;

impl WindowsFilesystem {
    pub fn new() -> Self {
        Self
    }

    fn executable_extensions() -> Vec<String> {
        match env::var("PATHEXT") {
            Ok(pathext) => pathext
                .split(';')
                .filter(|ext| !ext.is_empty())
                .map(|ext| ext.to_lowercase())
                .collect(),
            Err(_) => DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        }
    }
}

impl FilesystemOps for WindowsFilesystem {
    fn is_executable(&self, path: &Path) -> bool {
        if !path.is_file() {
            return false;
        }
        // On Windows, check for common executable extensions
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            matches!(
                ext.to_lowercase().as_str(),
                "exe" | "bat" | "cmd" | "ps1" | "com"
            )
        } else {
            false
        }
    }

    fn find_command(&self, command: &str) -> Result<Option<PathBuf>> {
        let direct = PathBuf::from(command);
        if direct.components().count() > 1 && self.is_executable(&direct) {
            return Ok(Some(direct));
        }

        let Some(path_env) = env::var_os("PATH") else {
            return Ok(None);
        };
        let extensions = Self::executable_extensions();

        for path_dir in env::split_paths(&path_env) {
            let bare = path_dir.join(command);
            if self.is_executable(&bare) {
                return Ok(Some(bare));
            }
            for ext in &extensions {
                let full_path = path_dir.join(format!("{}{}", command, ext));
                if self.is_executable(&full_path) {
                    return Ok(Some(full_path));
                }
            }
        }

        Ok(None)
    }
}
