//! Unix path locations

use crate::error::{Error, Result};
use crate::platform::traits::PathOps;
use std::io;
use std::path::PathBuf;

/// The hosts table lives here on every Unix
const HOSTS_FILE: &str = "/etc/hosts";

pub struct UnixPaths;

impl UnixPaths {
    pub fn new() -> Self {
        Self
    }
}

impl PathOps for UnixPaths {
    fn hosts_file(&self) -> PathBuf {
        PathBuf::from(HOSTS_FILE)
    }

    fn config_dir(&self) -> Result<PathBuf> {
        xdg_dir("XDG_CONFIG_HOME", dirs::config_dir(), ".config", "config")
    }

    fn cache_dir(&self) -> Result<PathBuf> {
        xdg_dir("XDG_CACHE_HOME", dirs::cache_dir(), ".cache", "cache")
    }
}

/// `$var` when set, else what `dirs` reports, else `~/<fallback>`.
/// Relative XDG values are ignored.
fn xdg_dir(var: &str, from_dirs: Option<PathBuf>, fallback: &str, kind: &str) -> Result<PathBuf> {
    std::env::var_os(var)
        .map(PathBuf::from)
        .filter(|path| path.is_absolute())
        .or(from_dirs)
        .or_else(|| dirs::home_dir().map(|home| home.join(fallback)))
        .ok_or_else(|| {
            Error::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("could not determine {} directory", kind),
            ))
        })
}
