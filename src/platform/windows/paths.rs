//! Windows path locations

use crate::error::{Error, Result};
use crate::platform::traits::PathOps;
use std::env;
use std::io;
use std::path::PathBuf;

/// Used when `%SystemRoot%` is not set
const DEFAULT_SYSTEM_ROOT: &str = r"C:\Windows";

pub struct WindowsPaths;

impl WindowsPaths {
    pub fn new() -> Self {
        Self
    }
}

impl PathOps for WindowsPaths {
    fn hosts_file(&self) -> PathBuf {
        let root = env::var_os("SystemRoot")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SYSTEM_ROOT));
        root.join("System32").join("drivers").join("etc").join("hosts")
    }

    fn config_dir(&self) -> Result<PathBuf> {
        // AppData\Roaming
        dirs::config_dir().ok_or_else(|| not_found("config"))
    }

    fn cache_dir(&self) -> Result<PathBuf> {
        // AppData\Local
        dirs::data_local_dir().ok_or_else(|| not_found("cache"))
    }
}

fn not_found(kind: &str) -> Error {
    Error::Io(io::Error::new(
        io::ErrorKind::NotFound,
        format!("could not determine {} directory", kind),
    ))
}
