//! DNS resolver cache invalidation
//!
//! Edits to the hosts table only take effect once the OS resolver stops
//! serving cached answers. Each OS family gets its own strategy:
//!
//! - **Windows:** `ipconfig /flushdns`
//! - **macOS:** `dscacheutil -flushcache` followed by `killall -HUP mDNSResponder`;
//!   both must succeed
//! - **Linux:** the first available entry of [`LINUX_CANDIDATES`] that exits
//!   cleanly, falling back to touching the hosts file
//!
//! Flush failures never roll back a hosts edit. They only mean the resolver
//! may serve stale answers until its cache expires.

pub mod candidates;
pub mod runner;

pub use candidates::{FlushCandidate, LINUX_CANDIDATES};
pub use runner::{CommandOutput, CommandRunner, SystemRunner};

use crate::error::{Error, Result};
use runner::display_command;
use std::path::PathBuf;

/// Something that can invalidate the resolver cache
pub trait CacheFlush {
    fn flush(&self) -> Result<()>;
}

impl<T: CacheFlush + ?Sized> CacheFlush for &T {
    fn flush(&self) -> Result<()> {
        (**self).flush()
    }
}

impl<T: CacheFlush + ?Sized> CacheFlush for Box<T> {
    fn flush(&self) -> Result<()> {
        (**self).flush()
    }
}

/// Operating system family, as far as cache flushing is concerned
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    MacOs,
    Linux,
    /// Anything else, carrying the OS name
    Other(String),
}

impl OsFamily {
    /// Family of the running system
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` style name to a family
    pub fn from_os_name(name: &str) -> Self {
        match name {
            "windows" => OsFamily::Windows,
            "macos" => OsFamily::MacOs,
            "linux" => OsFamily::Linux,
            other => OsFamily::Other(other.to_string()),
        }
    }
}

/// Flushes the resolver cache with the strategy for one OS family
pub struct DnsCacheFlusher<R: CommandRunner = SystemRunner> {
    os: OsFamily,
    runner: R,
    candidates: Vec<FlushCandidate>,
    /// Touched as a last resort on Linux
    hosts_path: PathBuf,
}

impl DnsCacheFlusher<SystemRunner> {
    /// Flusher for the running system using real processes
    pub fn for_current_platform(hosts_path: impl Into<PathBuf>) -> Self {
        Self::with_runner(OsFamily::current(), SystemRunner::new(), hosts_path)
    }
}

impl<R: CommandRunner> DnsCacheFlusher<R> {
    pub fn with_runner(os: OsFamily, runner: R, hosts_path: impl Into<PathBuf>) -> Self {
        Self {
            os,
            runner,
            candidates: LINUX_CANDIDATES.to_vec(),
            hosts_path: hosts_path.into(),
        }
    }

    /// Replace the Linux candidate list
    pub fn with_candidates(mut self, candidates: Vec<FlushCandidate>) -> Self {
        self.candidates = candidates;
        self
    }

    pub fn os(&self) -> &OsFamily {
        &self.os
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    fn flush_windows(&self) -> Result<()> {
        self.run_checked("ipconfig", &["/flushdns"])
    }

    fn flush_macos(&self) -> Result<()> {
        // First flush the directory service cache, then restart the responder
        self.run_checked("dscacheutil", &["-flushcache"])?;
        self.run_checked("killall", &["-HUP", "mDNSResponder"])
    }

    fn flush_linux(&self) -> Result<()> {
        let mut last_error: Option<Error> = None;

        for candidate in &self.candidates {
            if self.runner.find(candidate.program).is_none() {
                trace!("Skipping {}: {} not found", candidate.name, candidate.program);
                continue;
            }

            debug!("Trying DNS flush via {}", candidate.name);
            match self.run_checked(candidate.program, candidate.args) {
                Ok(()) => {
                    info!("DNS cache flushed via {}", candidate.name);
                    return Ok(());
                }
                Err(e) => {
                    warn!("DNS flush via {} failed: {}", candidate.name, e);
                    last_error = Some(e);
                }
            }
        }

        let last_error = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no flush mechanism available on this system".to_string());

        match self.reload_hosts_file() {
            Ok(()) => {
                warn!(
                    "No DNS flush method succeeded ({}); touched {} instead",
                    last_error,
                    self.hosts_path.display()
                );
                Ok(())
            }
            Err(e) => {
                error!("Hosts file reload failed: {}", e);
                Err(Error::FlushFailed { last_error })
            }
        }
    }

    /// Touch the hosts file so resolvers watching it reload
    fn reload_hosts_file(&self) -> Result<()> {
        let path = self.hosts_path.to_string_lossy();
        self.run_checked("touch", &[path.as_ref()])
    }

    /// Run a command and turn a non-zero exit into a command error
    fn run_checked(&self, program: &str, args: &[&str]) -> Result<()> {
        let output = self.runner.run(program, args)?;
        if output.success {
            return Ok(());
        }

        let reason = if output.output.is_empty() {
            output.status
        } else {
            format!("{}, output: {}", output.status, output.output)
        };
        Err(Error::Command {
            command: display_command(program, args),
            reason,
        })
    }
}

impl<R: CommandRunner> CacheFlush for DnsCacheFlusher<R> {
    fn flush(&self) -> Result<()> {
        match &self.os {
            OsFamily::Windows => self.flush_windows(),
            OsFamily::MacOs => self.flush_macos(),
            OsFamily::Linux => self.flush_linux(),
            OsFamily::Other(os) => Err(Error::UnsupportedPlatform { os: os.clone() }),
        }
    }
}
