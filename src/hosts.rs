//! Hosts table editing
//!
//! The hosts table is owned by the OS and may be edited by other processes
//! at any time. No lock is taken: blocks are plain appends, and unblocking
//! re-reads the whole table right before rewriting it. A concurrent writer
//! racing an unblock can still lose its edit (last writer wins).

use crate::dns::CacheFlush;
use crate::error::{Error, HostsAction, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

/// Loopback address block entries point at
pub const BLOCK_ADDRESS: &str = "127.0.0.1";

/// Default pause between a table write and the cache flush
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(100);

/// How `unblock_all` decides that a line references a domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Any line containing the domain as a substring. Unblocking `foo`
    /// also removes `foobar.com`.
    #[default]
    Substring,
    /// Only lines whose host names include the domain exactly. Comments,
    /// whole-line or trailing, are not host names.
    Exact,
}

impl MatchMode {
    /// Whether `line` references any of `domains`. Empty domains never match.
    pub fn matches_any(&self, line: &str, domains: &[String]) -> bool {
        domains
            .iter()
            .filter(|domain| !domain.is_empty())
            .any(|domain| self.matches(line, domain))
    }

    fn matches(&self, line: &str, domain: &str) -> bool {
        match self {
            MatchMode::Substring => line.contains(domain),
            MatchMode::Exact => {
                let fields = line.split('#').next().unwrap_or_default();
                fields.split_whitespace().skip(1).any(|host| host == domain)
            }
        }
    }
}

/// The hosts line that blocks `domain`, without its newline
pub fn block_entry(domain: &str) -> String {
    format!("{} {}", BLOCK_ADDRESS, domain)
}

/// Remove every line referencing one of `domains`.
///
/// Lines are split on `'\n'` only, so untouched lines keep their exact
/// bytes, including any `'\r'` and the trailing newline of the table.
pub fn filter_table(content: &str, domains: &[String], mode: MatchMode) -> String {
    content
        .split('\n')
        .filter(|line| !mode.matches_any(line, domains))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Appends block entries to, and strips them from, the hosts table
pub struct HostsEditor<F: CacheFlush> {
    path: PathBuf,
    settle_delay: Duration,
    match_mode: MatchMode,
    flusher: F,
}

impl<F: CacheFlush> HostsEditor<F> {
    /// Create an editor for the table at `path`
    pub fn new(path: impl Into<PathBuf>, flusher: F) -> Self {
        Self {
            path: path.into(),
            settle_delay: DEFAULT_SETTLE_DELAY,
            match_mode: MatchMode::default(),
            flusher,
        }
    }

    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    pub fn flusher(&self) -> &F {
        &self.flusher
    }

    /// Append `127.0.0.1 <domain>` to the table, then flush the DNS cache.
    ///
    /// An I/O failure aborts before any flush. A flush failure is returned
    /// as-is; the entry stays in the table.
    pub fn block(&self, domain: &str) -> Result<()> {
        if domain.is_empty() {
            return Err(Error::EmptyDomain);
        }

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::hosts_io(HostsAction::Open, &self.path, e))?;

        let mut entry = String::new();
        if !ends_with_newline(&mut file).map_err(|e| Error::hosts_io(HostsAction::Read, &self.path, e))? {
            entry.push('\n');
        }
        entry.push_str(&block_entry(domain));
        entry.push('\n');

        file.write_all(entry.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| Error::hosts_io(HostsAction::Write, &self.path, e))?;
        drop(file);

        info!("Blocked {} in {}", domain, self.path.display());
        self.settle_and_flush()
    }

    /// Rewrite the table without any line referencing `domains`, then flush.
    ///
    /// Runs the full read, rewrite and flush cycle even for an empty list.
    pub fn unblock_all(&self, domains: &[String]) -> Result<()> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| Error::hosts_io(HostsAction::Read, &self.path, e))?;

        let filtered = filter_table(&content, domains, self.match_mode);
        let removed = content.split('\n').count() - filtered.split('\n').count();

        fs::write(&self.path, filtered)
            .map_err(|e| Error::hosts_io(HostsAction::Write, &self.path, e))?;

        info!(
            "Removed {} line(s) for {} domain(s) from {}",
            removed,
            domains.len(),
            self.path.display()
        );
        self.settle_and_flush()
    }

    fn settle_and_flush(&self) -> Result<()> {
        if !self.settle_delay.is_zero() {
            thread::sleep(self.settle_delay);
        }
        self.flusher.flush()
    }
}

/// True when the file is empty or its last byte is a newline
fn ends_with_newline(file: &mut File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
