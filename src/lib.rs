//! phocus - block distracting domains for the length of a focus session
//!
//! Domains entered during a session are redirected to the loopback address
//! in the system hosts file, and the OS resolver cache is flushed so the
//! change takes effect immediately. When the session ends every entry added
//! during it is removed again.
//!
//! ## Module Organization
//!
//! ### Core Functionality
//!
//! - [`hosts`] - Appending block entries to, and stripping them from, the hosts file
//! - [`dns`] - Per-OS resolver cache invalidation
//! - [`session`] - Bookkeeping of blocked domains and end-of-session teardown
//! - [`mod@error`] - Error types and Result aliases
//!
//! ### Supporting Modules
//!
//! - [`config`] - Configuration loading and validation
//! - [`platform`] - Hosts file location, privilege checks, command lookup
//! - [`ui`] - Terminal front end
//!
//! ## Quick Start
//!
//! ```no_run
//! use phocus::{DnsCacheFlusher, HostsEditor, Session};
//!
//! # fn main() -> phocus::Result<()> {
//! let hosts = "/etc/hosts";
//! let editor = HostsEditor::new(hosts, DnsCacheFlusher::for_current_platform(hosts));
//! let mut session = Session::new(editor);
//!
//! session.block("news.example.com")?;
//! // ... focus ...
//! session.terminate()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Platform Support
//!
//! - Linux: systemd-resolved, nscd, dnsmasq, NetworkManager, pdnsd or BIND,
//!   whichever is installed
//! - macOS: `dscacheutil` and `mDNSResponder`
//! - Windows: `ipconfig /flushdns`
//!
//! Editing the hosts file needs root (or an elevated prompt on Windows).

#[macro_use]
extern crate tracing;

pub mod config;
pub mod error;
pub mod platform;

// Core modules
pub mod dns;
pub mod hosts;
pub mod session;

// UI modules
pub mod ui;

// Re-exports for core functionality
pub use config::Config;
pub use dns::{CacheFlush, DnsCacheFlusher};
pub use error::{Error, Result};
pub use hosts::{HostsEditor, MatchMode};
pub use session::{Session, SessionState, Teardown};

// Convenience re-exports for common types
pub use config::loader::ConfigLoader;
pub use ui::Theme;

// Version information
/// The current version of phocus from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");
