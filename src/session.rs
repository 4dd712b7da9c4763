//! Session controller
//!
//! Records every domain blocked during one interactive run and removes them
//! all from the hosts table when the run ends.

use crate::dns::CacheFlush;
use crate::error::{Error, Result};
use crate::hosts::HostsEditor;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Accepting block requests
    #[default]
    Active,
    /// Teardown has run
    Terminated,
}

/// What teardown did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Teardown {
    /// The table was rewritten without the session's domains
    Unblocked(usize),
    /// Nothing was blocked, so the table was left alone
    Skipped,
}

pub struct Session<F: CacheFlush> {
    editor: HostsEditor<F>,
    blocked: Vec<String>,
    state: SessionState,
    skip_empty_teardown: bool,
}

impl<F: CacheFlush> Session<F> {
    pub fn new(editor: HostsEditor<F>) -> Self {
        Self {
            editor,
            blocked: Vec::new(),
            state: SessionState::Active,
            skip_empty_teardown: true,
        }
    }

    /// Whether teardown of a session with nothing blocked skips the rewrite
    /// and flush. Enabled by default.
    pub fn with_skip_empty_teardown(mut self, skip: bool) -> Self {
        self.skip_empty_teardown = skip;
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Domains recorded so far, in the order they were entered
    pub fn blocked_domains(&self) -> &[String] {
        &self.blocked
    }

    pub fn editor(&self) -> &HostsEditor<F> {
        &self.editor
    }

    /// Block a domain for the rest of the session.
    ///
    /// The domain is recorded before the editor runs, so a failed attempt is
    /// still cleaned up at teardown.
    pub fn block(&mut self, domain: &str) -> Result<()> {
        if self.state == SessionState::Terminated {
            return Err(Error::SessionTerminated);
        }

        let domain = domain.trim();
        if domain.is_empty() {
            return Err(Error::EmptyDomain);
        }

        self.blocked.push(domain.to_string());
        debug!("Recorded {} ({} in session)", domain, self.blocked.len());

        self.editor.block(domain).map_err(|e| {
            warn!("Blocking {} failed: {}", domain, e);
            e
        })
    }

    /// End the session, unblocking every recorded domain once.
    ///
    /// The session is terminated even when unblocking fails; the result is
    /// for display and is not retried.
    pub fn terminate(&mut self) -> Result<Teardown> {
        if self.state == SessionState::Terminated {
            return Err(Error::SessionTerminated);
        }
        self.state = SessionState::Terminated;

        if self.blocked.is_empty() && self.skip_empty_teardown {
            info!("No domains blocked this session; leaving hosts file untouched");
            return Ok(Teardown::Skipped);
        }

        info!("Unblocking {} domain(s)", self.blocked.len());
        self.editor.unblock_all(&self.blocked)?;
        Ok(Teardown::Unblocked(self.blocked.len()))
    }
}
