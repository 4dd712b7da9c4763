//! Known resolver cache flush mechanisms

use super::runner::display_command;

/// One command able to invalidate a resolver cache
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlushCandidate {
    /// Short label used in logs and errors
    pub name: &'static str,
    /// Executable that must exist on the search path
    pub program: &'static str,
    pub args: &'static [&'static str],
}

impl FlushCandidate {
    pub const fn new(name: &'static str, program: &'static str, args: &'static [&'static str]) -> Self {
        Self { name, program, args }
    }

    /// The full command line, e.g. `resolvectl flush-caches`
    pub fn command_line(&self) -> String {
        display_command(self.program, self.args)
    }
}

/// Linux mechanisms in priority order
pub const LINUX_CANDIDATES: &[FlushCandidate] = &[
    FlushCandidate::new("systemd-resolve", "systemd-resolve", &["--flush-caches"]),
    FlushCandidate::new("resolvectl", "resolvectl", &["flush-caches"]),
    FlushCandidate::new("service", "service", &["nscd", "restart"]),
    FlushCandidate::new("nscd", "nscd", &["-K"]),
    FlushCandidate::new("dnsmasq", "systemctl", &["restart", "dnsmasq"]),
    FlushCandidate::new("network-manager", "systemctl", &["restart", "NetworkManager"]),
    FlushCandidate::new("pdnsd", "systemctl", &["restart", "pdnsd"]),
    FlushCandidate::new("bind", "rndc", &["flush"]),
];
