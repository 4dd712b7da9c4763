//! Application wiring
//!
//! Builds the session against the real hosts file and resolver, runs the
//! terminal UI, and always runs teardown afterwards, even when the UI fails.

use std::process::ExitCode;
use std::time::Duration;

use tracing::{error, info};

use phocus::platform::Platform;
use phocus::ui::{self, Theme};
use phocus::{CacheFlush, Config, DnsCacheFlusher, HostsEditor, Result, Session, Teardown};

pub fn run(config: Config) -> ExitCode {
    // Bad colors are a config error, reported before the hosts file is touched
    let theme = match Theme::from_config(&config.ui) {
        Ok(theme) => theme,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let hosts_path = Platform::paths().hosts_file();
    info!("Using hosts file {}", hosts_path.display());

    let editor = HostsEditor::new(&hosts_path, DnsCacheFlusher::for_current_platform(&hosts_path))
        .with_settle_delay(Duration::from_millis(config.hosts.settle_delay_ms))
        .with_match_mode(config.hosts.match_mode);
    let mut session = Session::new(editor).with_skip_empty_teardown(config.hosts.skip_empty_teardown);

    let ok = drive(&mut session, |session| ui::run(session, &config.ui, &theme));
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Run the front end over the session, then tear down whatever happened.
/// Returns false when either step failed.
fn drive<F, U>(session: &mut Session<F>, front_end: U) -> bool
where
    F: CacheFlush,
    U: FnOnce(&mut Session<F>) -> Result<()>,
{
    let mut ok = true;
    if let Err(e) = front_end(session) {
        error!("UI loop failed: {}", e);
        eprintln!("Error running program: {}", e);
        ok = false;
    }

    // Teardown runs regardless of how the UI ended
    finish(session) && ok
}

/// Tear the session down and report the outcome. Returns false on failure.
fn finish<F: CacheFlush>(session: &mut Session<F>) -> bool {
    match session.terminate() {
        Ok(Teardown::Unblocked(count)) => {
            info!("Teardown complete, {} domain(s) unblocked", count);
            println!("All domains have been unblocked.");
            true
        }
        Ok(Teardown::Skipped) => {
            println!("No domains were blocked.");
            true
        }
        Err(e) => {
            error!("Teardown failed: {}", e);
            eprintln!("Error unblocking domains: {}", e);
            false
        }
    }
}
