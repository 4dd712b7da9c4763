//! Terminal UI
//!
//! A ratatui front end over a [`Session`]: the user types domains, each one
//! is blocked as it is submitted, and the loop returns when the user quits.
//! Teardown is left to the caller so it also runs when the loop fails.
//!
//! This is the only module that knows about ratatui and crossterm.

pub mod colors;
pub mod input;
pub mod messages;
pub mod state;
pub mod view;

// Re-exports for convenience
pub use colors::Theme;
pub use input::InputBox;
pub use messages::{Message, MessageKind, MessageLog};
pub use state::{UiAction, UiState};

use crate::config::UiConfig;
use crate::dns::CacheFlush;
use crate::error::Result;
use crate::session::Session;
use ratatui::backend::Backend;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::Terminal;

/// Run the UI in the alternate screen until the user quits.
///
/// The terminal is restored before returning, whether or not the loop
/// failed.
pub fn run<F: CacheFlush>(session: &mut Session<F>, config: &UiConfig, theme: &Theme) -> Result<()> {
    let mut terminal = ratatui::try_init()?;
    debug!("Terminal UI started");

    let result = event_loop(&mut terminal, session, UiState::new(config), theme);

    if let Err(e) = ratatui::try_restore() {
        error!("Failed to restore terminal: {}", e);
        result?;
        return Err(e.into());
    }
    debug!("Terminal UI stopped");
    result
}

fn event_loop<B: Backend, F: CacheFlush>(
    terminal: &mut Terminal<B>,
    session: &mut Session<F>,
    mut state: UiState,
    theme: &Theme,
) -> Result<()> {
    loop {
        terminal.draw(|frame| view::draw(frame, &state, theme))?;

        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            // Resize and everything else just redraws
            _ => continue,
        };

        match state.handle_key(key) {
            UiAction::None => {}
            UiAction::Submit(domain) => {
                let result = session.block(&domain);
                state.record(&domain, &result);
            }
            UiAction::Quit => {
                info!("Quit requested with {} domain(s) blocked", session.blocked_domains().len());
                return Ok(());
            }
        }
    }
}
