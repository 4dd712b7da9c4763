//! UI state and key handling
//!
//! Kept free of terminal I/O so the event loop and tests can drive it with
//! plain key events.

use super::input::InputBox;
use super::messages::{Message, MessageLog};
use crate::config::UiConfig;
use crate::error::Error;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Rows moved by PgUp/PgDn
const PAGE: usize = 10;

/// What the event loop should do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    None,
    /// Block this (trimmed, non-empty) domain
    Submit(String),
    /// End the session
    Quit,
}

pub struct UiState {
    pub input: InputBox,
    pub log: MessageLog,
    pub title: String,
    pub placeholder: String,
    pub timestamps: bool,
}

impl UiState {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            input: InputBox::new(),
            log: MessageLog::new(),
            title: config.title.clone(),
            placeholder: config.placeholder.clone(),
            timestamps: config.timestamps,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> UiAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => return UiAction::Quit,
            KeyCode::Char('c') if ctrl => return UiAction::Quit,
            KeyCode::Enter => {
                if let Some(domain) = self.input.submit() {
                    return UiAction::Submit(domain);
                }
            }
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.input.insert(c)
            }
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            KeyCode::Up => self.log.scroll_up(1),
            KeyCode::Down => self.log.scroll_down(1),
            KeyCode::PageUp => self.log.scroll_up(PAGE),
            KeyCode::PageDown => self.log.scroll_down(PAGE),
            _ => {}
        }

        UiAction::None
    }

    /// Log the outcome of a block request
    pub fn record(&mut self, domain: &str, result: &Result<(), Error>) {
        let message = match result {
            Ok(()) => Message::blocked(domain),
            Err(e) if e.is_flush_error() => Message::flush_warning(domain, e),
            Err(e) => Message::error(domain, e),
        };
        self.log.push(message);
    }
}
