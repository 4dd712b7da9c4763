//! Color theme for the terminal UI
//!
//! Converts the `[ui.colors]` config strings into ratatui styles once, at
//! startup. Nothing else in the crate depends on styling.

use crate::config::{ColorConfig, UiConfig};
use crate::error::{Error, Result};
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

/// Resolved UI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub text: Color,
    pub subtle: Color,
}

impl Theme {
    /// Build a theme from the UI config, rejecting unparsable colors
    pub fn from_config(config: &UiConfig) -> Result<Self> {
        Self::from_colors(&config.colors)
    }

    pub fn from_colors(colors: &ColorConfig) -> Result<Self> {
        Ok(Self {
            primary: parse_color("primary", &colors.primary)?,
            success: parse_color("success", &colors.success)?,
            warning: parse_color("warning", &colors.warning)?,
            error: parse_color("error", &colors.error)?,
            text: parse_color("text", &colors.text)?,
            subtle: parse_color("subtle", &colors.subtle)?,
        })
    }

    /// Title bar: bold text on the primary color
    pub fn title(&self) -> Style {
        Style::new()
            .fg(self.text)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success(&self) -> Style {
        Style::new().fg(self.success)
    }

    pub fn warning(&self) -> Style {
        Style::new().fg(self.warning)
    }

    pub fn error(&self) -> Style {
        Style::new().fg(self.error)
    }

    pub fn subtle(&self) -> Style {
        Style::new().fg(self.subtle)
    }

    /// Input border and prompt marker
    pub fn accent(&self) -> Style {
        Style::new().fg(self.primary)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Rgb(0x2A, 0x9F, 0xD6),
            success: Color::Rgb(0x04, 0xB5, 0x75),
            warning: Color::Rgb(0xFF, 0xCC, 0x00),
            error: Color::Rgb(0xFF, 0x00, 0x33),
            text: Color::Rgb(0xFF, 0xFD, 0xF5),
            subtle: Color::Rgb(0x66, 0x66, 0x66),
        }
    }
}

fn parse_color(name: &str, value: &str) -> Result<Color> {
    Color::from_str(value.trim()).map_err(|_| Error::ConfigValidationFailed {
        field: format!("ui.colors.{}", name),
        reason: format!("'{}' is not a color", value),
    })
}
