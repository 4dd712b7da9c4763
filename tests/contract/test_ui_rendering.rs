//! Contract Tests for UI Rendering
//!
//! Render the screen into ratatui's `TestBackend` and check what a user
//! would see, driving the state through key events where possible.

use phocus::config::UiConfig;
use phocus::error::HostsAction;
use phocus::ui::{view, Theme, UiAction, UiState};
use phocus::Error;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;
use ratatui::Terminal;

fn render(state: &UiState, theme: &Theme) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(72, 12)).unwrap();
    terminal.draw(|frame| view::draw(frame, state, theme)).unwrap();
    terminal
}

fn screen_rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

fn press(state: &mut UiState, code: KeyCode) -> UiAction {
    state.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_initial_screen() {
    let state = UiState::new(&UiConfig::default());
    let terminal = render(&state, &Theme::default());
    let rows = screen_rows(&terminal);

    assert!(rows[0].starts_with(" P H O C U S "));
    let screen = rows.join("\n");
    assert!(screen.contains(view::WAITING_TEXT));
    assert!(screen.contains("> Enter domain to block (e.g., example.com)"));
    assert_eq!(rows.last().unwrap().trim_end(), view::HELP_TEXT);
}

#[test]
fn test_title_uses_theme_colors() {
    let state = UiState::new(&UiConfig::default());
    let theme = Theme::default();
    let terminal = render(&state, &theme);

    let cell = &terminal.backend().buffer().content[1];
    assert_eq!(cell.symbol(), "P");
    assert_eq!(cell.bg, theme.primary);
    assert_eq!(cell.fg, theme.text);
}

#[test]
fn test_custom_title_and_placeholder() {
    let config = UiConfig {
        title: "DEEP WORK".to_string(),
        placeholder: "domain?".to_string(),
        ..UiConfig::default()
    };
    let state = UiState::new(&config);
    let screen = screen_rows(&render(&state, &Theme::default())).join("\n");

    assert!(screen.contains("DEEP WORK"));
    assert!(screen.contains("> domain?"));
}

#[test]
fn test_outcomes_are_listed_in_order() {
    let mut state = UiState::new(&UiConfig::default());
    for c in "a.com".chars() {
        press(&mut state, KeyCode::Char(c));
    }
    let domain = match press(&mut state, KeyCode::Enter) {
        UiAction::Submit(domain) => domain,
        other => panic!("unexpected action: {other:?}"),
    };

    state.record(&domain, &Ok(()));
    state.record(
        "b.com",
        &Err(Error::HostsIo {
            action: HostsAction::Open,
            path: "/etc/hosts".into(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        }),
    );
    state.record(
        "c.com",
        &Err(Error::UnsupportedPlatform {
            os: "haiku".to_string(),
        }),
    );

    let theme = Theme::default();
    let terminal = render(&state, &theme);
    let rows = screen_rows(&terminal);
    let screen = rows.join("\n");

    assert!(!screen.contains(view::WAITING_TEXT));
    let blocked = rows.iter().position(|r| r.contains("✓ Blocked: a.com")).unwrap();
    let failed = rows.iter().position(|r| r.contains("✗ Error blocking b.com")).unwrap();
    let warned = rows
        .iter()
        .position(|r| r.contains("! Blocked c.com, but the DNS cache was not flushed"))
        .unwrap();
    assert!(blocked < failed && failed < warned);

    // The placeholder is back after submitting
    assert!(screen.contains("> Enter domain to block"));

    // Outcome colors: find the check mark cell
    let width = terminal.backend().buffer().area.width as usize;
    let row = &terminal.backend().buffer().content[blocked * width..(blocked + 1) * width];
    let mark = row.iter().find(|cell| cell.symbol() == "✓").unwrap();
    assert_eq!(mark.fg, theme.success);
}

#[test]
fn test_theme_from_config_feeds_rendering() {
    let mut config = UiConfig::default();
    config.colors.primary = "magenta".to_string();
    let theme = Theme::from_config(&config).unwrap();
    let state = UiState::new(&config);
    let terminal = render(&state, &theme);

    assert_eq!(terminal.backend().buffer().content[1].bg, Color::Magenta);
}

#[test]
fn test_invalid_theme_color_is_rejected() {
    let mut config = UiConfig::default();
    config.colors.subtle = "not-a-color".to_string();

    assert!(matches!(
        Theme::from_config(&config),
        Err(Error::ConfigValidationFailed { .. })
    ));
}

#[test]
fn test_escape_quits() {
    let mut state = UiState::new(&UiConfig::default());
    assert_eq!(press(&mut state, KeyCode::Esc), UiAction::Quit);
}
