//! Section navigation and scroll-spy scenarios

use crate::common::{ScriptedSubmitter, measured_app, screen};
use folio::app::App;
use folio::config::{Config, MIN_TICK_RATE_MS};
use folio::content::ContentSource;
use folio::nav::Section;
use folio::tui::{handle_key_event, handle_mouse_event};
use pretty_assertions::assert_eq;
use ratatui::crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use std::fs;
use std::time::{Duration, Instant};
use tempfile::TempDir;

#[test]
fn test_number_keys_jump_with_reduced_motion() -> Result<(), Box<dyn std::error::Error>> {
    let (submitter, _release) = ScriptedSubmitter::new();
    let (mut app, _terminal) = measured_app(submitter, 100, 30)?;

    for (key, section) in [
        ('3', Section::Skills),
        ('2', Section::About),
        ('5', Section::Contact),
        ('1', Section::Hero),
    ] {
        handle_key_event(&mut app, KeyCode::Char(key), KeyModifiers::NONE);
        let expected = format!("Navigated to {} section", section.label());
        assert_eq!(app.announcement(), Some(expected.as_str()));
        let top = app
            .layout()
            .sections
            .iter()
            .find(|b| b.section == section)
            .map(|b| b.top)
            .ok_or("section not laid out")?;
        assert_eq!(app.viewport().offset(), top.min(app.viewport().max_offset()));
    }
    Ok(())
}

#[test]
fn test_smooth_scroll_settles_and_spy_catches_up() -> Result<(), Box<dyn std::error::Error>> {
    let (submitter, _release) = ScriptedSubmitter::new();
    let (mut app, _terminal) = measured_app(submitter, 100, 30)?;
    app.config.reduced_motion = false;

    app.go_to_section(Section::Projects);
    assert_eq!(app.viewport().offset(), 0);

    let start = Instant::now();
    let mut frames = 0;
    while app.viewport().target().is_some() {
        frames += 1;
        app.tick_at(start + Duration::from_millis(10 * frames));
        assert!(frames < 100, "scroll never settled");
    }
    assert!(frames > 1);

    // The trailing evaluation lands once the throttle interval has passed.
    app.tick_at(start + Duration::from_secs(2));
    assert_eq!(app.active_section(), Section::Projects);
    Ok(())
}

#[test]
fn test_header_click_navigates_and_highlights() -> Result<(), Box<dyn std::error::Error>> {
    let (submitter, _release) = ScriptedSubmitter::new();
    let (mut app, mut terminal) = measured_app(submitter, 100, 30)?;
    let header: Vec<char> = screen(&terminal)[0].chars().collect();
    let label: Vec<char> = " Contact ".chars().collect();
    let column = header
        .windows(label.len())
        .position(|window| window == label.as_slice())
        .ok_or("Contact label not drawn")?;

    let click = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: u16::try_from(column + 1)?,
        row: 0,
        modifiers: KeyModifiers::NONE,
    };
    handle_mouse_event(&mut app, click, Rect::new(0, 0, 100, 30));
    terminal.draw(|frame| folio::tui::render(frame, &mut app))?;

    assert_eq!(app.active_section(), Section::Contact);
    assert!(screen(&terminal)[29].contains("Contact"));
    Ok(())
}

#[test]
fn test_bracket_keys_step_between_sections() -> Result<(), Box<dyn std::error::Error>> {
    let (submitter, _release) = ScriptedSubmitter::new();
    let (mut app, _terminal) = measured_app(submitter, 100, 30)?;

    handle_key_event(&mut app, KeyCode::Char(']'), KeyModifiers::NONE);
    assert_eq!(app.active_section(), Section::About);

    handle_key_event(&mut app, KeyCode::Char('['), KeyModifiers::NONE);
    // A scroll inside the throttle window is evaluated on a later tick.
    app.tick_at(Instant::now() + Duration::from_secs(2));
    assert_eq!(app.active_section(), Section::Hero);
    Ok(())
}

#[test]
fn test_extreme_config_values_still_draw_and_navigate() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{"scroll_spy_offset": 65535, "tick_rate_ms": 0, "submit_timeout_secs": 0, "reduced_motion": true}"#,
    )?;
    let config = Config::load_from(&path)?;
    assert_eq!(config.tick_rate(), Duration::from_millis(MIN_TICK_RATE_MS));

    let (submitter, _release) = ScriptedSubmitter::new();
    let mut app = App::new(config, ContentSource::Embedded, submitter);
    let mut terminal = Terminal::new(TestBackend::new(100, 30))?;
    terminal.draw(|frame| folio::tui::render(frame, &mut app))?;

    // The probe lands below every section, so the spy keeps its first answer.
    handle_key_event(&mut app, KeyCode::Char('5'), KeyModifiers::NONE);
    app.tick_at(Instant::now() + Duration::from_secs(2));
    terminal.draw(|frame| folio::tui::render(frame, &mut app))?;
    assert!(app.viewport().offset() > 0);
    assert_eq!(app.active_section(), Section::Hero);
    Ok(())
}
