//! Project modal focus trap and scroll lock scenarios

use crate::common::{ScriptedSubmitter, measured_app};
use folio::app::PageFocus;
use folio::focus::ModalSession;
use folio::nav::Section;
use folio::tui::{handle_key_event, handle_mouse_event};
use pretty_assertions::assert_eq;
use ratatui::crossterm::event::{KeyCode, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

#[test]
fn test_tab_stays_inside_modal_and_esc_restores_offset() -> Result<(), Box<dyn std::error::Error>>
{
    let (submitter, _release) = ScriptedSubmitter::new();
    let (mut app, _terminal) = measured_app(submitter, 100, 30)?;
    app.go_to_section(Section::Projects);
    app.set_focus(PageFocus::Project(1));
    let before = app.viewport().offset();
    assert!(before > 0);

    handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);
    let members = app
        .modal()
        .map(|m| m.trap().members().to_vec())
        .ok_or("modal did not open")?;

    for _ in 0..10 {
        handle_key_event(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        let focused = app.modal().map(ModalSession::focused).ok_or("modal closed")?;
        assert!(members.contains(&focused));
        assert_eq!(app.focus(), Some(PageFocus::Project(1)));
    }
    for _ in 0..4 {
        handle_key_event(&mut app, KeyCode::BackTab, KeyModifiers::NONE);
        assert!(app.modal().is_some());
    }

    // Scroll attempts while open go nowhere.
    handle_key_event(&mut app, KeyCode::Char('G'), KeyModifiers::NONE);
    let wheel = MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 1,
        row: 5,
        modifiers: KeyModifiers::NONE,
    };
    handle_mouse_event(&mut app, wheel, Rect::new(0, 0, 100, 30));
    app.on_tick();
    assert_eq!(app.viewport().offset(), before);

    handle_key_event(&mut app, KeyCode::Esc, KeyModifiers::NONE);

    assert!(app.modal().is_none());
    assert_eq!(app.viewport().offset(), before);
    assert_eq!(app.focus(), Some(PageFocus::Project(1)));
    Ok(())
}

#[test]
fn test_resize_while_open_still_restores_exact_offset() -> Result<(), Box<dyn std::error::Error>> {
    let (submitter, _release) = ScriptedSubmitter::new();
    let (mut app, mut terminal) = measured_app(submitter, 100, 30)?;
    app.scroll_to_edge(true);
    let before = app.viewport().offset();
    app.open_project(0);

    terminal.backend_mut().resize(100, 80);
    terminal.draw(|frame| folio::tui::render(frame, &mut app))?;
    assert_eq!(app.viewport().offset(), before);

    app.close_modal();
    assert_eq!(app.viewport().offset(), before);
    Ok(())
}
