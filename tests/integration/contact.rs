//! Contact form submission scenarios

use crate::common::{ScriptedSubmitter, measured_app, screen};
use folio::app::{App, PageFocus};
use folio::contact::{ContactFormData, Field, SubmitError, SubmitState};
use folio::tui::handle_key_event;
use pretty_assertions::assert_eq;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};

fn fill(app: &mut App, field: Field, text: &str) {
    app.set_focus(PageFocus::Field(field));
    for c in text.chars() {
        handle_key_event(app, KeyCode::Char(c), KeyModifiers::NONE);
    }
}

fn fill_valid(app: &mut App) {
    fill(app, Field::Name, "Jane <i>Doe</i>");
    fill(app, Field::Email, "jane@x.com");
    fill(app, Field::Message, "this is long enough");
}

fn press_send(app: &mut App) {
    app.set_focus(PageFocus::Send);
    handle_key_event(app, KeyCode::Enter, KeyModifiers::NONE);
}

#[test]
fn test_valid_submission_goes_idle_submitting_submitted() -> Result<(), Box<dyn std::error::Error>>
{
    let (submitter, release) = ScriptedSubmitter::new();
    let (mut app, _terminal) = measured_app(submitter.clone(), 100, 30)?;
    fill_valid(&mut app);
    assert_eq!(app.contact().state(), SubmitState::Idle);
    assert!(app.contact().can_submit());

    press_send(&mut app);
    assert_eq!(app.contact().state(), SubmitState::Submitting);

    // Nothing the user does re-enables the control while the request is out.
    for _ in 0..3 {
        app.on_tick();
        press_send(&mut app);
        assert!(!app.contact().can_submit());
        assert_eq!(app.contact().state(), SubmitState::Submitting);
    }

    release.send(Ok(()))?;
    assert!(app.wait_for_submission());

    assert_eq!(app.contact().state(), SubmitState::Submitted);
    assert!(!app.contact().can_submit());
    assert_eq!(
        submitter.sent(),
        vec![ContactFormData {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            message: "this is long enough".to_string(),
        }]
    );
    Ok(())
}

#[test]
fn test_transport_failure_returns_to_idle_without_errors() -> Result<(), Box<dyn std::error::Error>>
{
    let (submitter, release) = ScriptedSubmitter::new();
    let (mut app, mut terminal) = measured_app(submitter.clone(), 100, 30)?;
    fill_valid(&mut app);
    press_send(&mut app);

    release.send(Err(SubmitError::Status(503)))?;
    assert!(app.wait_for_submission());

    assert_eq!(app.contact().state(), SubmitState::Idle);
    assert!(app.contact().errors().is_empty());
    assert!(app.contact().can_submit());
    assert!(app.contact().delivery_failed());
    assert_eq!(app.announcement(), Some("Message could not be sent"));

    app.scroll_to_edge(true);
    terminal.draw(|frame| folio::tui::render(frame, &mut app))?;
    assert!(
        screen(&terminal)
            .iter()
            .any(|row| row.contains("Your message could not be sent"))
    );

    // A retry goes out with the same values.
    press_send(&mut app);
    release.send(Ok(()))?;
    assert!(app.wait_for_submission());
    assert_eq!(app.contact().state(), SubmitState::Submitted);
    assert_eq!(submitter.sent().len(), 2);
    Ok(())
}

#[test]
fn test_invalid_submission_never_reaches_submitter() -> Result<(), Box<dyn std::error::Error>> {
    let (submitter, _release) = ScriptedSubmitter::new();
    let (mut app, _terminal) = measured_app(submitter.clone(), 100, 30)?;
    fill(&mut app, Field::Name, "Jane");
    fill(&mut app, Field::Email, "jane@x.com");
    fill(&mut app, Field::Message, "short");

    press_send(&mut app);

    assert_eq!(app.contact().state(), SubmitState::Idle);
    assert_eq!(app.contact().errors().len(), 1);
    assert!(app.contact().errors().contains(Field::Message));
    assert_eq!(app.focus(), Some(PageFocus::Field(Field::Message)));
    assert!(!app.is_submitting());
    assert!(submitter.sent().is_empty());
    Ok(())
}

#[test]
fn test_fields_are_read_only_while_submitting() -> Result<(), Box<dyn std::error::Error>> {
    let (submitter, release) = ScriptedSubmitter::new();
    let (mut app, _terminal) = measured_app(submitter, 100, 30)?;
    fill_valid(&mut app);
    press_send(&mut app);

    fill(&mut app, Field::Name, "zzz");
    assert_eq!(app.contact().data().name, "Jane Doe");

    release.send(Ok(()))?;
    assert!(app.wait_for_submission());
    Ok(())
}
