//! Loading portfolio content from a directory

use crate::common::{ContentFixture, ScriptedSubmitter};
use folio::app::{App, Mode, Preview};
use folio::config::Config;
use folio::content::{ContentSource, PROJECTS_DOC};
use folio::tui::handle_key_event;
use pretty_assertions::assert_eq;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};

fn app_for(fixture: &ContentFixture) -> App {
    let (submitter, _release) = ScriptedSubmitter::new();
    let mut config = Config::default();
    config.reduced_motion = true;
    App::new(
        config,
        ContentSource::Directory(fixture.path().to_path_buf()),
        submitter,
    )
}

#[test]
fn test_directory_content_loads() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = ContentFixture::sample()?;
    let app = app_for(&fixture);

    assert!(matches!(app.mode(), Mode::Page));
    let titles: Vec<&str> = app
        .portfolio()
        .ok_or("not loaded")?
        .projects
        .iter()
        .map(|p| p.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Tallyho", "pgmirror", "Logship", "dotkit"]);
    Ok(())
}

#[test]
fn test_broken_document_then_reload() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = ContentFixture::sample()?;
    let good = std::fs::read_to_string(fixture.path().join(PROJECTS_DOC))?;
    fixture.write(PROJECTS_DOC, "[{\"id\": ")?;

    let mut app = app_for(&fixture);
    let Mode::LoadFailed(message) = app.mode() else {
        return Err("expected a load failure".into());
    };
    assert!(message.contains(PROJECTS_DOC));

    fixture.write(PROJECTS_DOC, &good)?;
    handle_key_event(&mut app, KeyCode::Char('r'), KeyModifiers::NONE);

    assert!(matches!(app.mode(), Mode::Page));
    assert!(app.portfolio().is_some());
    Ok(())
}

#[test]
fn test_previews_resolve_when_cards_come_into_view() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = ContentFixture::sample()?;
    fixture.touch("images/tallyho.png")?;
    let mut app = app_for(&fixture);
    let mut terminal = Terminal::new(TestBackend::new(100, 20))?;

    terminal.draw(|frame| folio::tui::render(frame, &mut app))?;
    assert!(app.previews().get("tallyho").is_none());

    app.go_to_section(folio::nav::Section::Projects);
    terminal.draw(|frame| folio::tui::render(frame, &mut app))?;

    assert_eq!(
        app.previews().get("tallyho"),
        Some(&Preview::Image(fixture.path().join("images/tallyho.png")))
    );
    assert_eq!(app.previews().get("pgmirror"), Some(&Preview::Placeholder));
    Ok(())
}
