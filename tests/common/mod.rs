//! Common test utilities shared across integration tests

pub mod fixture;
pub mod submitter;

pub use fixture::ContentFixture;
pub use submitter::ScriptedSubmitter;

use folio::app::App;
use folio::config::Config;
use folio::content::ContentSource;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use std::sync::Arc;

/// An app over the embedded sample with reduced motion, measured once at
/// `width` x `height` so focus and navigation have a layout to work with.
pub fn measured_app(
    submitter: Arc<ScriptedSubmitter>,
    width: u16,
    height: u16,
) -> Result<(App, Terminal<TestBackend>), Box<dyn std::error::Error>> {
    let mut config = Config::default();
    config.reduced_motion = true;
    let mut app = App::new(config, ContentSource::Embedded, submitter);
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|frame| folio::tui::render(frame, &mut app))?;
    Ok((app, terminal))
}

/// Screen contents, one string per row.
pub fn screen(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(usize::from(buffer.area.width))
        .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect())
        .collect()
}
