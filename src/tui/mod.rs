//! Terminal User Interface for folio

mod input;
mod render;

pub use input::{handle_key_event, handle_mouse_event};
pub use render::render;

use crate::app::{App, Event, Handler, is_containing};
use anyhow::{Context, Result};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
    layout::Rect,
};
use std::io::{self, Stdout};
use std::panic::{self, PanicHookInfo};
use tracing::{error, info, warn};

/// Puts the terminal back the way it was found, including while unwinding
/// from a panic.
#[derive(Debug)]
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter the alternate screen")?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        warn!("Failed to disable raw mode: {e}");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture) {
        warn!("Failed to leave the alternate screen: {e}");
    }
}

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Send + Sync + 'static>;

/// Log every panic, then hand panics that no section guard will catch to
/// `previous` once `restore` has put the terminal back.
///
/// Contained section panics only go to the log; printing them would scribble
/// over the running UI.
fn chain_panic_hook(previous: PanicHook, restore: fn()) -> PanicHook {
    Box::new(move |panic| {
        let location = panic
            .location()
            .map_or_else(String::new, |l| format!(" at {}:{}", l.file(), l.line()));
        let message = panic
            .payload()
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| panic.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        error!("Panic{location}: {message}");

        if is_containing() {
            return;
        }
        restore();
        previous(panic);
    })
}

fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(chain_panic_hook(previous, restore_terminal));
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to.
pub fn run(mut app: App) -> Result<()> {
    install_panic_hook();
    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let event_handler = Handler::new(app.config.tick_rate());
    info!("TUI started");
    let result = run_loop(&mut terminal, &mut app, &event_handler);

    drop(guard);
    terminal.show_cursor()?;
    info!("TUI stopped");
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    event_handler: &Handler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match event_handler.next()? {
            Event::Tick => app.on_tick(),
            Event::Key(key) => handle_key_event(app, key.code, key.modifiers),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                handle_mouse_event(app, mouse, Rect::new(0, 0, size.width, size.height));
            }
            // The next draw picks up the new size and re-measures the page.
            Event::Resize(_, _) => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
