use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::app::{handle_input, App};
use crate::report::{render_json, render_text};
use crate::ui;

/// Run the application in headless mode (no UI)
pub fn run_headless(app: &App, json: bool) -> Result<()> {
    let report = app.report()?;
    info!(city = %report.metrics.city, json, "rendering headless report");

    if json {
        println!("{}", render_json(&report)?);
    } else {
        print!("{}", render_text(&report));
    }

    Ok(())
}

/// Run the main application event loop
pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    while app.running {
        // Update animations
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if !matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            continue;
        }

        dispatch_event(terminal, app, event::read());
    }

    info!("event loop finished");
    Ok(())
}

/// Applies one terminal event to the app. Read errors are logged and skipped.
fn dispatch_event<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event: io::Result<Event>,
) {
    match event {
        // Windows reports releases too
        Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
            handle_input(app, key.code);
        }
        Ok(Event::Resize(width, height)) => {
            debug!(width, height, "terminal resized");
            if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
                warn!(error = %e, "redraw after resize failed");
            }
        }
        Ok(_) => {
            // Ignore other events
        }
        Err(e) => {
            warn!(error = %e, "failed to read terminal event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::UrbanAnalyzer;
    use crate::domain::Selection;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn fixture() -> (Terminal<TestBackend>, App) {
        let terminal = Terminal::new(TestBackend::new(160, 50)).unwrap();
        (terminal, App::new(Selection::default(), UrbanAnalyzer::default()))
    }

    #[test]
    fn read_errors_leave_the_dashboard_running() {
        let (mut terminal, mut app) = fixture();
        let failure = io::Error::new(io::ErrorKind::BrokenPipe, "input closed");
        dispatch_event(&mut terminal, &mut app, Err(failure));
        assert!(app.running);
    }

    #[test]
    fn key_presses_reach_the_input_handler() {
        let (mut terminal, mut app) = fixture();
        let quit = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        dispatch_event(&mut terminal, &mut app, Ok(Event::Key(quit)));
        assert!(!app.running);
    }

    #[test]
    fn resize_redraws_without_touching_state() {
        let (mut terminal, mut app) = fixture();
        dispatch_event(&mut terminal, &mut app, Ok(Event::Resize(160, 50)));
        assert!(app.running);
        assert!(app.status_message.is_empty());
    }
}
