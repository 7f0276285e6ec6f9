use std::sync::mpsc::Receiver;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::app::{App, AppEvent};

/// Polls for crossterm events and maps them to `AppEvent`s.
pub fn poll(timeout: Duration) -> Result<Option<AppEvent>> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(None);
            }
            return Ok(Some(AppEvent::KeyPress(key.code)));
        }
    }
    Ok(Some(AppEvent::Tick))
}

/// Runs the main event loop. Profile results arrive through `worker_events`;
/// all state mutation happens here, on the UI thread.
pub fn run(
    app: &mut App,
    terminal: &mut crate::tui::Terminal,
    worker_events: &Receiver<AppEvent>,
) -> Result<()> {
    let tick_rate = Duration::from_millis(250);

    while app.running {
        terminal.draw(|frame| crate::ui::draw(frame, app))?;

        while let Ok(event) = worker_events.try_recv() {
            app.update(event);
        }
        if let Some(event) = poll(tick_rate)? {
            app.update(event);
        }
    }
    Ok(())
}
