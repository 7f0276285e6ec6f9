mod state;

use crossterm::event::KeyCode;

pub use state::App;

use crate::types::UserRecord;

/// Possible input events the app reacts to.
#[derive(Debug)]
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
    /// Outcome of the one profile fetch, delivered from the worker thread.
    ProfileResult(Result<UserRecord, String>),
}
