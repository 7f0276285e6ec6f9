use chrono::{DateTime, Local};
use crossterm::event::KeyCode;
use tracing::debug;

use crate::color;
use crate::color::{ColorGrammar, CssGrammar};
use crate::types::{ProfileState, UserRecord};

use super::AppEvent;

/// The top-level application state. Each panel's state lives here and is
/// owned exclusively; nothing is shared or persisted.
pub struct App {
    pub running: bool,
    /// Message panel: whether the welcome line is shown.
    pub show_message: bool,
    /// Color panel: the raw candidate text, replaced on every keystroke.
    pub color_candidate: String,
    /// Whether keystrokes currently flow into the candidate.
    pub color_input_active: bool,
    /// Profile panel lifecycle. `Error` and `Loaded` are terminal.
    pub profile: ProfileState,
    pub profile_loaded_at: Option<DateTime<Local>>,
    pub status: Option<String>,
    grammar: Box<dyn ColorGrammar>,
}

impl App {
    pub fn new() -> Self {
        Self::with_grammar(Box::new(CssGrammar))
    }

    /// Build the app with a specific color grammar behind the preview.
    pub fn with_grammar(grammar: Box<dyn ColorGrammar>) -> Self {
        Self {
            running: true,
            show_message: false,
            color_candidate: String::new(),
            color_input_active: false,
            profile: ProfileState::Loading,
            profile_loaded_at: None,
            status: None,
            grammar,
        }
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => {}
            AppEvent::KeyPress(key) => self.handle_key(key),
            AppEvent::ProfileResult(outcome) => self.apply_profile_result(outcome),
        }
    }

    /// Validity of the current candidate, derived fresh on every call.
    pub fn candidate_is_valid(&self) -> bool {
        self.grammar.is_valid(&self.color_candidate)
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.color_input_active {
            self.handle_color_input_key(key);
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('m') => self.show_message = !self.show_message,
            KeyCode::Char('e') | KeyCode::Char('/') => {
                self.color_input_active = true;
                self.clear_status();
            }
            KeyCode::Char('s') => {
                self.color_candidate = color::random_color().to_string();
                self.status = Some(format!("Suggested '{}'.", self.color_candidate));
            }
            KeyCode::Char('c') => {
                self.color_candidate.clear();
                self.clear_status();
            }
            _ => {}
        }
    }

    fn handle_color_input_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Enter => {
                self.color_input_active = false;
            }
            KeyCode::Backspace | KeyCode::Delete => {
                self.color_candidate.pop();
            }
            KeyCode::Char(ch) => {
                if ch.is_control() {
                    return;
                }
                self.color_candidate.push(ch);
            }
            _ => {}
        }
    }

    fn apply_profile_result(&mut self, outcome: Result<UserRecord, String>) {
        // Loaded and Error are terminal; late or duplicate results are dropped.
        if self.profile.is_terminal() {
            debug!("ignoring profile result in terminal state");
            return;
        }
        self.profile = match outcome {
            Ok(user) => {
                self.profile_loaded_at = Some(Local::now());
                ProfileState::Loaded(user)
            }
            Err(message) => ProfileState::Error(message),
        };
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Address;

    fn fixture_user() -> UserRecord {
        UserRecord {
            name: "Leanne Graham".to_string(),
            email: "Sincere@april.biz".to_string(),
            address: Address {
                street: "Kulas Light".to_string(),
                suite: "Apt. 556".to_string(),
                city: "Gwenborough".to_string(),
                zipcode: "92998-3874".to_string(),
            },
        }
    }

    #[test]
    fn starts_loading_with_empty_candidate() {
        let app = App::new();
        assert_eq!(app.profile, ProfileState::Loading);
        assert!(app.color_candidate.is_empty());
        assert!(!app.show_message);
    }

    #[test]
    fn successful_result_reaches_loaded() {
        let mut app = App::new();
        app.update(AppEvent::ProfileResult(Ok(fixture_user())));
        assert_eq!(app.profile, ProfileState::Loaded(fixture_user()));
        assert!(app.profile_loaded_at.is_some());
    }

    #[test]
    fn failed_result_reaches_error_with_message() {
        let mut app = App::new();
        app.update(AppEvent::ProfileResult(Err("request failed".to_string())));
        match &app.profile {
            ProfileState::Error(message) => assert!(!message.is_empty()),
            other => panic!("expected Error, got {other:?}"),
        }
    }

    #[test]
    fn terminal_states_ignore_late_results() {
        let mut app = App::new();
        app.update(AppEvent::ProfileResult(Err("boom".to_string())));
        app.update(AppEvent::ProfileResult(Ok(fixture_user())));
        assert_eq!(app.profile, ProfileState::Error("boom".to_string()));

        let mut app = App::new();
        app.update(AppEvent::ProfileResult(Ok(fixture_user())));
        app.update(AppEvent::ProfileResult(Err("late".to_string())));
        assert_eq!(app.profile, ProfileState::Loaded(fixture_user()));
    }

    #[test]
    fn message_toggles() {
        let mut app = App::new();
        app.update(AppEvent::KeyPress(KeyCode::Char('m')));
        assert!(app.show_message);
        app.update(AppEvent::KeyPress(KeyCode::Char('m')));
        assert!(!app.show_message);
    }

    #[test]
    fn input_mode_captures_keystrokes() {
        let mut app = App::new();
        app.update(AppEvent::KeyPress(KeyCode::Char('e')));
        assert!(app.color_input_active);
        for ch in "blue".chars() {
            app.update(AppEvent::KeyPress(KeyCode::Char(ch)));
        }
        assert_eq!(app.color_candidate, "blue");
        assert!(app.candidate_is_valid());
        app.update(AppEvent::KeyPress(KeyCode::Backspace));
        assert_eq!(app.color_candidate, "blu");
        assert!(!app.candidate_is_valid());
        app.update(AppEvent::KeyPress(KeyCode::Esc));
        assert!(!app.color_input_active);
    }

    #[test]
    fn quit_keys_are_inert_while_editing() {
        let mut app = App::new();
        app.update(AppEvent::KeyPress(KeyCode::Char('e')));
        app.update(AppEvent::KeyPress(KeyCode::Char('q')));
        assert!(app.running);
        assert_eq!(app.color_candidate, "q");
    }

    #[test]
    fn suggestion_fills_a_valid_candidate() {
        let mut app = App::new();
        app.update(AppEvent::KeyPress(KeyCode::Char('s')));
        assert!(app.candidate_is_valid());
        app.update(AppEvent::KeyPress(KeyCode::Char('c')));
        assert!(app.color_candidate.is_empty());
    }

    #[test]
    fn swapped_grammar_drives_validity() {
        struct RejectAll;
        impl ColorGrammar for RejectAll {
            fn is_valid(&self, _candidate: &str) -> bool {
                false
            }
        }
        let mut app = App::with_grammar(Box::new(RejectAll));
        app.color_candidate = "blue".to_string();
        assert!(!app.candidate_is_valid());
    }
}
