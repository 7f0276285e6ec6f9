//! Profile service transport: one blocking GET, guarded delivery.
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::app::AppEvent;
use crate::types::UserRecord;

/// The fixed demo identity served by jsonplaceholder.
pub const DEFAULT_PROFILE_URL: &str = "https://jsonplaceholder.typicode.com/users/1";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("huebox/", env!("CARGO_PKG_VERSION"));

/// Ways the profile fetch can fail. None of these are fatal; each one
/// degrades to the Error card in the UI.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(reqwest::Error),
    #[error("profile service answered {0}")]
    BadStatus(StatusCode),
    #[error("could not decode profile response: {0}")]
    Decode(reqwest::Error),
}

/// Marks whether the UI that requested the fetch is still around to receive
/// the result. Cloned into the worker thread; released on teardown.
#[derive(Clone, Debug)]
pub struct FetchGuard(Arc<AtomicBool>);

impl FetchGuard {
    pub fn acquire() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn release(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Perform the single blocking GET against the profile service.
pub fn fetch_profile(url: &str) -> Result<UserRecord, FetchError> {
    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .map_err(FetchError::Transport)?;
    let response = client.get(url).send().map_err(FetchError::Transport)?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::BadStatus(status));
    }
    response.json::<UserRecord>().map_err(FetchError::Decode)
}

/// Issue the fetch on a worker thread and deliver the outcome to the event
/// loop. The result is dropped when the guard was released in the meantime;
/// the worker never touches application state itself.
pub fn spawn_fetch(
    url: String,
    guard: FetchGuard,
    events: Sender<AppEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        debug!(%url, "fetching profile");
        let outcome = match fetch_profile(&url) {
            Ok(user) => {
                info!(name = %user.name, "profile loaded");
                Ok(user)
            }
            Err(err) => {
                warn!(%err, "profile fetch failed");
                Err(err.to_string())
            }
        };
        if !guard.is_mounted() {
            debug!("profile fetch finished after teardown, dropping result");
            return;
        }
        // The receiver going away is equivalent to teardown.
        let _ = events.send(AppEvent::ProfileResult(outcome));
    })
}
