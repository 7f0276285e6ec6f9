mod app;
mod cli;
mod color;
mod event;
mod logging;
mod profile;
mod tui;
mod types;
mod ui;

use std::sync::mpsc;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    if let Some(command) = cli_opts.command {
        return cli::run(command, &cli_opts.profile_url);
    }

    let _log_guard = logging::init()?;

    // The one fetch per application lifetime starts here; the guard keeps a
    // late response from being delivered after the loop has ended.
    let (worker_tx, worker_rx) = mpsc::channel();
    let guard = profile::FetchGuard::acquire();
    profile::spawn_fetch(cli_opts.profile_url, guard.clone(), worker_tx);

    let mut app = app::App::new();
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal, &worker_rx);

    guard.release();
    tui::restore()?;

    result
}
