/// CLI argument parsing and headless command handling.
use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::{color, profile};

#[derive(Parser)]
#[command(
    name = "huebox",
    version,
    about = "Huebox - a terminal color playground with a live profile card"
)]
pub struct Cli {
    /// Profile service endpoint used by the profile card.
    #[arg(long, default_value = profile::DEFAULT_PROFILE_URL)]
    pub profile_url: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check whether a candidate string is an acceptable CSS color.
    Check { color: String },
    /// Fetch the profile record and print it.
    Profile,
}

/// Execute a headless command without entering the TUI.
pub fn run(command: Command, profile_url: &str) -> Result<()> {
    match command {
        Command::Check { color } => handle_check(&color),
        Command::Profile => handle_profile(profile_url),
    }
}

fn handle_check(candidate: &str) -> Result<()> {
    match color::parse_css_color(candidate) {
        Some((r, g, b)) => println!("'{candidate}' is a color: rgb({r}, {g}, {b})"),
        None => println!("'{candidate}' is not a recognized CSS color."),
    }
    Ok(())
}

fn handle_profile(url: &str) -> Result<()> {
    let user = profile::fetch_profile(url)?;
    println!("Name:    {}", user.name);
    println!("Email:   {}", user.email);
    println!(
        "Address: {}, {}, {}, {}",
        user.address.street, user.address.suite, user.address.city, user.address.zipcode
    );
    Ok(())
}
