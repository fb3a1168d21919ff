//! CLI entry point (§6): argument parsing, path resolution, and dispatch
//! to the per-command handlers in `commands`.

pub mod args;
pub mod commands;
mod prompt;

use anyhow::Result;
use clap::Parser;

use args::{Cli, Command};
use prompt::Prompt;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let path = match cli.file {
        Some(path) => path,
        None => crate::config::default_database_path()?,
    };

    let mut prompt = Prompt::stdin();

    match cli.command {
        Command::Init { stretch, link } => commands::init(&mut prompt, &path, stretch, link),
        Command::Add {
            login,
            realm,
            note,
            no_copy,
            gen,
        } => commands::add(&mut prompt, &path, login, realm, note, no_copy, gen),
        Command::Copy { query } => commands::copy(&mut prompt, &path, &query),
        Command::Edit { query } => commands::edit(&mut prompt, &path, &query),
        Command::Del { query } => commands::del(&mut prompt, &path, &query),
        Command::Qr { query } => commands::qr(&mut prompt, &path, &query),
        Command::List => commands::list(&mut prompt, &path),
        Command::Import { file } => commands::import(&mut prompt, &path, file),
        Command::Export { file, compact } => commands::export(&mut prompt, &path, file, compact),
        Command::Master { stretch } => commands::master(&mut prompt, &path, stretch),
    }
}
