//! Clap argument definitions (§6). Flag names and defaults are grounded in
//! `examples/original_source/ward/add.go`'s `addCommand`; `clap` itself is
//! sourced from the pack's CLI-shaped reference manifests (`examples/
//! other_examples/manifests/{ronakgh97-ironkeys,skdas20-VaultX,
//! joojf-passworder}`), since the teacher carries no CLI parser at all.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cipherkeep", about = "Local-first encrypted credential store and password generator")]
pub struct Cli {
    /// Path to the credential database. Defaults to $WARDFILE or <home>/.ward.
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a new credential database.
    Init {
        #[arg(long, default_value_t = crate::cli::commands::DEFAULT_STRETCH)]
        stretch: u32,
        /// Link this database file to an existing one instead of creating fresh.
        #[arg(long)]
        link: Option<PathBuf>,
    },
    /// Add a new credential.
    Add {
        #[arg(long)]
        login: Option<String>,
        #[arg(long)]
        realm: Option<String>,
        #[arg(long)]
        note: Option<String>,
        #[arg(long)]
        no_copy: bool,
        #[command(flatten)]
        gen: GenArgs,
    },
    /// Copy a password to the clipboard.
    Copy { query: Vec<String> },
    /// Edit an existing credential.
    Edit { query: Vec<String> },
    /// Delete a stored credential.
    Del { query: Vec<String> },
    /// Print password formatted as a QR code.
    Qr { query: Vec<String> },
    /// Print a list of credentials.
    List,
    /// Import JSON-formatted credentials.
    Import {
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Export JSON-formatted credentials.
    Export {
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long)]
        compact: bool,
    },
    /// Update master password.
    Master {
        #[arg(long, default_value_t = crate::cli::commands::DEFAULT_STRETCH)]
        stretch: u32,
    },
}

/// Generator flags: `--gen` plus the full constraint surface (§6). Every
/// field besides `gen` itself is ignored unless `gen` is set.
#[derive(Args, Clone)]
pub struct GenArgs {
    #[arg(long)]
    pub gen: bool,

    #[arg(long)]
    pub length: Option<usize>,
    #[arg(long, default_value_t = 30)]
    pub min_length: usize,
    #[arg(long, default_value_t = 40)]
    pub max_length: usize,

    #[arg(long)]
    pub no_upper: bool,
    #[arg(long)]
    pub no_lower: bool,
    #[arg(long)]
    pub no_digit: bool,
    #[arg(long)]
    pub no_symbol: bool,
    #[arg(long)]
    pub no_similar: bool,

    /// Mix OS randomness with user-mashed keyboard noise before generating.
    #[arg(long)]
    pub paranoid: bool,

    #[arg(long, default_value_t = 0)]
    pub min_upper: usize,
    #[arg(long)]
    pub max_upper: Option<usize>,
    #[arg(long, default_value_t = 0)]
    pub min_lower: usize,
    #[arg(long)]
    pub max_lower: Option<usize>,
    #[arg(long, default_value_t = 0)]
    pub min_digit: usize,
    #[arg(long)]
    pub max_digit: Option<usize>,
    #[arg(long, default_value_t = 0)]
    pub min_symbol: usize,
    #[arg(long)]
    pub max_symbol: Option<usize>,

    #[arg(long, default_value = "")]
    pub exclude: String,
}
