//! `cipherkeep`: a local-first encrypted credential store and constrained
//! password generator. See `cli::run` for the command-line entry point.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod crypto;
pub mod entropy;
pub mod error;
pub mod generator;
pub mod json_io;
pub mod keys;
pub mod qr;
pub mod rng;
pub mod store;
pub mod types;

pub use error::{Error, Result};
