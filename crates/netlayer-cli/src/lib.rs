//! # netlayer-cli
//!
//! Command-line interface for netlayer.
//!
//! ## Commands
//!
//! - `netlayer networks` prints every resolved network
//! - `netlayer show <name>` prints one network, `--explain` shows where each setting came from
//! - `netlayer paths` shows which override files were found
//! - `netlayer init` writes an override file template

pub mod commands;

pub use commands::Cli;
