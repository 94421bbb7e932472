//! CLI subcommands
//!
//! - `serve`: run the HTTP + WebSocket server
//! - `create-key`: mint an API key credential for clients of the feed

pub mod keys;
pub mod serve;

use clap::{Parser, Subcommand};

/// Blog platform API server
#[derive(Parser)]
#[command(name = "blog-platform-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,

    /// Generate an API key credential and print it once
    CreateKey(keys::CreateKeyArgs),
}
