// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Command to execute
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// Address the API server binds to
    #[arg(long, env = "WEB_ADDRESS")]
    pub bind: Option<String>,

    /// API server port
    #[arg(long, env = "WEB_PORT")]
    pub api_port: Option<u16>,

    /// Run in API-only mode (no interactive menu)
    #[arg(long)]
    pub api_only: bool,
}
