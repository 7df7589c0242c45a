// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Check the strength of a password
    Check {
        /// Password to check (prompted for when omitted)
        password: Option<String>,
    },

    /// Generate a strong password
    Generate {
        /// Password length
        #[arg(long)]
        length: Option<usize>,
    },
}
