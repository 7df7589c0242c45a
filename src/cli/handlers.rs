// src/cli/handlers.rs
use anyhow::Context;
use console::style;
use inquire::Password;

use crate::core::config::Config;
use crate::generators;
use crate::meter;
use crate::models::{StrengthLabel, StrengthReport};

use super::CliCommand;

// One-shot command execution (no menu, no server)
pub fn run_command(command: CliCommand, config: &Config) -> anyhow::Result<()> {
    match command {
        CliCommand::Check { password } => {
            let password = match password {
                Some(pwd) => pwd,
                None => Password::new("Enter the password to check:")
                    .with_display_mode(inquire::PasswordDisplayMode::Hidden)
                    .without_confirmation()
                    .prompt()
                    .context("failed to read password")?,
            };

            print_report(&meter::evaluate(&password));
        }
        CliCommand::Generate { length } => {
            let length = length.unwrap_or(config.default_password_length);
            let password =
                generators::generate(length).context("failed to generate password")?;

            println!("{} {}", style("Generated password:").bold(), style(&password).green());
            print_report(&meter::evaluate(&password));
        }
    }

    Ok(())
}

pub fn print_report(report: &StrengthReport) {
    let label = match report.label {
        StrengthLabel::Strong => style(report.label.to_string()).green(),
        StrengthLabel::Moderate => style(report.label.to_string()).yellow(),
        _ => style(report.label.to_string()).red(),
    };

    println!("Score: {}/{} ({})", report.score, meter::MAX_SCORE, label);
    println!("{}", report.label.message());

    if !report.tips.is_empty() {
        println!("\nSuggestions:");
        for tip in &report.tips {
            println!("  - {}", tip);
        }
    }
}
