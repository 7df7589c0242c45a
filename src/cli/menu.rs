// src/cli/menu.rs
use inquire::{Password, Select, Text};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::core::config::Config;
use crate::generators;
use crate::meter;

use super::handlers::print_report;

const CHECK: &str = "🔍  Check password strength";
const GENERATE: &str = "🔐  Generate strong password";
const EXIT: &str = "❌  Exit";

pub async fn run_cli_menu(config: Config, should_exit: Arc<AtomicBool>) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║         🔑 PASSMETER CONSOLE         ║");
    println!("╚══════════════════════════════════════╝");

    while !should_exit.load(Ordering::SeqCst) {
        let options = vec![CHECK, GENERATE, EXIT];

        // Prompts block, so run them off the async runtime.
        let selection_result = tokio::task::spawn_blocking(move || {
            Select::new("Choose an option:", options)
                .with_help_message("Use arrow keys to navigate, Enter to select. Ctrl+C to exit.")
                .prompt_skippable()
        })
        .await?;

        if should_exit.load(Ordering::SeqCst) {
            break;
        }

        match selection_result {
            Ok(Some(CHECK)) => {
                let password = tokio::task::spawn_blocking(|| {
                    Password::new("Enter your password:")
                        .with_display_mode(inquire::PasswordDisplayMode::Hidden)
                        .without_confirmation()
                        .prompt()
                })
                .await?;

                match password {
                    Ok(password) => print_report(&meter::evaluate(&password)),
                    Err(e) => println!("❌ Failed to read password: {}", e),
                }
            }
            Ok(Some(GENERATE)) => {
                let default_length = config.default_password_length.to_string();
                let length_input = tokio::task::spawn_blocking(move || {
                    Text::new("Password length (8-20):")
                        .with_default(&default_length)
                        .prompt()
                })
                .await?;

                let length_input = match length_input {
                    Ok(input) => input,
                    Err(e) => {
                        println!("❌ Failed to read length: {}", e);
                        continue;
                    }
                };

                let length: usize = match length_input.trim().parse() {
                    Ok(n) => n,
                    Err(_) => {
                        println!("❌ Invalid number: {}", length_input);
                        continue;
                    }
                };

                match generators::generate(length) {
                    Ok(password) => {
                        println!("\nGenerated Password: {}", password);
                        print_report(&meter::evaluate(&password));
                    }
                    Err(e) => {
                        println!("❌ Failed to generate password: {}", e);
                    }
                }
            }
            Ok(Some(EXIT)) => {
                println!("👋 Goodbye!");
                should_exit.store(true, Ordering::SeqCst);
            }
            Ok(Some(_)) => {}
            Ok(None) => {
                // Prompt was skipped; pause briefly before redrawing the menu.
                if should_exit.load(Ordering::SeqCst) {
                    break;
                }
                thread::sleep(Duration::from_millis(100));
            }
            Err(e) => {
                println!("Error: {}", e);
                break;
            }
        }
    }

    Ok(())
}
