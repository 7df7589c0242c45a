use clap::Parser;
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use passmeter::api;
use passmeter::cli::{self, Args};
use passmeter::core::config::Config;

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let mut config = Config::load();

    if let Some(bind) = args.bind {
        config.web_address = bind;
    }
    if let Some(port) = args.api_port {
        config.web_port = port;
    }

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .init();

    log::info!("🔑 Starting PassMeter - Password Strength Meter & Generator");

    // One-shot commands skip the server entirely
    if let Some(command) = args.command {
        return cli::handlers::run_command(command, &config)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()));
    }

    let should_exit = Arc::new(AtomicBool::new(false));

    {
        let should_exit = Arc::clone(&should_exit);
        ctrlc::set_handler(move || {
            log::info!("🔴 Ctrl+C received. Shutting down...");
            should_exit.store(true, Ordering::SeqCst);
            std::process::exit(0);
        })
        .expect("Failed to set Ctrl+C handler");
    }

    // API-only mode (blocks forever)
    if args.api_only {
        log::info!("API-only mode active. Interactive menu disabled.");
        return api::start_server(config).await;
    }

    // Start the API server on a background thread with its own runtime,
    // then hand the terminal to the interactive menu.
    {
        let server_config = config.clone();
        std::thread::spawn(move || match tokio::runtime::Runtime::new() {
            Ok(rt) => {
                rt.block_on(async {
                    if let Err(e) = api::start_server(server_config).await {
                        log::error!("API server error: {}", e);
                    }
                });
            }
            Err(e) => {
                log::error!("Failed to create tokio runtime for API server: {}", e);
            }
        });
        println!(
            "🚀 Web UI available on http://{}:{}",
            config.web_address, config.web_port
        );
    }

    cli::menu::run_cli_menu(config, should_exit)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    log::info!("✅ PassMeter shutdown complete.");

    Ok(())
}
