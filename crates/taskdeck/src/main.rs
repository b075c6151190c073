/*
[INPUT]:  CLI arguments, YAML configuration file, environment, OS shutdown signals
[OUTPUT]: Terminal UI session or one-shot task command
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or shutdown handling
*/

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use taskdeck::TaskdeckConfig;
use taskdeck::cli::{Cli, run_command};
use taskdeck::logging::{LOG_BUFFER_CAPACITY, LogBuffer, init_cli_tracing, init_tui_tracing};
use taskdeck_adapter::TaskClient;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let config = TaskdeckConfig::load(args.config_path.as_deref(), &args.overrides())
        .context("load config")?;

    if args.print_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    match args.command {
        Some(command) => {
            init_cli_tracing(&config.log_level)?;
            let client =
                TaskClient::with_config(config.client_config()).context("create task client")?;
            let mut stdout = io::stdout().lock();
            run_command(command, &client, config.enable_execute, &mut stdout).await
        }
        None => {
            let log_buffer = LogBuffer::handle(LOG_BUFFER_CAPACITY);
            let _log_guard =
                init_tui_tracing(&config.log_level, log_buffer.clone(), config.log_file.as_deref())?;
            info!(
                base_url = %config.base_url,
                enable_execute = config.enable_execute,
                "starting taskdeck"
            );

            let shutdown = CancellationToken::new();
            setup_signal_handlers(shutdown.clone());
            taskdeck::tui::run_tui(&config, log_buffer, shutdown).await
        }
    }
}

fn setup_signal_handlers(shutdown: CancellationToken) {
    let shutdown_clone = shutdown.clone();
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to install SIGINT handler");
            return;
        }
        info!("received SIGINT");
        shutdown_clone.cancel();
    });

    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        tokio::spawn(async move {
            match signal(SignalKind::terminate()) {
                Ok(mut stream) => {
                    stream.recv().await;
                    info!("received SIGTERM");
                    shutdown.cancel();
                }
                Err(err) => {
                    warn!(error = %err, "failed to install SIGTERM handler");
                }
            }
        });
    }
}
