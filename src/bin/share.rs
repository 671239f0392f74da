use anyhow::{Context, Result};
use clap::Parser;
use dotenvy::dotenv;
use log::{debug, info};
use std::process::ExitCode;

use discord_share::commands::cli::log_level;
use discord_share::commands::{
    non_interactive, run_share, Cli, ShareContext, ShareInvocation, ShareOutcome,
};
use discord_share::core::{Severity, ShareConfig};
use discord_share::features::share::read_source;

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenv().ok();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let mut config =
        ShareConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let args = cli.command.share_args();
    args.apply(&mut config);

    // Logger first: validation reports through it
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level(cli.verbose, &config.log_level)),
    )
    .init();

    info!("Starting discord-share v{}", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &cli.config {
        debug!("Loaded configuration from {}", path.display());
    }
    config.validate().context("Invalid configuration")?;
    debug!("Share mode: {:?}", config.mode);

    let ctx = if args.yes {
        non_interactive(config)
    } else {
        ShareContext::with_defaults(config)
    };

    // Reading the document is part of the share: its failures are reported like any other
    let result = match read_source(&args.path, cli.command.selection()).await {
        Ok(source) => {
            let invocation = ShareInvocation {
                source,
                comment: args.comment.clone(),
                dry_run: args.dry_run,
            };
            run_share(&ctx, invocation).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(outcome) => {
            if let ShareOutcome::Preview { payloads } = &outcome {
                for payload in payloads {
                    println!("{}", serde_json::to_string_pretty(payload)?);
                }
            }
            println!("{}", outcome.message());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let message = e.user_message();
            match e.severity() {
                Severity::Silent => {
                    info!("{e}");
                    Ok(ExitCode::SUCCESS)
                }
                Severity::Info => {
                    println!("{}", message.unwrap_or_default());
                    Ok(ExitCode::SUCCESS)
                }
                Severity::Error => {
                    debug!("Share failed: {e:?}");
                    eprintln!("{}", message.unwrap_or_default());
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}
