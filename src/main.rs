//! Unsplash Downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use unsplash_downloader::{
    cli::Args,
    config::{validate_config, Config},
    error::{exit_codes, Result},
    output::{
        print_banner, print_config_summary, print_error, print_info, print_run_summary,
        print_warning,
    },
    pipeline::run_pipeline,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    print_info(&format!("Loading configuration from {}", args.config.display()));
    let mut config = Config::load(&args.config)?;
    args.merge_into_config(&mut config);
    validate_config(&config)?;

    print_config_summary(
        &config.querys,
        &config.downloader.wallpaper_directory.display().to_string(),
        &config.downloader.log_directory.display().to_string(),
    );

    if config.querys.is_empty() {
        print_warning("No queries configured; nothing to download");
    }

    let summary = run_pipeline(&config).await?;
    print_run_summary(&summary);

    Ok(())
}
