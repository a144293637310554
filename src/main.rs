mod args;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use args::Args;
use powerauth_rest::config::Config;
use powerauth_rest::inspect::{parse_document, render};

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration, command line wins over environment
    let mut config = Config::from_env().context("Failed to load configuration")?;
    if args.compact {
        config.output.pretty = false;
    }
    if let Some(status) = args.fallback_http_status {
        config.output.fallback_http_status = status;
        config.validate()?;
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(
        "powerauth-error-inspect v{}",
        env!("CARGO_PKG_VERSION")
    );

    let input = read_input(args.path.as_deref())?;
    let response = parse_document(&input, config.output.fallback_http_status)?;

    // into_result logs the classification itself
    let outcome = response.clone().into_result();
    debug!(success = outcome.is_ok(), "Classification complete");

    println!("{}", render(&response, config.output.pretty)?);

    Ok(())
}
