use anyhow::{bail, Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub pretty: bool,
    /// Used when an inspected document carries no `httpStatusCode`
    pub fallback_http_status: u16,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig {
                pretty: true,
                fallback_http_status: 500,
            },
            logging: LoggingConfig {
                filter: "info,powerauth_rest=debug".to_string(),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let config = Config {
            output: OutputConfig {
                pretty: env::var("PA_INSPECT_PRETTY")
                    .unwrap_or_else(|_| "true".to_string())
                    .parse()
                    .context("PA_INSPECT_PRETTY must be true or false")?,
                fallback_http_status: env::var("PA_INSPECT_FALLBACK_HTTP_STATUS")
                    .unwrap_or_else(|_| "500".to_string())
                    .parse()
                    .context("PA_INSPECT_FALLBACK_HTTP_STATUS must be a valid number")?,
            },
            logging: LoggingConfig {
                filter: env::var("PA_INSPECT_LOG")
                    .unwrap_or_else(|_| "info,powerauth_rest=debug".to_string()),
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(100..=599).contains(&self.output.fallback_http_status) {
            bail!(
                "PA_INSPECT_FALLBACK_HTTP_STATUS must be between 100 and 599, got {}",
                self.output.fallback_http_status
            );
        }
        Ok(())
    }
}
