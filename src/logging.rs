use crate::config::{LogFormat, LoggingConfig};
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `TCALC_LOG` wins over the configured level;
/// an unparsable `TCALC_LOG` falls back to the configured level with a warning.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let mut rejected = None;
    let env_filter = match std::env::var("TCALC_LOG") {
        Ok(filter) => match EnvFilter::try_new(&filter) {
            Ok(env_filter) => env_filter,
            Err(err) => {
                rejected = Some((filter, err));
                configured_filter(config)?
            }
        },
        Err(_) => configured_filter(config)?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    match config.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }

    if let Some((filter, err)) = rejected {
        tracing::warn!(
            filter = %filter,
            error = %err,
            level = %config.level,
            "ignoring invalid TCALC_LOG, using configured level"
        );
    }

    Ok(())
}

fn configured_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    EnvFilter::try_new(&config.level)
        .with_context(|| format!("Invalid log filter '{}'", config.level))
}
