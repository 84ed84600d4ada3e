pub(crate) mod core;
pub(crate) mod report;
pub(crate) mod types;
pub(crate) mod utils;

use std::io::Write;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::core::config::Args;
use crate::core::error::Error;

const FALLBACK_LOG_LEVEL: &str = "warn";

pub fn run() -> Result<(), Error> {
    let config = Args::load()?;

    let (filter, invalid) = log_filter(&config.log_level);

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(e) = invalid {
        tracing::warn!(
            "invalid log level {:?}, using {:?}: {}",
            config.log_level,
            FALLBACK_LOG_LEVEL,
            e
        );
    }

    let mut stdout = std::io::stdout().lock();

    generate(&config, &mut stdout)
}

/// Falls back to `warn` and hands back the parse error so it can be logged
/// once the subscriber is installed.
fn log_filter(level: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(level) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(FALLBACK_LOG_LEVEL), Some(e)),
    }
}

fn generate<W: Write>(config: &Args, out: &mut W) -> Result<(), Error> {
    let token_config = config.token_config()?;

    tracing::debug!(
        identities = config.identities.len(),
        "generating tokens with {:?}",
        token_config
    );

    report::print_report(out, &config.identities, &config.requests, &token_config)
}
