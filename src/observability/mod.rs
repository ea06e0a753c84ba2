//! Logging setup.
//!
//! All crates log through `tracing`; this installs the subscriber that prints
//! those events to stderr. `RUST_LOG` overrides the default filter.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "tms=info,tower_http=info";
const VERBOSE_LOG_FILTER: &str = "tms=debug,tower_http=debug";

/// Pick the filter: `RUST_LOG` when set, otherwise the default for the mode
pub fn log_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            VERBOSE_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        })
    })
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(verbose: bool) -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(log_filter(verbose))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
}
