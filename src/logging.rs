//! Tracing subscriber setup for the `lsq` binary.
//!
//! Logs go to stderr so stdout stays clean for reports and plots. The filter
//! comes from `RUST_LOG` (a `.env` file is honored), defaulting to warnings.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "lsq_fit=warn";

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    // A second init (e.g. from tests) fails harmlessly.
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
