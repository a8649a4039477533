//! Tracing subscriber setup.

use std::io;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter. `RUST_LOG` is consulted when it is unset.
pub const LOG_ENV: &str = "SIFT_LOG";

/// Installs the global subscriber, writing to stderr.
///
/// `default_directive` applies when neither `SIFT_LOG` nor `RUST_LOG` holds a valid filter.
pub fn init_logging(default_directive: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}
