// src/logging.rs
// =============================================================================
// Log configuration.
//
// Logs go to stderr so that stdout only carries the export summary (which
// may be JSON piped into another tool). RUST_LOG wins over --verbose.
// =============================================================================

use tracing_subscriber::EnvFilter;

const DEFAULT_ENV_CONFIG: &str = "warn,issue_poster=info";
const VERBOSE_ENV_CONFIG: &str = "warn,issue_poster=debug";

pub fn configure_logging(verbose: bool) {
    let default_directives = if verbose {
        VERBOSE_ENV_CONFIG
    } else {
        DEFAULT_ENV_CONFIG
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    // try_init: a second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
