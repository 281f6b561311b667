//! Log filter setup for the binary.

use tracing_subscriber::filter::EnvFilter;

/// Level used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_DIRECTIVES: &str = "info";

/// Build the subscriber filter from `RUST_LOG`-style directives. `RUST_LOG`
/// wins when present; otherwise everything logs at info.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}
