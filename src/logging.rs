// SPDX-License-Identifier: GPL-3.0-only

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "STARRYVIEW_LOG";

/// Installs the fmt subscriber. The filter comes from `STARRYVIEW_LOG`,
/// then `fallback`, then `info`. Calling it again is a no-op.
pub fn init(fallback: Option<&str>) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .ok()
        .or_else(|| fallback.and_then(|directives| EnvFilter::try_new(directives).ok()))
        .unwrap_or_else(|| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
