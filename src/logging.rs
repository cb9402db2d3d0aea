//=====================================================
// File: logging.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Tracing setup for the Bhanai binaries
// Objective: Install a stderr fmt subscriber whose filter comes from the
//            environment first and the configuration second
//=====================================================

use std::env;

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "BHANAI_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Picks the filter directive: `BHANAI_LOG`, then `RUST_LOG`, then the
/// configured filter, then `warn`.
pub fn filter_directive(configured: Option<&str>) -> String {
    [LOG_ENV, EnvFilter::DEFAULT_ENV]
        .iter()
        .find_map(|key| env::var(key).ok().filter(|value| !value.trim().is_empty()))
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Installs the global subscriber. Repeated calls are ignored.
pub fn init(configured: Option<&str>) {
    let directive = filter_directive(configured);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .try_init();
}

//=====================================================
// End of file
//=====================================================
