//! Logging setup for the studentdb binary.

use crate::libs::messages::macros::{enable_debug_mode, is_debug_mode};
use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Installs the `tracing` subscriber when debug output is wanted.
///
/// `verbose` comes from the repeated `-v` flag: 1 turns on debug mode at
/// DEBUG level, 2 or more at TRACE. Without `-v` a subscriber is only
/// installed if `STUDENTDB_DEBUG` or `RUST_LOG` is set, and `RUST_LOG` then
/// controls the filter.
pub fn init_logging(verbose: u8) -> Result<()> {
    if verbose > 0 {
        enable_debug_mode();
    }
    if !is_debug_mode() {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 | 1 => "studentdb=debug",
        _ => "studentdb=trace",
    }
}
