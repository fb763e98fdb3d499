//! Log output for processes that serve a cheat sheet catalog
//!
//! The catalog crates only emit `tracing` events:
//!
//! - `cheat_blocks` logs each document read and every block boundary at
//!   debug level
//! - `cheat_catalog` logs config and document loads at debug level, the
//!   registry summary at info and skipped languages at warn
//!
//! Topic text is usually written to stdout by the caller, so events go to
//! stderr.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset: the registry summary and load
/// warnings, without per-boundary noise.
pub const DEFAULT_DIRECTIVE: &str = "warn,cheat_catalog=info";

type InitError = Box<dyn std::error::Error + Send + Sync>;

/// Install a stderr subscriber filtered by `RUST_LOG`, or
/// [`DEFAULT_DIRECTIVE`] when it is unset.
///
/// Use `RUST_LOG=cheat_blocks=debug` to trace how a sheet was segmented.
pub fn init() -> Result<(), InitError> {
    init_with(DEFAULT_DIRECTIVE)
}

/// Like [`init`], with a caller-chosen fallback directive.
///
/// # Errors
///
/// Fails if the directive does not parse or a global subscriber is already
/// installed.
pub fn init_with(default_directive: &str) -> Result<(), InitError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive)?,
    };

    let events = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(events)
        .try_init()?;

    Ok(())
}
