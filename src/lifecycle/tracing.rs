//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Log lines use the compact format without the crate/module prefix (`with_target(false)`);
//! collections identify themselves with an `entity_type` field instead.
//!
//! - `RUST_LOG` wins when set
//! - otherwise `info`, or `debug` when the server runs with `--verbose`
//!
//! ## What Gets Traced
//!
//! - **Collection lifecycle**: startup, shutdown and final size
//! - **Store requests**: one `debug!` line per request, `info!` for every state change
//! - **Manager operations**: an `#[instrument]` span per call, `warn!` on every rejection
//! - **HTTP**: one line per request with method, path and status
//!
//! ```text
//! INFO create{input=NewBrand { .. }}: Inserted entity_type="Brand" id=65f1... size=1
//! WARN create{input=NewSupplement { .. }}: Invalid brand_id format raw_brand_id="xyz"
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Default
//! cargo run
//!
//! # Full payloads
//! cargo run -- --verbose
//!
//! # Only the store
//! RUST_LOG=supplement_store::store=debug cargo run
//! ```
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Call once, before the store starts.
pub fn setup_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
