//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG` (default `info`). Module paths are hidden; actor lifecycle
//! and command lines carry an `actor` field instead.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: `Actor started` and `Shutdown`, with the number of records held
//! - **Queue mutations**: `Added`, `Status updated`, `Skipped`, `Paid skip` at `info`
//! - **Rejections**: duplicate ids, illegal transitions and failed payments at `warn`
//! - **Client calls**: one span per client method via `#[instrument]`, payloads at `debug`
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Every command and payload
//! ```
//!
//! A paid skip at `info` reads:
//!
//! ```text
//! INFO Spent id=user-1 amount=50 reason=SkipQueue balance=149999999999999950
//! INFO Paid skip id=order-46 user_id=user-1 cost=50 queue_number=45 balance=149999999999999950
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Call once, at the top of `main`.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
