//! Diagnostic tracing for the solver.
//!
//! # Output streams
//!
//! - **stdout**: the move trace only. Every line comes from a `MoveSink`
//!   (`Move disk from pole X to pole Y`, or JSON lines with `--format json`),
//!   and the demo's dashed separators. Piping `hanoi` into another tool
//!   yields exactly the moves.
//!
//! - **stderr**: everything else. Tracing events from this module's
//!   subscriber, the `--summary` line, and error messages.
//!
//! # Events
//!
//! - `debug`: solve start (disk count, labels, cycle) and completion
//! - `trace`: one event per move
//! - `info`: end of each demonstration run

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter from `RUST_LOG`, falling back to `DEFAULT_FILTER`.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the stderr subscriber.
///
/// # Example
/// ```bash
/// RUST_LOG=hanoi_stack=trace hanoi solve --disks 3 2>moves.log
/// ```
pub fn init() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
