//! Diagnostic tracing for the demos.
//!
//! Demo output goes to stdout with `println!`; tracing goes to stderr and is
//! silent unless `RUST_LOG` asks for it.
//!
//! ```bash
//! RUST_LOG=design_patterns=debug cargo run --bin p1_chain_of_responsibility
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the stderr subscriber. Defaults to `warn` when `RUST_LOG` is unset.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
