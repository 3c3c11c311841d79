// SPDX-License-Identifier: MPL-2.0
//! Diagnostic logging setup for the host binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary. `RUST_LOG` overrides the default filter.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "iced_dropzone=info";

/// Installs the console subscriber. Safe to call more than once.
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

pub fn init_with_filter(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init();
        init_with_filter("debug");
        tracing::debug!("logging initialized twice");
    }
}
