//! Tracing subscriber installation for the CLI.
//!
//! Logging is off unless a filter is configured:
//!
//! - `LOX_LOG` takes precedence, e.g. `LOX_LOG=loxc=debug`
//! - otherwise `RUST_LOG` is used
//! - `LOX_LOG_TREE=1` switches to an indented, span-nested layout
//!
//! All log output goes to stderr so it never mixes with token output.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

/// Toolchain-specific filter variable, checked before `RUST_LOG`.
pub const LOG_ENV: &str = "LOX_LOG";

/// Set to a non-empty value other than `0` to get hierarchical output.
pub const LOG_TREE_ENV: &str = "LOX_LOG_TREE";

static TRACING_INIT: Once = Once::new();

/// Initialize tracing. Safe to call multiple times; only the first call
/// has an effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Some(filter) = env_filter() else {
            return;
        };

        let installed = if tree_layout_requested() {
            tracing_subscriber::registry()
                .with(HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .try_init()
        };

        if let Err(e) = installed {
            eprintln!("warning: could not install log subscriber: {e}");
        }
    });
}

/// Build the filter from `LOX_LOG` or `RUST_LOG`, if either is set.
fn env_filter() -> Option<EnvFilter> {
    let var = if std::env::var_os(LOG_ENV).is_some() {
        LOG_ENV
    } else if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        EnvFilter::DEFAULT_ENV
    } else {
        return None;
    };

    match EnvFilter::try_from_env(var) {
        Ok(filter) => Some(filter),
        Err(e) => {
            eprintln!("warning: ignoring invalid {var} directives: {e}");
            None
        }
    }
}

fn tree_layout_requested() -> bool {
    std::env::var(LOG_TREE_ENV).is_ok_and(|v| !v.is_empty() && v != "0")
}
