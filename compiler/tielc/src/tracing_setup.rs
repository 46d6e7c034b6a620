//! Log output for the `tiel` binary.
//!
//! Off unless `TIEL_LOG` (or `RUST_LOG`) holds a filter, for example
//! `TIEL_LOG=tiel_eval=trace`. With `TIEL_LOG_TREE` set, spans render as an
//! indented tree. Logs always go to stderr.

use std::env;
use std::io;
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

pub const LOG_ENV: &str = "TIEL_LOG";
pub const LOG_TREE_ENV: &str = "TIEL_LOG_TREE";

/// Install the global subscriber. Later calls do nothing.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Some(directives) = env::var(LOG_ENV).or_else(|_| env::var("RUST_LOG")).ok() else {
            return;
        };
        let filter = EnvFilter::try_new(&directives).unwrap_or_else(|err| {
            eprintln!("warning: ignoring invalid {LOG_ENV} filter '{directives}': {err}");
            EnvFilter::new("warn")
        });

        let registry = tracing_subscriber::registry().with(filter);
        let installed = if env::var_os(LOG_TREE_ENV).is_some() {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true)
                        .with_writer(io::stderr),
                )
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .try_init()
        };
        if installed.is_err() {
            tracing::debug!("a global subscriber was already installed");
        }
    });
}
