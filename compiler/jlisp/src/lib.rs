//! Jlisp - interactive driver for the Jlisp evaluator.
//!
//! Ties `jlisp_parse` and `jlisp_eval` together: a [`Session`] parses one
//! line at a time and evaluates it against a root environment that lives as
//! long as the session. The REPL and the script runner are thin loops over a
//! session.

pub mod commands;
mod config;
pub mod repl;
mod session;

pub use config::{ReplConfig, HISTORY_FILE, LANGUAGE_VERSION};
pub use session::{LineOutcome, Session};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Only installs a subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=jlisp_eval=debug jlisp`. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
