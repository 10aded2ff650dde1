// src/log.rs
use std::fs::{self, OpenOptions};
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::EnvFilter;

use crate::config::consts::{LOG_FILE, STORE_DIR};

static INIT: OnceLock<()> = OnceLock::new();

/// Install the global subscriber. Safe to call more than once; only the
/// first call has an effect.
///
/// Lines go to `.store/debug.log` when that file can be opened, stderr otherwise.
/// `RUST_LOG` overrides the default `social_fetch=info` directive.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("social_fetch=info"));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_thread_names(true)
            .with_target(false);

        let file = fs::create_dir_all(STORE_DIR)
            .and_then(|_| OpenOptions::new().create(true).append(true).open(LOG_FILE));

        // Someone else (a test harness, an embedding app) may already own the global
        let _ = match file {
            Ok(f) => builder.with_ansi(false).with_writer(Mutex::new(f)).try_init(),
            Err(_) => builder.with_writer(std::io::stderr).try_init(),
        };
    });
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "social_fetch", $($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "social_fetch", $($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!(target: "social_fetch", $($arg)*)
    };
}
