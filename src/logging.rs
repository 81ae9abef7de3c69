//! Debug-build logging
//!
//! The terminal belongs to the UI, so log records go to a file in the
//! temp directory. `RUST_LOG` overrides the default `debug` filter.

use std::fs::File;
use std::path::PathBuf;

use env_logger::{Builder, Env, Target};

const LOG_FILE: &str = "autocomp.log";

pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE)
}

/// Start logging to [`log_path`]. Failing to create the file leaves logging off.
pub fn init() {
    let Ok(file) = File::create(log_path()) else {
        return;
    };
    let _ = Builder::from_env(Env::default().default_filter_or("debug"))
        .target(Target::Pipe(Box::new(file)))
        .try_init();
}
