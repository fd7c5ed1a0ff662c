//! File logger for the terminal binary.
//!
//! The terminal belongs to the renderer, so log lines go to the file named by
//! `TUI_2048_LOG_PATH`. Without a path, logging stays off.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use log::{LevelFilter, Log, Metadata, Record};

use crate::config::Config;

struct FileLogger {
    file: Mutex<File>,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Open (append) the log file.
fn open_log(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}

/// Install the global logger described by `config`.
///
/// Only the first call installs a logger; later calls just adjust the level.
pub fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        log::set_max_level(LevelFilter::Off);
        return Ok(());
    };

    let logger = FileLogger {
        file: Mutex::new(open_log(path)?),
    };
    let _ = log::set_boxed_logger(Box::new(logger));
    log::set_max_level(config.log_level);
    Ok(())
}
