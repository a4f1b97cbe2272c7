use anyhow::{Context, Result};
use chrono::Utc;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::constants::{CONFIG_DIR_NAME, LOG_BUFFER_LIMIT, LOG_FILE_NAME};

/// Shared logger that can be used across the application
///
/// Every entry is kept in memory for the log panel. When file logging is
/// enabled entries are also appended to [`Logger::get_log_file_path`].
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    enabled: bool,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
    write_failures: Arc<AtomicUsize>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled: false,
            file_writer: None,
            write_failures: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a logger, opening the log file when `enabled`
    pub fn from_config(enabled: bool) -> Result<Self> {
        if enabled {
            Self::with_log_file(&Self::get_log_file_path()?)
        } else {
            Ok(Self::new())
        }
    }

    /// Create an enabled logger appending to `path`
    pub fn with_log_file(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;

        let mut logger = Self::new();
        logger.enabled = true;
        logger.file_writer = Some(Arc::new(Mutex::new(BufWriter::new(file))));
        Ok(logger)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn has_file_writer(&self) -> bool {
        self.file_writer.is_some()
    }

    pub fn file_writer(&self) -> Option<Arc<Mutex<BufWriter<File>>>> {
        self.file_writer.clone()
    }

    /// Number of failed writes or flushes to the log file
    pub fn write_failures(&self) -> usize {
        self.write_failures.load(Ordering::Relaxed)
    }

    /// Location of the log file under the local data directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        let base = dirs::data_local_dir().unwrap_or_else(std::env::temp_dir);
        Ok(base.join(CONFIG_DIR_NAME).join(LOG_FILE_NAME))
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Some(writer) = &self.file_writer {
            if let Ok(mut writer) = writer.lock() {
                if let Err(err) = writeln!(writer, "{}", formatted_message) {
                    self.record_write_failure(&timestamp, &err);
                }
            }
        }

        self.push(formatted_message);
    }

    fn push(&self, entry: String) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.push(entry);
            if logs.len() > LOG_BUFFER_LIMIT {
                let excess = logs.len() - LOG_BUFFER_LIMIT;
                logs.drain(..excess);
            }
        }
    }

    /// Count a file error; the first one is reported in the log panel.
    fn record_write_failure(&self, timestamp: &str, err: &std::io::Error) {
        if self.write_failures.fetch_add(1, Ordering::Relaxed) == 0 {
            self.push(format!("[{}] Log file write failed, further failures are only counted: {}", timestamp, err));
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            // Reverse to show newest logs first (descending order by timestamp)
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Flush buffered file output
    pub fn flush(&self) {
        if let Some(writer) = &self.file_writer {
            if let Ok(mut writer) = writer.lock() {
                if let Err(err) = writer.flush() {
                    let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
                    self.record_write_failure(&timestamp, &err);
                }
            }
        }
    }

    /// Route `log` records at or above `level` into this logger.
    ///
    /// Installs the global logger, so it can only succeed once per process.
    pub fn install(&self, level: log::LevelFilter) -> Result<()> {
        let sink = self.clone();
        fern::Dispatch::new()
            .format(|out, message, record| out.finish(format_args!("{} {}: {}", record.level(), record.target(), message)))
            .level(level)
            .chain(fern::Output::call(move |record| sink.log(record.args().to_string())))
            .apply()
            .context("Failed to install logger")?;
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
