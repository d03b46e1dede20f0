//! Boot console logger
//!
//! `log` backend for the boot phase. There is no allocator and no
//! scheduler yet, so records are formatted straight into whatever
//! `core::fmt::Write` sink the firmware provides (usually the UART),
//! one line per record: `I fc_bootloader::boot_stage: Platform initialized`.

use core::fmt::Write;

use log::{Level, LevelFilter, Log, Metadata, Record};
use spin::Mutex;

use crate::error::{BootError, Result};

/// Console the logger writes to
pub type LogSink = &'static mut (dyn Write + Send);

pub struct BootLogger {
    sink: Mutex<Option<LogSink>>,
    level: Mutex<LevelFilter>,
}

impl BootLogger {
    pub const fn new() -> Self {
        Self {
            sink: Mutex::new(None),
            level: Mutex::new(LevelFilter::Info),
        }
    }

    /// Replace the sink. Records logged without a sink are dropped.
    pub fn attach(&self, sink: LogSink) {
        *self.sink.lock() = Some(sink);
    }

    pub fn set_level(&self, level: LevelFilter) {
        *self.level.lock() = level;
    }

    pub fn level(&self) -> LevelFilter {
        *self.level.lock()
    }
}

impl Default for BootLogger {
    fn default() -> Self {
        Self::new()
    }
}

fn level_tag(level: Level) -> char {
    match level {
        Level::Error => 'E',
        Level::Warn => 'W',
        Level::Info => 'I',
        Level::Debug => 'D',
        Level::Trace => 'V',
    }
}

impl Log for BootLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Some(sink) = self.sink.lock().as_mut() {
            // Nowhere to report a failing console to
            let _ = writeln!(
                sink,
                "{} {}: {}",
                level_tag(record.level()),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

static LOGGER: BootLogger = BootLogger::new();

/// Install the boot logger as the global `log` backend
pub fn init(sink: LogSink, level: LevelFilter) -> Result {
    log::set_logger(&LOGGER).map_err(|_| BootError::LoggerAlreadyInitialized)?;
    LOGGER.attach(sink);
    set_level(level);
    Ok(())
}

/// Change the level of the installed logger and of the `log` facade together
pub fn set_level(level: LevelFilter) {
    LOGGER.set_level(level);
    log::set_max_level(level);
}
