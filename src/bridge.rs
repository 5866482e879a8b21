//! Routes records from the `log` facade through a [`Console`].

use crate::console::Console;
use crate::error::ConsoleError;
use crate::level::Label;
use crate::value::LogArg;
use once_cell::sync::OnceCell;
use std::sync::Mutex;

static LOGGER: OnceCell<&'static ConsoleLogger> = OnceCell::new();

pub struct ConsoleLogger {
    console: Mutex<Console>,
}

impl ConsoleLogger {
    pub fn new(console: Console) -> Self {
        Self {
            console: Mutex::new(console),
        }
    }

    /// Runs `f` on the wrapped console, e.g. to change its level.
    /// Returns `None` if the lock is poisoned.
    pub fn with_console<R>(&self, f: impl FnOnce(&mut Console) -> R) -> Option<R> {
        self.console.lock().ok().map(|mut console| f(&mut console))
    }
}

pub fn label_for(level: log::Level) -> Label {
    match level {
        log::Level::Error => Label::Error,
        log::Level::Warn => Label::Warn,
        log::Level::Info => Label::Info,
        log::Level::Debug | log::Level::Trace => Label::Debug,
    }
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.with_console(|console| console.enabled(label_for(metadata.level())))
            .unwrap_or(false)
    }

    fn log(&self, record: &log::Record) {
        let label = label_for(record.level());
        let message = record.args().to_string();
        self.with_console(|console| console.emit(label, &[LogArg::Text(message)]));
    }

    fn flush(&self) {}
}

/// Installs `console` as the global `log` logger. Filtering is left to the
/// console's own threshold.
///
/// Only recorded for [`installed`] once `log` has accepted it.
pub fn init(console: Console) -> Result<&'static ConsoleLogger, ConsoleError> {
    let logger: &'static ConsoleLogger = Box::leak(Box::new(ConsoleLogger::new(console)));
    log::set_logger(logger)?;
    log::set_max_level(log::LevelFilter::Trace);
    LOGGER
        .set(logger)
        .map_err(|_| ConsoleError::LoggerInstalled)?;
    Ok(logger)
}

/// The logger installed by [`init`], if any.
pub fn installed() -> Option<&'static ConsoleLogger> {
    LOGGER.get().copied()
}
