use crate::error::ConsoleError;
use std::fmt;
use std::str::FromStr;

/// Severity threshold. Ordered by verbosity: `Debug` lets everything
/// through, `None` suppresses every leveled call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    None,
}

impl LogLevel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::None => "none",
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Only the exact lowercase tokens are accepted.
impl FromStr for LogLevel {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "none" => Ok(LogLevel::None),
            _ => Err(ConsoleError::InvalidLevel(s.to_string())),
        }
    }
}

/// The label a leveled call is rendered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Error,
    Warn,
    Info,
    /// Same gate as `Info`, rendered green to signal success.
    Aced,
    Debug,
}

impl Label {
    pub const ALL: [Label; 5] = [Label::Error, Label::Warn, Label::Info, Label::Aced, Label::Debug];

    /// Label text padded to five columns, as substituted for `%l`.
    pub const fn padded(&self) -> &'static str {
        match self {
            Label::Error => "ERROR",
            Label::Warn => "WARN ",
            Label::Info => "INFO ",
            Label::Aced => "ACED ",
            Label::Debug => "DEBUG",
        }
    }

    /// Severity this label is gated on.
    pub const fn gate(&self) -> LogLevel {
        match self {
            Label::Error => LogLevel::Error,
            Label::Warn => LogLevel::Warn,
            Label::Info | Label::Aced => LogLevel::Info,
            Label::Debug => LogLevel::Debug,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.padded().trim_end())
    }
}

pub fn should_emit(threshold: LogLevel, label: Label) -> bool {
    threshold != LogLevel::None && label.gate() >= threshold
}
