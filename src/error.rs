use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("Unrecognized log level '{0}' (expected debug, info, warn, error or none)")]
    InvalidLevel(String),

    #[error("Format template contains characters outside printable ASCII: {0:?}")]
    InvalidFormat(String),

    #[error("Failed to read config file '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("A console logger is already installed")]
    LoggerInstalled,
}

impl From<log::SetLoggerError> for ConsoleError {
    fn from(_: log::SetLoggerError) -> Self {
        ConsoleError::LoggerInstalled
    }
}
