// src/lib.rs
#[macro_use]
mod macros;

pub mod bridge;
pub mod colors;
pub mod config;
pub mod console;
pub mod error;
pub mod formatters;
pub mod level;
pub mod sink;
pub mod table;
pub mod value;

pub use error::*;

pub use colors::{GlyphSet, LevelStyle};
pub use config::{ConsoleOptions, EnvOverrides};
pub use console::Console;
pub use formatters::{FormatStack, LogEvent, Rendered, Template, DEFAULT_FORMAT};
pub use level::{should_emit, Label, LogLevel};
pub use sink::{ConsoleSink, MemorySink, SinkEvent, StdConsole};
pub use value::{classify, LogArg, Loggable, ValueKind};
