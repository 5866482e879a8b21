use crate::colors::{GlyphSet, RESET};
use crate::config::{ConsoleOptions, EnvOverrides};
use crate::formatters::{FormatStack, LogEvent, Template};
use crate::level::{should_emit, Label, LogLevel};
use crate::sink::{ConsoleSink, StdConsole};
use crate::value::{join_inspected, LogArg};
use chrono::{Local, NaiveDateTime};
use is_terminal::IsTerminal;
use serde_json::Value;

/// Leveled console logger.
///
/// `error`, `warn`, `info`, `aced` and `debug` are filtered by the level
/// threshold, prefixed through the format template and written to the error
/// stream. Calls with several arguments, or a single non-text argument, are
/// written as a group headed by the prefix.
///
/// `log`, `raw_error` and `table` bypass filtering and formatting.
pub struct Console {
    level: LogLevel,
    formats: FormatStack,
    module: String,
    use_to_string: bool,
    color: bool,
    glyphs: GlyphSet,
    constant_time: Option<NaiveDateTime>,
    sink: Box<dyn ConsoleSink>,
}

impl Console {
    /// Console on stdout/stderr, colored when stderr is a terminal, with
    /// `LOG_LEVEL`/`LOG_FORMAT` applied on top of `options`.
    pub fn new(options: ConsoleOptions) -> Self {
        let terminal = std::io::stderr().is_terminal();
        let mut console = Self::with_sink(options, StdConsole::new(), terminal);
        console.apply_env(&EnvOverrides::from_env());
        console
    }

    /// Default console for `module`.
    pub fn pocket(module: &str) -> Self {
        Self::new(ConsoleOptions::with_module(module))
    }

    /// Console over explicit write primitives. The environment is not read.
    pub fn with_sink<S: ConsoleSink + 'static>(options: ConsoleOptions, sink: S, terminal: bool) -> Self {
        let mut console = Console {
            level: LogLevel::default(),
            formats: FormatStack::default(),
            module: options.module.unwrap_or_default(),
            use_to_string: options.use_to_string,
            color: options.color.unwrap_or(terminal),
            glyphs: options.glyphs,
            constant_time: None,
            sink: Box::new(sink),
        };
        if let Some(level) = options.level.as_deref() {
            console.set_level(level);
        }
        if let Some(format) = options.format.as_deref() {
            console.set_format(format);
        }
        console
    }

    pub fn apply_env(&mut self, env: &EnvOverrides) {
        if let Some(level) = env.level.as_deref() {
            self.set_level(level);
        }
        if let Some(format) = env.format.as_deref() {
            self.set_format(format);
        }
    }

    /// Unrecognized levels are ignored.
    pub fn set_level(&mut self, level: &str) {
        if let Ok(level) = level.parse::<LogLevel>() {
            self.level = level;
        }
    }

    /// Templates with characters outside printable ASCII are ignored.
    pub fn set_format(&mut self, format: &str) {
        if let Ok(template) = Template::new(format) {
            self.formats.set(template);
        }
    }

    /// Saves the active template and switches to `format` if it is valid.
    pub fn push_format(&mut self, format: &str) {
        self.formats.push(Template::new(format).ok());
    }

    pub fn pop_format(&mut self) {
        self.formats.pop();
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn format(&self) -> &str {
        self.formats.current().as_str()
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn is_colored(&self) -> bool {
        self.color
    }

    /// Pins `%t` to a fixed time; `None` goes back to the local clock.
    pub fn set_constant_time(&mut self, time: Option<NaiveDateTime>) {
        self.constant_time = time;
    }

    /// The underlying write primitives, for output that should skip the console.
    pub fn sink_mut(&mut self) -> &mut dyn ConsoleSink {
        self.sink.as_mut()
    }

    pub fn error(&mut self, args: &[LogArg]) {
        self.emit(Label::Error, args);
    }

    pub fn warn(&mut self, args: &[LogArg]) {
        self.emit(Label::Warn, args);
    }

    pub fn info(&mut self, args: &[LogArg]) {
        self.emit(Label::Info, args);
    }

    /// Same threshold as `info`, different label and color.
    pub fn aced(&mut self, args: &[LogArg]) {
        self.emit(Label::Aced, args);
    }

    pub fn debug(&mut self, args: &[LogArg]) {
        self.emit(Label::Debug, args);
    }

    pub fn log(&mut self, args: &[LogArg]) {
        self.sink.log_line(&join_inspected(args));
    }

    pub fn raw_error(&mut self, args: &[LogArg]) {
        self.sink.error_line(&join_inspected(args));
    }

    pub fn table(&mut self, data: &Value) {
        self.sink.table(data);
    }

    pub fn enabled(&self, label: Label) -> bool {
        should_emit(self.level, label)
    }

    pub fn emit(&mut self, label: Label, args: &[LogArg]) {
        if !self.enabled(label) {
            return;
        }

        let event = LogEvent {
            time: self
                .constant_time
                .unwrap_or_else(|| Local::now().naive_local()),
            label,
            module: &self.module,
            color: self.color,
            glyphs: self.glyphs,
        };
        let rendered = self.formats.current().render(&event);
        let prefix = rendered.prefix;

        match args {
            [] => self.sink.error_line(&prefix),
            [only] if only.is_textual() => {
                self.sink.error_line(&format!("{}{}", prefix, only.header_text()));
            }
            [first, rest @ ..] => {
                self.sink.group(&format!("{}{}", prefix, first.header_text()));
                let body = if first.is_textual() { rest } else { args };
                for arg in body {
                    self.sink.error_line(&arg.display_form(self.use_to_string));
                }
                self.sink.group_end();
            }
        }

        if rendered.coloring && self.color {
            self.sink.error_line(RESET);
        }
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("level", &self.level)
            .field("format", &self.format())
            .field("module", &self.module)
            .field("use_to_string", &self.use_to_string)
            .field("color", &self.color)
            .field("glyphs", &self.glyphs)
            .finish()
    }
}
