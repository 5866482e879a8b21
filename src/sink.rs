use crate::table::render_table;
use serde_json::Value;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// The write primitives a [`Console`](crate::Console) dispatches through.
///
/// Implementations never report failure; a console has nowhere to send it.
pub trait ConsoleSink: Send {
    /// One line on the error stream
    fn error_line(&mut self, line: &str);
    /// One line on the output stream
    fn log_line(&mut self, line: &str);
    /// Opens an indented block headed by `header`
    fn group(&mut self, header: &str);
    fn group_end(&mut self);
    fn table(&mut self, data: &Value);
}

/// Writes to the process stdout/stderr, indenting by two spaces per open group.
#[derive(Debug, Default)]
pub struct StdConsole {
    depth: usize,
}

impl StdConsole {
    pub fn new() -> Self {
        Self::default()
    }

    fn write_indented<W: Write>(&self, out: &mut W, text: &str) {
        let indent = "  ".repeat(self.depth);
        for line in text.split('\n') {
            // Output errors are dropped
            let _ = writeln!(out, "{}{}", indent, line);
        }
        let _ = out.flush();
    }
}

impl ConsoleSink for StdConsole {
    fn error_line(&mut self, line: &str) {
        self.write_indented(&mut io::stderr().lock(), line);
    }

    fn log_line(&mut self, line: &str) {
        self.write_indented(&mut io::stdout().lock(), line);
    }

    fn group(&mut self, header: &str) {
        self.write_indented(&mut io::stderr().lock(), header);
        self.depth += 1;
    }

    fn group_end(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn table(&mut self, data: &Value) {
        match render_table(data) {
            Some(rendered) => self.log_line(&rendered),
            None => self.log_line(&crate::value::LogArg::from(data.clone()).inspect()),
        }
    }
}

/// A primitive call as seen by a [`MemorySink`]
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    Error(String),
    Log(String),
    Group(String),
    GroupEnd,
    Table(Value),
}

/// Records primitive calls instead of writing them. Clones share the same
/// record, so a test can keep one handle and give the other to a console.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<SinkEvent>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SinkEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }

    fn push(&self, event: SinkEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl ConsoleSink for MemorySink {
    fn error_line(&mut self, line: &str) {
        self.push(SinkEvent::Error(line.to_string()));
    }

    fn log_line(&mut self, line: &str) {
        self.push(SinkEvent::Log(line.to_string()));
    }

    fn group(&mut self, header: &str) {
        self.push(SinkEvent::Group(header.to_string()));
    }

    fn group_end(&mut self) {
        self.push(SinkEvent::GroupEnd);
    }

    fn table(&mut self, data: &Value) {
        self.push(SinkEvent::Table(data.clone()));
    }
}
