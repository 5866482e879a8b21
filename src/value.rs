use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// A value with its own textual conversion, the counterpart of a
/// user-defined `toString`. Values that have none still log through `Debug`.
pub trait Loggable: fmt::Debug + Send + Sync {
    fn custom_text(&self) -> Option<String> {
        None
    }
}

/// One argument of a logging call
#[derive(Debug, Clone)]
pub enum LogArg {
    Text(String),
    Json(Value),
    Bytes(Vec<u8>),
    Custom(Arc<dyn Loggable>),
}

/// How a non-textual argument is treated when choosing its display form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    PlainRecord,
    Sequence,
    ByteBuffer,
    CustomDisplayable,
    Other,
}

pub fn classify(arg: &LogArg) -> ValueKind {
    match arg {
        LogArg::Json(Value::Object(_)) => ValueKind::PlainRecord,
        LogArg::Json(Value::Array(_)) => ValueKind::Sequence,
        LogArg::Bytes(_) => ValueKind::ByteBuffer,
        LogArg::Custom(value) if value.custom_text().is_some() => ValueKind::CustomDisplayable,
        _ => ValueKind::Other,
    }
}

impl LogArg {
    pub fn custom<T: Loggable + 'static>(value: T) -> Self {
        LogArg::Custom(Arc::new(value))
    }

    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        LogArg::Bytes(data.into())
    }

    /// Parses `input` as JSON, keeping it as text when it is not JSON.
    pub fn parse_json_or_text(input: &str) -> Self {
        match serde_json::from_str::<Value>(input) {
            Ok(value) => LogArg::from(value),
            Err(_) => LogArg::Text(input.to_string()),
        }
    }

    pub fn is_textual(&self) -> bool {
        matches!(self, LogArg::Text(_) | LogArg::Json(Value::String(_)))
    }

    /// Forced text view used after a prefix, e.g. in a group header.
    pub fn header_text(&self) -> String {
        match self {
            LogArg::Text(s) | LogArg::Json(Value::String(s)) => s.clone(),
            LogArg::Json(value) => value.to_string(),
            LogArg::Bytes(data) => String::from_utf8_lossy(data).into_owned(),
            LogArg::Custom(value) => value.custom_text().unwrap_or_else(|| format!("{:?}", value)),
        }
    }

    /// Default inspection rendering, ignoring any custom conversion.
    pub fn inspect(&self) -> String {
        match self {
            LogArg::Text(s) | LogArg::Json(Value::String(s)) => s.clone(),
            LogArg::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            LogArg::Bytes(data) => {
                let hex: Vec<String> = data.iter().map(|b| format!("{:02x}", b)).collect();
                if hex.is_empty() {
                    "<Buffer >".to_string()
                } else {
                    format!("<Buffer {}>", hex.join(" "))
                }
            }
            LogArg::Custom(value) => format!("{:?}", value),
        }
    }

    /// Rendering of one line inside a group.
    pub fn display_form(&self, use_to_string: bool) -> String {
        if use_to_string && classify(self) == ValueKind::CustomDisplayable {
            if let LogArg::Custom(value) = self {
                if let Some(text) = value.custom_text() {
                    return text;
                }
            }
        }
        self.inspect()
    }
}

impl From<&str> for LogArg {
    fn from(s: &str) -> Self {
        LogArg::Text(s.to_string())
    }
}

impl From<String> for LogArg {
    fn from(s: String) -> Self {
        LogArg::Text(s)
    }
}

impl From<&String> for LogArg {
    fn from(s: &String) -> Self {
        LogArg::Text(s.clone())
    }
}

impl From<Value> for LogArg {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => LogArg::Text(s),
            other => LogArg::Json(other),
        }
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for LogArg {
                fn from(v: $ty) -> Self {
                    LogArg::Json(Value::from(v))
                }
            }
        )*
    };
}

impl_from_scalar!(bool, i32, i64, u32, u64, usize, f64);

/// Joins arguments the way the passthrough writers print them.
pub fn join_inspected(args: &[LogArg]) -> String {
    args.iter().map(LogArg::inspect).collect::<Vec<_>>().join(" ")
}
