#[macro_export]
/// Builds a `Vec<LogArg>` from values of mixed types.
///
/// ```
/// use pocketconsole::{log_args, LogArg};
/// let args = log_args!["user", serde_json::json!({"id": 7}), true];
/// assert_eq!(args.len(), 3);
/// assert!(matches!(args[0], LogArg::Text(_)));
/// ```
macro_rules! log_args {
    () => {
        ::std::vec::Vec::<$crate::LogArg>::new()
    };

    ($($arg:expr),+ $(,)?) => {
        vec![$($crate::LogArg::from($arg)),+]
    };
}
