use crate::colors::GlyphSet;
use crate::error::ConsoleError;
use serde::Deserialize;
use std::path::Path;

/// Environment variable overriding the level threshold
pub const LEVEL_ENV: &str = "LOG_LEVEL";
/// Environment variable overriding the format template
pub const FORMAT_ENV: &str = "LOG_FORMAT";

/// Construction options for a [`Console`](crate::Console).
///
/// `level` and `format` stay raw strings; they go through the same
/// validating setters as every later change, so bad values are dropped.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConsoleOptions {
    pub module: Option<String>,
    pub level: Option<String>,
    pub format: Option<String>,
    pub use_to_string: bool,
    /// None = color when stderr is a terminal, Some(true/false) = forced
    pub color: Option<bool>,
    pub glyphs: GlyphSet,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        ConsoleOptions {
            module: None,
            level: None,
            format: None,
            use_to_string: true,
            color: None,
            glyphs: GlyphSet::default(),
        }
    }
}

impl ConsoleOptions {
    pub fn with_module(module: &str) -> Self {
        ConsoleOptions {
            module: Some(module.to_string()),
            ..Default::default()
        }
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, ConsoleError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConsoleError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConsoleError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&source)
    }
}

/// Externally supplied level and format strings, applied after the options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Empty values count as unset.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());
        EnvOverrides {
            level: non_empty(LEVEL_ENV),
            format: non_empty(FORMAT_ENV),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let options = ConsoleOptions::default();
        assert!(options.use_to_string);
        assert_eq!(options.module, None);
        assert_eq!(options.color, None);
        assert_eq!(options.glyphs, GlyphSet::Pocket);
    }

    #[test]
    fn test_yaml_partial() {
        let options = ConsoleOptions::from_yaml_str(
            "module: db\nlevel: debug\nuse_to_string: false\nglyphs: classic\n",
        )
        .unwrap();
        assert_eq!(options.module.as_deref(), Some("db"));
        assert_eq!(options.level.as_deref(), Some("debug"));
        assert_eq!(options.format, None);
        assert!(!options.use_to_string);
        assert_eq!(options.glyphs, GlyphSet::Classic);
    }

    #[test]
    fn test_yaml_empty_is_default() {
        assert_eq!(ConsoleOptions::from_yaml_str("  \n").unwrap(), ConsoleOptions::default());
    }

    #[test]
    fn test_yaml_unknown_glyphs_rejected() {
        assert!(matches!(
            ConsoleOptions::from_yaml_str("glyphs: sparkly"),
            Err(ConsoleError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "format: \"[%l] \"").unwrap();
        let options = ConsoleOptions::from_yaml_file(file.path()).unwrap();
        assert_eq!(options.format.as_deref(), Some("[%l] "));

        assert!(matches!(
            ConsoleOptions::from_yaml_file("/nonexistent/console.yaml"),
            Err(ConsoleError::ConfigRead { .. })
        ));
    }

    #[test]
    fn test_env_lookup_ignores_empty() {
        let vars: HashMap<&str, &str> = [(LEVEL_ENV, ""), (FORMAT_ENV, "%l ")].into_iter().collect();
        let env = EnvOverrides::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(env.level, None);
        assert_eq!(env.format.as_deref(), Some("%l "));
    }
}
