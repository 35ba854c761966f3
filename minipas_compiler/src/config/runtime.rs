// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors raised while loading a runtime configuration file
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}: {message}")]
    Io { path: String, message: String },

    #[error("Invalid configuration TOML: {message}")]
    Parse { message: String },
}

impl ConfigError {
    pub fn error_code(&self) -> crate::logging::Code {
        crate::logging::codes::output::CONFIGURATION_INVALID
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProcessorPreferences {
    /// Whether to log size, line and throughput figures for each source
    pub enable_performance_logging: bool,
}

impl FileProcessorPreferences {
    /// Defaults overridden by any `MINIPAS_*` variables that are set
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enable_performance_logging: env_bool(
                env_vars::ENABLE_PERFORMANCE_LOGGING,
                defaults.enable_performance_logging,
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPreferences {
    /// Directory receiving the hand-off file, diagnostic logs and tables
    pub output_dir: PathBuf,

    /// Append-mode log of lexical diagnostics
    pub lexical_log_file: String,

    /// Append-mode log of syntax diagnostics
    pub syntax_log_file: String,

    /// Variable table report
    pub variable_table_file: String,

    /// Procedure table report
    pub procedure_table_file: String,

    /// Whether the token stream is written to `<stem>.dyd`
    pub persist_handoff: bool,

    /// Whether a JSON summary is written to `<stem>.json`
    pub emit_json_summary: bool,
}

impl Default for OutputPreferences {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            lexical_log_file: "lexicalError.err".to_string(),
            syntax_log_file: "grammarError.err".to_string(),
            variable_table_file: "variableList.var".to_string(),
            procedure_table_file: "processList.pro".to_string(),
            persist_handoff: true,
            emit_json_summary: false,
        }
    }
}

impl OutputPreferences {
    /// Defaults overridden by any `MINIPAS_*` variables that are set
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            output_dir: env::var(env_vars::OUTPUT_DIR)
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            lexical_log_file: env::var(env_vars::LEXICAL_LOG_FILE)
                .unwrap_or(defaults.lexical_log_file),
            syntax_log_file: env::var(env_vars::SYNTAX_LOG_FILE)
                .unwrap_or(defaults.syntax_log_file),
            variable_table_file: env::var(env_vars::VARIABLE_TABLE_FILE)
                .unwrap_or(defaults.variable_table_file),
            procedure_table_file: env::var(env_vars::PROCEDURE_TABLE_FILE)
                .unwrap_or(defaults.procedure_table_file),
            persist_handoff: env_bool(env_vars::PERSIST_HANDOFF, defaults.persist_handoff),
            emit_json_summary: env_bool(env_vars::EMIT_JSON_SUMMARY, defaults.emit_json_summary),
        }
    }

    /// Default file names rooted at `dir`
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            output_dir: dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn lexical_log_path(&self) -> PathBuf {
        self.output_dir.join(&self.lexical_log_file)
    }

    pub fn syntax_log_path(&self) -> PathBuf {
        self.output_dir.join(&self.syntax_log_file)
    }

    pub fn variable_table_path(&self) -> PathBuf {
        self.output_dir.join(&self.variable_table_file)
    }

    pub fn procedure_table_path(&self) -> PathBuf {
        self.output_dir.join(&self.procedure_table_file)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging (user preference)
    pub use_structured_logging: bool,

    /// Whether to enable console output (user preference)
    pub enable_console_logging: bool,

    /// User preferred minimum log level
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: false,
            enable_console_logging: true,
            min_log_level: LogLevel::Warning,
        }
    }
}

impl LoggingPreferences {
    /// Defaults overridden by any `MINIPAS_*` variables that are set
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            use_structured_logging: env_bool(
                env_vars::LOGGING_USE_STRUCTURED,
                defaults.use_structured_logging,
            ),
            enable_console_logging: env_bool(
                env_vars::LOGGING_ENABLE_CONSOLE,
                defaults.enable_console_logging,
            ),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(defaults.min_log_level),
        }
    }
}

/// Boolean environment variable; unset or unparsable values keep `default`
fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Convert to events::LogLevel for compatibility
    pub fn to_events_log_level(&self) -> crate::logging::events::LogLevel {
        match self {
            LogLevel::Error => crate::logging::events::LogLevel::Error,
            LogLevel::Warning => crate::logging::events::LogLevel::Warning,
            LogLevel::Info => crate::logging::events::LogLevel::Info,
            LogLevel::Debug => crate::logging::events::LogLevel::Debug,
        }
    }
}

/// Parse log level from string (used for environment variables)
fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub file_processor: FileProcessorPreferences,
    pub output: OutputPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    /// Parse a configuration from TOML; missing tables and keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Load a configuration file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Defaults with every `MINIPAS_*` override applied
    pub fn from_env() -> Self {
        Self {
            file_processor: FileProcessorPreferences::from_env(),
            output: OutputPreferences::from_env(),
            logging: LoggingPreferences::from_env(),
        }
    }

    /// Configuration file named by `MINIPAS_CONFIG`, otherwise [`Self::from_env`]
    pub fn load() -> Result<Self, ConfigError> {
        match env::var(env_vars::CONFIG_FILE) {
            Ok(path) => Self::from_toml_file(path),
            Err(_) => Ok(Self::from_env()),
        }
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    pub const CONFIG_FILE: &str = "MINIPAS_CONFIG";

    // File Processor
    pub const ENABLE_PERFORMANCE_LOGGING: &str = "MINIPAS_ENABLE_PERFORMANCE_LOGGING";

    // Output
    pub const OUTPUT_DIR: &str = "MINIPAS_OUTPUT_DIR";
    pub const LEXICAL_LOG_FILE: &str = "MINIPAS_LEXICAL_LOG_FILE";
    pub const SYNTAX_LOG_FILE: &str = "MINIPAS_SYNTAX_LOG_FILE";
    pub const VARIABLE_TABLE_FILE: &str = "MINIPAS_VARIABLE_TABLE_FILE";
    pub const PROCEDURE_TABLE_FILE: &str = "MINIPAS_PROCEDURE_TABLE_FILE";
    pub const PERSIST_HANDOFF: &str = "MINIPAS_PERSIST_HANDOFF";
    pub const EMIT_JSON_SUMMARY: &str = "MINIPAS_EMIT_JSON_SUMMARY";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "MINIPAS_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "MINIPAS_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "MINIPAS_LOGGING_MIN_LEVEL";
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_log_level("error"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("ERROR"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("warn"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("1"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("info"), Some(LogLevel::Info));
        assert_eq!(parse_log_level("debug"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("verbose"), None);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = RuntimeConfig::from_toml_str(
            r#"
            [output]
            output_dir = "build"
            persist_handoff = false

            [logging]
            min_log_level = "Debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.output.output_dir, PathBuf::from("build"));
        assert!(!config.output.persist_handoff);
        assert_eq!(config.logging.min_log_level, LogLevel::Debug);
        assert_eq!(
            config.output.variable_table_path(),
            PathBuf::from("build").join(&config.output.variable_table_file)
        );
    }

    #[test]
    fn test_defaults_are_fixed() {
        let output = OutputPreferences::default();
        assert_eq!(output.output_dir, PathBuf::from("."));
        assert_eq!(output.syntax_log_file, "grammarError.err");
        assert!(output.persist_handoff);
        assert!(!output.emit_json_summary);

        let logging = LoggingPreferences::default();
        assert_eq!(logging.min_log_level, LogLevel::Warning);
        assert!(logging.enable_console_logging);

        let output = OutputPreferences::in_dir("build");
        assert_eq!(output.lexical_log_path(), PathBuf::from("build").join("lexicalError.err"));
    }

    #[test]
    fn test_env_bool_fallback() {
        assert!(env_bool("MINIPAS_TEST_UNSET_FLAG", true));
        assert!(!env_bool("MINIPAS_TEST_UNSET_FLAG", false));
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let result = RuntimeConfig::from_toml_str("[output\noutput_dir = 3");
        assert_matches!(result, Err(ConfigError::Parse { .. }));
        if let Err(error) = result {
            assert_eq!(
                error.error_code(),
                crate::logging::codes::output::CONFIGURATION_INVALID
            );
        }
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = RuntimeConfig::from_toml_file(dir.path().join("absent.toml"));
        assert_matches!(result, Err(ConfigError::Io { .. }));
    }
}
