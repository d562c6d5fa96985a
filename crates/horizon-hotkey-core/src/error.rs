//! Error types for Horizon Hotkey.

/// A specialized Result type for Horizon Hotkey operations.
pub type Result<T> = std::result::Result<T, HotkeyError>;

/// The main error type for Horizon Hotkey operations.
///
/// Capturing keys never fails; errors only arise at the edges where a host
/// hands the widget text to interpret (a shortcut string, a configuration file).
#[derive(Debug, thiserror::Error)]
pub enum HotkeyError {
    /// A shortcut string could not be parsed strictly.
    #[error("Shortcut parse error: {0}")]
    ShortcutParse(#[from] ShortcutParseError),

    /// Widget configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors produced when strictly parsing a `+`-delimited shortcut string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortcutParseError {
    /// The string contains no tokens.
    #[error("empty shortcut")]
    Empty,

    /// A segment between two delimiters is empty (e.g. `ctrl++k`).
    #[error("empty key at position {position}")]
    EmptySegment {
        /// Zero-based segment index.
        position: usize,
    },

    /// The same key appears twice.
    #[error("duplicate key '{0}'")]
    DuplicateKey(String),

    /// More than one plain character key was given.
    #[error("more than one main key: '{first}' and '{second}'")]
    MultipleMainKeys {
        /// The main key seen first.
        first: String,
        /// The conflicting main key.
        second: String,
    },
}

/// Errors produced while loading widget configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML input could not be deserialized.
    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON input could not be deserialized.
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// A field held a value outside its accepted range.
    #[error("invalid value for '{field}': {message}")]
    InvalidValue {
        /// The offending field.
        field: String,
        /// What was wrong with it.
        message: String,
    },
}

impl ConfigError {
    /// Create an invalid value error.
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for HotkeyError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(ConfigError::Toml(err))
    }
}

impl From<serde_json::Error> for HotkeyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(ConfigError::Json(err))
    }
}
