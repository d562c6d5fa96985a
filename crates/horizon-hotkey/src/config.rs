//! Declarative configuration for [`HotkeyEdit`](crate::widget::HotkeyEdit).
//!
//! Every field is optional. A configuration can be loaded from TOML or JSON:
//!
//! ```
//! use horizon_hotkey::config::HotkeyEditConfig;
//! use horizon_hotkey::hotkey::EnterBehavior;
//!
//! let config = HotkeyEditConfig::from_toml_str(r#"
//! placeholder = "Click to record"
//! platform = "mac"
//!
//! [policy]
//! enter = "ignore"
//!
//! [style]
//! badge = "kbd"
//! "#).unwrap();
//!
//! assert_eq!(config.policy.enter, EnterBehavior::Ignore);
//! assert_eq!(config.style.badge, "kbd");
//! ```

use serde::{Deserialize, Serialize};

use horizon_hotkey_core::logging::targets;
use horizon_hotkey_core::{ConfigError, Result};

use crate::hotkey::CapturePolicy;
use crate::platform::Platform;
use crate::widget::HotkeyStyle;

/// Configuration for a hotkey widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotkeyEditConfig {
    /// Capture behavior.
    pub policy: CapturePolicy,
    /// Platform override; the current platform when absent.
    pub platform: Option<Platform>,
    /// Placeholder shown while no keys are held.
    pub placeholder: Option<String>,
    /// Placeholder shown while focused and no keys are held.
    pub focused_placeholder: Option<String>,
    /// Message shown when the validator rejects the shortcut.
    pub error_message: Option<String>,
    /// Message shown while changes are unsaved.
    pub unsaved_message: Option<String>,
    /// Region class names.
    pub style: HotkeyStyle,
    /// Show a caret while focused and empty.
    pub show_caret: bool,
    /// Start disabled.
    pub disabled: bool,
}

impl Default for HotkeyEditConfig {
    fn default() -> Self {
        Self {
            policy: CapturePolicy::default(),
            platform: None,
            placeholder: None,
            focused_placeholder: None,
            error_message: None,
            unsaved_message: None,
            style: HotkeyStyle::default(),
            show_caret: true,
            disabled: false,
        }
    }
}

impl HotkeyEditConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        tracing::debug!(target: targets::CONFIG, ?config, "loaded TOML configuration");
        Ok(config)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        tracing::debug!(target: targets::CONFIG, ?config, "loaded JSON configuration");
        Ok(config)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::invalid_value("config", e.to_string()).into())
    }

    /// Check values serde cannot reject on its own.
    ///
    /// Placeholders, when given, must contain visible text.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        for (field, value) in [
            ("placeholder", &self.placeholder),
            ("focused_placeholder", &self.focused_placeholder),
        ] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(ConfigError::invalid_value(field, "must not be blank"));
            }
        }
        Ok(())
    }
}
