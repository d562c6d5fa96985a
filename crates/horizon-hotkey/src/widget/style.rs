//! Class-name style hooks for the hotkey widget's regions.
//!
//! The widget does no painting itself; each region of its view tree carries a
//! class string that the host's stylesheet matches against.

use serde::{Deserialize, Serialize};

/// Class names applied to each region of a [`HotkeyEdit`](super::widgets::HotkeyEdit).
///
/// Missing fields in configuration fall back to the `hotkey-*` defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotkeyStyle {
    /// The clickable root.
    pub wrapper: String,
    /// The row holding every badge.
    pub badge_group: String,
    /// One badge and its trailing separator.
    pub group: String,
    /// A single key label.
    pub badge: String,
    /// The `+` between badges.
    pub separator: String,
    /// Hint text while no keys are held.
    pub placeholder: String,
    /// Insertion mark while focused and empty.
    pub caret: String,
    /// The edited marker.
    pub edited_icon: String,
    /// The invalid-combination message.
    pub error_message: String,
    /// The unsaved-changes message.
    pub unsaved_message: String,
}

impl Default for HotkeyStyle {
    fn default() -> Self {
        Self {
            wrapper: "hotkey".into(),
            badge_group: "hotkey-badges".into(),
            group: "hotkey-group".into(),
            badge: "hotkey-badge".into(),
            separator: "hotkey-separator".into(),
            placeholder: "hotkey-placeholder".into(),
            caret: "hotkey-caret".into(),
            edited_icon: "hotkey-edited".into(),
            error_message: "hotkey-error".into(),
            unsaved_message: "hotkey-unsaved".into(),
        }
    }
}

impl HotkeyStyle {
    /// Builder: set the wrapper class.
    pub fn with_wrapper(mut self, class: impl Into<String>) -> Self {
        self.wrapper = class.into();
        self
    }

    /// Builder: set the badge class.
    pub fn with_badge(mut self, class: impl Into<String>) -> Self {
        self.badge = class.into();
        self
    }

    /// Builder: set the placeholder class.
    pub fn with_placeholder(mut self, class: impl Into<String>) -> Self {
        self.placeholder = class.into();
        self
    }
}
