//! Widgets for Horizon Hotkey.
//!
//! - [`HotkeyEdit`]: Captures a keyboard shortcut as a key combination

mod hotkey_edit;

pub use hotkey_edit::{DEFAULT_PLACEHOLDER, HotkeyEdit};
