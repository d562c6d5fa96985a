//! Prelude module for Horizon Hotkey.
//!
//! ```ignore
//! use horizon_hotkey::prelude::*;
//! ```

// ============================================================================
// Signal/Slot and Property System
// ============================================================================

pub use crate::property::Property;
pub use crate::signal::{ConnectionId, Signal};

// ============================================================================
// Capture
// ============================================================================

pub use crate::hotkey::{
    CapturePolicy, DefaultHandling, EnterBehavior, KeyToken, OrderingPolicy, Shortcut,
};
pub use crate::platform::Platform;

// ============================================================================
// Widget
// ============================================================================

pub use crate::config::HotkeyEditConfig;
pub use crate::widget::{
    FocusReason, FocusRequest, HotkeyEdit, HotkeyEvent, HotkeyStyle, HotkeyView, KeyboardInputHandler,
};

// ============================================================================
// Errors
// ============================================================================

pub use crate::{HotkeyError, Result};
