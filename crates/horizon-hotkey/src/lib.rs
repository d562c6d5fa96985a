//! Horizon Hotkey - a hotkey capture widget.
//!
//! [`HotkeyEdit`](widget::HotkeyEdit) lets a user define a keyboard shortcut
//! by pressing it. Held keys are normalized into platform-aware tokens
//! (`ctrl`, `shift`, `command`, `option`, `k`, ...), shown as labeled badges
//! in a stable order, and reported to the host as a `+`-joined shortcut
//! string such as `"ctrl+shift+k"`.
//!
//! # Example
//!
//! ```
//! use horizon_hotkey::prelude::*;
//!
//! let mut edit = HotkeyEdit::new()
//!     .with_platform(Platform::Linux)
//!     .with_shortcut("ctrl+shift+k");
//!
//! edit.shortcut_changed.connect(|shortcut| println!("captured {shortcut}"));
//!
//! edit.event(&mut HotkeyEvent::focus_in(FocusReason::Mouse));
//! edit.event(&mut HotkeyEvent::key_press("Control"));
//! edit.event(&mut HotkeyEvent::key_press("k"));
//! assert_eq!(edit.shortcut(), "ctrl+k");
//!
//! edit.event(&mut HotkeyEvent::focus_out(FocusReason::Tab));
//! assert_eq!(edit.shortcut(), "ctrl+shift+k");
//! ```

pub use horizon_hotkey_core::*;

pub mod config;
pub mod hotkey;
pub mod platform;
pub mod prelude;
pub mod widget;

pub use platform::Platform;
