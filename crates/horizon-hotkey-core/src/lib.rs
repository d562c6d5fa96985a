//! Core systems for Horizon Hotkey.
//!
//! This crate provides the foundational pieces the hotkey widget is built on:
//!
//! - **Signal/Slot System**: Type-safe change and dismissal notifications
//! - **Property System**: Values with change detection
//! - **Errors**: Shortcut parsing and configuration failures
//! - **Logging**: `tracing` targets and span names
//!
//! # Signal Example
//!
//! ```
//! use horizon_hotkey_core::Signal;
//!
//! let dismissed = Signal::<()>::new();
//! let conn_id = dismissed.connect(|_| println!("capture dismissed"));
//!
//! dismissed.emit(());
//! dismissed.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use horizon_hotkey_core::{Property, Signal};
//!
//! struct DefaultShortcut {
//!     value: Property<Option<String>>,
//!     value_changed: Signal<Option<String>>,
//! }
//!
//! impl DefaultShortcut {
//!     fn set(&self, value: Option<String>) {
//!         if self.value.set(value.clone()) {
//!             self.value_changed.emit(value);
//!         }
//!     }
//! }
//! ```

mod error;
pub mod logging;
pub mod property;
pub mod signal;

pub use error::{ConfigError, HotkeyError, Result, ShortcutParseError};
pub use property::Property;
pub use signal::{ConnectionId, Signal};
