//! Widget layer: the hotkey widget, its events, focus handling and view tree.
//!
//! The widget is host-agnostic. The host translates its input into
//! [`HotkeyEvent`]s (winit users can use [`keyboard::KeyboardInputHandler`]),
//! applies the widget's [`FocusRequest`]s, and renders the [`HotkeyView`].

mod events;
mod focus;
pub mod keyboard;
mod style;
mod view;
pub mod widgets;

pub use events::{
    EventBase, FocusInEvent, FocusOutEvent, FocusReason, HotkeyEvent, KeyPressEvent,
    KeyReleaseEvent, MouseButton, WrapperClickEvent,
};
pub use focus::{FocusRequest, HiddenInput};
pub use keyboard::{KeyboardInputHandler, raw_key_name};
pub use style::HotkeyStyle;
pub use view::{HotkeyView, Region, ViewNode};
pub use widgets::HotkeyEdit;
