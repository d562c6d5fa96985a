//! Keyboard input conversion from winit events.
//!
//! Hotkey widgets consume raw key identifiers in the W3C `KeyboardEvent.key`
//! vocabulary. winit's logical keys follow the same naming, so the conversion
//! is mostly a rename.
//!
//! # Usage
//!
//! ```ignore
//! use horizon_hotkey::widget::keyboard::KeyboardInputHandler;
//!
//! let handler = KeyboardInputHandler::new();
//!
//! // When receiving a winit keyboard event:
//! if let Some(mut event) = handler.handle_key_event(&winit_event) {
//!     hotkey_edit.event(&mut event);
//! }
//! ```

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{Key as WinitKey, NamedKey};

use super::events::{HotkeyEvent, KeyPressEvent, KeyReleaseEvent};

/// Converts a winit logical key to a raw key identifier.
///
/// Returns `None` for keys that carry no usable identity (dead keys and
/// unidentified native keys).
pub fn raw_key_name(key: &WinitKey) -> Option<String> {
    match key {
        WinitKey::Named(named) => Some(named_key_name(named)),
        WinitKey::Character(c) => Some(c.to_string()),
        WinitKey::Unidentified(_) => None,
        WinitKey::Dead(_) => None,
    }
}

/// Converts a winit named key to its raw identifier.
fn named_key_name(key: &NamedKey) -> String {
    let name = match key {
        NamedKey::Space => " ",

        // Modifiers
        NamedKey::Control => "Control",
        NamedKey::Shift => "Shift",
        NamedKey::Alt => "Alt",
        NamedKey::AltGraph => "AltGraph",
        NamedKey::Super | NamedKey::Meta => "Meta",
        NamedKey::CapsLock => "CapsLock",

        // Navigation
        NamedKey::ArrowUp => "ArrowUp",
        NamedKey::ArrowDown => "ArrowDown",
        NamedKey::ArrowLeft => "ArrowLeft",
        NamedKey::ArrowRight => "ArrowRight",

        // Capture control
        NamedKey::Escape => "Escape",
        NamedKey::Enter => "Enter",
        NamedKey::Backspace => "Backspace",

        // Everything else already uses its W3C name as the variant name
        other => return format!("{other:?}"),
    };
    name.to_string()
}

/// Translates winit keyboard input into hotkey widget events.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardInputHandler {
    /// Drop key repeat events instead of forwarding them.
    skip_repeats: bool,
}

impl KeyboardInputHandler {
    /// Create a handler that forwards repeats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: drop key repeat events.
    pub fn with_skip_repeats(mut self, skip: bool) -> Self {
        self.skip_repeats = skip;
        self
    }

    /// Translate a logical key and its state into a widget event.
    pub fn translate(
        &self,
        key: &WinitKey,
        state: ElementState,
        repeat: bool,
    ) -> Option<HotkeyEvent> {
        if repeat && self.skip_repeats {
            return None;
        }
        let name = raw_key_name(key)?;
        let event = match state {
            ElementState::Pressed => {
                let mut press = KeyPressEvent::new(name);
                press.is_repeat = repeat;
                HotkeyEvent::KeyPress(press)
            }
            ElementState::Released => HotkeyEvent::KeyRelease(KeyReleaseEvent::new(name)),
        };
        Some(event)
    }

    /// Translate a full winit key event.
    pub fn handle_key_event(&self, event: &KeyEvent) -> Option<HotkeyEvent> {
        self.translate(&event.logical_key, event.state, event.repeat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::SmolStr;

    #[test]
    fn test_named_modifiers() {
        assert_eq!(raw_key_name(&WinitKey::Named(NamedKey::Control)).as_deref(), Some("Control"));
        assert_eq!(raw_key_name(&WinitKey::Named(NamedKey::Super)).as_deref(), Some("Meta"));
        assert_eq!(raw_key_name(&WinitKey::Named(NamedKey::Space)).as_deref(), Some(" "));
        assert_eq!(raw_key_name(&WinitKey::Named(NamedKey::F5)).as_deref(), Some("F5"));
        assert_eq!(raw_key_name(&WinitKey::Named(NamedKey::Tab)).as_deref(), Some("Tab"));
    }

    #[test]
    fn test_character_and_dead() {
        let k = WinitKey::Character(SmolStr::new("K"));
        assert_eq!(raw_key_name(&k).as_deref(), Some("K"));
        assert_eq!(raw_key_name(&WinitKey::Dead(Some('`'))), None);
    }

    #[test]
    fn test_translate_press_and_release() {
        let handler = KeyboardInputHandler::new();
        let key = WinitKey::Named(NamedKey::Shift);

        match handler.translate(&key, ElementState::Pressed, false) {
            Some(HotkeyEvent::KeyPress(e)) => assert_eq!(e.key, "Shift"),
            other => panic!("unexpected event: {other:?}"),
        }
        match handler.translate(&key, ElementState::Released, false) {
            Some(HotkeyEvent::KeyRelease(e)) => assert_eq!(e.key, "Shift"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_skip_repeats() {
        let key = WinitKey::Character(SmolStr::new("a"));
        let forwarding = KeyboardInputHandler::new();
        assert!(matches!(
            forwarding.translate(&key, ElementState::Pressed, true),
            Some(HotkeyEvent::KeyPress(ref e)) if e.is_repeat
        ));

        let skipping = KeyboardInputHandler::new().with_skip_repeats(true);
        assert!(skipping.translate(&key, ElementState::Pressed, true).is_none());
    }
}
