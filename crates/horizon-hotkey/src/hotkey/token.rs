//! Canonical key tokens and raw key normalization.
//!
//! Raw key identifiers arrive in the W3C `KeyboardEvent.key` vocabulary
//! (`"Control"`, `"Meta"`, `"k"`, `" "`, `"ArrowUp"`, ...). [`normalize`] maps
//! each one onto a [`KeyToken`], the lower-case name stored in a pressed set
//! and written into shortcut strings.

use std::borrow::Borrow;
use std::fmt;

use horizon_hotkey_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// Canonical token names with special meaning.
pub mod names {
    /// The space bar.
    pub const SPACE: &str = "space";
    /// The `+` key, named so it never collides with the shortcut delimiter.
    pub const PLUS: &str = "plus";
    /// Command key (Mac-like hosts).
    pub const COMMAND: &str = "command";
    /// Meta / Super / Windows key (other hosts).
    pub const META: &str = "meta";
    /// Option key (Mac-like hosts).
    pub const OPTION: &str = "option";
    /// Alt key (other hosts).
    pub const ALT: &str = "alt";
    /// Control key.
    pub const CTRL: &str = "ctrl";
    /// Shift key.
    pub const SHIFT: &str = "shift";
    /// Caps Lock key.
    pub const CAPS_LOCK: &str = "caps_lock";
    /// Arrow up.
    pub const UP: &str = "up";
    /// Arrow down.
    pub const DOWN: &str = "down";
    /// Arrow left.
    pub const LEFT: &str = "left";
    /// Arrow right.
    pub const RIGHT: &str = "right";

    /// Every modifier token.
    pub const MODIFIERS: [&str; 7] = [COMMAND, META, OPTION, ALT, CTRL, SHIFT, CAPS_LOCK];
}

/// Raw key identifiers that end or edit a capture instead of becoming tokens.
pub mod raw {
    /// Cancels the capture.
    pub const ESCAPE: &str = "Escape";
    /// Commits or is ignored, depending on policy.
    pub const ENTER: &str = "Enter";
    /// Removes the most recently added key.
    pub const BACKSPACE: &str = "Backspace";
}

/// A normalized, lower-case key name.
///
/// Tokens are case-insensitive on input and lower-case in storage, so
/// `KeyToken::new("K") == KeyToken::new("k")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyToken(String);

impl KeyToken {
    /// Create a token from any key name, lower-casing it.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().to_lowercase())
    }

    /// The canonical name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is a plain printable character (a letter, digit or symbol
    /// produced by a single key), as opposed to a named key.
    pub fn is_plain_char(&self) -> bool {
        if self.0 == names::PLUS {
            return true;
        }
        let mut chars = self.0.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if !c.is_whitespace())
    }

    /// Whether this is a single ASCII letter.
    pub fn is_letter(&self) -> bool {
        self.0.len() == 1 && self.0.as_bytes()[0].is_ascii_alphabetic()
    }

    /// Whether this is a modifier (ctrl, shift, alt/option, command/meta, caps lock).
    pub fn is_modifier(&self) -> bool {
        names::MODIFIERS.contains(&self.0.as_str())
    }
}

impl fmt::Display for KeyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for KeyToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for KeyToken {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for KeyToken {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Map a raw key identifier to its canonical token.
///
/// Rules are tried in priority order; the first match wins:
///
/// 1. a single space character becomes `space`, a `+` becomes `plus`
/// 2. Meta identifiers become `command` on Mac-like hosts, `meta` elsewhere
/// 3. Alt identifiers become `option` on Mac-like hosts, `alt` elsewhere
/// 4. Control identifiers become `ctrl`
/// 5. Shift identifiers become `shift`
/// 6. Caps Lock becomes `caps_lock`
/// 7. arrow keys become `up` / `down` / `left` / `right`
/// 8. anything else is lower-cased verbatim
///
/// ```
/// use horizon_hotkey::hotkey::normalize;
/// use horizon_hotkey::Platform;
///
/// assert_eq!(normalize("Meta", Platform::Mac).as_str(), "command");
/// assert_eq!(normalize("Meta", Platform::Linux).as_str(), "meta");
/// assert_eq!(normalize("ArrowLeft", Platform::Windows).as_str(), "left");
/// assert_eq!(normalize("K", Platform::Windows).as_str(), "k");
/// ```
pub fn normalize(raw: &str, platform: Platform) -> KeyToken {
    let token = normalize_name(raw, platform.is_mac_like());
    tracing::trace!(target: targets::NORMALIZE, raw, token = %token, %platform, "normalized key");
    KeyToken(token.into_owned())
}

fn normalize_name(raw: &str, mac: bool) -> std::borrow::Cow<'static, str> {
    use std::borrow::Cow;

    match raw {
        " " => return Cow::Borrowed(names::SPACE),
        "+" => return Cow::Borrowed(names::PLUS),
        _ => {}
    }

    let lower = raw.to_lowercase();

    if lower.contains("meta") || matches!(lower.as_str(), "super" | "os" | "command" | "cmd" | "win") {
        return Cow::Borrowed(if mac { names::COMMAND } else { names::META });
    }
    if lower.contains("alt") || lower == "option" {
        return Cow::Borrowed(if mac { names::OPTION } else { names::ALT });
    }
    if lower.contains("control") || lower == "ctrl" {
        return Cow::Borrowed(names::CTRL);
    }
    if lower.contains("shift") {
        return Cow::Borrowed(names::SHIFT);
    }

    let compact: String = lower.chars().filter(|c| *c != ' ' && *c != '_').collect();
    if compact == "capslock" {
        return Cow::Borrowed(names::CAPS_LOCK);
    }

    match lower.as_str() {
        "arrowup" | "up" => Cow::Borrowed(names::UP),
        "arrowdown" | "down" => Cow::Borrowed(names::DOWN),
        "arrowleft" | "left" => Cow::Borrowed(names::LEFT),
        "arrowright" | "right" => Cow::Borrowed(names::RIGHT),
        _ => Cow::Owned(lower),
    }
}
