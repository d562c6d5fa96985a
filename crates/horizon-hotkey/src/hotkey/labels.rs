//! Human-readable labels for key badges.

use crate::platform::Platform;

use super::token::{KeyToken, names};

/// Separator drawn between adjacent badges.
pub const SEPARATOR: &str = "+";

/// Look up the label for a known token, if it has one.
///
/// Mac-like hosts use Apple glyphs for Alt and Control; every other labeled
/// token reads the same on all platforms.
fn known_label(token: &str, platform: Platform) -> Option<&'static str> {
    let mac = platform.is_mac_like();
    let label = match token {
        names::UP => "↑",
        names::DOWN => "↓",
        names::LEFT => "←",
        names::RIGHT => "→",
        names::SPACE => "space",
        names::COMMAND => "⌘",
        names::META => "meta",
        names::ALT if mac => "⌥",
        names::ALT => "alt",
        names::OPTION => "⌥",
        names::CTRL if mac => "⌃",
        names::CTRL => "ctrl",
        names::SHIFT => "⇧",
        names::CAPS_LOCK => "⇪",
        _ => return None,
    };
    Some(label)
}

/// Whether the token has a dedicated label on any platform.
///
/// Labeled tokens are the modifiers, the arrows and `space`; they sort ahead
/// of plain keys under [`OrderingPolicy::KnownFirst`](super::OrderingPolicy::KnownFirst).
pub fn has_label(token: &KeyToken) -> bool {
    known_label(token.as_str(), Platform::Linux).is_some()
}

/// The text shown on a token's badge.
///
/// `plus` is shown as `+`; other unrecognized tokens are shown verbatim.
///
/// ```
/// use horizon_hotkey::hotkey::{label, KeyToken};
/// use horizon_hotkey::Platform;
///
/// assert_eq!(label(&KeyToken::new("option"), Platform::Mac), "⌥");
/// assert_eq!(label(&KeyToken::new("alt"), Platform::Windows), "alt");
/// assert_eq!(label(&KeyToken::new("k"), Platform::Mac), "k");
/// ```
pub fn label(token: &KeyToken, platform: Platform) -> &str {
    if token.as_str() == names::PLUS {
        return "+";
    }
    known_label(token.as_str(), platform).unwrap_or(token.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lbl(token: &str, platform: Platform) -> String {
        label(&KeyToken::new(token), platform).to_string()
    }

    #[test]
    fn test_arrow_glyphs() {
        assert_eq!(lbl("up", Platform::Linux), "↑");
        assert_eq!(lbl("down", Platform::Linux), "↓");
        assert_eq!(lbl("left", Platform::Mac), "←");
        assert_eq!(lbl("right", Platform::Mac), "→");
    }

    #[test]
    fn test_mac_modifier_glyphs() {
        assert_eq!(lbl("command", Platform::Mac), "⌘");
        assert_eq!(lbl("option", Platform::Mac), "⌥");
        assert_eq!(lbl("alt", Platform::Mac), "⌥");
        assert_eq!(lbl("ctrl", Platform::Mac), "⌃");
        assert_eq!(lbl("shift", Platform::Mac), "⇧");
        assert_eq!(lbl("caps_lock", Platform::Mac), "⇪");
    }

    #[test]
    fn test_other_platform_words() {
        assert_eq!(lbl("alt", Platform::Windows), "alt");
        assert_eq!(lbl("ctrl", Platform::Linux), "ctrl");
        assert_eq!(lbl("meta", Platform::Linux), "meta");
        assert_eq!(lbl("space", Platform::Linux), "space");
    }

    #[test]
    fn test_unknown_is_verbatim() {
        assert_eq!(lbl("f5", Platform::Linux), "f5");
        assert_eq!(lbl("/", Platform::Mac), "/");
        assert_eq!(lbl("plus", Platform::Linux), "+");
        assert!(!has_label(&KeyToken::new("plus")));
    }

    #[test]
    fn test_has_label() {
        assert!(has_label(&KeyToken::new("ctrl")));
        assert!(has_label(&KeyToken::new("space")));
        assert!(has_label(&KeyToken::new("up")));
        assert!(!has_label(&KeyToken::new("k")));
        assert!(!has_label(&KeyToken::new("tab")));
    }
}
