//! Capture policies.
//!
//! Hotkey inputs in the wild disagree on a handful of details: whether Enter
//! dismisses, how badges are ordered, whether a combination may hold two
//! character keys, and which keys have their default handling suppressed.
//! [`CapturePolicy`] makes each of those an explicit, serializable choice.

use serde::{Deserialize, Serialize};

/// What the Enter key does while capturing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnterBehavior {
    /// Enter behaves like Escape: clear, release focus, dismiss.
    #[default]
    Dismiss,
    /// Enter is passed through untouched.
    Ignore,
}

/// How pressed keys are ordered for display and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingPolicy {
    /// Labeled keys (modifiers, arrows, space) first, then letters, then
    /// everything else; ties broken by token name.
    #[default]
    KnownFirst,
    /// `ctrl`, then `shift`, then `alt`, then everything else by token name.
    ModifierPriority,
}

/// Which key events have their default handling suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultHandling {
    /// Suppress every key except Escape and Enter.
    #[default]
    SuppressAllButTerminators,
    /// Suppress every key except Enter.
    SuppressAllButEnter,
}

impl DefaultHandling {
    /// Whether default handling of `raw` should be suppressed.
    pub fn suppresses(self, raw: &str) -> bool {
        use super::token::raw::{ENTER, ESCAPE};

        match self {
            Self::SuppressAllButTerminators => raw != ESCAPE && raw != ENTER,
            Self::SuppressAllButEnter => raw != ENTER,
        }
    }
}

/// The full set of behavioral choices for a capture session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CapturePolicy {
    /// What Enter does.
    pub enter: EnterBehavior,
    /// Display and serialization order.
    pub ordering: OrderingPolicy,
    /// At most one plain character key per combination.
    pub single_char_exclusive: bool,
    /// Which keys have their default handling suppressed.
    pub default_handling: DefaultHandling,
}

impl CapturePolicy {
    /// Enter dismisses, known-first ordering, one character key, every key
    /// except Escape and Enter suppressed.
    pub const fn strict() -> Self {
        Self {
            enter: EnterBehavior::Dismiss,
            ordering: OrderingPolicy::KnownFirst,
            single_char_exclusive: true,
            default_handling: DefaultHandling::SuppressAllButTerminators,
        }
    }

    /// Enter ignored, modifier-priority ordering, any number of character
    /// keys, every key except Enter suppressed.
    pub const fn permissive() -> Self {
        Self {
            enter: EnterBehavior::Ignore,
            ordering: OrderingPolicy::ModifierPriority,
            single_char_exclusive: false,
            default_handling: DefaultHandling::SuppressAllButEnter,
        }
    }

    /// Builder: set the Enter behavior.
    pub fn with_enter(mut self, enter: EnterBehavior) -> Self {
        self.enter = enter;
        self
    }

    /// Builder: set the ordering policy.
    pub fn with_ordering(mut self, ordering: OrderingPolicy) -> Self {
        self.ordering = ordering;
        self
    }

    /// Builder: enable or disable single character exclusivity.
    pub fn with_single_char_exclusive(mut self, exclusive: bool) -> Self {
        self.single_char_exclusive = exclusive;
        self
    }

    /// Builder: set the default-handling policy.
    pub fn with_default_handling(mut self, handling: DefaultHandling) -> Self {
        self.default_handling = handling;
        self
    }
}

impl Default for CapturePolicy {
    fn default() -> Self {
        Self::strict()
    }
}
