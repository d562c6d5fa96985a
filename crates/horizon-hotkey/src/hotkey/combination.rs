//! The combination state machine.
//!
//! [`CombinationMachine`] owns the pressed set of one hotkey widget and applies
//! the capture rules across focus, key-down, key-up and blur:
//!
//! - **focus** starts a capture session with an empty set.
//! - **key-down** adds the normalized key, except for Escape (and Enter, by
//!   policy) which end the session, and Backspace which removes the most
//!   recently added key.
//! - **key-up** arms a reset latch: the next key-down that adds a key starts a
//!   fresh combination instead of extending the old one.
//! - **blur** ends the session and restores the host's default shortcut.
//! - a **default change** overwrites the set at any time.
//!
//! Between focus and the first key-down the set is empty but the default
//! shortcut is still in effect, so [`CombinationMachine::shortcut`] reports
//! the default. Any key-down, including Escape and Backspace, ends that.
//!
//! The machine performs no notifications itself. Each operation returns a
//! [`Transition`] describing what happened, and the owning widget emits its
//! signals only after the machine has settled.

use horizon_hotkey_core::logging::targets;

use crate::platform::Platform;

use super::ordering::order;
use super::policy::{CapturePolicy, EnterBehavior};
use super::shortcut::{join_tokens, parse_lenient};
use super::token::{KeyToken, normalize, raw};

/// The capture lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    /// Not capturing. The pressed set mirrors the default shortcut, or
    /// whatever the last session ended with.
    #[default]
    Idle,
    /// Focused and accumulating key-downs.
    Capturing,
}

/// The set of keys in the in-progress combination.
///
/// Keys are unique. Insertion order is recorded so Backspace can remove the
/// most recently added key, but it carries no other meaning: equality is set
/// equality and display order comes from [`PressedKeys::ordered`].
#[derive(Debug, Clone, Default)]
pub struct PressedKeys {
    keys: Vec<KeyToken>,
}

impl PressedKeys {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set from tokens, ignoring duplicates.
    pub fn from_tokens<I: IntoIterator<Item = KeyToken>>(tokens: I) -> Self {
        let mut keys = Self::new();
        for token in tokens {
            keys.insert(token);
        }
        keys
    }

    /// The number of keys held.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no keys are held.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Whether `token` is held.
    pub fn contains(&self, token: &str) -> bool {
        self.keys.iter().any(|k| k.as_str() == token)
    }

    /// Add a key. Returns `false` if it was already held.
    pub fn insert(&mut self, token: KeyToken) -> bool {
        if self.keys.contains(&token) {
            false
        } else {
            self.keys.push(token);
            true
        }
    }

    /// Remove the most recently added key.
    pub fn remove_last(&mut self) -> Option<KeyToken> {
        self.keys.pop()
    }

    /// Remove every key.
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// The plain character key currently held, if any.
    pub fn plain_char(&self) -> Option<&KeyToken> {
        self.keys.iter().find(|k| k.is_plain_char())
    }

    /// Keys in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &KeyToken> {
        self.keys.iter()
    }

    /// Keys in display order.
    pub fn ordered(&self, policy: super::OrderingPolicy) -> Vec<KeyToken> {
        order(&self.keys, policy)
    }

    /// The shortcut string: keys in display order joined with `+`.
    pub fn shortcut_string(&self, policy: super::OrderingPolicy) -> String {
        join_tokens(&self.ordered(policy))
    }
}

impl PartialEq for PressedKeys {
    fn eq(&self, other: &Self) -> bool {
        self.keys.len() == other.keys.len() && self.keys.iter().all(|k| other.keys.contains(k))
    }
}

impl Eq for PressedKeys {}

/// What a state machine operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transition {
    /// The event was consumed by the capture.
    pub handled: bool,
    /// The pressed set's content changed.
    pub changed: bool,
    /// Default handling of the key should be suppressed.
    pub prevent_default: bool,
    /// Focus should be relinquished.
    pub release_focus: bool,
    /// A capture session started.
    pub focused: bool,
    /// A capture session ended by dismissal (blur, Escape, Enter).
    pub dismissed: bool,
}

impl Transition {
    /// A transition for an event the machine did not act on.
    pub fn ignored() -> Self {
        Self::default()
    }
}

/// The per-widget capture state machine.
#[derive(Debug, Clone)]
pub struct CombinationMachine {
    policy: CapturePolicy,
    platform: Platform,
    state: CaptureState,
    pressed: PressedKeys,
    /// Armed by key-up, read and cleared by the next key-down.
    reset_armed: bool,
    /// Set by focus, cleared by the first key-down of the session.
    showing_default: bool,
    default_keys: PressedKeys,
}

impl CombinationMachine {
    /// Create an idle machine with no default shortcut.
    pub fn new(policy: CapturePolicy, platform: Platform) -> Self {
        Self {
            policy,
            platform,
            state: CaptureState::Idle,
            pressed: PressedKeys::new(),
            reset_armed: false,
            showing_default: false,
            default_keys: PressedKeys::new(),
        }
    }

    /// The capture policy.
    pub fn policy(&self) -> CapturePolicy {
        self.policy
    }

    /// The platform used for normalization.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// The current state.
    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Whether a capture session is active.
    pub fn is_capturing(&self) -> bool {
        self.state == CaptureState::Capturing
    }

    /// The pressed set.
    pub fn pressed(&self) -> &PressedKeys {
        &self.pressed
    }

    /// Whether the reset latch is armed.
    pub fn is_reset_armed(&self) -> bool {
        self.reset_armed
    }

    /// The pressed set parsed from the default shortcut.
    pub fn default_keys(&self) -> &PressedKeys {
        &self.default_keys
    }

    /// Whether the default shortcut stands in for the empty set.
    pub fn is_showing_default(&self) -> bool {
        self.showing_default && self.pressed.is_empty()
    }

    /// The current shortcut string.
    ///
    /// Empty only when the pressed set is empty and no default is in effect.
    pub fn shortcut(&self) -> String {
        let keys = if self.is_showing_default() {
            &self.default_keys
        } else {
            &self.pressed
        };
        keys.shortcut_string(self.policy.ordering)
    }

    /// Replace the pressed set, reporting whether its content changed.
    fn replace_pressed(&mut self, keys: PressedKeys) -> bool {
        let changed = self.pressed != keys;
        self.pressed = keys;
        changed
    }

    /// Apply a new default shortcut.
    ///
    /// The pressed set is overwritten immediately, even mid-capture; the
    /// capture state itself is left alone.
    pub fn set_default(&mut self, shortcut: Option<&str>) -> Transition {
        self.default_keys = PressedKeys::from_tokens(parse_lenient(shortcut, self.platform));
        let changed = self.replace_pressed(self.default_keys.clone());
        tracing::debug!(
            target: targets::CAPTURE,
            default = ?shortcut,
            changed,
            "default shortcut applied"
        );
        Transition {
            handled: true,
            changed,
            ..Transition::default()
        }
    }

    /// Start a capture session.
    pub fn focus(&mut self) -> Transition {
        if self.is_capturing() {
            return Transition {
                handled: true,
                ..Transition::default()
            };
        }

        self.state = CaptureState::Capturing;
        self.reset_armed = false;
        self.showing_default = true;
        let changed = !self.pressed.is_empty();
        self.pressed.clear();
        tracing::debug!(target: targets::CAPTURE, "capture started");

        Transition {
            handled: true,
            changed,
            focused: true,
            ..Transition::default()
        }
    }

    /// End the session because focus was lost, restoring the default.
    ///
    /// A blur arriving after the session already ended (Escape, Enter, commit)
    /// is ignored, so the set that ending produced is kept.
    pub fn blur(&mut self) -> Transition {
        if !self.is_capturing() {
            tracing::trace!(target: targets::CAPTURE, "blur while idle ignored");
            return Transition::ignored();
        }

        self.state = CaptureState::Idle;
        self.reset_armed = false;
        self.showing_default = false;
        let changed = self.replace_pressed(self.default_keys.clone());
        tracing::debug!(target: targets::CAPTURE, changed, "capture ended by blur");

        Transition {
            handled: true,
            changed,
            dismissed: true,
            ..Transition::default()
        }
    }

    /// End the session keeping the current set, and release focus.
    ///
    /// Used when a combination is accepted as complete.
    pub fn commit(&mut self) -> Transition {
        if !self.is_capturing() {
            return Transition::ignored();
        }

        self.state = CaptureState::Idle;
        self.reset_armed = false;
        self.showing_default = false;
        tracing::debug!(target: targets::CAPTURE, shortcut = %self.shortcut(), "capture committed");

        Transition {
            handled: true,
            release_focus: true,
            ..Transition::default()
        }
    }

    /// Handle a key press.
    pub fn key_down(&mut self, raw_key: &str) -> Transition {
        if !self.is_capturing() {
            tracing::trace!(target: targets::CAPTURE, raw_key, "key-down while idle ignored");
            return Transition::ignored();
        }

        let reset = std::mem::take(&mut self.reset_armed);
        let prevent_default = self.policy.default_handling.suppresses(raw_key);

        match raw_key {
            raw::ESCAPE => self.terminate(raw_key, prevent_default),
            raw::ENTER if self.policy.enter == EnterBehavior::Dismiss => {
                self.terminate(raw_key, prevent_default)
            }
            raw::ENTER => Transition {
                prevent_default,
                ..Transition::default()
            },
            raw::BACKSPACE => {
                self.showing_default = false;
                let removed = self.pressed.remove_last();
                tracing::debug!(target: targets::CAPTURE, removed = ?removed, "backspace");
                Transition {
                    handled: true,
                    changed: removed.is_some(),
                    prevent_default,
                    ..Transition::default()
                }
            }
            _ => {
                self.showing_default = false;
                let token = normalize(raw_key, self.platform);
                let mut next = if reset {
                    PressedKeys::new()
                } else {
                    self.pressed.clone()
                };

                let conflicting = self.policy.single_char_exclusive
                    && token.is_plain_char()
                    && next.plain_char().is_some_and(|held| *held != token);

                if conflicting {
                    tracing::debug!(target: targets::CAPTURE, token = %token, "second main key dropped");
                } else {
                    next.insert(token);
                }

                let changed = self.replace_pressed(next);
                tracing::debug!(
                    target: targets::CAPTURE,
                    reset,
                    changed,
                    shortcut = %self.shortcut(),
                    "key-down"
                );
                Transition {
                    handled: true,
                    changed,
                    prevent_default,
                    ..Transition::default()
                }
            }
        }
    }

    /// Handle a key release.
    pub fn key_up(&mut self, raw_key: &str) -> Transition {
        if !self.is_capturing() {
            return Transition::ignored();
        }

        self.reset_armed = true;
        Transition {
            handled: true,
            prevent_default: self.policy.default_handling.suppresses(raw_key),
            ..Transition::default()
        }
    }

    /// End the session early: clear, release focus, dismiss.
    fn terminate(&mut self, raw_key: &str, prevent_default: bool) -> Transition {
        self.state = CaptureState::Idle;
        self.showing_default = false;
        let changed = !self.pressed.is_empty();
        self.pressed.clear();
        tracing::debug!(target: targets::CAPTURE, raw_key, "capture terminated");

        Transition {
            handled: true,
            changed,
            prevent_default,
            release_focus: true,
            dismissed: true,
            focused: false,
        }
    }
}
