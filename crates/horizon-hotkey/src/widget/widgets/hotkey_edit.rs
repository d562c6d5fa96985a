//! Hotkey capture widget implementation.
//!
//! This module provides [`HotkeyEdit`], a widget that lets the user define a
//! keyboard shortcut by pressing the keys of the combination, and shows the
//! held keys as a row of labeled badges.
//!
//! # Example
//!
//! ```ignore
//! use horizon_hotkey::widget::widgets::HotkeyEdit;
//! use horizon_hotkey::widget::HotkeyEvent;
//!
//! let mut editor = HotkeyEdit::new()
//!     .with_shortcut("ctrl+shift+k")
//!     .with_validator(|s| s.contains('+'));
//!
//! editor.shortcut_changed.connect(|shortcut| {
//!     println!("New shortcut: {shortcut}");
//! });
//!
//! editor.event(&mut HotkeyEvent::click());
//! ```

use std::fmt;

use horizon_hotkey_core::logging::{span_names, targets};
use horizon_hotkey_core::{Property, Signal};

use crate::config::HotkeyEditConfig;
use crate::hotkey::{CapturePolicy, CombinationMachine, SEPARATOR, Transition, label};
use crate::platform::Platform;
use crate::widget::events::{HotkeyEvent, MouseButton};
use crate::widget::focus::{FocusRequest, HiddenInput};
use crate::widget::style::HotkeyStyle;
use crate::widget::view::{HotkeyView, Region, ViewNode};

/// Placeholder text used when none is configured.
pub const DEFAULT_PLACEHOLDER: &str = "Press keys...";

/// Glyph of the default edited icon.
const EDITED_GLYPH: &str = "●";

type Validator = Box<dyn Fn(&str) -> bool + Send + Sync>;
type IconRenderer = Box<dyn Fn() -> ViewNode + Send + Sync>;

/// A widget for capturing keyboard shortcuts as key combinations.
///
/// # Behavior
///
/// Clicking the widget focuses its hidden input and starts a capture:
/// - every key pressed is added to the combination
/// - releasing a key makes the next key start a new combination
/// - Backspace removes the most recently added key
/// - Escape (and Enter, unless the policy ignores it) clears the combination
///   and gives up focus
/// - losing focus restores the default shortcut
///
/// # Signals
///
/// - `focused()`: a capture session started
/// - `shortcut_changed(String)`: the combination changed and is not empty
/// - `invalid(String)`: the validator rejected a newly pressed combination
/// - `dismissed()`: the capture session was dismissed
pub struct HotkeyEdit {
    machine: CombinationMachine,

    /// Host-owned default shortcut.
    default_shortcut: Property<Option<String>>,

    /// Focus holder mirroring the shortcut string.
    input: HiddenInput,

    validator: Option<Validator>,
    edited_icon: Option<IconRenderer>,

    placeholder: String,
    focused_placeholder: Option<String>,
    error_message: Option<String>,
    unsaved_message: Option<String>,

    disabled: bool,
    edited: bool,
    show_caret: bool,

    style: HotkeyStyle,

    /// Signal emitted when the combination changes to a non-empty value.
    pub shortcut_changed: Signal<String>,

    /// Signal emitted when a capture session is dismissed.
    pub dismissed: Signal<()>,

    /// Signal emitted when a capture session starts.
    pub focused: Signal<()>,

    /// Signal emitted when the validator rejects a combination.
    pub invalid: Signal<String>,
}

impl HotkeyEdit {
    /// Create a new hotkey edit with the strict policy on the current platform.
    pub fn new() -> Self {
        Self {
            machine: CombinationMachine::new(CapturePolicy::default(), Platform::current()),
            default_shortcut: Property::new(None),
            input: HiddenInput::new(),
            validator: None,
            edited_icon: None,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            focused_placeholder: None,
            error_message: None,
            unsaved_message: None,
            disabled: false,
            edited: false,
            show_caret: true,
            style: HotkeyStyle::default(),
            shortcut_changed: Signal::new(),
            dismissed: Signal::new(),
            focused: Signal::new(),
            invalid: Signal::new(),
        }
    }

    /// Create a hotkey edit from loaded configuration.
    pub fn from_config(config: &HotkeyEditConfig) -> Self {
        let mut edit = Self::new()
            .with_policy(config.policy)
            .with_style(config.style.clone());
        if let Some(platform) = config.platform {
            edit = edit.with_platform(platform);
        }
        if let Some(text) = &config.placeholder {
            edit.placeholder = text.clone();
        }
        edit.focused_placeholder = config.focused_placeholder.clone();
        edit.error_message = config.error_message.clone();
        edit.unsaved_message = config.unsaved_message.clone();
        edit.show_caret = config.show_caret;
        edit.disabled = config.disabled;
        edit
    }

    // =========================================================================
    // Shortcut
    // =========================================================================

    /// The current shortcut string.
    pub fn shortcut(&self) -> String {
        self.machine.shortcut()
    }

    /// The host-supplied default shortcut.
    pub fn default_shortcut(&self) -> Option<String> {
        self.default_shortcut.get()
    }

    /// Set the default shortcut.
    ///
    /// The held combination is replaced immediately, even in the middle of a
    /// capture.
    pub fn set_shortcut(&mut self, shortcut: Option<String>) {
        if !self.default_shortcut.set(shortcut.clone()) {
            return;
        }
        let transition = self.machine.set_default(shortcut.as_deref());
        self.settle(transition, false);
    }

    /// Set the default shortcut using builder pattern.
    pub fn with_shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.set_shortcut(Some(shortcut.into()));
        self
    }

    // =========================================================================
    // Capture Configuration
    // =========================================================================

    /// The capture policy.
    pub fn policy(&self) -> CapturePolicy {
        self.machine.policy()
    }

    /// Set the capture policy using builder pattern.
    ///
    /// Resets the capture state and re-applies the default shortcut.
    pub fn with_policy(self, policy: CapturePolicy) -> Self {
        let platform = self.machine.platform();
        self.rebuild_machine(policy, platform)
    }

    /// The platform keys are normalized and labeled for.
    pub fn platform(&self) -> Platform {
        self.machine.platform()
    }

    /// Set the platform using builder pattern.
    ///
    /// Resets the capture state and re-applies the default shortcut.
    pub fn with_platform(self, platform: Platform) -> Self {
        let policy = self.machine.policy();
        self.rebuild_machine(policy, platform)
    }

    fn rebuild_machine(mut self, policy: CapturePolicy, platform: Platform) -> Self {
        self.machine = CombinationMachine::new(policy, platform);
        self.machine.set_default(self.default_shortcut.get().as_deref());
        self.input.set_value(self.machine.shortcut());
        self
    }

    /// Install a validity predicate using builder pattern.
    ///
    /// Each key press that changes the combination runs the predicate. A
    /// rejected combination emits `invalid`; an accepted one ends the capture
    /// and releases focus, keeping the combination.
    pub fn with_validator<F>(mut self, is_valid: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.validator = Some(Box::new(is_valid));
        self
    }

    /// Whether the current shortcut passes the validator.
    ///
    /// An empty shortcut, or a widget without a validator, is always valid.
    pub fn is_valid(&self) -> bool {
        let shortcut = self.shortcut();
        match &self.validator {
            Some(is_valid) if !shortcut.is_empty() => is_valid(&shortcut),
            _ => true,
        }
    }

    // =========================================================================
    // Text
    // =========================================================================

    /// Get the placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Set the placeholder text using builder pattern.
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Set the placeholder shown while focused, using builder pattern.
    pub fn with_focused_placeholder(mut self, text: impl Into<String>) -> Self {
        self.focused_placeholder = Some(text.into());
        self
    }

    /// Set the message shown for an invalid combination, using builder pattern.
    pub fn with_error_message(mut self, text: impl Into<String>) -> Self {
        self.error_message = Some(text.into());
        self
    }

    /// Set the unsaved-changes message, using builder pattern.
    pub fn with_unsaved_message(mut self, text: impl Into<String>) -> Self {
        self.unsaved_message = Some(text.into());
        self
    }

    /// Set or clear the unsaved-changes message.
    pub fn set_unsaved_message(&mut self, text: Option<String>) {
        self.unsaved_message = text;
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Check if the widget is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enable or disable the widget.
    ///
    /// Disabling in the middle of a capture asks the host to take focus away.
    pub fn set_disabled(&mut self, disabled: bool) {
        if self.disabled == disabled {
            return;
        }
        self.disabled = disabled;
        if disabled && self.machine.is_capturing() {
            self.input.request(FocusRequest::Blur);
        }
    }

    /// Check if the edited marker is shown.
    pub fn is_edited(&self) -> bool {
        self.edited
    }

    /// Show or hide the edited marker.
    pub fn set_edited(&mut self, edited: bool) {
        self.edited = edited;
    }

    /// Supply the node drawn as the edited marker, using builder pattern.
    pub fn with_edited_icon<F>(mut self, render: F) -> Self
    where
        F: Fn() -> ViewNode + Send + Sync + 'static,
    {
        self.edited_icon = Some(Box::new(render));
        self
    }

    /// Enable or disable the caret, using builder pattern.
    pub fn with_caret(mut self, show: bool) -> Self {
        self.show_caret = show;
        self
    }

    /// Get the style classes.
    pub fn style(&self) -> &HotkeyStyle {
        &self.style
    }

    /// Set the style classes using builder pattern.
    pub fn with_style(mut self, style: HotkeyStyle) -> Self {
        self.style = style;
        self
    }

    /// Check if a capture session is active.
    pub fn is_capturing(&self) -> bool {
        self.machine.is_capturing()
    }

    /// Check if the hidden input holds keyboard focus.
    pub fn has_focus(&self) -> bool {
        self.input.has_focus()
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// The hidden input backing this widget.
    pub fn input(&self) -> &HiddenInput {
        &self.input
    }

    /// Ask the host to focus the hidden input.
    ///
    /// Refused (returning `false`) while disabled.
    pub fn request_focus(&mut self) -> bool {
        if self.disabled {
            tracing::trace!(target: targets::CAPTURE, "focus request refused while disabled");
            return false;
        }
        self.input.request(FocusRequest::Focus);
        true
    }

    /// Ask the host to take focus away from the hidden input.
    pub fn request_blur(&mut self) {
        self.input.request(FocusRequest::Blur);
    }

    /// Take the pending focus request, if any.
    pub fn take_focus_request(&mut self) -> Option<FocusRequest> {
        self.input.take_request()
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Handle a widget event. Returns `true` if the event was consumed.
    pub fn event(&mut self, event: &mut HotkeyEvent) -> bool {
        let _span = tracing::trace_span!(target: targets::CAPTURE, span_names::EVENT).entered();

        let handled = match event {
            HotkeyEvent::KeyPress(e) => {
                if self.disabled {
                    false
                } else {
                    let transition = self.machine.key_down(&e.key);
                    if transition.prevent_default {
                        e.prevent_default();
                    }
                    self.settle(transition, true);
                    transition.handled
                }
            }
            HotkeyEvent::KeyRelease(e) => {
                if self.disabled {
                    false
                } else {
                    let transition = self.machine.key_up(&e.key);
                    if transition.prevent_default {
                        e.prevent_default();
                    }
                    self.settle(transition, false);
                    transition.handled
                }
            }
            HotkeyEvent::FocusIn(_) => self.handle_focus_in(),
            HotkeyEvent::FocusOut(_) => self.handle_focus_out(),
            HotkeyEvent::WrapperClick(e) => e.button == MouseButton::Left && self.request_focus(),
        };

        if handled {
            event.accept();
        } else {
            tracing::trace!(target: targets::CAPTURE, ?event, "event ignored");
        }
        handled
    }

    fn handle_focus_in(&mut self) -> bool {
        if self.disabled {
            self.input.request(FocusRequest::Blur);
            return false;
        }
        self.input.set_focused(true);
        let transition = self.machine.focus();
        self.settle(transition, false);
        transition.handled
    }

    fn handle_focus_out(&mut self) -> bool {
        self.input.set_focused(false);
        let transition = self.machine.blur();
        self.settle(transition, false);
        transition.handled
    }

    /// Finish a transition: update owned state, then notify.
    ///
    /// All mutation, including a commit by the validity gate, happens before
    /// the first signal is emitted.
    fn settle(&mut self, transition: Transition, key_down: bool) {
        let shortcut = self.shortcut();
        self.input.set_value(shortcut.clone());
        if transition.release_focus {
            self.input.request(FocusRequest::Blur);
        }

        let changed = transition.changed && !self.machine.pressed().is_empty();

        let mut rejected = false;
        if changed && key_down {
            if let Some(is_valid) = &self.validator {
                if is_valid(&shortcut) {
                    if self.machine.commit().release_focus {
                        self.input.request(FocusRequest::Blur);
                    }
                } else {
                    rejected = true;
                }
            }
        }

        if transition.focused {
            self.focused.emit(());
        }
        if changed {
            self.shortcut_changed.emit(shortcut.clone());
        }
        if rejected {
            tracing::debug!(target: targets::CAPTURE, %shortcut, "combination rejected");
            self.invalid.emit(shortcut);
        }
        if transition.dismissed {
            self.dismissed.emit(());
        }
    }

    // =========================================================================
    // Presentation
    // =========================================================================

    /// Build the view tree for the current state.
    pub fn view(&self) -> HotkeyView {
        let _span = tracing::trace_span!(target: targets::VIEW, span_names::VIEW).entered();

        let style = &self.style;
        let platform = self.machine.platform();
        let tokens = self.machine.pressed().ordered(self.machine.policy().ordering);
        let mut root = ViewNode::new(Region::Wrapper, &style.wrapper);

        if tokens.is_empty() && !self.disabled {
            let text = match &self.focused_placeholder {
                Some(focused) if self.input.has_focus() => focused,
                _ => &self.placeholder,
            };
            root = root.with_child(ViewNode::new(Region::Placeholder, &style.placeholder).with_text(text));
        }

        let last = tokens.len().saturating_sub(1);
        let groups = tokens.iter().enumerate().map(|(i, token)| {
            let mut group = ViewNode::new(Region::Group, &style.group)
                .with_child(ViewNode::new(Region::Badge, &style.badge).with_text(label(token, platform)));
            if i != last {
                group = group.with_child(ViewNode::new(Region::Separator, &style.separator).with_text(SEPARATOR));
            }
            group
        });
        root = root.with_child(ViewNode::new(Region::BadgeGroup, &style.badge_group).with_children(groups));

        if self.edited {
            let icon = match &self.edited_icon {
                Some(render) => render(),
                None => ViewNode::new(Region::EditedIcon, &style.edited_icon).with_text(EDITED_GLYPH),
            };
            root = root.with_child(icon);
        }

        if self.show_caret && self.input.has_focus() && tokens.is_empty() {
            root = root.with_child(ViewNode::new(Region::Caret, &style.caret));
        }

        if let Some(message) = &self.error_message {
            if !self.is_valid() {
                root = root.with_child(ViewNode::new(Region::ErrorMessage, &style.error_message).with_text(message));
            }
        }

        if let Some(message) = &self.unsaved_message {
            root = root.with_child(ViewNode::new(Region::UnsavedMessage, &style.unsaved_message).with_text(message));
        }

        root = root.with_child(ViewNode::new(Region::HiddenInput, "").with_text(self.input.value()));

        tracing::trace!(target: targets::VIEW, badges = tokens.len(), "view rebuilt");
        HotkeyView::new(root)
    }
}

impl Default for HotkeyEdit {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HotkeyEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HotkeyEdit")
            .field("machine", &self.machine)
            .field("default_shortcut", &self.default_shortcut)
            .field("input", &self.input)
            .field("disabled", &self.disabled)
            .field("edited", &self.edited)
            .finish_non_exhaustive()
    }
}

// Ensure HotkeyEdit is Send + Sync
static_assertions::assert_impl_all!(HotkeyEdit: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotkey::EnterBehavior;
    use crate::widget::events::FocusReason;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn linux() -> HotkeyEdit {
        HotkeyEdit::new().with_platform(Platform::Linux)
    }

    fn focus(edit: &mut HotkeyEdit) {
        edit.event(&mut HotkeyEvent::focus_in(FocusReason::Mouse));
    }

    fn press(edit: &mut HotkeyEdit, key: &str) -> HotkeyEvent {
        let mut event = HotkeyEvent::key_press(key);
        edit.event(&mut event);
        event
    }

    fn record<T: Clone + Send + 'static>(signal: &Signal<T>) -> Arc<Mutex<Vec<T>>> {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        signal.connect(move |v: &T| sink.lock().push(v.clone()));
        log
    }

    #[test]
    fn test_new_widget() {
        let edit = HotkeyEdit::new();
        assert_eq!(edit.shortcut(), "");
        assert_eq!(edit.default_shortcut(), None);
        assert_eq!(edit.placeholder(), DEFAULT_PLACEHOLDER);
        assert!(!edit.is_capturing());
        assert!(edit.input().is_read_only());
    }

    #[test]
    fn test_with_shortcut_sets_value_and_input() {
        let edit = linux().with_shortcut("shift + ctrl + k");
        assert_eq!(edit.shortcut(), "ctrl+shift+k");
        assert_eq!(edit.input().value(), "ctrl+shift+k");
        assert_eq!(edit.default_shortcut().as_deref(), Some("shift + ctrl + k"));
    }

    #[test]
    fn test_focus_keeps_default_until_first_key() {
        let mut edit = linux().with_shortcut("ctrl+k");
        let changes = record(&edit.shortcut_changed);

        focus(&mut edit);
        assert!(edit.is_capturing());
        assert_eq!(edit.input().value(), "ctrl+k");
        assert!(edit.view().badge_labels().is_empty());
        assert!(changes.lock().is_empty());

        press(&mut edit, "Escape");
        assert_eq!(edit.shortcut(), "");
        assert_eq!(edit.input().value(), "");
    }

    #[test]
    fn test_plus_key_survives_reparse() {
        let mut edit = linux();
        focus(&mut edit);
        press(&mut edit, "Control");
        press(&mut edit, "+");
        let captured = edit.shortcut();
        assert_eq!(captured, "ctrl+plus");
        assert_eq!(edit.view().badge_labels(), vec!["ctrl", "+"]);

        let restored = linux().with_shortcut(captured.clone());
        assert_eq!(restored.shortcut(), captured);
    }

    #[test]
    fn test_capture_emits_changes() {
        let mut edit = linux();
        let changes = record(&edit.shortcut_changed);
        let focused = record(&edit.focused);

        focus(&mut edit);
        let ctrl = press(&mut edit, "Control");
        let k = press(&mut edit, "K");

        assert!(ctrl.is_accepted() && ctrl.is_default_prevented());
        assert!(k.is_accepted());
        assert_eq!(focused.lock().len(), 1);
        assert_eq!(*changes.lock(), vec!["ctrl".to_string(), "ctrl+k".to_string()]);
        assert_eq!(edit.input().value(), "ctrl+k");
    }

    #[test]
    fn test_no_emit_for_empty_set() {
        let mut edit = linux().with_shortcut("ctrl+k");
        let changes = record(&edit.shortcut_changed);

        focus(&mut edit);
        press(&mut edit, "a");
        press(&mut edit, "Backspace");
        assert_eq!(edit.shortcut(), "");
        assert_eq!(*changes.lock(), vec!["a".to_string()]);
    }

    #[test]
    fn test_escape_requests_blur_and_dismisses() {
        let mut edit = linux().with_shortcut("ctrl+shift+k");
        let dismissed = record(&edit.dismissed);

        focus(&mut edit);
        let esc = press(&mut edit, "Escape");
        assert!(!esc.is_default_prevented());
        assert_eq!(edit.take_focus_request(), Some(FocusRequest::Blur));
        assert_eq!(edit.shortcut(), "");
        assert_eq!(dismissed.lock().len(), 1);

        edit.event(&mut HotkeyEvent::focus_out(FocusReason::Request));
        assert_eq!(edit.shortcut(), "");
        assert_eq!(dismissed.lock().len(), 1);
    }

    #[test]
    fn test_blur_restores_default() {
        let mut edit = linux().with_shortcut("alt+f4");
        let dismissed = record(&edit.dismissed);
        focus(&mut edit);
        press(&mut edit, "Control");
        press(&mut edit, "q");

        edit.event(&mut HotkeyEvent::focus_out(FocusReason::Tab));
        assert_eq!(edit.shortcut(), "alt+f4");
        assert_eq!(edit.input().value(), "alt+f4");
        assert_eq!(dismissed.lock().len(), 1);
    }

    #[test]
    fn test_validator_commits_valid_combination() {
        let mut edit = linux().with_validator(|s| s.contains('+'));
        let invalid = record(&edit.invalid);

        focus(&mut edit);
        press(&mut edit, "Control");
        assert_eq!(*invalid.lock(), vec!["ctrl".to_string()]);
        assert!(edit.is_capturing());

        press(&mut edit, "s");
        assert!(!edit.is_capturing());
        assert_eq!(edit.take_focus_request(), Some(FocusRequest::Blur));

        edit.event(&mut HotkeyEvent::focus_out(FocusReason::Request));
        assert_eq!(edit.shortcut(), "ctrl+s");
    }

    #[test]
    fn test_emit_order() {
        let mut edit = linux().with_validator(|_| false);
        let log = Arc::new(Mutex::new(Vec::new()));
        {
            let l = log.clone();
            edit.focused.connect(move |_| l.lock().push("focused"));
            let l = log.clone();
            edit.shortcut_changed.connect(move |_| l.lock().push("changed"));
            let l = log.clone();
            edit.invalid.connect(move |_| l.lock().push("invalid"));
            let l = log.clone();
            edit.dismissed.connect(move |_| l.lock().push("dismissed"));
        }

        focus(&mut edit);
        press(&mut edit, "x");
        press(&mut edit, "Escape");
        assert_eq!(*log.lock(), vec!["focused", "changed", "invalid", "dismissed"]);
    }

    #[test]
    fn test_enter_ignored_by_policy() {
        let mut edit = linux().with_policy(CapturePolicy::strict().with_enter(EnterBehavior::Ignore));
        focus(&mut edit);
        press(&mut edit, "k");
        let enter = press(&mut edit, "Enter");
        assert!(!enter.is_accepted());
        assert!(!enter.is_default_prevented());
        assert_eq!(edit.shortcut(), "k");
    }

    #[test]
    fn test_disabled_ignores_input() {
        let mut edit = linux();
        edit.set_disabled(true);
        assert!(!edit.event(&mut HotkeyEvent::click()));
        assert_eq!(edit.take_focus_request(), None);

        edit.event(&mut HotkeyEvent::focus_in(FocusReason::Tab));
        assert!(!edit.is_capturing());
        assert!(!edit.has_focus());
        assert!(!edit.view().has_caret());
        assert_eq!(edit.take_focus_request(), Some(FocusRequest::Blur));

        assert!(!edit.event(&mut HotkeyEvent::key_press("k")));
        assert!(edit.view().placeholder().is_none());
    }

    #[test]
    fn test_click_requests_focus() {
        let mut edit = linux();
        assert!(edit.event(&mut HotkeyEvent::click()));
        assert_eq!(edit.take_focus_request(), Some(FocusRequest::Focus));
    }

    #[test]
    fn test_default_change_mid_capture() {
        let mut edit = linux();
        let changes = record(&edit.shortcut_changed);
        focus(&mut edit);
        press(&mut edit, "Shift");
        edit.set_shortcut(Some("ctrl+p".into()));
        assert!(edit.is_capturing());
        assert_eq!(edit.shortcut(), "ctrl+p");
        assert_eq!(changes.lock().last().map(String::as_str), Some("ctrl+p"));

        edit.set_shortcut(Some("ctrl+p".into()));
        assert_eq!(changes.lock().len(), 2);
    }

    #[test]
    fn test_view_badges_and_separators() {
        let edit = linux().with_shortcut("k+shift+ctrl");
        let view = edit.view();
        assert_eq!(view.badge_labels(), vec!["ctrl", "⇧", "k"]);
        assert_eq!(view.separator_count(), 2);
        assert!(view.placeholder().is_none());
        assert_eq!(view.input_value(), "ctrl+shift+k");
    }

    #[test]
    fn test_view_mac_labels() {
        let edit = HotkeyEdit::new()
            .with_platform(Platform::Mac)
            .with_shortcut("meta+alt+up");
        assert_eq!(edit.view().badge_labels(), vec!["⌘", "⌥", "↑"]);
    }

    #[test]
    fn test_view_placeholder_and_caret() {
        let mut edit = linux().with_focused_placeholder("Recording...");
        assert_eq!(edit.view().placeholder(), Some(DEFAULT_PLACEHOLDER));
        assert!(!edit.view().has_caret());

        focus(&mut edit);
        let view = edit.view();
        assert_eq!(view.placeholder(), Some("Recording..."));
        assert!(view.has_caret());

        press(&mut edit, "a");
        assert!(!edit.view().has_caret());
    }

    #[test]
    fn test_view_messages_and_icon() {
        let mut edit = linux()
            .with_shortcut("k")
            .with_validator(|s| s.contains('+'))
            .with_error_message("Needs a modifier")
            .with_unsaved_message("Unsaved")
            .with_edited_icon(|| ViewNode::new(Region::Custom, "pencil"));

        let view = edit.view();
        assert_eq!(view.error_message(), Some("Needs a modifier"));
        assert_eq!(view.unsaved_message(), Some("Unsaved"));
        assert!(!view.has_edited_icon());

        edit.set_edited(true);
        assert!(edit.view().root().find(Region::Custom).is_some());

        edit.set_shortcut(Some("ctrl+k".into()));
        assert_eq!(edit.view().error_message(), None);
    }
}
