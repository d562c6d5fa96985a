//! The hidden input that receives keyboard focus on behalf of a hotkey widget.
//!
//! A hotkey widget is never typed into directly. It owns a zero-size,
//! read-only [`HiddenInput`] whose only job is to hold real keyboard focus and
//! mirror the current shortcut string as its value.
//!
//! The widget does not move focus itself. When it needs to gain or release
//! focus (a wrapper click, Escape, a committed combination) it records a
//! [`FocusRequest`]. The host drains requests with
//! [`HotkeyEdit::take_focus_request`](super::widgets::HotkeyEdit::take_focus_request),
//! applies them through its focus system, and delivers the resulting
//! `FocusIn` / `FocusOut` events back to the widget.
//!
//! ```ignore
//! hotkey_edit.event(&mut HotkeyEvent::key_press("Escape"));
//! while let Some(request) = hotkey_edit.take_focus_request() {
//!     match request {
//!         FocusRequest::Focus => focus_manager.set_focus(id, FocusReason::Request),
//!         FocusRequest::Blur => focus_manager.clear_focus(FocusReason::Request),
//!     }
//! }
//! ```

/// A request to move keyboard focus, issued by the widget to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusRequest {
    /// Give the hidden input keyboard focus.
    Focus,
    /// Take keyboard focus away from the hidden input.
    Blur,
}

/// The zero-size, read-only input element backing a hotkey widget.
///
/// The widget exclusively manages this element; hosts only see it through a
/// shared borrow.
#[derive(Debug, Clone, Default)]
pub struct HiddenInput {
    focused: bool,
    value: String,
    pending: Option<FocusRequest>,
}

impl HiddenInput {
    /// Create an unfocused, empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the input currently holds keyboard focus.
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// The mirrored shortcut string.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The input is never editable.
    pub fn is_read_only(&self) -> bool {
        true
    }

    /// The input never occupies layout space.
    pub fn size(&self) -> (f32, f32) {
        (0.0, 0.0)
    }

    /// The focus request not yet taken by the host.
    pub fn pending_request(&self) -> Option<FocusRequest> {
        self.pending
    }

    pub(crate) fn set_value(&mut self, value: String) {
        self.value = value;
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        // A request already satisfied by the host is no longer pending.
        if matches!(
            (self.pending, focused),
            (Some(FocusRequest::Focus), true) | (Some(FocusRequest::Blur), false)
        ) {
            self.pending = None;
        }
    }

    /// Record a request. The newest request replaces an older one.
    pub(crate) fn request(&mut self, request: FocusRequest) {
        self.pending = Some(request);
    }

    pub(crate) fn take_request(&mut self) -> Option<FocusRequest> {
        self.pending.take()
    }
}
