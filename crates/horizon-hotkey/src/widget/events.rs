//! Widget event types.
//!
//! The host's event loop translates platform input into these events and
//! delivers them to [`HotkeyEdit::event`](super::widgets::HotkeyEdit::event).
//! Keyboard events carry the raw key identifier in W3C `KeyboardEvent.key`
//! form; see [`keyboard`](super::keyboard) for the winit conversion.

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left = 0,
    /// Secondary button (usually right).
    Right = 1,
    /// Middle button (scroll wheel click).
    Middle = 2,
}

/// Common data for all widget events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Key press event, sent when a key is pressed.
#[derive(Debug, Clone)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The raw key identifier, e.g. `"Control"`, `"k"`, `" "`, `"ArrowUp"`.
    pub key: String,
    /// Whether this is a key repeat event (key held down).
    pub is_repeat: bool,
    /// Set when the host must not apply its default handling of the key.
    default_prevented: bool,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            base: EventBase::new(),
            key: key.into(),
            is_repeat: false,
            default_prevented: false,
        }
    }

    /// Mark this event as a key repeat.
    pub fn repeated(mut self) -> Self {
        self.is_repeat = true;
        self
    }

    /// Suppress the host's default handling of this key.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether default handling was suppressed.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Key release event, sent when a key is released.
#[derive(Debug, Clone)]
pub struct KeyReleaseEvent {
    /// Base event data.
    pub base: EventBase,
    /// The raw key identifier.
    pub key: String,
    default_prevented: bool,
}

impl KeyReleaseEvent {
    /// Create a new key release event.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            base: EventBase::new(),
            key: key.into(),
            default_prevented: false,
        }
    }

    /// Suppress the host's default handling of this key.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether default handling was suppressed.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Reason for focus change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusReason {
    /// Focus changed due to mouse click.
    Mouse,
    /// Focus changed due to Tab key.
    Tab,
    /// Focus changed due to Shift+Tab (backtab).
    Backtab,
    /// Focus changed at the widget's own request.
    Request,
    /// Focus changed for any other reason.
    #[default]
    Other,
}

/// Focus in event, sent when the hidden input gains keyboard focus.
#[derive(Debug, Clone, Copy)]
pub struct FocusInEvent {
    /// Base event data.
    pub base: EventBase,
    /// The reason focus was gained.
    pub reason: FocusReason,
}

impl FocusInEvent {
    /// Create a new focus in event.
    pub fn new(reason: FocusReason) -> Self {
        Self {
            base: EventBase::new(),
            reason,
        }
    }
}

/// Focus out event, sent when the hidden input loses keyboard focus.
#[derive(Debug, Clone, Copy)]
pub struct FocusOutEvent {
    /// Base event data.
    pub base: EventBase,
    /// The reason focus was lost.
    pub reason: FocusReason,
}

impl FocusOutEvent {
    /// Create a new focus out event.
    pub fn new(reason: FocusReason) -> Self {
        Self {
            base: EventBase::new(),
            reason,
        }
    }
}

/// Mouse press anywhere in the widget's wrapper area.
#[derive(Debug, Clone, Copy)]
pub struct WrapperClickEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was pressed.
    pub button: MouseButton,
}

impl WrapperClickEvent {
    /// Create a new click event.
    pub fn new(button: MouseButton) -> Self {
        Self {
            base: EventBase::new(),
            button,
        }
    }
}

/// An event delivered to a hotkey widget.
#[derive(Debug, Clone)]
pub enum HotkeyEvent {
    /// A key was pressed.
    KeyPress(KeyPressEvent),
    /// A key was released.
    KeyRelease(KeyReleaseEvent),
    /// The hidden input gained focus.
    FocusIn(FocusInEvent),
    /// The hidden input lost focus.
    FocusOut(FocusOutEvent),
    /// The wrapper was clicked.
    WrapperClick(WrapperClickEvent),
}

impl HotkeyEvent {
    /// Shorthand for a key press event.
    pub fn key_press(key: impl Into<String>) -> Self {
        Self::KeyPress(KeyPressEvent::new(key))
    }

    /// Shorthand for a key release event.
    pub fn key_release(key: impl Into<String>) -> Self {
        Self::KeyRelease(KeyReleaseEvent::new(key))
    }

    /// Shorthand for a focus in event.
    pub fn focus_in(reason: FocusReason) -> Self {
        Self::FocusIn(FocusInEvent::new(reason))
    }

    /// Shorthand for a focus out event.
    pub fn focus_out(reason: FocusReason) -> Self {
        Self::FocusOut(FocusOutEvent::new(reason))
    }

    /// Shorthand for a left-button wrapper click.
    pub fn click() -> Self {
        Self::WrapperClick(WrapperClickEvent::new(MouseButton::Left))
    }

    fn base(&self) -> &EventBase {
        match self {
            Self::KeyPress(e) => &e.base,
            Self::KeyRelease(e) => &e.base,
            Self::FocusIn(e) => &e.base,
            Self::FocusOut(e) => &e.base,
            Self::WrapperClick(e) => &e.base,
        }
    }

    fn base_mut(&mut self) -> &mut EventBase {
        match self {
            Self::KeyPress(e) => &mut e.base,
            Self::KeyRelease(e) => &mut e.base,
            Self::FocusIn(e) => &mut e.base,
            Self::FocusOut(e) => &mut e.base,
            Self::WrapperClick(e) => &mut e.base,
        }
    }

    /// Accept the event.
    pub fn accept(&mut self) {
        self.base_mut().accept();
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.base().is_accepted()
    }

    /// Whether the host's default handling was suppressed (keyboard events only).
    pub fn is_default_prevented(&self) -> bool {
        match self {
            Self::KeyPress(e) => e.is_default_prevented(),
            Self::KeyRelease(e) => e.is_default_prevented(),
            _ => false,
        }
    }
}
