//! End-to-end capture scenarios driven through the public widget API.

use std::sync::Arc;

use horizon_hotkey::hotkey::{CapturePolicy, OrderingPolicy, order, parse_lenient};
use horizon_hotkey::logging::filter_directive;
use horizon_hotkey::prelude::*;
use parking_lot::Mutex;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_directive("trace"))
        .with_test_writer()
        .try_init();
}

/// A focused widget on the given platform, with every emitted shortcut recorded.
fn capturing(platform: Platform) -> (HotkeyEdit, Arc<Mutex<Vec<String>>>) {
    init_logging();
    let mut edit = HotkeyEdit::new().with_platform(platform);
    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = changes.clone();
    edit.shortcut_changed.connect(move |s: &String| sink.lock().push(s.clone()));
    edit.event(&mut HotkeyEvent::focus_in(FocusReason::Mouse));
    (edit, changes)
}

fn down(edit: &mut HotkeyEdit, key: &str) {
    edit.event(&mut HotkeyEvent::key_press(key));
}

fn up(edit: &mut HotkeyEdit, key: &str) {
    edit.event(&mut HotkeyEvent::key_release(key));
}

/// Apply the host side of focus handling until no request is pending.
fn apply_focus_requests(edit: &mut HotkeyEdit) {
    while let Some(request) = edit.take_focus_request() {
        let mut event = match request {
            FocusRequest::Focus => HotkeyEvent::focus_in(FocusReason::Request),
            FocusRequest::Blur => HotkeyEvent::focus_out(FocusReason::Request),
        };
        edit.event(&mut event);
    }
}

#[test]
fn test_control_then_k() {
    let (mut edit, changes) = capturing(Platform::Linux);
    down(&mut edit, "Control");
    down(&mut edit, "K");

    assert_eq!(edit.shortcut(), "ctrl+k");
    assert_eq!(changes.lock().last().map(String::as_str), Some("ctrl+k"));
}

#[test]
fn test_release_starts_new_combination() {
    let (mut edit, changes) = capturing(Platform::Linux);
    down(&mut edit, "K");
    up(&mut edit, "K");
    down(&mut edit, "J");

    assert_eq!(edit.shortcut(), "j");
    assert_eq!(*changes.lock(), vec!["k".to_string(), "j".to_string()]);
}

#[test]
fn test_escape_with_default_clears() {
    init_logging();
    let mut edit = HotkeyEdit::new()
        .with_platform(Platform::Linux)
        .with_shortcut("ctrl+shift+k");
    assert_eq!(edit.shortcut(), "ctrl+shift+k");

    edit.event(&mut HotkeyEvent::click());
    apply_focus_requests(&mut edit);
    assert!(edit.is_capturing());

    down(&mut edit, "Escape");
    apply_focus_requests(&mut edit);

    assert!(!edit.has_focus());
    assert_eq!(edit.shortcut(), "");
    assert_eq!(edit.input().value(), "");
}

#[test]
fn test_backspace_removes_exactly_one() {
    let (mut edit, _) = capturing(Platform::Linux);
    for key in ["Control", "Shift", "k"] {
        down(&mut edit, key);
    }
    assert_eq!(edit.view().badge_labels().len(), 3);

    down(&mut edit, "Backspace");
    assert_eq!(edit.view().badge_labels().len(), 2);
    assert_eq!(edit.shortcut(), "ctrl+shift");
}

#[test]
fn test_mac_alt_is_option() {
    let (mut edit, _) = capturing(Platform::Mac);
    down(&mut edit, "Alt");

    assert_eq!(edit.shortcut(), "option");
    assert_eq!(edit.view().badge_labels(), vec!["⌥"]);
}

#[test]
fn test_windows_meta_stays_meta() {
    let (mut edit, _) = capturing(Platform::Windows);
    down(&mut edit, "Meta");
    down(&mut edit, "Alt");

    assert_eq!(edit.shortcut(), "alt+meta");
    assert_eq!(edit.view().badge_labels(), vec!["alt", "meta"]);
}

#[test]
fn test_blur_restores_parsed_default() {
    init_logging();
    let mut edit = HotkeyEdit::new()
        .with_platform(Platform::Linux)
        .with_shortcut("shift+ctrl+ +x");
    let dismissed = Arc::new(Mutex::new(0));
    let count = dismissed.clone();
    edit.dismissed.connect(move |_| *count.lock() += 1);

    edit.event(&mut HotkeyEvent::focus_in(FocusReason::Tab));
    down(&mut edit, "q");
    edit.event(&mut HotkeyEvent::focus_out(FocusReason::Tab));

    let expected = order(
        &parse_lenient(Some("shift+ctrl+ +x"), Platform::Linux),
        OrderingPolicy::KnownFirst,
    );
    let expected: Vec<&str> = expected.iter().map(|t| t.as_str()).collect();
    assert_eq!(edit.shortcut(), expected.join("+"));
    assert_eq!(edit.shortcut(), "ctrl+shift+x");
    assert_eq!(*dismissed.lock(), 1);
}

#[test]
fn test_validator_gate_and_error_message() {
    init_logging();
    let mut edit = HotkeyEdit::new()
        .with_platform(Platform::Linux)
        .with_validator(|s| s.split('+').count() >= 2)
        .with_error_message("Add a modifier");
    let rejected = Arc::new(Mutex::new(Vec::new()));
    let sink = rejected.clone();
    edit.invalid.connect(move |s: &String| sink.lock().push(s.clone()));

    edit.event(&mut HotkeyEvent::focus_in(FocusReason::Mouse));
    down(&mut edit, "a");
    assert_eq!(*rejected.lock(), vec!["a".to_string()]);
    assert_eq!(edit.view().error_message(), Some("Add a modifier"));

    up(&mut edit, "a");
    down(&mut edit, "Alt");
    down(&mut edit, "a");
    apply_focus_requests(&mut edit);

    assert!(!edit.is_capturing());
    assert_eq!(edit.shortcut(), "alt+a");
    assert_eq!(edit.view().error_message(), None);
}

#[test]
fn test_permissive_policy() {
    init_logging();
    let mut edit = HotkeyEdit::new()
        .with_platform(Platform::Linux)
        .with_policy(CapturePolicy::permissive());
    edit.event(&mut HotkeyEvent::focus_in(FocusReason::Mouse));

    for key in ["k", "Alt", "j", "Shift", "Control"] {
        down(&mut edit, key);
    }
    assert_eq!(edit.shortcut(), "ctrl+shift+alt+j+k");

    let mut escape = HotkeyEvent::key_press("Escape");
    edit.event(&mut escape);
    assert!(escape.is_default_prevented());

    let mut enter = HotkeyEvent::key_press("Enter");
    edit.event(&mut enter);
    assert!(!enter.is_default_prevented());
}

#[test]
fn test_ordering_is_independent_of_press_order() {
    let presses = [
        ["Shift", "ArrowUp", "Control", "k"],
        ["k", "Control", "ArrowUp", "Shift"],
        ["ArrowUp", "k", "Shift", "Control"],
    ];
    let mut shortcuts = Vec::new();
    for keys in presses {
        let (mut edit, _) = capturing(Platform::Linux);
        for key in keys {
            down(&mut edit, key);
        }
        shortcuts.push(edit.shortcut());
    }
    assert!(shortcuts.iter().all(|s| s == "ctrl+shift+up+k"));
}

#[test]
fn test_widget_from_config() {
    init_logging();
    let config = HotkeyEditConfig::from_toml_str(
        r#"
        platform = "mac"
        focused_placeholder = "Recording"

        [style]
        badge = "kbd"
        "#,
    )
    .unwrap();

    let mut edit = HotkeyEdit::from_config(&config).with_shortcut("meta+s");
    assert_eq!(edit.platform(), Platform::Mac);
    assert_eq!(edit.shortcut(), "command+s");

    let view = edit.view();
    let badges = view.root().find_all(horizon_hotkey::widget::Region::Badge);
    assert!(badges.iter().all(|b| b.class == "kbd"));

    edit.event(&mut HotkeyEvent::focus_in(FocusReason::Mouse));
    assert_eq!(edit.view().placeholder(), Some("Recording"));
}
