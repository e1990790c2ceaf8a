use std::time::{Duration, Instant};

use estatelist::ui::components::toast_stack::{ToastKind, ToastStack};

#[test]
fn test_toast_visible_immediately_and_removed_after_linger() {
    let start = Instant::now();
    let mut stack = ToastStack::new(Duration::from_millis(3000));

    stack.show_at(start, "X", ToastKind::Error, Duration::from_millis(100));
    assert_eq!(stack.len(), 1);
    assert!(stack.iter().any(|t| t.message == "X" && t.kind == ToastKind::Error));

    // Still present (dimming out) between expiry and the end of the linger
    stack.tick(start + Duration::from_millis(250));
    assert_eq!(stack.len(), 1);
    assert!(stack.iter().next().unwrap().is_leaving(start + Duration::from_millis(250)));

    // Gone once the 100ms lifetime plus the 300ms exit linger has elapsed
    stack.tick(start + Duration::from_millis(401));
    assert!(stack.is_empty());
}

#[test]
fn test_toasts_stack_in_insertion_order_without_cap() {
    let start = Instant::now();
    let mut stack = ToastStack::default();

    for i in 0..12 {
        stack.show_at(start, format!("toast {}", i), ToastKind::Info, Duration::from_millis(3000));
    }

    assert_eq!(stack.len(), 12);
    let messages: Vec<_> = stack.iter().map(|t| t.message.clone()).collect();
    assert_eq!(messages[0], "toast 0");
    assert_eq!(messages[11], "toast 11");
}

#[test]
fn test_manual_dismissal_removes_immediately() {
    let start = Instant::now();
    let mut stack = ToastStack::default();

    stack.show_at(start, "first", ToastKind::Success, Duration::from_millis(3000));
    let second = stack.show_at(start, "second", ToastKind::Info, Duration::from_millis(3000));

    stack.dismiss_newest();
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.iter().next().unwrap().message, "first");

    // Dismissing by id works even for an already-removed toast
    stack.dismiss(second);
    assert_eq!(stack.len(), 1);
}

#[test]
fn test_independent_durations_expire_independently() {
    let start = Instant::now();
    let mut stack = ToastStack::default();

    stack.show_at(start, "short", ToastKind::Info, Duration::from_millis(100));
    stack.show_at(start, "long", ToastKind::Info, Duration::from_millis(5000));

    stack.tick(start + Duration::from_millis(500));
    let remaining: Vec<_> = stack.iter().map(|t| t.message.as_str()).collect();
    assert_eq!(remaining, vec!["long"]);
}
