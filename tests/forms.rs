use std::collections::HashMap;

use estatelist::forms::{password, FieldState, FormState, UsernameStatus};

#[test]
fn test_password_match_empty_confirmation_is_undecided() {
    assert_eq!(password::check_match("secret", ""), None);
    assert_eq!(password::check_match("", ""), None);
}

#[test]
fn test_password_match_mismatch() {
    assert_eq!(password::check_match("secret", "secre"), Some(false));
    assert_eq!(password::check_match("", "secret"), Some(false));
}

#[test]
fn test_password_match_equal_values() {
    assert_eq!(password::check_match("secret", "secret"), Some(true));
}

#[test]
fn test_username_status_gating() {
    assert!(UsernameStatus::Available.allows_submit());
    assert!(!UsernameStatus::Taken.allows_submit());
    assert!(!UsernameStatus::Unchecked.allows_submit());
    assert!(!UsernameStatus::Checking.allows_submit());
    assert!(!UsernameStatus::Failed.allows_submit());
}

fn sample_form() -> FormState {
    FormState::new(vec![
        FieldState::new("title", "Title"),
        FieldState::new("description", "Description"),
    ])
}

#[test]
fn test_apply_errors_clears_previous_marks_first() {
    let mut form = sample_form();
    form.set_error("title", "Too short");

    // A new reply marks only the description; the old title mark must go
    let mut errors = HashMap::new();
    errors.insert("description".to_string(), "Required".to_string());
    form.apply_errors(&errors);

    assert!(form.field("title").unwrap().error.is_none());
    assert_eq!(form.field("description").unwrap().error.as_deref(), Some("Required"));
}

#[test]
fn test_apply_errors_ignores_unknown_fields() {
    let mut form = sample_form();
    let mut errors = HashMap::new();
    errors.insert("nonexistent".to_string(), "nope".to_string());
    form.apply_errors(&errors);
    assert!(form.fields.iter().all(|f| f.error.is_none()));
}

#[test]
fn test_focus_next_reports_blurred_field() {
    let mut form = sample_form();
    assert_eq!(form.focus_next().as_deref(), Some("title"));
    assert_eq!(form.focused_field().unwrap().name, "description");
    // Wraps around
    assert_eq!(form.focus_next().as_deref(), Some("description"));
    assert_eq!(form.focused_field().unwrap().name, "title");
}

#[test]
fn test_editing_respects_multibyte_characters() {
    let mut form = FormState::new(vec![FieldState::new("title", "Title")]);
    form.insert_char('é');
    form.insert_char('t');
    form.insert_char('é');
    assert_eq!(form.value("title"), "été");

    form.move_left();
    form.backspace();
    assert_eq!(form.value("title"), "éé");

    form.move_right();
    form.backspace();
    assert_eq!(form.value("title"), "é");
}

#[test]
fn test_values_preserve_declaration_order() {
    let mut form = sample_form();
    form.field_mut("description").unwrap().value = "By the shore".to_string();
    form.field_mut("title").unwrap().value = "Seaview".to_string();

    assert_eq!(
        form.values(),
        vec![
            ("title".to_string(), "Seaview".to_string()),
            ("description".to_string(), "By the shore".to_string()),
        ]
    );
}

#[test]
fn test_reset_clears_values_and_errors() {
    let mut form = sample_form();
    form.insert_char('x');
    form.set_error("title", "bad");
    form.focus_next();

    form.reset();
    assert_eq!(form.value("title"), "");
    assert!(form.field("title").unwrap().error.is_none());
    assert_eq!(form.focused, 0);
}
