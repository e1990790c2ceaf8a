use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;

use estatelist::forms::UsernameStatus;
use estatelist::ui::components::DialogComponent;
use estatelist::ui::core::{
    actions::{Action, DeleteTarget, DialogType},
    Component,
};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(dialog: &mut DialogComponent, text: &str) {
    for c in text.chars() {
        dialog.handle_key_events(key(KeyCode::Char(c)));
    }
}

fn open(dialog: &mut DialogComponent, dialog_type: DialogType) {
    dialog.update(Action::ShowDialog(dialog_type));
    assert!(dialog.is_visible());
}

#[test]
fn test_registration_blur_triggers_username_check() {
    let mut dialog = DialogComponent::new();
    open(&mut dialog, DialogType::Registration);

    type_text(&mut dialog, "alice");
    let action = dialog.handle_key_events(key(KeyCode::Tab));

    match action {
        Action::CheckUsername(username) => assert_eq!(username, "alice"),
        other => panic!("expected CheckUsername, got {:?}", other),
    }
}

#[test]
fn test_taken_username_blocks_submission_even_with_matching_passwords() {
    let mut dialog = DialogComponent::new();
    open(&mut dialog, DialogType::Registration);

    type_text(&mut dialog, "alice");
    dialog.handle_key_events(key(KeyCode::Tab));
    type_text(&mut dialog, "hunter22");
    dialog.handle_key_events(key(KeyCode::Tab));
    type_text(&mut dialog, "hunter22");

    // Submit while the check is in flight parks the submission
    let action = dialog.handle_key_events(key(KeyCode::Enter));
    assert!(matches!(action, Action::None));

    // The check resolves to taken: toast, no submission
    let action = dialog.update(Action::UsernameChecked {
        username: "alice".to_string(),
        status: UsernameStatus::Taken,
    });
    assert!(matches!(action, Action::ShowToast { .. }));

    // Further submits stay blocked
    let action = dialog.handle_key_events(key(KeyCode::Enter));
    assert!(matches!(action, Action::ShowToast { .. }));
}

#[test]
fn test_available_username_resumes_parked_submission() {
    let mut dialog = DialogComponent::new();
    open(&mut dialog, DialogType::Registration);

    type_text(&mut dialog, "bob");
    dialog.handle_key_events(key(KeyCode::Tab));
    type_text(&mut dialog, "hunter22");
    dialog.handle_key_events(key(KeyCode::Tab));
    type_text(&mut dialog, "hunter22");

    let action = dialog.handle_key_events(key(KeyCode::Enter));
    assert!(matches!(action, Action::None));

    let action = dialog.update(Action::UsernameChecked {
        username: "bob".to_string(),
        status: UsernameStatus::Available,
    });

    match action {
        Action::SubmitRegistration { fields } => {
            assert!(fields.contains(&("username".to_string(), "bob".to_string())));
            assert!(fields.contains(&("password1".to_string(), "hunter22".to_string())));
        }
        other => panic!("expected SubmitRegistration, got {:?}", other),
    }
}

#[test]
fn test_password_mismatch_blocks_submission_with_a_toast() {
    let mut dialog = DialogComponent::new();
    open(&mut dialog, DialogType::Registration);

    type_text(&mut dialog, "carol");
    dialog.handle_key_events(key(KeyCode::Tab));
    type_text(&mut dialog, "hunter22");
    dialog.handle_key_events(key(KeyCode::Tab));
    type_text(&mut dialog, "different");

    let action = dialog.handle_key_events(key(KeyCode::Enter));
    match action {
        Action::ShowToast { message, .. } => assert_eq!(message, "Passwords do not match"),
        other => panic!("expected mismatch toast, got {:?}", other),
    }
}

#[test]
fn test_empty_confirmation_blocks_submission_silently() {
    let mut dialog = DialogComponent::new();
    open(&mut dialog, DialogType::Registration);

    type_text(&mut dialog, "dave");
    dialog.handle_key_events(key(KeyCode::Tab));
    type_text(&mut dialog, "hunter22");
    // Confirmation left empty

    let action = dialog.handle_key_events(key(KeyCode::Enter));
    assert!(matches!(action, Action::None));
}

#[test]
fn test_stale_username_replies_are_ignored() {
    let mut dialog = DialogComponent::new();
    open(&mut dialog, DialogType::Registration);

    type_text(&mut dialog, "eve");

    // A reply for an older value of the field changes nothing
    let action = dialog.update(Action::UsernameChecked {
        username: "ev".to_string(),
        status: UsernameStatus::Taken,
    });
    assert!(matches!(action, Action::None));
}

#[test]
fn test_invitation_dialog_submits_email() {
    let mut dialog = DialogComponent::new();
    open(&mut dialog, DialogType::Invitation);

    type_text(&mut dialog, "new.tenant@example.com");
    let action = dialog.handle_key_events(key(KeyCode::Enter));

    match action {
        Action::SendInvitation { email } => assert_eq!(email, "new.tenant@example.com"),
        other => panic!("expected SendInvitation, got {:?}", other),
    }
}

#[test]
fn test_invitation_dialog_ignores_empty_submit() {
    let mut dialog = DialogComponent::new();
    open(&mut dialog, DialogType::Invitation);

    let action = dialog.handle_key_events(key(KeyCode::Enter));
    assert!(matches!(action, Action::None));
}

#[test]
fn test_upload_dialog_splits_paths() {
    let mut dialog = DialogComponent::new();
    open(&mut dialog, DialogType::Upload);

    type_text(&mut dialog, "/tmp/a.png /tmp/b.jpg");
    let action = dialog.handle_key_events(key(KeyCode::Enter));

    match action {
        Action::UploadImages(paths) => {
            assert_eq!(paths, vec![PathBuf::from("/tmp/a.png"), PathBuf::from("/tmp/b.jpg")]);
        }
        other => panic!("expected UploadImages, got {:?}", other),
    }
}

#[test]
fn test_delete_confirmation_enter_confirms_escape_cancels() {
    let mut dialog = DialogComponent::new();
    open(
        &mut dialog,
        DialogType::DeleteConfirmation {
            target: DeleteTarget::Image { image_id: 9 },
            prompt: "Are you sure you want to delete this image?".to_string(),
        },
    );

    let action = dialog.handle_key_events(key(KeyCode::Enter));
    assert!(matches!(action, Action::DeleteImage(9)));

    let action = dialog.handle_key_events(key(KeyCode::Esc));
    assert!(matches!(action, Action::HideDialog));
}

#[test]
fn test_server_field_errors_replace_previous_marks() {
    let mut dialog = DialogComponent::new();
    open(
        &mut dialog,
        DialogType::PropertyEdit {
            title: "Seaview".to_string(),
            description: "".to_string(),
        },
    );

    let mut errors = std::collections::HashMap::new();
    errors.insert("title".to_string(), "Title is required".to_string());
    let action = dialog.update(Action::FormRejected {
        message: None,
        errors,
    });
    assert!(matches!(action, Action::None));
}
